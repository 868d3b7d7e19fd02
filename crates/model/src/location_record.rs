use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

pub const DEFAULT_HEADING: &str = "0.0";
pub const PREFIX_SEPARATOR: &str = " - ";

/// A flattened sub-location, ready to be handed to a location store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub id: Id<LocationRecord>,
    pub display_name: String,
    /// `latitude,longitude`
    pub coordinate_string: String,
    /// Azimuth placeholder, always [`DEFAULT_HEADING`] for generated records.
    pub heading: String,
    pub description: String,
    pub image_url: String,
}

impl HasId for LocationRecord {
    type IdType = i64;
}

/// `<prefix> - <name>`, or just the name for an empty prefix.
pub fn prefixed_name(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}{PREFIX_SEPARATOR}{name}")
    }
}
