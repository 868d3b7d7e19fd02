use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::geo::{self, haversine_distance};

use crate::WithDistance;

/// A named point of interest on a campus, e.g. a building or the canteen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl SubLocation {
    pub fn new<S: Into<String>>(name: S, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    pub fn coordinate_string(&self) -> String {
        geo::coordinate_string(self.latitude, self.longitude)
    }

    /// `<name> at <latitude>, <longitude>`
    pub fn description(&self) -> String {
        format!(
            "{} at {}, {}",
            self.name,
            geo::format_degrees(self.latitude),
            geo::format_degrees(self.longitude)
        )
    }

    pub fn distance_to(&self, latitude: f64, longitude: f64) -> f64 {
        haversine_distance(self.latitude, self.longitude, latitude, longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Campus {
    pub name: String,
    pub sub_locations: Vec<SubLocation>,
}

impl Campus {
    pub fn new<S: Into<String>>(name: S, sub_locations: Vec<SubLocation>) -> Self {
        Self {
            name: name.into(),
            sub_locations,
        }
    }

    pub fn sub_location(&self, name: &str) -> Option<&SubLocation> {
        self.sub_locations
            .iter()
            .find(|sub_location| sub_location.name == name)
    }

    /// The sub-location closest to the given point, if the campus has any.
    pub fn nearest(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Option<WithDistance<&SubLocation>> {
        self.sub_locations
            .iter()
            .map(|sub_location| {
                WithDistance::new(
                    sub_location.distance_to(latitude, longitude),
                    sub_location,
                )
            })
            .min_by(|a, b| a.distance_km.total_cmp(&b.distance_km))
    }
}
