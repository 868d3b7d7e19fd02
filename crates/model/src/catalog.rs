use std::{collections::HashSet, error, fmt, fs, io, path::Path};

use indexmap::IndexMap;
use utility::geo::{is_valid_latitude, is_valid_longitude};

use crate::campus::{Campus, SubLocation};

#[derive(Debug)]
pub enum CatalogError {
    EmptyCampusName,
    EmptySubLocationName { campus: String },
    DuplicateCampus(String),
    DuplicateSubLocation { campus: String, name: String },
    InvalidCoordinates {
        campus: String,
        name: String,
        latitude: f64,
        longitude: f64,
    },
    Json(serde_json::Error),
    Io(io::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCampusName => write!(f, "campus without a name"),
            Self::EmptySubLocationName { campus } => {
                write!(f, "sub-location without a name in campus '{campus}'")
            }
            Self::DuplicateCampus(name) => write!(f, "duplicate campus '{name}'"),
            Self::DuplicateSubLocation { campus, name } => {
                write!(f, "duplicate sub-location '{name}' in campus '{campus}'")
            }
            Self::InvalidCoordinates {
                campus,
                name,
                latitude,
                longitude,
            } => write!(
                f,
                "invalid coordinates {latitude},{longitude} for '{name}' in campus '{campus}'"
            ),
            Self::Json(why) => write!(f, "malformed catalog: {why}"),
            Self::Io(why) => write!(f, "can not read catalog: {why}"),
        }
    }
}

impl error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Json(why) => Some(why),
            Self::Io(why) => Some(why),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<io::Error> for CatalogError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// All known campuses in declaration order. A catalog is built once and never
/// changes afterwards, so it can be shared by reference between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    // Index map keeps the declaration order while allowing lookups by name.
    campuses: IndexMap<String, Campus>,
}

impl Catalog {
    pub fn new(campuses: Vec<Campus>) -> Result<Self> {
        let mut by_name = IndexMap::with_capacity(campuses.len());
        for campus in campuses {
            validate_campus(&campus)?;
            if by_name.contains_key(&campus.name) {
                return Err(CatalogError::DuplicateCampus(campus.name));
            }
            by_name.insert(campus.name.clone(), campus);
        }
        Ok(Self { campuses: by_name })
    }

    /// Expects a json array of campuses.
    pub fn from_json(json: &str) -> Result<Self> {
        let campuses: Vec<Campus> = serde_json::from_str(json)?;
        Self::new(campuses)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The campuses the admin screen seeds by default.
    pub fn builtin() -> Self {
        let mvgr = Campus::new(
            "MVGR College",
            vec![
                SubLocation::new("Mechanical Block", 18.06035, 83.40407),
                SubLocation::new("ECE Block", 18.0601, 83.40469),
                SubLocation::new("CSE Block", 18.06094, 83.40532),
                SubLocation::new("Data Engineering Block", 18.06189, 83.40395),
                SubLocation::new("Civil Block", 18.06108, 83.40532),
            ],
        );
        let gvpce = Campus::new(
            "GVPCE College",
            vec![
                SubLocation::new("Civil Block", 17.8203, 83.3428),
                SubLocation::new("Chemical Block", 17.8205, 83.3425),
                SubLocation::new("Canteen", 17.8209, 83.3418),
                SubLocation::new("EEE Block", 17.8213, 83.3415),
                SubLocation::new("ECE Block", 17.8215, 83.3412),
                SubLocation::new("CSE Block", 17.8213, 83.3411),
                SubLocation::new("Admin Block", 17.8215, 83.3413),
                SubLocation::new("IT Block", 17.8211, 83.3415),
                SubLocation::new("Mechanical Block", 17.8207, 83.3426),
            ],
        );
        Self {
            campuses: [mvgr, gvpce]
                .into_iter()
                .map(|campus| (campus.name.clone(), campus))
                .collect(),
        }
    }

    pub fn campuses(&self) -> impl Iterator<Item = &Campus> {
        self.campuses.values()
    }

    /// Exact, case sensitive lookup.
    pub fn campus(&self, name: &str) -> Option<&Campus> {
        self.campuses.get(name)
    }

    pub fn campus_names(&self) -> impl Iterator<Item = &str> {
        self.campuses.keys().map(String::as_str)
    }

    pub fn sub_location_count(&self) -> usize {
        self.campuses()
            .map(|campus| campus.sub_locations.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.campuses.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_campus(campus: &Campus) -> Result<()> {
    if campus.name.trim().is_empty() {
        return Err(CatalogError::EmptyCampusName);
    }
    let mut names = HashSet::new();
    for sub_location in &campus.sub_locations {
        if sub_location.name.trim().is_empty() {
            return Err(CatalogError::EmptySubLocationName {
                campus: campus.name.clone(),
            });
        }
        if !is_valid_latitude(sub_location.latitude)
            || !is_valid_longitude(sub_location.longitude)
        {
            return Err(CatalogError::InvalidCoordinates {
                campus: campus.name.clone(),
                name: sub_location.name.clone(),
                latitude: sub_location.latitude,
                longitude: sub_location.longitude,
            });
        }
        if !names.insert(sub_location.name.as_str()) {
            return Err(CatalogError::DuplicateSubLocation {
                campus: campus.name.clone(),
                name: sub_location.name.clone(),
            });
        }
    }
    Ok(())
}
