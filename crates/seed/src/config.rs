use std::{env, error, fmt, path::PathBuf};

use model::catalog::{Catalog, CatalogError};
use seeding::{CampusSelection, SeedRequest, DEFAULT_USE_PREFIX};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdScheme {
    #[default]
    Timestamp,
    Sequential,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { key: &'static str, value: String },
    Catalog(CatalogError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { key, value } => {
                write!(f, "invalid value '{value}' for {key}")
            }
            Self::Catalog(why) => write!(f, "{why}"),
        }
    }
}

impl error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidValue { .. } => None,
            Self::Catalog(why) => Some(why),
        }
    }
}

impl From<CatalogError> for ConfigError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub selection: CampusSelection,
    pub use_prefix: bool,
    pub catalog_path: Option<PathBuf>,
    pub id_scheme: IdScheme,
}

impl SeedConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let selection = CampusSelection::from_name(lookup("SEED_CAMPUS"));
        let use_prefix = match lookup("SEED_USE_PREFIX") {
            Some(value) => parse_bool("SEED_USE_PREFIX", value)?,
            None => DEFAULT_USE_PREFIX,
        };
        let catalog_path = lookup("SEED_CATALOG")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        let id_scheme = match lookup("SEED_ID_SCHEME").as_deref().map(str::trim) {
            None | Some("") | Some("timestamp") => IdScheme::Timestamp,
            Some("sequential") => IdScheme::Sequential,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "SEED_ID_SCHEME",
                    value: other.to_owned(),
                })
            }
        };
        Ok(Self {
            selection,
            use_prefix,
            catalog_path,
            id_scheme,
        })
    }

    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog_path {
            Some(path) => {
                log::info!("loading catalog from {}", path.display());
                Ok(Catalog::from_json_file(path)?)
            }
            None => Ok(Catalog::builtin()),
        }
    }

    pub fn request(&self) -> SeedRequest {
        SeedRequest {
            selection: self.selection.clone(),
            use_prefix: self.use_prefix,
        }
    }
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<SeedConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        SeedConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.selection, CampusSelection::All);
        assert!(config.use_prefix);
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.id_scheme, IdScheme::Timestamp);
        assert_eq!(config.request(), SeedRequest::all());
    }

    #[test]
    fn reads_all_variables() {
        let config = config(&[
            ("SEED_CAMPUS", "MVGR College"),
            ("SEED_USE_PREFIX", "0"),
            ("SEED_CATALOG", "/etc/campus.json"),
            ("SEED_ID_SCHEME", "sequential"),
        ])
        .unwrap();
        assert_eq!(
            config.request(),
            SeedRequest::campus("MVGR College").with_prefix(false)
        );
        assert_eq!(config.catalog_path, Some(PathBuf::from("/etc/campus.json")));
        assert_eq!(config.id_scheme, IdScheme::Sequential);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config(&[("SEED_USE_PREFIX", "maybe")]),
            Err(ConfigError::InvalidValue { key: "SEED_USE_PREFIX", .. })
        ));
        assert!(matches!(
            config(&[("SEED_ID_SCHEME", "uuid")]),
            Err(ConfigError::InvalidValue { key: "SEED_ID_SCHEME", .. })
        ));
    }

    #[test]
    fn builtin_catalog_without_path() {
        let catalog = config(&[]).unwrap().catalog().unwrap();
        assert_eq!(catalog.sub_location_count(), 14);
    }
}
