use std::{error, fmt};

pub mod builder;
pub mod id;
pub mod seeder;
pub mod store;

pub use builder::{LocationSeedBuilder, DEFAULT_USE_PREFIX};
pub use seeder::{SeedReport, SeedRequest, Seeder};

/// Which campuses a seeding run covers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CampusSelection {
    #[default]
    All,
    Campus(String),
}

impl CampusSelection {
    /// `None` and blank names select every campus.
    pub fn from_name<S: Into<String>>(name: Option<S>) -> Self {
        match name.map(Into::into) {
            Some(name) if !name.trim().is_empty() => Self::Campus(name),
            _ => Self::All,
        }
    }
}

impl fmt::Display for CampusSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all campuses"),
            Self::Campus(name) => write!(f, "campus '{name}'"),
        }
    }
}

#[derive(Debug)]
pub enum SeedError {
    Store(store::StoreError),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(why) => write!(f, "initialization failed: {why}"),
        }
    }
}

impl error::Error for SeedError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Store(why) => Some(why),
        }
    }
}

impl From<store::StoreError> for SeedError {
    fn from(value: store::StoreError) -> Self {
        Self::Store(value)
    }
}

pub type SeedResult<O> = Result<O, SeedError>;
