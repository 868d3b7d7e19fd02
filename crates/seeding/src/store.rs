use std::{error, fmt, result};

use async_trait::async_trait;
use model::location_record::LocationRecord;
use tokio::sync::Mutex;

#[derive(Debug)]
pub enum StoreError {
    Rejected(String),
    Other(Box<dyn error::Error + Send + Sync>),
}

impl StoreError {
    pub fn other<T: error::Error + Send + Sync + 'static>(why: T) -> Self {
        Self::Other(Box::new(why))
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(reason) => write!(f, "store rejected records: {reason}"),
            Self::Other(why) => write!(f, "{why}"),
        }
    }
}

impl error::Error for StoreError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Rejected(_) => None,
            Self::Other(why) => Some(why.as_ref()),
        }
    }
}

pub type Result<T> = result::Result<T, StoreError>;

/// Where seeded location records end up.
#[async_trait]
pub trait LocationStore: Send + Sync {
    /// Stores all records and returns how many were written.
    async fn insert_all(&self, records: Vec<LocationRecord>) -> Result<usize>;

    async fn count(&self) -> Result<usize>;
}

/// Keeps records in memory, in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<LocationRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn records(&self) -> Vec<LocationRecord> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl LocationStore for MemoryStore {
    async fn insert_all(&self, records: Vec<LocationRecord>) -> Result<usize> {
        let inserted = records.len();
        self.records.lock().await.extend(records);
        Ok(inserted)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.records.lock().await.len())
    }
}
