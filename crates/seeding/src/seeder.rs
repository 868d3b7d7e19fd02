use std::{collections::HashSet, sync::Arc};

use model::{catalog::Catalog, location_record::LocationRecord};

use crate::{
    builder::{LocationSeedBuilder, DEFAULT_USE_PREFIX},
    id::{IdGenerator, TimestampHashIds},
    store::LocationStore,
    CampusSelection, SeedError, SeedResult,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRequest {
    pub selection: CampusSelection,
    pub use_prefix: bool,
}

impl SeedRequest {
    pub fn all() -> Self {
        Self {
            selection: CampusSelection::All,
            use_prefix: DEFAULT_USE_PREFIX,
        }
    }

    pub fn campus<S: Into<String>>(name: S) -> Self {
        Self {
            selection: CampusSelection::Campus(name.into()),
            use_prefix: DEFAULT_USE_PREFIX,
        }
    }

    pub fn with_prefix(self, use_prefix: bool) -> Self {
        Self { use_prefix, ..self }
    }
}

impl Default for SeedRequest {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub selection: CampusSelection,
    pub generated: usize,
    pub inserted: usize,
    /// Records whose id was already used by an earlier record of the run.
    pub duplicate_ids: usize,
}

impl SeedReport {
    pub fn is_success(&self) -> bool {
        self.inserted == self.generated
    }
}

/// Generates location records for a selection of campuses and hands them to
/// a [`LocationStore`].
pub struct Seeder<S> {
    catalog: Arc<Catalog>,
    ids: Box<dyn IdGenerator>,
    store: S,
}

impl<S> Seeder<S>
where
    S: LocationStore,
{
    pub fn new<C: Into<Arc<Catalog>>>(catalog: C, store: S) -> Self {
        Self {
            catalog: catalog.into(),
            ids: Box::new(TimestampHashIds::new()),
            store,
        }
    }

    pub fn with_ids<G: IdGenerator + 'static>(self, ids: G) -> Self {
        Self {
            ids: Box::new(ids),
            ..self
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The records a [`Seeder::seed`] call would write, without writing them.
    pub fn records(&self, request: &SeedRequest) -> Vec<LocationRecord> {
        LocationSeedBuilder::with_ids(&self.catalog, &self.ids)
            .records_for(&request.selection, request.use_prefix)
    }

    pub async fn seed(&self, request: SeedRequest) -> SeedResult<SeedReport> {
        log::info!("seeding locations for {}...", request.selection);
        let records = self.records(&request);
        let generated = records.len();
        let duplicate_ids = count_duplicate_ids(&records);

        if records.is_empty() {
            log::warn!("no locations found for {}", request.selection);
            return Ok(SeedReport {
                selection: request.selection,
                generated,
                inserted: 0,
                duplicate_ids,
            });
        }
        if duplicate_ids > 0 {
            log::warn!(
                "{} of {} generated location ids collide",
                duplicate_ids,
                generated
            );
        }

        let inserted = self.store.insert_all(records).await.map_err(|why| {
            log::error!("seeding {} failed: {}", request.selection, why);
            SeedError::from(why)
        })?;
        log::info!("inserted {} of {} locations", inserted, generated);

        Ok(SeedReport {
            selection: request.selection,
            generated,
            inserted,
            duplicate_ids,
        })
    }
}

fn count_duplicate_ids(records: &[LocationRecord]) -> usize {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .iter()
        .filter(|record| !seen.insert(record.id.raw()))
        .count()
}
