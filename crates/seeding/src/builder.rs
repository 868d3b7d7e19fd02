use model::{
    campus::{Campus, SubLocation},
    catalog::Catalog,
    location_record::{prefixed_name, LocationRecord, DEFAULT_HEADING},
};

use crate::{
    id::{IdGenerator, TimestampHashIds},
    CampusSelection,
};

pub const DEFAULT_USE_PREFIX: bool = true;

/// Flattens a [`Catalog`] into [`LocationRecord`]s.
///
/// Records come out in catalog order, and within a campus in the order its
/// sub-locations were declared. The catalog is only ever read.
pub struct LocationSeedBuilder<'a, G = TimestampHashIds> {
    catalog: &'a Catalog,
    ids: G,
}

impl<'a> LocationSeedBuilder<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_ids(catalog, TimestampHashIds::new())
    }
}

impl<'a, G> LocationSeedBuilder<'a, G>
where
    G: IdGenerator,
{
    pub fn with_ids(catalog: &'a Catalog, ids: G) -> Self {
        Self { catalog, ids }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// An empty `campus_prefix` leaves the display name untouched.
    pub fn to_record(
        &self,
        sub_location: &SubLocation,
        campus_prefix: &str,
    ) -> LocationRecord {
        LocationRecord {
            id: self.ids.next_id(sub_location),
            display_name: prefixed_name(campus_prefix, &sub_location.name),
            coordinate_string: sub_location.coordinate_string(),
            heading: DEFAULT_HEADING.to_owned(),
            description: sub_location.description(),
            image_url: String::new(),
        }
    }

    pub fn to_unprefixed_record(&self, sub_location: &SubLocation) -> LocationRecord {
        self.to_record(sub_location, "")
    }

    pub fn all_records(&self, use_prefix: bool) -> Vec<LocationRecord> {
        let mut records = Vec::with_capacity(self.catalog.sub_location_count());
        for campus in self.catalog.campuses() {
            records.extend(self.campus_records(campus, use_prefix));
        }
        records
    }

    /// Unknown campus names yield no records.
    pub fn records_for_campus(
        &self,
        campus_name: &str,
        use_prefix: bool,
    ) -> Vec<LocationRecord> {
        self.catalog
            .campus(campus_name)
            .map(|campus| self.campus_records(campus, use_prefix))
            .unwrap_or_default()
    }

    pub fn records_for(
        &self,
        selection: &CampusSelection,
        use_prefix: bool,
    ) -> Vec<LocationRecord> {
        match selection {
            CampusSelection::All => self.all_records(use_prefix),
            CampusSelection::Campus(name) => self.records_for_campus(name, use_prefix),
        }
    }

    fn campus_records(&self, campus: &Campus, use_prefix: bool) -> Vec<LocationRecord> {
        let prefix = if use_prefix { campus.name.as_str() } else { "" };
        campus
            .sub_locations
            .iter()
            .map(|sub_location| self.to_record(sub_location, prefix))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use model::location_record::PREFIX_SEPARATOR;

    use super::*;
    use crate::id::SequentialIds;

    #[test]
    fn first_mvgr_record() {
        let catalog = Catalog::builtin();
        let builder = LocationSeedBuilder::new(&catalog);
        let records = builder.records_for_campus("MVGR College", true);
        let first = &records[0];
        assert_eq!(first.display_name, "MVGR College - Mechanical Block");
        assert_eq!(first.coordinate_string, "18.06035,83.40407");
        assert_eq!(first.description, "Mechanical Block at 18.06035, 83.40407");
        assert_eq!(first.heading, "0.0");
        assert_eq!(first.image_url, "");
    }

    #[test]
    fn campus_records_follow_declaration_order() {
        let catalog = Catalog::builtin();
        let builder = LocationSeedBuilder::new(&catalog);
        for campus in catalog.campuses() {
            for use_prefix in [true, false] {
                let records = builder.records_for_campus(&campus.name, use_prefix);
                assert_eq!(records.len(), campus.sub_locations.len());
                for (record, sub_location) in records.iter().zip(&campus.sub_locations) {
                    assert_eq!(record.coordinate_string, sub_location.coordinate_string());
                    assert!(record.display_name.ends_with(&sub_location.name));
                }
            }
        }
    }

    #[test]
    fn all_records_cover_catalog() {
        let catalog = Catalog::builtin();
        let builder = LocationSeedBuilder::new(&catalog);
        for use_prefix in [true, false] {
            assert_eq!(builder.all_records(use_prefix).len(), 14);
        }

        let expected: Vec<String> = catalog
            .campuses()
            .flat_map(|campus| {
                campus
                    .sub_locations
                    .iter()
                    .map(move |block| format!("{} - {}", campus.name, block.name))
            })
            .collect();
        let names: Vec<String> = builder
            .all_records(true)
            .into_iter()
            .map(|record| record.display_name)
            .collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn prefix_flag_controls_display_name() {
        let catalog = Catalog::builtin();
        let builder = LocationSeedBuilder::new(&catalog);
        for campus in catalog.campuses() {
            let marker = format!("{}{}", campus.name, PREFIX_SEPARATOR);
            for record in builder.records_for_campus(&campus.name, true) {
                assert!(record.display_name.starts_with(&marker));
            }
            for record in builder.records_for_campus(&campus.name, false) {
                assert!(!record.display_name.contains(PREFIX_SEPARATOR));
            }
        }
    }

    #[test]
    fn unknown_campus_is_empty() {
        let catalog = Catalog::builtin();
        let builder = LocationSeedBuilder::new(&catalog);
        assert!(builder.records_for_campus("NonexistentName", true).is_empty());
        assert!(builder.records_for_campus("mvgr college", false).is_empty());
        assert!(builder
            .records_for(&CampusSelection::Campus("Nowhere".to_owned()), true)
            .is_empty());
    }

    #[test]
    fn explicit_prefix_and_defaults() {
        let catalog = Catalog::builtin();
        let builder = LocationSeedBuilder::new(&catalog);
        let canteen = catalog
            .campus("GVPCE College")
            .and_then(|campus| campus.sub_location("Canteen"))
            .unwrap();
        assert_eq!(builder.to_unprefixed_record(canteen).display_name, "Canteen");
        assert_eq!(
            builder.to_record(canteen, "Main").display_name,
            "Main - Canteen"
        );
        assert_eq!(
            builder.to_record(canteen, "").description,
            "Canteen at 17.8209, 83.3418"
        );
    }

    #[test]
    fn colliding_ids_within_one_millisecond() {
        let catalog = Catalog::builtin();
        let builder =
            LocationSeedBuilder::with_ids(&catalog, TimestampHashIds::with_clock(|| 1_000));
        let first = builder.all_records(true);
        let second = builder.all_records(true);
        assert_eq!(
            first.iter().map(|r| r.id).collect::<Vec<_>>(),
            second.iter().map(|r| r.id).collect::<Vec<_>>()
        );
        // block names shared by both campuses share an id as well
        let distinct: HashSet<i64> = first.iter().map(|r| r.id.raw()).collect();
        assert_eq!(distinct.len(), 10);
    }

    #[test]
    fn sequential_ids_are_unique() {
        let catalog = Catalog::builtin();
        let builder = LocationSeedBuilder::with_ids(&catalog, SequentialIds::default());
        let ids: HashSet<i64> = builder
            .all_records(true)
            .iter()
            .map(|record| record.id.raw())
            .collect();
        assert_eq!(ids.len(), 14);
    }

    #[test]
    fn catalog_is_untouched() {
        let catalog = Catalog::builtin();
        let builder = LocationSeedBuilder::new(&catalog);
        let _ = builder.all_records(true);
        assert_eq!(builder.catalog(), &Catalog::builtin());
    }
}
