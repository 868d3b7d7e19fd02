use std::sync::atomic::{AtomicI64, Ordering};

use model::{campus::SubLocation, location_record::LocationRecord};
use utility::{hash::stable_hash, id::Id};

/// Hands out ids for generated location records.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self, sub_location: &SubLocation) -> Id<LocationRecord>;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &G {
    fn next_id(&self, sub_location: &SubLocation) -> Id<LocationRecord> {
        (**self).next_id(sub_location)
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&self, sub_location: &SubLocation) -> Id<LocationRecord> {
        (**self).next_id(sub_location)
    }
}

/// Milliseconds since the unix epoch.
pub fn system_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Current time in milliseconds plus the stable hash of the sub-location
/// name.
///
/// Two records with the same name generated within the same millisecond get
/// the same id. Consumers that need collision free ids should use
/// [`SequentialIds`] instead.
pub struct TimestampHashIds {
    clock: Box<dyn Fn() -> i64 + Send + Sync>,
}

impl TimestampHashIds {
    pub fn new() -> Self {
        Self::with_clock(system_millis)
    }

    pub fn with_clock<F>(clock: F) -> Self
    where
        F: Fn() -> i64 + Send + Sync + 'static,
    {
        Self {
            clock: Box::new(clock),
        }
    }
}

impl Default for TimestampHashIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for TimestampHashIds {
    fn next_id(&self, sub_location: &SubLocation) -> Id<LocationRecord> {
        let hash = i64::from(stable_hash(&sub_location.name));
        Id::new((self.clock)().wrapping_add(hash))
    }
}

/// Strictly increasing ids, unique for the lifetime of the generator.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicI64,
}

impl SequentialIds {
    pub fn starting_at(first: i64) -> Self {
        Self {
            next: AtomicI64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self, _sub_location: &SubLocation) -> Id<LocationRecord> {
        Id::new(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    };

    use super::*;

    fn block(name: &str) -> SubLocation {
        SubLocation::new(name, 18.06035, 83.40407)
    }

    #[test]
    fn timestamp_plus_name_hash() {
        let ids = TimestampHashIds::with_clock(|| 1_700_000_000_000);
        assert_eq!(ids.next_id(&block("a")).raw(), 1_700_000_000_000 + 97);
        assert_eq!(
            ids.next_id(&block("Mechanical Block")).raw(),
            1_700_000_000_000 + i64::from(stable_hash("Mechanical Block"))
        );
    }

    #[test]
    fn same_millisecond_same_name_collides() {
        let ids = TimestampHashIds::with_clock(|| 42);
        assert_eq!(
            ids.next_id(&block("Civil Block")),
            ids.next_id(&block("Civil Block"))
        );
        assert_ne!(
            ids.next_id(&block("Civil Block")),
            ids.next_id(&block("CSE Block"))
        );
    }

    #[test]
    fn later_time_changes_id() {
        let now = Arc::new(AtomicI64::new(1_000));
        let clock = now.clone();
        let ids = TimestampHashIds::with_clock(move || clock.load(Ordering::SeqCst));
        let first = ids.next_id(&block("Canteen"));
        now.store(1_001, Ordering::SeqCst);
        let second = ids.next_id(&block("Canteen"));
        assert_eq!(second.raw() - first.raw(), 1);
    }

    #[test]
    fn system_clock_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(system_millis() > 1_577_836_800_000);
    }

    #[test]
    fn sequential_ids_increase() {
        let ids = SequentialIds::starting_at(10);
        let produced: Vec<i64> = (0..5)
            .map(|_| ids.next_id(&block("Canteen")).raw())
            .collect();
        assert_eq!(produced, vec![10, 11, 12, 13, 14]);
    }

    #[test]
    fn boxed_generator_delegates() {
        let ids: Box<dyn IdGenerator> = Box::new(SequentialIds::default());
        assert_eq!(ids.next_id(&block("Gate")).raw(), 1);
        assert_eq!((&ids).next_id(&block("Gate")).raw(), 2);
    }
}
