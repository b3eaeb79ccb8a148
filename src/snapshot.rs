// src/snapshot.rs

use chrono::{DateTime, NaiveDate, Utc};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::collisions::{scan_portfolio_collisions_with_limit, watch_property_matching};
use crate::models::{CriticalDay, PriorityWatch, Property, Reservation, SnapshotInfo};

/// Immutable view of the store at one point in time.
#[derive(Debug)]
pub struct Snapshot {
    pub version: u64,
    pub fingerprint: String,
    pub loaded_at: DateTime<Utc>,
    pub properties: Vec<Property>,
    pub reservations: Vec<Reservation>,
}

impl Snapshot {
    fn new(version: u64, properties: Vec<Property>, reservations: Vec<Reservation>) -> Self {
        let fingerprint = fingerprint(&properties, &reservations);
        Self { version, fingerprint, loaded_at: Utc::now(), properties, reservations }
    }

    pub fn info(&self) -> SnapshotInfo {
        SnapshotInfo {
            version: self.version,
            fingerprint: self.fingerprint.clone(),
            properties: self.properties.len(),
            reservations: self.reservations.len(),
            loaded_at: self.loaded_at,
        }
    }
}

// canonical hash of the snapshot content
fn fingerprint(properties: &[Property], reservations: &[Reservation]) -> String {
    let mut hasher = Sha256::new();
    // Vec<_> of plain structs always serializes
    if let Ok(bytes) = serde_json::to_vec(&(properties, reservations)) {
        hasher.update(&bytes);
    }
    format!("{:x}", hasher.finalize())
}

/// Per-version cap on memoized keys in each map. Keys past the cap are
/// computed on every call.
pub const MAX_CACHED_PER_VERSION: usize = 32;

// Derived results for one snapshot version; dropped wholesale when the version moves.
#[derive(Debug, Default)]
struct DerivationCache {
    version: u64,
    critical_days: HashMap<(NaiveDate, usize), Vec<CriticalDay>>,
    priority: HashMap<(String, NaiveDate), PriorityWatch>,
}

impl DerivationCache {
    fn align(&mut self, version: u64) {
        if self.version != version {
            self.version = version;
            self.critical_days.clear();
            self.priority.clear();
        }
    }
}

fn insert_bounded<K: std::hash::Hash + Eq, V>(map: &mut HashMap<K, V>, key: K, value: V) {
    if map.len() < MAX_CACHED_PER_VERSION || map.contains_key(&key) {
        map.insert(key, value);
    }
}

/// Holds the current snapshot and memoizes derivations per snapshot version.
///
/// Readers clone the `Arc` and compute outside any lock, so a replacement never
/// races with a derivation pass.
#[derive(Debug)]
pub struct SnapshotStore {
    current: RwLock<Arc<Snapshot>>,
    cache: Mutex<DerivationCache>,
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(Snapshot::new(0, Vec::new(), Vec::new()))),
            cache: Mutex::new(DerivationCache::default()),
        }
    }

    pub fn current(&self) -> Arc<Snapshot> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Swap in a new snapshot. Identical content keeps the current version
    /// (and its cached derivations); returns whether anything changed.
    pub fn replace(&self, properties: Vec<Property>, reservations: Vec<Reservation>) -> (Arc<Snapshot>, bool) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if guard.fingerprint == fingerprint(&properties, &reservations) {
            tracing::debug!(snapshot_version = guard.version, "snapshot unchanged");
            return (Arc::clone(&guard), false);
        }

        let next = Arc::new(Snapshot::new(guard.version + 1, properties, reservations));
        *guard = Arc::clone(&next);
        tracing::info!(
            snapshot_version = next.version,
            properties = next.properties.len(),
            reservations = next.reservations.len(),
            "snapshot replaced"
        );
        (next, true)
    }

    pub fn critical_days(&self, today: NaiveDate, limit: usize) -> Vec<CriticalDay> {
        let snapshot = self.current();
        let key = (today, limit);
        if let Some(hit) = self.cached(snapshot.version, |c| c.critical_days.get(&key).cloned()) {
            return hit;
        }

        let days = scan_portfolio_collisions_with_limit(&snapshot.reservations, today, limit);
        tracing::debug!(snapshot_version = snapshot.version, critical_days = days.len(), "scanned portfolio");
        self.store(snapshot.version, |c| {
            insert_bounded(&mut c.critical_days, key, days.clone());
        });
        days
    }

    pub fn priority_watch(&self, marker: &str, today: NaiveDate) -> PriorityWatch {
        let snapshot = self.current();
        let key = (marker.to_string(), today);
        if let Some(hit) = self.cached(snapshot.version, |c| c.priority.get(&key).cloned()) {
            return hit;
        }

        let watch = watch_property_matching(marker, &snapshot.reservations, &snapshot.properties, today);
        tracing::debug!(
            snapshot_version = snapshot.version,
            matched = watch.property.is_some(),
            clear = watch.is_clear(),
            "evaluated priority watch"
        );
        self.store(snapshot.version, |c| {
            insert_bounded(&mut c.priority, key, watch.clone());
        });
        watch
    }

    fn cached<T>(&self, version: u64, get: impl FnOnce(&DerivationCache) -> Option<T>) -> Option<T> {
        let cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if cache.version != version {
            return None;
        }
        get(&cache)
    }

    fn store(&self, version: u64, put: impl FnOnce(&mut DerivationCache)) {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        // a newer snapshot already owns the cache
        if cache.version > version {
            return;
        }
        cache.align(version);
        put(&mut cache);
    }

    #[cfg(test)]
    fn cached_entries(&self) -> usize {
        let cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache.critical_days.len() + cache.priority.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{day, res};

    fn props() -> Vec<Property> {
        vec![Property { id: "p1".into(), name: "Casa Amplia".into(), internal_name: None }]
    }

    #[test]
    fn starts_empty_at_version_zero() {
        let store = SnapshotStore::new();
        let snap = store.current();
        assert_eq!(snap.version, 0);
        assert!(store.critical_days(day("2024-06-01"), 4).is_empty());
    }

    #[test]
    fn identical_content_keeps_version() {
        let store = SnapshotStore::new();
        let (first, changed) = store.replace(props(), vec![res("r1", "p1", "r1", "2024-06-01", "2024-06-10")]);
        assert!(changed);
        assert_eq!(first.version, 1);

        let (again, changed) = store.replace(props(), vec![res("r1", "p1", "r1", "2024-06-01", "2024-06-10")]);
        assert!(!changed);
        assert_eq!(again.version, 1);
        assert_eq!(again.fingerprint, first.fingerprint);
    }

    #[test]
    fn derivations_are_memoized_per_version() {
        let store = SnapshotStore::new();
        store.replace(props(), vec![res("r1", "p1", "r1", "2024-06-01", "2024-06-10")]);
        let today = day("2024-06-01");

        assert!(store.critical_days(today, 4).is_empty());
        assert!(store.priority_watch("casa amplia", today).is_clear());
        assert_eq!(store.cached_entries(), 2);
        store.critical_days(today, 4);
        assert_eq!(store.cached_entries(), 2);

        store.replace(
            props(),
            vec![res("r1", "p1", "r1", "2024-06-01", "2024-06-10"), res("r2", "p1", "r2", "2024-06-10", "2024-06-12")],
        );
        let days = store.critical_days(today, 4);
        assert_eq!(days.len(), 1);
        assert_eq!(store.cached_entries(), 1);
        assert_eq!(store.priority_watch("casa amplia", today).date, Some(day("2024-06-10")));
    }

    #[test]
    fn readers_keep_their_snapshot_across_replacement() {
        let store = SnapshotStore::new();
        store.replace(props(), vec![res("r1", "p1", "r1", "2024-06-01", "2024-06-10")]);
        let held = store.current();
        store.replace(props(), Vec::new());
        assert_eq!(held.reservations.len(), 1);
        assert_eq!(store.current().reservations.len(), 0);
    }

    #[test]
    fn cache_stays_bounded_under_distinct_queries() {
        let store = SnapshotStore::new();
        store.replace(props(), vec![res("r1", "p1", "r1", "2024-06-01", "2024-06-10")]);
        let today = day("2024-06-01");

        for i in 0..1_000 {
            store.priority_watch(&format!("marker-{i}"), today);
        }
        for i in 0..100 {
            store.critical_days(today + chrono::Duration::days(i), 4);
        }
        assert_eq!(store.cached_entries(), 2 * MAX_CACHED_PER_VERSION);

        // uncached keys still answer correctly
        assert!(store.priority_watch("casa amplia", today).is_clear());
        assert_eq!(store.cached_entries(), 2 * MAX_CACHED_PER_VERSION);
    }
}
