//! In-memory developer registry.

use dashmap::DashMap;

use crate::models::Developer;

/// Concurrent id → Developer store.
///
/// DashMap gives atomic per-key insert/get/remove; concurrent writers to
/// the same key race and the later write wins. No cross-key coordination.
pub struct DeveloperRegistry {
    entries: DashMap<i64, Developer>,
}

impl Default for DeveloperRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DeveloperRegistry {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Snapshot of all current developers, in no guaranteed order.
    pub fn list(&self) -> Vec<Developer> {
        self.entries.iter().map(|e| e.value().clone()).collect()
    }

    /// Look up the developer stored at `id`.
    pub fn get(&self, id: i64) -> Option<Developer> {
        self.entries.get(&id).map(|e| e.value().clone())
    }

    /// Store `developer` at `id`, overwriting any existing entry.
    ///
    /// The key is explicit: update stores the body under the path id even
    /// when the body carries a different `id` field.
    pub fn insert(&self, id: i64, developer: Developer) {
        self.entries.insert(id, developer);
    }

    /// Remove the entry at `id`, returning it if present.
    pub fn remove(&self, id: i64) -> Option<Developer> {
        self.entries.remove(&id).map(|(_, developer)| developer)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for DeveloperRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeveloperRegistry")
            .field("entries", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::models::Experience;

    fn developer(id: i64, salary: f64) -> Developer {
        Developer {
            id,
            name: format!("dev-{id}"),
            salary,
            experience: Experience::Junior,
        }
    }

    #[test]
    fn insert_and_get() {
        let registry = DeveloperRegistry::new();
        registry.insert(1, developer(1, 900.0));

        let stored = registry.get(1).unwrap();
        assert_eq!(stored.id, 1);
        assert_eq!(stored.salary, 900.0);
        assert!(registry.get(2).is_none());
    }

    #[test]
    fn insert_overwrites_existing_key() {
        let registry = DeveloperRegistry::new();
        registry.insert(1, developer(1, 900.0));
        registry.insert(1, developer(1, 450.0));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(1).unwrap().salary, 450.0);
    }

    #[test]
    fn remove_is_none_when_absent() {
        let registry = DeveloperRegistry::new();
        registry.insert(1, developer(1, 900.0));

        assert!(registry.remove(1).is_some());
        assert!(registry.remove(1).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn list_snapshots_all_entries() {
        let registry = DeveloperRegistry::new();
        registry.insert(1, developer(1, 900.0));
        registry.insert(2, developer(2, 700.0));

        let mut ids: Vec<i64> = registry.list().into_iter().map(|d| d.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);
    }
}
