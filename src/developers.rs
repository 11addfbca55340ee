//! Developer service: the five registry operations and the tax rule.

use std::sync::Arc;

use tracing::debug;

use crate::models::{CreateDeveloper, Developer};
use crate::registry::DeveloperRegistry;
use crate::tax::{TaxRates, apply_deduction};

/// Owns the registry and applies the tax deduction at creation time.
///
/// Every operation is synchronous and safe to call from concurrent
/// handlers; the registry serializes same-key writes.
pub struct DeveloperService {
    registry: DeveloperRegistry,
    taxes: Arc<dyn TaxRates>,
}

impl DeveloperService {
    pub fn new(registry: DeveloperRegistry, taxes: Arc<dyn TaxRates>) -> Self {
        Self { registry, taxes }
    }

    /// Snapshot of all registered developers, in no guaranteed order.
    pub fn list(&self) -> Vec<Developer> {
        self.registry.list()
    }

    /// Look up a developer by id.
    pub fn get(&self, id: i64) -> Option<Developer> {
        self.registry.get(id)
    }

    /// Register a developer, deducting the tax for their experience level
    /// from the gross salary. Overwrites any existing entry at the same id.
    pub fn create(&self, input: CreateDeveloper) -> Developer {
        let rate = self.taxes.rate_for(input.experience);
        let developer = Developer {
            id: input.id,
            name: input.name,
            salary: apply_deduction(input.salary, rate),
            experience: input.experience,
        };

        self.registry.insert(developer.id, developer.clone());
        debug!(
            id = developer.id,
            experience = developer.experience.as_tag(),
            "registered developer"
        );

        developer
    }

    /// Store `developer` at `id` unconditionally, creating the entry if
    /// absent. The salary is stored verbatim: tax is deducted at creation
    /// only, never recomputed on update.
    pub fn upsert(&self, id: i64, developer: Developer) -> Developer {
        self.registry.insert(id, developer.clone());
        debug!(id, "stored developer");
        developer
    }

    /// Remove the entry at `id`. No-op when absent.
    pub fn remove(&self, id: i64) {
        if self.registry.remove(id).is_some() {
            debug!(id, "removed developer");
        }
    }

    /// Number of registered developers.
    pub fn count(&self) -> usize {
        self.registry.len()
    }
}

impl std::fmt::Debug for DeveloperService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeveloperService")
            .field("registry", &self.registry)
            .finish()
    }
}
