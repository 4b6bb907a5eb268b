use std::collections::BTreeMap;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::Activity;
use crate::store::seed;

/// The full activity mapping, keyed by activity name.
pub type Catalog = BTreeMap<String, Activity>;

/// Owner of the mutable activity catalog.
///
/// Pure data holder: no enrollment rules live here. Callers that need a
/// check-then-mutate sequence take the write guard for the whole sequence.
#[derive(Debug)]
pub struct CatalogStore {
    activities: RwLock<Catalog>,
}

impl CatalogStore {
    /// Store seeded with the fixed school catalog.
    pub fn new() -> Self {
        Self::from_catalog(seed::seed_catalog())
    }

    /// Store over an explicit catalog. Tests build throwaway stores with this.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            activities: RwLock::new(catalog),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.activities.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.activities.write().await
    }

    /// Clone of the full mapping for listing.
    pub async fn snapshot(&self) -> Catalog {
        self.activities.read().await.clone()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
