//! Per-realm serialization of find-or-create sequences.
//!
//! Group stores allow several groups with the same name at one level, so a
//! lookup followed by a create is not atomic on its own. Every resolver that
//! materializes groups in a realm takes that realm's lock first; resolvers
//! sharing one [`RealmLocks`] therefore never create the same path twice.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use uuid::Uuid;

/// Registry of one mutex per realm.
#[derive(Debug, Default)]
pub struct RealmLocks {
    locks: DashMap<Uuid, Arc<Mutex<()>>>,
}

impl RealmLocks {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry ready to be shared between resolvers.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Returns the lock guarding `realm_id`, creating it on first use.
    #[must_use]
    pub fn lock_for(&self, realm_id: Uuid) -> Arc<Mutex<()>> {
        Arc::clone(self.locks.entry(realm_id).or_default().value())
    }

    /// Runs `f` while holding the realm's lock.
    pub fn with_realm<T>(&self, realm_id: Uuid, f: impl FnOnce() -> T) -> T {
        let lock = self.lock_for(realm_id);
        let _guard = lock.lock();
        f()
    }

    /// Number of realms that have been locked at least once.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    /// Returns true if no realm has been locked yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
