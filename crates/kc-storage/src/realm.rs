//! Handle to a single realm's storage providers.

use uuid::Uuid;

use crate::group::GroupProvider;
use crate::role::RoleProvider;
use crate::user::UserProvider;

/// Borrowed view of the providers backing one realm.
///
/// Every operation made through the handle is scoped to `realm_id`.
#[derive(Clone, Copy)]
pub struct RealmHandle<'a> {
    /// Realm the handle is scoped to.
    pub realm_id: Uuid,
    /// User storage.
    pub users: &'a dyn UserProvider,
    /// Role storage.
    pub roles: &'a dyn RoleProvider,
    /// Group storage.
    pub groups: &'a dyn GroupProvider,
}

impl<'a> RealmHandle<'a> {
    /// Creates a handle from individual providers.
    #[must_use]
    pub fn new(
        realm_id: Uuid,
        users: &'a dyn UserProvider,
        roles: &'a dyn RoleProvider,
        groups: &'a dyn GroupProvider,
    ) -> Self {
        Self {
            realm_id,
            users,
            roles,
            groups,
        }
    }
}

impl std::fmt::Debug for RealmHandle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RealmHandle")
            .field("realm_id", &self.realm_id)
            .finish_non_exhaustive()
    }
}
