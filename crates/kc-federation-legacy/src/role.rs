//! Legacy role resolution.

use kc_federation::{FederationResult, RenameTable, Resolution, SkipReason};
use kc_model::Role;
use kc_storage::RealmHandle;

/// Resolves legacy role names to existing realm roles.
///
/// Roles are never created: a name without a matching realm role is skipped.
#[derive(Debug, Clone)]
pub struct RoleResolver {
    renames: RenameTable,
    migrate_unmapped: bool,
}

impl RoleResolver {
    /// Creates a resolver over a rename table.
    #[must_use]
    pub fn new(renames: RenameTable, migrate_unmapped: bool) -> Self {
        Self {
            renames,
            migrate_unmapped,
        }
    }

    /// Resolves one legacy role name.
    ///
    /// ## Errors
    ///
    /// Only storage faults from the role store are returned.
    pub fn resolve(
        &self,
        realm: &RealmHandle<'_>,
        legacy: Option<&str>,
    ) -> FederationResult<Resolution<Role>> {
        let name = match self.renames.translate(legacy, self.migrate_unmapped) {
            Resolution::Resolved(name) => name,
            Resolution::Skipped(reason) => {
                tracing::debug!(role = ?legacy, %reason, "Skipping legacy role");
                return Ok(Resolution::Skipped(reason));
            }
        };

        match realm.roles.get_realm_role_by_name(realm.realm_id, name)? {
            Some(role) => Ok(Resolution::Resolved(role)),
            None => {
                tracing::debug!(role = ?legacy, local = name, "No realm role for legacy role");
                Ok(Resolution::Skipped(SkipReason::NotFound))
            }
        }
    }

    /// Resolves every legacy role name in order, keeping only resolved roles.
    ///
    /// ## Errors
    ///
    /// Only storage faults from the role store are returned.
    pub fn resolve_all<'n>(
        &self,
        realm: &RealmHandle<'_>,
        legacy: impl IntoIterator<Item = Option<&'n str>>,
    ) -> FederationResult<Vec<Role>> {
        let mut roles = Vec::new();
        for name in legacy {
            if let Resolution::Resolved(role) = self.resolve(realm, name)? {
                roles.push(role);
            }
        }
        Ok(roles)
    }
}
