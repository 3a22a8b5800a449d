//! Role storage provider trait.

use kc_model::Role;
use uuid::Uuid;

use crate::error::StorageResult;

/// Provider for role storage operations.
pub trait RoleProvider: Send + Sync {
    /// Creates a new role.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::Duplicate` if a role with the same name exists.
    fn create(&self, role: &Role) -> StorageResult<()>;

    /// Gets a realm role by exact (case-sensitive) name.
    fn get_realm_role_by_name(&self, realm_id: Uuid, name: &str) -> StorageResult<Option<Role>>;
}
