//! User storage provider trait.

use kc_model::User;
use uuid::Uuid;

use crate::error::StorageResult;

/// Provider for user storage operations.
///
/// Implementations must be thread-safe and support concurrent access.
pub trait UserProvider: Send + Sync {
    /// Adds a user with a store-assigned identifier.
    ///
    /// The returned record is what the store holds for `username`; callers
    /// must not assume it carries the requested username.
    fn add_user(&self, realm_id: Uuid, username: &str) -> StorageResult<User>;

    /// Adds a user under an explicit identifier, or loads the record already
    /// stored under that identifier.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::Duplicate` if `username` belongs to a user with
    /// a different identifier.
    fn add_user_with_id(&self, realm_id: Uuid, id: &str, username: &str) -> StorageResult<User>;

    /// Writes back a modified user.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::NotFound` if the user doesn't exist.
    fn update(&self, user: &User) -> StorageResult<()>;

    /// Gets a user by ID.
    fn get_by_id(&self, realm_id: Uuid, id: &str) -> StorageResult<Option<User>>;

    /// Gets a user by username.
    fn get_by_username(&self, realm_id: Uuid, username: &str) -> StorageResult<Option<User>>;
}
