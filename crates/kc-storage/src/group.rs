//! Group storage provider trait.

use kc_model::Group;
use uuid::Uuid;

use crate::error::StorageResult;

/// Provider for group storage operations.
///
/// Implementations must be thread-safe. Creation is not required to be
/// unique per name: two groups with the same name may exist at the same
/// level, so callers that need create-if-absent semantics must serialize
/// lookup and creation themselves.
pub trait GroupProvider: Send + Sync {
    /// Creates a group named `name` under `parent`, or at top level when
    /// `parent` is `None`, and returns it.
    fn create_group(
        &self,
        realm_id: Uuid,
        name: &str,
        parent: Option<&Group>,
    ) -> StorageResult<Group>;

    /// Gets a group by ID.
    fn get_by_id(&self, realm_id: Uuid, id: Uuid) -> StorageResult<Option<Group>>;

    /// Lists top-level groups in a realm, in creation order.
    fn list_top_level(&self, realm_id: Uuid) -> StorageResult<Vec<Group>>;

    /// Lists direct child groups of a parent group, in creation order.
    fn list_children(&self, realm_id: Uuid, parent_id: Uuid) -> StorageResult<Vec<Group>>;
}
