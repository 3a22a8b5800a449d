//! In-memory realm store.
//!
//! Implements every provider trait over process-local collections. Used by
//! hosts that keep the target realm in memory and by tests.

use kc_model::{Group, Role, User};
use parking_lot::RwLock;
use uuid::Uuid;

use crate::error::{StorageError, StorageResult};
use crate::group::GroupProvider;
use crate::realm::RealmHandle;
use crate::role::RoleProvider;
use crate::user::UserProvider;

/// Thread-safe in-memory store for users, roles and groups of any realm.
#[derive(Debug, Default)]
pub struct InMemoryRealmStore {
    users: RwLock<Vec<User>>,
    roles: RwLock<Vec<Role>>,
    groups: RwLock<Vec<Group>>,
}

impl InMemoryRealmStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle scoped to `realm_id` backed by this store.
    #[must_use]
    pub fn handle(&self, realm_id: Uuid) -> RealmHandle<'_> {
        RealmHandle::new(realm_id, self, self, self)
    }

    /// Inserts a user record as-is, replacing one with the same id.
    pub fn put_user(&self, user: User) {
        let mut users = self.users.write();
        users.retain(|u| !(u.realm_id == user.realm_id && u.id == user.id));
        users.push(user);
    }

    /// Lists every group of a realm regardless of depth, in creation order.
    #[must_use]
    pub fn all_groups(&self, realm_id: Uuid) -> Vec<Group> {
        self.groups
            .read()
            .iter()
            .filter(|g| g.realm_id == realm_id)
            .cloned()
            .collect()
    }
}

impl UserProvider for InMemoryRealmStore {
    fn add_user(&self, realm_id: Uuid, username: &str) -> StorageResult<User> {
        let mut users = self.users.write();
        if let Some(existing) = users
            .iter()
            .find(|u| u.realm_id == realm_id && u.username == username)
        {
            return Ok(existing.clone());
        }

        let user = User::new(realm_id, username);
        tracing::debug!(user_id = %user.id, username, "Stored new user");
        users.push(user.clone());
        Ok(user)
    }

    fn add_user_with_id(&self, realm_id: Uuid, id: &str, username: &str) -> StorageResult<User> {
        let mut users = self.users.write();
        if let Some(existing) = users.iter().find(|u| u.realm_id == realm_id && u.id == id) {
            return Ok(existing.clone());
        }
        if users
            .iter()
            .any(|u| u.realm_id == realm_id && u.username == username)
        {
            return Err(StorageError::duplicate("User", "username", username));
        }

        let user = User::with_id(realm_id, id, username);
        tracing::debug!(user_id = %user.id, username, "Stored new user");
        users.push(user.clone());
        Ok(user)
    }

    fn update(&self, user: &User) -> StorageResult<()> {
        let mut users = self.users.write();
        let slot = users
            .iter_mut()
            .find(|u| u.realm_id == user.realm_id && u.id == user.id)
            .ok_or_else(|| StorageError::not_found("User", &user.id))?;

        *slot = user.clone();
        slot.touch();
        Ok(())
    }

    fn get_by_id(&self, realm_id: Uuid, id: &str) -> StorageResult<Option<User>> {
        Ok(self
            .users
            .read()
            .iter()
            .find(|u| u.realm_id == realm_id && u.id == id)
            .cloned())
    }

    fn get_by_username(&self, realm_id: Uuid, username: &str) -> StorageResult<Option<User>> {
        Ok(self
            .users
            .read()
            .iter()
            .find(|u| u.realm_id == realm_id && u.username == username)
            .cloned())
    }
}

impl RoleProvider for InMemoryRealmStore {
    fn create(&self, role: &Role) -> StorageResult<()> {
        let mut roles = self.roles.write();
        if roles
            .iter()
            .any(|r| r.realm_id == role.realm_id && r.name == role.name)
        {
            return Err(StorageError::duplicate("Role", "name", role.name.as_str()));
        }
        roles.push(role.clone());
        Ok(())
    }

    fn get_realm_role_by_name(&self, realm_id: Uuid, name: &str) -> StorageResult<Option<Role>> {
        Ok(self
            .roles
            .read()
            .iter()
            .find(|r| r.realm_id == realm_id && r.name == name)
            .cloned())
    }
}

impl GroupProvider for InMemoryRealmStore {
    fn create_group(
        &self,
        realm_id: Uuid,
        name: &str,
        parent: Option<&Group>,
    ) -> StorageResult<Group> {
        let mut groups = self.groups.write();
        let group = match parent {
            Some(parent) => {
                if !groups
                    .iter()
                    .any(|g| g.realm_id == realm_id && g.id == parent.id)
                {
                    return Err(StorageError::not_found("Group", parent.id));
                }
                Group::new_child(realm_id, parent.id, name)
            }
            None => Group::new(realm_id, name),
        };

        groups.push(group.clone());
        Ok(group)
    }

    fn get_by_id(&self, realm_id: Uuid, id: Uuid) -> StorageResult<Option<Group>> {
        Ok(self
            .groups
            .read()
            .iter()
            .find(|g| g.realm_id == realm_id && g.id == id)
            .cloned())
    }

    fn list_top_level(&self, realm_id: Uuid) -> StorageResult<Vec<Group>> {
        Ok(self
            .groups
            .read()
            .iter()
            .filter(|g| g.realm_id == realm_id && g.is_top_level())
            .cloned()
            .collect())
    }

    fn list_children(&self, realm_id: Uuid, parent_id: Uuid) -> StorageResult<Vec<Group>> {
        Ok(self
            .groups
            .read()
            .iter()
            .filter(|g| g.realm_id == realm_id && g.parent_id == Some(parent_id))
            .cloned()
            .collect())
    }
}
