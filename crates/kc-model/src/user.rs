//! User domain model.
//!
//! A user belongs to a realm and carries profile fields, custom
//! attributes, direct realm role grants and group memberships.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A local user in the target realm.
///
/// The identifier is an opaque string so that identifiers carried over
/// from a legacy identity source can be kept as they are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    // === Identity ===
    /// Unique identifier within the realm.
    pub id: String,
    /// Realm this user belongs to.
    pub realm_id: Uuid,
    /// Unique username within the realm.
    pub username: String,
    /// Whether the user account is enabled.
    pub enabled: bool,

    // === Profile ===
    /// User's first name.
    pub first_name: Option<String>,
    /// User's last name.
    pub last_name: Option<String>,
    /// User's email address.
    pub email: Option<String>,
    /// Whether the email has been verified.
    pub email_verified: bool,

    // === Timestamps ===
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,

    // === Federation ===
    /// Component ID of the federation provider that produced this user.
    pub federation_link: Option<String>,

    // === Custom Attributes ===
    /// Custom user attributes.
    pub attributes: HashMap<String, Vec<String>>,

    // === Authorization ===
    /// Directly granted realm role IDs, in grant order.
    pub role_mappings: Vec<Uuid>,
    /// Joined group IDs, in join order.
    pub groups: Vec<Uuid>,
}

impl User {
    /// Creates a new user with a generated identifier.
    #[must_use]
    pub fn new(realm_id: Uuid, username: impl Into<String>) -> Self {
        Self::with_id(realm_id, Uuid::now_v7().to_string(), username)
    }

    /// Creates a new user with an explicit identifier.
    #[must_use]
    pub fn with_id(realm_id: Uuid, id: impl Into<String>, username: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            realm_id,
            username: username.into(),
            enabled: true,
            first_name: None,
            last_name: None,
            email: None,
            email_verified: false,
            created_at: now,
            updated_at: now,
            federation_link: None,
            attributes: HashMap::new(),
            role_mappings: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Gets an attribute value.
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<&Vec<String>> {
        self.attributes.get(name)
    }

    /// Sets an attribute value, replacing any previous values.
    pub fn set_attribute(&mut self, name: impl Into<String>, values: Vec<String>) {
        self.attributes.insert(name.into(), values);
    }

    /// Grants a realm role.
    ///
    /// Returns `false` if the role was already granted.
    pub fn grant_role(&mut self, role_id: Uuid) -> bool {
        if self.role_mappings.contains(&role_id) {
            return false;
        }
        self.role_mappings.push(role_id);
        true
    }

    /// Joins a group.
    ///
    /// Returns `false` if the user was already a member.
    pub fn join_group(&mut self, group_id: Uuid) -> bool {
        if self.groups.contains(&group_id) {
            return false;
        }
        self.groups.push(group_id);
        true
    }

    /// Bumps the update timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
