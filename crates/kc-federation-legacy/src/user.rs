//! Legacy user records.
//!
//! The record arrives as JSON from the legacy identity source. Collections
//! may be absent and role or group entries may be `null`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A user as exported by the legacy identity source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyUser {
    /// Legacy identifier. Absent or blank lets the target assign one.
    #[serde(default)]
    pub id: Option<String>,
    /// Username; must match the local record exactly.
    pub username: String,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Whether the email has been verified.
    #[serde(default)]
    pub email_verified: bool,
    /// Whether the account is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// First name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Custom attributes with their ordered values.
    #[serde(default)]
    pub attributes: Option<HashMap<String, Vec<String>>>,
    /// Legacy role names, in grant order.
    #[serde(default)]
    pub roles: Option<Vec<Option<String>>>,
    /// Legacy group names or `/`-delimited paths, in join order.
    #[serde(default)]
    pub groups: Option<Vec<Option<String>>>,
}

impl LegacyUser {
    /// Creates an enabled record with only a username.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            enabled: true,
            ..Self::default()
        }
    }

    /// Sets the legacy identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the email address and its verification flag.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>, verified: bool) -> Self {
        self.email = Some(email.into());
        self.email_verified = verified;
        self
    }

    /// Sets first and last name.
    #[must_use]
    pub fn with_names(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = Some(first.into());
        self.last_name = Some(last.into());
        self
    }

    /// Adds an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, values: Vec<String>) -> Self {
        self.attributes
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), values);
        self
    }

    /// Sets the role names.
    #[must_use]
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = Some(roles.into_iter().map(|r| Some(r.into())).collect());
        self
    }

    /// Sets the group names.
    #[must_use]
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = Some(groups.into_iter().map(|g| Some(g.into())).collect());
        self
    }

    /// The legacy identifier, if present and not blank.
    #[must_use]
    pub fn legacy_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.trim().is_empty())
    }

    /// Role entries in order; an absent list yields nothing.
    pub fn role_names(&self) -> impl Iterator<Item = Option<&str>> {
        self.roles.iter().flatten().map(Option::as_deref)
    }

    /// Group entries in order; an absent list yields nothing.
    pub fn group_names(&self) -> impl Iterator<Item = Option<&str>> {
        self.groups.iter().flatten().map(Option::as_deref)
    }
}
