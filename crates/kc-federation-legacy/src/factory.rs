//! Builds local users from legacy user records.

use std::sync::Arc;

use kc_federation::{FederationConfig, FederationError, FederationResult, RealmLocks};
use kc_model::User;
use kc_storage::RealmHandle;

use crate::config::LegacySettings;
use crate::group::GroupPathResolver;
use crate::role::RoleResolver;
use crate::user::LegacyUser;

/// Creates local users for legacy user records.
///
/// One factory serves one provider component; its rename tables are read
/// once at construction.
#[derive(Debug, Clone)]
pub struct UserModelFactory {
    federation_link: String,
    roles: RoleResolver,
    groups: GroupPathResolver,
}

impl UserModelFactory {
    /// Creates a factory from the provider configuration.
    ///
    /// ## Errors
    ///
    /// Returns `FederationError::Configuration` if a rename pair is malformed.
    pub fn new(config: &FederationConfig, locks: Arc<RealmLocks>) -> FederationResult<Self> {
        let settings = LegacySettings::from_config(config)?;
        Ok(Self::from_settings(config.federation_link(), settings, locks))
    }

    /// Creates a factory from already parsed settings.
    #[must_use]
    pub fn from_settings(
        federation_link: impl Into<String>,
        settings: LegacySettings,
        locks: Arc<RealmLocks>,
    ) -> Self {
        Self {
            federation_link: federation_link.into(),
            roles: RoleResolver::new(settings.role_map, settings.migrate_unmapped_roles),
            groups: GroupPathResolver::new(
                settings.group_map,
                settings.migrate_unmapped_groups,
                locks,
            ),
        }
    }

    /// The federation link stamped on created users.
    #[must_use]
    pub fn federation_link(&self) -> &str {
        &self.federation_link
    }

    /// Creates or loads the local user for `legacy` and copies its profile,
    /// attributes, roles and groups onto it.
    ///
    /// ## Errors
    ///
    /// Returns `FederationError::InvalidUser` for a blank username and
    /// `FederationError::IdentityMismatch` if the local record does not carry
    /// the legacy username, or the username already belongs to a local user
    /// with another id. Nothing is modified in either case. Other storage
    /// faults are passed through.
    pub fn create(&self, legacy: &LegacyUser, realm: &RealmHandle<'_>) -> FederationResult<User> {
        if legacy.username.trim().is_empty() {
            return Err(FederationError::invalid_user("username must not be blank"));
        }
        tracing::info!(username = %legacy.username, "Creating user model");

        let mut user = match legacy.legacy_id() {
            None => realm.users.add_user(realm.realm_id, &legacy.username)?,
            Some(id) => match realm
                .users
                .add_user_with_id(realm.realm_id, id, &legacy.username)
            {
                Err(err) if err.is_duplicate() => {
                    return Err(username_taken(realm, legacy, id)?);
                }
                result => result?,
            },
        };

        if user.username != legacy.username {
            return Err(FederationError::identity_mismatch(
                user.username,
                legacy.username.as_str(),
            ));
        }

        user.federation_link = Some(self.federation_link.clone());
        user.enabled = legacy.enabled;
        user.email.clone_from(&legacy.email);
        user.email_verified = legacy.email_verified;
        user.first_name.clone_from(&legacy.first_name);
        user.last_name.clone_from(&legacy.last_name);

        if let Some(attributes) = &legacy.attributes {
            for (name, values) in attributes {
                user.set_attribute(name.as_str(), values.clone());
            }
        }

        for role in self.roles.resolve_all(realm, legacy.role_names())? {
            user.grant_role(role.id);
        }
        for group in self.groups.resolve_all(realm, legacy.group_names())? {
            user.join_group(group.id);
        }

        realm.users.update(&user)?;
        tracing::debug!(
            user_id = %user.id,
            roles = user.role_mappings.len(),
            groups = user.groups.len(),
            "User model created"
        );
        Ok(user)
    }
}

/// Builds the mismatch error for a username held by a local user under
/// another id.
fn username_taken(
    realm: &RealmHandle<'_>,
    legacy: &LegacyUser,
    legacy_id: &str,
) -> FederationResult<FederationError> {
    let holder = realm
        .users
        .get_by_username(realm.realm_id, &legacy.username)?
        .map_or_else(
            || legacy.username.clone(),
            |user| format!("{} (id {})", user.username, user.id),
        );
    tracing::warn!(
        username = %legacy.username,
        legacy_id,
        local = %holder,
        "Username already taken by another local user"
    );
    Ok(FederationError::identity_mismatch(
        holder,
        format!("{} (id {legacy_id})", legacy.username),
    ))
}
