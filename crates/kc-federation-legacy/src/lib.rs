//! # kc-federation-legacy
//!
//! Legacy REST federation provider for Keycloak Rust.
//!
//! Imports users exported by a legacy identity source into a realm:
//!
//! - [`LegacySettings`] - rename tables and unmapped-name policies
//! - [`RoleResolver`] - legacy role names to existing realm roles
//! - [`GroupPathResolver`] - legacy group paths to realm groups, created on demand
//! - [`UserModelFactory`] - builds the local user from a [`LegacyUser`]
//!
//! ## Example
//!
//! ```
//! use kc_federation::{FederationConfig, RealmLocks};
//! use kc_federation_legacy::{LegacyUser, UserModelFactory, PROVIDER_TYPE};
//! use kc_storage::InMemoryRealmStore;
//! use uuid::Uuid;
//!
//! let realm_id = Uuid::now_v7();
//! let config = FederationConfig::builder()
//!     .realm_id(realm_id)
//!     .provider_type(PROVIDER_TYPE)
//!     .name("Legacy users")
//!     .config("MIGRATE_UNMAPPED_GROUPS", "true")
//!     .build()?;
//!
//! let store = InMemoryRealmStore::new();
//! let factory = UserModelFactory::new(&config, RealmLocks::shared())?;
//! let user = factory.create(
//!     &LegacyUser::new("john").with_groups(["staff/engineering"]),
//!     &store.handle(realm_id),
//! )?;
//!
//! assert_eq!(user.groups.len(), 1);
//! # Ok::<(), kc_federation::FederationError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
pub mod factory;
pub mod group;
pub mod role;
pub mod user;

pub use config::{
    LegacySettings, GROUP_MAP_PROPERTY, MIGRATE_UNMAPPED_GROUPS_PROPERTY,
    MIGRATE_UNMAPPED_ROLES_PROPERTY, PROVIDER_TYPE, ROLE_MAP_PROPERTY,
};
pub use factory::UserModelFactory;
pub use group::GroupPathResolver;
pub use role::RoleResolver;
pub use user::LegacyUser;
