//! # kc-storage
//!
//! Storage abstraction traits for the Keycloak Rust identity store.
//!
//! ## Provider Traits
//!
//! - [`UserProvider`] - create, load and update users
//! - [`RoleProvider`] - realm role lookup
//! - [`GroupProvider`] - group tree listing and creation
//!
//! [`RealmHandle`] bundles the providers of one realm, and
//! [`memory::InMemoryRealmStore`] implements all of them in memory.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;
pub mod group;
pub mod memory;
pub mod realm;
pub mod role;
pub mod user;

pub use error::{StorageError, StorageResult};
pub use group::GroupProvider;
pub use memory::InMemoryRealmStore;
pub use realm::RealmHandle;
pub use role::RoleProvider;
pub use user::UserProvider;
