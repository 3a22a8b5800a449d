//! # kc-federation
//!
//! User federation framework for Keycloak Rust.
//!
//! Shared building blocks for providers that import users from external
//! identity stores:
//!
//! - [`FederationConfig`] - provider component configuration
//! - [`RenameTable`] - legacy-to-local name mapping
//! - [`Resolution`] - resolved entity or skip reason
//! - [`RealmLocks`] - per-realm serialization of find-or-create sequences

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod lock;
pub mod rename;
pub mod resolution;

pub use config::{FederationConfig, FederationConfigBuilder};
pub use error::{FederationError, FederationResult};
pub use lock::RealmLocks;
pub use rename::RenameTable;
pub use resolution::{Resolution, SkipReason};
