//! # kc-model
//!
//! Domain models for the target identity store: users, groups and roles.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod group;
pub mod role;
pub mod user;

pub use group::{eq_ignore_case, Group, GroupPath, PATH_SEPARATOR};
pub use role::Role;
pub use user::User;
