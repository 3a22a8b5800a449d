//! Federation error types.
//!
//! Failures originating in the federation layer itself are malformed
//! provider configuration, an unusable federated record, and a local record
//! whose identity disagrees with the federated one. Everything else is a
//! storage fault passed through.

use thiserror::Error;

/// Errors that can occur during federation operations.
#[derive(Debug, Error)]
pub enum FederationError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The federated user record cannot be imported.
    #[error("Invalid federated user: {0}")]
    InvalidUser(String),

    /// The local record found for a federated user belongs to someone else.
    #[error("Identity mismatch: local user '{local}' conflicts with federated user '{remote}'")]
    IdentityMismatch {
        /// Local record, by username.
        local: String,
        /// Federated record, by username.
        remote: String,
    },

    /// Storage error when persisting federated users.
    #[error("Storage error: {0}")]
    Storage(#[from] kc_storage::StorageError),
}

impl FederationError {
    /// Creates a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Creates an invalid federated user error.
    #[must_use]
    pub fn invalid_user(msg: impl Into<String>) -> Self {
        Self::InvalidUser(msg.into())
    }

    /// Creates an identity mismatch error.
    #[must_use]
    pub fn identity_mismatch(local: impl Into<String>, remote: impl Into<String>) -> Self {
        Self::IdentityMismatch {
            local: local.into(),
            remote: remote.into(),
        }
    }

    /// Checks if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Checks if this is an invalid federated user.
    #[must_use]
    pub const fn is_invalid_user(&self) -> bool {
        matches!(self, Self::InvalidUser(_))
    }

    /// Checks if this is an identity mismatch.
    #[must_use]
    pub const fn is_identity_mismatch(&self) -> bool {
        matches!(self, Self::IdentityMismatch { .. })
    }

    /// Checks if this is a storage error.
    #[must_use]
    pub const fn is_storage_error(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

/// Result type for federation operations.
pub type FederationResult<T> = Result<T, FederationError>;
