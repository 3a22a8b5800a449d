//! Outcome of resolving a federated name to a local entity.

use serde::{Deserialize, Serialize};

/// Why a federated name produced no local entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipReason {
    /// No rename entry exists and unmapped names are not migrated.
    Unmapped,
    /// The name (after renaming) is missing or blank.
    Blank,
    /// No local entity carries the name.
    NotFound,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Unmapped => "unmapped",
            Self::Blank => "blank",
            Self::NotFound => "not found",
        };
        f.write_str(s)
    }
}

/// Either a resolved local entity or the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    /// The name resolved to a local entity.
    Resolved(T),
    /// Nothing is granted for this name.
    Skipped(SkipReason),
}

impl<T> Resolution<T> {
    /// Returns true if an entity was resolved.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Returns the skip reason, if skipped.
    #[must_use]
    pub const fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Self::Resolved(_) => None,
            Self::Skipped(reason) => Some(*reason),
        }
    }

    /// Converts into the resolved entity, dropping the skip reason.
    #[must_use]
    pub fn into_resolved(self) -> Option<T> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Skipped(_) => None,
        }
    }
}
