//! Rename tables for federated role and group names.
//!
//! A table is configured as a list of `legacy:local` pairs. Each pair is
//! split on its first `:`, so the local name may itself contain colons.

use std::collections::HashMap;

use crate::error::{FederationError, FederationResult};
use crate::resolution::{Resolution, SkipReason};

/// Separator between the legacy and the local name of a pair.
pub const PAIR_SEPARATOR: char = ':';

/// Mapping from legacy names to local names.
///
/// Keys compare by exact, case-sensitive equality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameTable {
    entries: HashMap<String, String>,
}

impl RenameTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `legacy:local` pairs.
    ///
    /// When a legacy name occurs twice the later pair wins.
    ///
    /// ## Errors
    ///
    /// Returns `FederationError::Configuration` for a pair without a
    /// separator or with an empty side.
    pub fn parse<I, S>(pairs: I) -> FederationResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (legacy, local) = pair.split_once(PAIR_SEPARATOR).ok_or_else(|| {
                FederationError::config(format!(
                    "rename entry '{pair}' must have the form legacy{PAIR_SEPARATOR}local"
                ))
            })?;
            if legacy.trim().is_empty() || local.trim().is_empty() {
                return Err(FederationError::config(format!(
                    "rename entry '{pair}' has an empty side"
                )));
            }

            if let Some(previous) = table.insert(legacy, local) {
                tracing::warn!(
                    legacy,
                    previous = %previous,
                    local,
                    "Duplicate rename entry, keeping the later one"
                );
            }
        }
        Ok(table)
    }

    /// Adds a mapping, returning the local name it replaced.
    pub fn insert(&mut self, legacy: impl Into<String>, local: impl Into<String>) -> Option<String> {
        self.entries.insert(legacy.into(), local.into())
    }

    /// Looks up the local name for a legacy name.
    #[must_use]
    pub fn get(&self, legacy: &str) -> Option<&str> {
        self.entries.get(legacy).map(String::as_str)
    }

    /// Returns true if the legacy name has an explicit mapping.
    #[must_use]
    pub fn contains(&self, legacy: &str) -> bool {
        self.entries.contains_key(legacy)
    }

    /// Number of mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Picks the local name to look up for a legacy name.
    ///
    /// A missing or blank legacy name is always skipped. Otherwise an
    /// explicit mapping wins, and without one the legacy name is kept only
    /// when `migrate_unmapped` is set.
    #[must_use]
    pub fn translate<'a>(
        &'a self,
        legacy: Option<&'a str>,
        migrate_unmapped: bool,
    ) -> Resolution<&'a str> {
        let Some(legacy) = legacy.filter(|name| !name.trim().is_empty()) else {
            return Resolution::Skipped(SkipReason::Blank);
        };

        match self.get(legacy) {
            Some(local) if local.trim().is_empty() => Resolution::Skipped(SkipReason::Blank),
            Some(local) => Resolution::Resolved(local),
            None if migrate_unmapped => Resolution::Resolved(legacy),
            None => Resolution::Skipped(SkipReason::Unmapped),
        }
    }
}
