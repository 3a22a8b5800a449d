//! Legacy provider settings.
//!
//! Keys read from the provider's [`FederationConfig`]:
//!
//! | Key | Meaning |
//! |---|---|
//! | `ROLE_MAP` | `legacy:local` pairs renaming roles |
//! | `GROUP_MAP` | `legacy:local` pairs renaming groups |
//! | `MIGRATE_UNMAPPED_ROLES` | `true` keeps role names without a rename entry |
//! | `MIGRATE_UNMAPPED_GROUPS` | `true` keeps group names without a rename entry |

use kc_federation::{FederationConfig, FederationResult, RenameTable};

/// Provider type identifier.
pub const PROVIDER_TYPE: &str = "legacy-rest";

/// Config key for role rename pairs.
pub const ROLE_MAP_PROPERTY: &str = "ROLE_MAP";

/// Config key for group rename pairs.
pub const GROUP_MAP_PROPERTY: &str = "GROUP_MAP";

/// Config key for migrating roles without a rename entry.
pub const MIGRATE_UNMAPPED_ROLES_PROPERTY: &str = "MIGRATE_UNMAPPED_ROLES";

/// Config key for migrating groups without a rename entry.
pub const MIGRATE_UNMAPPED_GROUPS_PROPERTY: &str = "MIGRATE_UNMAPPED_GROUPS";

/// Typed view of the legacy provider configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacySettings {
    /// Role rename table.
    pub role_map: RenameTable,
    /// Group rename table.
    pub group_map: RenameTable,
    /// Keep role names that have no rename entry.
    pub migrate_unmapped_roles: bool,
    /// Keep group names that have no rename entry.
    pub migrate_unmapped_groups: bool,
}

impl LegacySettings {
    /// Reads the settings from a provider configuration.
    ///
    /// Missing keys yield empty tables and disabled flags.
    ///
    /// ## Errors
    ///
    /// Returns `FederationError::Configuration` if a rename pair is malformed.
    pub fn from_config(config: &FederationConfig) -> FederationResult<Self> {
        Ok(Self {
            role_map: RenameTable::parse(config.get_list(ROLE_MAP_PROPERTY))?,
            group_map: RenameTable::parse(config.get_list(GROUP_MAP_PROPERTY))?,
            migrate_unmapped_roles: config
                .get_bool(MIGRATE_UNMAPPED_ROLES_PROPERTY)
                .unwrap_or(false),
            migrate_unmapped_groups: config
                .get_bool(MIGRATE_UNMAPPED_GROUPS_PROPERTY)
                .unwrap_or(false),
        })
    }
}
