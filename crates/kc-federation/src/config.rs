//! Federation provider configuration.
//!
//! A provider component carries a multi-valued string map of settings.
//! Each provider type interprets its own keys on top of it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{FederationError, FederationResult};

/// Base configuration for all federation providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederationConfig {
    /// Unique identifier for this provider component.
    pub id: Uuid,

    /// Realm this provider belongs to.
    pub realm_id: Uuid,

    /// Provider type (e.g., "legacy-rest").
    pub provider_type: String,

    /// Display name.
    pub name: String,

    /// Provider-specific configuration. Keys may carry several values.
    #[serde(default)]
    pub config: HashMap<String, Vec<String>>,
}

impl FederationConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> FederationConfigBuilder {
        FederationConfigBuilder::new()
    }

    /// Value recorded as the federation link of users this provider produces.
    #[must_use]
    pub fn federation_link(&self) -> String {
        self.id.to_string()
    }

    /// Gets all values of a key, in insertion order. Missing keys yield an
    /// empty slice.
    #[must_use]
    pub fn get_list(&self, key: &str) -> &[String] {
        self.config.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Gets the first value of a key.
    #[must_use]
    pub fn get_first(&self, key: &str) -> Option<&str> {
        self.config
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Gets the first value of a key as a bool.
    ///
    /// Only `true` (any case) reads as true; every other present value reads
    /// as false. Missing keys yield `None`.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_first(key)
            .map(|value| value.trim().eq_ignore_ascii_case("true"))
    }
}

/// Builder for FederationConfig.
#[derive(Debug, Default)]
pub struct FederationConfigBuilder {
    id: Option<Uuid>,
    realm_id: Option<Uuid>,
    provider_type: Option<String>,
    name: Option<String>,
    config: HashMap<String, Vec<String>>,
}

impl FederationConfigBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ID.
    #[must_use]
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the realm ID.
    #[must_use]
    pub fn realm_id(mut self, realm_id: Uuid) -> Self {
        self.realm_id = Some(realm_id);
        self
    }

    /// Sets the provider type.
    #[must_use]
    pub fn provider_type(mut self, provider_type: impl Into<String>) -> Self {
        self.provider_type = Some(provider_type.into());
        self
    }

    /// Sets the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends a value to a config key.
    #[must_use]
    pub fn config(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.entry(key.into()).or_default().push(value.into());
        self
    }

    /// Replaces all values of a config key.
    #[must_use]
    pub fn config_list<I, S>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .insert(key.into(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Builds the configuration.
    ///
    /// ## Errors
    ///
    /// Returns `FederationError::Configuration` if the realm, provider type
    /// or name is missing.
    pub fn build(self) -> FederationResult<FederationConfig> {
        Ok(FederationConfig {
            id: self.id.unwrap_or_else(Uuid::now_v7),
            realm_id: self
                .realm_id
                .ok_or_else(|| FederationError::config("realm_id is required"))?,
            provider_type: self
                .provider_type
                .ok_or_else(|| FederationError::config("provider_type is required"))?,
            name: self
                .name
                .ok_or_else(|| FederationError::config("name is required"))?,
            config: self.config,
        })
    }
}
