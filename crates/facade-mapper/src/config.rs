use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Config key holding the issuer URL to present for facade requests.
pub const CONFIG_FACADE_ISSUER_URL: &str = "facadeIssuerUrl";

/// Per-instance mapper configuration.
///
/// Supplied by the host when the mapper is attached to a client and never
/// changed while a request is in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapperConfig {
    /// `None` when the key is absent (or null in JSON config).
    #[serde(default)]
    pub facade_issuer_url: Option<String>,
}

impl MapperConfig {
    pub fn new(facade_issuer_url: impl Into<String>) -> Self {
        Self {
            facade_issuer_url: Some(facade_issuer_url.into()),
        }
    }

    /// Load configuration from the host's raw key/value mapper config
    pub fn from_config_map<S: BuildHasher>(config: &HashMap<String, String, S>) -> Self {
        Self {
            facade_issuer_url: config.get(CONFIG_FACADE_ISSUER_URL).cloned(),
        }
    }

    /// Load configuration from a JSON object. Unknown keys are ignored.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ConfigError> {
        Ok(Self::deserialize(value)?)
    }

    /// The configured URL with surrounding whitespace removed, or `None` if
    /// nothing usable is configured.
    pub fn configured_issuer(&self) -> Option<&str> {
        self.facade_issuer_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}
