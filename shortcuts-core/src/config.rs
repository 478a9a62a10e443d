//! Layered configuration for the shortcut bridge.
//!
//! Uses `figment` for layered loading: built-in defaults ->
//! `shortcuts.toml` in an explicit directory -> environment variables
//! prefixed with `SIRI_SHORTCUTS_` (nested fields split on `__`, e.g.
//! `SIRI_SHORTCUTS_ACTIVATION__CLEAR_ON_FETCH=false`).
//!
//! Every default matches the documented data-model default, so a
//! missing configuration changes nothing.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::types::ActivationQuery;

/// Top-level configuration for the shortcut bridge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BridgeConfig {
    pub descriptor: DescriptorDefaults,
    pub activation: ActivationDefaults,
}

/// Eligibility defaults applied when building descriptors through the
/// façade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptorDefaults {
    /// Whether new shortcuts join the on-device search index.
    pub eligible_for_search: bool,
    /// Whether the assistant may suggest new shortcuts.
    pub eligible_for_prediction: bool,
}

impl Default for DescriptorDefaults {
    fn default() -> Self {
        Self {
            eligible_for_search: true,
            eligible_for_prediction: true,
        }
    }
}

/// Defaults for activated-shortcut queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationDefaults {
    /// Whether fetching the activated shortcut clears the record when
    /// the caller does not say otherwise.
    pub clear_on_fetch: bool,
}

impl Default for ActivationDefaults {
    fn default() -> Self {
        Self {
            clear_on_fetch: true,
        }
    }
}

impl ActivationDefaults {
    /// The query used when a call provides none.
    pub fn default_query(&self) -> ActivationQuery {
        ActivationQuery {
            clear: self.clear_on_fetch,
        }
    }
}

impl BridgeConfig {
    /// Load configuration from layered sources.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (prefixed with `SIRI_SHORTCUTS_`)
    /// 2. `shortcuts.toml` in `dir`, when given and present
    /// 3. Built-in defaults
    pub fn load(dir: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(dir) = dir {
            let path = dir.join("shortcuts.toml");
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        figment = figment.merge(Env::prefixed("SIRI_SHORTCUTS_").split("__"));

        Ok(figment.extract()?)
    }
}
