//! Catalog cache and discovery configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// Snapshot staleness window in seconds. Default: 30.
    pub ttl_secs: Option<u64>,
    /// Text style discovery budget in milliseconds. Default: 30000.
    pub text_style_timeout_ms: Option<u64>,
    /// Color variable discovery budget in milliseconds. Default: 20000.
    pub color_variable_timeout_ms: Option<u64>,
    /// Library instances whose subtrees are inspected. Default: 100.
    pub max_library_instances: Option<usize>,
}

impl CatalogConfig {
    pub fn effective_ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs.unwrap_or(constants::DEFAULT_CATALOG_TTL_SECS))
    }

    pub fn effective_text_style_timeout(&self) -> Duration {
        Duration::from_millis(
            self.text_style_timeout_ms
                .unwrap_or(constants::DEFAULT_TEXT_STYLE_TIMEOUT_MS),
        )
    }

    pub fn effective_color_variable_timeout(&self) -> Duration {
        Duration::from_millis(
            self.color_variable_timeout_ms
                .unwrap_or(constants::DEFAULT_COLOR_VARIABLE_TIMEOUT_MS),
        )
    }

    pub fn effective_max_library_instances(&self) -> usize {
        self.max_library_instances
            .unwrap_or(constants::DEFAULT_MAX_LIBRARY_INSTANCES)
    }
}
