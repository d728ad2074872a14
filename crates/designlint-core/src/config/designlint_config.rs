//! Top-level designlint configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CatalogConfig, MatchingConfig, ScanConfig, TimeoutPolicy};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`DESIGNLINT_*`)
/// 3. Project config (`designlint.toml` in project root)
/// 4. User config (`~/.designlint/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DesignLintConfig {
    pub scan: ScanConfig,
    pub catalog: CatalogConfig,
    pub matching: MatchingConfig,
}

/// Host-supplied overrides, e.g. from plugin settings.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub scan_timeout_ms: Option<u64>,
    pub scan_timeout_policy: Option<TimeoutPolicy>,
    pub scan_max_depth: Option<u32>,
    pub catalog_ttl_secs: Option<u64>,
}

impl DesignLintConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(constants::PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): explicit overrides
        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &DesignLintConfig) -> Result<(), ConfigError> {
        if config.scan.batch_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scan.batch_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.scan.max_children == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scan.max_children".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for (field, value) in [
            ("matching.text_tolerance", config.matching.text_tolerance),
            ("matching.color_exact_tolerance", config.matching.color_exact_tolerance),
            ("matching.color_similar_tolerance", config.matching.color_similar_tolerance),
        ] {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be a non-negative number".to_string(),
                    });
                }
            }
        }
        if config.matching.effective_color_similar_tolerance()
            < config.matching.effective_color_exact_tolerance()
        {
            return Err(ConfigError::ValidationFailed {
                field: "matching.color_similar_tolerance".to_string(),
                message: "must not be smaller than matching.color_exact_tolerance".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.designlint/config.toml`.
    fn user_config_path() -> Option<std::path::PathBuf> {
        home_dir().map(|h| h.join(".designlint").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut DesignLintConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: DesignLintConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut DesignLintConfig, other: &DesignLintConfig) {
        // Scan
        if other.scan.max_depth.is_some() {
            base.scan.max_depth = other.scan.max_depth;
        }
        if other.scan.max_children.is_some() {
            base.scan.max_children = other.scan.max_children;
        }
        if other.scan.batch_size.is_some() {
            base.scan.batch_size = other.scan.batch_size;
        }
        if other.scan.timeout_ms.is_some() {
            base.scan.timeout_ms = other.scan.timeout_ms;
        }
        if other.scan.timeout_policy.is_some() {
            base.scan.timeout_policy = other.scan.timeout_policy;
        }

        // Catalog
        if other.catalog.ttl_secs.is_some() {
            base.catalog.ttl_secs = other.catalog.ttl_secs;
        }
        if other.catalog.text_style_timeout_ms.is_some() {
            base.catalog.text_style_timeout_ms = other.catalog.text_style_timeout_ms;
        }
        if other.catalog.color_variable_timeout_ms.is_some() {
            base.catalog.color_variable_timeout_ms = other.catalog.color_variable_timeout_ms;
        }
        if other.catalog.max_library_instances.is_some() {
            base.catalog.max_library_instances = other.catalog.max_library_instances;
        }

        // Matching
        if other.matching.text_tolerance.is_some() {
            base.matching.text_tolerance = other.matching.text_tolerance;
        }
        if other.matching.color_exact_tolerance.is_some() {
            base.matching.color_exact_tolerance = other.matching.color_exact_tolerance;
        }
        if other.matching.color_similar_tolerance.is_some() {
            base.matching.color_similar_tolerance = other.matching.color_similar_tolerance;
        }
        if other.matching.ancestor_scan_depth.is_some() {
            base.matching.ancestor_scan_depth = other.matching.ancestor_scan_depth;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `DESIGNLINT_SCAN_TIMEOUT_MS`, `DESIGNLINT_CATALOG_TTL_SECS`, etc.
    fn apply_env_overrides(config: &mut DesignLintConfig) {
        if let Some(v) = env_parse::<u64>("DESIGNLINT_SCAN_TIMEOUT_MS") {
            config.scan.timeout_ms = Some(v);
        }
        if let Some(v) = env_parse::<u32>("DESIGNLINT_SCAN_MAX_DEPTH") {
            config.scan.max_depth = Some(v);
        }
        if let Some(v) = env_parse::<usize>("DESIGNLINT_SCAN_BATCH_SIZE") {
            config.scan.batch_size = Some(v);
        }
        if let Ok(val) = std::env::var("DESIGNLINT_SCAN_TIMEOUT_POLICY") {
            match val.as_str() {
                "discard" => config.scan.timeout_policy = Some(TimeoutPolicy::Discard),
                "partial" => config.scan.timeout_policy = Some(TimeoutPolicy::Partial),
                other => tracing::warn!(value = other, "unknown DESIGNLINT_SCAN_TIMEOUT_POLICY"),
            }
        }
        if let Some(v) = env_parse::<u64>("DESIGNLINT_CATALOG_TTL_SECS") {
            config.catalog.ttl_secs = Some(v);
        }
        if let Some(v) = env_parse::<usize>("DESIGNLINT_CATALOG_MAX_LIBRARY_INSTANCES") {
            config.catalog.max_library_instances = Some(v);
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut DesignLintConfig, o: &ConfigOverrides) {
        if let Some(v) = o.scan_timeout_ms {
            config.scan.timeout_ms = Some(v);
        }
        if let Some(v) = o.scan_timeout_policy {
            config.scan.timeout_policy = Some(v);
        }
        if let Some(v) = o.scan_max_depth {
            config.scan.max_depth = Some(v);
        }
        if let Some(v) = o.catalog_ttl_secs {
            config.catalog.ttl_secs = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
