//! Traversal and scan budget configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;

/// What a scan returns when it runs out of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeoutPolicy {
    /// Drop everything gathered so far and report a timeout error.
    #[default]
    Discard,
    /// Return the findings gathered before the deadline, flagged as timed out.
    Partial,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Deepest level that is still classified. Default: 20.
    pub max_depth: Option<u32>,
    /// Children visited per node. Default: 100.
    pub max_children: Option<usize>,
    /// Top-level roots per batch between yield points. Default: 10.
    pub batch_size: Option<usize>,
    /// Whole-scan budget in milliseconds. Default: 60000.
    pub timeout_ms: Option<u64>,
    /// Behaviour on timeout. Default: discard.
    pub timeout_policy: Option<TimeoutPolicy>,
}

impl ScanConfig {
    pub fn effective_max_depth(&self) -> u32 {
        self.max_depth.unwrap_or(constants::DEFAULT_MAX_DEPTH)
    }

    pub fn effective_max_children(&self) -> usize {
        self.max_children.unwrap_or(constants::DEFAULT_MAX_CHILDREN)
    }

    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.unwrap_or(constants::DEFAULT_BATCH_SIZE)
    }

    pub fn effective_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.unwrap_or(constants::DEFAULT_SCAN_TIMEOUT_MS))
    }

    pub fn effective_timeout_policy(&self) -> TimeoutPolicy {
        self.timeout_policy.unwrap_or_default()
    }
}
