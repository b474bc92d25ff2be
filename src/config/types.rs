use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::source::FetchOptions;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Simulated remote source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Minimum simulated latency in milliseconds (default: 300).
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,
    /// Maximum simulated latency in milliseconds (default: 800).
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
    /// Probability of a simulated failure, 0..=1 (default: 0.07).
    #[serde(default = "default_failure_rate")]
    pub failure_rate: f64,
}

/// Reference dataset settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Number of generated items (default: 60).
    #[serde(default = "default_item_count")]
    pub item_count: usize,
    /// Generator seed (default: 42).
    #[serde(default = "default_seed")]
    pub seed: u32,
}

/// Where edits are persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store file. Defaults to the platform data directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Keep edits in memory only.
    #[serde(default)]
    pub ephemeral: bool,
}

/// Terminal view settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Items with stock below this are "low stock" (default: 10).
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
    /// Milliseconds before a notice auto-dismisses (default: 2200).
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
    /// Quiet period before search text applies, in milliseconds (default: 300).
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    /// Event loop tick in milliseconds (default: 100).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_min_delay_ms() -> u64 {
    300
}

fn default_max_delay_ms() -> u64 {
    800
}

fn default_failure_rate() -> f64 {
    0.07
}

fn default_item_count() -> usize {
    crate::catalog::DEFAULT_ITEM_COUNT
}

fn default_seed() -> u32 {
    crate::catalog::DEFAULT_SEED
}

fn default_low_stock_threshold() -> u32 {
    10
}

fn default_toast_ms() -> u64 {
    2200
}

fn default_search_debounce_ms() -> u64 {
    300
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: default_min_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            failure_rate: default_failure_rate(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            item_count: default_item_count(),
            seed: default_seed(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: default_low_stock_threshold(),
            toast_ms: default_toast_ms(),
            search_debounce_ms: default_search_debounce_ms(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl SourceConfig {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            min_delay: Duration::from_millis(self.min_delay_ms),
            max_delay: Duration::from_millis(self.max_delay_ms),
            failure_rate: self.failure_rate,
            force_error: false,
        }
    }
}

impl UiConfig {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}
