//! Remote item source.
//!
//! The inventory is fetched through [`RemoteSource`]; [`MockSource`] stands
//! in for a real backend with random latency and injectable failures.

mod mock;

pub use mock::MockSource;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::Item;

pub const DEFAULT_MIN_DELAY: Duration = Duration::from_millis(300);
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(800);
pub const DEFAULT_FAILURE_RATE: f64 = 0.07;

/// Errors returned by a fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Random or forced failure from the simulated backend.
    #[error("Simulated error while loading the inventory. Please try again.")]
    Simulated,

    #[error("{0}")]
    Other(String),
}

/// Per-fetch knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchOptions {
    pub min_delay: Duration,
    pub max_delay: Duration,
    /// Probability in `[0, 1]` that a fetch fails.
    pub failure_rate: f64,
    /// Fail unconditionally.
    pub force_error: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            min_delay: DEFAULT_MIN_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
            failure_rate: DEFAULT_FAILURE_RATE,
            force_error: false,
        }
    }
}

impl FetchOptions {
    pub fn with_force_error(mut self, force_error: bool) -> Self {
        self.force_error = force_error;
        self
    }
}

/// Asynchronous provider of the item collection.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetch a fresh copy of the collection.
    async fn fetch(&self, opts: FetchOptions) -> Result<Vec<Item>, SourceError>;
}

#[async_trait]
impl<T: RemoteSource + ?Sized> RemoteSource for std::sync::Arc<T> {
    async fn fetch(&self, opts: FetchOptions) -> Result<Vec<Item>, SourceError> {
        (**self).fetch(opts).await
    }
}
