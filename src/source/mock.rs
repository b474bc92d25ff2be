use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use crate::catalog::Catalog;
use crate::model::Item;
use crate::source::{FetchOptions, RemoteSource, SourceError};

/// Simulated backend serving the reference catalog.
#[derive(Debug, Clone)]
pub struct MockSource {
    catalog: Catalog,
}

impl MockSource {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

/// Uniform whole-millisecond delay in `[min, max]`; an inverted range is swapped.
fn pick_delay<R: Rng>(rng: &mut R, min: Duration, max: Duration) -> Duration {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let lo = lo.as_millis() as u64;
    let hi = hi.as_millis() as u64;
    Duration::from_millis(rng.random_range(lo..=hi))
}

fn should_fail<R: Rng>(rng: &mut R, opts: &FetchOptions) -> bool {
    if opts.force_error {
        return true;
    }
    let rate = if opts.failure_rate.is_nan() {
        0.0
    } else {
        opts.failure_rate.clamp(0.0, 1.0)
    };
    rng.random::<f64>() < rate
}

#[async_trait]
impl RemoteSource for MockSource {
    async fn fetch(&self, opts: FetchOptions) -> Result<Vec<Item>, SourceError> {
        // The rng is not Send, so draw everything before suspending.
        let (delay, fail) = {
            let mut rng = rand::rng();
            (
                pick_delay(&mut rng, opts.min_delay, opts.max_delay),
                should_fail(&mut rng, &opts),
            )
        };

        tokio::time::sleep(delay).await;

        if fail {
            tracing::debug!(delay_ms = delay.as_millis() as u64, "Mock source failing fetch");
            return Err(SourceError::Simulated);
        }
        Ok(self.catalog.items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn instant_opts() -> FetchOptions {
        FetchOptions {
            min_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            failure_rate: 0.0,
            force_error: false,
        }
    }

    #[test]
    fn delay_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let d = pick_delay(&mut rng, Duration::from_millis(300), Duration::from_millis(800));
            assert!(d >= Duration::from_millis(300) && d <= Duration::from_millis(800));
        }
    }

    #[test]
    fn inverted_delay_range_is_swapped() {
        let mut rng = StdRng::seed_from_u64(2);
        let d = pick_delay(&mut rng, Duration::from_millis(50), Duration::from_millis(10));
        assert!(d >= Duration::from_millis(10) && d <= Duration::from_millis(50));
    }

    #[test]
    fn failure_rate_extremes() {
        let mut rng = StdRng::seed_from_u64(3);
        let never = FetchOptions {
            failure_rate: 0.0,
            ..FetchOptions::default()
        };
        let always = FetchOptions {
            failure_rate: 1.0,
            ..FetchOptions::default()
        };
        let clamped = FetchOptions {
            failure_rate: 7.0,
            ..FetchOptions::default()
        };
        for _ in 0..100 {
            assert!(!should_fail(&mut rng, &never));
            assert!(should_fail(&mut rng, &always));
            assert!(should_fail(&mut rng, &clamped));
        }
    }

    #[tokio::test]
    async fn fetch_returns_catalog_copy() {
        let catalog = Catalog::new(4, 42, chrono::Utc::now());
        let source = MockSource::new(catalog.clone());
        let items = source.fetch(instant_opts()).await.unwrap();
        assert_eq!(items, catalog.items());
    }

    #[tokio::test]
    async fn forced_error_always_fails() {
        let source = MockSource::new(Catalog::new(4, 42, chrono::Utc::now()));
        let err = source
            .fetch(instant_opts().with_force_error(true))
            .await
            .unwrap_err();
        assert_eq!(err, SourceError::Simulated);
        assert_eq!(
            err.to_string(),
            "Simulated error while loading the inventory. Please try again."
        );
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_waits_for_simulated_latency() {
        let source = MockSource::new(Catalog::new(1, 42, chrono::Utc::now()));
        let opts = FetchOptions {
            min_delay: Duration::from_millis(300),
            max_delay: Duration::from_millis(300),
            failure_rate: 0.0,
            force_error: false,
        };
        let started = tokio::time::Instant::now();
        source.fetch(opts).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(300));
    }
}
