use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;

use stockroom::catalog::Catalog;
use stockroom::config::Config;
use stockroom::inventory::InventoryMachine;
use stockroom::logging::init_tracing;
use stockroom::source::MockSource;
use stockroom::store::{FileStore, MemoryStore};
use stockroom::ui::app::{SharedSource, SharedStore};

/// Terminal inventory manager backed by a simulated remote source.
#[derive(Parser, Debug)]
#[command(name = "stockroom", version, about, long_about = None)]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Where edits are persisted
    #[arg(long, value_name = "PATH")]
    data_file: Option<PathBuf>,

    /// Keep edits in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Probability (0..=1) that a load fails
    #[arg(long, value_name = "RATE")]
    failure_rate: Option<f64>,

    /// Seed for the reference dataset
    #[arg(long)]
    seed: Option<u32>,

    /// Number of reference items
    #[arg(long, value_name = "COUNT")]
    items: Option<usize>,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.data_file {
            config.storage.path = Some(path.clone());
        }
        if self.ephemeral {
            config.storage.ephemeral = true;
        }
        if let Some(rate) = self.failure_rate {
            config.source.failure_rate = rate;
        }
        if let Some(seed) = self.seed {
            config.catalog.seed = seed;
        }
        if let Some(count) = self.items {
            config.catalog.item_count = count;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let (config_path, loaded) = match &cli.config {
        Some(path) => (path.clone(), Config::load_from(path)),
        None => (Config::config_path(), Config::load()),
    };
    let mut config = loaded.with_context(|| format!("loading {}", config_path.display()))?;
    cli.apply(&mut config);
    config.validate()?;
    tracing::info!(path = %config_path.display(), "Configuration loaded");

    let store: SharedStore = if config.storage.ephemeral {
        Arc::new(MemoryStore::new())
    } else {
        let path = config
            .storage
            .path
            .clone()
            .unwrap_or_else(FileStore::default_path);
        tracing::info!(path = %path.display(), "Persisting edits to file");
        Arc::new(FileStore::new(path))
    };

    let catalog = Catalog::new(config.catalog.item_count, config.catalog.seed, Utc::now());
    let source: SharedSource = Arc::new(MockSource::new(catalog.clone()));
    let inventory = InventoryMachine::new(store, source, catalog)
        .with_fetch_options(config.source.fetch_options());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_time()
        .build()
        .context("starting async runtime")?;

    stockroom::ui::run(inventory, config.ui.clone(), runtime.handle().clone())?;
    runtime.shutdown_background();
    tracing::info!("Stockroom exited");
    Ok(())
}
