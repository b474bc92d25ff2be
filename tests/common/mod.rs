//! Shared test utilities and scripted collaborators.

#![allow(dead_code, unused_imports)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

use stockroom::catalog::Catalog;
use stockroom::inventory::{Clock, InventoryMachine};
use stockroom::model::{Category, Item};
use stockroom::source::{FetchOptions, RemoteSource, SourceError};
use stockroom::store::MemoryStore;

pub type TestMachine = InventoryMachine<Arc<MemoryStore>, Arc<ScriptedSource>>;

/// Fixed "now" for catalog generation.
pub fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 4, 12, 0, 0).unwrap()
}

/// Fixed "now" for edits; has seconds so truncation is observable.
pub fn edit_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 4, 12, 34, 56).unwrap()
}

pub fn item(id: &str, price: f64, stock: u32) -> Item {
    Item {
        id: id.to_string(),
        name: format!("Widget {id}"),
        category: Category::Electronics,
        price,
        stock,
        updated_at: anchor(),
    }
}

/// Small reference dataset: `ITM-0001` has stock 5.
pub fn reference_items() -> Vec<Item> {
    vec![
        item("ITM-0001", 19.5, 5),
        item("ITM-0002", 4.25, 40),
        item("ITM-0003", 120.0, 0),
    ]
}

/// Clock pinned to an instant the test moves by hand.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock() = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// Remote source that replays queued results, then serves the catalog.
///
/// `force_error` always fails, as the real source does.
pub struct ScriptedSource {
    catalog: Catalog,
    queued: Mutex<VecDeque<Result<Vec<Item>, SourceError>>>,
    calls: Mutex<Vec<FetchOptions>>,
}

impl ScriptedSource {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            queued: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, result: Result<Vec<Item>, SourceError>) {
        self.queued.lock().push_back(result);
    }

    pub fn calls(&self) -> Vec<FetchOptions> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl RemoteSource for ScriptedSource {
    async fn fetch(&self, opts: FetchOptions) -> Result<Vec<Item>, SourceError> {
        self.calls.lock().push(opts);
        if opts.force_error {
            return Err(SourceError::Simulated);
        }
        self.queued
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(self.catalog.items()))
    }
}

/// Machine over `reference_items()` with an in-memory store and fixed clock.
pub fn machine() -> (TestMachine, Arc<MemoryStore>, Arc<ScriptedSource>) {
    machine_with(reference_items())
}

pub fn machine_with(items: Vec<Item>) -> (TestMachine, Arc<MemoryStore>, Arc<ScriptedSource>) {
    machine_with_clock(items, Arc::new(FixedClock::new(edit_time())))
}

pub fn machine_with_clock(
    items: Vec<Item>,
    clock: Arc<FixedClock>,
) -> (TestMachine, Arc<MemoryStore>, Arc<ScriptedSource>) {
    let catalog = Catalog::from_items(items);
    let store = Arc::new(MemoryStore::new());
    let source = Arc::new(ScriptedSource::new(catalog.clone()));
    let machine = InventoryMachine::new(Arc::clone(&store), Arc::clone(&source), catalog)
        .with_clock(clock);
    (machine, store, source)
}
