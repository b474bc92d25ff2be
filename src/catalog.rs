//! Seeded reference dataset.
//!
//! The reference items are generated from a fixed seed so that every reload
//! and every reset in a process sees the same data. Stored edits override it
//! on load; a reset brings it back.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::model::{truncate_to_minute, Category, Item};

pub const DEFAULT_ITEM_COUNT: usize = 60;
pub const DEFAULT_SEED: u32 = 42;

const NOUNS: [&str; 15] = [
    "Headphones",
    "Lamp",
    "T-Shirt",
    "Sneakers",
    "Book",
    "Keyboard",
    "Frying Pan",
    "Backpack",
    "Ball",
    "Novel",
    "Monitor",
    "Towel",
    "Sweatshirt",
    "Bicycle",
    "Guide",
];

const ADJECTIVES: [&str; 10] = [
    "Pro",
    "Mini",
    "Plus",
    "Eco",
    "Premium",
    "Classic",
    "Smart",
    "Compact",
    "Deluxe",
    "2026 Edition",
];

/// mulberry32: small 32-bit PRNG producing floats in `[0, 1)`.
struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6d2b_79f5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }

    fn pick<'a, T>(&mut self, choices: &'a [T]) -> &'a T {
        let idx = (self.next_f64() * choices.len() as f64) as usize;
        &choices[idx.min(choices.len() - 1)]
    }
}

/// Generate `count` reference items from `seed`, dated relative to `anchor`.
pub fn generate(count: usize, seed: u32, anchor: DateTime<Utc>) -> Vec<Item> {
    let anchor = truncate_to_minute(anchor);
    let mut rng = Mulberry32::new(seed);

    (1..=count)
        .map(|i| {
            let category = *rng.pick(&Category::ALL);
            let noun = rng.pick(&NOUNS);
            let adjective = rng.pick(&ADJECTIVES);
            let price = ((rng.next_f64() * 500.0 + 1.0) * 100.0).round() / 100.0;
            let stock = (rng.next_f64() * 120.0) as u32;
            let days_ago = (rng.next_f64() * 45.0) as i64;

            Item {
                id: format!("ITM-{:02}{:02}", i / 100, i % 100),
                name: format!("{} {}", noun, adjective),
                category,
                price,
                stock,
                updated_at: anchor - Duration::days(days_ago),
            }
        })
        .collect()
}

/// The reference dataset for one process.
///
/// Generated once at construction; every caller gets its own copy.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Arc<Vec<Item>>,
}

impl Catalog {
    pub fn new(count: usize, seed: u32, anchor: DateTime<Utc>) -> Self {
        Self {
            items: Arc::new(generate(count, seed, anchor)),
        }
    }

    /// Build a catalog from a fixed item list.
    pub fn from_items(items: Vec<Item>) -> Self {
        Self {
            items: Arc::new(items),
        }
    }

    /// A fresh copy of the reference items.
    pub fn items(&self) -> Vec<Item> {
        self.items.as_ref().clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(DEFAULT_ITEM_COUNT, DEFAULT_SEED, Utc::now())
    }
}
