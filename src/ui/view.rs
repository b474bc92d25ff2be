//! Derived table view: filtering and sorting.
//!
//! Never mutates the canonical item order; `apply` returns references in
//! display order.

use std::cmp::Ordering;

use crate::model::{Category, Item};

pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Name,
    Category,
    Price,
    Stock,
    UpdatedAt,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Id,
        SortKey::Name,
        SortKey::Category,
        SortKey::Price,
        SortKey::Stock,
        SortKey::UpdatedAt,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Id => "ID",
            SortKey::Name => "Name",
            SortKey::Category => "Category",
            SortKey::Price => "Price",
            SortKey::Stock => "Stock",
            SortKey::UpdatedAt => "Updated",
        }
    }

    /// Next key in column order, wrapping around.
    pub fn next(&self) -> SortKey {
        let idx = Self::ALL.iter().position(|k| k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    fn compare(&self, a: &Item, b: &Item) -> Ordering {
        match self {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Name => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
            SortKey::Category => a.category.label().cmp(b.category.label()),
            SortKey::Price => a.price.total_cmp(&b.price),
            SortKey::Stock => a.stock.cmp(&b.stock),
            SortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn toggled(&self) -> SortDir {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDir::Asc => "▲",
            SortDir::Desc => "▼",
        }
    }
}

/// Filters and ordering applied to the table.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewQuery {
    /// Lowercased, trimmed name substring.
    pub search: String,
    pub category: Option<Category>,
    pub low_stock_only: bool,
    pub low_stock_threshold: u32,
    pub sort_key: SortKey,
    pub sort_dir: SortDir,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            low_stock_only: false,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            sort_key: SortKey::UpdatedAt,
            sort_dir: SortDir::Desc,
        }
    }
}

impl ViewQuery {
    pub fn with_threshold(low_stock_threshold: u32) -> Self {
        Self {
            low_stock_threshold,
            ..Self::default()
        }
    }

    pub fn set_search(&mut self, text: &str) {
        self.search = text.trim().to_lowercase();
    }

    pub fn is_low_stock(&self, item: &Item) -> bool {
        item.stock < self.low_stock_threshold
    }

    fn matches(&self, item: &Item) -> bool {
        if !self.search.is_empty() && !item.name.to_lowercase().contains(&self.search) {
            return false;
        }
        if let Some(category) = self.category {
            if item.category != category {
                return false;
            }
        }
        if self.low_stock_only && !self.is_low_stock(item) {
            return false;
        }
        true
    }

    /// Matching items in display order. Ties keep load order.
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        let mut visible: Vec<&Item> = items.iter().filter(|item| self.matches(item)).collect();
        visible.sort_by(|a, b| {
            let ord = self.sort_key.compare(a, b);
            match self.sort_dir {
                SortDir::Asc => ord,
                SortDir::Desc => ord.reverse(),
            }
        });
        visible
    }

    /// Step the category filter: all → each present category → all.
    pub fn cycle_category(&mut self, available: &[Category]) {
        self.category = match self.category {
            None => available.first().copied(),
            Some(current) => available
                .iter()
                .position(|c| *c == current)
                .and_then(|idx| available.get(idx + 1))
                .copied(),
        };
    }

    /// Click-on-column behaviour: same key flips direction, new key sorts ascending.
    pub fn sort_by(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_dir = self.sort_dir.toggled();
        } else {
            self.sort_key = key;
            self.sort_dir = SortDir::Asc;
        }
    }
}

/// Distinct categories present in `items`, sorted by label.
pub fn categories(items: &[Item]) -> Vec<Category> {
    let mut found: Vec<Category> = Vec::new();
    for item in items {
        if !found.contains(&item.category) {
            found.push(item.category);
        }
    }
    found.sort_by(|a, b| a.label().cmp(b.label()));
    found
}
