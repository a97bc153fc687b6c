use std::collections::HashSet;

use strsim::jaro_winkler;

use crate::models::FoodItem;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Read-only table of foods in load order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<FoodItem>,
}

impl Catalog {
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self { items }
    }

    /// All items in load order.
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Filter by case-insensitive substring on the name.
    ///
    /// An absent or empty query returns every item. Order is always load order.
    pub fn search(&self, query: Option<&str>) -> Vec<&FoodItem> {
        let needle = query.unwrap_or_default().to_lowercase();
        if needle.is_empty() {
            return self.items.iter().collect();
        }

        self.items
            .iter()
            .filter(|item| item.name_contains(&needle))
            .collect()
    }

    /// First item whose name equals `name`, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&FoodItem> {
        let key = name.trim().to_lowercase();
        self.items.iter().find(|item| item.name.to_lowercase() == key)
    }

    /// Closest distinct names to `name`, best first.
    pub fn suggest(&self, name: &str, limit: usize) -> Vec<&str> {
        let key = name.trim().to_lowercase();

        let mut candidates: Vec<(&str, f64)> = distinct_names(&self.items.iter().collect::<Vec<_>>())
            .into_iter()
            .map(|n| (n, jaro_winkler(&n.to_lowercase(), &key)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.into_iter().take(limit).map(|(n, _)| n).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Unique names among `results`, in first-occurrence order.
pub fn distinct_names<'a>(results: &[&'a FoodItem]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    results
        .iter()
        .map(|item| item.name.as_str())
        .filter(|name| seen.insert(*name))
        .collect()
}

/// First item in `results` with exactly this name.
pub fn first_named<'a>(results: &[&'a FoodItem], name: &str) -> Option<&'a FoodItem> {
    results.iter().copied().find(|item| item.name == name)
}
