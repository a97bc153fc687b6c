use tracing::debug;

use crate::models::{FoodItem, NutrientTotals};

/// Foods recorded during one session, in the order they were added.
///
/// Entries are owned copies; nothing here removes or reorders them.
#[derive(Debug, Clone, Default)]
pub struct SessionLedger {
    entries: Vec<FoodItem>,
}

impl SessionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a copy of `item`. Repeats are kept as separate entries.
    pub fn add(&mut self, item: &FoodItem) {
        debug!(food = %item.debug_string(), "Added to ledger");
        self.entries.push(item.clone());
    }

    /// Elementwise sum of every entry's nutrients; zero when empty.
    pub fn aggregate(&self) -> NutrientTotals {
        self.entries.iter().sum()
    }

    /// Entries in insertion order.
    pub fn list(&self) -> &[FoodItem] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_a() -> FoodItem {
        FoodItem::new("A", 100.0, 2.0, 10.0, 20.0)
    }

    fn item_b() -> FoodItem {
        FoodItem::new("B", 50.0, 1.0, 5.0, 10.0)
    }

    #[test]
    fn test_empty_aggregate_is_zero() {
        let ledger = SessionLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.aggregate(), NutrientTotals::default());
    }

    #[test]
    fn test_aggregate_two_items() {
        let mut ledger = SessionLedger::new();
        ledger.add(&item_a());
        ledger.add(&item_b());

        let totals = ledger.aggregate();
        assert_eq!(totals.calories, 150.0);
        assert_eq!(totals.fat, 3.0);
        assert_eq!(totals.proteins, 15.0);
        assert_eq!(totals.carbohydrate, 30.0);
        assert_eq!(ledger.aggregate(), totals);
    }

    #[test]
    fn test_duplicates_counted_twice() {
        let mut ledger = SessionLedger::new();
        ledger.add(&item_a());
        ledger.add(&item_a());

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.aggregate().calories, 200.0);
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut ledger = SessionLedger::new();
        ledger.add(&item_b());
        ledger.add(&item_a());
        let names: Vec<&str> = ledger.list().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_entries_are_copies() {
        let mut source = item_a();
        let mut ledger = SessionLedger::new();
        ledger.add(&source);

        source.calories = 9999.0;
        assert_eq!(ledger.list()[0].calories, 100.0);
    }
}
