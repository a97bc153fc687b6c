use std::fmt::Write;

use crate::models::{FoodItem, NutrientTotals, PredictionResult};
use crate::session::SessionLedger;

/// Width of the textual score bar.
pub const PROGRESS_WIDTH: usize = 20;

/// Display foods as a table, showing at most `limit` rows when given.
pub fn display_food_table(foods: &[&FoodItem], title: &str, limit: Option<usize>) {
    print!("{}", format_food_table(foods, title, limit));
}

/// Format foods as a table with a tail line for rows past `limit`.
pub fn format_food_table(foods: &[&FoodItem], title: &str, limit: Option<usize>) -> String {
    if foods.is_empty() {
        return format!("{}: (none)\n", title);
    }

    let shown = limit.unwrap_or(foods.len()).min(foods.len());
    let name_width = foods[..shown]
        .iter()
        .map(|f| f.name.chars().count())
        .max()
        .unwrap_or(10)
        .max(4);

    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "=== {} ({} items) ===", title, foods.len());
    let _ = writeln!(
        out,
        "{:>3}  {:<width$}  {:>9}  {:>7}  {:>8}  {:>12}",
        "#",
        "Name",
        "Calories",
        "Fat",
        "Proteins",
        "Carbohydrate",
        width = name_width
    );

    for (i, food) in foods.iter().take(shown).enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {:<width$}  {:>9.1}  {:>7.1}  {:>8.1}  {:>12.1}",
            i + 1,
            food.name,
            food.calories,
            food.fat,
            food.proteins,
            food.carbohydrate,
            width = name_width
        );
    }

    if shown < foods.len() {
        let _ = writeln!(out, "     ... and {} more", foods.len() - shown);
    }
    let _ = writeln!(out);
    out
}

/// Display everything logged this session followed by the totals.
pub fn display_ledger(ledger: &SessionLedger) {
    if ledger.is_empty() {
        println!("Nothing logged yet today.");
        return;
    }

    let entries: Vec<&FoodItem> = ledger.list().iter().collect();
    display_food_table(&entries, "Foods consumed today", None);
    display_totals(&ledger.aggregate());
}

pub fn display_totals(totals: &NutrientTotals) {
    print!("{}", format_totals(totals));
}

/// Daily totals, one decimal place each.
pub fn format_totals(totals: &NutrientTotals) -> String {
    format!(
        "--- Daily totals ---\n\
         Calories (kcal):  {:.1}\n\
         Fat (g):          {:.1}\n\
         Protein (g):      {:.1}\n\
         Carbohydrate (g): {:.1}\n\n",
        totals.calories, totals.fat, totals.proteins, totals.carbohydrate
    )
}

pub fn display_prediction(result: &PredictionResult) {
    println!("=== Health Score ===");
    println!("Predicted score (1-5): {}", result.score);
    println!("Category: {}", result.category);
    println!("{}", progress_bar(result.fraction(), PROGRESS_WIDTH));
    println!();
}

/// Render `fraction` (0..=1) as `[#####.....]  50%`.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let fraction = if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 };
    let filled = (fraction * width as f64).round() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        ".".repeat(width - filled),
        fraction * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.5, 10), "[#####.....]  50%");
        assert_eq!(progress_bar(1.0, 4), "[####] 100%");
        assert_eq!(progress_bar(-1.0, 4), "[....]   0%");
        assert_eq!(progress_bar(f64::NAN, 4), "[....]   0%");
    }

    fn foods(n: usize) -> Vec<FoodItem> {
        (1..=n)
            .map(|i| FoodItem::new(format!("Food {i}"), 100.0 * i as f64, 1.0, 2.0, 3.0))
            .collect()
    }

    fn data_rows(table: &str) -> usize {
        table.lines().filter(|l| l.contains(". Food ")).count()
    }

    #[test]
    fn test_table_capped_at_limit() {
        let items = foods(12);
        let refs: Vec<&FoodItem> = items.iter().collect();

        let table = format_food_table(&refs, "Search results", Some(10));
        assert_eq!(data_rows(&table), 10);
        assert!(table.contains("=== Search results (12 items) ==="));
        assert!(table.contains("... and 2 more"));
        assert!(table.contains("Food 10"));
        assert!(!table.contains("Food 11"));
    }

    #[test]
    fn test_table_limit_zero_and_above_count() {
        let items = foods(3);
        let refs: Vec<&FoodItem> = items.iter().collect();

        let none_shown = format_food_table(&refs, "Results", Some(0));
        assert_eq!(data_rows(&none_shown), 0);
        assert!(none_shown.contains("... and 3 more"));

        let all_shown = format_food_table(&refs, "Results", Some(50));
        assert_eq!(data_rows(&all_shown), 3);
        assert!(!all_shown.contains("more"));

        let unlimited = format_food_table(&refs, "Results", None);
        assert_eq!(data_rows(&unlimited), 3);
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_food_table(&[], "Results", Some(10)), "Results: (none)\n");
    }

    #[test]
    fn test_table_values_one_decimal() {
        let items = [FoodItem::new("Bakso", 220.0, 9.5, 14.0, 18.24)];
        let refs: Vec<&FoodItem> = items.iter().collect();
        let table = format_food_table(&refs, "Results", None);
        assert!(table.contains("220.0"));
        assert!(table.contains("9.5"));
        assert!(table.contains("18.2"));
    }

    #[test]
    fn test_totals_one_decimal() {
        let totals = NutrientTotals {
            calories: 150.0,
            fat: 3.04,
            proteins: 15.06,
            carbohydrate: 30.0,
        };
        let text = format_totals(&totals);
        assert!(text.contains("Calories (kcal):  150.0\n"));
        assert!(text.contains("Fat (g):          3.0\n"));
        assert!(text.contains("Protein (g):      15.1\n"));
        assert!(text.contains("Carbohydrate (g): 30.0\n"));
    }
}
