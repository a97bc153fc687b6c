use serde::{Deserialize, Serialize};

/// A catalog row: a food or drink with its nutrient content.
///
/// Names are not unique; two rows with the same name are distinct items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub calories: f64,
    pub fat: f64,
    pub proteins: f64,
    pub carbohydrate: f64,
}

impl FoodItem {
    pub fn new(
        name: impl Into<String>,
        calories: f64,
        fat: f64,
        proteins: f64,
        carbohydrate: f64,
    ) -> Self {
        Self {
            name: name.into(),
            calories,
            fat,
            proteins,
            carbohydrate,
        }
    }

    /// Case-insensitive substring match on the name.
    ///
    /// `needle` must already be lowercase.
    #[inline]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} kcal, F:{} P:{} C:{}",
            self.name, self.calories, self.fat, self.proteins, self.carbohydrate
        )
    }
}

/// Summed nutrient intake across a set of foods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub calories: f64,
    pub fat: f64,
    pub proteins: f64,
    pub carbohydrate: f64,
}

impl NutrientTotals {
    /// Add one food's nutrients to the running totals.
    pub fn accumulate(&mut self, item: &FoodItem) {
        self.calories += item.calories;
        self.fat += item.fat;
        self.proteins += item.proteins;
        self.carbohydrate += item.carbohydrate;
    }
}

impl<'a> std::iter::Sum<&'a FoodItem> for NutrientTotals {
    fn sum<I: Iterator<Item = &'a FoodItem>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut totals, item| {
            totals.accumulate(item);
            totals
        })
    }
}
