use std::fmt;

use crate::models::{NutrientTotals, UserProfile};

pub const AGE: &str = "Age";
pub const GENDER: &str = "Gender";
pub const WEIGHT: &str = "Weight";
pub const HEIGHT: &str = "Height";
pub const DAILY_CALORIES: &str = "Daily_Calories";
pub const FAT_INTAKE: &str = "Fat_Intake_g";
pub const PROTEIN_INTAKE: &str = "Protein_Intake_g";
pub const SUGAR_INTAKE: &str = "Sugar_Intake_g";

/// Feature names in the order the record is built.
pub const FEATURE_NAMES: [&str; 8] = [
    AGE,
    GENDER,
    WEIGHT,
    HEIGHT,
    DAILY_CALORIES,
    FAT_INTAKE,
    PROTEIN_INTAKE,
    SUGAR_INTAKE,
];

#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Number(f64),
    Category(String),
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Number(n) => write!(f, "{}", n),
            FeatureValue::Category(c) => write!(f, "{:?}", c),
        }
    }
}

/// A single named-field input row for the model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureRecord {
    fields: Vec<(String, FeatureValue)>,
}

impl FeatureRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the model input from a profile and the day's totals.
    ///
    /// Carbohydrate feeds `Sugar_Intake_g`; the model was trained with that mapping.
    pub fn from_intake(profile: &UserProfile, totals: &NutrientTotals) -> Self {
        let mut record = Self::new();
        record.set(AGE, FeatureValue::Number(profile.age as f64));
        record.set(GENDER, FeatureValue::Category(profile.gender.label().to_string()));
        record.set(WEIGHT, FeatureValue::Number(profile.weight));
        record.set(HEIGHT, FeatureValue::Number(profile.height));
        record.set(DAILY_CALORIES, FeatureValue::Number(totals.calories));
        record.set(FAT_INTAKE, FeatureValue::Number(totals.fat));
        record.set(PROTEIN_INTAKE, FeatureValue::Number(totals.proteins));
        record.set(SUGAR_INTAKE, FeatureValue::Number(totals.carbohydrate));
        record
    }

    /// Insert or replace a field.
    pub fn set(&mut self, name: &str, value: FeatureValue) {
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    #[cfg(test)]
    pub(crate) fn remove(&mut self, name: &str) -> Option<FeatureValue> {
        let idx = self.fields.iter().position(|(n, _)| n == name)?;
        Some(self.fields.remove(idx).1)
    }

    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
