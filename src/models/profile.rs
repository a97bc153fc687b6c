use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{NutriError, Result};

/// Accepted age in years.
pub const AGE_RANGE: RangeInclusive<u32> = 10..=100;

/// Accepted body weight in kilograms.
pub const WEIGHT_RANGE: RangeInclusive<f64> = 30.0..=200.0;

/// Accepted height in centimetres.
pub const HEIGHT_RANGE: RangeInclusive<f64> = 100.0..=220.0;

pub const DEFAULT_AGE: u32 = 25;
pub const DEFAULT_WEIGHT: f64 = 70.0;
pub const DEFAULT_HEIGHT: f64 = 170.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Label used both for display and as the model's categorical level.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Personal attributes entered once per session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    pub gender: Gender,
    pub weight: f64,
    pub height: f64,
}

impl UserProfile {
    /// Build a profile, rejecting values outside the accepted ranges.
    pub fn new(age: u32, gender: Gender, weight: f64, height: f64) -> Result<Self> {
        if !AGE_RANGE.contains(&age) {
            return Err(NutriError::InvalidInput(format!(
                "age must be between {} and {}, got {}",
                AGE_RANGE.start(),
                AGE_RANGE.end(),
                age
            )));
        }
        if !WEIGHT_RANGE.contains(&weight) {
            return Err(NutriError::InvalidInput(format!(
                "weight must be between {} and {} kg, got {}",
                WEIGHT_RANGE.start(),
                WEIGHT_RANGE.end(),
                weight
            )));
        }
        if !HEIGHT_RANGE.contains(&height) {
            return Err(NutriError::InvalidInput(format!(
                "height must be between {} and {} cm, got {}",
                HEIGHT_RANGE.start(),
                HEIGHT_RANGE.end(),
                height
            )));
        }

        Ok(Self {
            age,
            gender,
            weight,
            height,
        })
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            gender: Gender::default(),
            weight: DEFAULT_WEIGHT,
            height: DEFAULT_HEIGHT,
        }
    }
}
