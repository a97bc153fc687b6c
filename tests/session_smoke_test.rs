use std::path::PathBuf;

use assert_float_eq::assert_float_absolute_eq;

use nutri_score_rs::catalog::load_catalog;
use nutri_score_rs::error::{NutriError, Result};
use nutri_score_rs::models::{FoodItem, Gender, HealthCategory, NutrientTotals, UserProfile};
use nutri_score_rs::predictor::{load_model, predict, FeatureRecord, ScorePredictor, FEATURE_NAMES};
use nutri_score_rs::session::{Session, SessionLedger};

fn data_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(file)
}

fn item_a() -> FoodItem {
    FoodItem::new("A", 100.0, 2.0, 10.0, 20.0)
}

fn item_b() -> FoodItem {
    FoodItem::new("B", 50.0, 1.0, 5.0, 10.0)
}

fn profile() -> UserProfile {
    UserProfile::new(25, Gender::Male, 70.0, 170.0).unwrap()
}

struct Fixed(f64);

impl ScorePredictor for Fixed {
    fn predict_score(&self, _record: &FeatureRecord) -> Result<f64> {
        Ok(self.0)
    }
}

/// Drops a field before delegating, like a caller built the wrong record.
struct MissingField<'a, P> {
    inner: &'a P,
    field: &'static str,
}

impl<P: ScorePredictor> ScorePredictor for MissingField<'_, P> {
    fn predict_score(&self, record: &FeatureRecord) -> Result<f64> {
        let mut broken = FeatureRecord::new();
        for name in record.names().filter(|name| *name != self.field) {
            broken.set(name, record.get(name).unwrap().clone());
        }
        self.inner.predict_score(&broken)
    }
}

#[test]
fn test_aggregate_two_items() {
    let mut ledger = SessionLedger::new();
    ledger.add(&item_a());
    ledger.add(&item_b());

    assert_eq!(
        ledger.aggregate(),
        NutrientTotals {
            calories: 150.0,
            fat: 3.0,
            proteins: 15.0,
            carbohydrate: 30.0,
        }
    );
}

#[test]
fn test_aggregate_matches_catalog_rows() {
    let catalog = load_catalog(data_path("nutrition.csv")).unwrap();
    let picks = ["Bakso", "Teh manis", "Bakso", "Tempe goreng", "Abon haruwan"];

    let mut ledger = SessionLedger::new();
    let mut expected = NutrientTotals::default();
    for name in picks {
        let item = catalog.find_by_name(name).unwrap();
        ledger.add(item);
        expected.calories += item.calories;
        expected.fat += item.fat;
        expected.proteins += item.proteins;
        expected.carbohydrate += item.carbohydrate;
    }

    let totals = ledger.aggregate();
    assert_eq!(ledger.len(), picks.len());
    assert_float_absolute_eq!(totals.calories, expected.calories, 1e-9);
    assert_float_absolute_eq!(totals.fat, expected.fat, 1e-9);
    assert_float_absolute_eq!(totals.proteins, expected.proteins, 1e-9);
    assert_float_absolute_eq!(totals.carbohydrate, expected.carbohydrate, 1e-9);

    // Idempotent without an intervening add.
    assert_eq!(ledger.aggregate(), totals);
}

#[test]
fn test_score_4_2_is_good() {
    let mut session = Session::new(profile());
    session.add(&item_a());
    session.add(&item_b());

    let result = session.predict(&Fixed(4.2)).unwrap();
    assert_float_absolute_eq!(result.score, 4.2, 1e-12);
    assert_eq!(result.category, HealthCategory::Good);
}

#[test]
fn test_schema_error_surfaces_and_ledger_unchanged() {
    let model = load_model(data_path("health_score_model.json")).unwrap();
    let broken = MissingField {
        inner: &model,
        field: "Protein_Intake_g",
    };

    let mut session = Session::new(profile());
    session.add(&item_a());
    session.add(&item_b());
    let before = session.ledger().list().to_vec();

    let err = session.predict(&broken).unwrap_err();
    assert!(matches!(err, NutriError::InferenceSchema(ref msg) if msg.contains("Protein_Intake_g")));
    assert_eq!(session.ledger().list(), before.as_slice());
    assert_eq!(session.totals().calories, 150.0);
}

#[test]
fn test_demo_model_accepts_full_record() {
    let model = load_model(data_path("health_score_model.json")).unwrap();
    let names: Vec<&str> = model.features().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, FEATURE_NAMES.to_vec());
}

#[test]
fn test_demo_model_scores() {
    let model = load_model(data_path("health_score_model.json")).unwrap();

    // Light, balanced day for a young adult.
    let light = NutrientTotals {
        calories: 150.0,
        fat: 3.0,
        proteins: 15.0,
        carbohydrate: 30.0,
    };
    let result = predict(&model, &profile(), &light).unwrap();
    assert_eq!(result.score, 4.0);
    assert_eq!(result.category, HealthCategory::Good);

    // Older, heavier person on a low-protein day.
    let heavy_profile = UserProfile::new(60, Gender::Male, 100.0, 170.0).unwrap();
    let low_protein = NutrientTotals {
        calories: 800.0,
        fat: 20.0,
        proteins: 10.0,
        carbohydrate: 100.0,
    };
    let result = predict(&model, &heavy_profile, &low_protein).unwrap();
    assert_eq!(result.score, 2.0);
    assert_eq!(result.category, HealthCategory::Medium);

    // Very high fat and carbohydrate.
    let female = UserProfile::new(60, Gender::Female, 60.0, 160.0).unwrap();
    let excess = NutrientTotals {
        calories: 2500.0,
        fat: 90.0,
        proteins: 30.0,
        carbohydrate: 400.0,
    };
    let result = predict(&model, &female, &excess).unwrap();
    assert_eq!(result.score, 1.0);
    assert_eq!(result.category, HealthCategory::Poor);
}

#[test]
fn test_empty_session_refuses_to_predict() {
    let model = load_model(data_path("health_score_model.json")).unwrap();
    let session = Session::new(profile());
    assert!(matches!(session.predict(&model), Err(NutriError::EmptyLedger)));
}
