//! Random-forest classifier loaded from a frozen JSON export.
//!
//! Split nodes send a row left when `x <= threshold`. Categorical inputs are
//! ordinal-encoded by their position in the feature's `levels`. The forest
//! averages each tree's normalised leaf distribution and reports the class
//! with the highest mean probability (first one on ties).

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

use crate::error::{NutriError, Result};
use crate::predictor::features::{FeatureRecord, FeatureValue};
use crate::predictor::ScorePredictor;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FeatureKind {
    Numeric,
    Categorical { levels: Vec<String> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSpec {
    pub name: String,
    #[serde(flatten)]
    pub kind: FeatureKind,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: Vec<f64>,
    },
}

#[derive(Debug, Clone, Deserialize)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Walk from the root to a leaf and return its class distribution.
    fn leaf_for(&self, row: &[f64]) -> &[f64] {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if row[*feature] <= *threshold { *left } else { *right };
                }
                Node::Leaf { value } => return value,
            }
        }
    }

    fn validate(&self, tree_idx: usize, n_features: usize, n_classes: usize) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(model_err(format!("tree {} has no nodes", tree_idx)));
        }

        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= n_features {
                        return Err(model_err(format!(
                            "tree {} node {} splits on unknown feature {}",
                            tree_idx, idx, feature
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(model_err(format!(
                            "tree {} node {} has a non-finite threshold",
                            tree_idx, idx
                        )));
                    }
                    // Children after parent keeps every walk acyclic.
                    for child in [*left, *right] {
                        if child <= idx || child >= self.nodes.len() {
                            return Err(model_err(format!(
                                "tree {} node {} has invalid child {}",
                                tree_idx, idx, child
                            )));
                        }
                    }
                }
                Node::Leaf { value } => {
                    if value.len() != n_classes {
                        return Err(model_err(format!(
                            "tree {} leaf {} has {} class weights, expected {}",
                            tree_idx,
                            idx,
                            value.len(),
                            n_classes
                        )));
                    }
                    let total: f64 = value.iter().sum();
                    if value.iter().any(|v| !v.is_finite() || *v < 0.0) || total <= 0.0 {
                        return Err(model_err(format!(
                            "tree {} leaf {} has an invalid class distribution",
                            tree_idx, idx
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

/// On-disk shape of the model, before validation.
#[derive(Debug, Deserialize)]
struct RawForest {
    #[serde(default)]
    name: String,
    features: Vec<FeatureSpec>,
    classes: Vec<f64>,
    trees: Vec<Tree>,
}

impl RawForest {
    fn validate(&self) -> Result<()> {
        if self.features.is_empty() {
            return Err(model_err("model declares no features".to_string()));
        }
        if self.classes.is_empty() {
            return Err(model_err("model declares no classes".to_string()));
        }
        if self.trees.is_empty() {
            return Err(model_err("model has no trees".to_string()));
        }

        let mut seen = HashSet::new();
        for spec in &self.features {
            if !seen.insert(spec.name.as_str()) {
                return Err(model_err(format!("duplicate feature '{}'", spec.name)));
            }
            if let FeatureKind::Categorical { levels } = &spec.kind {
                if levels.is_empty() {
                    return Err(model_err(format!(
                        "categorical feature '{}' has no levels",
                        spec.name
                    )));
                }
            }
        }

        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(i, self.features.len(), self.classes.len())?;
        }

        Ok(())
    }
}

/// A validated forest. Every way of obtaining one runs the structural checks,
/// so inference can index rows and nodes freely.
#[derive(Debug, Clone)]
pub struct ForestModel {
    name: String,
    features: Vec<FeatureSpec>,
    classes: Vec<f64>,
    trees: Vec<Tree>,
}

impl<'de> Deserialize<'de> for ForestModel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawForest::deserialize(deserializer)?;
        ForestModel::from_raw(raw).map_err(serde::de::Error::custom)
    }
}

impl ForestModel {
    /// Parse and validate a model from its JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawForest =
            serde_json::from_str(json).map_err(|e| model_err(format!("invalid JSON: {}", e)))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawForest) -> Result<Self> {
        raw.validate()?;
        Ok(Self {
            name: raw.name,
            features: raw.features,
            classes: raw.classes,
            trees: raw.trees,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Input features in positional order.
    pub fn features(&self) -> &[FeatureSpec] {
        &self.features
    }

    pub fn classes(&self) -> &[f64] {
        &self.classes
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Turn a named record into the model's positional row.
    ///
    /// The record must carry exactly the model's features with matching types.
    pub fn encode(&self, record: &FeatureRecord) -> Result<Vec<f64>> {
        for name in record.names() {
            if !self.features.iter().any(|spec| spec.name == name) {
                return Err(NutriError::InferenceSchema(format!(
                    "unexpected feature '{}'",
                    name
                )));
            }
        }

        self.features
            .iter()
            .map(|spec| {
                let value = record.get(&spec.name).ok_or_else(|| {
                    NutriError::InferenceSchema(format!("missing feature '{}'", spec.name))
                })?;
                encode_value(spec, value)
            })
            .collect()
    }

    /// Mean class probabilities across all trees.
    ///
    /// `row` must come from [`ForestModel::encode`].
    fn predict_proba(&self, row: &[f64]) -> Vec<f64> {
        let mut proba = vec![0.0; self.classes.len()];
        for tree in &self.trees {
            let leaf = tree.leaf_for(row);
            let total: f64 = leaf.iter().sum();
            for (p, weight) in proba.iter_mut().zip(leaf) {
                *p += weight / total;
            }
        }

        let n_trees = self.trees.len() as f64;
        proba.iter_mut().for_each(|p| *p /= n_trees);
        proba
    }

    /// Class label with the highest mean probability.
    fn predict_row(&self, row: &[f64]) -> f64 {
        let proba = self.predict_proba(row);
        let mut best = 0;
        for (i, p) in proba.iter().enumerate() {
            if *p > proba[best] {
                best = i;
            }
        }
        self.classes[best]
    }
}

impl ScorePredictor for ForestModel {
    fn predict_score(&self, record: &FeatureRecord) -> Result<f64> {
        let row = self.encode(record)?;
        let score = self.predict_row(&row);
        debug!(?row, score, "Forest inference");
        Ok(score)
    }
}

/// Load and validate a forest model from a JSON file.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<ForestModel> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| model_err(format!("cannot read {}: {}", path.display(), e)))?;

    let model = ForestModel::from_json_str(&content)?;
    info!(
        path = %path.display(),
        name = %model.name,
        trees = model.trees.len(),
        "Loaded health score model"
    );
    Ok(model)
}

fn encode_value(spec: &FeatureSpec, value: &FeatureValue) -> Result<f64> {
    match (&spec.kind, value) {
        (FeatureKind::Numeric, FeatureValue::Number(n)) if n.is_finite() => Ok(*n),
        (FeatureKind::Numeric, FeatureValue::Number(n)) => Err(NutriError::InferenceSchema(
            format!("feature '{}' is not finite: {}", spec.name, n),
        )),
        (FeatureKind::Categorical { levels }, FeatureValue::Category(c)) => levels
            .iter()
            .position(|level| level == c)
            .map(|idx| idx as f64)
            .ok_or_else(|| {
                NutriError::InferenceSchema(format!(
                    "feature '{}' has unknown level {:?}",
                    spec.name, c
                ))
            }),
        (FeatureKind::Numeric, other) => Err(NutriError::InferenceSchema(format!(
            "feature '{}' expects a number, got {}",
            spec.name, other
        ))),
        (FeatureKind::Categorical { .. }, other) => Err(NutriError::InferenceSchema(format!(
            "feature '{}' expects a category, got {}",
            spec.name, other
        ))),
    }
}

fn model_err(msg: String) -> NutriError {
    NutriError::ModelLoad(msg)
}
