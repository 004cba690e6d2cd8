use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::WeightError;
use crate::feature::TrackedFeature;

const REFERENCE_WEIGHTS: [(TrackedFeature, f64); 10] = [
    (TrackedFeature::Hr, 0.053),
    (TrackedFeature::Resp, 0.061),
    (TrackedFeature::O2Sat, 0.071),
    (TrackedFeature::Temp, 0.048),
    (TrackedFeature::Map, 0.082),
    (TrackedFeature::Wbc, 0.057),
    (TrackedFeature::Platelets, 0.052),
    (TrackedFeature::Creatinine, 0.064),
    (TrackedFeature::Glucose, 0.039),
    (TrackedFeature::Lactate, 0.103),
];

/// Relative clinical importance of each tracked feature.
///
/// The features present in the table are the ones a trajectory is scored on.
/// Weights are finite and strictly positive; they need not sum to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<TrackedFeature, f64>",
    into = "BTreeMap<TrackedFeature, f64>"
)]
pub struct WeightTable {
    weights: BTreeMap<TrackedFeature, f64>,
}

impl WeightTable {
    /// Reference configuration covering all ten features.
    pub fn reference() -> Self {
        Self {
            weights: REFERENCE_WEIGHTS.into_iter().collect(),
        }
    }

    pub fn new<I>(pairs: I) -> Result<Self, WeightError>
    where
        I: IntoIterator<Item = (TrackedFeature, f64)>,
    {
        let mut weights = BTreeMap::new();
        for (feature, weight) in pairs {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(WeightError::InvalidWeight { feature, weight });
            }
            if weights.insert(feature, weight).is_some() {
                return Err(WeightError::DuplicateFeature(feature));
            }
        }
        if weights.is_empty() {
            return Err(WeightError::Empty);
        }
        Ok(Self { weights })
    }

    /// Parse a JSON object such as `{"hr": 0.053, "lactate": 0.103}`.
    pub fn from_json_str(input: &str) -> Result<Self, WeightError> {
        let raw: BTreeMap<TrackedFeature, f64> =
            serde_json::from_str(input).map_err(|err| WeightError::Parse(err.to_string()))?;
        Self::new(raw)
    }

    pub fn weight(&self, feature: TrackedFeature) -> Option<f64> {
        self.weights.get(&feature).copied()
    }

    /// Tracked features in canonical order.
    pub fn features(&self) -> impl Iterator<Item = TrackedFeature> + '_ {
        self.weights.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TrackedFeature, f64)> + '_ {
        self.weights.iter().map(|(feature, weight)| (*feature, *weight))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::reference()
    }
}

impl TryFrom<BTreeMap<TrackedFeature, f64>> for WeightTable {
    type Error = WeightError;

    fn try_from(value: BTreeMap<TrackedFeature, f64>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WeightTable> for BTreeMap<TrackedFeature, f64> {
    fn from(table: WeightTable) -> Self {
        table.weights
    }
}
