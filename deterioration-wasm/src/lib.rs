//! WASM <-> JavaScript bridge for dashboards consuming deterioration scores.

use std::collections::BTreeMap;

use deterioration_core::{
    score_trajectory_detailed, PatientTimeline, TrackedFeature, TrajectoryReport, WeightTable,
};
use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[derive(Deserialize, Default)]
struct JsScoringConfig {
    /// Replaces the reference weight table when present.
    #[serde(default)]
    weights: Option<BTreeMap<TrackedFeature, f64>>,
}

impl TryFrom<JsScoringConfig> for WeightTable {
    type Error = String;

    fn try_from(cfg: JsScoringConfig) -> Result<Self, Self::Error> {
        match cfg.weights {
            Some(weights) => WeightTable::new(weights).map_err(|err| err.to_string()),
            None => Ok(WeightTable::reference()),
        }
    }
}

/// Score a timeline handed over from JavaScript.
///
/// Resolves to the full [`TrajectoryReport`], or rejects with a message
/// naming the offending time step and feature.
#[wasm_bindgen(js_name = scoreTrajectory)]
pub fn score_trajectory(timeline: JsValue, config: Option<JsValue>) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let timeline_value = from_value::<serde_json::Value>(timeline)
        .map_err(|err| JsValue::from_str(&format!("Cannot read timeline: {err}")))?;

    let config_value = match config {
        Some(js_cfg) if !js_cfg.is_undefined() && !js_cfg.is_null() => Some(
            from_value::<serde_json::Value>(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("Cannot read config: {err}")))?,
        ),
        _ => None,
    };

    let report = score_json(timeline_value, config_value).map_err(|err| JsValue::from_str(&err))?;

    to_value(&report).map_err(|err| JsValue::from_str(&format!("Cannot serialize report: {err}")))
}

/// JSON-level entry point shared by the JS binding and native callers.
pub fn score_json(
    timeline: serde_json::Value,
    config: Option<serde_json::Value>,
) -> Result<TrajectoryReport, String> {
    let timeline: PatientTimeline =
        serde_json::from_value(timeline).map_err(|err| format!("Cannot read timeline: {err}"))?;

    let cfg = match config {
        Some(value) => serde_json::from_value::<JsScoringConfig>(value)
            .map_err(|err| format!("Cannot read config: {err}"))?,
        None => JsScoringConfig::default(),
    };
    let weights = WeightTable::try_from(cfg)?;

    score_trajectory_detailed(&timeline, &weights).map_err(|err| format!("Scoring error: {err}"))
}
