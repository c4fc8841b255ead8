//! What-if sensitivity model.
//!
//! A deterministic linear perturbation of a baseline forecast: each changed
//! feature contributes `(override - default) * sensitivity * direction`,
//! and the simulated forecast is the baseline plus the sum of
//! contributions, floored at zero.

use std::collections::HashMap;

use common::SimulationResponse;
use tracing::{debug, warn};

use crate::error::{EngineError, Result};
use crate::features::{self, FEATURE_TABLE};

/// Per-feature attribution of a simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureImpact {
    pub feature: String,
    pub value_change: f64,
    pub contribution: f64,
}

/// Output of one sensitivity computation.
///
/// `change` and `change_percent` reflect the unclamped arithmetic
/// (`change = sum of contributions`); only `simulated_forecast` floors at
/// zero, so a clamp never silently distorts the reported delta.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub original_forecast: f64,
    pub simulated_forecast: f64,
    pub change: f64,
    /// `None` when the baseline is zero.
    pub change_percent: Option<f64>,
    /// Changed features only, sorted by descending `|contribution|`;
    /// ties keep feature-table declaration order.
    pub feature_impacts: Vec<FeatureImpact>,
}

impl SimulationResult {
    /// An identity result: nothing changed against the baseline.
    pub fn unchanged(baseline: f64) -> Self {
        Self {
            original_forecast: baseline,
            simulated_forecast: baseline.max(0.0),
            change: 0.0,
            change_percent: (baseline != 0.0).then_some(0.0),
            feature_impacts: Vec::new(),
        }
    }

    /// Validates and converts a remote `/api/simulate` response.
    ///
    /// The caller treats a failure here as "keep the un-simulated series";
    /// nothing from a malformed payload leaks into view state.
    pub fn from_remote(response: &SimulationResponse) -> Result<Self> {
        let numbers = [
            response.original_forecast,
            response.simulated_forecast,
            response.change,
            response.change_percent,
        ];
        if numbers.iter().any(|n| !n.is_finite()) {
            return Err(EngineError::InvalidSimulation(
                "non-finite forecast or change".to_string(),
            ));
        }
        if response.simulated_forecast < 0.0 {
            return Err(EngineError::InvalidSimulation(format!(
                "negative simulated forecast {}",
                response.simulated_forecast
            )));
        }
        if response
            .feature_impacts
            .iter()
            .any(|i| !i.contribution.is_finite() || !i.value_change.is_finite())
        {
            return Err(EngineError::InvalidSimulation(
                "non-finite feature impact".to_string(),
            ));
        }

        Ok(Self {
            original_forecast: response.original_forecast,
            simulated_forecast: response.simulated_forecast,
            change: response.change,
            change_percent: (response.original_forecast != 0.0)
                .then_some(response.change_percent),
            feature_impacts: response
                .feature_impacts
                .iter()
                .map(|i| FeatureImpact {
                    feature: i.feature.clone(),
                    value_change: i.value_change,
                    contribution: i.contribution,
                })
                .collect(),
        })
    }
}

/// Computes the local linear what-if forecast.
///
/// Keys absent from the feature table are ignored (permissive merge);
/// values outside a feature's declared bounds are a caller error.
/// Identical inputs always yield identical output.
pub fn simulate(overrides: &HashMap<String, f64>, baseline: f64) -> Result<SimulationResult> {
    for key in overrides.keys() {
        if features::feature(key).is_none() {
            warn!("Ignoring override for unknown feature {:?}", key);
        }
    }

    let mut impacts = Vec::new();
    let mut total_change = 0.0;

    // Declaration order here is what makes the later sort's tie-break
    // stable and reproducible.
    for def in FEATURE_TABLE {
        let Some(&value) = overrides.get(def.key) else {
            continue;
        };
        if !value.is_finite() || value < def.min || value > def.max {
            return Err(EngineError::FeatureOutOfRange {
                key: def.key.to_string(),
                value,
                min: def.min,
                max: def.max,
            });
        }
        if value == def.default_value {
            continue;
        }

        let value_change = value - def.default_value;
        let contribution = value_change * def.sensitivity * def.direction.sign();
        impacts.push(FeatureImpact {
            feature: def.key.to_string(),
            value_change,
            contribution,
        });
        total_change += contribution;
    }

    impacts.sort_by(|a, b| {
        b.contribution
            .abs()
            .partial_cmp(&a.contribution.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(
        "Simulated {} changed features: baseline {} -> {}",
        impacts.len(),
        baseline,
        baseline + total_change
    );

    Ok(SimulationResult {
        original_forecast: baseline,
        simulated_forecast: (baseline + total_change).max(0.0),
        change: total_change,
        change_percent: (baseline != 0.0).then_some(total_change / baseline * 100.0),
        feature_impacts: impacts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::FeatureImpactDto;

    fn overrides(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn all_defaults_is_a_no_op() {
        let result = simulate(&features::default_values(), 452.30).unwrap();
        assert_eq!(result.change, 0.0);
        assert_eq!(result.simulated_forecast, 452.30);
        assert!(result.feature_impacts.is_empty());
        assert_eq!(result.change_percent, Some(0.0));
    }

    #[test]
    fn empty_overrides_is_a_no_op() {
        let result = simulate(&HashMap::new(), 452.30).unwrap();
        assert_eq!(result, SimulationResult::unchanged(452.30));
    }

    #[test]
    fn single_feature_contribution_matches_the_model() {
        // Baseline 450.0, 10Y_Yield raised from its 4.2 default to 5.2.
        let result = simulate(&overrides(&[("10Y_Yield", 5.2)]), 450.0).unwrap();

        assert_eq!(result.feature_impacts.len(), 1);
        let impact = &result.feature_impacts[0];
        assert_eq!(impact.feature, "10Y_Yield");
        assert!((impact.value_change - 1.0).abs() < 1e-12);

        let def = features::feature("10Y_Yield").unwrap();
        let expected = 1.0 * def.sensitivity * def.direction.sign();
        assert!((impact.contribution - expected).abs() < 1e-12);

        assert!((result.simulated_forecast - (450.0 + expected)).abs() < 1e-12);
        assert!(result.simulated_forecast >= 0.0);
    }

    #[test]
    fn total_change_is_the_sum_of_contributions() {
        let result = simulate(
            &overrides(&[("WTI", 85.0), ("USD_Index", 106.0), ("PDSI", -3.0)]),
            452.30,
        )
        .unwrap();

        let summed: f64 = result.feature_impacts.iter().map(|i| i.contribution).sum();
        assert!((result.change - summed).abs() < 1e-12);
        assert!(
            (result.simulated_forecast - (452.30 + summed)).abs() < 1e-12
        );
    }

    #[test]
    fn attribution_sorts_by_absolute_contribution() {
        // PDSI swing of -3.0 from default dominates a 1.0 WTI bump.
        let result = simulate(
            &overrides(&[("WTI", 76.5), ("PDSI", -3.8)]),
            452.30,
        )
        .unwrap();
        assert_eq!(result.feature_impacts[0].feature, "PDSI");
        assert_eq!(result.feature_impacts[1].feature, "WTI");
        assert!(
            result.feature_impacts[0].contribution.abs()
                >= result.feature_impacts[1].contribution.abs()
        );
    }

    #[test]
    fn unknown_keys_are_ignored_not_rejected() {
        let result = simulate(
            &overrides(&[("ETHANOL_PROD", 1.2), ("WTI", 80.0)]),
            452.30,
        )
        .unwrap();
        assert_eq!(result.feature_impacts.len(), 1);
        assert_eq!(result.feature_impacts[0].feature, "WTI");
    }

    #[test]
    fn out_of_range_values_are_a_caller_error() {
        let err = simulate(&overrides(&[("WTI", 120.0)]), 452.30).unwrap_err();
        assert!(matches!(err, EngineError::FeatureOutOfRange { .. }));

        let err = simulate(&overrides(&[("PDSI", f64::NAN)]), 452.30).unwrap_err();
        assert!(matches!(err, EngineError::FeatureOutOfRange { .. }));
    }

    #[test]
    fn negative_forecast_clamps_but_change_stays_arithmetic() {
        // A deep drought swing against a tiny baseline pushes the raw
        // forecast negative.
        let result = simulate(&overrides(&[("PDSI", 6.0)]), 10.0).unwrap();
        let def = features::feature("PDSI").unwrap();
        let expected_change = (6.0 - def.default_value) * def.sensitivity * def.direction.sign();

        assert_eq!(result.simulated_forecast, 0.0);
        // `change` reports the unclamped arithmetic.
        assert!((result.change - expected_change).abs() < 1e-12);
        let expected_percent = expected_change / 10.0 * 100.0;
        assert!((result.change_percent.unwrap() - expected_percent).abs() < 1e-12);
    }

    #[test]
    fn zero_baseline_has_undefined_change_percent() {
        let result = simulate(&overrides(&[("WTI", 80.0)]), 0.0).unwrap();
        assert!(result.change_percent.is_none());
    }

    #[test]
    fn identical_inputs_yield_identical_output() {
        let values = overrides(&[("WTI", 82.5), ("10Y_Yield", 3.6)]);
        let first = simulate(&values, 452.30).unwrap();
        let second = simulate(&values, 452.30).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn remote_response_converts_when_well_formed() {
        let response = SimulationResponse {
            original_forecast: 452.3,
            simulated_forecast: 458.1,
            change: 5.8,
            change_percent: 1.28,
            feature_impacts: vec![FeatureImpactDto {
                feature: "WTI".to_string(),
                value_change: 7.25,
                contribution: 5.8,
            }],
            predictions: Vec::new(),
        };
        let result = SimulationResult::from_remote(&response).unwrap();
        assert_eq!(result.simulated_forecast, 458.1);
        assert_eq!(result.feature_impacts.len(), 1);
        assert_eq!(result.change_percent, Some(1.28));
    }

    #[test]
    fn malformed_remote_response_is_rejected() {
        let mut response = SimulationResponse {
            original_forecast: 452.3,
            simulated_forecast: f64::NAN,
            change: 0.0,
            change_percent: 0.0,
            feature_impacts: Vec::new(),
            predictions: Vec::new(),
        };
        assert!(SimulationResult::from_remote(&response).is_err());

        response.simulated_forecast = -4.0;
        assert!(SimulationResult::from_remote(&response).is_err());
    }
}
