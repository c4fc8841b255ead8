//! Chart data reconciliation.
//!
//! Merges the two sparse series the prediction API returns (model
//! predictions keyed by target date, observed prices keyed by observation
//! date) into one dense, date-ordered sequence of display points.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use common::dates::to_display_date;
use common::{HistoricalPriceDto, PredictionDto, SimPointDto};
use tracing::{debug, warn};

/// Temporal role of a point relative to the reference "today".
/// Every point is in exactly one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayRole {
    Past,
    Today,
    Future,
}

/// One calendar day's combined view data.
#[derive(Debug, Clone, PartialEq)]
pub struct TimePoint {
    pub date: NaiveDate,
    pub role: DayRole,
    /// Model forecast; present for today and future days with a prediction.
    pub forecast: Option<f64>,
    pub conf_upper: Option<f64>,
    pub conf_lower: Option<f64>,
    /// Observed price; present for past/today days with an observation.
    pub actual: Option<f64>,
    /// The model's retrospective estimate for a strictly past day.
    pub model_past_estimate: Option<f64>,
    /// `|actual - estimate| / actual * 100`, defined only when both sides
    /// exist and the actual is non-zero.
    pub error_rate: Option<f64>,
    /// What-if overlay price, merged in by [`apply_simulation`] or
    /// [`apply_uniform_shift`].
    pub simulated: Option<f64>,
}

impl TimePoint {
    pub fn is_future(&self) -> bool {
        self.role == DayRole::Future
    }

    pub fn is_today(&self) -> bool {
        self.role == DayRole::Today
    }

    /// Short `M/D` label used on the chart axis and in section headers.
    pub fn display_date(&self) -> String {
        to_display_date(self.date)
    }
}

/// Merges predictions and observed prices into a date-ordered series.
///
/// The output covers exactly the union of input dates (no synthetic
/// filling) sorted ascending. Duplicate dates within one input keep the
/// last occurrence. Both inputs empty yields an empty series, never an
/// error. Pure function of its inputs plus the reference date.
pub fn reconcile(
    predictions: &[PredictionDto],
    actuals: &[HistoricalPriceDto],
    today: NaiveDate,
) -> Vec<TimePoint> {
    if predictions.is_empty() && actuals.is_empty() {
        return Vec::new();
    }

    let mut prediction_by_date: BTreeMap<NaiveDate, &PredictionDto> = BTreeMap::new();
    for prediction in predictions {
        prediction_by_date.insert(prediction.target_date, prediction);
    }

    let mut actual_by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for price in actuals {
        actual_by_date.insert(price.date, price.actual_price);
    }

    let mut dates: Vec<NaiveDate> = prediction_by_date.keys().copied().collect();
    dates.extend(actual_by_date.keys().copied());
    dates.sort_unstable();
    dates.dedup();

    let mut points = Vec::with_capacity(dates.len());
    for date in dates {
        let role = if date > today {
            DayRole::Future
        } else if date == today {
            DayRole::Today
        } else {
            DayRole::Past
        };

        let mut point = TimePoint {
            date,
            role,
            forecast: None,
            conf_upper: None,
            conf_lower: None,
            actual: None,
            model_past_estimate: None,
            error_rate: None,
            simulated: None,
        };

        if role != DayRole::Future {
            point.actual = actual_by_date.get(&date).copied();
        }

        if let Some(prediction) = prediction_by_date.get(&date) {
            match role {
                DayRole::Future | DayRole::Today => {
                    point.forecast = Some(prediction.price_pred);
                    point.conf_upper = prediction.conf_upper;
                    point.conf_lower = prediction.conf_lower;
                }
                DayRole::Past => {
                    point.model_past_estimate = Some(prediction.price_pred);
                    point.error_rate = match point.actual {
                        Some(actual) if actual != 0.0 => {
                            Some((actual - prediction.price_pred).abs() / actual * 100.0)
                        }
                        _ => None,
                    };
                }
            }
        }

        points.push(point);
    }

    debug!(
        "Reconciled {} predictions + {} actuals into {} points",
        predictions.len(),
        actuals.len(),
        points.len()
    );
    points
}

/// Retrospective model accuracy over the past portion of a series:
/// `100 - mean(error_rate)` across the past points that carry one, floored
/// at zero. `None` when no past point has an error rate.
pub fn model_accuracy(points: &[TimePoint]) -> Option<f64> {
    let errors: Vec<f64> = points
        .iter()
        .filter(|p| p.role == DayRole::Past)
        .filter_map(|p| p.error_rate)
        .collect();
    if errors.is_empty() {
        return None;
    }
    let mean = errors.iter().sum::<f64>() / errors.len() as f64;
    Some((100.0 - mean).max(0.0))
}

/// Merges a remote simulation's per-date prices into the series.
///
/// Only forecast-bearing points (today/future) are touched. An overlay
/// that matches no point in the series is treated as a no-op and the
/// series is returned unchanged.
pub fn apply_simulation(points: &[TimePoint], overlay: &[SimPointDto]) -> Vec<TimePoint> {
    let simulated_by_date: BTreeMap<NaiveDate, f64> = overlay
        .iter()
        .map(|p| (p.date, p.simulated_price))
        .collect();

    let mut merged = points.to_vec();
    let mut matched = 0usize;
    for point in merged.iter_mut() {
        if point.forecast.is_none() {
            continue;
        }
        if let Some(price) = simulated_by_date.get(&point.date) {
            point.simulated = Some(*price);
            matched += 1;
        }
    }

    if matched == 0 {
        warn!(
            "Simulation overlay with {} points matched no chart date; keeping base series",
            overlay.len()
        );
        return points.to_vec();
    }

    debug!("Simulation overlay applied to {} chart points", matched);
    merged
}

/// Local-model equivalent of [`apply_simulation`]: shifts every
/// forecast-bearing point by a uniform change, floored at zero.
pub fn apply_uniform_shift(points: &[TimePoint], change: f64) -> Vec<TimePoint> {
    let mut shifted = points.to_vec();
    for point in shifted.iter_mut() {
        if let Some(forecast) = point.forecast {
            point.simulated = Some((forecast + change).max(0.0));
        }
    }
    shifted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn prediction(y: i32, m: u32, d: u32, price: f64) -> PredictionDto {
        PredictionDto {
            target_date: date(y, m, d),
            price_pred: price,
            conf_upper: Some(price + 5.0),
            conf_lower: Some(price - 5.0),
        }
    }

    fn actual(y: i32, m: u32, d: u32, price: f64) -> HistoricalPriceDto {
        HistoricalPriceDto {
            date: date(y, m, d),
            actual_price: price,
        }
    }

    #[test]
    fn empty_inputs_yield_empty_series() {
        assert!(reconcile(&[], &[], date(2026, 1, 15)).is_empty());
    }

    #[test]
    fn output_covers_union_sorted_without_duplicates() {
        let predictions = vec![
            prediction(2026, 1, 20, 455.0),
            prediction(2026, 1, 10, 450.0),
            prediction(2026, 1, 16, 452.0),
        ];
        let actuals = vec![
            actual(2026, 1, 10, 449.0),
            actual(2026, 1, 12, 451.0),
        ];

        let points = reconcile(&predictions, &actuals, date(2026, 1, 15));
        // Union of {1/20, 1/10, 1/16} and {1/10, 1/12} = 4 dates.
        assert_eq!(points.len(), 4);
        for pair in points.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn past_today_future_scenario_from_disjoint_inputs() {
        // Predictions 2026-02-01..03, actuals 2026-01-01..03, today 2026-01-15.
        let predictions = vec![
            prediction(2026, 2, 1, 455.0),
            prediction(2026, 2, 2, 456.0),
            prediction(2026, 2, 3, 457.0),
        ];
        let actuals = vec![
            actual(2026, 1, 1, 448.0),
            actual(2026, 1, 2, 449.0),
            actual(2026, 1, 3, 450.0),
        ];

        let points = reconcile(&predictions, &actuals, date(2026, 1, 15));
        assert_eq!(points.len(), 6);

        let (past, future): (Vec<_>, Vec<_>) =
            points.iter().partition(|p| p.role == DayRole::Past);
        assert_eq!(past.len(), 3);
        assert_eq!(future.len(), 3);
        for p in past {
            assert!(p.actual.is_some());
            assert!(p.forecast.is_none());
            assert!(p.conf_upper.is_none());
        }
        for p in future {
            assert_eq!(p.role, DayRole::Future);
            assert!(p.forecast.is_some());
            assert!(p.conf_upper.is_some());
            assert!(p.conf_lower.is_some());
            assert!(p.actual.is_none());
        }
    }

    #[test]
    fn past_overlap_produces_error_rate() {
        let predictions = vec![prediction(2026, 1, 10, 440.0)];
        let actuals = vec![actual(2026, 1, 10, 450.0)];

        let points = reconcile(&predictions, &actuals, date(2026, 1, 15));
        assert_eq!(points.len(), 1);
        let point = &points[0];
        assert_eq!(point.role, DayRole::Past);
        assert_eq!(point.model_past_estimate, Some(440.0));
        let expected = (450.0_f64 - 440.0).abs() / 450.0 * 100.0;
        assert!((point.error_rate.unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn error_rate_absent_when_either_side_missing() {
        // Past prediction without an actual.
        let points = reconcile(&[prediction(2026, 1, 10, 440.0)], &[], date(2026, 1, 15));
        assert_eq!(points[0].model_past_estimate, Some(440.0));
        assert!(points[0].error_rate.is_none());

        // Past actual without a prediction.
        let points = reconcile(&[], &[actual(2026, 1, 10, 450.0)], date(2026, 1, 15));
        assert!(points[0].model_past_estimate.is_none());
        assert!(points[0].error_rate.is_none());
    }

    #[test]
    fn error_rate_guards_zero_actual() {
        let points = reconcile(
            &[prediction(2026, 1, 10, 440.0)],
            &[actual(2026, 1, 10, 0.0)],
            date(2026, 1, 15),
        );
        assert_eq!(points[0].actual, Some(0.0));
        assert!(points[0].error_rate.is_none());
    }

    #[test]
    fn today_carries_both_actual_and_forecast() {
        let points = reconcile(
            &[prediction(2026, 1, 15, 452.0)],
            &[actual(2026, 1, 15, 451.0)],
            date(2026, 1, 15),
        );
        assert_eq!(points.len(), 1);
        let today = &points[0];
        assert_eq!(today.role, DayRole::Today);
        assert_eq!(today.actual, Some(451.0));
        assert_eq!(today.forecast, Some(452.0));
        assert!(today.error_rate.is_none());
    }

    #[test]
    fn duplicate_dates_keep_last_occurrence() {
        let predictions = vec![
            prediction(2026, 2, 1, 455.0),
            prediction(2026, 2, 1, 460.0),
        ];
        let points = reconcile(&predictions, &[], date(2026, 1, 15));
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].forecast, Some(460.0));
    }

    #[test]
    fn accuracy_averages_past_error_rates() {
        let predictions = vec![
            prediction(2026, 1, 10, 440.0), // error 2.222…%
            prediction(2026, 1, 11, 450.0), // error 0%
        ];
        let actuals = vec![
            actual(2026, 1, 10, 450.0),
            actual(2026, 1, 11, 450.0),
        ];
        let points = reconcile(&predictions, &actuals, date(2026, 1, 15));
        let accuracy = model_accuracy(&points).unwrap();
        let expected = 100.0 - ((10.0 / 450.0 * 100.0) + 0.0) / 2.0;
        assert!((accuracy - expected).abs() < 1e-12);
    }

    #[test]
    fn accuracy_is_none_without_past_errors() {
        let points = reconcile(&[prediction(2026, 2, 1, 455.0)], &[], date(2026, 1, 15));
        assert!(model_accuracy(&points).is_none());
        assert!(model_accuracy(&[]).is_none());
    }

    #[test]
    fn simulation_overlay_merges_by_date() {
        let points = reconcile(
            &[prediction(2026, 2, 1, 455.0), prediction(2026, 2, 2, 456.0)],
            &[],
            date(2026, 1, 15),
        );
        let overlay = vec![SimPointDto {
            date: date(2026, 2, 1),
            original_price: 455.0,
            simulated_price: 470.0,
        }];

        let merged = apply_simulation(&points, &overlay);
        assert_eq!(merged[0].simulated, Some(470.0));
        assert!(merged[1].simulated.is_none());
        // Base fields are untouched.
        assert_eq!(merged[0].forecast, Some(455.0));
    }

    #[test]
    fn mismatched_overlay_is_a_no_op() {
        let points = reconcile(&[prediction(2026, 2, 1, 455.0)], &[], date(2026, 1, 15));
        let overlay = vec![SimPointDto {
            date: date(2026, 3, 1),
            original_price: 455.0,
            simulated_price: 470.0,
        }];

        let merged = apply_simulation(&points, &overlay);
        assert_eq!(merged, points);
    }

    #[test]
    fn uniform_shift_floors_at_zero() {
        let points = reconcile(&[prediction(2026, 2, 1, 10.0)], &[], date(2026, 1, 15));
        let shifted = apply_uniform_shift(&points, -25.0);
        assert_eq!(shifted[0].simulated, Some(0.0));
        let shifted = apply_uniform_shift(&points, 4.5);
        assert_eq!(shifted[0].simulated, Some(14.5));
    }
}
