//! Common transport-layer types shared between the engine and the frontend.
//! These structs mirror the prediction API's request/response payloads so
//! both crates can deserialize responses without duplicating shapes.

pub mod dates;

use serde::{Deserialize, Serialize};

// ===================== Predictions =====================

/// One model prediction, keyed by the date it targets.
/// Confidence bounds are only supplied for future target dates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionDto {
    pub target_date: chrono::NaiveDate,
    pub price_pred: f64,
    pub conf_upper: Option<f64>,
    pub conf_lower: Option<f64>,
}

/// One observed settlement price, keyed by observation date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoricalPriceDto {
    pub date: chrono::NaiveDate,
    pub actual_price: f64,
}

/// Response of `GET /api/predictions?commodity=`: the prediction window
/// plus the trailing window of observed prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PredictionsResponse {
    #[serde(default)]
    pub predictions: Vec<PredictionDto>,
    #[serde(default)]
    pub historical_prices: Vec<HistoricalPriceDto>,
}

// ===================== Explanations =====================

/// A high-impact news item cited by the model's reasoning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImpactNewsDto {
    pub source: String,
    pub title: String,
    /// Impact score on a 0-100 scale.
    pub impact: u32,
    pub analysis: String,
}

/// One entry of the model's feature-importance ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopFactorDto {
    pub name: String,
    pub category: String,
    /// Contribution ratio in `[0, 1]`.
    pub ratio: f64,
}

/// Response of `GET /api/explanations/{date}?commodity=`.
/// Absence of an explanation for a date is a 404, not an error state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExplanationDto {
    pub content: String,
    #[serde(default)]
    pub impact_news: Vec<ImpactNewsDto>,
    #[serde(default)]
    pub top_factors: Vec<TopFactorDto>,
    pub llm_model: Option<String>,
}

// ===================== News =====================

/// Direction a news item is expected to push the price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Pos,
    Neg,
}

/// One row of `GET /api/newsdb?skip=&limit=`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsItemDto {
    pub id: String,
    pub source: String,
    pub title: String,
    pub sentiment: Sentiment,
    /// Human-readable recency, e.g. "12h ago".
    pub time: String,
    pub date: chrono::NaiveDate,
    pub content: Option<String>,
}

// ===================== Market metrics =====================

/// Qualitative weight the model assigns a metric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// One indicator row of `GET /api/market-metrics?commodity=&date=`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketMetricDto {
    pub metric_id: String,
    pub label: String,
    pub numeric_value: f64,
    /// Percent change against the previous session.
    pub trend: f64,
    pub impact: Impact,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MarketMetricsResponse {
    #[serde(default)]
    pub metrics: Vec<MarketMetricDto>,
}

// ===================== Simulation =====================

/// Request body of `POST /api/simulate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulateRequest {
    pub commodity: String,
    pub base_date: chrono::NaiveDate,
    pub feature_overrides: std::collections::HashMap<String, f64>,
}

/// Per-feature attribution row returned by the remote simulation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureImpactDto {
    pub feature: String,
    pub value_change: f64,
    pub contribution: f64,
}

/// One simulated point of the forecast horizon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimPointDto {
    pub date: chrono::NaiveDate,
    pub original_price: f64,
    pub simulated_price: f64,
}

/// Response body of `POST /api/simulate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationResponse {
    pub original_forecast: f64,
    pub simulated_forecast: f64,
    pub change: f64,
    pub change_percent: f64,
    #[serde(default)]
    pub feature_impacts: Vec<FeatureImpactDto>,
    #[serde(default)]
    pub predictions: Vec<SimPointDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predictions_response_deserializes_api_shape() {
        let body = r#"{
            "predictions": [
                {"target_date": "2026-02-01", "price_pred": 455.2, "conf_upper": 462.0, "conf_lower": 448.4}
            ],
            "historical_prices": [
                {"date": "2026-01-05", "actual_price": 449.75}
            ]
        }"#;
        let resp: PredictionsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.predictions.len(), 1);
        assert_eq!(
            resp.predictions[0].target_date,
            chrono::NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
        );
        assert_eq!(resp.historical_prices[0].actual_price, 449.75);
    }

    #[test]
    fn predictions_response_tolerates_missing_sections() {
        let resp: PredictionsResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.predictions.is_empty());
        assert!(resp.historical_prices.is_empty());
    }

    #[test]
    fn sentiment_uses_lowercase_wire_form() {
        assert_eq!(serde_json::to_string(&Sentiment::Pos).unwrap(), "\"pos\"");
        let s: Sentiment = serde_json::from_str("\"neg\"").unwrap();
        assert_eq!(s, Sentiment::Neg);
    }

    #[test]
    fn simulate_request_serializes_overrides() {
        let mut overrides = std::collections::HashMap::new();
        overrides.insert("WTI".to_string(), 82.5);
        let req = SimulateRequest {
            commodity: "corn".to_string(),
            base_date: chrono::NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            feature_overrides: overrides,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"base_date\":\"2026-01-15\""));
        assert!(json.contains("\"WTI\":82.5"));
    }
}
