use chrono::NaiveDate;
use common::dates::to_api_date;
use common::{PredictionDto, PredictionsResponse};

use crate::api_client;

/// Fetch the prediction window plus the trailing window of observed prices.
pub async fn fetch_predictions(commodity: &str) -> Result<PredictionsResponse, String> {
    log::trace!("Fetching predictions for commodity: {}", commodity);
    let url = format!("/predictions?commodity={}", commodity);
    let result = api_client::get::<PredictionsResponse>(&url).await;
    match &result {
        Ok(resp) => log::info!(
            "Fetched {} predictions, {} historical prices",
            resp.predictions.len(),
            resp.historical_prices.len()
        ),
        Err(e) => log::error!("Failed to fetch predictions: {}", e),
    }
    result
}

/// Fetch the prediction detail for a single target date.
pub async fn fetch_prediction_detail(
    commodity: &str,
    target_date: NaiveDate,
) -> Result<PredictionDto, String> {
    log::trace!(
        "Fetching prediction detail for {} on {}",
        commodity,
        target_date
    );
    let url = format!(
        "/predictions/{}?commodity={}",
        to_api_date(target_date),
        commodity
    );
    let result = api_client::get::<PredictionDto>(&url).await;
    if let Err(ref e) = result {
        log::error!("Failed to fetch prediction detail for {}: {}", target_date, e);
    }
    result
}
