use chrono::NaiveDate;
use common::MarketMetricsResponse;
use common::dates::to_api_date;

use crate::api_client;

/// Fetch the market-indicator grid for a commodity and date.
pub async fn fetch_market_metrics(
    commodity: &str,
    date: NaiveDate,
) -> Result<MarketMetricsResponse, String> {
    log::trace!("Fetching market metrics for {} on {}", commodity, date);
    let url = format!(
        "/market-metrics?commodity={}&date={}",
        commodity,
        to_api_date(date)
    );
    let result = api_client::get::<MarketMetricsResponse>(&url).await;
    match &result {
        Ok(resp) => log::info!("Fetched {} market metrics", resp.metrics.len()),
        Err(e) => log::error!("Failed to fetch market metrics: {}", e),
    }
    result
}
