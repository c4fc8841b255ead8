use chrono::NaiveDate;
use common::ExplanationDto;
use common::dates::to_api_date;

use crate::api_client;

/// Fetch the model's reasoning for a single target date.
///
/// Not every date has an explanation; callers treat an error here as an
/// absent value, not a failure.
pub async fn fetch_explanation(
    commodity: &str,
    target_date: NaiveDate,
) -> Result<ExplanationDto, String> {
    log::trace!("Fetching explanation for {} on {}", commodity, target_date);
    let url = format!(
        "/explanations/{}?commodity={}",
        to_api_date(target_date),
        commodity
    );
    let result = api_client::get::<ExplanationDto>(&url).await;
    if let Err(ref e) = result {
        log::debug!("No explanation for {}: {}", target_date, e);
    }
    result
}
