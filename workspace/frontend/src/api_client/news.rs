use common::NewsItemDto;

use crate::api_client;

/// Fetch one page of market news.
pub async fn fetch_news(skip: u32, limit: u32) -> Result<Vec<NewsItemDto>, String> {
    log::trace!("Fetching news (skip={}, limit={})", skip, limit);
    let url = format!("/newsdb?skip={}&limit={}", skip, limit);
    let result = api_client::get::<Vec<NewsItemDto>>(&url).await;
    match &result {
        Ok(items) => log::info!("Fetched {} news items", items.len()),
        Err(e) => log::error!("Failed to fetch news: {}", e),
    }
    result
}
