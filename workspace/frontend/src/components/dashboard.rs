pub mod key_factors;
pub mod market_metrics;
pub mod news_feed;
pub mod reasoning_report;
pub mod selected_date;
pub mod similar_patterns;
