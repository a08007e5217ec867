use chrono::{Local, NaiveDate, TimeZone};

pub const NEWS_ENDPOINT: &str = "https://gnews.io/api/v4/search";
pub const NEWS_QUERY: &str = "artificial intelligence";
pub const NEWS_LANGUAGE: &str = "en";
pub const NEWS_MAX_RESULTS: u8 = 6;

/// News API credential, taken from `GNEWS_API_KEY` when the bundle is built.
pub fn get_news_api_key() -> Option<&'static str> {
    option_env!("GNEWS_API_KEY").filter(|key| !key.trim().is_empty())
}

/// Midnight at the start of 2050 in the visitor's local time, as epoch millis.
pub fn get_countdown_target_ms() -> i64 {
    let midnight = NaiveDate::from_ymd_opt(2050, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default();
    match Local.from_local_datetime(&midnight).earliest() {
        Some(local) => local.timestamp_millis(),
        None => midnight.and_utc().timestamp_millis(),
    }
}
