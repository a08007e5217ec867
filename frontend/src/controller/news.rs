use std::fmt::Display;

use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub description: String,
    pub source_name: String,
    pub published_at: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NewsState {
    #[default]
    Loading,
    Loaded(Vec<NewsItem>),
}

const FALLBACK_ARTICLES: [(&str, &str, &str); 3] = [
    (
        "AI Breakthrough: New Model Achieves Human-Level Reasoning",
        "Researchers announce major progress in artificial general intelligence capabilities.",
        "AI Research Journal",
    ),
    (
        "Global AI Summit Addresses Ethical Development",
        "World leaders collaborate on establishing guidelines for responsible AI advancement.",
        "Tech News Daily",
    ),
    (
        "Quantum Computing Accelerates AI Training Times",
        "New quantum algorithms reduce AI model training from weeks to hours.",
        "Future Tech Review",
    ),
];

/// Fixed articles shown whenever the live feed can't be loaded, stamped with
/// the time of the failure.
pub fn fallback_news(now: DateTime<Utc>) -> Vec<NewsItem> {
    let published_at = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    FALLBACK_ARTICLES
        .iter()
        .map(|(title, description, source)| NewsItem {
            title: title.to_string(),
            description: description.to_string(),
            source_name: source.to_string(),
            published_at: published_at.clone(),
            url: "#".to_string(),
        })
        .collect()
}

/// `M/D/YYYY` in the visitor's local time for RFC 3339 timestamps, anything
/// else is shown as-is.
pub fn format_published(published_at: &str) -> String {
    format_published_in(published_at, &Local)
}

pub fn format_published_in<Tz>(published_at: &str, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::parse_from_rfc3339(published_at) {
        Ok(date) => date.with_timezone(zone).format("%-m/%-d/%Y").to_string(),
        Err(_) => published_at.to_string(),
    }
}
