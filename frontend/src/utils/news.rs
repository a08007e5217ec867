use chrono::Utc;
use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

use crate::config;
use crate::controller::news::{fallback_news, NewsItem};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NewsError {
    #[error("news API key not configured")]
    MissingCredential,
    #[error("news request failed with status {0}")]
    HttpFailure(u16),
    #[error("news request failed: {0}")]
    NetworkOrParse(String),
}

impl From<gloo_net::Error> for NewsError {
    fn from(err: gloo_net::Error) -> Self {
        NewsError::NetworkOrParse(err.to_string())
    }
}

impl From<serde_json::Error> for NewsError {
    fn from(err: serde_json::Error) -> Self {
        NewsError::NetworkOrParse(err.to_string())
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Deserialize)]
struct Article {
    title: String,
    #[serde(default)]
    description: Option<String>,
    source: ArticleSource,
    #[serde(rename = "publishedAt")]
    published_at: String,
    #[serde(default)]
    url: String,
}

#[derive(Deserialize)]
struct ArticleSource {
    name: String,
}

impl From<Article> for NewsItem {
    fn from(article: Article) -> Self {
        NewsItem {
            title: article.title,
            description: article.description.unwrap_or_default(),
            source_name: article.source.name,
            published_at: article.published_at,
            url: article.url,
        }
    }
}

pub fn search_url(api_key: &str) -> String {
    format!(
        "{}?q={}&lang={}&max={}&apikey={}",
        config::NEWS_ENDPOINT,
        urlencoding::encode(config::NEWS_QUERY),
        config::NEWS_LANGUAGE,
        config::NEWS_MAX_RESULTS,
        urlencoding::encode(api_key),
    )
}

/// Decodes a search response body. A body without `articles` is an empty feed,
/// not an error.
pub fn parse_search_response(body: &str) -> Result<Vec<NewsItem>, NewsError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.articles.into_iter().map(NewsItem::from).collect())
}

/// Single request to the news search endpoint. No retry, no pagination.
pub async fn fetch_news(api_key: Option<&str>) -> Result<Vec<NewsItem>, NewsError> {
    let api_key = api_key.ok_or(NewsError::MissingCredential)?;

    let response = Request::get(&search_url(api_key)).send().await?;
    if !response.ok() {
        gloo_console::log!(format!("News search returned status {}", response.status()));
        return Err(NewsError::HttpFailure(response.status()));
    }

    let body = response.text().await?;
    parse_search_response(&body)
}

/// Live articles when the fetch works, the fixed fallback list otherwise. The
/// failure is logged and never reaches the page.
pub async fn load_news(api_key: Option<&str>) -> Vec<NewsItem> {
    match fetch_news(api_key).await {
        Ok(items) => {
            log::info!("Loaded {} news articles", items.len());
            items
        }
        Err(e) => {
            log::error!("Error fetching AI news: {}", e);
            fallback_news(Utc::now())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn missing_credential_falls_back() {
        assert_eq!(
            block_on(fetch_news(None)),
            Err(NewsError::MissingCredential)
        );

        let news = block_on(load_news(None));
        assert_eq!(news.len(), 3);
        let titles: Vec<&str> = news.iter().map(|item| item.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "AI Breakthrough: New Model Achieves Human-Level Reasoning",
                "Global AI Summit Addresses Ethical Development",
                "Quantum Computing Accelerates AI Training Times",
            ]
        );
    }

    #[test]
    fn builds_search_url() {
        assert_eq!(
            search_url("k3y"),
            "https://gnews.io/api/v4/search?q=artificial%20intelligence&lang=en&max=6&apikey=k3y"
        );
    }

    #[test]
    fn parses_articles() {
        let body = r#"{
            "totalArticles": 2,
            "articles": [
                {
                    "title": "Chips get faster",
                    "description": "A new accelerator ships.",
                    "content": "ignored",
                    "url": "https://example.com/chips",
                    "publishedAt": "2025-02-01T10:00:00Z",
                    "source": { "name": "Example Wire", "url": "https://example.com" }
                },
                {
                    "title": "No summary",
                    "description": null,
                    "url": "https://example.com/short",
                    "publishedAt": "2025-02-02T10:00:00Z",
                    "source": { "name": "Example Wire" }
                }
            ]
        }"#;
        let items = parse_search_response(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].source_name, "Example Wire");
        assert_eq!(items[0].published_at, "2025-02-01T10:00:00Z");
        assert_eq!(items[1].description, "");
    }

    #[test]
    fn missing_articles_field_is_empty_feed() {
        assert_eq!(parse_search_response("{}").unwrap(), Vec::new());
    }

    #[test]
    fn malformed_body_is_a_parse_failure() {
        assert!(matches!(
            parse_search_response("<html>"),
            Err(NewsError::NetworkOrParse(_))
        ));
    }
}
