use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use nns_core::{ArticleRecord, Error, Result, SearchParameters};
use serde::Deserialize;
use url::Url;

use super::NewsSearch;

const ENDPOINT: &str = "https://newsapi.org/v2/everything";
const USER_AGENT: &str = concat!("nns/", env!("CARGO_PKG_VERSION"));

/// Client for the NewsAPI.org `everything` endpoint. The key is sent as
/// an `X-Api-Key` header on every call; NewsAPI error bodies are surfaced
/// with their code and message.
pub struct NewsApiClient {
    http: reqwest::Client,
    api_key: String,
}

impl fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl NewsApiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::InvalidInput("a NewsAPI key is required".to_string()));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http, api_key })
    }
}

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<WireArticle>,
}

#[derive(Debug, Deserialize)]
struct WireArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    source: Option<WireSource>,
    #[serde(default, rename = "publishedAt")]
    published_at: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireSource {
    #[serde(default)]
    name: Option<String>,
}

impl From<WireArticle> for ArticleRecord {
    fn from(article: WireArticle) -> Self {
        Self {
            title: article.title,
            source: article.source.and_then(|s| s.name),
            published_at: article.published_at,
            url: article.url,
        }
    }
}

#[async_trait]
impl NewsSearch for NewsApiClient {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    async fn search(&self, query: &str, params: &SearchParameters) -> Result<Vec<ArticleRecord>> {
        let endpoint = Url::parse(ENDPOINT)
            .map_err(|e| Error::Search(format!("Invalid endpoint: {}", e)))?;
        let from = params.from_date();
        let page_size = params.page_size().to_string();

        let response = self
            .http
            .get(endpoint)
            .header("X-Api-Key", &self.api_key)
            .query(&[
                ("q", query),
                ("from", from.as_str()),
                ("language", params.language.as_str()),
                ("sortBy", params.sort_by.as_str()),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // NewsAPI reports errors as {"status":"error","code":...,"message":...}
            if let Ok(err) = serde_json::from_str::<EverythingResponse>(&body) {
                if let Some(message) = err.message {
                    return Err(Error::Search(format!(
                        "{}: {}",
                        err.code.as_deref().unwrap_or("error"),
                        message
                    )));
                }
            }
            return Err(Error::Search(format!("NewsAPI returned HTTP {}", status)));
        }

        let parsed: EverythingResponse = serde_json::from_str(&body)?;
        if parsed.status != "ok" {
            return Err(Error::Search(format!(
                "{}: {}",
                parsed.code.as_deref().unwrap_or("error"),
                parsed.message.as_deref().unwrap_or("unknown NewsAPI error")
            )));
        }

        Ok(parsed.articles.into_iter().map(ArticleRecord::from).collect())
    }
}
