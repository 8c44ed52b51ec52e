use async_trait::async_trait;
use nns_core::{ArticleRecord, Result, SearchParameters};

pub mod newsapi;

/// The injected search capability. Anything that can turn a query string
/// plus run parameters into a list of articles is substitutable here: the
/// real NewsAPI client, a cached fixture, or a test stub.
#[async_trait]
pub trait NewsSearch: Send + Sync {
    /// Returns the name of the search provider
    fn name(&self) -> &str;

    /// Runs one query and returns the matching articles
    async fn search(&self, query: &str, params: &SearchParameters) -> Result<Vec<ArticleRecord>>;
}
