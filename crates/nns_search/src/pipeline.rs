use std::sync::Arc;

use nns_core::{ArticleRecord, EntityFailure, Error, Result, ResultRow, ScreeningReport, SearchParameters};
use tracing::{info, warn};

use crate::keywords;
use crate::providers::NewsSearch;
use crate::query::build_query;

/// Runs a screening: one search per entity, strictly sequential, in
/// submission order. A failing entity is recorded and skipped; it never
/// aborts the rest of the run.
pub struct ScreeningPipeline {
    search: Arc<dyn NewsSearch>,
    keywords: Vec<String>,
}

impl ScreeningPipeline {
    pub fn new(search: Arc<dyn NewsSearch>, extra_keywords: &[String]) -> Self {
        Self {
            search,
            keywords: keywords::negative_keywords(extra_keywords),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub async fn run(&self, entities: &[String], params: &SearchParameters) -> Result<ScreeningReport> {
        if entities.is_empty() {
            return Err(Error::InvalidInput(
                "at least one e-mail or business name is required".to_string(),
            ));
        }

        let mut report = ScreeningReport::default();
        let total = entities.len();

        for (idx, entity) in entities.iter().enumerate() {
            info!("🔍 [{}/{}] Screening {} via {}", idx + 1, total, entity, self.search.name());
            let query = build_query(entity, &self.keywords);

            match self.search.search(&query, params).await {
                Ok(articles) => {
                    info!("📰 {} article(s) found for {}", articles.len(), entity);
                    report.rows.extend(flatten_rows(entity, articles));
                }
                Err(e) => {
                    warn!("⚠️ Search failed for {}: {}", entity, e);
                    report.failures.push(EntityFailure {
                        entity: entity.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }
}

/// One row per article, tagged with the entity it was searched for. The
/// published timestamp keeps only its `YYYY-MM-DD` prefix.
fn flatten_rows(entity: &str, articles: Vec<ArticleRecord>) -> Vec<ResultRow> {
    articles
        .into_iter()
        .map(|article| ResultRow {
            entity: entity.to_string(),
            title: article.title,
            source: article.source,
            published: article.published_at.map(|ts| ts.chars().take(10).collect()),
            url: article.url,
        })
        .collect()
}
