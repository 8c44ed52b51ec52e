use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// NewsAPI hard ceiling on results per call.
pub const MAX_PAGE_SIZE: u32 = 100;

/// A single article as normalized by a search provider. Missing upstream
/// fields stay `None` and are tolerated everywhere downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: Option<String>,
    pub source: Option<String>,
    pub published_at: Option<String>,
    pub url: Option<String>,
}

/// One flattened, entity-tagged line of the screening report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRow {
    pub entity: String,
    pub title: Option<String>,
    pub source: Option<String>,
    pub published: Option<String>,
    pub url: Option<String>,
}

/// Run-scoped search configuration, immutable for the duration of a run.
#[derive(Debug, Clone)]
pub struct SearchParameters {
    pub lookback_years: u32,
    pub max_results: u32,
    pub language: String,
    pub sort_by: String,
}

impl SearchParameters {
    pub fn new(lookback_years: u32, max_results: u32) -> Self {
        Self {
            lookback_years,
            max_results,
            language: "en".to_string(),
            sort_by: "relevancy".to_string(),
        }
    }

    /// Page size requested from the provider, clamped to the API ceiling.
    pub fn page_size(&self) -> u32 {
        self.max_results.min(MAX_PAGE_SIZE)
    }

    /// Lower bound of the lookback window as a `YYYY-MM-DD` calendar date.
    pub fn from_date(&self) -> String {
        let from = Utc::now() - Duration::days(self.lookback_years as i64 * 365);
        from.format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityFailure {
    pub entity: String,
    pub message: String,
}

/// Aggregate outcome of one screening run: all rows in entity-submission
/// order plus the entities whose search call failed.
#[derive(Debug, Default)]
pub struct ScreeningReport {
    pub rows: Vec<ResultRow>,
    pub failures: Vec<EntityFailure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_clamped_to_api_ceiling() {
        assert_eq!(SearchParameters::new(3, 25).page_size(), 25);
        assert_eq!(SearchParameters::new(3, 100).page_size(), 100);
        assert_eq!(SearchParameters::new(3, 500).page_size(), 100);
    }

    #[test]
    fn test_from_date_is_calendar_date() {
        let params = SearchParameters::new(3, 25);
        let date = params.from_date();
        assert_eq!(date.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_defaults_fixed_to_english_relevancy() {
        let params = SearchParameters::new(1, 10);
        assert_eq!(params.language, "en");
        assert_eq!(params.sort_by, "relevancy");
    }
}
