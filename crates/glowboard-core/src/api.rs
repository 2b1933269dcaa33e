//! Backend API contract: endpoint URLs, request and response bodies, and the
//! fallback policy for item fetches.

use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::feed::FeedQuery;
use crate::models::{ItemId, Trend, UNCATEGORIZED};

/// URL builder for one backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    base: String,
}

impl ApiEndpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Root endpoint, answering 2xx while the backend is up.
    pub fn health(&self) -> String {
        format!("{}/", self.base)
    }

    pub fn trends(&self) -> String {
        format!("{}/api/trends", self.base)
    }

    pub fn journal(&self) -> String {
        format!("{}/api/journal", self.base)
    }

    pub fn journal_prompt(&self) -> String {
        format!("{}/api/generate-journal-prompt", self.base)
    }

    /// Manual trigger for the scheduled trend scrape.
    pub fn scrape_trends(&self) -> String {
        format!("{}/api/scrape-trends", self.base)
    }

    /// Event stream for a live collection. Writes go to the same path
    /// without the query string.
    pub fn live_collection(&self, query: &FeedQuery) -> String {
        let path = self.live_collection_path(&query.collection);
        match &query.order_by {
            Some(field) => {
                let direction = if query.descending { "desc" } else { "asc" };
                format!("{}?order_by={}&direction={}", path, field, direction)
            }
            None => path,
        }
    }

    pub fn live_collection_path(&self, collection: &str) -> String {
        format!("{}/api/live/{}", self.base, collection)
    }
}

/// Body of `GET /api/trends`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendsResponse {
    #[serde(default)]
    pub trends: Vec<Trend>,
}

/// One trend reported by a scrape run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScrapedTrend {
    pub id: ItemId,
    /// Publication the trend was scraped from.
    #[serde(default)]
    pub source: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// ISO-8601 time of the scrape.
    #[serde(default)]
    pub scraped_at: String,
    #[serde(default)]
    pub popularity_score: u32,
}

impl From<ScrapedTrend> for Trend {
    /// The source becomes the category, so a catalog of scraped trends
    /// filters by publication.
    fn from(scraped: ScrapedTrend) -> Self {
        let source = scraped.source.trim();
        let category = if source.is_empty() {
            UNCATEGORIZED.to_string()
        } else {
            source.to_string()
        };
        let season = scraped
            .scraped_at
            .split('T')
            .next()
            .unwrap_or_default()
            .to_string();
        Trend {
            id: scraped.id,
            name: scraped.title,
            description: scraped.description,
            season,
            popularity: Some(format!("Score {}", scraped.popularity_score)),
            category,
            icon: None,
        }
    }
}

/// Response of `POST /api/scrape-trends`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScrapeResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub trends_found: usize,
    #[serde(default)]
    pub trends: Vec<ScrapedTrend>,
    /// ISO-8601 time the run finished.
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl ScrapeResponse {
    pub fn succeeded(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }

    pub fn into_trends(self) -> Vec<Trend> {
        self.trends.into_iter().map(Trend::from).collect()
    }
}

/// Body of `POST /api/journal`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JournalEntry {
    pub title: String,
    pub content: String,
    pub mood: String,
    pub tags: Vec<String>,
}

impl JournalEntry {
    /// Title and content are required; mood and tags are optional.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }
}

/// Split a comma-separated tag field, dropping blanks.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Body of `POST /api/generate-journal-prompt`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptRequest {
    pub theme: String,
    /// Server picks its default model when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl PromptRequest {
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            model: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Response of `POST /api/generate-journal-prompt`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JournalPrompt {
    pub theme: String,
    pub prompt: String,
    #[serde(default)]
    pub model: String,
}

/// Items to display plus whatever went wrong getting them.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub error: Option<FetchError>,
    /// `items` is the fallback set rather than fetched data.
    pub from_fallback: bool,
}

/// Apply the fallback policy to a fetch result.
///
/// A failed fetch, or one that returned nothing, shows `fallback` instead.
/// The error is kept for display.
pub fn with_fallback<T>(result: Result<Vec<T>, FetchError>, fallback: Vec<T>) -> Loaded<T> {
    match result {
        Ok(items) if !items.is_empty() => Loaded {
            items,
            error: None,
            from_fallback: false,
        },
        Ok(_) => {
            tracing::info!("fetch returned no items, using fallback");
            Loaded {
                items: fallback,
                error: None,
                from_fallback: true,
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "fetch failed, using fallback");
            Loaded {
                items: fallback,
                error: Some(err),
                from_fallback: true,
            }
        }
    }
}
