use crate::query::{SearchMode, SearchRequest};
use serde::{Deserialize, Serialize};

/// One row of the scraped-website dataset, uploaded verbatim as a service
/// document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub url: String,
    pub title: String,
    pub body: String,
    pub scraped_from: String,
}

/// Highlight payload attached to a hit.
///
/// The service returns either an empty list (no highlight produced) or a
/// map from field name to excerpt. An empty map also counts as no
/// highlight.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawHighlights")]
pub enum Highlights {
    #[default]
    None,
    /// Field/excerpt pairs in the order the service returned them.
    Excerpts(Vec<(String, String)>),
}

impl Highlights {
    /// Excerpt to display for a hit, if any. Only tensor search produces
    /// excerpts worth surfacing; lexical highlight data is not shown.
    pub fn resolve(&self, mode: SearchMode) -> Option<&str> {
        match (self, mode) {
            (Highlights::Excerpts(entries), SearchMode::Tensor) => {
                entries.first().map(|(_, excerpt)| excerpt.as_str())
            }
            _ => None,
        }
    }
}

/// Wire shape of `_highlights`: a map for tensor hits, a list otherwise.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawHighlights {
    Map(serde_json::Map<String, serde_json::Value>),
    List(Vec<serde_json::Value>),
}

impl From<RawHighlights> for Highlights {
    fn from(raw: RawHighlights) -> Self {
        match raw {
            RawHighlights::List(_) => Highlights::None,
            RawHighlights::Map(map) if map.is_empty() => Highlights::None,
            RawHighlights::Map(map) => Highlights::Excerpts(
                map.into_iter()
                    .map(|(field, value)| {
                        let excerpt = match value {
                            serde_json::Value::String(s) => s,
                            other => other.to_string(),
                        };
                        (field, excerpt)
                    })
                    .collect(),
            ),
        }
    }
}

/// A single hit as returned by the search service. Immutable once received.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub scraped_from: String,
    #[serde(rename = "_score", default)]
    pub score: f64,
    #[serde(rename = "_highlights", default)]
    pub highlights: Highlights,
}

/// The ordered hits for one query. An empty `hits` list is a valid state,
/// distinct from "no query issued yet".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub hits: Vec<SearchHit>,
    #[serde(rename = "processingTimeMs", default)]
    pub processing_time_ms: Option<u64>,
}

/// Index settings handed to the service at creation time.
#[derive(Debug, Clone, Serialize)]
pub struct IndexSettings {
    pub model: String,
    pub treat_urls_and_pointers_as_images: bool,
}

impl Default for IndexSettings {
    fn default() -> Self {
        IndexSettings {
            model: crate::config::DEFAULT_MODEL.to_string(),
            treat_urls_and_pointers_as_images: false,
        }
    }
}

/// Document counts reported by the service for one index.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub number_of_documents: i64,
}

/// Index lifecycle operations against the search service.
pub trait IndexAdmin {
    fn create_index(&self, settings: &IndexSettings) -> crate::error::Result<()>;
    fn delete_index(&self) -> crate::error::Result<()>;
    fn add_articles(&self, articles: &[Article], batch_size: usize) -> crate::error::Result<()>;
    fn stats(&self) -> crate::error::Result<IndexStats>;
}

/// Query operations against an existing index.
pub trait ArticleSearch {
    fn search(&self, request: &SearchRequest) -> crate::error::Result<SearchResults>;
}
