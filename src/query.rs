use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of hits requested per query. Three pages of ten fit
/// inside this, so the pager never needs more.
pub const RESULT_LIMIT: usize = 30;

/// Category labels accepted by the pre-filter, matching the values of the
/// dataset's `scraped_from` column.
pub const PRE_FILTER_OPTIONS: [&str; 4] = ["faq", "blogs", "landing", "newsroom"];

/// How a query is executed by the search service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SearchMode {
    Tensor,
    Lexical,
}

impl SearchMode {
    /// Picks the mode for a query string: more than one space-separated
    /// token goes through tensor search, anything else through lexical
    /// search. The empty string counts as a single empty token.
    pub fn for_query(query: &str) -> Self {
        if query.split(' ').count() > 1 {
            SearchMode::Tensor
        } else {
            SearchMode::Lexical
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Tensor => write!(f, "Tensor"),
            SearchMode::Lexical => write!(f, "Lexical"),
        }
    }
}

/// Article fields the service may match a query against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchableField {
    Title,
    Body,
    ScrapedFrom,
}

impl SearchableField {
    pub const ALL: [SearchableField; 3] = [
        SearchableField::Title,
        SearchableField::Body,
        SearchableField::ScrapedFrom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SearchableField::Title => "title",
            SearchableField::Body => "body",
            SearchableField::ScrapedFrom => "scraped_from",
        }
    }
}

impl FromStr for SearchableField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "title" => Ok(SearchableField::Title),
            "body" => Ok(SearchableField::Body),
            "scraped_from" => Ok(SearchableField::ScrapedFrom),
            other => Err(format!(
                "unknown searchable field '{}', expected one of: title, body, scraped_from",
                other
            )),
        }
    }
}

/// Builds the filter expression restricting hits to the given
/// `scraped_from` categories, joining `scraped_from:(label)` clauses with
/// `OR`. An empty selection yields an empty string, which the service
/// treats as "no filter".
pub fn build_filter_str<S: AsRef<str>>(categories: &[S]) -> String {
    categories
        .iter()
        .map(|c| format!("{}:({})", SearchableField::ScrapedFrom.as_str(), c.as_ref()))
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// One search request as handed to the service client.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub text: String,
    pub filter: String,
    pub mode: SearchMode,
    pub attributes: Vec<SearchableField>,
    pub limit: usize,
}

impl SearchRequest {
    /// Builds a request for `text` with the mode derived from the query,
    /// all attributes searchable, no filter, and the standard limit.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        SearchRequest {
            mode: SearchMode::for_query(&text),
            text,
            filter: String::new(),
            attributes: SearchableField::ALL.to_vec(),
            limit: RESULT_LIMIT,
        }
    }

    /// Restricts hits to the given `scraped_from` categories.
    pub fn with_categories<S: AsRef<str>>(mut self, categories: &[S]) -> Self {
        self.filter = build_filter_str(categories);
        self
    }

    /// Restricts matching to the given fields.
    pub fn with_attributes(mut self, attributes: Vec<SearchableField>) -> Self {
        self.attributes = attributes;
        self
    }
}
