//! # Site Search Demo
//!
//! An interactive demo for searching a scraped-website dataset through a
//! hosted tensor search service.
//!
//! ## Features
//!
//! - Index lifecycle over the service REST API: create, delete, batched
//!   document upload, stats
//! - Tensor or lexical queries, chosen per query by a word-count heuristic
//! - Pre-filtering by dataset category (`scraped_from`)
//! - Paginated results browsing with highlight excerpts for tensor hits
//! - CSV dataset loading with a configurable row cap
//! - Both library and CLI interfaces
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sitesearch::{
//!     ArticleSearch, HttpSearchClient, IndexAdmin, IndexSettings, ResultsPager, SearchRequest,
//!     load_articles,
//! };
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let client = HttpSearchClient::new("http://localhost:8882", "site-articles")?;
//!
//! // Build the index from the first 1000 rows of the dataset
//! client.create_index(&IndexSettings::default())?;
//! let articles = load_articles(Path::new("articles.csv"), 1000)?;
//! client.add_articles(&articles, 100)?;
//!
//! // Query it; the mode (tensor vs lexical) is derived from the query text
//! let request = SearchRequest::new("how do international payments work")
//!     .with_categories(&["faq", "blogs"]);
//! let mode = request.mode;
//! let results = client.search(&request)?;
//!
//! // Browse the hits ten at a time
//! let mut pager = ResultsPager::new();
//! pager.install(results);
//! for hit in pager.visible_slice() {
//!     println!("{} ({:.4})", hit.title, hit.score);
//!     if let Some(excerpt) = hit.highlights.resolve(mode) {
//!         println!("  {}", excerpt);
//!     }
//! }
//! pager.next();
//! # Ok(())
//! # }
//! ```

pub mod traits;
pub use traits::{
    Article, ArticleSearch, Highlights, IndexAdmin, IndexSettings, IndexStats, SearchHit,
    SearchResults,
};

pub mod error;
pub use error::{Result, ServiceError};

pub mod config;
pub use config::DemoConfig;

pub mod query;
pub use query::{
    PRE_FILTER_OPTIONS, RESULT_LIMIT, SearchMode, SearchRequest, SearchableField, build_filter_str,
};

pub mod pager;
pub use pager::{MAX_PAGE, PAGE_SIZE, ResultsPager};

pub mod dataset;
pub use dataset::load_articles;

pub mod clients;
pub use clients::HttpSearchClient;
