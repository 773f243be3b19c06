use crate::error::{Result, ServiceError};
use crate::query::{SearchMode, SearchRequest, SearchableField};
use crate::traits::{Article, ArticleSearch, IndexAdmin, IndexSettings, IndexStats, SearchResults};
use log::{debug, info};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Blocking client for a hosted search service speaking the REST index API.
///
/// One client is bound to a single index; every lifecycle and query call
/// targets that index. Each call is attempted exactly once, and timeouts
/// are left to the transport defaults.
pub struct HttpSearchClient {
    http: Client,
    endpoint: String,
    index_name: String,
}

/// Request body for the search endpoint.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchBody<'a> {
    q: &'a str,
    search_method: SearchMode,
    searchable_attributes: &'a [SearchableField],
    limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<&'a str>,
}

impl<'a> SearchBody<'a> {
    fn from_request(request: &'a SearchRequest) -> Self {
        SearchBody {
            q: &request.text,
            search_method: request.mode,
            searchable_attributes: &request.attributes,
            limit: request.limit,
            // An empty filter means "no filter"; the field is omitted entirely
            filter: (!request.filter.is_empty()).then_some(request.filter.as_str()),
        }
    }
}

/// Error body the service attaches to non-2xx responses.
#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

impl HttpSearchClient {
    /// Creates a client for `index_name` on the service at `endpoint`.
    pub fn new(endpoint: &str, index_name: &str) -> Result<Self> {
        let http = Client::builder().build()?;
        info!(
            "Created search client for {} (index '{}')",
            endpoint, index_name
        );
        Ok(HttpSearchClient {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            index_name: index_name.to_string(),
        })
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    fn index_url(&self, suffix: &str) -> String {
        format!("{}/indexes/{}{}", self.endpoint, self.index_name, suffix)
    }

    /// Maps a non-2xx response to the error kinds we recognize. The service
    /// reports a machine-readable code alongside the HTTP status.
    fn error_for(&self, status: StatusCode, body: &str) -> ServiceError {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        match (status, parsed.code.as_str()) {
            (StatusCode::CONFLICT, _) | (_, "index_already_exists") => {
                ServiceError::IndexAlreadyExists(self.index_name.clone())
            }
            (StatusCode::NOT_FOUND, _) | (_, "index_not_found") => {
                ServiceError::IndexNotFound(self.index_name.clone())
            }
            _ => ServiceError::Unexpected {
                status: status.as_u16(),
                message: if parsed.message.is_empty() {
                    body.chars().take(200).collect()
                } else {
                    parsed.message
                },
            },
        }
    }

    fn check(&self, response: reqwest::blocking::Response) -> Result<reqwest::blocking::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().unwrap_or_default();
        Err(self.error_for(status, &body))
    }
}

impl IndexAdmin for HttpSearchClient {
    /// Creates the index with the given settings. Fails with
    /// [`ServiceError::IndexAlreadyExists`] when it is already present.
    fn create_index(&self, settings: &IndexSettings) -> Result<()> {
        let response = self
            .http
            .post(self.index_url(""))
            .json(&json!({ "index_defaults": settings }))
            .send()?;
        self.check(response)?;
        info!("Created index '{}'", self.index_name);
        Ok(())
    }

    /// Deletes the index. Fails with [`ServiceError::IndexNotFound`] when it
    /// does not exist.
    fn delete_index(&self) -> Result<()> {
        let response = self.http.delete(self.index_url("")).send()?;
        self.check(response)?;
        info!("Deleted index '{}'", self.index_name);
        Ok(())
    }

    /// Uploads articles in client-side chunks of `batch_size`. Transport
    /// errors abort the upload mid-way and propagate.
    fn add_articles(&self, articles: &[Article], batch_size: usize) -> Result<()> {
        for batch in articles.chunks(batch_size.max(1)) {
            let response = self
                .http
                .post(self.index_url("/documents"))
                .json(&json!({ "documents": batch }))
                .send()?;
            self.check(response)?;
            debug!("Uploaded batch of {} article(s)", batch.len());
        }
        info!(
            "Added {} article(s) to index '{}'",
            articles.len(),
            self.index_name
        );
        Ok(())
    }

    /// Fetches document counts for the index.
    fn stats(&self) -> Result<IndexStats> {
        let response = self.http.get(self.index_url("/stats")).send()?;
        let body = self.check(response)?.text()?;
        let stats: IndexStats = serde_json::from_str(&body)?;
        Ok(stats)
    }
}

impl ArticleSearch for HttpSearchClient {
    /// Runs one query against the index. Fails with
    /// [`ServiceError::IndexNotFound`] when the index is missing.
    fn search(&self, request: &SearchRequest) -> Result<SearchResults> {
        let body = SearchBody::from_request(request);
        let response = self
            .http
            .post(self.index_url("/search"))
            .json(&body)
            .send()?;
        let payload = self.check(response)?.text()?;
        let results: SearchResults = serde_json::from_str(&payload)?;
        debug!(
            "Search for '{}' ({} mode) returned {} hit(s)",
            request.text,
            request.mode,
            results.hits.len()
        );
        Ok(results)
    }
}
