use crate::traits::Article;
use anyhow::Context;
use log::info;
use std::path::Path;

/// Reads up to `limit` articles from a CSV export.
///
/// The file must carry a header row with the `url`, `title`, `body` and
/// `scraped_from` columns; extra columns are ignored. Rows beyond `limit`
/// are skipped, and a malformed row fails the whole load.
pub fn load_articles(path: &Path, limit: usize) -> anyhow::Result<Vec<Article>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open dataset {}", path.display()))?;

    let mut articles = Vec::new();
    for row in reader.deserialize() {
        if articles.len() >= limit {
            break;
        }
        let article: Article =
            row.with_context(|| format!("malformed row in {}", path.display()))?;
        articles.push(article);
    }

    info!(
        "Loaded {} article(s) from {}",
        articles.len(),
        path.display()
    );
    Ok(articles)
}
