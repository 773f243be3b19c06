mod util;

use clap::{Parser, Subcommand};
use colored::Colorize;
use sitesearch::{
    ArticleSearch, DemoConfig, HttpSearchClient, IndexAdmin, IndexSettings, PRE_FILTER_OPTIONS,
    SearchRequest, SearchableField, ServiceError, load_articles,
};
use std::path::PathBuf;
use util::ResultsBrowser;

/// Upload chunk size for index creation.
const ADD_BATCH_SIZE: usize = 100;

#[derive(Parser)]
#[command(name = "sitesearch")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Search service endpoint (overrides the config file)
    #[clap(long, global = true)]
    endpoint: Option<String>,
    /// Index name (overrides the config file)
    #[clap(long, global = true)]
    index: Option<String>,
    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the index and upload the dataset
    CreateIndex {
        /// Number of dataset rows to upload
        #[clap(
            long,
            default_value_t = 1000,
            value_parser = clap::value_parser!(u32).range(10..=5000),
            help = "Number of dataset rows to upload (10 to 5000)."
        )]
        rows: u32,
        /// CSV dataset path (default from the config file)
        #[clap(long, help = "Path to the CSV dataset with url, title, body, scraped_from columns.")]
        dataset: Option<PathBuf>,
        /// Embedding model requested at creation (default from the config file)
        #[clap(long, help = "Embedding model the service should use for this index.")]
        model: Option<String>,
    },
    /// Delete the index
    DeleteIndex,
    /// Show the number of documents in the index
    Stats,
    /// Search the index and browse results interactively
    Search {
        /// Search query
        query: String,
        /// Restrict hits to these scraped_from categories
        #[clap(
            long = "filter",
            value_name = "CATEGORY",
            help = "Restrict hits to these scraped_from categories (faq, blogs, landing, newsroom). Defaults to all of them."
        )]
        filters: Vec<String>,
        /// Fields to match against
        #[clap(
            long = "attribute",
            value_name = "FIELD",
            help = "Fields to match against: title, body, scraped_from. Defaults to all of them."
        )]
        attributes: Vec<SearchableField>,
        /// Output raw results as JSON instead of browsing
        #[clap(long, help = "Output results as JSON instead of the interactive browser.")]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let config = DemoConfig::load();
    let endpoint = cli.endpoint.unwrap_or(config.endpoint.clone());
    let index_name = cli.index.unwrap_or(config.index_name.clone());
    let client = HttpSearchClient::new(&endpoint, &index_name)?;

    match cli.command {
        Commands::CreateIndex {
            rows,
            dataset,
            model,
        } => {
            let dataset = dataset.unwrap_or(config.dataset);
            let articles = load_articles(&dataset, rows as usize)?;
            let settings = IndexSettings {
                model: model.unwrap_or(config.model),
                treat_urls_and_pointers_as_images: false,
            };

            match client.create_index(&settings) {
                Ok(()) => {
                    println!(
                        "Creating index '{}' from {} article(s)...",
                        client.index_name(),
                        articles.len()
                    );
                    client.add_articles(&articles, ADD_BATCH_SIZE)?;
                    println!("{}", "Index successfully created.".green());
                }
                Err(ServiceError::IndexAlreadyExists(_)) => {
                    eprintln!("{}", "Index already exists.".yellow());
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::DeleteIndex => match client.delete_index() {
            Ok(()) => println!("{}", "Index successfully deleted.".green()),
            Err(ServiceError::IndexNotFound(_)) => {
                eprintln!("{}", "Index does not exist.".yellow());
            }
            Err(e) => return Err(e.into()),
        },
        Commands::Stats => match client.stats() {
            Ok(stats) => println!(
                "Index '{}' holds {} document(s).",
                client.index_name(),
                stats.number_of_documents
            ),
            Err(ServiceError::IndexNotFound(_)) => {
                eprintln!("{}", "Index does not exist.".yellow());
            }
            Err(e) => return Err(e.into()),
        },
        Commands::Search {
            query,
            filters,
            attributes,
            json,
        } => {
            if query.is_empty() {
                println!("Nothing to search for.");
                return Ok(());
            }

            // The UI defaults both multiselects to everything
            let filters = if filters.is_empty() {
                PRE_FILTER_OPTIONS.iter().map(|s| s.to_string()).collect()
            } else {
                filters
            };
            let attributes = if attributes.is_empty() {
                SearchableField::ALL.to_vec()
            } else {
                attributes
            };

            let request = SearchRequest::new(query)
                .with_categories(&filters)
                .with_attributes(attributes);
            if !json {
                println!("Search mode: {}", request.mode);
            }

            match client.search(&request) {
                Ok(results) => {
                    if json {
                        let output = serde_json::json!({
                            "query": request.text,
                            "mode": request.mode,
                            "hits_count": results.hits.len(),
                            "processing_time_ms": results.processing_time_ms,
                            "hits": results.hits.iter().map(|hit| {
                                serde_json::json!({
                                    "url": hit.url,
                                    "title": hit.title,
                                    "scraped_from": hit.scraped_from,
                                    "score": hit.score,
                                    "highlight": hit.highlights.resolve(request.mode),
                                })
                            }).collect::<Vec<_>>(),
                        });
                        println!("{}", serde_json::to_string_pretty(&output)?);
                        return Ok(());
                    }

                    let mut browser = ResultsBrowser::new(results, request.mode);
                    browser.run()?;
                }
                Err(ServiceError::IndexNotFound(_)) => {
                    eprintln!("{}", "Index does not exist.".yellow());
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
    Ok(())
}
