//! Cover fetching split into focused submodules.
//!
//! - [`ids`] - Reading the identifier table
//! - [`search`] - Search request and cover URL resolution
//! - [`download`] - Image download and storage
//!
//! Identifiers are processed strictly one after another. A failure for one
//! identifier is logged and never stops the loop.

mod download;
mod ids;
mod search;


pub use ids::read_ids;

use crate::config::FetchConfig;
use crate::error::{FetchError, Result};
use crate::html::CoverLocator;
use std::path::PathBuf;
use tracing::{info, warn};

/// Outcome of a full fetch run
#[derive(Debug, Default)]
pub struct FetchSummary {
    /// Files written, in identifier order
    pub saved: Vec<PathBuf>,
    /// Identifiers that were skipped, in identifier order
    pub failures: Vec<FetchError>,
}

impl FetchSummary {
    /// Number of covers written
    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }

    /// Number of identifiers that produced no cover
    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }
}

/// Searches for each identifier and saves the first result's cover
pub struct CoverFetcher {
    /// Client for search pages, carries the browser User-Agent
    search_client: reqwest::Client,
    /// Client for image downloads, no extra headers
    download_client: reqwest::Client,
    locator: CoverLocator,
    config: FetchConfig,
}

impl CoverFetcher {
    /// Create a fetcher from validated settings
    ///
    /// # Errors
    /// Returns an error if the settings are invalid or an HTTP client cannot be built
    pub fn new(config: FetchConfig) -> Result<Self> {
        config.validate()?;
        let locator = CoverLocator::new(&config)?;

        let mut search_builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        let mut download_builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            search_builder = search_builder.timeout(timeout);
            download_builder = download_builder.timeout(timeout);
        }

        Ok(Self {
            search_client: search_builder.build()?,
            download_client: download_builder.build()?,
            locator,
            config,
        })
    }

    /// Resolve and download the cover for a single identifier
    pub async fn fetch_one(&self, id: &str) -> std::result::Result<PathBuf, FetchError> {
        let url = self.resolve_cover_url(id).await?;
        self.download_cover(id, &url).await
    }

    /// Fetch covers for every identifier in order
    ///
    /// The output directory is created first; failing to create it is the only
    /// fatal error. Everything after that is reported per identifier.
    pub async fn run(&self, ids: &[String]) -> Result<FetchSummary> {
        tokio::fs::create_dir_all(&self.config.output_dir).await?;

        let total = ids.len();
        let mut summary = FetchSummary::default();

        for (index, id) in ids.iter().enumerate() {
            info!("searching {} ({}/{})", id, index + 1, total);

            match self.fetch_one(id).await {
                Ok(path) => {
                    info!(path = %path.display(), "cover saved");
                    summary.saved.push(path);
                }
                Err(e) => {
                    warn!(code = e.code(), "{}", e);
                    summary.failures.push(e);
                }
            }
        }

        info!(
            saved = summary.saved_count(),
            failed = summary.failed_count(),
            output_dir = %self.config.output_dir.display(),
            "cover fetch finished"
        );
        Ok(summary)
    }
}

/// Read the configured identifier table and fetch a cover for each entry
///
/// # Errors
/// Fatal errors only: missing or unreadable table, invalid settings,
/// output directory that cannot be created
pub async fn run_from_config(config: &FetchConfig) -> Result<FetchSummary> {
    let ids = read_ids(&config.id_table)?;
    info!(count = ids.len(), path = %config.id_table.display(), "identifiers loaded");

    let fetcher = CoverFetcher::new(config.clone())?;
    fetcher.run(&ids).await
}
