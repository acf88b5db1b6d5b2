//! # covergrab
//!
//! Turns a graph document into a folder of video covers in two passes:
//!
//! 1. [`extractor`] reads the `id` of every node in `ID.json` and writes them to
//!    the single-column table `ID.csv`.
//! 2. [`fetcher`] reads that table, searches the video platform for each
//!    identifier, takes the thumbnail of the first result and saves it as
//!    `covers/<id>.png`.
//!
//! The table is the only thing the two passes share. Each pass ships as its own
//! binary (`extract-ids`, `fetch-covers`) without flags.
//!
//! ## Library use
//!
//! ```no_run
//! use covergrab::{Config, CoverFetcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     covergrab::extractor::run(&config.extract)?;
//!
//!     let ids = covergrab::fetcher::read_ids(&config.fetch.id_table)?;
//!     let fetcher = CoverFetcher::new(config.fetch.clone())?;
//!     let summary = fetcher.run(&ids).await?;
//!     println!("{} saved, {} skipped", summary.saved_count(), summary.failed_count());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Identifier extraction from the graph document
pub mod extractor;
/// Cover search and download
pub mod fetcher;
/// HTML queries for locating covers
pub mod html;
/// Logging setup
pub mod telemetry;
/// Utility functions
pub mod utils;

// Re-export commonly used types
pub use config::{Config, ExtractConfig, FetchConfig};
pub use error::{Error, FetchError, Result};
pub use fetcher::{CoverFetcher, FetchSummary};
