//! Download a cover into `covers/` for every identifier listed in `ID.csv`

use covergrab::config::{Config, DEFAULT_CONFIG_FILE};
use std::path::Path;

#[tokio::main]
async fn main() -> covergrab::Result<()> {
    covergrab::telemetry::init();

    let config = Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?;
    covergrab::fetcher::run_from_config(&config.fetch).await?;
    Ok(())
}
