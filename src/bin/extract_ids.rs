//! Write the node identifiers of `ID.json` to `ID.csv`

use covergrab::config::{Config, DEFAULT_CONFIG_FILE};
use std::path::Path;

fn main() -> covergrab::Result<()> {
    covergrab::telemetry::init();

    let config = Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?;
    covergrab::extractor::run(&config.extract)?;
    Ok(())
}
