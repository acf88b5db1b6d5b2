//! Identifier table reader

use crate::error::{Error, Result};
use crate::extractor::ID_HEADER;
use std::path::Path;
use tracing::{debug, warn};

/// Read the first column of every data row of an identifier table
///
/// The first row is the header and is skipped. Rows whose first field is empty
/// are skipped with a warning; any other value, whitespace included, is
/// returned unchanged. Extra columns are ignored.
///
/// # Errors
/// - [`Error::InputNotFound`] if the file does not exist
/// - [`Error::InputMalformed`] if the file is not valid CSV
pub fn read_ids(csv_path: &Path) -> Result<Vec<String>> {
    let file = std::fs::File::open(csv_path).map_err(|e| Error::from_input_io(csv_path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| Error::malformed(csv_path, e.to_string()))?;
    if headers.get(0) != Some(ID_HEADER) {
        debug!(
            path = %csv_path.display(),
            header = ?headers.get(0),
            "identifier table has an unexpected header, using the first column anyway"
        );
    }

    let mut ids = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| Error::malformed(csv_path, e.to_string()))?;
        match record.get(0) {
            Some(id) if !id.is_empty() => ids.push(id.to_string()),
            _ => warn!(
                line = ?record.position().map(|p| p.line()),
                path = %csv_path.display(),
                "skipping empty identifier"
            ),
        }
    }

    Ok(ids)
}
