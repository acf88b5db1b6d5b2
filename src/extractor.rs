//! Identifier extraction from a graph document
//!
//! Reads `{"nodes": [{"id": ...}, ...]}` and writes the identifiers, in node
//! order, to a single-column CSV table headed `id`.

use crate::config::ExtractConfig;
use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Header of the identifier table
pub const ID_HEADER: &str = "id";

#[derive(Debug, Deserialize)]
struct GraphDocument {
    nodes: Vec<Node>,
}

#[derive(Debug, Deserialize)]
struct Node {
    id: Value,
}

/// Read every node identifier from a graph document, in source order
///
/// String identifiers are copied verbatim and numeric ones keep their JSON
/// spelling. Duplicates and odd values pass through untouched.
///
/// # Errors
/// - [`Error::InputNotFound`] if the file does not exist
/// - [`Error::InputMalformed`] if it is not JSON, lacks a `nodes` array, or a node
///   has no scalar `id`
pub fn load_identifiers(json_path: &Path) -> Result<Vec<String>> {
    let content =
        std::fs::read_to_string(json_path).map_err(|e| Error::from_input_io(json_path, e))?;
    parse_identifiers(&content).map_err(|reason| Error::malformed(json_path, reason))
}

fn parse_identifiers(content: &str) -> std::result::Result<Vec<String>, String> {
    let document: GraphDocument = serde_json::from_str(content).map_err(|e| e.to_string())?;

    document
        .nodes
        .into_iter()
        .enumerate()
        .map(|(index, node)| match node.id {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(format!("node {index} has a non-scalar id: {other}")),
        })
        .collect()
}

/// Write the identifier table: an `id` header followed by one row per identifier
///
/// Creates or overwrites `csv_path`. The output depends only on `ids`, so
/// rewriting unchanged input yields an identical file.
pub fn write_id_table(ids: &[String], csv_path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(csv_path)?;
    writer.write_record([ID_HEADER])?;
    for id in ids {
        writer.write_record([id])?;
    }
    writer.flush()?;
    Ok(())
}

/// Extract identifiers from the configured graph document into the configured table
///
/// Returns the number of identifiers written.
pub fn run(config: &ExtractConfig) -> Result<usize> {
    let ids = load_identifiers(&config.input_json)?;
    write_id_table(&ids, &config.id_table)?;
    info!(
        count = ids.len(),
        path = %config.id_table.display(),
        "identifier table saved"
    );
    Ok(ids.len())
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_json(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("ID.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_identifiers_preserves_order_and_duplicates() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_json(
            &temp_dir,
            r#"{"nodes": [{"id": "BV2"}, {"id": "BV1", "label": "x"}, {"id": "BV2"}], "links": []}"#,
        );

        let ids = load_identifiers(&path).unwrap();
        assert_eq!(ids, vec!["BV2", "BV1", "BV2"]);
    }

    #[test]
    fn load_identifiers_renders_numeric_ids() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_json(&temp_dir, r#"{"nodes": [{"id": 42}, {"id": 1.5}]}"#);
        assert_eq!(load_identifiers(&path).unwrap(), vec!["42", "1.5"]);
    }

    #[test]
    fn load_identifiers_accepts_empty_node_list() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_json(&temp_dir, r#"{"nodes": []}"#);
        assert!(load_identifiers(&path).unwrap().is_empty());
    }

    #[test]
    fn load_identifiers_missing_file_is_input_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_identifiers(&temp_dir.path().join("ID.json"));
        assert!(matches!(result, Err(Error::InputNotFound { .. })));
    }

    #[test]
    fn load_identifiers_rejects_malformed_documents() {
        let cases = [
            "not json at all",
            r#"{"edges": []}"#,
            r#"{"nodes": {"id": "BV1"}}"#,
            r#"{"nodes": [{"id": "BV1"}, {"label": "no id"}]}"#,
            r#"{"nodes": [{"id": null}]}"#,
            r#"{"nodes": [{"id": ["BV1"]}]}"#,
        ];

        for content in cases {
            let temp_dir = TempDir::new().unwrap();
            let path = write_json(&temp_dir, content);
            match load_identifiers(&path) {
                Err(Error::InputMalformed { path: p, .. }) => assert_eq!(p, path),
                other => panic!("{content:?} should be malformed, got {other:?}"),
            }
        }
    }

    #[test]
    fn write_id_table_has_header_and_one_row_per_id() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ID.csv");
        let ids = vec!["BV1".to_string(), "BV2".to_string()];

        write_id_table(&ids, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "id\nBV1\nBV2\n");
    }

    #[test]
    fn write_id_table_quotes_values_that_need_it() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ID.csv");
        let ids = vec!["a,b".to_string(), "say \"hi\"".to_string()];

        write_id_table(&ids, &path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "id\n\"a,b\"\n\"say \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn run_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let config = ExtractConfig {
            input_json: write_json(&temp_dir, r#"{"nodes": [{"id": "BV1"}, {"id": "BV2"}]}"#),
            id_table: temp_dir.path().join("ID.csv"),
        };

        assert_eq!(run(&config).unwrap(), 2);
        let first = fs::read(&config.id_table).unwrap();
        assert_eq!(run(&config).unwrap(), 2);
        let second = fs::read(&config.id_table).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn run_overwrites_existing_table() {
        let temp_dir = TempDir::new().unwrap();
        let id_table = temp_dir.path().join("ID.csv");
        fs::write(&id_table, "id\nstale1\nstale2\nstale3\n").unwrap();
        let config = ExtractConfig {
            input_json: write_json(&temp_dir, r#"{"nodes": [{"id": "fresh"}]}"#),
            id_table: id_table.clone(),
        };

        run(&config).unwrap();

        assert_eq!(fs::read_to_string(&id_table).unwrap(), "id\nfresh\n");
    }
}
