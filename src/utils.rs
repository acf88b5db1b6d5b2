//! Utility functions for URL handling and output paths

use crate::config::ID_PLACEHOLDER;
use std::path::{Path, PathBuf};
use url::Url;

/// Give a protocol-relative URL an explicit `https:` scheme
///
/// # Examples
///
/// ```
/// use covergrab::utils::normalize_cover_url;
///
/// assert_eq!(
///     normalize_cover_url("//i0.hdslb.com/bfs/archive/abc.jpg"),
///     "https://i0.hdslb.com/bfs/archive/abc.jpg"
/// );
/// assert_eq!(
///     normalize_cover_url("http://example.com/x.jpg"),
///     "http://example.com/x.jpg"
/// );
/// ```
#[must_use]
pub fn normalize_cover_url(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{url}")
    } else {
        url.to_string()
    }
}

/// Build the search URL for an identifier
///
/// Every `{id}` in the template is replaced by the raw identifier and the result
/// is parsed as a URL. Parsing percent-encodes spaces, non-ASCII and control
/// characters; reserved characters such as `&` and `+` are left as they are.
pub fn build_search_url(template: &str, id: &str) -> Result<String, url::ParseError> {
    Url::parse(&template.replace(ID_PLACEHOLDER, id)).map(String::from)
}

/// Destination of a cover: `<dir>/<id>.<extension>`
///
/// The extension is appended as-is, so an identifier containing a dot keeps it.
#[must_use]
pub fn cover_path(dir: &Path, id: &str, extension: &str) -> PathBuf {
    dir.join(format!("{id}.{extension}"))
}
