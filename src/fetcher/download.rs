//! Image download and storage

use super::CoverFetcher;
use crate::error::FetchError;
use crate::utils::cover_path;
use std::path::PathBuf;
use tracing::{debug, warn};

impl CoverFetcher {
    /// Download `url` and store it as `<output_dir>/<id>.<image_extension>`
    ///
    /// Any existing file is overwritten. The extension is fixed and the content
    /// type is never inspected. A non-success status is logged but the body is
    /// still stored.
    ///
    /// # Errors
    /// Returns [`FetchError::DownloadFailed`] if the request, body read, or file write fails
    pub async fn download_cover(&self, id: &str, url: &str) -> Result<PathBuf, FetchError> {
        let failed = |reason: String| FetchError::DownloadFailed {
            id: id.to_string(),
            reason,
        };

        let response = self
            .download_client
            .get(url)
            .send()
            .await
            .map_err(|e| failed(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(id, url, status = status.as_u16(), "cover download returned non-success status");
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| failed(format!("failed to read body from {}: {}", url, e)))?;

        let path = cover_path(&self.config.output_dir, id, &self.config.image_extension);
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| failed(format!("failed to write {}: {}", path.display(), e)))?;

        debug!(id, bytes = bytes.len(), path = %path.display(), "cover written");
        Ok(path)
    }
}
