//! Search request and cover URL resolution

use super::CoverFetcher;
use crate::error::FetchError;
use crate::utils::{build_search_url, normalize_cover_url};
use tracing::debug;

impl CoverFetcher {
    /// Fetch the search result page for an identifier
    ///
    /// # Errors
    /// Returns [`FetchError::SearchFailed`] on transport errors or a non-success status
    pub async fn search(&self, id: &str) -> Result<String, FetchError> {
        let url = build_search_url(&self.config.search_url_template, id).map_err(|e| {
            FetchError::SearchFailed {
                id: id.to_string(),
                reason: format!("invalid search URL: {}", e),
            }
        })?;
        debug!(id, url = %url, "requesting search page");

        let response = self
            .search_client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::SearchFailed {
                id: id.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::SearchFailed {
                id: id.to_string(),
                reason: format!("HTTP {}", status.as_u16()),
            });
        }

        response.text().await.map_err(|e| FetchError::SearchFailed {
            id: id.to_string(),
            reason: format!("failed to read search page: {}", e),
        })
    }

    /// Search for an identifier and return the absolute URL of the first result's cover
    ///
    /// # Errors
    /// [`FetchError::SearchFailed`], [`FetchError::ResultNotFound`] or
    /// [`FetchError::CoverNotFound`]
    pub async fn resolve_cover_url(&self, id: &str) -> Result<String, FetchError> {
        let page = self.search(id).await?;
        let raw = self.locator.locate(&page).map_err(|e| e.with_id(id))?;
        let url = normalize_cover_url(&raw);
        debug!(id, url = %url, "cover URL resolved");
        Ok(url)
    }
}
