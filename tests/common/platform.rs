//! Mock video platform built on wiremock

use covergrab::FetchConfig;
use std::path::Path;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::fixtures::search_page;

/// A mock search endpoint plus image host
pub struct MockPlatform {
    /// Underlying wiremock server
    pub server: MockServer,
}

impl MockPlatform {
    /// Start an empty mock platform
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Fetch settings pointing the search template at this server
    pub fn fetch_config(&self, id_table: &Path, output_dir: &Path) -> FetchConfig {
        FetchConfig {
            id_table: id_table.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            search_url_template: format!("{}/all?keyword={{id}}", self.server.uri()),
            ..Default::default()
        }
    }

    /// Serve a result page for `id` whose first cover is `image_path` on this server
    pub async fn with_cover(&self, id: &str, image_path: &str, bytes: &[u8]) {
        let img = format!(r#"<img src="{}{}" alt="{}">"#, self.server.uri(), image_path, id);
        self.with_search_page(id, 200, search_page(&img)).await;

        Mock::given(method("GET"))
            .and(path(image_path))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(bytes.to_vec()))
            .mount(&self.server)
            .await;
    }

    /// Serve an arbitrary search response for `id`
    pub async fn with_search_page(&self, id: &str, status: u16, body: String) {
        Mock::given(method("GET"))
            .and(path("/all"))
            .and(query_param("keyword", id))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }
}
