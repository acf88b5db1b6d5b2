//! Configuration types for covergrab
//!
//! Every field has a default that reproduces the fixed behavior of the two
//! binaries, so a missing config file is never an error.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Placeholder substituted with the identifier in [`FetchConfig::search_url_template`]
pub const ID_PLACEHOLDER: &str = "{id}";

/// Config file the binaries look for in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "covergrab.json";

/// Identifier extraction settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Graph document to read (default: "ID.json")
    #[serde(default = "default_input_json")]
    pub input_json: PathBuf,

    /// Identifier table to write (default: "ID.csv")
    #[serde(default = "default_id_table")]
    pub id_table: PathBuf,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input_json: default_input_json(),
            id_table: default_id_table(),
        }
    }
}

/// Cover fetching settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Identifier table to read (default: "ID.csv")
    #[serde(default = "default_id_table")]
    pub id_table: PathBuf,

    /// Directory receiving `<id>.<image_extension>` files (default: "covers")
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Search URL with an `{id}` placeholder
    #[serde(default = "default_search_url_template")]
    pub search_url_template: String,

    /// User-Agent sent with search requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// CSS selector for the result list container
    #[serde(default = "default_container_selector")]
    pub container_selector: String,

    /// CSS selector for the cover image inside the container
    #[serde(default = "default_image_selector")]
    pub image_selector: String,

    /// Attributes holding the image URL, tried in order
    #[serde(default = "default_image_attributes")]
    pub image_attributes: Vec<String>,

    /// Extension of saved covers, applied regardless of the downloaded format (default: "png")
    #[serde(default = "default_image_extension")]
    pub image_extension: String,

    /// Per-request timeout in seconds (None = wait indefinitely)
    #[serde(default, with = "optional_duration_serde")]
    pub request_timeout: Option<Duration>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            id_table: default_id_table(),
            output_dir: default_output_dir(),
            search_url_template: default_search_url_template(),
            user_agent: default_user_agent(),
            container_selector: default_container_selector(),
            image_selector: default_image_selector(),
            image_attributes: default_image_attributes(),
            image_extension: default_image_extension(),
            request_timeout: None,
        }
    }
}

impl FetchConfig {
    /// Check the settings the fetch loop cannot run without
    pub fn validate(&self) -> Result<()> {
        if !self.search_url_template.contains(ID_PLACEHOLDER) {
            return Err(Error::Config {
                message: format!("search URL template must contain {ID_PLACEHOLDER}"),
                key: Some("search_url_template".to_string()),
            });
        }

        let required = [
            ("container_selector", &self.container_selector),
            ("image_selector", &self.image_selector),
            ("image_extension", &self.image_extension),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(Error::Config {
                    message: format!("{key} must not be empty"),
                    key: Some(key.to_string()),
                });
            }
        }

        if self.image_attributes.iter().all(|a| a.trim().is_empty()) {
            return Err(Error::Config {
                message: "at least one image attribute is required".to_string(),
                key: Some("image_attributes".to_string()),
            });
        }

        Ok(())
    }
}

/// Main configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Identifier extraction settings
    #[serde(default)]
    pub extract: ExtractConfig,

    /// Cover fetching settings
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl Config {
    /// Load a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::from_input_io(path, e))?;
        let config: Config = serde_json::from_str(&content).map_err(|e| Error::Config {
            message: format!("failed to parse {}: {}", path.display(), e),
            key: None,
        })?;
        config.fetch.validate()?;
        Ok(config)
    }

    /// Load a JSON config file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading configuration file");
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

fn default_input_json() -> PathBuf {
    PathBuf::from("ID.json")
}

fn default_id_table() -> PathBuf {
    PathBuf::from("ID.csv")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("covers")
}

fn default_search_url_template() -> String {
    "https://search.bilibili.com/all?keyword={id}".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string()
}

fn default_container_selector() -> String {
    "div.video-list.row".to_string()
}

fn default_image_selector() -> String {
    "img".to_string()
}

fn default_image_attributes() -> Vec<String> {
    vec!["src".to_string(), "data-src".to_string()]
}

fn default_image_extension() -> String {
    "png".to_string()
}

// Optional Duration serialization helper
mod optional_duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => serializer.serialize_some(&d.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}
