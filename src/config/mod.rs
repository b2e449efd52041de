#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::PLACEHOLDER_IMAGE;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub use toml_config::TomlConfig;

pub const DEFAULT_API_ENDPOINT: &str = "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";
pub const DEFAULT_PAGE_URL: &str = "http://localhost/doctors";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Settings after merging file values, command-line flags and defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinderConfig {
    pub api_endpoint: String,
    pub page_url: String,
    pub timeout_seconds: u64,
    pub placeholder_image: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            page_url: DEFAULT_PAGE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl FinderConfig {
    /// Defaults overlaid with whatever the file sets.
    pub fn from_toml(file: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            api_endpoint: file.source.endpoint.clone().unwrap_or(defaults.api_endpoint),
            page_url: file.page.url.clone().unwrap_or(defaults.page_url),
            timeout_seconds: file.source.timeout_seconds.unwrap_or(defaults.timeout_seconds),
            placeholder_image: file
                .display
                .placeholder_image
                .clone()
                .unwrap_or(defaults.placeholder_image),
        }
    }
}

impl ConfigProvider for FinderConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn placeholder_image(&self) -> &str {
        &self.placeholder_image
    }
}

impl Validate for FinderConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_url("page_url", &self.page_url)?;
        validate_url("placeholder_image", &self.placeholder_image)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        Ok(())
    }
}
