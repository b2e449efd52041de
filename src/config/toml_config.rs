use crate::utils::error::{FinderError, Result};
use crate::utils::validation::{validate_range, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional file-based settings. Every section and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub display: DisplayConfig,
    pub page: PageConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub placeholder_image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub url: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FinderError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FinderError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` with the environment value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FinderError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.source.endpoint {
            validate_url("source.endpoint", endpoint)?;
        }
        if let Some(timeout) = self.source.timeout_seconds {
            validate_range("source.timeout_seconds", timeout, 1, 300)?;
        }
        if let Some(image) = &self.display.placeholder_image {
            validate_url("display.placeholder_image", image)?;
        }
        if let Some(url) = &self.page.url {
            validate_url("page.url", url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[source]
endpoint = "https://api.example.com/doctors.json"
timeout_seconds = 5

[display]
placeholder_image = "https://img.example.com/doctor.png"

[page]
url = "https://clinic.example.com/doctors?sort-fees=true"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.source.endpoint.as_deref(),
            Some("https://api.example.com/doctors.json")
        );
        assert_eq!(config.source.timeout_seconds, Some(5));
        assert!(config.page.url.unwrap().ends_with("sort-fees=true"));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.source.endpoint.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DOCTOR_FINDER_TEST_ENDPOINT", "https://test.api.com/doctors");

        let toml_content = r#"
[source]
endpoint = "${DOCTOR_FINDER_TEST_ENDPOINT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.source.endpoint.as_deref(),
            Some("https://test.api.com/doctors")
        );

        std::env::remove_var("DOCTOR_FINDER_TEST_ENDPOINT");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[source]\nendpoint = \"invalid-url\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[source]\ntimeout_seconds = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = TomlConfig::from_toml_str("[source\nendpoint = 1").unwrap_err();
        assert!(matches!(err, FinderError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[source]\nendpoint = \"https://api.example.com\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.source.endpoint.as_deref(), Some("https://api.example.com"));
    }
}
