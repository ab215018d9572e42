//! Raw TOML configuration data types
//!
//! These structs mirror the config file layout. Every section is optional
//! and falls back to its defaults.

use crate::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL, GeminiConfig};
use polyglot_domain::{DomainError, LearningSettings, OutputFormat, ProficiencyLevel};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variables consulted for the API key, in order
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("endpoint cannot be empty")]
    EmptyEndpoint,

    #[error(transparent)]
    InvalidLearning(#[from] DomainError),
}

/// `[gemini]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    pub model: String,
    pub endpoint: String,
    /// Only used when no API key environment variable is set
    pub api_key: Option<String>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
        }
    }
}

/// `[learning]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLearningConfig {
    pub learning_language: String,
    pub native_language: String,
    pub level: ProficiencyLevel,
}

impl Default for FileLearningConfig {
    fn default() -> Self {
        let settings = LearningSettings::default();
        Self {
            learning_language: settings.learning_language,
            native_language: settings.native_language,
            level: settings.proficiency,
        }
    }
}

/// `[behavior]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBehaviorConfig {
    /// Per-request timeout; no limit when unset
    pub timeout_seconds: Option<u64>,
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Complete file configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub gemini: FileGeminiConfig,
    pub learning: FileLearningConfig,
    pub behavior: FileBehaviorConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.gemini.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        if self.gemini.endpoint.trim().is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint);
        }
        if self.behavior.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        self.learning_settings()?;
        Ok(())
    }

    /// Learning defaults for new sessions
    pub fn learning_settings(&self) -> Result<LearningSettings, DomainError> {
        LearningSettings::new(
            &self.learning.learning_language,
            &self.learning.native_language,
            self.learning.level,
        )
    }

    /// API key from the environment, falling back to `[gemini].api_key`
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .chain(self.gemini.api_key.clone())
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
    }

    /// Connection settings for the Gemini adapter
    pub fn gemini_config(&self, api_key: impl Into<String>) -> GeminiConfig {
        GeminiConfig::new(api_key)
            .with_model(&self.gemini.model)
            .with_endpoint(&self.gemini.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.gemini.model, "gemini-2.5-pro");
        assert_eq!(config.learning.learning_language, "German");
        assert_eq!(config.learning.native_language, "English");
        assert_eq!(config.learning.level, ProficiencyLevel::Intermediate);
        assert!(config.behavior.timeout_seconds.is_none());
        assert!(config.output.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[learning]
learning_language = "Spanish"
level = "advanced"

[output]
format = "json"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.learning.learning_language, "Spanish");
        assert_eq!(config.learning.native_language, "English");
        assert_eq!(config.learning.level, ProficiencyLevel::Advanced);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert_eq!(config.gemini.model, "gemini-2.5-pro");
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let toml_str = r#"
[learning]
level = "expert"
"#;
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validate() {
        let mut config = FileConfig::default();
        config.behavior.timeout_seconds = Some(0);
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));

        let mut config = FileConfig::default();
        config.gemini.model = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));

        let mut config = FileConfig::default();
        config.gemini.endpoint = String::new();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyEndpoint));

        let mut config = FileConfig::default();
        config.learning.native_language = " ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidLearning(_))
        ));
    }

    #[test]
    fn test_api_key_resolution_order() {
        let mut config = FileConfig::default();
        config.gemini.api_key = Some("from-file".to_string());

        let key = config.resolve_api_key_with(|name| match name {
            "GEMINI_API_KEY" => Some("gemini".to_string()),
            "API_KEY" => Some("generic".to_string()),
            _ => None,
        });
        assert_eq!(key.as_deref(), Some("gemini"));

        let key = config.resolve_api_key_with(|name| {
            (name == "API_KEY").then(|| "generic".to_string())
        });
        assert_eq!(key.as_deref(), Some("generic"));

        let key = config.resolve_api_key_with(|_| None);
        assert_eq!(key.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_blank_api_key_is_ignored() {
        let mut config = FileConfig::default();
        config.gemini.api_key = Some("   ".to_string());
        let key = config.resolve_api_key_with(|_| Some(String::new()));
        assert!(key.is_none());
    }

    #[test]
    fn test_gemini_config() {
        let mut config = FileConfig::default();
        config.gemini.model = "gemini-2.5-flash".to_string();
        let gemini = config.gemini_config("key");
        assert_eq!(gemini.api_key, "key");
        assert_eq!(gemini.model, "gemini-2.5-flash");
        assert_eq!(gemini.endpoint, DEFAULT_ENDPOINT);
    }
}
