//! Learner settings value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How advanced the learner is; modulates prompt complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProficiencyLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl ProficiencyLevel {
    /// Display name used inside prompts ("Beginner", "Intermediate", "Advanced")
    pub fn as_str(&self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => "Beginner",
            ProficiencyLevel::Intermediate => "Intermediate",
            ProficiencyLevel::Advanced => "Advanced",
        }
    }

    /// Key used in configuration files
    pub fn as_key(&self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => "beginner",
            ProficiencyLevel::Intermediate => "intermediate",
            ProficiencyLevel::Advanced => "advanced",
        }
    }

    pub fn all() -> [ProficiencyLevel; 3] {
        [
            ProficiencyLevel::Beginner,
            ProficiencyLevel::Intermediate,
            ProficiencyLevel::Advanced,
        ]
    }
}

impl std::fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProficiencyLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(ProficiencyLevel::Beginner),
            "intermediate" => Ok(ProficiencyLevel::Intermediate),
            "advanced" => Ok(ProficiencyLevel::Advanced),
            _ => Err(DomainError::InvalidProficiency(s.to_string())),
        }
    }
}

impl Serialize for ProficiencyLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_key())
    }
}

impl<'de> Deserialize<'de> for ProficiencyLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Learner settings captured at submit time.
///
/// A request owns its own copy; editing settings afterwards never affects
/// content already requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningSettings {
    pub learning_language: String,
    pub native_language: String,
    pub proficiency: ProficiencyLevel,
}

impl LearningSettings {
    /// Create settings, rejecting blank language names.
    pub fn new(
        learning_language: impl Into<String>,
        native_language: impl Into<String>,
        proficiency: ProficiencyLevel,
    ) -> Result<Self, DomainError> {
        let learning_language = learning_language.into().trim().to_string();
        let native_language = native_language.into().trim().to_string();

        if learning_language.is_empty() {
            return Err(DomainError::EmptyLanguage("Learning language"));
        }
        if native_language.is_empty() {
            return Err(DomainError::EmptyLanguage("Native language"));
        }

        Ok(Self {
            learning_language,
            native_language,
            proficiency,
        })
    }
}

impl Default for LearningSettings {
    fn default() -> Self {
        Self {
            learning_language: "German".to_string(),
            native_language: "English".to_string(),
            proficiency: ProficiencyLevel::Intermediate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(
            "Beginner".parse::<ProficiencyLevel>().unwrap(),
            ProficiencyLevel::Beginner
        );
        assert_eq!(
            " ADVANCED ".parse::<ProficiencyLevel>().unwrap(),
            ProficiencyLevel::Advanced
        );
        assert!("expert".parse::<ProficiencyLevel>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for level in ProficiencyLevel::all() {
            assert_eq!(level.to_string().parse::<ProficiencyLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_key() {
        let json = serde_json::to_string(&ProficiencyLevel::Advanced).unwrap();
        assert_eq!(json, "\"advanced\"");
        let level: ProficiencyLevel = serde_json::from_str("\"Beginner\"").unwrap();
        assert_eq!(level, ProficiencyLevel::Beginner);
    }

    #[test]
    fn test_default_settings() {
        let settings = LearningSettings::default();
        assert_eq!(settings.learning_language, "German");
        assert_eq!(settings.native_language, "English");
        assert_eq!(settings.proficiency, ProficiencyLevel::Intermediate);
    }

    #[test]
    fn test_new_trims_and_rejects_blank() {
        let settings =
            LearningSettings::new("  Spanish ", "English", ProficiencyLevel::Beginner).unwrap();
        assert_eq!(settings.learning_language, "Spanish");

        let err = LearningSettings::new("   ", "English", ProficiencyLevel::Beginner).unwrap_err();
        assert_eq!(err, DomainError::EmptyLanguage("Learning language"));
        let err = LearningSettings::new("French", "", ProficiencyLevel::Beginner).unwrap_err();
        assert_eq!(err, DomainError::EmptyLanguage("Native language"));
    }
}
