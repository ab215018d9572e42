//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
pub const PROJECT_CONFIG_FILES: [&str; 2] = ["polyglot.toml", ".polyglot.toml"];

/// Prefix for environment overrides (`POLYGLOT_GEMINI__MODEL` sets `gemini.model`)
pub const ENV_PREFIX: &str = "POLYGLOT_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources
    ///
    /// Later sources override earlier ones:
    /// 1. Default values
    /// 2. Global: `$XDG_CONFIG_HOME/polyglot-tube/config.toml`
    /// 3. Project root: `./polyglot.toml` or `./.polyglot.toml`
    /// 4. Explicit `--config <path>`
    /// 5. `POLYGLOT_*` environment variables
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path().filter(|p| p.exists());
        let project = Self::project_config_path();

        Self::file_figment(global.as_deref(), project.as_deref(), config_path)
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    fn file_figment(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project].into_iter().flatten() {
            figment = figment.merge(Toml::file(path));
        }

        // An explicit path must exist
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Global config file path, whether or not it exists
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("polyglot-tube").join("config.toml"))
    }

    /// Project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] Environment: {}*", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!(
                "  [     ] Project: ./{} or ./{}",
                PROJECT_CONFIG_FILES[0], PROJECT_CONFIG_FILES[1]
            );
        }

        if let Some(path) = Self::global_config_path() {
            let marker = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:  {}", marker, path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyglot_domain::{OutputFormat, ProficiencyLevel};
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_global_config_path() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.ends_with("polyglot-tube/config.toml"));
        }
    }

    #[test]
    fn test_no_files_gives_defaults() {
        let config: FileConfig = ConfigLoader::file_figment(None, None, None)
            .extract()
            .unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_later_files_override_earlier() {
        let dir = TempDir::new().unwrap();
        let global = write(
            &dir,
            "global.toml",
            r#"
[learning]
learning_language = "French"
level = "beginner"

[output]
color = false
"#,
        );
        let project = write(
            &dir,
            "polyglot.toml",
            r#"
[learning]
learning_language = "Japanese"
"#,
        );
        let explicit = write(
            &dir,
            "explicit.toml",
            r#"
[output]
format = "summary"
"#,
        );

        let config: FileConfig =
            ConfigLoader::file_figment(Some(&global), Some(&project), Some(&explicit))
                .extract()
                .unwrap();

        assert_eq!(config.learning.learning_language, "Japanese");
        assert_eq!(config.learning.level, ProficiencyLevel::Beginner);
        assert_eq!(config.learning.native_language, "English");
        assert!(!config.output.color);
        assert_eq!(config.output.format, Some(OutputFormat::Summary));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        let result = ConfigLoader::file_figment(None, None, Some(&missing)).extract::<FileConfig>();
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides_every_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "polyglot.toml",
                r#"
[learning]
learning_language = "Japanese"
"#,
            )?;
            jail.create_file(
                "explicit.toml",
                r#"
[gemini]
model = "gemini-from-file"

[behavior]
timeout_seconds = 30
"#,
            )?;
            jail.set_env("POLYGLOT_GEMINI__MODEL", "gemini-from-env");
            jail.set_env("POLYGLOT_BEHAVIOR__TIMEOUT_SECONDS", "45");

            let config = ConfigLoader::load(Some(Path::new("explicit.toml")))
                .map_err(|e| *e)?;

            assert_eq!(config.gemini.model, "gemini-from-env");
            assert_eq!(config.behavior.timeout_seconds, Some(45));
            assert_eq!(config.learning.learning_language, "Japanese");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.toml", "[behavior]\ntimeout_seconds = \"soon\"\n");
        let result = ConfigLoader::file_figment(None, None, Some(&path)).extract::<FileConfig>();
        assert!(result.is_err());
    }
}
