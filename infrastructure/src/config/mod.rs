//! Configuration file loading for polyglot-tube
//!
//! Sources are merged with later entries winning:
//!
//! 1. Default values
//! 2. Global: `$XDG_CONFIG_HOME/polyglot-tube/config.toml`
//! 3. Project root: `./polyglot.toml` or `./.polyglot.toml`
//! 4. `--config <path>` specified file
//! 5. `POLYGLOT_*` environment variables

mod file_config;
mod loader;

pub use file_config::{
    API_KEY_ENV_VARS, ConfigValidationError, FileBehaviorConfig, FileConfig, FileGeminiConfig,
    FileLearningConfig, FileOutputConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX, PROJECT_CONFIG_FILES};
