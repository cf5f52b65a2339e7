//! CLI configuration resolved from the environment.
use std::env;
use std::path::PathBuf;

/// Settings that may come from the environment (or a `.env` file) when the
/// matching command-line flag is absent.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Data directory holding `config.toml`, `lang/` and `actors/`.
    pub data_dir: Option<PathBuf>,
    /// Explicit language file, overrides the data directory's.
    pub lang_file: Option<PathBuf>,
    /// Explicit system config file, overrides the data directory's.
    pub config_file: Option<PathBuf>,
    /// Language code used inside the data directory.
    pub language: Option<String>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PTU_DATA_DIR` - data directory
    /// - `PTU_LANG_FILE` - language JSON file
    /// - `PTU_CONFIG_FILE` - system config TOML file
    /// - `PTU_LANGUAGE` - language code (default: en)
    pub fn from_env() -> Self {
        Self {
            data_dir: read_env("PTU_DATA_DIR"),
            lang_file: read_env("PTU_LANG_FILE"),
            config_file: read_env("PTU_CONFIG_FILE"),
            language: read_env("PTU_LANGUAGE"),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
