//! Content factory for loading everything a derivation run needs from one
//! data directory.

use std::path::{Path, PathBuf};

use ptu_core::SystemConfig;

use crate::loaders::{
    ActorLoader, ActorRecord, ConfigLoader, LoadResult, LocaleLoader, LocaleTable,
};

/// Content factory that loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional, defaults otherwise)
/// ├── lang/
/// │   └── en.json      (optional, keys echo back otherwise)
/// └── actors/
///     ├── ace.json
///     └── eevee.toml
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
    language: String,
}

impl ContentFactory {
    pub const DEFAULT_LANGUAGE: &'static str = "en";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            language: Self::DEFAULT_LANGUAGE.to_owned(),
        }
    }

    /// Select the language file (`lang/<language>.json`).
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load `config.toml`, or the default config when the file is absent.
    pub fn load_config(&self) -> LoadResult<SystemConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!("No config.toml in {}, using defaults", self.data_dir.display());
            return Ok(SystemConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load `lang/<language>.json`, or an empty table when the file is absent.
    pub fn load_locale(&self) -> LoadResult<LocaleTable> {
        let path = self
            .data_dir
            .join("lang")
            .join(format!("{}.json", self.language));
        if !path.exists() {
            tracing::debug!("No language file {}, keys will echo", path.display());
            return Ok(LocaleTable::new());
        }
        LocaleLoader::load(&path)
    }

    /// Load `actors/<file_name>`.
    pub fn load_actor(&self, file_name: &str) -> LoadResult<ActorRecord> {
        let path = self.data_dir.join("actors").join(file_name);
        ActorLoader::load(&path)
    }
}
