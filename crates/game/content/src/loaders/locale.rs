//! Language table loader.
//!
//! Reads host-style language files, either flat
//! (`{ "PTU.Master": "Master" }`) or nested (`{ "PTU": { "Master": "Master" } }`).
//! Nested objects are flattened with `.` separators.

use std::collections::HashMap;
use std::path::Path;

use ptu_core::Localizer;
use serde_json::Value;

use crate::loaders::{LoadResult, read_file};

/// In-memory localization table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocaleTable {
    entries: HashMap<String, String>,
}

impl LocaleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Translation for `key`, if the table has one.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a language file body.
    pub fn from_json_str(content: &str) -> LoadResult<Self> {
        let raw: Value = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse language JSON: {}", e))?;

        let Value::Object(root) = raw else {
            anyhow::bail!("Language file must be a JSON object");
        };

        let mut table = Self::new();
        for (key, value) in root {
            table.flatten_into(key, value)?;
        }
        Ok(table)
    }

    fn flatten_into(&mut self, prefix: String, value: Value) -> LoadResult<()> {
        match value {
            Value::String(text) => {
                self.entries.insert(prefix, text);
            }
            Value::Object(children) => {
                for (key, child) in children {
                    self.flatten_into(format!("{prefix}.{key}"), child)?;
                }
            }
            other => anyhow::bail!(
                "Language entry '{}' must be a string or object, found {}",
                prefix,
                other
            ),
        }
        Ok(())
    }
}

impl Localizer for LocaleTable {
    fn localize(&self, key: &str) -> String {
        match self.get(key) {
            Some(text) => text.to_owned(),
            None => {
                tracing::trace!(key, "missing translation");
                key.to_owned()
            }
        }
    }
}

/// Loader for language tables.
pub struct LocaleLoader;

impl LocaleLoader {
    pub fn load(path: &Path) -> LoadResult<LocaleTable> {
        let content = read_file(path)?;
        LocaleTable::from_json_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load language file {}: {}", path.display(), e))
    }
}
