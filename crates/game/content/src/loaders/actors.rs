//! Actor record loader.
//!
//! Loads a single actor from a JSON or TOML file shaped like a host
//! document export:
//!
//! ```json
//! { "name": "Ace Trainer", "type": "trainer", "system": { "stats": { "hp": { "base": 12 } } } }
//! ```

use std::path::Path;

use anyhow::Context;
use ptu_core::Actor;
use serde_json::Value;

use crate::loaders::schema::ActorSchema;
use crate::loaders::{LoadResult, read_file};

/// A loaded actor and its display name.
#[derive(Clone, Debug, PartialEq)]
pub struct ActorRecord {
    pub name: String,
    pub actor: Actor,
}

/// Loader for actor records.
pub struct ActorLoader;

impl ActorLoader {
    /// Load an actor record from a `.json` or `.toml` file.
    ///
    /// Schema violations surface as a [`ptu_core::ValidationError`] inside the
    /// returned error chain.
    pub fn load(path: &Path) -> LoadResult<ActorRecord> {
        let content = read_file(path)?;
        let raw = Self::parse(path, &content)?;
        Self::from_value(&raw)
            .with_context(|| format!("Invalid actor record {}", path.display()))
    }

    /// Build a record from an already parsed envelope.
    pub fn from_value(raw: &Value) -> LoadResult<ActorRecord> {
        let actor = ActorSchema::build_envelope(raw)?;
        let name = raw
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        tracing::debug!(name = %name, kind = %actor.kind(), "loaded actor record");
        Ok(ActorRecord { name, actor })
    }

    fn parse(path: &Path, content: &str) -> LoadResult<Value> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse actor JSON at {:?}: {}", path, e)),
            Some("toml") => toml::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse actor TOML at {:?}: {}", path, e)),
            _ => Err(anyhow::anyhow!(
                "Unsupported actor file {:?}: expected .json or .toml",
                path
            )),
        }
    }
}
