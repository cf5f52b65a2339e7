//! Content loaders for reading data files.

pub mod actors;
pub mod config;
pub mod factory;
pub mod locale;
pub mod schema;

pub use actors::{ActorLoader, ActorRecord};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use locale::{LocaleLoader, LocaleTable};
pub use schema::ActorSchema;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
