//! Data-driven content and loaders.
//!
//! This crate turns files on disk into typed `ptu-core` values:
//! - Actor records (JSON/TOML), merged over schema defaults and validated
//! - Language tables (Foundry-style JSON) implementing [`ptu_core::Localizer`]
//! - System configuration (TOML)
//! - The static sheet template manifest
//!
//! Content is read-only input to the derivation engine and never holds
//! derived state itself.

pub mod loaders;
pub mod templates;

pub use loaders::{
    ActorLoader, ActorRecord, ActorSchema, ConfigLoader, ContentFactory, LoadResult, LocaleLoader,
    LocaleTable,
};
pub use templates::{ACTOR_TEMPLATES, TemplateManifest};
