//! Traits describing read-only host services.
//!
//! The engine receives these as injected collaborators instead of reaching
//! for ambient global state.
mod localizer;

pub use localizer::{KeyLocalizer, Localizer};
