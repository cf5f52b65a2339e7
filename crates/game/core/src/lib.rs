//! Actor data model and stat derivation for PTU trainers and creatures.
//!
//! `ptu-core` defines the persisted actor shape (stats, skills, capabilities,
//! resource pools) and the pure derivation pass that turns those base fields
//! into a resolved sheet. All derived state is produced by
//! [`engine::DerivationEngine`]; loaders and front-ends depend on the types
//! re-exported here.
pub mod actor;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod stats;

pub use actor::{Actor, ActorKind, CommonData, CreatureData, Details, TrainerData};
pub use config::{LabelEntry, RankEntry, SystemConfig};
pub use engine::{DerivationEngine, Derive};
pub use env::{KeyLocalizer, Localizer};
pub use error::{ErrorSeverity, FieldType, PtuError, ValidationError, ValidationErrorKind};
pub use stats::{
    ActionPoints, ApUsage, Capabilities, Evasion, EvasionKind, EvasionLine, Experience, Health,
    ResourceKind, Size, Skill, SkillGroup, SkillKind, SkillRank, Skills, Stat, StatKind, Stats,
    roll_expression,
};
