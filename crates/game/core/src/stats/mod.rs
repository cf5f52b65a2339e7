//! Stat system.
//!
//! # Architecture
//!
//! ```text
//! [ Combat Stats ]  base + feats + bonus + level, scaled by combat stage
//!      ↓
//! [ Experience ]    milestones + dex exp → level
//!      ↓
//! [ Resources ]     Health / AP maximums from level and HP
//!      ↓
//! [ Evasion ]       Def / SDef / Spd capped at the evasion ceiling
//!
//! [ Skills ]        independent: pips → roll expression + rank
//! ```
//!
//! Every layer exposes a `resolve` that rebuilds its derived fields from
//! persisted ones only, so running a full pass twice changes nothing.

pub mod capabilities;
pub mod core;
pub mod evasion;
pub mod experience;
pub mod resources;
pub mod skills;

pub use capabilities::{Capabilities, Size};
pub use self::core::{Stat, StatKind, Stats};
pub use evasion::{Evasion, EvasionKind, EvasionLine};
pub use experience::Experience;
pub use resources::{ActionPoints, ApUsage, Health, ResourceKind};
pub use skills::{Skill, SkillGroup, SkillKind, SkillRank, Skills, roll_expression};
