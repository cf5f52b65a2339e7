//! Actor records: the persisted shape of trainers and creatures.
//!
//! Both variants share [`CommonData`] (stats, capabilities, evasion). Trainers
//! add progression (level, experience, AP) and biography; creatures carry
//! only skills and a health pool on top of the common block.

use crate::stats::{ActionPoints, Capabilities, Evasion, Experience, Health, Skills, Stats};

/// Actor variant tag.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ActorKind {
    Trainer,
    Creature,
}

/// Fields every actor has.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct CommonData {
    pub stats: Stats,
    pub capabilities: Capabilities,
    /// Free-text capabilities such as "Naturewalk (Forest)".
    pub other_capabilities: Vec<String>,
    pub evasion: Evasion,
}

/// Free-form trainer biography.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Details {
    pub sex: String,
    pub age: i32,
    pub height: i32,
    pub weight: i32,
    pub biography: String,
    pub description: String,
    pub personality: String,
    pub goals: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrainerData {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub common: CommonData,
    pub skills: Skills,
    pub details: Details,
    pub money: i32,
    /// Trainer ID number.
    pub id: i64,
    /// Derived from experience on every pass.
    pub level: i32,
    pub exp: Experience,
    pub health: Health,
    pub ap: ActionPoints,
}

impl Default for TrainerData {
    fn default() -> Self {
        Self {
            common: CommonData::default(),
            skills: Skills::default(),
            details: Details::default(),
            money: 0,
            id: 0,
            level: 1,
            exp: Experience::default(),
            health: Health::default(),
            ap: ActionPoints::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CreatureData {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub common: CommonData,
    pub skills: Skills,
    pub health: Health,
}

/// A trainer or a creature.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", content = "system", rename_all = "lowercase")
)]
pub enum Actor {
    Trainer(TrainerData),
    Creature(CreatureData),
}

impl Actor {
    /// Default record for the given variant.
    pub fn new(kind: ActorKind) -> Self {
        match kind {
            ActorKind::Trainer => Self::Trainer(TrainerData::default()),
            ActorKind::Creature => Self::Creature(CreatureData::default()),
        }
    }

    pub fn kind(&self) -> ActorKind {
        match self {
            Self::Trainer(_) => ActorKind::Trainer,
            Self::Creature(_) => ActorKind::Creature,
        }
    }

    pub fn common(&self) -> &CommonData {
        match self {
            Self::Trainer(data) => &data.common,
            Self::Creature(data) => &data.common,
        }
    }

    pub fn common_mut(&mut self) -> &mut CommonData {
        match self {
            Self::Trainer(data) => &mut data.common,
            Self::Creature(data) => &mut data.common,
        }
    }

    pub fn stats(&self) -> &Stats {
        &self.common().stats
    }

    pub fn skills(&self) -> &Skills {
        match self {
            Self::Trainer(data) => &data.skills,
            Self::Creature(data) => &data.skills,
        }
    }

    pub fn health(&self) -> &Health {
        match self {
            Self::Trainer(data) => &data.health,
            Self::Creature(data) => &data.health,
        }
    }

    /// Trainer level; creatures have none.
    pub fn level(&self) -> Option<i32> {
        match self {
            Self::Trainer(data) => Some(data.level),
            Self::Creature(_) => None,
        }
    }

    pub fn as_trainer(&self) -> Option<&TrainerData> {
        match self {
            Self::Trainer(data) => Some(data),
            Self::Creature(_) => None,
        }
    }

    pub fn as_creature(&self) -> Option<&CreatureData> {
        match self {
            Self::Creature(data) => Some(data),
            Self::Trainer(_) => None,
        }
    }
}

impl From<TrainerData> for Actor {
    fn from(data: TrainerData) -> Self {
        Self::Trainer(data)
    }
}

impl From<CreatureData> for Actor {
    fn from(data: CreatureData) -> Self {
        Self::Creature(data)
    }
}
