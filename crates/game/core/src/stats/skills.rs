//! Skills - dice pools measured in pips.
//!
//! A skill's stored value is the number of d6 it rolls. The derivation pass
//! turns that into a roll expression (`"4d6+2"`) and a rank from the
//! configured rank table.

use crate::config::SystemConfig;
use crate::env::Localizer;

/// Attribute group a skill belongs to.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum SkillGroup {
    #[default]
    Body,
    Mind,
    Spirit,
}

impl SkillGroup {
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Body => "PTU.Body",
            Self::Mind => "PTU.Mind",
            Self::Spirit => "PTU.Spirit",
        }
    }
}

/// Named skill ranks.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SkillRank {
    Pathetic,
    Untrained,
    Novice,
    Adept,
    Expert,
    Master,
    Virtuoso,
}

impl SkillRank {
    /// Localization key for the rank's display name.
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Pathetic => "PTU.Pathetic",
            Self::Untrained => "PTU.Untrained",
            Self::Novice => "PTU.Novice",
            Self::Adept => "PTU.Adept",
            Self::Expert => "PTU.Expert",
            Self::Master => "PTU.Master",
            Self::Virtuoso => "PTU.Virtuoso",
        }
    }
}

/// Identifier of each skill on the sheet.
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
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SkillKind {
    Acrobatics,
    Athletics,
    Charm,
    Combat,
    Command,
    GenEd,
    MedEd,
    OccEd,
    PokeEd,
    TechEd,
    Focus,
    Guile,
    Intimidate,
    Intuition,
    Perception,
    Stealth,
    Survival,
}

impl SkillKind {
    pub const fn group(self) -> SkillGroup {
        match self {
            Self::Acrobatics
            | Self::Athletics
            | Self::Combat
            | Self::Intimidate
            | Self::Stealth
            | Self::Survival => SkillGroup::Body,
            Self::GenEd
            | Self::MedEd
            | Self::OccEd
            | Self::PokeEd
            | Self::TechEd
            | Self::Guile
            | Self::Perception => SkillGroup::Mind,
            Self::Charm | Self::Command | Self::Focus | Self::Intuition => SkillGroup::Spirit,
        }
    }

    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Acrobatics => "PTU.Acrobatics",
            Self::Athletics => "PTU.Athletics",
            Self::Charm => "PTU.Charm",
            Self::Combat => "PTU.Combat",
            Self::Command => "PTU.Command",
            Self::GenEd => "PTU.GenEd",
            Self::MedEd => "PTU.MedEd",
            Self::OccEd => "PTU.OccEd",
            Self::PokeEd => "PTU.PokeEd",
            Self::TechEd => "PTU.TechEd",
            Self::Focus => "PTU.Focus",
            Self::Guile => "PTU.Guile",
            Self::Intimidate => "PTU.Intimidate",
            Self::Intuition => "PTU.Intuition",
            Self::Perception => "PTU.Perception",
            Self::Stealth => "PTU.Stealth",
            Self::Survival => "PTU.Survival",
        }
    }
}

/// A single skill entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Skill {
    /// Display name (a localization key until the host resolves it).
    pub name: String,
    pub group: SkillGroup,
    /// Stored pips. Usually 0..=6; 8 marks a Virtuoso.
    pub value: i32,
    /// Signed numeric literal appended to the roll, e.g. `"+2"` or `"-1"`.
    pub modifier: String,

    #[cfg_attr(feature = "serde", serde(skip_deserializing))]
    pub rank: Option<SkillRank>,
    #[cfg_attr(feature = "serde", serde(skip_deserializing))]
    pub rank_label: String,
    #[cfg_attr(feature = "serde", serde(skip_deserializing))]
    pub roll: String,
}

impl Skill {
    pub fn new(kind: SkillKind) -> Self {
        Self {
            name: kind.label_key().to_owned(),
            group: kind.group(),
            value: 2,
            modifier: String::new(),
            rank: None,
            rank_label: String::new(),
            roll: String::new(),
        }
    }

    /// Dice shown on the sheet: the stored value clamped to `0..=dice_cap`.
    pub fn dice(&self, dice_cap: i32) -> i32 {
        self.value.clamp(0, dice_cap.max(0))
    }

    /// Recompute `rank`, `rank_label` and `roll`.
    pub fn resolve(&mut self, config: &SystemConfig, localizer: &dyn Localizer) {
        self.roll = roll_expression(self.dice(config.skill_dice_cap), &self.modifier);
        self.rank = config.skill_rank(self.value);
        self.rank_label = match self.rank {
            Some(rank) => localizer.localize(rank.label_key()),
            None => String::new(),
        };
    }
}

impl Default for Skill {
    fn default() -> Self {
        Self::new(SkillKind::Acrobatics)
    }
}

/// Build a `"{dice}d6{suffix}"` roll expression.
///
/// An empty modifier adds nothing. A modifier that already carries a sign is
/// appended verbatim; an unsigned one gets a `+`. Non-numeric modifiers pass
/// through untouched.
pub fn roll_expression(dice: i32, modifier: &str) -> String {
    let modifier = modifier.trim();
    if modifier.is_empty() {
        format!("{dice}d6")
    } else if modifier.starts_with('+') || modifier.starts_with('-') {
        format!("{dice}d6{modifier}")
    } else {
        format!("{dice}d6+{modifier}")
    }
}

/// All skills of an actor, keyed the way persisted records key them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Skills {
    pub acrobatics: Skill,
    pub athletics: Skill,
    pub charm: Skill,
    pub combat: Skill,
    pub command: Skill,
    pub gened: Skill,
    pub meded: Skill,
    pub occed: Skill,
    pub pokeed: Skill,
    pub teched: Skill,
    pub focus: Skill,
    pub guile: Skill,
    pub intimidate: Skill,
    pub intuition: Skill,
    pub perception: Skill,
    pub stealth: Skill,
    pub survival: Skill,
}

impl Skills {
    pub fn get(&self, kind: SkillKind) -> &Skill {
        match kind {
            SkillKind::Acrobatics => &self.acrobatics,
            SkillKind::Athletics => &self.athletics,
            SkillKind::Charm => &self.charm,
            SkillKind::Combat => &self.combat,
            SkillKind::Command => &self.command,
            SkillKind::GenEd => &self.gened,
            SkillKind::MedEd => &self.meded,
            SkillKind::OccEd => &self.occed,
            SkillKind::PokeEd => &self.pokeed,
            SkillKind::TechEd => &self.teched,
            SkillKind::Focus => &self.focus,
            SkillKind::Guile => &self.guile,
            SkillKind::Intimidate => &self.intimidate,
            SkillKind::Intuition => &self.intuition,
            SkillKind::Perception => &self.perception,
            SkillKind::Stealth => &self.stealth,
            SkillKind::Survival => &self.survival,
        }
    }

    pub fn get_mut(&mut self, kind: SkillKind) -> &mut Skill {
        match kind {
            SkillKind::Acrobatics => &mut self.acrobatics,
            SkillKind::Athletics => &mut self.athletics,
            SkillKind::Charm => &mut self.charm,
            SkillKind::Combat => &mut self.combat,
            SkillKind::Command => &mut self.command,
            SkillKind::GenEd => &mut self.gened,
            SkillKind::MedEd => &mut self.meded,
            SkillKind::OccEd => &mut self.occed,
            SkillKind::PokeEd => &mut self.pokeed,
            SkillKind::TechEd => &mut self.teched,
            SkillKind::Focus => &mut self.focus,
            SkillKind::Guile => &mut self.guile,
            SkillKind::Intimidate => &mut self.intimidate,
            SkillKind::Intuition => &mut self.intuition,
            SkillKind::Perception => &mut self.perception,
            SkillKind::Stealth => &mut self.stealth,
            SkillKind::Survival => &mut self.survival,
        }
    }

    /// Iterate skills in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillKind, &Skill)> {
        use strum::IntoEnumIterator;
        SkillKind::iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Resolve every skill in place.
    pub fn resolve(&mut self, config: &SystemConfig, localizer: &dyn Localizer) {
        use strum::IntoEnumIterator;
        for kind in SkillKind::iter() {
            self.get_mut(kind).resolve(config, localizer);
        }
    }
}

impl Default for Skills {
    fn default() -> Self {
        Self {
            acrobatics: Skill::new(SkillKind::Acrobatics),
            athletics: Skill::new(SkillKind::Athletics),
            charm: Skill::new(SkillKind::Charm),
            combat: Skill::new(SkillKind::Combat),
            command: Skill::new(SkillKind::Command),
            gened: Skill::new(SkillKind::GenEd),
            meded: Skill::new(SkillKind::MedEd),
            occed: Skill::new(SkillKind::OccEd),
            pokeed: Skill::new(SkillKind::PokeEd),
            teched: Skill::new(SkillKind::TechEd),
            focus: Skill::new(SkillKind::Focus),
            guile: Skill::new(SkillKind::Guile),
            intimidate: Skill::new(SkillKind::Intimidate),
            intuition: Skill::new(SkillKind::Intuition),
            perception: Skill::new(SkillKind::Perception),
            stealth: Skill::new(SkillKind::Stealth),
            survival: Skill::new(SkillKind::Survival),
        }
    }
}
