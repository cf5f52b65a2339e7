//! Combat Stats - the six persisted attributes and their stage scaling.
//!
//! Each stat is stored as a set of additive sources (base, feats, bonus,
//! level-up points) plus a combat stage counter. The resolved value is never
//! stored as input; it is recomputed on every derivation pass.
//!
//! Value = max(1, (Base + Feats + Bonus + Level) × StageMultiplier(CS))

use crate::config::SystemConfig;

/// The six combat stats shared by every actor.
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
pub enum StatKind {
    /// Hit points
    Hp,
    /// Physical attack
    Atk,
    /// Physical defense
    Def,
    /// Special attack
    Satk,
    /// Special defense
    Sdef,
    /// Speed
    Spd,
}

impl StatKind {
    /// Localization key for the stat's display name.
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Hp => "PTU.HP",
            Self::Atk => "PTU.Attack",
            Self::Def => "PTU.Defense",
            Self::Satk => "PTU.SpecialAttack",
            Self::Sdef => "PTU.SpecialDefense",
            Self::Spd => "PTU.Speed",
        }
    }

    /// Default `base` value for a freshly created actor.
    pub const fn default_base(self) -> i32 {
        match self {
            Self::Hp => 10,
            _ => 5,
        }
    }
}

/// A single combat stat.
///
/// `total` and `value` are owned by the derivation pass. `total` is never read
/// back from a persisted record; `value` is persisted for display only and is
/// overwritten on every pass.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Stat {
    pub base: i32,
    pub feats: i32,
    pub bonus: i32,
    pub level: i32,
    /// Combat stage. Typically -6..=+6, but any finite number is accepted.
    pub cs: f64,
    #[cfg_attr(feature = "serde", serde(skip_deserializing))]
    pub total: i32,
    pub value: f64,
}

impl Stat {
    /// Create a stat with the given base and every other source at zero.
    pub const fn with_base(base: i32) -> Self {
        Self {
            base,
            feats: 0,
            bonus: 0,
            level: 0,
            cs: 0.0,
            total: 0,
            value: 0.0,
        }
    }

    /// Sum of every additive source, saturating at the `i32` bounds.
    pub fn compute_total(&self) -> i32 {
        self.base
            .saturating_add(self.feats)
            .saturating_add(self.bonus)
            .saturating_add(self.level)
    }

    /// Recompute `total` and `value` from the persisted sources.
    ///
    /// Always starts from the additive sources, so repeated calls never
    /// compound the stage multiplier.
    pub fn resolve(&mut self, config: &SystemConfig) {
        self.total = self.compute_total();
        let multiplier = config.stage_multiplier(self.cs);
        self.value = (f64::from(self.total) * multiplier).max(1.0);
    }
}

impl Default for Stat {
    fn default() -> Self {
        Self::with_base(5)
    }
}

/// The full stat block of an actor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Stats {
    pub hp: Stat,
    pub atk: Stat,
    pub def: Stat,
    pub satk: Stat,
    pub sdef: Stat,
    pub spd: Stat,
}

impl Stats {
    pub fn get(&self, kind: StatKind) -> &Stat {
        match kind {
            StatKind::Hp => &self.hp,
            StatKind::Atk => &self.atk,
            StatKind::Def => &self.def,
            StatKind::Satk => &self.satk,
            StatKind::Sdef => &self.sdef,
            StatKind::Spd => &self.spd,
        }
    }

    pub fn get_mut(&mut self, kind: StatKind) -> &mut Stat {
        match kind {
            StatKind::Hp => &mut self.hp,
            StatKind::Atk => &mut self.atk,
            StatKind::Def => &mut self.def,
            StatKind::Satk => &mut self.satk,
            StatKind::Sdef => &mut self.sdef,
            StatKind::Spd => &mut self.spd,
        }
    }

    /// Iterate stats in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, &Stat)> {
        [
            (StatKind::Hp, &self.hp),
            (StatKind::Atk, &self.atk),
            (StatKind::Def, &self.def),
            (StatKind::Satk, &self.satk),
            (StatKind::Sdef, &self.sdef),
            (StatKind::Spd, &self.spd),
        ]
        .into_iter()
    }

    /// Resolve every stat in place.
    pub fn resolve(&mut self, config: &SystemConfig) {
        for stat in [
            &mut self.hp,
            &mut self.atk,
            &mut self.def,
            &mut self.satk,
            &mut self.sdef,
            &mut self.spd,
        ] {
            stat.resolve(config);
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            hp: Stat::with_base(StatKind::Hp.default_base()),
            atk: Stat::with_base(StatKind::Atk.default_base()),
            def: Stat::with_base(StatKind::Def.default_base()),
            satk: Stat::with_base(StatKind::Satk.default_base()),
            sdef: Stat::with_base(StatKind::Sdef.default_base()),
            spd: Stat::with_base(StatKind::Spd.default_base()),
        }
    }
}
