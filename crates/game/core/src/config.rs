//! System configuration constants and read-only lookup tables.
//!
//! The derivation engine never reaches for global state: everything it needs
//! besides the actor record itself lives in a [`SystemConfig`] handed to it at
//! construction time.

use crate::stats::SkillRank;

/// A single row of the skill rank table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankEntry {
    /// Stored skill value (pips) this rank applies to.
    pub pips: i32,
    pub rank: SkillRank,
}

impl RankEntry {
    pub const fn new(pips: i32, rank: SkillRank) -> Self {
        Self { pips, rank }
    }
}

/// A key → localization-key pair used by sheet lookup tables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelEntry {
    pub key: String,
    pub label: String,
}

impl LabelEntry {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Tunable rule parameters and lookup tables.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SystemConfig {
    /// Ceiling applied to every evasion value.
    pub evasion_cap: i32,
    /// Largest dice pool a skill roll may show.
    pub skill_dice_cap: i32,
    /// Multiplier gained per positive combat stage.
    pub positive_stage_step: f64,
    /// Multiplier lost per negative combat stage.
    pub negative_stage_step: f64,
    /// Skill value → rank. Values missing from the table have no rank.
    pub skill_ranks: Vec<RankEntry>,
    /// Ability id → localization key for its full name.
    pub abilities: Vec<LabelEntry>,
    /// Ability id → localization key for its abbreviation.
    pub ability_abbreviations: Vec<LabelEntry>,
}

impl SystemConfig {
    // ===== compile-time constants =====
    /// Number of skills on every actor sheet.
    pub const SKILL_COUNT: usize = 17;
    /// Injuries needed to reduce maximum health to zero.
    pub const MAX_INJURIES: i32 = 10;
    /// Experience points per level.
    pub const EXP_PER_LEVEL: i32 = 10;
    /// Experience points granted per milestone.
    pub const EXP_PER_MILESTONE: i32 = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_EVASION_CAP: i32 = 30;
    pub const DEFAULT_SKILL_DICE_CAP: i32 = 6;
    pub const DEFAULT_POSITIVE_STAGE_STEP: f64 = 0.2;
    pub const DEFAULT_NEGATIVE_STAGE_STEP: f64 = 0.1;

    pub fn new() -> Self {
        Self {
            evasion_cap: Self::DEFAULT_EVASION_CAP,
            skill_dice_cap: Self::DEFAULT_SKILL_DICE_CAP,
            positive_stage_step: Self::DEFAULT_POSITIVE_STAGE_STEP,
            negative_stage_step: Self::DEFAULT_NEGATIVE_STAGE_STEP,
            skill_ranks: default_skill_ranks(),
            abilities: default_abilities(),
            ability_abbreviations: default_ability_abbreviations(),
        }
    }

    /// Piecewise stage multiplier.
    ///
    /// `1 + cs × positive_step` for `cs >= 0`, `1 + cs × negative_step` otherwise.
    /// The domain is not bounded; fractional or extreme stages are applied as-is.
    pub fn stage_multiplier(&self, cs: f64) -> f64 {
        if cs >= 0.0 {
            1.0 + cs * self.positive_stage_step
        } else {
            1.0 + cs * self.negative_stage_step
        }
    }

    /// Look up the rank for a stored skill value.
    pub fn skill_rank(&self, pips: i32) -> Option<SkillRank> {
        self.skill_ranks
            .iter()
            .find(|entry| entry.pips == pips)
            .map(|entry| entry.rank)
    }

    /// Localization key for an ability's full name (e.g. `"str"` → `"PTU.AbilityStr"`).
    pub fn ability_label(&self, id: &str) -> Option<&str> {
        find_label(&self.abilities, id)
    }

    /// Localization key for an ability's abbreviation.
    pub fn ability_abbreviation(&self, id: &str) -> Option<&str> {
        find_label(&self.ability_abbreviations, id)
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn find_label<'a>(entries: &'a [LabelEntry], id: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|entry| entry.key == id)
        .map(|entry| entry.label.as_str())
}

fn default_skill_ranks() -> Vec<RankEntry> {
    // 7 has no rank.
    vec![
        RankEntry::new(1, SkillRank::Pathetic),
        RankEntry::new(2, SkillRank::Untrained),
        RankEntry::new(3, SkillRank::Novice),
        RankEntry::new(4, SkillRank::Adept),
        RankEntry::new(5, SkillRank::Expert),
        RankEntry::new(6, SkillRank::Master),
        RankEntry::new(8, SkillRank::Virtuoso),
    ]
}

const ABILITY_IDS: [(&str, &str); 6] = [
    ("str", "Str"),
    ("dex", "Dex"),
    ("con", "Con"),
    ("int", "Int"),
    ("wis", "Wis"),
    ("cha", "Cha"),
];

fn default_abilities() -> Vec<LabelEntry> {
    ABILITY_IDS
        .iter()
        .map(|(id, suffix)| LabelEntry::new(*id, format!("PTU.Ability{suffix}")))
        .collect()
}

fn default_ability_abbreviations() -> Vec<LabelEntry> {
    ABILITY_IDS
        .iter()
        .map(|(id, suffix)| LabelEntry::new(*id, format!("PTU.Ability{suffix}Abbr")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_multiplier_is_piecewise() {
        let config = SystemConfig::default();
        assert_eq!(config.stage_multiplier(0.0), 1.0);
        assert!((config.stage_multiplier(6.0) - 2.2).abs() < 1e-9);
        assert!((config.stage_multiplier(-6.0) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn rank_table_has_no_entry_for_seven() {
        let config = SystemConfig::default();
        assert_eq!(config.skill_rank(6), Some(SkillRank::Master));
        assert_eq!(config.skill_rank(7), None);
        assert_eq!(config.skill_rank(8), Some(SkillRank::Virtuoso));
        assert_eq!(config.skill_rank(0), None);
    }

    #[test]
    fn ability_tables_map_to_localization_keys() {
        let config = SystemConfig::default();
        assert_eq!(config.ability_label("wis"), Some("PTU.AbilityWis"));
        assert_eq!(config.ability_abbreviation("cha"), Some("PTU.AbilityChaAbbr"));
        assert_eq!(config.ability_label("luck"), None);
    }
}
