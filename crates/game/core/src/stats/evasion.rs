//! Evasion - capped defensive values taken from Def, SDef and Spd.

use super::core::{StatKind, Stats};

/// The three evasion lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum EvasionKind {
    Physical,
    Special,
    Speed,
}

impl EvasionKind {
    /// Stat each evasion line reads from.
    pub const fn source(self) -> StatKind {
        match self {
            Self::Physical => StatKind::Def,
            Self::Special => StatKind::Sdef,
            Self::Speed => StatKind::Spd,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvasionLine {
    /// Source stat value, truncated. Derived.
    pub stat: i32,
    pub bonus: i32,
    /// Source stat value capped at the evasion ceiling. Derived.
    pub value: i32,
}

impl EvasionLine {
    /// Values above `cap` clamp to `cap`; anything lower passes through.
    pub fn resolve(&mut self, stat_value: f64, cap: i32) {
        // float → int casts saturate, so huge stage values stay in range
        self.stat = stat_value.trunc() as i32;
        self.value = self.stat.min(cap);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Evasion {
    pub physical: EvasionLine,
    pub special: EvasionLine,
    pub speed: EvasionLine,
}

impl Evasion {
    pub fn get(&self, kind: EvasionKind) -> &EvasionLine {
        match kind {
            EvasionKind::Physical => &self.physical,
            EvasionKind::Special => &self.special,
            EvasionKind::Speed => &self.speed,
        }
    }

    fn get_mut(&mut self, kind: EvasionKind) -> &mut EvasionLine {
        match kind {
            EvasionKind::Physical => &mut self.physical,
            EvasionKind::Special => &mut self.special,
            EvasionKind::Speed => &mut self.speed,
        }
    }

    /// Recompute every line from already resolved stats.
    pub fn resolve(&mut self, stats: &Stats, cap: i32) {
        use strum::IntoEnumIterator;
        for kind in EvasionKind::iter() {
            let stat_value = stats.get(kind.source()).value;
            self.get_mut(kind).resolve(stat_value, cap);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_at_thirty() {
        let mut line = EvasionLine::default();
        line.resolve(45.0, 30);
        assert_eq!(line.value, 30);
        assert_eq!(line.stat, 45);
    }

    #[test]
    fn below_cap_passes_through() {
        let mut line = EvasionLine::default();
        line.resolve(12.0, 30);
        assert_eq!(line.value, 12);

        line.resolve(12.8, 30);
        assert_eq!(line.value, 12);
    }

    #[test]
    fn lines_read_their_source_stats() {
        let mut stats = Stats::default();
        stats.def.value = 45.0;
        stats.sdef.value = 12.0;
        stats.spd.value = 30.0;

        let mut evasion = Evasion::default();
        evasion.resolve(&stats, 30);

        assert_eq!(evasion.physical.value, 30);
        assert_eq!(evasion.special.value, 12);
        assert_eq!(evasion.speed.value, 30);
    }

    #[test]
    fn bonus_is_left_untouched() {
        let mut evasion = Evasion::default();
        evasion.special.bonus = 2;
        evasion.resolve(&Stats::default(), 30);
        assert_eq!(evasion.special.bonus, 2);
    }
}
