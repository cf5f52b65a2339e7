//! Resources - Health and Action Point pools.
//!
//! Maximums are computed from stats and level on every pass. Current values
//! are game state owned by the host; the engine only rewrites `ap.value`,
//! which is defined as the unspent remainder of the pool.
//!
//! Formulas:
//! - Health_max = trunc((Level × 2 + HP × 3 + 10) × (1 - Injuries / 10)), floored at 0
//! - AP_max = floor(Level / 3) + 5
//! - AP_value = AP_max - (Spent + Bound + Drained)

use crate::config::SystemConfig;

/// Enum representing individual resource pools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceKind {
    /// Hit points.
    Health,
    /// Action points.
    Ap,
}

/// Health pool.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Health {
    pub value: i32,
    pub min: i32,
    pub max: i32,
    /// Each injury removes a tenth of maximum health.
    pub injuries: i32,
}

impl Health {
    /// Compute maximum health.
    ///
    /// The product is truncated toward zero, then floored at 0.
    pub fn compute_max(level: i32, hp_value: f64, injuries: i32) -> i32 {
        let base = f64::from(level) * 2.0 + hp_value * 3.0 + 10.0;
        let remaining = 1.0 - f64::from(injuries) / f64::from(SystemConfig::MAX_INJURIES);
        ((base * remaining).trunc() as i32).max(0)
    }

    pub fn resolve(&mut self, level: i32, hp_value: f64) {
        self.max = Self::compute_max(level, hp_value, self.injuries);
    }
}

impl Default for Health {
    fn default() -> Self {
        Self {
            value: 1,
            min: 0,
            max: 1,
            injuries: 0,
        }
    }
}

/// Sub-ledgers of AP usage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ApUsage {
    pub spent: i32,
    pub bound: i32,
    pub drained: i32,
}

impl ApUsage {
    pub fn total(&self) -> i32 {
        self.spent
            .saturating_add(self.bound)
            .saturating_add(self.drained)
    }
}

/// Action Point pool.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActionPoints {
    /// Remaining AP. Negative when usage exceeds the pool.
    pub value: i32,
    pub min: i32,
    pub max: i32,
    pub used: ApUsage,
}

impl ActionPoints {
    pub fn compute_max(level: i32) -> i32 {
        level.div_euclid(3) + 5
    }

    /// Recompute `max` and `value`. `value` is not clamped.
    pub fn resolve(&mut self, level: i32) {
        self.max = Self::compute_max(level);
        self.value = self.max.saturating_sub(self.used.total());
    }
}

impl Default for ActionPoints {
    fn default() -> Self {
        Self {
            value: 1,
            min: 0,
            max: 1,
            used: ApUsage::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_max_formula() {
        // 1 × 2 + 10 × 3 + 10 = 42
        assert_eq!(Health::compute_max(1, 10.0, 0), 42);
        // 5 × 2 + 12 × 3 + 10 = 56
        assert_eq!(Health::compute_max(5, 12.0, 0), 56);
    }

    #[test]
    fn health_max_truncates_fractional_hp() {
        // 2 + 8.4 × 3 + 10 = 37.2
        assert_eq!(Health::compute_max(1, 8.4, 0), 37);
    }

    #[test]
    fn injuries_scale_health_down() {
        // 42 × 0.7 = 29.4
        assert_eq!(Health::compute_max(1, 10.0, 3), 29);
        assert_eq!(Health::compute_max(1, 10.0, 10), 0);
    }

    #[test]
    fn health_max_never_negative() {
        assert_eq!(Health::compute_max(1, 10.0, 14), 0);
        assert_eq!(Health::compute_max(-20, 1.0, 0), 0);
    }

    #[test]
    fn ap_max_grows_every_three_levels() {
        assert_eq!(ActionPoints::compute_max(1), 5);
        assert_eq!(ActionPoints::compute_max(3), 6);
        assert_eq!(ActionPoints::compute_max(9), 8);
    }

    #[test]
    fn ap_overspend_goes_negative() {
        let mut ap = ActionPoints::default();
        ap.used.spent = 10;
        ap.resolve(9);
        assert_eq!(ap.max, 8);
        assert_eq!(ap.value, -2);
    }

    #[test]
    fn ap_value_subtracts_every_ledger() {
        let mut ap = ActionPoints::default();
        ap.used = ApUsage {
            spent: 1,
            bound: 2,
            drained: 1,
        };
        ap.resolve(6);
        assert_eq!(ap.max, 7);
        assert_eq!(ap.value, 3);
    }

    #[test]
    fn ap_ledgers_saturate() {
        let mut ap = ActionPoints::default();
        ap.used = ApUsage {
            spent: i32::MIN,
            bound: -1,
            drained: 0,
        };
        assert_eq!(ap.used.total(), i32::MIN);
        ap.resolve(1);
        assert_eq!(ap.value, i32::MAX);
    }
}
