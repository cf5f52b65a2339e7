//! Experience and trainer level.

use crate::config::SystemConfig;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Experience {
    pub milestone: i32,
    pub dex_exp: i32,
    pub misc: i32,
    /// Total experience. Derived.
    pub value: i32,
}

impl Experience {
    /// Saturates at the `i32` bounds.
    pub fn compute_value(&self) -> i32 {
        self.milestone
            .saturating_mul(SystemConfig::EXP_PER_MILESTONE)
            .saturating_add(self.dex_exp)
            .saturating_add(self.misc)
    }

    /// Level reached with `value` experience: `1 + floor(value / 10)`.
    pub fn level_for(value: i32) -> i32 {
        1 + value.div_euclid(SystemConfig::EXP_PER_LEVEL)
    }

    /// Recompute `value` and return the resulting level.
    pub fn resolve(&mut self) -> i32 {
        self.value = self.compute_value();
        Self::level_for(self.value)
    }
}
