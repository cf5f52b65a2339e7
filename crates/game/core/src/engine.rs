//! Derivation pass: rebuilds every derived field of an actor from its
//! persisted base fields.
//!
//! The [`DerivationEngine`] holds only read-only collaborators (rule config and
//! a localizer), so one engine can serve any number of actors. A pass takes
//! `&mut Actor`, which gives it exclusive access for its duration.
//!
//! # Pass order
//!
//! 1. Combat stats
//! 2. Experience → level (trainers)
//! 3. Health maximum (uses this pass's level)
//! 4. AP pool (trainers)
//! 5. Evasion
//! 6. Skills
//!
//! Level is resolved before the pools that read it, so a second pass over the
//! same record sees the same level as the first and produces the same output.

use crate::actor::{Actor, CommonData, CreatureData, TrainerData};
use crate::config::SystemConfig;
use crate::env::Localizer;

/// Per-variant derivation rule.
pub trait Derive {
    /// Recompute derived fields in place.
    fn derive(&mut self, engine: &DerivationEngine<'_>);
}

/// Stateless derivation engine.
#[derive(Clone, Copy)]
pub struct DerivationEngine<'a> {
    config: &'a SystemConfig,
    localizer: &'a dyn Localizer,
}

impl<'a> DerivationEngine<'a> {
    pub fn new(config: &'a SystemConfig, localizer: &'a dyn Localizer) -> Self {
        Self { config, localizer }
    }

    pub fn config(&self) -> &'a SystemConfig {
        self.config
    }

    pub fn localizer(&self) -> &'a dyn Localizer {
        self.localizer
    }

    /// Run one full derivation pass over `actor`.
    ///
    /// Idempotent: calling it again without touching base fields leaves the
    /// record unchanged.
    pub fn derive(&self, actor: &mut Actor) {
        match actor {
            Actor::Trainer(data) => data.derive(self),
            Actor::Creature(data) => data.derive(self),
        }
    }

    /// Derive a copy of `actor`, leaving the input untouched.
    pub fn derived(&self, actor: &Actor) -> Actor {
        let mut actor = actor.clone();
        self.derive(&mut actor);
        actor
    }

    fn resolve_stats(&self, common: &mut CommonData) {
        common.stats.resolve(self.config);
    }

    fn resolve_evasion(&self, common: &mut CommonData) {
        common
            .evasion
            .resolve(&common.stats, self.config.evasion_cap);
    }
}

impl core::fmt::Debug for DerivationEngine<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DerivationEngine")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}

impl Derive for TrainerData {
    fn derive(&mut self, engine: &DerivationEngine<'_>) {
        engine.resolve_stats(&mut self.common);

        self.level = self.exp.resolve();

        let hp_value = self.common.stats.hp.value;
        self.health.resolve(self.level, hp_value);
        self.ap.resolve(self.level);

        engine.resolve_evasion(&mut self.common);
        self.skills.resolve(engine.config, engine.localizer);

        tracing::debug!(
            level = self.level,
            exp = self.exp.value,
            health_max = self.health.max,
            ap = self.ap.value,
            "derived trainer"
        );
    }
}

impl Derive for CreatureData {
    fn derive(&mut self, engine: &DerivationEngine<'_>) {
        engine.resolve_stats(&mut self.common);

        // Creatures carry no trainer level; the level term contributes nothing.
        let hp_value = self.common.stats.hp.value;
        self.health.resolve(0, hp_value);

        engine.resolve_evasion(&mut self.common);
        self.skills.resolve(engine.config, engine.localizer);

        tracing::debug!(health_max = self.health.max, "derived creature");
    }
}
