//! Sheet template manifest.
//!
//! Partial templates the host rendering layer preloads before any actor sheet
//! opens. Static data only.

/// Actor sheet partials, in preload order.
pub const ACTOR_TEMPLATES: [&str; 6] = [
    "systems/ptu/templates/actor/parts/actor-summary.hbs",
    "systems/ptu/templates/actor/parts/actor-skills.hbs",
    "systems/ptu/templates/actor/parts/actor-stats-combat.hbs",
    "systems/ptu/templates/actor/parts/actor-stats-derived.hbs",
    "systems/ptu/templates/actor/parts/actor-trainer.hbs",
    "systems/ptu/templates/actor/parts/actor-trainer-card.hbs",
];

/// Named view over [`ACTOR_TEMPLATES`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TemplateManifest;

impl TemplateManifest {
    pub fn paths(&self) -> &'static [&'static str] {
        &ACTOR_TEMPLATES
    }

    /// Short name of a template, e.g. `"actor-skills"`.
    pub fn name_of(path: &str) -> &str {
        let file = path.rsplit('/').next().unwrap_or(path);
        file.strip_suffix(".hbs").unwrap_or(file)
    }
}
