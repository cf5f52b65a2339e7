//! Plain-text sheet rendering for derived actors.

use std::fmt::Write;

use ptu_core::{Actor, EvasionKind, Localizer};

/// Render a derived actor as a text sheet.
pub fn render_sheet(
    name: &str,
    actor: &Actor,
    localizer: &dyn Localizer,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    write_sheet(&mut out, name, actor, localizer)?;
    Ok(out)
}

fn write_sheet(
    out: &mut String,
    name: &str,
    actor: &Actor,
    localizer: &dyn Localizer,
) -> std::fmt::Result {
    let title = if name.is_empty() { "(unnamed)" } else { name };
    writeln!(out, "{title} [{}]", actor.kind())?;

    if let Some(trainer) = actor.as_trainer() {
        writeln!(
            out,
            "Level {}  Exp {}  AP {}/{}",
            trainer.level, trainer.exp.value, trainer.ap.value, trainer.ap.max
        )?;
    }
    let health = actor.health();
    writeln!(out, "Health {}/{}", health.value, health.max)?;

    writeln!(out)?;
    writeln!(out, "{:<18}{:>6}{:>6}{:>8}", "Stat", "Total", "CS", "Value")?;
    for (kind, stat) in actor.stats().iter() {
        writeln!(
            out,
            "{:<18}{:>6}{:>6}{:>8}",
            localizer.localize(kind.label_key()),
            stat.total,
            stat.cs,
            format_value(stat.value)
        )?;
    }

    writeln!(out)?;
    let evasion = &actor.common().evasion;
    for kind in [EvasionKind::Physical, EvasionKind::Special, EvasionKind::Speed] {
        writeln!(out, "Evasion {:<10}{:>4}", kind.to_string(), evasion.get(kind).value)?;
    }

    writeln!(out)?;
    writeln!(out, "{:<18}{:<8}{:<10}{}", "Skill", "Group", "Roll", "Rank")?;
    for (_, skill) in actor.skills().iter() {
        writeln!(
            out,
            "{:<18}{:<8}{:<10}{}",
            localizer.localize(&skill.name),
            skill.group,
            skill.roll,
            skill.rank_label
        )?;
    }
    Ok(())
}

/// Whole values print without a fraction; others with one decimal.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptu_core::{ActorKind, DerivationEngine, KeyLocalizer, SystemConfig};

    #[test]
    fn trainer_sheet_lists_pools_and_skills() {
        let config = SystemConfig::default();
        let engine = DerivationEngine::new(&config, &KeyLocalizer);
        let actor = engine.derived(&Actor::new(ActorKind::Trainer));

        let sheet = render_sheet("Ace", &actor, &KeyLocalizer).expect("render");
        assert!(sheet.starts_with("Ace [trainer]"));
        assert!(sheet.contains("Level 1  Exp 0  AP 5/5"));
        assert!(sheet.contains("Health 1/42"));
        assert!(sheet.contains("PTU.Acrobatics"));
        assert!(sheet.contains("2d6"));
    }

    #[test]
    fn creature_sheet_has_no_trainer_line() {
        let config = SystemConfig::default();
        let engine = DerivationEngine::new(&config, &KeyLocalizer);
        let actor = engine.derived(&Actor::new(ActorKind::Creature));

        let sheet = render_sheet("", &actor, &KeyLocalizer).expect("render");
        assert!(sheet.starts_with("(unnamed) [creature]"));
        assert!(!sheet.contains("Level"));
    }

    #[test]
    fn values_format_compactly() {
        assert_eq!(format_value(12.0), "12");
        assert_eq!(format_value(8.4), "8.4");
    }
}
