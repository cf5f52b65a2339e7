//! Actor schema: default-merge and leaf type validation.
//!
//! A raw record only needs to carry the leaves it wants to change. Every
//! supplied leaf replaces the matching default; everything else keeps its
//! default. Each supplied leaf must have the same JSON type as the default it
//! replaces, otherwise the record is rejected with the dotted path of the
//! offending field. Values are never coerced between types.
//!
//! ```text
//! defaults (serialized TrainerData)     input
//! { stats: { hp: { base: 10, .. } } }   { stats: { hp: { base: 12 } } }
//!                       ↓ merge + check
//! { stats: { hp: { base: 12, .. } } }  → TrainerData
//! ```

use std::str::FromStr;

use ptu_core::{
    Actor, ActorKind, CreatureData, FieldType, Size, SkillGroup, TrainerData, ValidationError,
    ValidationErrorKind,
};
use serde_json::{Map, Number, Value};

/// Default-merging schema for one actor variant.
#[derive(Clone, Debug)]
pub struct ActorSchema {
    kind: ActorKind,
    defaults: Value,
}

impl ActorSchema {
    /// Build the schema for `kind` from its default record.
    pub fn new(kind: ActorKind) -> Result<Self, ValidationError> {
        let defaults = match kind {
            ActorKind::Trainer => serde_json::to_value(TrainerData::default()),
            ActorKind::Creature => serde_json::to_value(CreatureData::default()),
        }
        .map_err(|e| ValidationError::new("", ValidationErrorKind::Malformed(e.to_string())))?;

        Ok(Self { kind, defaults })
    }

    pub fn kind(&self) -> ActorKind {
        self.kind
    }

    /// The default record as JSON.
    pub fn defaults(&self) -> &Value {
        &self.defaults
    }

    /// Merge `system` over the defaults and produce a typed actor.
    pub fn build(&self, system: &Value) -> Result<Actor, ValidationError> {
        let mut path = FieldPath::default();
        let merged = merge(&self.defaults, system, &mut path)?;

        let malformed =
            |e: serde_json::Error| ValidationError::new("", ValidationErrorKind::Malformed(e.to_string()));

        Ok(match self.kind {
            ActorKind::Trainer => Actor::Trainer(serde_json::from_value(merged).map_err(malformed)?),
            ActorKind::Creature => {
                Actor::Creature(serde_json::from_value(merged).map_err(malformed)?)
            }
        })
    }

    /// Build an actor from a `{ "type": ..., "system": {...} }` envelope.
    ///
    /// A missing `system` object yields the variant's defaults.
    pub fn build_envelope(raw: &Value) -> Result<Actor, ValidationError> {
        let object = raw
            .as_object()
            .ok_or_else(|| ValidationError::type_mismatch("", FieldType::Object, type_of(raw)))?;

        let kind = match object.get("type") {
            Some(Value::String(tag)) => ActorKind::from_str(tag).map_err(|_| {
                ValidationError::new("type", ValidationErrorKind::UnknownActorType(tag.clone()))
            })?,
            Some(other) => {
                return Err(ValidationError::type_mismatch(
                    "type",
                    FieldType::String,
                    type_of(other),
                ));
            }
            None => {
                return Err(ValidationError::type_mismatch(
                    "type",
                    FieldType::String,
                    FieldType::Null,
                ));
            }
        };

        let system = object.get("system").unwrap_or(&Value::Null);
        Self::new(kind)?.build(system)
    }
}

/// Dotted path of the field currently being merged.
#[derive(Debug, Default)]
struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    fn pop(&mut self) {
        self.segments.pop();
    }

    fn render(&self) -> String {
        self.segments.join(".")
    }

    fn matches(&self, pattern: &[&str]) -> bool {
        self.segments.len() == pattern.len()
            && self
                .segments
                .iter()
                .zip(pattern)
                .all(|(segment, expected)| *expected == "*" || segment == expected)
    }
}

fn type_of(value: &Value) -> FieldType {
    match value {
        Value::Null => FieldType::Null,
        Value::Bool(_) => FieldType::Bool,
        Value::Number(n) if n.is_f64() => FieldType::Number,
        Value::Number(_) => FieldType::Integer,
        Value::String(_) => FieldType::String,
        Value::Array(_) => FieldType::Array,
        Value::Object(_) => FieldType::Object,
    }
}

fn merge(default: &Value, input: &Value, path: &mut FieldPath) -> Result<Value, ValidationError> {
    if input.is_null() {
        return Ok(default.clone());
    }

    match default {
        Value::Object(fields) => merge_object(fields, input, path),
        Value::Array(items) => merge_array(items, input, path),
        Value::Number(number) => merge_number(number, input, path),
        Value::String(_) => merge_string(input, path),
        Value::Bool(_) => match input {
            Value::Bool(_) => Ok(input.clone()),
            other => Err(mismatch(path, FieldType::Bool, other)),
        },
        // Optional derived fields; whatever is stored is overwritten by the pass.
        Value::Null => Ok(input.clone()),
    }
}

fn merge_object(
    fields: &Map<String, Value>,
    input: &Value,
    path: &mut FieldPath,
) -> Result<Value, ValidationError> {
    let Value::Object(supplied) = input else {
        return Err(mismatch(path, FieldType::Object, input));
    };

    for key in supplied.keys().filter(|key| !fields.contains_key(*key)) {
        tracing::debug!(field = %path.render(), key = %key, "dropping unknown field");
    }

    let mut merged = Map::with_capacity(fields.len());
    for (key, default) in fields {
        let value = match supplied.get(key) {
            Some(value) => {
                path.push(key.as_str());
                let value = merge(default, value, path)?;
                path.pop();
                value
            }
            None => default.clone(),
        };
        merged.insert(key.clone(), value);
    }
    Ok(Value::Object(merged))
}

fn merge_array(
    items: &[Value],
    input: &Value,
    path: &mut FieldPath,
) -> Result<Value, ValidationError> {
    let Value::Array(supplied) = input else {
        return Err(mismatch(path, FieldType::Array, input));
    };

    let element = element_type(path).or_else(|| items.first().map(type_of));
    if let Some(expected) = element {
        for (index, item) in supplied.iter().enumerate() {
            if type_of(item) != expected {
                path.push(index.to_string());
                let err = mismatch(path, expected, item);
                path.pop();
                return Err(err);
            }
        }
    }
    Ok(input.clone())
}

fn merge_number(
    default: &Number,
    input: &Value,
    path: &mut FieldPath,
) -> Result<Value, ValidationError> {
    let integer = !default.is_f64();
    let Value::Number(supplied) = input else {
        let expected = if integer {
            FieldType::Integer
        } else {
            FieldType::Number
        };
        return Err(mismatch(path, expected, input));
    };

    if !integer {
        return Ok(input.clone());
    }

    // A float literal on an integer field is accepted only when it is whole
    // (TOML and some editors write `3.0`); it is stored as the integer.
    let whole = if supplied.is_f64() {
        let Some(float) = supplied.as_f64().filter(|float| float.fract() == 0.0) else {
            return Err(ValidationError::new(
                path.render(),
                ValidationErrorKind::NotAnInteger,
            ));
        };
        (float.abs() < i64::MAX as f64).then_some(float as i64)
    } else {
        supplied.as_i64()
    };

    let (min, max) = integer_range(path);
    match whole {
        Some(value) if (min..=max).contains(&value) => Ok(Value::Number(Number::from(value))),
        _ => Err(ValidationError::new(
            path.render(),
            ValidationErrorKind::OutOfRange { min, max },
        )),
    }
}

/// Bounds of the Rust integer type behind an integer leaf.
fn integer_range(path: &FieldPath) -> (i64, i64) {
    if path.matches(&["id"]) {
        (i64::MIN, i64::MAX)
    } else {
        (i32::MIN.into(), i32::MAX.into())
    }
}

fn merge_string(input: &Value, path: &mut FieldPath) -> Result<Value, ValidationError> {
    let Value::String(text) = input else {
        return Err(mismatch(path, FieldType::String, input));
    };

    match enum_constraint(path) {
        Some(canonical) => canonical(text)
            .map(Value::String)
            .ok_or_else(|| {
                ValidationError::new(
                    path.render(),
                    ValidationErrorKind::UnknownVariant(text.clone()),
                )
            }),
        None => Ok(input.clone()),
    }
}

fn mismatch(path: &FieldPath, expected: FieldType, found: &Value) -> ValidationError {
    ValidationError::type_mismatch(path.render(), expected, type_of(found))
}

type Canonicalize = fn(&str) -> Option<String>;

/// String fields restricted to an enum. Returns the canonical spelling.
fn enum_constraint(path: &FieldPath) -> Option<Canonicalize> {
    if path.matches(&["capabilities", "size"]) {
        Some(canonical_size as Canonicalize)
    } else if path.matches(&["skills", "*", "group"]) {
        Some(canonical_group as Canonicalize)
    } else {
        None
    }
}

fn canonical_size(text: &str) -> Option<String> {
    Size::from_str(text).ok().map(|size| size.to_string())
}

fn canonical_group(text: &str) -> Option<String> {
    SkillGroup::from_str(text).ok().map(|group| group.to_string())
}

/// Element types of arrays whose default is empty.
fn element_type(path: &FieldPath) -> Option<FieldType> {
    path.matches(&["otherCapabilities"])
        .then_some(FieldType::String)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptu_core::{ErrorSeverity, PtuError};
    use serde_json::json;

    fn trainer(system: Value) -> Result<Actor, ValidationError> {
        ActorSchema::new(ActorKind::Trainer)
            .expect("schema")
            .build(&system)
    }

    #[test]
    fn empty_input_yields_defaults() {
        let actor = trainer(json!({})).expect("valid");
        assert_eq!(actor, Actor::new(ActorKind::Trainer));
    }

    #[test]
    fn partial_input_overrides_only_supplied_leaves() {
        let actor = trainer(json!({
            "stats": { "hp": { "base": 12 } },
            "skills": { "charm": { "value": 5 } },
            "exp": { "dexExp": 3 }
        }))
        .expect("valid");
        let data = actor.as_trainer().expect("trainer");

        assert_eq!(data.common.stats.hp.base, 12);
        assert_eq!(data.common.stats.hp.feats, 0);
        assert_eq!(data.common.stats.atk.base, 5);
        assert_eq!(data.skills.charm.value, 5);
        assert_eq!(data.skills.charm.name, "PTU.Charm");
        assert_eq!(data.skills.charm.group, SkillGroup::Spirit);
        assert_eq!(data.exp.dex_exp, 3);
        assert_eq!(data.level, 1);
    }

    #[test]
    fn string_for_number_is_rejected_with_path() {
        let err = trainer(json!({ "stats": { "hp": { "base": "ten" } } })).unwrap_err();
        assert_eq!(err.path, "stats.hp.base");
        assert_eq!(
            err.kind,
            ValidationErrorKind::TypeMismatch {
                expected: FieldType::Integer,
                found: FieldType::String,
            }
        );
    }

    #[test]
    fn fractional_value_on_integer_field_is_rejected() {
        let err = trainer(json!({ "skills": { "guile": { "value": 2.5 } } })).unwrap_err();
        assert_eq!(err.path, "skills.guile.value");
        assert_eq!(err.kind, ValidationErrorKind::NotAnInteger);
    }

    #[test]
    fn integer_outside_field_range_is_rejected_with_path() {
        let err = trainer(json!({ "money": 3_000_000_000_i64 })).unwrap_err();
        assert_eq!(err.path, "money");
        assert_eq!(
            err.kind,
            ValidationErrorKind::OutOfRange {
                min: i32::MIN.into(),
                max: i32::MAX.into(),
            }
        );
        assert_eq!(err.severity(), ErrorSeverity::Validation);

        let err = trainer(json!({ "stats": { "atk": { "base": -3e9 } } })).unwrap_err();
        assert_eq!(err.path, "stats.atk.base");

        let err = trainer(json!({ "ap": { "used": { "spent": u64::MAX } } })).unwrap_err();
        assert_eq!(err.path, "ap.used.spent");
    }

    #[test]
    fn id_accepts_the_full_i64_range() {
        let actor = trainer(json!({ "id": 3_000_000_000_i64 })).expect("valid");
        assert_eq!(actor.as_trainer().expect("trainer").id, 3_000_000_000);

        let err = trainer(json!({ "id": u64::MAX })).unwrap_err();
        assert_eq!(err.path, "id");
    }

    #[test]
    fn whole_float_on_integer_field_is_accepted() {
        let actor = trainer(json!({ "money": 300.0 })).expect("valid");
        assert_eq!(actor.as_trainer().expect("trainer").money, 300);
    }

    #[test]
    fn fractional_combat_stage_is_accepted() {
        let actor = trainer(json!({ "stats": { "spd": { "cs": 1.5 } } })).expect("valid");
        assert_eq!(actor.stats().spd.cs, 1.5);
    }

    #[test]
    fn other_capabilities_must_be_strings() {
        let err = trainer(json!({ "otherCapabilities": ["Naturewalk", 3] })).unwrap_err();
        assert_eq!(err.path, "otherCapabilities.1");

        let actor = trainer(json!({ "otherCapabilities": ["Naturewalk (Forest)"] }))
            .expect("valid");
        assert_eq!(actor.common().other_capabilities, vec!["Naturewalk (Forest)"]);
    }

    #[test]
    fn size_is_checked_and_canonicalized() {
        let actor = trainer(json!({ "capabilities": { "size": "large" } })).expect("valid");
        assert_eq!(actor.common().capabilities.size, Size::Large);

        let err = trainer(json!({ "capabilities": { "size": "Tiny" } })).unwrap_err();
        assert_eq!(err.path, "capabilities.size");
        assert_eq!(err.kind, ValidationErrorKind::UnknownVariant("Tiny".to_owned()));
    }

    #[test]
    fn null_keeps_default_and_unknown_keys_are_dropped() {
        let actor = trainer(json!({ "money": null, "favoriteColor": "teal" })).expect("valid");
        assert_eq!(actor, Actor::new(ActorKind::Trainer));
    }

    #[test]
    fn derived_total_is_not_read_back() {
        let actor = trainer(json!({ "stats": { "atk": { "total": 99 } } })).expect("valid");
        assert_eq!(actor.stats().atk.total, 0);
    }

    #[test]
    fn creature_schema_has_no_trainer_fields() {
        let schema = ActorSchema::new(ActorKind::Creature).expect("schema");
        let defaults = schema.defaults().as_object().expect("object");
        assert!(defaults.contains_key("skills"));
        assert!(defaults.contains_key("health"));
        assert!(!defaults.contains_key("ap"));
        assert!(!defaults.contains_key("exp"));
    }

    #[test]
    fn envelope_dispatches_on_type() {
        let actor = ActorSchema::build_envelope(&json!({
            "type": "creature",
            "system": { "stats": { "def": { "base": 9 } } }
        }))
        .expect("valid");
        assert_eq!(actor.kind(), ActorKind::Creature);
        assert_eq!(actor.stats().def.base, 9);

        let err = ActorSchema::build_envelope(&json!({ "type": "npc" })).unwrap_err();
        assert_eq!(err.path, "type");
        assert_eq!(
            err.kind,
            ValidationErrorKind::UnknownActorType("npc".to_owned())
        );
    }
}
