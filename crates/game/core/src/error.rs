//! Common error infrastructure for ptu-core.
//!
//! The derivation engine itself never fails: out-of-range inputs are clamped
//! or passed through. Errors only arise where raw records are turned into
//! typed actors, and that boundary reports them as [`ValidationError`].

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: a string where a number is expected, unknown actor type
    Validation,

    /// Unexpected state inconsistency. Indicates a bug.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all ptu-core errors.
pub trait PtuError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// JSON-ish type names used in validation messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum FieldType {
    Null,
    Bool,
    Integer,
    Number,
    String,
    Array,
    Object,
}

/// Why a field was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationErrorKind {
    #[error("expected {expected}, found {found}")]
    TypeMismatch { expected: FieldType, found: FieldType },

    #[error("expected an integer, found a fractional number")]
    NotAnInteger,

    #[error("integer outside {min}..={max}")]
    OutOfRange { min: i64, max: i64 },

    #[error("unknown actor type '{0}'")]
    UnknownActorType(String),

    #[error("unknown variant '{0}'")]
    UnknownVariant(String),

    #[error("{0}")]
    Malformed(String),
}

/// A raw record was rejected by the schema layer.
///
/// `path` is the dotted field path of the offending leaf, e.g.
/// `"stats.hp.base"` or `"otherCapabilities.2"`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("invalid field '{path}': {kind}")]
pub struct ValidationError {
    pub path: String,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, kind: ValidationErrorKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn type_mismatch(path: impl Into<String>, expected: FieldType, found: FieldType) -> Self {
        Self::new(path, ValidationErrorKind::TypeMismatch { expected, found })
    }
}

impl PtuError for ValidationError {
    fn severity(&self) -> ErrorSeverity {
        match self.kind {
            ValidationErrorKind::Malformed(_) => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self.kind {
            ValidationErrorKind::TypeMismatch { .. } => "VALIDATION_TYPE_MISMATCH",
            ValidationErrorKind::NotAnInteger => "VALIDATION_NOT_AN_INTEGER",
            ValidationErrorKind::OutOfRange { .. } => "VALIDATION_OUT_OF_RANGE",
            ValidationErrorKind::UnknownActorType(_) => "VALIDATION_UNKNOWN_ACTOR_TYPE",
            ValidationErrorKind::UnknownVariant(_) => "VALIDATION_UNKNOWN_VARIANT",
            ValidationErrorKind::Malformed(_) => "VALIDATION_MALFORMED",
        }
    }
}
