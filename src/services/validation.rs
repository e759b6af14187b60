//! Field-level validation for inbound submissions.
//!
//! A schema enumerates per-field constraints; [`validate`] walks the schema
//! against a raw JSON body and accumulates one error per violated field
//! instead of short-circuiting. Pure and synchronous: no I/O happens before
//! every constraint has been checked.

use serde::Serialize;
use serde_json::Value;

/// A single field constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

impl FieldError {
    fn new(field: &str, reason: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Constraint kind for a single field.
///
/// Length bounds are inclusive and counted in characters, so non-ASCII
/// input is bounded by what the caller typed, not its UTF-8 byte length.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Required string with inclusive length bounds.
    Text { min: usize, max: Option<usize> },
    /// Required string in `local@domain` form with a dotted domain.
    Email,
    /// Optional string with an inclusive upper length bound.
    OptionalText { max: usize },
}

/// Declared constraints for one field of an inbound record.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Validate a raw JSON body against a field schema.
///
/// Returns every violation detected in one pass. The body must be a JSON
/// object; anything else is reported as a single `body` error. Fields not
/// named by the schema are ignored.
pub fn validate(raw: &Value, schema: &[FieldSpec]) -> Result<(), Vec<FieldError>> {
    let Some(object) = raw.as_object() else {
        return Err(vec![FieldError::new("body", "expected a JSON object")]);
    };

    let mut errors = Vec::new();
    for spec in schema {
        check_field(spec, object.get(spec.name), &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_field(spec: &FieldSpec, value: Option<&Value>, errors: &mut Vec<FieldError>) {
    let required = !matches!(spec.kind, FieldKind::OptionalText { .. });

    // JSON null counts as absent
    let value = match value {
        None | Some(Value::Null) => {
            if required {
                errors.push(FieldError::new(spec.name, "field required"));
            }
            return;
        }
        Some(value) => value,
    };

    let Some(text) = value.as_str() else {
        errors.push(FieldError::new(spec.name, "must be a string"));
        return;
    };

    match spec.kind {
        FieldKind::Text { min, max } => check_length(spec.name, text, min, max, errors),
        FieldKind::Email => {
            if !is_valid_email(text) {
                errors.push(FieldError::new(spec.name, "invalid email address"));
            }
        }
        FieldKind::OptionalText { max } => check_length(spec.name, text, 0, Some(max), errors),
    }
}

fn check_length(
    field: &str,
    text: &str,
    min: usize,
    max: Option<usize>,
    errors: &mut Vec<FieldError>,
) {
    let len = text.chars().count();
    if len < min {
        errors.push(FieldError::new(
            field,
            format!("must be at least {} characters", min),
        ));
    } else if let Some(max) = max {
        if len > max {
            errors.push(FieldError::new(
                field,
                format!("must be at most {} characters", max),
            ));
        }
    }
}

/// Minimal `local@domain` syntax check: non-empty local part, a single `@`,
/// and a domain containing at least one interior dot.
pub fn is_valid_email(address: &str) -> bool {
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
