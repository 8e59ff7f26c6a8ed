//! Payload validation.
//!
//! Rules are declared on the payload types with `validator` derive
//! attributes; this module turns the resulting error map into an ordered
//! list of field violations keyed by the JSON field name.

use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

/// A single rule violation on one payload field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldViolation {
    /// JSON field name
    #[schema(example = "email")]
    pub field: String,
    /// Human-readable reason
    #[schema(example = "Invalid email format")]
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A validatable request payload.
pub trait Payload: Validate {
    /// `(struct field, JSON field)` pairs in declaration order.
    const FIELDS: &'static [(&'static str, &'static str)];
}

/// Validate a payload.
///
/// Returns violations ordered by field declaration order; an empty list
/// means the payload is valid.
pub fn validate<P: Payload>(payload: &P) -> Vec<FieldViolation> {
    let errors = match payload.validate() {
        Ok(()) => return Vec::new(),
        Err(errors) => errors,
    };

    let mut ranked = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        let field = field.to_string();
        let (rank, wire_name) = P::FIELDS
            .iter()
            .enumerate()
            .find(|(_, (name, _))| *name == field)
            .map(|(rank, (_, wire))| (rank, wire.to_string()))
            .unwrap_or((P::FIELDS.len(), field));

        for error in field_errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", wire_name));
            ranked.push((rank, FieldViolation::new(wire_name.clone(), message)));
        }
    }

    // Stable: rules on the same field keep their declared order.
    ranked.sort_by_key(|(rank, _)| *rank);
    ranked.into_iter().map(|(_, violation)| violation).collect()
}
