use crate::FieldType;
use thiserror::Error;

/// Errors surfaced by entity construction and record checking.
///
/// The staged builder path cannot produce either variant, since supplying
/// an absent value to a required setter is unrepresentable there. These arise
/// only when finalizing a copy seeded from an incomplete source, or when a
/// stored record is checked against its declared schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("required field `{field}` on `{entity_type}` is absent")]
    MissingField { entity_type: String, field: String },

    #[error("field `{field}` on `{entity_type}` does not match its declared type {expected:?}")]
    TypeMismatch {
        entity_type: String,
        field: String,
        expected: FieldType,
    },
}
