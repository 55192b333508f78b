//! Typed field tokens for the external query/predicate layer.
//!
//! The model performs no filtering itself; these tokens are a passive
//! name/type catalog the predicate layer composes into equality,
//! comparison, or membership filters.

use serde::Serialize;
use std::fmt;

/// Reference to a single declared field of an entity type.
///
/// Tokens use wire-format field names (`"userId"`, not `user_id`) and are
/// const-constructible, so every generated entity exposes them as
/// associated constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct QueryField {
    pub entity_type: &'static str,
    pub field_name: &'static str,
}

impl QueryField {
    #[must_use]
    pub const fn new(entity_type: &'static str, field_name: &'static str) -> Self {
        Self {
            entity_type,
            field_name,
        }
    }
}

impl fmt::Display for QueryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.entity_type, self.field_name)
    }
}

/// Traversal origin for an entity type: no field selected yet.
///
/// The predicate layer starts relationship-nested predicates here before
/// stepping into a [`QueryField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct QueryRoot {
    pub entity_type: &'static str,
}

impl QueryRoot {
    #[must_use]
    pub const fn new(entity_type: &'static str) -> Self {
        Self { entity_type }
    }

    /// Steps from the traversal origin into one of the entity's fields.
    #[must_use]
    pub const fn field(&self, field_name: &'static str) -> QueryField {
        QueryField::new(self.entity_type, field_name)
    }
}
