//! Generated data-model layer for WearNow.
//!
//! Turns each entity schema into an immutable value type whose
//! construction is validated at compile time:
//! - staged builders — required fields supplied in declared order before
//!   the terminal stage (optional fields, identity, `build()`) is reachable
//! - copy builders — a new entity derived from an existing one, with the
//!   required-field invariant re-validated at finalization
//! - reference-only records (`just_id`) for delete targets and links
//! - [`EntitySchema`] descriptors and [`QueryField`] tokens for the
//!   persistence, access-control, and query layers
//!
//! This crate performs no I/O, evaluates no predicates, and enforces no
//! access rules; it only produces values and typed descriptors for the
//! layers that do.

mod error;
mod macros;
mod model;
mod query;
mod schema;

pub mod models;

pub use error::ModelError;
pub use model::Model;
pub use models::{TryOnHistory, TryOnStatus, UserPhoto};
pub use query::{QueryField, QueryRoot};
pub use schema::{AuthRule, AuthStrategy, EntitySchema, FieldDef, FieldType, Operation};
pub use wearnow_types::{IdentitySource, RandomIdentity, Timestamp};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, ModelError>;
