//! Foundation types for the WearNow data model.
//!
//! This crate defines the small, entity-agnostic types the model layer and
//! its collaborators (persistence, sync, query) share:
//! - [`Timestamp`] — millisecond-precision wall-clock instants
//! - [`IdentitySource`] / [`RandomIdentity`] — opaque identifier generation
//!
//! Everything entity-specific (schemas, builders, query tokens) belongs in
//! `wearnow-model`, not here.

mod ids;
mod timestamp;

pub use ids::{IdentitySource, RandomIdentity};
pub use timestamp::Timestamp;
