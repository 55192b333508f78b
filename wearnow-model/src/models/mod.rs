//! Generated entity types for the WearNow schema, one module per type.
//!
//! Each module is a single `define_entity!` invocation plus any enums its
//! fields declare; the builder stage types live alongside the entity.

pub mod try_on_history;
pub mod user_photo;

pub use try_on_history::{TryOnHistory, TryOnStatus};
pub use user_photo::UserPhoto;
