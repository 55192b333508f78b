use crate::{EntitySchema, QueryField};

/// Contract implemented by every generated entity type.
///
/// The persistence, sync, and query layers program against this trait
/// instead of concrete entity types where they can.
pub trait Model {
    /// Schema type name, as used in schemas and query tokens.
    const ENTITY_TYPE: &'static str;

    /// Plural name used by collection endpoints.
    const PLURAL: &'static str;

    /// Query tokens for every declared field — identity first, then
    /// declared order.
    const FIELDS: &'static [QueryField];

    /// Runtime schema descriptor for this entity type.
    fn schema() -> EntitySchema;

    /// The identity value of this record.
    fn identity(&self) -> &str;

    /// True for records produced by `just_id`, which carry only an
    /// identity and are exempt from the required-field invariant.
    fn is_reference_only(&self) -> bool;
}
