//! Opaque identifier generation for entity records.
//!
//! Identities are plain strings: client- or system-supplied values are
//! accepted verbatim, so nothing here parses or validates a format.

use uuid::Uuid;

/// Produces identifier strings for newly built entities.
///
/// The production source is [`RandomIdentity`]; tests inject a fixed
/// implementation to get deterministic identifiers. Implementations must
/// tolerate concurrent use from many builder chains without producing
/// correlated or colliding output.
pub trait IdentitySource {
    /// Returns a fresh, unique-enough identifier.
    fn generate(&self) -> String;
}

/// Default identifier source: a random UUID v4 from the OS entropy pool.
///
/// Uniqueness relies on generator entropy, not on coordination with any
/// stored data.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdentity;

impl IdentitySource for RandomIdentity {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
