use std::collections::HashSet;
use uuid::Uuid;
use wearnow_types::{IdentitySource, RandomIdentity};

// ── RandomIdentity ───────────────────────────────────────────────

#[test]
fn generated_id_is_non_empty() {
    let id = RandomIdentity.generate();
    assert!(!id.is_empty());
}

#[test]
fn generated_id_is_a_uuid() {
    let id = RandomIdentity.generate();
    assert!(Uuid::parse_str(&id).is_ok());
}

#[test]
fn generated_ids_are_distinct() {
    let mut seen = HashSet::new();
    for _ in 0..10_000 {
        let id = RandomIdentity.generate();
        assert!(!id.is_empty());
        assert!(seen.insert(id), "duplicate identifier generated");
    }
}

// ── Injection seam ───────────────────────────────────────────────

struct FixedIdentity(&'static str);

impl IdentitySource for FixedIdentity {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}

#[test]
fn custom_source_is_usable_through_the_trait() {
    let source: &dyn IdentitySource = &FixedIdentity("fixed-1");
    assert_eq!(source.generate(), "fixed-1");
}
