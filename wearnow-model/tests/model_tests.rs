use pretty_assertions::assert_eq;
use std::hash::{DefaultHasher, Hash, Hasher};
use wearnow_model::{Model, Timestamp, TryOnHistory, TryOnStatus, UserPhoto};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn history_with_id(id: &str) -> TryOnHistory {
    TryOnHistory::builder()
        .user_id("u1")
        .user_photo_id("p1")
        .user_photo_url("http://x/u.jpg")
        .garment_photo_url("http://x/g.jpg")
        .id(id)
        .build()
}

// ── Equality ─────────────────────────────────────────────────────

#[test]
fn identical_field_values_are_equal() {
    assert_eq!(history_with_id("h-1"), history_with_id("h-1"));
}

#[test]
fn a_single_differing_field_breaks_equality() {
    assert_ne!(history_with_id("h-1"), history_with_id("h-2"));

    let plain = history_with_id("h-1");
    let with_status = plain
        .copy_of_builder()
        .status(TryOnStatus::Processing)
        .build()
        .unwrap();
    assert_ne!(plain, with_status);
}

#[test]
fn absent_compares_equal_to_absent() {
    let a = history_with_id("h-1");
    let b = history_with_id("h-1");
    assert_eq!(a.status(), None);
    assert_eq!(a, b);
}

#[test]
fn full_and_reference_with_the_same_id_differ() {
    let full = history_with_id("h-1");
    let reference = TryOnHistory::just_id("h-1");
    assert_ne!(full, reference);
}

// ── Hashing ──────────────────────────────────────────────────────

#[test]
fn equal_entities_hash_equal() {
    assert_eq!(hash_of(&history_with_id("h-1")), hash_of(&history_with_id("h-1")));
}

#[test]
fn differing_entities_hash_differently() {
    assert_ne!(hash_of(&history_with_id("h-1")), hash_of(&history_with_id("h-2")));
}

// ── Reference-only records ───────────────────────────────────────

#[test]
fn just_id_sets_only_the_identity() {
    let reference = TryOnHistory::just_id("h-1");
    assert_eq!(reference.id(), "h-1");
    assert_eq!(reference.user_id(), None);
    assert_eq!(reference.user_photo_id(), None);
    assert_eq!(reference.user_photo_url(), None);
    assert_eq!(reference.garment_photo_url(), None);
    assert_eq!(reference.result_photo_url(), None);
    assert_eq!(reference.status(), None);
    assert_eq!(reference.error_message(), None);
    assert_eq!(reference.metadata(), None);
    assert_eq!(reference.completed_at(), None);
    assert_eq!(reference.created_at(), None);
    assert_eq!(reference.updated_at(), None);
}

#[test]
fn reference_only_flag() {
    assert!(TryOnHistory::just_id("h-1").is_reference_only());
    assert!(!history_with_id("h-1").is_reference_only());
}

#[test]
fn identity_accessor_matches_the_trait() {
    let history = history_with_id("h-1");
    assert_eq!(history.identity(), "h-1");
    assert_eq!(history.identity(), history.id());
}

// ── Rendering ────────────────────────────────────────────────────

#[test]
fn display_lists_every_field_in_declared_order() {
    let history = history_with_id("h-1");
    assert_eq!(
        history.to_string(),
        "TryOnHistory {id=h-1, userId=u1, userPhotoId=p1, \
         userPhotoUrl=http://x/u.jpg, garmentPhotoUrl=http://x/g.jpg, \
         resultPhotoUrl=<absent>, status=<absent>, errorMessage=<absent>, \
         metadata=<absent>, completedAt=<absent>, createdAt=<absent>, \
         updatedAt=<absent>}"
    );
}

#[test]
fn display_marks_absence_explicitly() {
    let plain = history_with_id("h-1");
    let with_status = plain
        .copy_of_builder()
        .status(TryOnStatus::Processing)
        .build()
        .unwrap();

    assert_ne!(plain.to_string(), with_status.to_string());
    assert!(with_status.to_string().contains("status=PROCESSING"));
    assert!(plain.to_string().contains("status=<absent>"));
}

#[test]
fn display_renders_timestamps_as_millis() {
    let photo = UserPhoto::builder()
        .user_id("u1")
        .photo_url("http://x/p.jpg")
        .uploaded_at(Timestamp::from_millis(1000))
        .is_default(true)
        .id("ph-1")
        .build();

    assert_eq!(
        photo.to_string(),
        "UserPhoto {id=ph-1, userId=u1, photoUrl=http://x/p.jpg, \
         isDefault=true, uploadedAt=1000, createdAt=<absent>, updatedAt=<absent>}"
    );
}

#[test]
fn status_display_uses_wire_names() {
    assert_eq!(TryOnStatus::Pending.to_string(), "PENDING");
    assert_eq!(TryOnStatus::Processing.to_string(), "PROCESSING");
    assert_eq!(TryOnStatus::Completed.to_string(), "COMPLETED");
    assert_eq!(TryOnStatus::Failed.to_string(), "FAILED");
}
