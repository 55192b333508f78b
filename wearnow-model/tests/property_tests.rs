//! Property-based tests for builder and copy semantics.
//!
//! These cover the schema-independent guarantees:
//! - staged construction preserves every supplied value
//! - `copy_of_builder().build()` with no overrides is an identity
//! - an override replaces exactly the overridden field
//! - the source of a copy is never altered

use proptest::prelude::*;
use wearnow_model::{Timestamp, TryOnHistory, TryOnStatus};

fn value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9:/. _-]{1,40}").unwrap()
}

fn status_strategy() -> impl Strategy<Value = TryOnStatus> {
    prop_oneof![
        Just(TryOnStatus::Pending),
        Just(TryOnStatus::Processing),
        Just(TryOnStatus::Completed),
        Just(TryOnStatus::Failed),
    ]
}

fn history_strategy() -> impl Strategy<Value = TryOnHistory> {
    (
        value_strategy(),
        value_strategy(),
        value_strategy(),
        value_strategy(),
        prop::option::of(value_strategy()),
        prop::option::of(status_strategy()),
        prop::option::of(any::<i64>().prop_map(Timestamp::from_millis)),
    )
        .prop_map(
            |(user_id, photo_id, photo_url, garment_url, result_url, status, completed)| {
                let mut step = TryOnHistory::builder()
                    .user_id(user_id)
                    .user_photo_id(photo_id)
                    .user_photo_url(photo_url)
                    .garment_photo_url(garment_url);
                if let Some(result_url) = result_url {
                    step = step.result_photo_url(result_url);
                }
                if let Some(status) = status {
                    step = step.status(status);
                }
                if let Some(completed) = completed {
                    step = step.completed_at(completed);
                }
                step.build()
            },
        )
}

proptest! {
    /// Staged construction preserves every supplied required value.
    #[test]
    fn build_preserves_required_values(
        user_id in value_strategy(),
        photo_id in value_strategy(),
        photo_url in value_strategy(),
        garment_url in value_strategy(),
    ) {
        let history = TryOnHistory::builder()
            .user_id(user_id.clone())
            .user_photo_id(photo_id.clone())
            .user_photo_url(photo_url.clone())
            .garment_photo_url(garment_url.clone())
            .build();

        prop_assert_eq!(history.user_id(), Some(user_id.as_str()));
        prop_assert_eq!(history.user_photo_id(), Some(photo_id.as_str()));
        prop_assert_eq!(history.user_photo_url(), Some(photo_url.as_str()));
        prop_assert_eq!(history.garment_photo_url(), Some(garment_url.as_str()));
    }

    /// A copy with no overrides equals its source, field for field.
    #[test]
    fn copy_is_idempotent(history in history_strategy()) {
        let copy = history.copy_of_builder().build().unwrap();
        prop_assert_eq!(copy, history);
    }

    /// An override replaces exactly the overridden field and leaves the
    /// source untouched.
    #[test]
    fn override_replaces_only_that_field(
        history in history_strategy(),
        message in value_strategy(),
    ) {
        let before = history.clone();
        let updated = history
            .copy_of_builder()
            .error_message(message.clone())
            .build()
            .unwrap();

        prop_assert_eq!(updated.error_message(), Some(message.as_str()));
        prop_assert_eq!(updated.id(), history.id());
        prop_assert_eq!(updated.status(), history.status());
        prop_assert_eq!(updated.result_photo_url(), history.result_photo_url());
        prop_assert_eq!(updated.completed_at(), history.completed_at());
        prop_assert_eq!(history, before);
    }

    /// A differing override breaks equality with the source.
    #[test]
    fn differing_override_breaks_equality(
        history in history_strategy(),
        message in value_strategy(),
    ) {
        prop_assume!(history.error_message() != Some(message.as_str()));
        let updated = history
            .copy_of_builder()
            .error_message(message)
            .build()
            .unwrap();
        prop_assert_ne!(updated, history);
    }

    /// `just_id` keeps the identity verbatim and nothing else.
    #[test]
    fn just_id_keeps_the_identity(id in value_strategy()) {
        let reference = TryOnHistory::just_id(id.clone());
        prop_assert_eq!(reference.id(), id.as_str());
        prop_assert_eq!(reference.user_id(), None);
    }
}
