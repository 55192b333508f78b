//! The `TryOnHistory` entity: one virtual try-on request and its outcome.

use serde::{Deserialize, Serialize};
use std::fmt;
use wearnow_types::Timestamp;

/// Lifecycle of a try-on request as reported by the processing pipeline.
///
/// New requests are stored without a status; the pipeline moves them
/// through `PROCESSING` to either `COMPLETED` or `FAILED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TryOnStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl TryOnStatus {
    /// Wire values, in declaration order.
    pub const NAMES: &'static [&'static str] = &["PENDING", "PROCESSING", "COMPLETED", "FAILED"];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for TryOnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

crate::define_entity! {
    /// A single try-on request with its input photos and outcome.
    /// `userPhotoId` is a weak reference to a [`UserPhoto`] record, a
    /// lookup key only, never an owned instance.
    ///
    /// [`UserPhoto`]: crate::UserPhoto
    pub TryOnHistory {
        entity_type: "TryOnHistory",
        plural: "TryOnHistories",
        version: 1,
        auth: owner "owner" [Create, Update, Delete, Read],
        identity: id ("id", ID),
        fields: {
            required user_id ("userId", USER_ID): String as Text => UserIdStep;
            required user_photo_id ("userPhotoId", USER_PHOTO_ID): String as Text => UserPhotoIdStep;
            required user_photo_url ("userPhotoUrl", USER_PHOTO_URL): String as Text => UserPhotoUrlStep;
            required garment_photo_url ("garmentPhotoUrl", GARMENT_PHOTO_URL): String as Text => GarmentPhotoUrlStep;
            optional result_photo_url ("resultPhotoUrl", RESULT_PHOTO_URL): String as Text;
            optional status ("status", STATUS): TryOnStatus as Enum;
            optional error_message ("errorMessage", ERROR_MESSAGE): String as Text;
            optional metadata ("metadata", METADATA): String as Json;
            optional completed_at ("completedAt", COMPLETED_AT): Timestamp as Timestamp;
            read_only created_at ("createdAt", CREATED_AT): Timestamp as Timestamp;
            read_only updated_at ("updatedAt", UPDATED_AT): Timestamp as Timestamp;
        }
    }
}
