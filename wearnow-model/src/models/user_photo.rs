//! The `UserPhoto` entity: a stored photo of the user.

use wearnow_types::Timestamp;

crate::define_entity! {
    /// A photo of the user available for try-on requests. At most one per
    /// user is flagged as the default by the application.
    pub UserPhoto {
        entity_type: "UserPhoto",
        plural: "UserPhotos",
        version: 1,
        auth: owner "owner" [Create, Update, Delete, Read],
        identity: id ("id", ID),
        fields: {
            required user_id ("userId", USER_ID): String as Text => UserIdStep;
            required photo_url ("photoUrl", PHOTO_URL): String as Text => PhotoUrlStep;
            optional is_default ("isDefault", IS_DEFAULT): bool as Bool;
            required uploaded_at ("uploadedAt", UPLOADED_AT): Timestamp as Timestamp => UploadedAtStep;
            read_only created_at ("createdAt", CREATED_AT): Timestamp as Timestamp;
            read_only updated_at ("updatedAt", UPDATED_AT): Timestamp as Timestamp;
        }
    }
}
