//! User profile DTOs.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::validation::{Dto, FieldRule, RuleKind, Schema};

static USER_AVATAR_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new(
        "user-avatar",
        vec![
            FieldRule::new("userId", RuleKind::Present, "userId is required"),
            FieldRule::new("userId", RuleKind::UuidV4, "userId must be a valid UUID v4"),
            FieldRule::new("avatar", RuleKind::Present, "avatar is required"),
            FieldRule::new("avatar", RuleKind::Url, "avatar must be a valid URL"),
        ],
    )
});

/// Request to replace a user's avatar image.
///
/// Example JSON:
/// `{"userId":"123e4567-e89b-42d3-a456-426614174000","avatar":"https://example.com/a.png"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAvatarUpdate {
    user_id: Uuid,
    avatar: String,
}

impl UserAvatarUpdate {
    /// User whose avatar changes.
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.user_id
    }

    /// Absolute URL of the new avatar image.
    #[must_use]
    pub fn avatar(&self) -> &str {
        self.avatar.as_str()
    }
}

impl Dto for UserAvatarUpdate {
    fn schema() -> &'static Schema {
        &USER_AVATAR_SCHEMA
    }
}
