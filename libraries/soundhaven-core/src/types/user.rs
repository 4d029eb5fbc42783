/// User profile type
use serde::{Deserialize, Serialize};

use super::UserId;

/// Profile returned by `GET /api/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: UserId,
    #[serde(default)]
    pub avatar_url: Option<String>,
}
