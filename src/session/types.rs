use serde::{Deserialize, Serialize};

use super::credentials::SecureString;

/// How the current user signed in. Decides which auth provider logs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginKind {
    #[default]
    Email,
    Kakao,
    Naver,
    Apple,
    Google,
}

/// Profile fields returned by the server for a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    pub username: String,
    /// Club the member currently belongs to.
    #[serde(default)]
    pub club_id: Option<i64>,
    #[serde(default)]
    pub goal: Option<String>,
}

/// A logged-in user: profile plus the token sent as `X-AUTH`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_info: UserInfo,
    pub token: SecureString,
}

impl User {
    pub fn id(&self) -> i64 {
        self.user_info.id
    }
}
