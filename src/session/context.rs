use super::credentials::SecureString;

/// Snapshot of the session data a request needs.
///
/// Taken from a [`UserStore`](super::UserStore) right before routing, so
/// routing itself never reads shared state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionContext {
    pub user_id: Option<i64>,
    pub token: SecureString,
}

impl SessionContext {
    pub fn new(user_id: i64, token: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id),
            token: SecureString::new(token),
        }
    }

    /// No logged-in user: empty token, no id.
    pub fn anonymous() -> Self {
        Self::default()
    }
}
