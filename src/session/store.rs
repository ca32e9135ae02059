//! Thread-safe user storage.

use std::sync::Arc;

use parking_lot::RwLock;

use super::context::SessionContext;
use super::types::{LoginKind, User};

/// Key-value style access to the logged-in user.
///
/// Implementations must make `update_user` atomic: no other write may land
/// between its read and its write.
pub trait UserStore: Send + Sync {
    fn get_user(&self) -> Option<User>;

    fn set_user(&self, user: User);

    /// Forget the user and the login kind.
    fn logout_user(&self);

    fn login_kind(&self) -> Option<LoginKind>;

    fn set_login_kind(&self, kind: LoginKind);

    /// Read-modify-write the stored user under one lock.
    ///
    /// Returns the updated user, or `None` (without calling `f`) when nobody
    /// is logged in.
    fn update_user(&self, f: &mut dyn FnMut(&mut User)) -> Option<User>;

    /// Session snapshot for request routing.
    fn session_context(&self) -> SessionContext {
        match self.get_user() {
            Some(user) => SessionContext {
                user_id: Some(user.id()),
                token: user.token,
            },
            None => SessionContext::anonymous(),
        }
    }
}

/// In-memory [`UserStore`].
///
/// Cheap to clone; clones share the same storage.
#[derive(Clone, Default)]
pub struct MemoryUserStore {
    inner: Arc<RwLock<MemoryUserStoreInner>>,
}

#[derive(Default)]
struct MemoryUserStoreInner {
    user: Option<User>,
    login_kind: Option<LoginKind>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a logged-in user.
    pub fn with_user(user: User, kind: LoginKind) -> Self {
        let store = Self::new();
        store.set_user(user);
        store.set_login_kind(kind);
        store
    }
}

impl UserStore for MemoryUserStore {
    fn get_user(&self) -> Option<User> {
        self.inner.read().user.clone()
    }

    fn set_user(&self, user: User) {
        tracing::debug!(user_id = user.id(), "User stored");
        self.inner.write().user = Some(user);
    }

    fn logout_user(&self) {
        let mut inner = self.inner.write();
        inner.user = None;
        inner.login_kind = None;
        tracing::info!("User logged out");
    }

    fn login_kind(&self) -> Option<LoginKind> {
        self.inner.read().login_kind
    }

    fn set_login_kind(&self, kind: LoginKind) {
        self.inner.write().login_kind = Some(kind);
    }

    fn update_user(&self, f: &mut dyn FnMut(&mut User)) -> Option<User> {
        let mut inner = self.inner.write();
        let user = inner.user.as_mut()?;
        f(user);
        Some(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SecureString, UserInfo};

    fn sample_user() -> User {
        User {
            user_info: UserInfo {
                id: 7,
                email: "a@b.com".to_string(),
                username: "tester".to_string(),
                club_id: Some(3),
                goal: None,
            },
            token: SecureString::new("tok"),
        }
    }

    #[test]
    fn empty_store_has_anonymous_session() {
        let store = MemoryUserStore::new();
        assert!(store.get_user().is_none());
        assert_eq!(store.session_context(), SessionContext::anonymous());
    }

    #[test]
    fn session_context_uses_stored_user() {
        let store = MemoryUserStore::with_user(sample_user(), LoginKind::Kakao);
        let session = store.session_context();
        assert_eq!(session.user_id, Some(7));
        assert_eq!(session.token.expose(), "tok");
        assert_eq!(store.login_kind(), Some(LoginKind::Kakao));
    }

    #[test]
    fn update_user_modifies_in_place() {
        let store = MemoryUserStore::with_user(sample_user(), LoginKind::Email);
        let updated = store.update_user(&mut |user| user.user_info.club_id = None);
        assert_eq!(updated.unwrap().user_info.club_id, None);
        assert_eq!(store.get_user().unwrap().user_info.club_id, None);
    }

    #[test]
    fn update_user_without_user_is_noop() {
        let store = MemoryUserStore::new();
        let mut called = false;
        assert!(store.update_user(&mut |_| called = true).is_none());
        assert!(!called);
    }

    #[test]
    fn logout_clears_user_and_kind() {
        let store = MemoryUserStore::with_user(sample_user(), LoginKind::Naver);
        let clone = store.clone();
        clone.logout_user();
        assert!(store.get_user().is_none());
        assert!(store.login_kind().is_none());
    }
}
