//! Session data: the logged-in user, login kind and auth token.
//!
//! The store is passed explicitly into every reactor and into the API
//! client. There is no global session singleton.

mod context;
mod credentials;
mod store;
mod types;

pub use context::SessionContext;
pub use credentials::SecureString;
pub use store::{MemoryUserStore, UserStore};
pub use types::{LoginKind, User, UserInfo};
