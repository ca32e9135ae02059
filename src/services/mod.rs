//! Collaborator ports injected into screen reactors.

mod alert;
mod auth;
mod provider;

pub use alert::{present, ActionStyle, AlertAction, AlertButton, AlertRequest, AlertService, AlertStyle};
pub use auth::{AuthCredentials, AuthError, AuthProvider, EmailAuthProvider};
pub use provider::ServiceProvider;
