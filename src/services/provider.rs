use std::sync::Arc;

use super::alert::AlertService;
use super::auth::{AuthProvider, EmailAuthProvider};
use crate::api::{ApiClient, ApiService, ReqwestTransport, TransportError};
use crate::config::ApiConfig;
use crate::session::UserStore;

/// The capability set handed to every screen reactor.
///
/// Cheap to clone; all ports are shared.
#[derive(Clone)]
pub struct ServiceProvider {
    pub api: Arc<dyn ApiService>,
    pub users: Arc<dyn UserStore>,
    pub auth: Arc<dyn AuthProvider>,
    pub alerts: Arc<dyn AlertService>,
}

impl ServiceProvider {
    pub fn new(
        api: Arc<dyn ApiService>,
        users: Arc<dyn UserStore>,
        auth: Arc<dyn AuthProvider>,
        alerts: Arc<dyn AlertService>,
    ) -> Self {
        Self {
            api,
            users,
            auth,
            alerts,
        }
    }

    /// Wire the reqwest transport, the API client and email auth.
    ///
    /// Dialogs are presentation concerns, so the alert service is supplied
    /// by the caller.
    pub fn from_config(
        config: &ApiConfig,
        users: Arc<dyn UserStore>,
        alerts: Arc<dyn AlertService>,
    ) -> Result<Self, TransportError> {
        let transport = Arc::new(ReqwestTransport::new(config)?);
        let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(transport, Arc::clone(&users)));
        let auth = Arc::new(EmailAuthProvider::new(Arc::clone(&api)));
        Ok(Self::new(api, users, auth, alerts))
    }
}
