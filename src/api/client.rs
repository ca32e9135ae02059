//! The API service consumed by screen reactors.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::models::{
    ClubCreated, CreateClubRequest, GetClubResponse, SaveGoalRequest, SignUpRequest,
    TimerResponse,
};
use super::router::{self, Endpoint};
use super::transport::{HttpResponse, Transport};
use crate::session::{User, UserStore};

/// Typed API operations. Every call resolves to a success value or an
/// [`ApiError`]; nothing panics on bad server data.
#[async_trait]
pub trait ApiService: Send + Sync {
    async fn get_club(&self, club_id: i64) -> Result<GetClubResponse, ApiError>;

    async fn create_club(&self, request: CreateClubRequest) -> Result<ClubCreated, ApiError>;

    /// Record `seconds` of study; returns today's new total.
    async fn post_time(&self, seconds: u64) -> Result<TimerResponse, ApiError>;

    async fn get_today_time(&self) -> Result<TimerResponse, ApiError>;

    async fn save_goal(&self, request: SaveGoalRequest) -> Result<(), ApiError>;

    async fn register_email(&self, request: SignUpRequest) -> Result<User, ApiError>;
}

/// [`ApiService`] that routes endpoints and sends them over a [`Transport`].
///
/// The session snapshot is taken from the user store on every call.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    users: Arc<dyn UserStore>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, users: Arc<dyn UserStore>) -> Self {
        Self { transport, users }
    }

    async fn send(&self, endpoint: Endpoint) -> Result<HttpResponse, ApiError> {
        let session = self.users.session_context();
        let request = router::build(&endpoint, &session)?;

        tracing::debug!(
            endpoint = endpoint.name(),
            method = %request.method,
            path = %request.path,
            "Sending request"
        );

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            tracing::warn!(
                endpoint = endpoint.name(),
                status = response.status,
                "Request failed"
            );
            return Err(ApiError::Status {
                status: response.status,
                message: response.text(),
            });
        }
        Ok(response)
    }

    async fn call<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiError> {
        let response = self.send(endpoint).await?;
        response.json().map_err(ApiError::Decode)
    }
}

#[async_trait]
impl ApiService for ApiClient {
    async fn get_club(&self, club_id: i64) -> Result<GetClubResponse, ApiError> {
        self.call(Endpoint::GetClub { club_id }).await
    }

    async fn create_club(&self, request: CreateClubRequest) -> Result<ClubCreated, ApiError> {
        self.call(Endpoint::CreateClub(request)).await
    }

    async fn post_time(&self, seconds: u64) -> Result<TimerResponse, ApiError> {
        self.call(Endpoint::PostTime { seconds }).await
    }

    async fn get_today_time(&self) -> Result<TimerResponse, ApiError> {
        self.call(Endpoint::GetTodayTime).await
    }

    async fn save_goal(&self, request: SaveGoalRequest) -> Result<(), ApiError> {
        self.send(Endpoint::SaveGoal(request)).await.map(|_| ())
    }

    async fn register_email(&self, request: SignUpRequest) -> Result<User, ApiError> {
        self.call(Endpoint::RegisterEmail(request)).await
    }
}
