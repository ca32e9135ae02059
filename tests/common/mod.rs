//! Shared test utilities and mock ports.

#![allow(dead_code, unused_imports)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use hongik_timer::api::{
    ApiError, ApiService, BuiltRequest, ClubCreated, CreateClubRequest, GetClubResponse,
    HttpResponse, Member, MemberList, SaveGoalRequest, SignUpRequest, TimerResponse, Transport,
    TransportError,
};
use hongik_timer::reactor::{ReactorState, StateStream};
use hongik_timer::services::{AlertRequest, AlertService, AuthCredentials, AuthError, AuthProvider, ServiceProvider};
use hongik_timer::session::{LoginKind, MemoryUserStore, SecureString, User, UserInfo, UserStore};

pub const WAIT: Duration = Duration::from_secs(2);

/// Wait for the next published state.
pub async fn next_state<S>(stream: &mut StateStream<S>) -> S {
    tokio::time::timeout(WAIT, stream.next())
        .await
        .expect("timed out waiting for state")
        .expect("state stream ended")
}

/// Assert nothing else gets published for a short while.
pub async fn assert_quiet<S: std::fmt::Debug>(stream: &mut StateStream<S>) {
    if let Ok(Some(state)) = tokio::time::timeout(Duration::from_millis(50), stream.next()).await {
        panic!("unexpected state published: {:?}", state);
    }
}

pub fn sample_user(id: i64, club_id: Option<i64>) -> User {
    User {
        user_info: UserInfo {
            id,
            email: format!("user{}@hongik.ac.kr", id),
            username: format!("user{}", id),
            club_id,
            goal: None,
        },
        token: SecureString::new(format!("token-{}", id)),
    }
}

pub fn sample_club(id: i64, members: Option<Vec<Member>>) -> GetClubResponse {
    GetClubResponse {
        id,
        club_name: "morning study".to_string(),
        num_of_member: 4,
        club_info: Some("7am daily".to_string()),
        members: members.map(|data| MemberList { data }),
    }
}

pub fn member(id: i64, name: &str) -> Member {
    Member {
        id,
        username: name.to_string(),
        today_time: 0,
        goal: None,
    }
}

fn failure(op: &str) -> ApiError {
    ApiError::Status {
        status: 500,
        message: format!("{} failed", op),
    }
}

/// Scripted [`ApiService`]. Unset answers fail with a 500.
#[derive(Default)]
pub struct MockApi {
    pub club: Mutex<Option<GetClubResponse>>,
    pub created_club: Mutex<Option<i64>>,
    pub today_time: Mutex<Option<u64>>,
    pub save_goal_ok: Mutex<bool>,
    pub registered: Mutex<Option<User>>,
    pub delay: Mutex<Option<Duration>>,
    pub calls: Mutex<Vec<String>>,
    pub created: Mutex<Vec<CreateClubRequest>>,
    pub posted: Mutex<Vec<u64>>,
}

impl MockApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    async fn enter(&self, call: String) {
        self.calls.lock().push(call);
        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl ApiService for MockApi {
    async fn get_club(&self, club_id: i64) -> Result<GetClubResponse, ApiError> {
        self.enter(format!("get_club:{}", club_id)).await;
        self.club.lock().clone().ok_or_else(|| failure("get_club"))
    }

    async fn create_club(&self, request: CreateClubRequest) -> Result<ClubCreated, ApiError> {
        self.enter("create_club".to_string()).await;
        self.created.lock().push(request);
        (*self.created_club.lock())
            .map(|id| ClubCreated { id })
            .ok_or_else(|| failure("create_club"))
    }

    async fn post_time(&self, seconds: u64) -> Result<TimerResponse, ApiError> {
        self.enter(format!("post_time:{}", seconds)).await;
        self.posted.lock().push(seconds);
        let mut today = self.today_time.lock();
        match today.as_mut() {
            Some(total) => {
                *total += seconds;
                Ok(TimerResponse { time: *total })
            }
            None => Err(failure("post_time")),
        }
    }

    async fn get_today_time(&self) -> Result<TimerResponse, ApiError> {
        self.enter("get_today_time".to_string()).await;
        (*self.today_time.lock())
            .map(|time| TimerResponse { time })
            .ok_or_else(|| failure("get_today_time"))
    }

    async fn save_goal(&self, request: SaveGoalRequest) -> Result<(), ApiError> {
        self.enter(format!("save_goal:{}", request.goal)).await;
        if *self.save_goal_ok.lock() {
            Ok(())
        } else {
            Err(failure("save_goal"))
        }
    }

    async fn register_email(&self, request: SignUpRequest) -> Result<User, ApiError> {
        self.enter(format!("register_email:{}", request.email)).await;
        self.registered.lock().clone().ok_or_else(|| failure("register_email"))
    }
}

/// Alert service answering from a queue; an empty queue dismisses.
#[derive(Default)]
pub struct ScriptedAlerts {
    pub answers: Mutex<VecDeque<Option<usize>>>,
    pub shown: Mutex<Vec<AlertRequest>>,
}

impl ScriptedAlerts {
    pub fn answering(answers: Vec<Option<usize>>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            shown: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AlertService for ScriptedAlerts {
    async fn show(&self, request: AlertRequest) -> Option<usize> {
        self.shown.lock().push(request);
        self.answers.lock().pop_front().flatten()
    }
}

pub struct MockAuth {
    pub register_result: Mutex<Result<User, AuthError>>,
    pub logout_result: Mutex<Result<(), AuthError>>,
    pub registered: Mutex<Vec<AuthCredentials>>,
    pub logouts: Mutex<Vec<LoginKind>>,
}

impl Default for MockAuth {
    fn default() -> Self {
        Self {
            register_result: Mutex::new(Err(AuthError::Failed("email already in use".to_string()))),
            logout_result: Mutex::new(Ok(())),
            registered: Mutex::new(Vec::new()),
            logouts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AuthProvider for MockAuth {
    async fn register_with_email(&self, credentials: AuthCredentials) -> Result<User, AuthError> {
        self.registered.lock().push(credentials);
        self.register_result.lock().clone()
    }

    async fn logout(&self, kind: LoginKind) -> Result<(), AuthError> {
        self.logouts.lock().push(kind);
        self.logout_result.lock().clone()
    }
}

/// Transport replaying queued responses and recording what was sent.
#[derive(Default)]
pub struct RecordingTransport {
    pub responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    pub sent: Mutex<Vec<BuiltRequest>>,
}

impl RecordingTransport {
    pub fn replying(responses: Vec<Result<HttpResponse, TransportError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            sent: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: BuiltRequest) -> Result<HttpResponse, TransportError> {
        self.sent.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Connection {
                message: "no scripted response".to_string(),
            }))
    }
}

/// All mocks behind one provider.
pub struct Harness {
    pub api: Arc<MockApi>,
    pub users: MemoryUserStore,
    pub auth: Arc<MockAuth>,
    pub alerts: Arc<ScriptedAlerts>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            api: Arc::new(MockApi::default()),
            users: MemoryUserStore::new(),
            auth: Arc::new(MockAuth::default()),
            alerts: Arc::new(ScriptedAlerts::default()),
        }
    }

    pub fn logged_in(user: User, kind: LoginKind) -> Self {
        let harness = Self::new();
        harness.users.set_user(user);
        harness.users.set_login_kind(kind);
        harness
    }

    pub fn with_alerts(mut self, answers: Vec<Option<usize>>) -> Self {
        self.alerts = Arc::new(ScriptedAlerts::answering(answers));
        self
    }

    pub fn provider(&self) -> ServiceProvider {
        ServiceProvider::new(
            self.api.clone(),
            Arc::new(self.users.clone()),
            self.auth.clone(),
            self.alerts.clone(),
        )
    }
}
