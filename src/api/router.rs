//! Endpoint routing: turns a logical API call into a transport request.
//!
//! Building is pure. The same endpoint and session always produce the same
//! request, and nothing is logged here (the request carries the token).

use reqwest::Method;
use serde::Serialize;
use serde_json::{json, Value};

use super::error::RouterError;
use super::models::{CreateClubRequest, SaveGoalRequest, SignUpRequest};
use crate::session::SessionContext;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";
/// Header carrying the session token.
pub const AUTH_HEADER: &str = "X-AUTH";

/// One case per logical API operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    /// Home screen goal update
    SaveGoal(SaveGoalRequest),
    /// Record a finished study session
    PostTime { seconds: u64 },
    GetTodayTime,
    GetClub { club_id: i64 },
    /// Create a club led by the current user
    CreateClub(CreateClubRequest),
    RegisterEmail(SignUpRequest),
}

impl Endpoint {
    /// Stable name for logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::SaveGoal(_) => "save_goal",
            Endpoint::PostTime { .. } => "post_time",
            Endpoint::GetTodayTime => "get_today_time",
            Endpoint::GetClub { .. } => "get_club",
            Endpoint::CreateClub(_) => "create_club",
            Endpoint::RegisterEmail(_) => "register_email",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::SaveGoal(_)
            | Endpoint::PostTime { .. }
            | Endpoint::CreateClub(_)
            | Endpoint::RegisterEmail(_) => Method::POST,
            Endpoint::GetTodayTime | Endpoint::GetClub { .. } => Method::GET,
        }
    }

    /// Resolve the path, substituting the session's user id where needed.
    pub fn path(&self, session: &SessionContext) -> Result<String, RouterError> {
        let user_id = || {
            session.user_id.ok_or(RouterError::MissingUserId {
                endpoint: self.name(),
            })
        };

        Ok(match self {
            Endpoint::SaveGoal(_) => format!("members/goal/{}", user_id()?),
            Endpoint::PostTime { .. } | Endpoint::GetTodayTime => {
                format!("timer/{}", user_id()?)
            }
            Endpoint::GetClub { club_id } => format!("clubs/{}", club_id),
            Endpoint::CreateClub(_) => format!("clubs/{}", user_id()?),
            Endpoint::RegisterEmail(_) => "members/signup".to_string(),
        })
    }

    /// JSON parameters, `None` for endpoints without a body.
    pub fn parameters(&self) -> Result<Option<Value>, RouterError> {
        Ok(match self {
            Endpoint::SaveGoal(request) => Some(serde_json::to_value(request)?),
            Endpoint::PostTime { seconds } => Some(json!({ "time": seconds })),
            Endpoint::CreateClub(request) => Some(serde_json::to_value(request)?),
            Endpoint::RegisterEmail(request) => Some(serde_json::to_value(request)?),
            Endpoint::GetTodayTime | Endpoint::GetClub { .. } => None,
        })
    }
}

/// Transport-level request: method, relative path, headers and JSON body.
#[derive(Clone, PartialEq)]
pub struct BuiltRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Vec<u8>>,
}

impl BuiltRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Decoded body, for inspection and tests.
    pub fn body_json(&self) -> Option<Value> {
        self.body
            .as_deref()
            .and_then(|bytes| serde_json::from_slice(bytes).ok())
    }

    /// Join the relative path onto a base URL.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path)
    }
}

impl std::fmt::Debug for BuiltRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if *name == AUTH_HEADER {
                    (*name, "••••••••")
                } else {
                    (*name, value.as_str())
                }
            })
            .collect();
        f.debug_struct("BuiltRequest")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("headers", &headers)
            .field("body_len", &self.body.as_ref().map(Vec::len))
            .finish()
    }
}

/// Encode any serializable value as a JSON body.
pub fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, RouterError> {
    Ok(serde_json::to_vec(value)?)
}

/// Build the request for `endpoint` with the given session snapshot.
pub fn build(endpoint: &Endpoint, session: &SessionContext) -> Result<BuiltRequest, RouterError> {
    let path = endpoint.path(session)?;
    let body = match endpoint.parameters()? {
        Some(parameters) => Some(encode_json(&parameters)?),
        None => None,
    };

    Ok(BuiltRequest {
        method: endpoint.method(),
        path,
        headers: vec![
            (CONTENT_TYPE, CONTENT_TYPE_JSON.to_string()),
            (AUTH_HEADER, session.token.expose().to_string()),
        ],
        body,
    })
}
