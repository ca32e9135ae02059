//! HTTP transport port and its reqwest adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::TransportError;
use super::router::BuiltRequest;
use crate::config::ApiConfig;

/// Raw response: status code and body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends built requests. Injected into the API client.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: BuiltRequest) -> Result<HttpResponse, TransportError>;
}

/// [`Transport`] over a shared `reqwest::Client`.
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
    request_timeout: Duration,
}

impl ReqwestTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let request_timeout = Duration::from_secs(u64::from(config.timeout_seconds));
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(request_timeout)
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            request_timeout,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: BuiltRequest) -> Result<HttpResponse, TransportError> {
        let url = request.url(&self.base_url);
        let parsed = reqwest::Url::parse(&url).map_err(|e| TransportError::InvalidUrl(format!("{}: {}", url, e)))?;

        let mut builder = self.client.request(request.method.clone(), parsed);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| self.map_error(e))?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| self.map_error(e))?;

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status,
            bytes = body.len(),
            "Response received"
        );

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

impl ReqwestTransport {
    fn map_error(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout {
                duration: self.request_timeout.as_secs(),
            }
        } else {
            TransportError::Connection {
                message: err.to_string(),
            }
        }
    }
}
