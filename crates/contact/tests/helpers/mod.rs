#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use meditrace_contact::{
    ContactConfig, EmailTransport, ErrorVerbosity, Gateway, OutboundEmail, TransportError,
};
use serde_json::Value;

pub const API_KEY: &str = "re_test_key";

pub fn config(verbosity: ErrorVerbosity) -> ContactConfig {
    ContactConfig {
        api_key: Some(API_KEY.to_owned()),
        verbosity,
        ..Default::default()
    }
}

#[derive(Clone, Default)]
pub enum Outcome {
    #[default]
    Accept,
    Fail(String),
}

/// In-memory transport that records every delivery attempt.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    calls: Arc<Mutex<Vec<(String, OutboundEmail)>>>,
    outcome: Outcome,
}

impl RecordingTransport {
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Fail(message.into()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, OutboundEmail)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailTransport for RecordingTransport {
    async fn deliver(&self, api_key: &str, email: &OutboundEmail) -> Result<(), TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push((api_key.to_owned(), email.clone()));

        match &self.outcome {
            Outcome::Accept => Ok(()),
            Outcome::Fail(message) => Err(TransportError::Provider(message.to_owned())),
        }
    }
}

pub fn recording_gateway(
    config: ContactConfig,
    transport: RecordingTransport,
) -> Gateway<RecordingTransport> {
    Gateway::with_transport(config, transport)
}

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

/// Stand-in for the Resend API bound to an ephemeral local port.
#[derive(Clone)]
pub struct FakeProvider {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

#[derive(Clone)]
struct ProviderState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
}

impl FakeProvider {
    pub async fn start(status: StatusCode, body: impl Into<String>) -> anyhow::Result<Self> {
        Self::start_with_delay(status, body, None).await
    }

    pub async fn start_with_delay(
        status: StatusCode,
        body: impl Into<String>,
        delay: Option<Duration>,
    ) -> anyhow::Result<Self> {
        let requests = Arc::new(Mutex::new(vec![]));
        let state = ProviderState {
            requests: requests.clone(),
            status,
            body: body.into(),
            delay,
        };

        let app = Router::new()
            .route("/emails", post(emails))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self { addr, requests })
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/emails", self.addr)
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn emails(
    State(state): State<ProviderState>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };

    state.requests.lock().unwrap().push(CapturedRequest {
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}
