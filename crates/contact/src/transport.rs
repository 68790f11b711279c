use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::submission::SEND_FAILED;

/// Request body of the Resend `POST /emails` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub reply_to: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Provider(String),
}

#[async_trait]
pub trait EmailTransport: Send + Sync {
    async fn deliver(&self, api_key: &str, email: &OutboundEmail) -> Result<(), TransportError>;
}

/// Resend client over HTTPS.
#[derive(Clone)]
pub struct ResendTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl ResendTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl EmailTransport for ResendTransport {
    async fn deliver(&self, api_key: &str, email: &OutboundEmail) -> Result<(), TransportError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let data: Value = serde_json::from_slice(&body)?;

        if !status.is_success() {
            error!(%status, response = %data, "Resend API error");

            let message = data
                .get("message")
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty())
                .unwrap_or(SEND_FAILED);

            return Err(TransportError::Provider(message.to_owned()));
        }

        Ok(())
    }
}
