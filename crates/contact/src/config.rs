use std::{fmt, time::Duration};

use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};

use crate::submission::RETRY_LATER;

pub const DEFAULT_ENDPOINT: &str = "https://api.resend.com/emails";
/// Sender, recipient and subject are fixed; only the endpoint and timeout are settings.
pub const DEFAULT_FROM: &str = "Meditrace App <onboarding@resend.dev>";
pub const DEFAULT_TO: &str = "tazigrigolia@gmail.com";
pub const DEFAULT_SUBJECT: &str = "New Contact Form Submission";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// How much of an internal failure is handed back to the visitor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ErrorVerbosity {
    /// Raw error text, for local development.
    Detailed,
    /// Fixed retry-later text.
    #[default]
    Generic,
}

impl ErrorVerbosity {
    pub fn message(self, err: &dyn fmt::Display) -> String {
        match self {
            ErrorVerbosity::Detailed => err.to_string(),
            ErrorVerbosity::Generic => RETRY_LATER.to_owned(),
        }
    }
}

#[derive(Clone, Deserialize)]
pub struct ContactConfig {
    /// Resend API key. Sending is refused while this is unset.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Derived from the deployment environment, never read from the file.
    #[serde(skip)]
    pub verbosity: ErrorVerbosity,
}

impl ContactConfig {
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            verbosity: ErrorVerbosity::default(),
        }
    }
}

impl fmt::Debug for ContactConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactConfig")
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .field("verbosity", &self.verbosity)
            .finish()
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
