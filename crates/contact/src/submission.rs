use serde::{Deserialize, Serialize};

pub const MISSING_FIELDS: &str = "Missing required fields";
pub const CONFIGURATION_ERROR: &str = "Server configuration error. Please contact support.";
pub const SEND_FAILED: &str = "Failed to send email";
pub const RETRY_LATER: &str = "Failed to send message. Please try again later.";

/// One contact form attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl Submission {
    pub fn new(email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.message.is_empty()
    }

    pub(crate) fn body(&self) -> String {
        format!("New message from {}:\n\n{}", self.email, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResult {
    pub fn delivered() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}
