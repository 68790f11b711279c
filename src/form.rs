//! Contact form state as seen by the visitor.
//!
//! A [`ContactForm`] lives for a single request: it is built from the posted
//! fields, driven through [`ContactForm::submit`] and then rendered.

use async_trait::async_trait;
use meditrace_contact::{EmailTransport, Gateway, RETRY_LATER, Submission, SubmissionResult};

pub const THANK_YOU_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Anything able to carry a submission to the gateway.
///
/// `Err` means the call itself broke down, as opposed to a delivered
/// [`SubmissionResult`] reporting failure.
#[async_trait]
pub trait SubmitAction: Send + Sync {
    async fn submit(&self, submission: Submission) -> anyhow::Result<SubmissionResult>;
}

#[async_trait]
impl<T: EmailTransport> SubmitAction for Gateway<T> {
    async fn submit(&self, submission: Submission) -> anyhow::Result<SubmissionResult> {
        Ok(Gateway::submit(self, &submission).await)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusKind {
    #[default]
    None,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub kind: StatusKind,
    pub message: String,
}

impl FormStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.kind != StatusKind::None
    }

    pub fn is_success(&self) -> bool {
        self.kind == StatusKind::Success
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub email: String,
    pub message: String,
    pub status: FormStatus,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitting {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    pub async fn submit<A: SubmitAction + ?Sized>(&mut self, action: &A) {
        self.status = FormStatus::default();
        self.submitting = true;

        let submission = Submission::new(self.email.to_owned(), self.message.to_owned());

        self.status = match action.submit(submission).await {
            Ok(result) if result.success => {
                self.email.clear();
                self.message.clear();

                FormStatus::success(THANK_YOU_MESSAGE)
            }
            Ok(result) => FormStatus::error(
                result
                    .error
                    .filter(|error| !error.is_empty())
                    .unwrap_or_else(|| RETRY_LATER.to_owned()),
            ),
            Err(err) => {
                tracing::error!(error = %err, "Contact form submission failed");

                FormStatus::error(UNEXPECTED_ERROR_MESSAGE)
            }
        };

        self.submitting = false;
    }
}
