use std::sync::Arc;

use tracing::{error, info};

use crate::{
    ContactConfig, DEFAULT_FROM, DEFAULT_SUBJECT, DEFAULT_TO, EmailTransport, OutboundEmail,
    ResendTransport, TransportError,
    submission::{CONFIGURATION_ERROR, MISSING_FIELDS, Submission, SubmissionResult},
};

/// Relays contact form submissions to the site owner's inbox.
///
/// Every outcome is reported as a [`SubmissionResult`]; nothing escapes as an
/// error. Provider and transport failures are logged in full and then reduced
/// according to [`ContactConfig::verbosity`].
#[derive(Clone)]
pub struct Gateway<T = ResendTransport> {
    config: Arc<ContactConfig>,
    transport: T,
}

impl Gateway<ResendTransport> {
    pub fn new(config: ContactConfig) -> Result<Self, TransportError> {
        let transport = ResendTransport::new(&config.endpoint, config.timeout())?;

        Ok(Self::with_transport(config, transport))
    }
}

impl<T: EmailTransport> Gateway<T> {
    pub fn with_transport(config: ContactConfig, transport: T) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ContactConfig {
        &self.config
    }

    pub fn compose(&self, submission: &Submission) -> OutboundEmail {
        OutboundEmail {
            from: DEFAULT_FROM.to_owned(),
            to: DEFAULT_TO.to_owned(),
            subject: DEFAULT_SUBJECT.to_owned(),
            text: submission.body(),
            reply_to: submission.email.to_owned(),
        }
    }

    pub async fn send(&self, email: &str, message: &str) -> SubmissionResult {
        self.submit(&Submission::new(email, message)).await
    }

    pub async fn submit(&self, submission: &Submission) -> SubmissionResult {
        let Some(api_key) = self.config.api_key() else {
            error!("RESEND_API_KEY is not configured, refusing to send contact email");

            return SubmissionResult::failed(CONFIGURATION_ERROR);
        };

        if !submission.is_complete() {
            return SubmissionResult::failed(MISSING_FIELDS);
        }

        let email = self.compose(submission);

        match self.transport.deliver(api_key, &email).await {
            Ok(()) => {
                info!(to = %email.to, reply_to = %email.reply_to, "Contact email sent");

                SubmissionResult::delivered()
            }
            Err(err) => {
                error!(error = %err, reply_to = %email.reply_to, "Error sending contact email");

                SubmissionResult::failed(self.config.verbosity.message(&err))
            }
        }
    }
}
