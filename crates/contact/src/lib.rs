//! Contact form relay.
//!
//! Validates a [`Submission`] and forwards it as a single transactional email
//! to the site owner through the Resend HTTP API.

mod config;
mod gateway;
mod submission;
mod transport;

pub use config::*;
pub use gateway::Gateway;
pub use submission::*;
pub use transport::{EmailTransport, OutboundEmail, ResendTransport, TransportError};
