//! Submit a contact message to the CMS
//!
//! - state.rs: form values and submission state machine
//! - transport.rs: HTTP seam and response classification
//! - error.rs: failure kinds and their inline messages

pub mod error;
pub mod state;
pub mod transport;

pub use error::{SubmissionError, TransportFailure};
pub use state::{ContactFormMachine, SubmissionState, SubmitRejected, SuccessTicket, SUCCESS_DISPLAY_MS};
pub use transport::{classify_response, ContactTransport, TransportResponse};

use crate::domain::a001_contact_message::CreateContactMessageRequest;

/// Send one create-record request and classify the answer.
///
/// Issues exactly one call on `transport` unless the body cannot be
/// serialized, in which case nothing is sent.
pub async fn submit_contact_message<T>(
    transport: &T,
    endpoint: &str,
    request: &CreateContactMessageRequest,
) -> Result<(), SubmissionError>
where
    T: ContactTransport + ?Sized,
{
    let body = serde_json::to_string(request)
        .map_err(|e| SubmissionError::Transport(format!("Failed to encode request: {}", e)))?;

    let response = transport.post_json(endpoint, body).await.map_err(|e| {
        log::error!("Network error while sending contact message: {}", e);
        SubmissionError::from(e)
    })?;

    classify_response(&response)
}
