use async_trait::async_trait;

use super::error::{SubmissionError, TransportFailure};
use crate::domain::a001_contact_message::CmsErrorResponse;

/// Status and raw body of whatever the server answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP seam between the form and the CMS.
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait ContactTransport {
    /// POST a JSON document and hand back the response, whatever its status
    async fn post_json(&self, url: &str, body: String)
        -> Result<TransportResponse, TransportFailure>;
}

/// Turn a received response into the outcome of the attempt
pub fn classify_response(response: &TransportResponse) -> Result<(), SubmissionError> {
    if response.is_success() {
        return Ok(());
    }

    log::error!(
        "CMS rejected contact message: {} {}",
        response.status,
        response.body
    );
    Err(SubmissionError::Server {
        status: response.status,
        message: CmsErrorResponse::parse_message(&response.body),
    })
}
