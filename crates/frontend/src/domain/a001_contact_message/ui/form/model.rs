use async_trait::async_trait;
use contracts::usecases::u501_submit_contact::{
    ContactTransport, TransportFailure, TransportResponse,
};
use gloo_net::http::Request;

/// `fetch`-backed transport used in the browser
pub struct FetchTransport;

#[async_trait(?Send)]
impl ContactTransport for FetchTransport {
    async fn post_json(
        &self,
        url: &str,
        body: String,
    ) -> Result<TransportResponse, TransportFailure> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(body)
            .map_err(|e| TransportFailure(format!("Failed to create request: {}", e)))?
            .send()
            .await
            .map_err(|e| TransportFailure(format!("Fetch failed: {}", e)))?;

        let status = response.status();
        let body = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                log::debug!("Failed to read response body ({}): {}", status, e);
                String::new()
            }
        };

        Ok(TransportResponse { status, body })
    }
}
