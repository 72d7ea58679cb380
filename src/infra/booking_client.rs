//! Sends booking requests to the dispatch intake endpoint.

use reqwest::{Client, Url};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::BookingRequest;
use crate::util::version::user_agent;

#[derive(Debug, Error)]
pub enum BookingClientError {
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Clone, Debug)]
pub struct BookingClient {
    http: Client,
    endpoint: Url,
}

impl BookingClient {
    pub fn new(endpoint: Url) -> Result<Self, BookingClientError> {
        let http = Client::builder().user_agent(user_agent()).build()?;
        Ok(Self { http, endpoint })
    }

    /// Posts the request as JSON. Any transport or HTTP status failure is an error.
    pub async fn submit(&self, request: &BookingRequest) -> Result<(), BookingClientError> {
        info!(
            "Submitting booking {} ({} service) to {}",
            request.request_id,
            request.fields.service_mode.value(),
            self.endpoint
        );

        let result = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .and_then(|response| response.error_for_status());

        match result {
            Ok(response) => {
                info!(
                    "Booking {} accepted with status {}",
                    request.request_id,
                    response.status()
                );
                Ok(())
            }
            Err(err) => {
                warn!("Booking {} failed: {err}", request.request_id);
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookingDraft;

    fn request() -> BookingRequest {
        BookingDraft {
            full_name: "John Doe".into(),
            phone: "(512) 555-0123".into(),
            email: "dispatch@company.com".into(),
            pickup_address: "100 Congress Ave, Austin, 78701".into(),
            delivery_address: "901 Bagby St, Houston, 77002".into(),
            item_description: "Sealed court filings".into(),
            ..BookingDraft::default()
        }
        .into_request()
        .unwrap()
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_an_http_error() {
        let endpoint = Url::parse("http://127.0.0.1:9/intake").unwrap();
        let client = BookingClient::new(endpoint).unwrap();
        let err = client.submit(&request()).await.unwrap_err();
        assert!(matches!(err, BookingClientError::Http(_)));
    }
}
