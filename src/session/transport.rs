//! Transport port and HTTP adapter
//!
//! The dispatcher talks to the server through the [`OfxTransport`] port:
//! one POST of an opaque request body, one opaque response body back.
//! Transport failures propagate to the caller unchanged — no retry, no
//! backoff. Timeout policy belongs to the transport implementation, not to
//! the engine.

use crate::types::OfxError;
use async_trait::async_trait;
use url::Url;

/// Network collaborator consumed by the session dispatcher
#[async_trait]
pub trait OfxTransport: Send + Sync {
    /// Post a serialized request body and return the raw response body
    ///
    /// # Errors
    ///
    /// Returns [`OfxError::Transport`] for connection failures, timeouts,
    /// and non-success HTTP statuses.
    async fn post(&self, endpoint: &Url, body: &str) -> Result<String, OfxError>;
}

/// HTTP transport posting `application/x-ofx` bodies
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with default reqwest settings
    pub fn new() -> Self {
        HttpTransport {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl OfxTransport for HttpTransport {
    async fn post(&self, endpoint: &Url, body: &str) -> Result<String, OfxError> {
        let response = self
            .client
            .post(endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/x-ofx")
            .body(body.to_string())
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}
