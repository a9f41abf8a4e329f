//! Shared HTTP plumbing
//!
//! One `reqwest::Client` per `ApiClient`, cloned into each adapter. The
//! client attaches the stored bearer token, maps non-2xx responses to
//! [`TransportError::Api`] (401 to `Unauthorized`), and parses the
//! backend's `{"detail": ...}` error body into the human-readable detail.
//! The configured request timeout is the only timeout in the system; no
//! call retries automatically.

use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use core_kernel::TransportError;
use domain_session::{SessionError, SessionStore};

use crate::config::ApiConfig;

/// Shared transport state for all backend adapters
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Builds the underlying HTTP client with the configured timeout
    pub fn new(config: &ApiConfig, session: SessionStore) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TransportError::network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// The session store backing this client
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path))
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.http.put(self.url(path))
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.http.delete(self.url(path))
    }

    /// Attaches the stored bearer token when one is present
    pub fn authorize(&self, builder: RequestBuilder) -> Result<RequestBuilder, TransportError> {
        match self.session.token().map_err(store_error)? {
            Some(token) => Ok(builder.bearer_auth(token)),
            None => Ok(builder),
        }
    }

    /// Attaches the stored bearer token, failing when none is stored
    ///
    /// Used for endpoints that are meaningless without a session, so the
    /// missing-session case surfaces before any network traffic.
    pub fn authorize_required(
        &self,
        builder: RequestBuilder,
    ) -> Result<RequestBuilder, TransportError> {
        match self.session.token().map_err(store_error)? {
            Some(token) => Ok(builder.bearer_auth(token)),
            None => Err(TransportError::MissingSession),
        }
    }

    /// Sends the request and decodes a JSON body
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, TransportError> {
        let response = builder.send().await.map_err(from_reqwest)?;
        let response = check_status(response).await?;
        response.json().await.map_err(from_reqwest)
    }

    /// Sends the request, expecting a bodyless success (204)
    pub async fn send_no_content(&self, builder: RequestBuilder) -> Result<(), TransportError> {
        let response = builder.send().await.map_err(from_reqwest)?;
        check_status(response).await?;
        Ok(())
    }
}

/// Converts a session-store failure into the transport taxonomy
pub(crate) fn store_error(error: SessionError) -> TransportError {
    TransportError::storage(error.to_string())
}

async fn check_status(response: Response) -> Result<Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    debug!(status = status.as_u16(), "backend returned an error");
    if status == StatusCode::UNAUTHORIZED {
        return Err(TransportError::Unauthorized);
    }
    Err(api_error(status.as_u16(), &body))
}

/// Builds an `Api` error from a failure response body
///
/// The backend wraps error messages as `{"detail": ...}`; anything else is
/// carried through verbatim so the caller still sees what happened.
pub(crate) fn api_error(status: u16, body: &str) -> TransportError {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: Option<serde_json::Value>,
    }

    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail)
        .map(|value| match value {
            serde_json::Value::String(text) => text,
            other => other.to_string(),
        })
        .unwrap_or_else(|| body.trim().to_string());
    TransportError::api(status, detail)
}

pub(crate) fn from_reqwest(error: reqwest::Error) -> TransportError {
    if error.is_decode() {
        TransportError::decode(error.to_string())
    } else {
        TransportError::network(error.to_string())
    }
}
