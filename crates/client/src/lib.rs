//! HTTP client for the lead API.
//!
//! Wraps `POST /api/leads`, `GET /api/leads` and `GET /api/leads/{id}` using
//! [`reqwest`]. [`LeadApiClient`] also implements
//! [`LeadSubmitter`](automind_core::wizard::session::LeadSubmitter), so a
//! wizard session can submit straight to a running server.

use async_trait::async_trait;
use automind_core::lead::{Lead, NewLead};
use automind_core::validation::FieldViolation;
use automind_core::wizard::session::LeadSubmitter;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Errors from the lead API client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The base URL is not an absolute `http(s)` URL.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The API answered with a non-2xx status.
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        /// Field violations, present on validation failures.
        errors: Vec<FieldViolation>,
    },
}

/// Error body returned by the API on any non-2xx response.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    errors: Vec<FieldViolation>,
}

/// HTTP client for one lead API server.
#[derive(Debug, Clone)]
pub struct LeadApiClient {
    client: reqwest::Client,
    base_url: reqwest::Url,
}

impl LeadApiClient {
    /// * `base_url` - Server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ClientError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] (shared connection pool).
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl AsRef<str>,
    ) -> Result<Self, ClientError> {
        let raw = base_url.as_ref();
        let invalid = |reason: String| ClientError::InvalidBaseUrl {
            url: raw.to_string(),
            reason,
        };

        let base_url = reqwest::Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("not a hierarchical URL".to_string()));
        }
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Submit a lead. Validation failures come back as
    /// [`ClientError::Api`] with status 400 and the violation list.
    pub async fn create_lead(&self, lead: &NewLead) -> Result<Lead, ClientError> {
        let response = self
            .client
            .post(self.endpoint(&["api", "leads"]))
            .json(lead)
            .send()
            .await?;

        let created: Lead = Self::parse_response(response).await?;
        tracing::debug!(lead_id = %created.id, "Lead submitted");
        Ok(created)
    }

    /// Fetch one lead. `Ok(None)` when the server has no lead with this id.
    pub async fn get_lead(&self, id: &str) -> Result<Option<Lead>, ClientError> {
        let response = self
            .client
            .get(self.endpoint(&["api", "leads", id]))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::parse_response(response).await.map(Some)
    }

    /// All leads, newest first.
    pub async fn list_leads(&self) -> Result<Vec<Lead>, ClientError> {
        let response = self
            .client
            .get(self.endpoint(&["api", "leads"]))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Append path segments to the base URL, percent-encoding each one, so
    /// an id containing `/` or `?` stays a single segment.
    fn endpoint(&self, segments: &[&str]) -> reqwest::Url {
        let mut url = self.base_url.clone();
        // Checked in the constructor: the base URL can hold path segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Decode a success body, or turn a failure into [`ClientError::Api`].
    ///
    /// A failure body that is not the API's JSON shape still yields an
    /// `Api` error, with the raw text as the message.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let text = response.text().await.unwrap_or_default();
        let (message, errors) = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => (body.message, body.errors),
            Err(_) if text.is_empty() => (status.to_string(), Vec::new()),
            Err(_) => (text, Vec::new()),
        };

        tracing::warn!(status = status.as_u16(), %message, "Lead API returned an error");
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
            errors,
        })
    }
}

#[async_trait]
impl LeadSubmitter for LeadApiClient {
    type Error = ClientError;

    async fn create_lead(&self, lead: &NewLead) -> Result<Lead, ClientError> {
        LeadApiClient::create_lead(self, lead).await
    }
}
