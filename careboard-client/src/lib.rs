//! Data fetch gateway: one authenticated GET against the dashboard endpoint.
//!
//! The endpoint takes no patient-identifying parameter; every logical query
//! (roster, diagnosis list, lab results) is answered by the same payload, so
//! the gateway fetches it once and the dashboard reads patient records out of
//! the already-present roster. Failures are surfaced as typed errors for the
//! UI banner; there is no retry and no re-authentication.

use careboard_api::{parse_payload_str, ApiError, DashboardPayload};
use reqwest::StatusCode;
use tracing::{debug, warn};

/// Endpoint and credential pair of the public demo dataset.
pub const DEMO_ENDPOINT: &str = "https://fedskillstest.coalitiontechnologies.workers.dev";
const DEMO_USERNAME: &str = "coalition";
const DEMO_PASSWORD: &str = "skills-test";

/// Fetch failures, rendered as an inline banner and never fatal.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("fetch failed with HTTP status {0}")]
    Status(StatusCode),
    #[error(transparent)]
    Payload(#[from] ApiError),
}

/// HTTP gateway holding the endpoint and its static Basic-auth credentials.
#[derive(Debug, Clone)]
pub struct Gateway {
    endpoint: String,
    username: String,
    password: String,
    http: reqwest::Client,
}

impl Gateway {
    pub fn new(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            username: username.into(),
            password: password.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Gateway preconfigured for the public demo endpoint.
    pub fn coalition_demo() -> Self {
        Self::new(DEMO_ENDPOINT, DEMO_USERNAME, DEMO_PASSWORD)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Perform the single authenticated GET and parse the payload.
    pub async fn fetch_dashboard(&self) -> Result<DashboardPayload, GatewayError> {
        debug!(endpoint = %self.endpoint, "fetching dashboard payload");

        let response = self
            .http
            .get(&self.endpoint)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "dashboard fetch rejected");
            return Err(GatewayError::Status(status));
        }

        let body = response.text().await?;
        let payload = parse_payload_str(&body)?;
        debug!(
            patients = payload.patients.len(),
            "dashboard payload parsed"
        );
        Ok(payload)
    }
}
