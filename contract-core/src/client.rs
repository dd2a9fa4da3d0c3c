//! HTTP request context for the service under test.
//!
//! One [`ForecastClient`] is constructed per scenario and never shared
//! across concurrently running checks. It carries no retry, caching, or
//! pooling policy of its own; whatever reqwest does underneath is the
//! whole transport story.

use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::{
    check::CheckError,
    config::SuiteConfig,
    fixtures::FORECAST_PATH,
    model::{ApiErrorBody, ForecastResponse},
    query::ForecastQuery,
};

/// Transport or setup failure. Fatal for the scenario that hit it; never
/// retried.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to construct HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("failed to send forecast request: {0}")]
    Send(#[source] reqwest::Error),

    #[error("failed to read forecast response body: {0}")]
    ReadBody(#[source] reqwest::Error),
}

/// Fresh per-scenario handle for issuing forecast requests.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: Client,
    base_url: String,
}

impl ForecastClient {
    pub fn new(config: &SuiteConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Full URL of the forecast endpoint on the configured host.
    pub fn forecast_url(&self) -> String {
        format!("{}{}", self.base_url, FORECAST_PATH)
    }

    /// Issue one GET and hand back status plus raw body. Interpreting the
    /// body is the caller's job; a 400 here is data, not an error.
    pub async fn get_forecast(&self, query: &ForecastQuery) -> Result<ApiResponse, ClientError> {
        let res = self
            .http
            .get(self.forecast_url())
            .query(query.pairs())
            .send()
            .await
            .map_err(ClientError::Send)?;

        let status = res.status();
        let body = res.text().await.map_err(ClientError::ReadBody)?;

        Ok(ApiResponse { status, body })
    }
}

/// What came back over the wire: status code plus unparsed body text.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn expect_status(&self, expected: StatusCode) -> Result<(), CheckError> {
        if self.status == expected {
            Ok(())
        } else {
            Err(CheckError::Status {
                expected: expected.as_u16(),
                actual: self.status.as_u16(),
                body: truncate_body(&self.body),
            })
        }
    }

    /// Parse the body as a successful forecast payload.
    pub fn forecast(&self) -> Result<ForecastResponse, CheckError> {
        serde_json::from_str(&self.body).map_err(|source| CheckError::Body {
            what: "forecast",
            source,
            body: truncate_body(&self.body),
        })
    }

    /// Parse the body as a validation-error payload.
    pub fn validation_error(&self) -> Result<ApiErrorBody, CheckError> {
        serde_json::from_str(&self.body).map_err(|source| CheckError::Body {
            what: "validation error",
            source,
            body: truncate_body(&self.body),
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
