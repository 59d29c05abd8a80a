//! JSON-over-HTTP translation backend.

use crate::config::Config;
use crate::error::{BabelpostError, Result};
use crate::translate::{Backend, TranslationRequest, TranslationResponse};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("babelpost/", env!("CARGO_PKG_VERSION"));

/// Backend that POSTs the request as JSON to a fixed endpoint.
pub struct HttpBackend {
    client: Client,
    endpoint: Url,
}

impl HttpBackend {
    pub fn new(endpoint: Url) -> Result<Self> {
        Self::build(endpoint, None)
    }

    /// Create a backend from a configuration, validating it first.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::build(config.endpoint()?, config.timeout())
    }

    /// Rebuild the client with a per-request timeout.
    pub fn with_timeout(self, timeout: Duration) -> Result<Self> {
        if timeout.is_zero() {
            return Err(BabelpostError::Config(
                "Timeout must be greater than 0".to_string(),
            ));
        }
        Self::build(self.endpoint, Some(timeout))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn build(endpoint: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn send(&self, request: &TranslationRequest) -> Result<TranslationResponse> {
        debug!(
            "POST {} ({} -> {}, {} chars)",
            self.endpoint,
            request.source,
            request.target,
            request.text.chars().count()
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // The body decides the outcome; a translation is used whatever the status.
        let parsed = match serde_json::from_str::<TranslationResponse>(&body) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                return Err(BabelpostError::Status { status, body });
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(ref error) = parsed.error {
            warn!("Backend reported error: {}", error);
        }

        if !status.is_success() {
            if parsed.translated_text().is_none() {
                return Err(BabelpostError::Status { status, body });
            }
            warn!("Backend returned {} with a translation, using it", status);
        }

        Ok(parsed)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
