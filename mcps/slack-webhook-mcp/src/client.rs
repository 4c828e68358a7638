//! Slack incoming-webhook client
//!
//! Delivers one [`Message`] per call with a bounded, fixed-delay retry loop.
//! Delivery failures never escape as errors: they are folded into the
//! returned [`DeliveryResult`].
//!
//! # Example
//!
//! ```rust,ignore
//! use slack_webhook_mcp::{DeliveryConfig, Message, SlackWebhookClient};
//!
//! let client = SlackWebhookClient::new(DeliveryConfig::new(url));
//! let result = client.send_message(&Message::text("Build finished")).await;
//! assert!(result.ok);
//! ```

use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

use crate::types::{DeliveryConfig, DeliveryResult, Message, WebhookPayload};

/// Host every Slack incoming webhook lives on
pub const WEBHOOK_HOST: &str = "hooks.slack.com";

/// Path prefix of Slack incoming webhooks
pub const WEBHOOK_PATH_PREFIX: &str = "/services/";

/// Why a single delivery attempt failed
#[derive(Error, Debug)]
pub enum AttemptError {
    /// The request never produced a response
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Slack answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// Client for a single Slack incoming webhook
#[derive(Debug, Clone)]
pub struct SlackWebhookClient {
    config: DeliveryConfig,
    http_client: reqwest::Client,
}

impl SlackWebhookClient {
    pub fn new(config: DeliveryConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a client that shares an existing connection pool
    pub fn with_http_client(config: DeliveryConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    pub fn config(&self) -> &DeliveryConfig {
        &self.config
    }

    /// Check that `url` looks like a Slack incoming webhook
    ///
    /// True only for absolute URLs on [`WEBHOOK_HOST`] whose path starts with
    /// [`WEBHOOK_PATH_PREFIX`]. Unparseable input yields false.
    pub fn validate_webhook_url(url: &str) -> bool {
        match Url::parse(url) {
            Ok(parsed) => {
                parsed.host_str() == Some(WEBHOOK_HOST)
                    && parsed.path().starts_with(WEBHOOK_PATH_PREFIX)
            }
            Err(_) => false,
        }
    }

    /// Send `message`, retrying failed attempts up to the configured budget
    #[instrument(skip_all, fields(attempts = self.config.retry_attempts))]
    pub async fn send_message(&self, message: &Message) -> DeliveryResult {
        let payload = WebhookPayload::from(message);
        self.send_with_retry(&payload).await
    }

    async fn send_with_retry(&self, payload: &WebhookPayload<'_>) -> DeliveryResult {
        let max_attempts = self.config.retry_attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.send_once(payload).await {
                Ok(()) => {
                    info!(attempt, "message delivered");
                    return DeliveryResult::success();
                }
                Err(e) if attempt < max_attempts => {
                    warn!(
                        "attempt {}/{} failed ({}), retrying in {}ms",
                        attempt,
                        max_attempts,
                        e,
                        self.config.retry_delay.as_millis()
                    );
                    tokio::time::sleep(self.config.retry_delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    error!(attempt, error = %e, "giving up on message delivery");
                    return DeliveryResult::failure(format!(
                        "Failed to send message after {} attempts: {}",
                        max_attempts, e
                    ));
                }
            }
        }
    }

    async fn send_once(&self, payload: &WebhookPayload<'_>) -> Result<(), AttemptError> {
        debug!("posting to webhook");

        let response = self
            .http_client
            .post(&self.config.url)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(AttemptError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
