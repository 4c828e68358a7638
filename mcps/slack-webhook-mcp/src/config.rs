//! Server configuration read from the process environment

use std::time::Duration;

use thiserror::Error;

use crate::client::SlackWebhookClient;
use crate::types::{DeliveryConfig, DEFAULT_RETRY_ATTEMPTS, DEFAULT_RETRY_DELAY};

pub const WEBHOOK_URL_VAR: &str = "SLACK_WEBHOOK_URL";
pub const RETRY_ATTEMPTS_VAR: &str = "SLACK_RETRY_ATTEMPTS";
pub const RETRY_DELAY_VAR: &str = "SLACK_RETRY_DELAY_MS";

/// Configuration errors. All of them are fatal at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SLACK_WEBHOOK_URL environment variable is required")]
    MissingWebhookUrl,

    #[error("Invalid SLACK_WEBHOOK_URL format. Expected format: https://hooks.slack.com/services/...")]
    InvalidWebhookUrl,

    #[error("SLACK_RETRY_ATTEMPTS must be an integer >= 1, got '{0}'")]
    InvalidRetryAttempts(String),

    #[error("SLACK_RETRY_DELAY_MS must be a non-negative integer, got '{0}'")]
    InvalidRetryDelay(String),
}

/// Validated settings for the Slack webhook server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub webhook_url: String,
    pub retry_attempts: u32,
    pub retry_delay: Duration,
}

impl ServerConfig {
    /// Read configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let webhook_url = get(WEBHOOK_URL_VAR).ok_or(ConfigError::MissingWebhookUrl)?;
        if !SlackWebhookClient::validate_webhook_url(&webhook_url) {
            return Err(ConfigError::InvalidWebhookUrl);
        }

        let retry_attempts = match get(RETRY_ATTEMPTS_VAR) {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n >= 1 => n,
                _ => return Err(ConfigError::InvalidRetryAttempts(raw)),
            },
            None => DEFAULT_RETRY_ATTEMPTS,
        };

        let retry_delay = match get(RETRY_DELAY_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidRetryDelay(raw))?,
            None => DEFAULT_RETRY_DELAY,
        };

        Ok(Self {
            webhook_url,
            retry_attempts,
            retry_delay,
        })
    }

    pub fn delivery_config(&self) -> DeliveryConfig {
        DeliveryConfig::new(self.webhook_url.clone())
            .with_retry_attempts(self.retry_attempts)
            .with_retry_delay(self.retry_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const VALID_URL: &str = "https://hooks.slack.com/services/T000/B000/XXXX";

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[(WEBHOOK_URL_VAR, VALID_URL)]).unwrap();
        assert_eq!(config.webhook_url, VALID_URL);
        assert_eq!(config.retry_attempts, 3);
        assert_eq!(config.retry_delay, Duration::from_millis(1000));
    }

    #[test]
    fn test_missing_url() {
        assert_eq!(load(&[]), Err(ConfigError::MissingWebhookUrl));
        assert_eq!(
            load(&[(WEBHOOK_URL_VAR, "  ")]),
            Err(ConfigError::MissingWebhookUrl)
        );
    }

    #[test]
    fn test_invalid_url() {
        let err = load(&[(WEBHOOK_URL_VAR, "https://example.com/hook")]).unwrap_err();
        assert_eq!(err, ConfigError::InvalidWebhookUrl);
        assert!(err.to_string().contains("https://hooks.slack.com/services/"));
    }

    #[test]
    fn test_retry_overrides() {
        let config = load(&[
            (WEBHOOK_URL_VAR, VALID_URL),
            (RETRY_ATTEMPTS_VAR, "5"),
            (RETRY_DELAY_VAR, "0"),
        ])
        .unwrap();
        assert_eq!(config.retry_attempts, 5);
        assert_eq!(config.retry_delay, Duration::ZERO);

        let delivery = config.delivery_config();
        assert_eq!(delivery.url, VALID_URL);
        assert_eq!(delivery.retry_attempts, 5);
    }

    #[test]
    fn test_invalid_retry_attempts() {
        for raw in ["0", "-1", "three"] {
            assert_eq!(
                load(&[(WEBHOOK_URL_VAR, VALID_URL), (RETRY_ATTEMPTS_VAR, raw)]),
                Err(ConfigError::InvalidRetryAttempts(raw.to_string()))
            );
        }
    }

    #[test]
    fn test_invalid_retry_delay() {
        assert_eq!(
            load(&[(WEBHOOK_URL_VAR, VALID_URL), (RETRY_DELAY_VAR, "1.5s")]),
            Err(ConfigError::InvalidRetryDelay("1.5s".to_string()))
        );
    }
}
