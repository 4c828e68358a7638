//! Slack Webhook MCP Library
//!
//! Posts notifications to a Slack incoming webhook, either through the
//! `send-message` MCP tool or directly via [`SlackWebhookClient`].
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use slack_webhook_mcp::{blocks, DeliveryConfig, Message, SlackWebhookClient};
//!
//! let client = SlackWebhookClient::new(DeliveryConfig::new(webhook_url));
//! let message = Message::text("Nightly build failed")
//!     .with_blocks(vec![blocks::header("Nightly build"), blocks::divider()]);
//! let result = client.send_message(&message).await;
//! ```
//!
//! # Configuration
//! Set `SLACK_WEBHOOK_URL`. `SLACK_RETRY_ATTEMPTS` and `SLACK_RETRY_DELAY_MS`
//! override the default retry policy (3 attempts, 1000ms apart).

pub mod blocks;
pub mod client;
pub mod config;
pub mod params;
pub mod server;
pub mod types;

// Re-export main server type
pub use server::SlackWebhookMcpServer;

pub use client::{AttemptError, SlackWebhookClient};
pub use config::{ConfigError, ServerConfig};
pub use params::SendMessageParams;
pub use types::{DeliveryConfig, DeliveryResult, Message, StructuredBlock};
