//! Message model and delivery types for the Slack webhook client

use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default number of delivery attempts per message
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;

/// Default fixed delay between delivery attempts
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);

// ============================================================================
// Message Types
// ============================================================================

/// A Block Kit block, passed to Slack untouched
///
/// Only the `type` discriminator is modelled. Every other key is kept in
/// `fields` and serialized back next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StructuredBlock {
    #[serde(rename = "type")]
    #[schemars(description = "Block type, e.g. 'section', 'header', 'divider', 'context'")]
    pub block_type: String,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl StructuredBlock {
    /// Create a block with only a type discriminator
    pub fn new(block_type: impl Into<String>) -> Self {
        Self {
            block_type: block_type.into(),
            fields: Map::new(),
        }
    }

    /// Add a free-form field to the block
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }
}

/// One outbound notification
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Message {
    pub text: String,
    pub blocks: Option<Vec<StructuredBlock>>,
}

impl Message {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            blocks: None,
        }
    }

    pub fn with_blocks(mut self, blocks: Vec<StructuredBlock>) -> Self {
        self.blocks = Some(blocks);
        self
    }
}

/// JSON body POSTed to the webhook
#[derive(Debug, Serialize)]
pub(crate) struct WebhookPayload<'a> {
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<&'a [StructuredBlock]>,
}

impl<'a> From<&'a Message> for WebhookPayload<'a> {
    fn from(message: &'a Message) -> Self {
        Self {
            text: &message.text,
            blocks: message.blocks.as_deref(),
        }
    }
}

// ============================================================================
// Delivery Types
// ============================================================================

/// Destination and retry policy for a [`SlackWebhookClient`](crate::SlackWebhookClient)
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryConfig {
    pub url: String,
    pub retry_attempts: u32,
    pub retry_delay: Duration,
}

impl DeliveryConfig {
    /// Config for `url` with the default retry policy
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    /// Set the retry budget. Values below 1 are raised to 1.
    pub fn with_retry_attempts(mut self, attempts: u32) -> Self {
        self.retry_attempts = attempts.max(1);
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }
}

/// Outcome of a single `send_message` call
///
/// `error` is set if and only if `ok` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryResult {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeliveryResult {
    pub fn success() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
        }
    }
}
