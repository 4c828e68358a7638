//! Parameter types for Slack webhook MCP tools

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{Message, StructuredBlock};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SendMessageParams {
    #[schemars(
        description = "The main message text (required). Used as fallback when blocks are provided."
    )]
    pub text: String,

    #[schemars(
        description = "Optional Block Kit blocks for rich formatting. Common block types: section (text), header, divider, context."
    )]
    #[serde(default)]
    pub blocks: Option<Vec<StructuredBlock>>,
}

impl From<SendMessageParams> for Message {
    fn from(params: SendMessageParams) -> Self {
        Message {
            text: params.text,
            blocks: params.blocks,
        }
    }
}
