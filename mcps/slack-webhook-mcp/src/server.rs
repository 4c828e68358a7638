//! MCP Server implementation for Slack webhook delivery

use std::sync::Arc;

use mcp_common::{
    async_trait, text_error, text_success, EmbeddableError, EmbeddableMcp, EmbeddableResult,
    McpError,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Implementation, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};
use serde_json::Value;

use crate::client::SlackWebhookClient;
use crate::config::{ConfigError, ServerConfig};
use crate::params::SendMessageParams;
use crate::types::Message;

/// Name the server reports to MCP clients
pub const SERVER_NAME: &str = "mcp-slack-webhook";

/// The Slack webhook MCP Server
#[derive(Clone)]
pub struct SlackWebhookMcpServer {
    client: Arc<SlackWebhookClient>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl SlackWebhookMcpServer {
    /// Create a server from `SLACK_WEBHOOK_URL` and the optional retry variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = ServerConfig::from_env()?;
        Ok(Self::with_config(&config))
    }

    pub fn with_config(config: &ServerConfig) -> Self {
        tracing::info!(
            retry_attempts = config.retry_attempts,
            retry_delay = ?config.retry_delay,
            "Slack webhook configured"
        );
        Self::with_client(SlackWebhookClient::new(config.delivery_config()))
    }

    /// Create a server around an existing client
    pub fn with_client(client: SlackWebhookClient) -> Self {
        Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "send-message",
        description = "Send a message to Slack via webhook. Supports both simple text and rich Block Kit formatting."
    )]
    async fn send_message(
        &self,
        Parameters(params): Parameters<SendMessageParams>,
    ) -> Result<CallToolResult, McpError> {
        let message = Message::from(params);
        let result = self.client.send_message(&message).await;

        if result.ok {
            Ok(text_success("Message sent successfully to Slack"))
        } else {
            let error = result.error.unwrap_or_else(|| "unknown error".to_string());
            tracing::warn!(error = %error, "send-message failed");
            Ok(text_error(format!("Failed to send message: {}", error)))
        }
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for SlackWebhookMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Slack webhook MCP server. Use send-message to post a notification, \
                 optionally with Block Kit blocks. The destination is fixed by the \
                 SLACK_WEBHOOK_URL environment variable."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for SlackWebhookMcpServer {
    fn server_name(&self) -> &str {
        SERVER_NAME
    }

    fn server_description(&self) -> Option<&str> {
        Some("Posts messages to a Slack incoming webhook with bounded retries.")
    }

    fn server_version(&self) -> Option<&str> {
        Some(env!("CARGO_PKG_VERSION"))
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "send-message" => {
                let params: SendMessageParams = serde_json::from_value(params)?;
                self.send_message(Parameters(params)).await.map_err(Into::into)
            }
            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DeliveryConfig;
    use rmcp::model::RawContent;
    use std::time::Duration;

    const HOOK_PATH: &str = "/services/T000/B000/XXXX";

    fn server_for(server: &mockito::Server, attempts: u32) -> SlackWebhookMcpServer {
        let config = DeliveryConfig::new(format!("{}{}", server.url(), HOOK_PATH))
            .with_retry_attempts(attempts)
            .with_retry_delay(Duration::ZERO);
        SlackWebhookMcpServer::with_client(SlackWebhookClient::new(config))
    }

    fn first_text(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_embeddable_list_tools() {
        let mock_server = mockito::Server::new_async().await;
        let server = server_for(&mock_server, 1);

        let tools = server.list_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name.as_ref(), "send-message");
        assert_eq!(server.server_name(), SERVER_NAME);
    }

    #[tokio::test]
    async fn test_send_message_success() {
        let mut mock_server = mockito::Server::new_async().await;
        let mock = mock_server
            .mock("POST", HOOK_PATH)
            .with_status(200)
            .expect(1)
            .create_async()
            .await;

        let server = server_for(&mock_server, 3);
        let result = server
            .call_tool("send-message", serde_json::json!({ "text": "deploy done" }))
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(first_text(&result), "Message sent successfully to Slack");
    }

    #[tokio::test]
    async fn test_send_message_failure_is_flagged() {
        let mut mock_server = mockito::Server::new_async().await;
        let mock = mock_server
            .mock("POST", HOOK_PATH)
            .with_status(403)
            .with_body("invalid_token")
            .expect(2)
            .create_async()
            .await;

        let server = server_for(&mock_server, 2);
        let result = server
            .call_tool(
                "send-message",
                serde_json::json!({ "text": "hi", "blocks": [{ "type": "divider" }] }),
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            first_text(&result),
            "Failed to send message: Failed to send message after 2 attempts: HTTP 403: invalid_token"
        );
    }

    #[tokio::test]
    async fn test_invalid_params() {
        let mock_server = mockito::Server::new_async().await;
        let server = server_for(&mock_server, 1);

        let result = server
            .call_tool("send-message", serde_json::json!({ "blocks": [] }))
            .await;
        assert!(matches!(result, Err(EmbeddableError::SerdeError(_))));

        let result = server
            .call_tool(
                "send-message",
                serde_json::json!({ "text": "x", "blocks": [{ "text": "untyped" }] }),
            )
            .await;
        assert!(matches!(result, Err(EmbeddableError::SerdeError(_))));
    }

    #[tokio::test]
    async fn test_embeddable_unknown_tool() {
        let mock_server = mockito::Server::new_async().await;
        let server = server_for(&mock_server, 1);

        let result = server.call_tool("send_slack", serde_json::json!({})).await;
        assert!(matches!(result, Err(EmbeddableError::ToolNotFound(_))));
    }

    #[test]
    fn test_with_config() {
        let config = ServerConfig::from_lookup(|key| match key {
            "SLACK_WEBHOOK_URL" => Some("https://hooks.slack.com/services/T000/B000/XXXX".into()),
            "SLACK_RETRY_DELAY_MS" => Some("250".into()),
            _ => None,
        })
        .unwrap();

        let server = SlackWebhookMcpServer::with_config(&config);
        let delivery = server.client.config();
        assert_eq!(delivery.url, config.webhook_url);
        assert_eq!(delivery.retry_attempts, 3);
        assert_eq!(delivery.retry_delay, Duration::from_millis(250));
    }

    #[tokio::test]
    async fn test_server_info() {
        let mock_server = mockito::Server::new_async().await;
        let info = rmcp::ServerHandler::get_info(&server_for(&mock_server, 1));

        assert_eq!(info.server_info.name, SERVER_NAME);
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("SLACK_WEBHOOK_URL"));
    }
}
