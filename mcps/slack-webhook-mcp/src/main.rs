//! Slack Webhook MCP Server
//!
//! Exposes a single `send-message` tool that posts to a Slack incoming webhook.
//!
//! # Configuration
//! Set `SLACK_WEBHOOK_URL`. The server refuses to start without a valid one.

use slack_webhook_mcp::SlackWebhookMcpServer;

mcp_common::serve_stdio!(SlackWebhookMcpServer, "slack_webhook_mcp");
