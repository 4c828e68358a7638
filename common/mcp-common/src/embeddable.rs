//! Embeddable MCP trait for in-process execution
//!
//! This module provides the [`EmbeddableMcp`] trait that allows MCP servers
//! to be executed directly in-process without subprocess spawning or IPC.
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//! use slack_webhook_mcp::SlackWebhookMcpServer;
//!
//! let server = SlackWebhookMcpServer::from_env()?;
//!
//! // List available tools
//! let tools = server.list_tools();
//! println!("Available: {:?}", tools.iter().map(|t| &t.name).collect::<Vec<_>>());
//!
//! // Call a tool directly
//! let result = server
//!     .call_tool("send-message", serde_json::json!({ "text": "Build finished" }))
//!     .await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

/// Error type for embeddable MCP operations
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// Tool was not found in the server
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// MCP protocol error
    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::McpError(err.message.to_string())
    }
}

/// Result type for embeddable MCP operations
pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// Trait for MCP servers that can be executed in-process
///
/// Lets a host call `send-message` on the Slack server without a stdio
/// round trip. `list_tools` comes from the server's `ToolRouter`; `call_tool`
/// dispatches on the tool name and deserializes `params` itself.
///
/// `Send + Sync` so one server can serve concurrent calls.
///
/// ```rust,ignore
/// #[async_trait]
/// impl EmbeddableMcp for MyServer {
///     fn server_name(&self) -> &str {
///         "my-server"
///     }
///
///     fn list_tools(&self) -> Vec<Tool> {
///         self.tool_router.list_all()
///     }
///
///     async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
///         match name {
///             "my-tool" => {
///                 let params: MyParams = serde_json::from_value(params)?;
///                 self.my_tool(Parameters(params)).await.map_err(Into::into)
///             }
///             _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Returns the server name for identification
    ///
    /// This should match the server name used in MCP configuration files.
    fn server_name(&self) -> &str;

    /// Returns a list of all available tools
    ///
    /// Each tool includes its name, description, and input schema.
    fn list_tools(&self) -> Vec<Tool>;

    /// Executes a tool by name with the given parameters
    ///
    /// # Arguments
    ///
    /// * `name` - The tool name as returned by `list_tools`
    /// * `params` - JSON object containing the tool parameters
    ///
    /// # Returns
    ///
    /// Returns the tool result on success, or an error if:
    /// - The tool is not found
    /// - The parameters are invalid
    /// - Tool execution fails
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    /// Returns an optional description of the server
    ///
    /// This is used for documentation and discovery purposes.
    fn server_description(&self) -> Option<&str> {
        None
    }

    /// Returns the server version, if available
    fn server_version(&self) -> Option<&str> {
        None
    }
}
