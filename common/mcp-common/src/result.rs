//! Result helpers for MCP tool responses
//!
//! Tool-level failures are reported as an error-flagged `CallToolResult`
//! rather than a protocol error, so the host can tell "the tool ran and the
//! operation failed" apart from "the call itself was malformed".

use rmcp::model::{CallToolResult, Content};

/// Create a successful plain text response
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::text_success;
///
/// fn my_tool(&self) -> Result<CallToolResult, McpError> {
///     Ok(text_success("Operation completed successfully"))
/// }
/// ```
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Create an error-flagged plain text response (`is_error = true`)
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::text_error;
///
/// fn my_tool(&self) -> Result<CallToolResult, McpError> {
///     Ok(text_error(format!("Failed to send message: {}", reason)))
/// }
/// ```
pub fn text_error(text: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(text.into())])
}
