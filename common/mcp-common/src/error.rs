//! Error helpers for MCP tool implementations

use rmcp::ErrorData as McpError;

/// Create an internal error carrying `message` verbatim
///
/// For failures of the server itself, such as a response that cannot be
/// serialized. Failures of the tool's work go back as an error result instead.
///
/// ```rust,ignore
/// use mcp_common::internal_error;
///
/// let err = internal_error(format!("Failed to serialize report: {}", cause));
/// ```
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}
