//! Embeddable MCP trait for in-process execution
//!
//! [`EmbeddableMcp`] lets a host call an MCP server's tools directly, without
//! a stdio transport in between. Tests use it to drive a server end to end.
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//! use system_info_mcp::SystemInfoMcpServer;
//!
//! let server = SystemInfoMcpServer::new();
//! let tools = server.list_tools();
//! let result = server.call_tool("get_system_status", serde_json::json!({})).await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

/// Error type for embeddable MCP operations
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// No tool with this name is registered
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// The server failed to produce a result
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
/// Implementations must be `Send + Sync`; tool calls may arrive from several
/// tasks at once.
///
/// Servers built on rmcp's `#[tool_router]` implement `list_tools` by
/// delegating to `tool_router.list_all()` and dispatch `call_tool` by name.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Server name as used in MCP configuration files
    fn server_name(&self) -> &str;

    /// All registered tools with their descriptions and input schemas
    fn list_tools(&self) -> Vec<Tool>;

    /// Execute the tool `name` with JSON `params`
    ///
    /// Fails with [`EmbeddableError::ToolNotFound`] for unknown names and
    /// [`EmbeddableError::McpError`] when no result could be produced. A tool
    /// whose work failed still returns `Ok`, with `is_error` set.
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    /// Optional human-readable description of the server
    fn server_description(&self) -> Option<&str> {
        None
    }

    /// Server version, if available
    fn server_version(&self) -> Option<&str> {
        None
    }
}
