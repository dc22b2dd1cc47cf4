//! MCP Common - Shared utilities for MCP servers
//!
//! - **Initialization**: [`init_tracing`] sets up stderr logging (stdout belongs to the protocol)
//! - **Results**: helpers for building `CallToolResult` text and titled JSON responses
//! - **Errors**: shorthand constructors for MCP error data
//! - **Embeddable**: [`EmbeddableMcp`] trait for in-process execution
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::fenced_json_success;
//!
//! fn my_tool(&self) -> Result<CallToolResult, McpError> {
//!     let report = build_report();
//!     fenced_json_success("My Report", &report)
//! }
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::internal_error;
pub use init::init_tracing;
pub use result::{fenced_json, fenced_json_success, text_success};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
