//! Result helpers for MCP tool responses

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use serde::Serialize;

/// Render `data` as a markdown document: a level-1 `title` heading followed by
/// a fenced `json` block holding the 2-space pretty-printed value.
///
/// Output is a pure function of the input; field order follows serialization
/// order.
///
/// ~~~text
/// # Title
///
/// ```json
/// { ... }
/// ```
/// ~~~
pub fn fenced_json<T: Serialize + ?Sized>(
    title: &str,
    data: &T,
) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string_pretty(data)?;
    Ok(format!("# {}\n\n```json\n{}\n```", title, json))
}

/// Create a successful response holding a single [`fenced_json`] text item
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::fenced_json_success;
///
/// fn my_tool(&self) -> Result<CallToolResult, McpError> {
///     fenced_json_success("Disk Report", &report)
/// }
/// ```
pub fn fenced_json_success<T: Serialize + ?Sized>(
    title: &str,
    data: &T,
) -> Result<CallToolResult, McpError> {
    let text =
        fenced_json(title, data).map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(text_success(text))
}

/// Create a successful plain text response
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}
