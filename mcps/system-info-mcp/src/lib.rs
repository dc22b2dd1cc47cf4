//! System Info MCP Library
//!
//! Hardware inventory and live system status reports via MCP.
//! Each tool call fans out concurrent fact queries to a [`CapabilityProvider`],
//! normalizes the answers into a report and renders it as fenced JSON.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use system_info_mcp::{Config, SystemInfoMcpServer};
//!
//! let server = SystemInfoMcpServer::with_config(Config::load()?);
//! let report = server.hardware_report().await?;
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `system-info-mcp`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "system-info": { "command": "./system-info-mcp" } } }
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod format;
pub mod info;
pub mod locale;
pub mod report;
pub mod server;
pub mod types;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use error::{ProviderError, ReportError};
pub use info::{CapabilityProvider, SysinfoProvider};
pub use locale::Locale;
pub use report::{HardwareReport, SystemStatusReport};
pub use server::SystemInfoMcpServer;

// Re-export EmbeddableMcp trait for in-process usage
pub use mcp_common::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
