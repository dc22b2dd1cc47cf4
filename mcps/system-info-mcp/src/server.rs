//! MCP Server implementation for system information reports

use std::sync::Arc;

use chrono::Local;
use mcp_common::{async_trait, EmbeddableError, EmbeddableMcp, EmbeddableResult, McpError};
use rmcp::{
    handler::server::router::tool::ToolRouter,
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::aggregate::{gather_hardware, gather_status};
use crate::config::Config;
use crate::error::ReportError;
use crate::format::render_report;
use crate::info::{CapabilityProvider, SysinfoProvider};
use crate::locale::Locale;
use crate::report::{normalize_hardware, normalize_status, HardwareReport, SystemStatusReport};

const SERVER_NAME: &str = "system-info-tool";

const INSTRUCTIONS: &str = "System Information MCP Server - provides a hardware inventory \
     (CPU, memory, graphics, storage, battery, serial numbers) and a live system status \
     snapshot (operating system, CPU and memory usage, network interfaces).";

/// The main System Info MCP Server
///
/// Holds no facts between calls; every tool call takes a fresh snapshot.
#[derive(Clone)]
pub struct SystemInfoMcpServer {
    provider: Arc<dyn CapabilityProvider>,
    config: Config,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl SystemInfoMcpServer {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_provider(Arc::new(SysinfoProvider::new()), config)
    }

    pub fn with_provider(provider: Arc<dyn CapabilityProvider>, config: Config) -> Self {
        Self {
            provider,
            config,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Get complete hardware information (CPU, memory, storage, graphics, battery, serial numbers)"
    )]
    async fn get_hardware_info(&self) -> Result<CallToolResult, McpError> {
        let labels = self.locale().labels();
        match self.hardware_report().await {
            Ok(report) => render_report(labels.hardware_title, &report, self.locale()),
            Err(e) => Ok(report_failure(labels.hardware_error, e)),
        }
    }

    #[tool(
        description = "Get system status information (operating system, network interfaces, CPU and memory usage)"
    )]
    async fn get_system_status(&self) -> Result<CallToolResult, McpError> {
        let labels = self.locale().labels();
        match self.system_status_report().await {
            Ok(report) => render_report(labels.status_title, &report, self.locale()),
            Err(e) => Ok(report_failure(labels.status_error, e)),
        }
    }
}

// ============================================================================
// Report Generation
// ============================================================================

impl SystemInfoMcpServer {
    pub fn locale(&self) -> Locale {
        self.config.report.locale
    }

    /// Gather and normalize a hardware inventory snapshot
    pub async fn hardware_report(&self) -> Result<HardwareReport, ReportError> {
        debug!("Gathering hardware facts");
        let limit = self.config.report.provider_timeout();
        let facts = gather_hardware(self.provider.as_ref(), limit).await?;
        Ok(normalize_hardware(&facts, self.locale().labels()))
    }

    /// Gather and normalize a system status snapshot
    pub async fn system_status_report(&self) -> Result<SystemStatusReport, ReportError> {
        debug!("Gathering system status facts");
        let limit = self.config.report.provider_timeout();
        let facts = gather_status(self.provider.as_ref(), limit).await?;
        let now = Local::now();
        Ok(normalize_status(&facts, self.locale().labels(), &now))
    }
}

/// "<prefix>: <cause>" as an error result
fn report_failure(prefix: &str, err: ReportError) -> CallToolResult {
    warn!(kind = err.kind(), error = %err, "{}", prefix);
    CallToolResult::error(vec![Content::text(format!("{}: {}", prefix, err))])
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for SystemInfoMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

impl Default for SystemInfoMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for SystemInfoMcpServer {
    fn server_name(&self) -> &str {
        "system-info"
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn server_version(&self) -> Option<&str> {
        Some(env!("CARGO_PKG_VERSION"))
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, _params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "get_hardware_info" => self.get_hardware_info().await.map_err(Into::into),
            "get_system_status" => self.get_system_status().await.map_err(Into::into),
            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}
