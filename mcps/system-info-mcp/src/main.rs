//! System Info MCP Server
//!
//! Hardware inventory and live system status over MCP stdio.
//!
//! # Configuration
//! Set `SYSTEM_INFO_LOCALE` / `SYSTEM_INFO_TIMEOUT_MS` or configure in
//! `~/.binks/system-info.toml`

use anyhow::Context;
use rmcp::{transport::stdio, ServiceExt};

use system_info_mcp::{Config, SystemInfoMcpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mcp_common::init_tracing("system_info_mcp")?;

    tracing::info!("Starting System Information MCP Server");

    let config = Config::load().context("Failed to start server")?;
    tracing::info!(
        locale = %config.report.locale,
        timeout_ms = config.report.provider_timeout_ms,
        "Configuration loaded"
    );

    let server = SystemInfoMcpServer::with_config(config);
    let transport = stdio();
    tracing::info!("System Information MCP Server started...");

    let service = server
        .serve(transport)
        .await
        .context("Failed to start server")?;

    tracing::info!("Client connected, waiting for requests...");
    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
