//! Server initialization utilities
//!
//! Standardized tracing setup shared by the MCP server binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging for an MCP server
///
/// Everything goes to stderr; stdout is reserved for the MCP stdio framing.
///
/// - `RUST_LOG` filtering, with `<crate_name>=info` added as a default directive
/// - no ANSI colors, so captured logs stay readable
/// - `LOG_FORMAT=json` switches to structured JSON lines
///
/// # Example
///
/// ```rust,ignore
/// mcp_common::init_tracing("system_info_mcp")?;
/// ```
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let directive = format!("{}=info", crate_name);
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
