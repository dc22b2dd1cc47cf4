//! Error types for fact collection and report generation

use std::time::Duration;
use thiserror::Error;

/// A single capability provider query failed
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Reading a platform source (procfs, sysfs, ...) failed
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The platform cannot answer this query at all
    #[error("not supported on this platform: {0}")]
    Unsupported(String),

    /// The blocking probe task panicked or was cancelled
    #[error("probe task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("{0}")]
    Other(String),
}

impl ProviderError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        ProviderError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Report generation failed; no partial report is produced
#[derive(Debug, Error)]
pub enum ReportError {
    /// One of the concurrent queries failed; the first failure observed wins
    #[error("{query} query failed: {source}")]
    ProviderQueryFailed {
        query: &'static str,
        #[source]
        source: ProviderError,
    },

    /// The batch of queries did not settle in time
    #[error("system information queries timed out after {}ms", .after.as_millis())]
    ProviderTimeout { after: Duration },
}

impl ReportError {
    /// Short machine-readable failure kind, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            ReportError::ProviderQueryFailed { .. } => "provider_query_failed",
            ReportError::ProviderTimeout { .. } => "provider_timeout",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_failed_display_names_query() {
        let err = ReportError::ProviderQueryFailed {
            query: "battery",
            source: ProviderError::Other("power supply class missing".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "battery query failed: power supply class missing"
        );
        assert_eq!(err.kind(), "provider_query_failed");
    }

    #[test]
    fn test_timeout_display() {
        let err = ReportError::ProviderTimeout {
            after: Duration::from_millis(1500),
        };
        assert_eq!(
            err.to_string(),
            "system information queries timed out after 1500ms"
        );
        assert_eq!(err.kind(), "provider_timeout");
    }

    #[test]
    fn test_io_error_display_includes_path() {
        let err = ProviderError::io(
            "/proc/stat",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.to_string(), "/proc/stat: missing");
    }
}
