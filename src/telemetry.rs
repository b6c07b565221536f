//! Logging setup and error telemetry
//!
//! Soft failures in the pipeline are handed to an [`ErrorReporter`] and then
//! replaced with defaults. Reporting is fire-and-forget: a reporter must not
//! block and cannot fail the render.

use std::sync::Mutex;

use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Sink for degraded-feature failures
pub trait ErrorReporter: Send + Sync {
    fn report(&self, message: &str, error: &(dyn std::error::Error + 'static));
}

/// Reports through `tracing` at error level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, message: &str, error: &(dyn std::error::Error + 'static)) {
        error!(error = %error, "{}", message);
    }
}

/// A reported failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedError {
    pub message: String,
    pub error: String,
}

/// Keeps every report in memory
#[derive(Debug, Default)]
pub struct RecordingErrorReporter {
    reports: Mutex<Vec<ReportedError>>,
}

impl RecordingErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports received so far
    pub fn reports(&self) -> Vec<ReportedError> {
        self.reports
            .lock()
            .map(|reports| reports.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.reports.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ErrorReporter for RecordingErrorReporter {
    fn report(&self, message: &str, error: &(dyn std::error::Error + 'static)) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.push(ReportedError {
                message: message.to_string(),
                error: error.to_string(),
            });
        }
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `log_level` when set.
pub fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("ayah_widget={},warn", log_level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
