//! Tracing setup for the searchkit CLI
//!
//! Searches open one instrumented span per call. Filtering is per crate, so
//! library events can be raised without the CLI's own.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Crates a bare level applies to
const CRATES: [&str; 2] = ["searchkit", "searchkit_core"];

/// Environment variables checked in order; the first valid one wins over flags
const ENV_VARS: [&str; 2] = ["RUST_LOG", "SEARCHKIT_LOG"];

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", expanded = count);
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Filter and output format for the subscriber
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub directive: String,
    pub json: bool,
}

impl LogSettings {
    /// Settings implied by the CLI flags alone. An explicit level beats
    /// `--verbose`; with neither, only warnings are shown.
    pub fn from_args(verbose: bool, log_level: Option<&str>, log_json: bool) -> Self {
        let level = log_level.unwrap_or(if verbose { "debug" } else { "warn" });
        Self {
            directive: level_directive(level),
            json: log_json,
        }
    }

    /// Replace the directive with one from the environment, unless it does
    /// not parse
    fn with_env_override(mut self, env: Option<String>) -> Self {
        if let Some(directive) = env.filter(|d| EnvFilter::try_new(d).is_ok()) {
            self.directive = directive;
        }
        self
    }
}

/// Expand a bare level ("debug") into one directive per crate.
/// Full directive strings ("searchkit_core=trace") pass through unchanged.
fn level_directive(level: &str) -> String {
    if level.contains('=') {
        return level.to_string();
    }
    CRATES
        .iter()
        .map(|krate| format!("{}={}", krate, level))
        .collect::<Vec<_>>()
        .join(",")
}

fn env_directive() -> Option<String> {
    ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings =
        LogSettings::from_args(verbose, log_level, log_json).with_env_override(env_directive());
    install(&settings)
}

fn install(settings: &LogSettings) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_new(&settings.directive)?;

    // Exactly one of these is Some. JSON lines carry a close event per
    // search span so each call's duration is recorded.
    let json = settings.json.then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::CLOSE)
    });
    let compact = (!settings.json).then(|| {
        fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(compact)
        .try_init()?;
    Ok(())
}
