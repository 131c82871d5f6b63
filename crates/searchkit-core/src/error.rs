//! Error types and exit codes for searchkit
//!
//! Unreachable goals are not errors: searches report them as `None` or as a
//! `Deepening` variant. Errors cover invalid configuration and the I/O done by
//! the config layer.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid search configuration)
//! - 3: Data error (unreadable or malformed config file)

mod macros;

use thiserror::Error;

/// Exit codes for the searchkit CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args or search configuration (2)
    Usage = 2,
    /// Data error - config file could not be read or parsed (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while configuring or running a search
#[derive(Error, Debug)]
pub enum SearchError {
    // Usage errors (exit code 2)
    #[error("beam width must be at least 1 (got {0})")]
    InvalidBeamWidth(usize),

    #[error("negative edge cost {cost} on {from} -> {to} (path-cost priority requires non-negative weights)")]
    NegativeCost {
        from: String,
        to: String,
        cost: f64,
    },

    #[error("heuristic returned {value} (estimates must be finite and non-negative)")]
    InvalidHeuristic { value: f64 },

    #[error("invalid game tree: {reason}")]
    InvalidTree { reason: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SearchError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        SearchError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed game tree
    pub fn invalid_tree(reason: impl Into<String>) -> Self {
        SearchError::InvalidTree {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SearchError::InvalidBeamWidth(_)
            | SearchError::NegativeCost { .. }
            | SearchError::InvalidHeuristic { .. }
            | SearchError::InvalidTree { .. }
            | SearchError::InvalidValue { .. }
            | SearchError::UsageError(_) => ExitCode::Usage,

            SearchError::Io(_) | SearchError::Toml(_) => ExitCode::Data,

            SearchError::Json(_) | SearchError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            SearchError::InvalidBeamWidth(_) => "invalid_beam_width",
            SearchError::NegativeCost { .. } => "negative_cost",
            SearchError::InvalidHeuristic { .. } => "invalid_heuristic",
            SearchError::InvalidTree { .. } => "invalid_tree",
            SearchError::InvalidValue { .. } => "invalid_value",
            SearchError::UsageError(_) => "usage_error",
            SearchError::Io(_) => "io_error",
            SearchError::Toml(_) => "toml_error",
            SearchError::Json(_) => "json_error",
            SearchError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for searchkit operations
pub type Result<T> = std::result::Result<T, SearchError>;
