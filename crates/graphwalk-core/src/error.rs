//! Error types and exit codes for graphwalk
//!
//! The algorithms themselves never fail: a missing vertex resolves to an
//! empty result. These errors cover the surrounding layers (loading input
//! documents, configuration, command-line usage).
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed input, unknown vertex)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input or unknown vertex (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur outside the algorithms proper
#[derive(Error, Debug)]
pub enum GraphwalkError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown traversal order: {0} (expected: dfs, dfs-iterative, bfs)")]
    UnknownOrder(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("invalid input in {source_name}: {reason}")]
    InvalidInput { source_name: String, reason: String },

    #[error("vertex not found: {vertex}")]
    VertexNotFound { vertex: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphwalkError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphwalkError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for malformed input read from `source_name`
    pub fn invalid_input(source_name: impl std::fmt::Display, reason: impl Into<String>) -> Self {
        GraphwalkError::InvalidInput {
            source_name: source_name.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an error for a vertex the caller required but the graph lacks
    pub fn vertex_not_found(vertex: impl std::fmt::Display) -> Self {
        GraphwalkError::VertexNotFound {
            vertex: vertex.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphwalkError::UnknownFormat(_)
            | GraphwalkError::UnknownOrder(_)
            | GraphwalkError::UsageError(_)
            | GraphwalkError::InvalidValue { .. } => ExitCode::Usage,

            GraphwalkError::InvalidInput { .. }
            | GraphwalkError::VertexNotFound { .. }
            | GraphwalkError::Json(_)
            | GraphwalkError::Toml(_) => ExitCode::Data,

            GraphwalkError::Io(_) | GraphwalkError::TomlSer(_) | GraphwalkError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphwalkError::UnknownFormat(_) => "unknown_format",
            GraphwalkError::UnknownOrder(_) => "unknown_order",
            GraphwalkError::UsageError(_) => "usage_error",
            GraphwalkError::InvalidValue { .. } => "invalid_value",
            GraphwalkError::InvalidInput { .. } => "invalid_input",
            GraphwalkError::VertexNotFound { .. } => "vertex_not_found",
            GraphwalkError::Io(_) => "io_error",
            GraphwalkError::Json(_) => "json_error",
            GraphwalkError::Toml(_) => "toml_error",
            GraphwalkError::TomlSer(_) => "toml_error",
            GraphwalkError::Other(_) => "other",
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

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphwalkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors_exit_2() {
        assert_eq!(
            GraphwalkError::UnknownFormat("xml".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            GraphwalkError::invalid_value("cell", "a,b").exit_code(),
            ExitCode::Usage
        );
    }

    #[test]
    fn test_data_errors_exit_3() {
        assert_eq!(
            GraphwalkError::vertex_not_found("z").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            GraphwalkError::invalid_input("grid.txt", "ragged rows").exit_code(),
            ExitCode::Data
        );
    }

    #[test]
    fn test_to_json_shape() {
        let json = GraphwalkError::vertex_not_found("z").to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "vertex_not_found");
        assert_eq!(json["error"]["message"], "vertex not found: z");
    }

    #[test]
    fn test_exit_code_into_i32() {
        let code: i32 = ExitCode::Usage.into();
        assert_eq!(code, 2);
    }
}
