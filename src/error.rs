//! Error types for tabrepr

use thiserror::Error;

/// Errors that can occur while truncating or rendering a table
#[derive(Error, Debug)]
pub enum ReprError {
    /// Display limits below the minimum of two rows and two columns
    #[error("invalid display limits: max_rows={max_rows}, max_cols={max_cols} (both must be >= 2)")]
    InvalidLimits { max_rows: usize, max_cols: usize },

    /// Names or columns whose lengths do not match the table shape
    #[error("shape mismatch: {0}")]
    Shape(String),

    /// Unknown representation target name
    #[error("unknown render target: {0}")]
    UnknownTarget(String),

    /// Invalid configuration document
    #[error("invalid configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, ReprError>;
