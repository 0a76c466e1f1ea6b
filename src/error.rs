//! Error types for Schoolspace
//!
//! The calculators themselves cannot fail; these errors come from loading
//! configuration and request files around them.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Schoolspace operations
pub type SchoolspaceResult<T> = Result<T, SchoolspaceError>;

/// Main error type for Schoolspace operations
#[derive(Error, Debug)]
pub enum SchoolspaceError {
    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Request file could not be parsed
    #[error("invalid program request in {file}: {message}")]
    InvalidRequest { file: PathBuf, message: String },

    /// A regulatory table holds a value no calculation can use
    #[error("inconsistent {table}: {message}")]
    InvalidTable { table: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
