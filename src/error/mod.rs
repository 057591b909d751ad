// SPDX-License-Identifier: MIT

//! Error types for cmlint.
//!
//! All fallible operations in the crate return [`Result`], with errors
//! categorized by subsystem.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cmlint operations.
#[derive(Error, Debug)]
pub enum CmlintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Lint errors
    #[error("Lint error: {0}")]
    Lint(#[from] LintError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid header pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Header pattern '{pattern}' is missing the named group '{group}'")]
    MissingPatternGroup { pattern: String, group: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Failed to walk commit range '{range}': {message}")]
    RangeFailed { range: String, message: String },
}

/// Lint-related errors.
#[derive(Error, Debug)]
pub enum LintError {
    #[error("Empty commit message")]
    EmptyMessage,

    #[error("Found {count} problems in {commits} commit(s)")]
    ProblemsFound { count: usize, commits: usize },

    #[error("No commit message supplied (use --message, --file, or stdin)")]
    NoInput,
}

/// Result type alias for cmlint operations.
pub type Result<T> = std::result::Result<T, CmlintError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CmlintError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
