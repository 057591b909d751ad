// SPDX-License-Identifier: MIT

//! cmlint - commit message linter
//!
//! Validates commit messages against a fixed, conventional-style policy:
//! an allowed set of uppercase type tags, casing rules for type and
//! subject, and a header pattern splitting the first line into structured
//! fields.
//!
//! # Example
//!
//! ```
//! use cmlint::config::LintConfig;
//! use cmlint::rules::LintEngine;
//!
//! let engine = LintEngine::new(LintConfig::default());
//! let result = engine.lint_message("(FEATURE): Add login flow").unwrap();
//! assert!(result.is_valid());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod rules;

// Re-exports for convenience
pub use config::LintConfig;
pub use error::{CmlintError, Result};
pub use rules::LintEngine;

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cmlint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
