// SPDX-License-Identifier: MIT

//! Lint result types.

use console::{style, Style};

use crate::cli::args::OutputFormat;
use crate::config::Severity;

/// A single lint issue.
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// Rule code for programmatic handling (e.g. "type-enum").
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
    /// Severity of the issue.
    pub severity: Severity,
}

impl LintIssue {
    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let (prefix, code_style) = match self.severity {
            Severity::Error => (style("✗").red().bold(), Style::new().red()),
            _ => (style("⚠").yellow().bold(), Style::new().yellow()),
        };

        let mut output = format!(
            "{} {} {}",
            prefix,
            code_style.apply_to(&self.code),
            self.message
        );

        if let Some(ref suggestion) = self.suggestion {
            output.push_str(&format!(
                "\n  {} {}",
                style("→").dim(),
                style(suggestion).dim()
            ));
        }

        output
    }
}

/// Result of linting one commit message.
#[derive(Debug, Clone)]
pub struct LintResult {
    /// The linted message.
    pub message: String,
    /// Commit SHA if linting an existing commit.
    pub commit_sha: Option<String>,
    /// Error-level issues.
    pub errors: Vec<LintIssue>,
    /// Warning-level issues.
    pub warnings: Vec<LintIssue>,
}

impl LintResult {
    /// Create a new result for a message.
    pub fn new(message: String) -> Self {
        Self {
            message,
            commit_sha: None,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Record an issue under its severity. Off-level issues are dropped.
    pub fn push(&mut self, issue: LintIssue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
            Severity::Off => {}
        }
    }

    /// Check if the lint passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the total number of issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Print the result to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    /// Print in text format.
    fn print_text(&self) {
        if let Some(ref sha) = self.commit_sha {
            let short_sha = &sha[..7.min(sha.len())];
            let first_line = self.message.lines().next().unwrap_or("");
            let status = if self.is_valid() {
                style("✓").green().bold()
            } else {
                style("✗").red().bold()
            };
            println!("{} {} {}", status, style(short_sha).cyan(), first_line);
        }

        for error in &self.errors {
            println!("  {}", error.format());
        }
        for warning in &self.warnings {
            println!("  {}", warning.format());
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        let issue_json = |i: &LintIssue| {
            serde_json::json!({
                "code": i.code,
                "message": i.message,
                "suggestion": i.suggestion,
                "severity": i.severity.to_string(),
            })
        };

        let json = serde_json::json!({
            "valid": self.is_valid(),
            "commit": self.commit_sha,
            "message": self.message,
            "errors": self.errors.iter().map(issue_json).collect::<Vec<_>>(),
            "warnings": self.warnings.iter().map(issue_json).collect::<Vec<_>>(),
        });

        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            if self.warnings.is_empty() {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warnings.len())
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(code: &str, severity: Severity) -> LintIssue {
        LintIssue {
            code: code.to_string(),
            message: "Test message".to_string(),
            suggestion: None,
            severity,
        }
    }

    #[test]
    fn test_lint_result_valid() {
        let result = LintResult::new("(FIX): Fix a bug".to_string());
        assert!(result.is_valid());
        assert_eq!(result.issue_count(), 0);
    }

    #[test]
    fn test_push_routes_by_severity() {
        let mut result = LintResult::new("test".to_string());
        result.push(issue("a", Severity::Error));
        result.push(issue("b", Severity::Warning));
        result.push(issue("c", Severity::Off));

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.issue_count(), 2);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_issue_format() {
        let mut i = issue("type-enum", Severity::Error);
        i.suggestion = Some("Use FEATURE".to_string());
        let formatted = i.format();
        assert!(formatted.contains("type-enum"));
        assert!(formatted.contains("Use FEATURE"));
    }

    #[test]
    fn test_summary() {
        let mut result = LintResult::new("test".to_string());
        assert!(result.summary().contains("Valid"));

        result.push(issue("warn", Severity::Warning));
        assert!(result.summary().contains("1 warning"));

        result.push(issue("err", Severity::Error));
        assert!(result.summary().contains("Invalid"));
    }
}
