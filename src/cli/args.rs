// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cmlint - commit message linter
#[derive(Parser, Debug)]
#[command(name = "cmlint")]
#[command(version)]
#[command(about = "Commit message linter", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to lint if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Treat warnings as errors
    #[arg(long, global = true)]
    pub strict: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Lint a commit message from a flag, a file, or stdin (default command)
    Lint(LintArgs),

    /// Lint existing commits by reference or range
    Check(CheckArgs),

    /// Initialize cmlint configuration
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the lint command.
#[derive(Parser, Debug, Default, Clone)]
pub struct LintArgs {
    /// The commit message to lint
    #[arg(short, long)]
    pub message: Option<String>,

    /// Read the commit message from a file (commit-msg hook style)
    #[arg(short, long, conflicts_with = "message")]
    pub file: Option<PathBuf>,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Commit or range to check
    #[arg(default_value = "HEAD")]
    pub target: String,

    /// Treat the target as a range even without ".."
    #[arg(long)]
    pub range: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Default, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Lint if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Lint(LintArgs::default()))
    }
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            target: "HEAD".to_string(),
            range: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lint_message() {
        let args = Cli::parse_from(["cmlint", "lint", "-m", "(FIX): Fix it"]);
        if let Some(Commands::Lint(lint_args)) = args.command {
            assert_eq!(lint_args.message.as_deref(), Some("(FIX): Fix it"));
        } else {
            panic!("Expected Lint command");
        }
    }

    #[test]
    fn test_parse_check_range() {
        let args = Cli::parse_from(["cmlint", "check", "HEAD~5..HEAD"]);
        if let Some(Commands::Check(check_args)) = args.command {
            assert_eq!(check_args.target, "HEAD~5..HEAD");
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["cmlint", "--strict", "--format", "json", "check"]);
        assert!(args.strict);
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_default_command() {
        let args = Cli::parse_from(["cmlint"]);
        assert!(args.command.is_none());
        assert!(matches!(args.effective_command(), Commands::Lint(_)));
    }
}
