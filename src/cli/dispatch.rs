// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::Read;

use crate::config::LintConfig;
use crate::error::{CmlintError, LintError, Result, ResultExt};
use crate::rules::{LintEngine, LintResult};

use super::args::{CheckArgs, Cli, Commands, InitArgs, LintArgs};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    let config = if let Some(config_path) = &cli.config {
        LintConfig::load_from(config_path)?
    } else {
        LintConfig::load()?
    };

    match cli.effective_command() {
        Commands::Lint(args) => run_lint(&cli, &config, args),
        Commands::Check(args) => run_check(&cli, &config, args),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Run the lint command.
fn run_lint(cli: &Cli, config: &LintConfig, args: LintArgs) -> Result<()> {
    tracing::debug!("Running lint command with args: {:?}", args);

    let message = read_message(&args)?;
    let engine = LintEngine::new(config.clone());
    let result = engine.lint_message(&message)?;

    result.print(cli.format);
    exit_status(cli, &[result])
}

/// Read the message from --message, --file, or stdin.
fn read_message(args: &LintArgs) -> Result<String> {
    if let Some(ref message) = args.message {
        return Ok(message.clone());
    }

    if let Some(ref path) = args.file {
        return std::fs::read_to_string(path).context(format!("reading {}", path.display()));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("reading stdin")?;

    if buffer.trim().is_empty() {
        return Err(CmlintError::Lint(LintError::NoInput));
    }
    Ok(buffer)
}

/// Run the check command.
fn run_check(cli: &Cli, config: &LintConfig, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let engine = LintEngine::new(config.clone());

    let results = if args.range || args.target.contains("..") {
        engine.check_range(&args.target)?
    } else {
        vec![engine.check_commit(&args.target)?]
    };

    for result in &results {
        result.print(cli.format);
    }

    exit_status(cli, &results)
}

/// Turn lint results into the process exit status.
fn exit_status(cli: &Cli, results: &[LintResult]) -> Result<()> {
    let errors: usize = results.iter().map(|r| r.errors.len()).sum();
    let warnings: usize = results.iter().map(|r| r.warnings.len()).sum();

    if errors > 0 || (cli.strict && warnings > 0) {
        Err(CmlintError::Lint(LintError::ProblemsFound {
            count: errors + if cli.strict { warnings } else { 0 },
            commits: results.len(),
        }))
    } else {
        Ok(())
    }
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    let path = std::path::Path::new("cmlint.toml");

    if path.exists() && !args.force {
        return Err(CmlintError::WithContext {
            context: "init".to_string(),
            message: "cmlint.toml already exists (use --force to overwrite)".to_string(),
        });
    }

    std::fs::write(path, crate::config::example_config())?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("cmlint {}", crate::version::version_string());
    Ok(())
}
