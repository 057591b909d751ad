// SPDX-License-Identifier: MIT

//! Lint engine driving rule evaluation.

use crate::commit::CommitMessage;
use crate::config::{HeaderFields, LintConfig};
use crate::error::{CmlintError, LintError, Result};
use crate::git;

use super::builtin::{apply_builtin_rules, Rule};
use super::validator::LintResult;

/// Engine applying the configured rules to commit messages.
#[derive(Debug)]
pub struct LintEngine {
    config: LintConfig,
    custom_rules: Vec<Box<dyn Rule>>,
}

impl LintEngine {
    /// Create a new engine with the given configuration.
    pub fn new(config: LintConfig) -> Self {
        Self {
            config,
            custom_rules: Vec::new(),
        }
    }

    /// Add a custom rule to the engine.
    pub fn add_rule(&mut self, rule: Box<dyn Rule>) {
        self.custom_rules.push(rule);
    }

    /// The configuration the engine was built with.
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Lint a parsed commit message.
    pub fn validate(&self, message: &CommitMessage) -> LintResult {
        let mut result = LintResult::new(message.raw.clone());

        for issue in apply_builtin_rules(message, &self.config.rules) {
            result.push(issue);
        }

        for rule in &self.custom_rules {
            if let Some(issue) = rule.check(message, &self.config.rules) {
                result.push(issue);
            }
        }

        result
    }

    /// Lint a raw commit message string.
    pub fn lint_message(&self, message: &str) -> Result<LintResult> {
        let parsed = CommitMessage::parse(message, &self.config.parser.header_pattern)?;
        Ok(self.validate(&parsed))
    }

    /// Lint a message taken from existing history.
    ///
    /// Unlike [`lint_message`](Self::lint_message), an empty message is not
    /// an input error here: `git commit --allow-empty-message` makes such
    /// commits legal history, so they are reported as a failing result (the
    /// empty-field rules fire) instead of aborting the walk.
    fn lint_stored_message(&self, message: &str) -> Result<LintResult> {
        match self.lint_message(message) {
            Err(CmlintError::Lint(LintError::EmptyMessage)) => Ok(self.validate(&CommitMessage {
                raw: String::new(),
                header: String::new(),
                fields: HeaderFields::default(),
                body: None,
                footer: None,
                body_leading_blank: false,
                footer_leading_blank: false,
            })),
            other => other,
        }
    }

    /// Lint a specific commit by reference.
    pub fn check_commit(&self, reference: &str) -> Result<LintResult> {
        let message = git::get_commit_message(reference)?;
        let mut result = self.lint_stored_message(&message)?;
        result.commit_sha = Some(git::resolve_commit(reference)?);
        Ok(result)
    }

    /// Lint every commit in a range.
    pub fn check_range(&self, range: &str) -> Result<Vec<LintResult>> {
        let commits = git::get_commit_range(range)?;
        let mut results = Vec::new();

        for (sha, message) in commits {
            let mut result = self.lint_stored_message(&message)?;
            result.commit_sha = Some(sha);
            results.push(result);
        }

        Ok(results)
    }
}
