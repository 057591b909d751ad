// SPDX-License-Identifier: MIT

//! Rule engine module for commit message linting.

mod builtin;
mod engine;
mod validator;

pub use builtin::{apply_builtin_rules, Rule};
pub use engine::LintEngine;
pub use validator::{LintIssue, LintResult};
