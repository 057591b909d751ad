// SPDX-License-Identifier: MIT

//! Built-in lint rules.
//!
//! The rule set mirrors a conventional-commits baseline: the header field
//! rules (type-enum, type-case, type-empty, subject-case, subject-empty)
//! plus length and blank-line rules for header, body, and footer. Each rule
//! has a default severity that cmlint.toml can override per code.

use crate::commit::CommitMessage;
use crate::config::{RulesConfig, Severity};

use super::validator::LintIssue;

/// Trait for custom rules.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Check the commit message and return an issue if the rule is violated.
    fn check(&self, message: &CommitMessage, rules: &RulesConfig) -> Option<LintIssue>;

    /// Get the rule name.
    fn name(&self) -> &str;
}

/// Apply all built-in rules to a commit message.
pub fn apply_builtin_rules(message: &CommitMessage, rules: &RulesConfig) -> Vec<LintIssue> {
    let checks: &[fn(&CommitMessage, &RulesConfig) -> Option<LintIssue>] = &[
        check_type_empty,
        check_type_enum,
        check_type_case,
        check_subject_empty,
        check_subject_case,
        check_subject_full_stop,
        check_header_max_length,
        check_body_leading_blank,
        check_body_max_line_length,
        check_footer_leading_blank,
        check_footer_max_line_length,
    ];

    checks.iter().filter_map(|check| check(message, rules)).collect()
}

fn issue(
    rules: &RulesConfig,
    code: &str,
    default: Severity,
    message: String,
    suggestion: Option<String>,
) -> Option<LintIssue> {
    let severity = rules.severity_of(code, default);
    if severity == Severity::Off {
        return None;
    }
    Some(LintIssue {
        code: code.to_string(),
        message,
        suggestion,
        severity,
    })
}

/// type-empty: the type tag must be present and non-empty.
fn check_type_empty(message: &CommitMessage, rules: &RulesConfig) -> Option<LintIssue> {
    if !rules.type_required {
        return None;
    }

    let empty = message
        .fields
        .commit_type
        .as_deref()
        .map_or(true, |t| t.trim().is_empty());
    if empty {
        issue(
            rules,
            "type-empty",
            Severity::Error,
            "Commit type is missing".to_string(),
            Some("Write the header as '(TYPE): Subject'".to_string()),
        )
    } else {
        None
    }
}

/// type-enum: the type tag must be in the allowed list.
fn check_type_enum(message: &CommitMessage, rules: &RulesConfig) -> Option<LintIssue> {
    let commit_type = message.fields.commit_type.as_deref()?;
    if commit_type.trim().is_empty() {
        return None;
    }

    if !rules.allowed_types.iter().any(|t| t == commit_type) {
        issue(
            rules,
            "type-enum",
            Severity::Error,
            format!("Commit type '{}' is not allowed", commit_type),
            Some(format!("Use one of: {}", rules.allowed_types.join(", "))),
        )
    } else {
        None
    }
}

/// type-case: the type tag must satisfy the configured casing.
fn check_type_case(message: &CommitMessage, rules: &RulesConfig) -> Option<LintIssue> {
    let commit_type = message.fields.commit_type.as_deref()?;
    if commit_type.trim().is_empty() {
        return None;
    }

    if !rules.type_case.matches(commit_type) {
        issue(
            rules,
            "type-case",
            Severity::Error,
            format!("Commit type '{}' must be {}", commit_type, rules.type_case),
            None,
        )
    } else {
        None
    }
}

/// subject-empty: the subject must be present and non-empty.
fn check_subject_empty(message: &CommitMessage, rules: &RulesConfig) -> Option<LintIssue> {
    if !rules.subject_required {
        return None;
    }

    let empty = message
        .fields
        .subject
        .as_deref()
        .map_or(true, |s| s.trim().is_empty());
    if empty {
        issue(
            rules,
            "subject-empty",
            Severity::Error,
            "Commit subject is missing".to_string(),
            Some("Write the header as '(TYPE): Subject'".to_string()),
        )
    } else {
        None
    }
}

/// subject-case: the subject must satisfy the configured casing.
fn check_subject_case(message: &CommitMessage, rules: &RulesConfig) -> Option<LintIssue> {
    let subject = message.fields.subject.as_deref()?;
    if subject.trim().is_empty() {
        return None;
    }

    if !rules.subject_case.matches(subject) {
        issue(
            rules,
            "subject-case",
            Severity::Error,
            format!("Subject must be {}", rules.subject_case),
            Some(format!("Found: '{}'", subject)),
        )
    } else {
        None
    }
}

/// subject-full-stop: the subject must not end with a period.
fn check_subject_full_stop(message: &CommitMessage, rules: &RulesConfig) -> Option<LintIssue> {
    if !rules.subject_full_stop {
        return None;
    }

    let subject = message.fields.subject.as_deref()?;
    if subject.ends_with('.') {
        issue(
            rules,
            "subject-full-stop",
            Severity::Error,
            "Subject must not end with a period".to_string(),
            Some("Remove the trailing period".to_string()),
        )
    } else {
        None
    }
}

/// header-max-length: the header must not exceed the configured length.
fn check_header_max_length(message: &CommitMessage, rules: &RulesConfig) -> Option<LintIssue> {
    let max = rules.header_max_length;
    let len = message.header_len();

    if max > 0 && len > max {
        issue(
            rules,
            "header-max-length",
            Severity::Error,
            format!("Header is too long: {} characters (max: {})", len, max),
            Some(format!("Shorten the header to {} characters or less", max)),
        )
    } else {
        None
    }
}

/// body-leading-blank: the body must be separated from the header by a blank line.
fn check_body_leading_blank(message: &CommitMessage, rules: &RulesConfig) -> Option<LintIssue> {
    if message.body.is_some() && !message.body_leading_blank {
        issue(
            rules,
            "body-leading-blank",
            Severity::Warning,
            "Body must be preceded by a blank line".to_string(),
            None,
        )
    } else {
        None
    }
}

/// body-max-line-length: body lines must not exceed the configured length.
fn check_body_max_line_length(message: &CommitMessage, rules: &RulesConfig) -> Option<LintIssue> {
    let max = rules.body_max_line_length;
    if max == 0 {
        return None;
    }

    let over = message
        .body_lines()
        .filter(|l| l.chars().count() > max)
        .count();
    if over > 0 {
        issue(
            rules,
            "body-max-line-length",
            Severity::Error,
            format!("{} body line(s) exceed {} characters", over, max),
            Some("Wrap the body text".to_string()),
        )
    } else {
        None
    }
}

/// footer-leading-blank: the footer must be separated from the body by a blank line.
fn check_footer_leading_blank(message: &CommitMessage, rules: &RulesConfig) -> Option<LintIssue> {
    if message.footer.is_some() && !message.footer_leading_blank {
        issue(
            rules,
            "footer-leading-blank",
            Severity::Warning,
            "Footer must be preceded by a blank line".to_string(),
            None,
        )
    } else {
        None
    }
}

/// footer-max-line-length: footer lines must not exceed the configured length.
fn check_footer_max_line_length(message: &CommitMessage, rules: &RulesConfig) -> Option<LintIssue> {
    let max = rules.footer_max_line_length;
    if max == 0 {
        return None;
    }

    let over = message
        .footer_lines()
        .filter(|l| l.chars().count() > max)
        .count();
    if over > 0 {
        issue(
            rules,
            "footer-max-line-length",
            Severity::Error,
            format!("{} footer line(s) exceed {} characters", over, max),
            None,
        )
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeaderPattern;

    fn parse(message: &str) -> CommitMessage {
        CommitMessage::parse(message, &HeaderPattern::default()).unwrap()
    }

    fn codes(message: &str, rules: &RulesConfig) -> Vec<String> {
        apply_builtin_rules(&parse(message), rules)
            .into_iter()
            .map(|i| i.code)
            .collect()
    }

    #[test]
    fn test_valid_header_passes() {
        let rules = RulesConfig::default();
        assert!(codes("(FEATURE): Add login flow", &rules).is_empty());
    }

    #[test]
    fn test_unknown_type_fails_enum() {
        let rules = RulesConfig::default();
        let codes = codes("(FEAT): Add login flow", &rules);
        assert!(codes.contains(&"type-enum".to_string()));
    }

    #[test]
    fn test_lowercase_type_fails_case() {
        let rules = RulesConfig::default();
        let codes = codes("(feature): Add login flow", &rules);
        assert!(codes.contains(&"type-case".to_string()));
        // Also not in the allowed list, which is uppercase
        assert!(codes.contains(&"type-enum".to_string()));
    }

    #[test]
    fn test_lowercase_subject_fails_sentence_case() {
        let rules = RulesConfig::default();
        let codes = codes("(FEATURE): add login flow", &rules);
        assert!(codes.contains(&"subject-case".to_string()));
    }

    #[test]
    fn test_bare_header_fails_empty_rules() {
        // "FIX: bug" does not match the header pattern at all, so both
        // fields are absent.
        let rules = RulesConfig::default();
        let codes = codes("FIX: bug", &rules);
        assert!(codes.contains(&"type-empty".to_string()));
        assert!(codes.contains(&"subject-empty".to_string()));
    }

    #[test]
    fn test_typeless_header_fails_type_empty_only() {
        let rules = RulesConfig::default();
        let codes = codes(": Subject text", &rules);
        assert!(codes.contains(&"type-empty".to_string()));
        assert!(!codes.contains(&"subject-empty".to_string()));
    }

    #[test]
    fn test_type_not_required() {
        let rules = RulesConfig {
            type_required: false,
            ..Default::default()
        };
        let codes = codes(": Subject text", &rules);
        assert!(!codes.contains(&"type-empty".to_string()));
    }

    #[test]
    fn test_subject_full_stop() {
        let rules = RulesConfig::default();
        let codes = codes("(FIX): Fix the bug.", &rules);
        assert!(codes.contains(&"subject-full-stop".to_string()));
    }

    #[test]
    fn test_header_max_length() {
        let rules = RulesConfig {
            header_max_length: 20,
            ..Default::default()
        };
        let codes = codes("(FIX): A very long subject indeed", &rules);
        assert!(codes.contains(&"header-max-length".to_string()));
    }

    #[test]
    fn test_body_leading_blank_is_warning() {
        let rules = RulesConfig::default();
        let issues = apply_builtin_rules(&parse("(FIX): Fix it\nbody text"), &rules);
        let issue = issues
            .iter()
            .find(|i| i.code == "body-leading-blank")
            .unwrap();
        assert_eq!(issue.severity, Severity::Warning);
    }

    #[test]
    fn test_body_max_line_length() {
        let rules = RulesConfig {
            body_max_line_length: 10,
            ..Default::default()
        };
        let codes = codes("(FIX): Fix it\n\nThis body line is definitely too long", &rules);
        assert!(codes.contains(&"body-max-line-length".to_string()));
    }

    #[test]
    fn test_severity_override_disables_rule() {
        let mut rules = RulesConfig::default();
        rules
            .severity
            .insert("subject-case".to_string(), Severity::Off);
        let codes = codes("(FEATURE): add login flow", &rules);
        assert!(!codes.contains(&"subject-case".to_string()));
    }
}
