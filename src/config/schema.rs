// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from cmlint.toml.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::pattern::HeaderPattern;

/// The main configuration structure for cmlint.
///
/// Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LintConfig {
    /// Rule configuration.
    pub rules: RulesConfig,

    /// Header parser configuration.
    pub parser: ParserConfig,
}

impl LintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Allowed commit type tags. Order carries no priority; duplicates are
    /// rejected at load time.
    pub allowed_types: Vec<String>,

    /// Casing constraint applied to the type tag.
    pub type_case: CaseRule,

    /// Casing constraint applied to the subject.
    pub subject_case: CaseRule,

    /// Whether an empty or missing type fails validation.
    pub type_required: bool,

    /// Whether an empty or missing subject fails validation.
    pub subject_required: bool,

    /// Maximum length of the header line.
    pub header_max_length: usize,

    /// Whether a subject ending in '.' fails validation.
    pub subject_full_stop: bool,

    /// Maximum length of body lines.
    pub body_max_line_length: usize,

    /// Maximum length of footer lines.
    pub footer_max_line_length: usize,

    /// Per-rule severity overrides, keyed by rule code.
    #[serde(default)]
    pub severity: HashMap<String, Severity>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            allowed_types: DEFAULT_TYPES.iter().map(|t| t.to_string()).collect(),
            type_case: CaseRule::Upper,
            subject_case: CaseRule::Sentence,
            type_required: true,
            subject_required: true,
            header_max_length: 100,
            subject_full_stop: true,
            body_max_line_length: 100,
            footer_max_line_length: 100,
            severity: HashMap::new(),
        }
    }
}

impl RulesConfig {
    /// Get the effective severity for a rule code, falling back to the
    /// built-in default when no override is configured.
    pub fn severity_of(&self, code: &str, default: Severity) -> Severity {
        self.severity.get(code).copied().unwrap_or(default)
    }
}

/// The built-in set of allowed commit type tags.
pub const DEFAULT_TYPES: &[&str] = &[
    "FEATURE",
    "FIX",
    "DOCS",
    "REFACTOR",
    "TEST",
    "CI",
    "HOTFIX",
    "CHORE",
    "RELEASE",
    "SP",
    "BUGREPORT",
    "MERGE",
    "STYLES",
    "CONFIGURATION",
];

/// Header parser configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ParserConfig {
    /// Regular expression splitting the header into `type` and `subject`.
    pub header_pattern: HeaderPattern,
}

/// Severity of a rule violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The rule is disabled.
    Off,
    /// Violations are reported but do not fail the lint.
    Warning,
    /// Violations fail the lint.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Off => write!(f, "off"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Casing constraint applied to a header field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CaseRule {
    /// Every cased character is uppercase.
    #[serde(rename = "upper-case")]
    #[default]
    Upper,

    /// Every cased character is lowercase.
    #[serde(rename = "lower-case")]
    Lower,

    /// First letter capitalized, remainder not all-uppercase.
    #[serde(rename = "sentence-case")]
    Sentence,
}

impl CaseRule {
    /// Check whether a value satisfies this casing rule.
    ///
    /// Values with no cased characters trivially pass.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            CaseRule::Upper => !value.chars().any(|c| c.is_lowercase()),
            CaseRule::Lower => !value.chars().any(|c| c.is_uppercase()),
            CaseRule::Sentence => {
                let mut chars = value.chars();
                let first_ok = match chars.next() {
                    Some(c) if c.is_alphabetic() => c.is_uppercase(),
                    _ => true,
                };
                let rest: String = chars.collect();
                let rest_all_upper = rest.chars().any(|c| c.is_alphabetic())
                    && !rest.chars().any(|c| c.is_lowercase());
                first_ok && !rest_all_upper
            }
        }
    }

    /// Get the configuration name of this rule.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseRule::Upper => "upper-case",
            CaseRule::Lower => "lower-case",
            CaseRule::Sentence => "sentence-case",
        }
    }
}

impl std::fmt::Display for CaseRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LintConfig::default();
        assert_eq!(config.rules.allowed_types.len(), 14);
        assert_eq!(config.rules.type_case, CaseRule::Upper);
        assert_eq!(config.rules.subject_case, CaseRule::Sentence);
        assert!(config.rules.type_required);
        assert!(config.rules.subject_required);
    }

    #[test]
    fn test_default_types_uppercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for tag in DEFAULT_TYPES {
            assert_eq!(tag.to_uppercase(), **tag, "tag {} is not uppercase", tag);
            assert!(seen.insert(*tag), "tag {} is duplicated", tag);
        }
        assert_eq!(seen.len(), 14);
    }

    #[test]
    fn test_upper_case_rule() {
        assert!(CaseRule::Upper.matches("FEATURE"));
        assert!(CaseRule::Upper.matches("CI"));
        assert!(!CaseRule::Upper.matches("Feature"));
        assert!(!CaseRule::Upper.matches("feature"));
    }

    #[test]
    fn test_sentence_case_rule() {
        assert!(CaseRule::Sentence.matches("Add login flow"));
        assert!(!CaseRule::Sentence.matches("add login flow"));
        assert!(!CaseRule::Sentence.matches("ADD LOGIN FLOW"));
        // Leading digits have no case and pass
        assert!(CaseRule::Sentence.matches("1.2 release notes"));
    }

    #[test]
    fn test_severity_override() {
        let mut rules = RulesConfig::default();
        assert_eq!(
            rules.severity_of("type-enum", Severity::Error),
            Severity::Error
        );
        rules
            .severity
            .insert("type-enum".to_string(), Severity::Warning);
        assert_eq!(
            rules.severity_of("type-enum", Severity::Error),
            Severity::Warning
        );
    }

    #[test]
    fn test_config_serialization() {
        let config = LintConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("allowed_types"));
        assert!(toml_str.contains("header_pattern"));
    }
}
