// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::LintConfig;

/// Get the default configuration.
pub fn default_config() -> LintConfig {
    LintConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# cmlint configuration file
# SPDX-License-Identifier: MIT

[rules]
# Allowed commit type tags. A commit is rejected if its type is not listed.
allowed_types = [
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
]

# Casing constraints: "upper-case", "lower-case", or "sentence-case".
type_case = "upper-case"
subject_case = "sentence-case"

# Empty fields fail validation.
type_required = true
subject_required = true

# Length limits.
header_max_length = 100
body_max_line_length = 100
footer_max_line_length = 100

# Reject subjects ending in a period.
subject_full_stop = true

# Per-rule severity overrides: "off", "warning", or "error".
[rules.severity]
"body-leading-blank" = "warning"
"footer-leading-blank" = "warning"

[parser]
# Named groups `type` and `subject` are required.
header_pattern = '^(?:\((?P<type>[\w ]+)\))?: (?P<subject>.+)$'
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::DEFAULT_TYPES;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.rules.allowed_types, DEFAULT_TYPES);
        assert_eq!(config.rules.header_max_length, 100);
    }

    #[test]
    fn test_example_config_parseable() {
        let example = example_config();
        let config: LintConfig = toml::from_str(example).expect("example config should parse");
        assert_eq!(config.rules.allowed_types, DEFAULT_TYPES);
        assert_eq!(
            config.parser.header_pattern,
            crate::config::HeaderPattern::default()
        );
    }
}
