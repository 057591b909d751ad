// SPDX-License-Identifier: MIT

//! Configuration loading and validation.

use crate::error::{CmlintError, ConfigError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::schema::LintConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["cmlint.toml", ".cmlint.toml", ".config/cmlint.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    // Fall back to the home and XDG config directories
    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }
    if let Some(config_dir) = dirs::config_dir() {
        let user_config = config_dir.join("cmlint").join("config.toml");
        if user_config.exists() {
            return Some(user_config);
        }
    }

    None
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<LintConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(LintConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<LintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CmlintError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CmlintError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<LintConfig> {
    let config: LintConfig = toml::from_str(content).map_err(|e| {
        CmlintError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;
    validate_config(&config)?;
    Ok(config)
}

/// Check the invariants a loaded configuration must hold.
///
/// The header pattern itself is validated during deserialization; this
/// covers the allowed-types list.
fn validate_config(config: &LintConfig) -> Result<()> {
    if config.rules.allowed_types.is_empty() {
        return Err(CmlintError::Config(ConfigError::InvalidValue {
            key: "rules.allowed_types".to_string(),
            message: "must not be empty".to_string(),
        }));
    }

    let mut seen = HashSet::new();
    for tag in &config.rules.allowed_types {
        if !seen.insert(tag.as_str()) {
            return Err(CmlintError::Config(ConfigError::InvalidValue {
                key: "rules.allowed_types".to_string(),
                message: format!("duplicate type tag '{}'", tag),
            }));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{CaseRule, Severity, DEFAULT_TYPES};

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.rules.allowed_types, DEFAULT_TYPES);
        assert_eq!(config.rules.subject_case, CaseRule::Sentence);
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
[rules]
allowed_types = ["FEATURE", "FIX"]
subject_case = "lower-case"
header_max_length = 72

[rules.severity]
"subject-full-stop" = "off"
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.rules.allowed_types, vec!["FEATURE", "FIX"]);
        assert_eq!(config.rules.subject_case, CaseRule::Lower);
        assert_eq!(config.rules.header_max_length, 72);
        assert_eq!(
            config.rules.severity_of("subject-full-stop", Severity::Error),
            Severity::Off
        );
    }

    #[test]
    fn test_parse_custom_pattern() {
        let toml = r#"
[parser]
header_pattern = '^(?P<type>[A-Z]+): (?P<subject>.+)$'
"#;
        let config = parse_config(toml).unwrap();
        let fields = config.parser.header_pattern.extract("FIX: bug");
        assert_eq!(fields.commit_type.as_deref(), Some("FIX"));
        assert_eq!(fields.subject.as_deref(), Some("bug"));
    }

    #[test]
    fn test_reject_empty_allowed_types() {
        let toml = r#"
[rules]
allowed_types = []
"#;
        let err = parse_config(toml).unwrap_err();
        assert!(err.to_string().contains("allowed_types"));
    }

    #[test]
    fn test_reject_duplicate_types() {
        let toml = r#"
[rules]
allowed_types = ["FIX", "DOCS", "FIX"]
"#;
        let err = parse_config(toml).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_reject_pattern_without_groups() {
        let toml = r#"
[parser]
header_pattern = '^(.+)$'
"#;
        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        use std::io::Write;

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cmlint.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[rules]\nheader_max_length = 50").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.rules.header_max_length, 50);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config_from(Path::new("/nonexistent/cmlint.toml"));
        assert!(matches!(
            result,
            Err(CmlintError::Config(ConfigError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_find_config_in_parent() {
        use std::io::Write;

        let dir = tempfile::TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let path = dir.path().join(".cmlint.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[rules]").unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, path);
    }
}
