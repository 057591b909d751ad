// SPDX-License-Identifier: MIT

//! Header pattern compilation.
//!
//! The header pattern splits a commit header into its `type` and `subject`
//! fields via named capture groups. User-supplied patterns are compiled and
//! checked for both groups at load time, so a broken pattern fails with a
//! configuration error instead of silently rejecting every commit.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigError;

/// The built-in header pattern.
///
/// The type tag appears inside parentheses, and the parentheses are required
/// whenever a type is present. A bare `TYPE: subject` header does not match;
/// both captures come back absent and the empty-field rules fire.
pub const DEFAULT_HEADER_PATTERN: &str = r"^(?:\((?P<type>[\w ]+)\))?: (?P<subject>.+)$";

lazy_static! {
    static ref DEFAULT_REGEX: Regex =
        Regex::new(DEFAULT_HEADER_PATTERN).expect("built-in header pattern must compile");
}

/// A compiled header pattern with the required `type` and `subject` groups.
#[derive(Debug, Clone)]
pub struct HeaderPattern {
    source: String,
    regex: Regex,
}

/// Fields extracted from a commit header.
///
/// Both fields are absent when the header does not match the pattern at all;
/// the empty-field rules then report the violation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderFields {
    /// The commit type tag, if captured.
    pub commit_type: Option<String>,
    /// The subject text, if captured.
    pub subject: Option<String>,
}

impl HeaderPattern {
    /// Compile a header pattern, verifying the named groups.
    pub fn new(source: impl Into<String>) -> Result<Self, ConfigError> {
        let source = source.into();
        let regex = Regex::new(&source).map_err(|e| ConfigError::InvalidPattern {
            pattern: source.clone(),
            message: e.to_string(),
        })?;

        for group in ["type", "subject"] {
            if !regex.capture_names().any(|n| n == Some(group)) {
                return Err(ConfigError::MissingPatternGroup {
                    pattern: source,
                    group: group.to_string(),
                });
            }
        }

        Ok(Self { source, regex })
    }

    /// The pattern source as written in the configuration.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Apply the pattern to a header line.
    pub fn extract(&self, header: &str) -> HeaderFields {
        match self.regex.captures(header) {
            Some(caps) => HeaderFields {
                commit_type: caps.name("type").map(|m| m.as_str().to_string()),
                subject: caps.name("subject").map(|m| m.as_str().to_string()),
            },
            None => HeaderFields::default(),
        }
    }

    /// Whether the header matches the pattern at all.
    pub fn is_match(&self, header: &str) -> bool {
        self.regex.is_match(header)
    }
}

impl Default for HeaderPattern {
    fn default() -> Self {
        Self {
            source: DEFAULT_HEADER_PATTERN.to_string(),
            regex: DEFAULT_REGEX.clone(),
        }
    }
}

impl PartialEq for HeaderPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Serialize for HeaderPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for HeaderPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        HeaderPattern::new(source).map_err(serde::de::Error::custom)
    }
}
