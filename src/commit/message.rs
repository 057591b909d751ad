// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.
//!
//! A message is sectioned into header, body, and footer; the header is then
//! split into `type` and `subject` through the configured header pattern.
//! A header the pattern does not match parses with both fields absent, and
//! the empty-field rules report it.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::{HeaderFields, HeaderPattern};
use crate::error::{CmlintError, LintError, Result};

lazy_static! {
    /// Git-trailer shaped lines ("Signed-off-by: X", "BREAKING CHANGE: ...",
    /// "Closes #123") that mark the footer section.
    static ref TRAILER_REGEX: Regex =
        Regex::new(r"^(?:BREAKING CHANGE|[-\w]+): .+|^[-\w]+ #.+").unwrap();
}

/// A parsed commit message.
#[derive(Debug, Clone)]
pub struct CommitMessage {
    /// The raw message as given, comment lines stripped.
    pub raw: String,
    /// The first line of the message.
    pub header: String,
    /// Fields extracted from the header by the configured pattern.
    pub fields: HeaderFields,
    /// The body section, if any.
    pub body: Option<String>,
    /// The footer section (trailing git-trailer lines), if any.
    pub footer: Option<String>,
    /// Whether a blank line separates the header from the body.
    pub body_leading_blank: bool,
    /// Whether a blank line separates the body from the footer.
    pub footer_leading_blank: bool,
}

impl CommitMessage {
    /// Parse a commit message against a header pattern.
    pub fn parse(message: &str, pattern: &HeaderPattern) -> Result<Self> {
        let raw = strip_comments(message);
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(CmlintError::Lint(LintError::EmptyMessage));
        }

        let lines: Vec<&str> = trimmed.lines().collect();
        let header = lines[0].to_string();
        let fields = pattern.extract(&header);

        let rest = &lines[1..];
        let footer_start = find_footer_start(rest);

        let footer_lines = &rest[footer_start..];
        let footer = if footer_lines.is_empty() {
            None
        } else {
            Some(footer_lines.join("\n"))
        };
        let footer_leading_blank = footer.is_some()
            && footer_start > 0
            && rest[footer_start - 1].trim().is_empty();

        let body_lines: Vec<&str> = rest[..footer_start]
            .iter()
            .copied()
            .skip_while(|l| l.trim().is_empty())
            .collect();
        let body_lines: Vec<&str> = {
            let trailing_blanks = body_lines
                .iter()
                .rev()
                .take_while(|l| l.trim().is_empty())
                .count();
            body_lines[..body_lines.len() - trailing_blanks].to_vec()
        };
        let body = if body_lines.is_empty() {
            None
        } else {
            Some(body_lines.join("\n"))
        };
        let body_leading_blank =
            body.is_some() && rest.first().is_some_and(|l| l.trim().is_empty());

        Ok(Self {
            raw: trimmed.to_string(),
            header,
            fields,
            body,
            footer,
            body_leading_blank,
            footer_leading_blank,
        })
    }

    /// The header length in characters.
    pub fn header_len(&self) -> usize {
        self.header.chars().count()
    }

    /// Lines of the body section.
    pub fn body_lines(&self) -> impl Iterator<Item = &str> {
        self.body.as_deref().unwrap_or("").lines()
    }

    /// Lines of the footer section.
    pub fn footer_lines(&self) -> impl Iterator<Item = &str> {
        self.footer.as_deref().unwrap_or("").lines()
    }
}

/// Find the index in `rest` where the trailing footer block begins.
///
/// Returns `rest.len()` when there is no footer. The footer is the final
/// run of non-blank trailer-shaped lines.
fn find_footer_start(rest: &[&str]) -> usize {
    let mut start = rest.len();
    for (i, line) in rest.iter().enumerate().rev() {
        if line.trim().is_empty() {
            break;
        }
        if TRAILER_REGEX.is_match(line) {
            start = i;
        } else {
            break;
        }
    }
    start
}

/// Drop git comment lines (everything after the scissors line included).
fn strip_comments(message: &str) -> String {
    let mut out = Vec::new();
    for line in message.lines() {
        if line.starts_with("# ------------------------ >8 ------------------------") {
            break;
        }
        if line.starts_with('#') {
            continue;
        }
        out.push(line);
    }
    out.join("\n")
}
