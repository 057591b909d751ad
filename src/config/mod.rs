// SPDX-License-Identifier: MIT

//! Configuration module for cmlint.
//!
//! The configuration provider: a static default matching the built-in
//! policy, optionally overridden from a cmlint.toml file. Loaded once,
//! immutable afterwards.

pub mod default;
mod loader;
mod pattern;
mod schema;

pub use default::{default_config, example_config};
pub use loader::{find_config_file, find_config_file_from, load_config, parse_config};
pub use pattern::{HeaderFields, HeaderPattern, DEFAULT_HEADER_PATTERN};
pub use schema::*;
