// SPDX-License-Identifier: MIT

//! Git integration module.

mod repo;

pub use repo::{get_commit_message, get_commit_range, resolve_commit, Repository};
