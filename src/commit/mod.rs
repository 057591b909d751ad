// SPDX-License-Identifier: MIT

//! Commit message parsing.

mod message;

pub use message::CommitMessage;
