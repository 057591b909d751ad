// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{CmlintError, GitError, Result};
use git2::Repository as Git2Repo;
use std::path::Path;

/// Wrapper around git2::Repository for message retrieval.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            CmlintError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path, discovering upwards.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                CmlintError::Git(GitError::NotARepository)
            } else {
                CmlintError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        Ok(Self { inner })
    }

    /// Resolve a reference (SHA, branch name, HEAD~n, ...) to a commit.
    fn commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            CmlintError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        obj.peel_to_commit().map_err(|e| {
            CmlintError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })
    }

    /// Resolve a reference to its commit SHA.
    pub fn resolve(&self, reference: &str) -> Result<String> {
        Ok(self.commit(reference)?.id().to_string())
    }

    /// Get the commit message for a reference.
    pub fn commit_message(&self, reference: &str) -> Result<String> {
        let commit = self.commit(reference)?;
        let message = commit.message().ok_or_else(|| {
            CmlintError::Git(GitError::InvalidReference {
                reference: format!("{}: Invalid message encoding", reference),
            })
        })?;
        Ok(message.to_string())
    }

    /// Get (sha, message) pairs for a range.
    ///
    /// Accepts `a..b` ranges or a single reference, which yields one commit.
    pub fn commits_in_range(&self, range: &str) -> Result<Vec<(String, String)>> {
        if let Some((from, to)) = range.split_once("..") {
            let from = self.commit(from)?.id();
            let to = self.commit(to)?.id();

            let mut revwalk = self.inner.revwalk().map_err(|e| range_err(range, e))?;
            revwalk.push(to).map_err(|e| range_err(range, e))?;
            revwalk.hide(from).map_err(|e| range_err(range, e))?;

            let mut commits = Vec::new();
            for oid in revwalk {
                let oid = oid.map_err(|e| range_err(range, e))?;
                let commit = self.inner.find_commit(oid).map_err(|e| range_err(range, e))?;
                commits.push((
                    oid.to_string(),
                    commit.message().unwrap_or("").to_string(),
                ));
            }
            Ok(commits)
        } else {
            let commit = self.commit(range)?;
            Ok(vec![(
                commit.id().to_string(),
                commit.message().unwrap_or("").to_string(),
            )])
        }
    }
}

fn range_err(range: &str, e: git2::Error) -> CmlintError {
    CmlintError::Git(GitError::RangeFailed {
        range: range.to_string(),
        message: e.message().to_string(),
    })
}

/// Resolve a reference to its commit SHA in the current repository.
pub fn resolve_commit(reference: &str) -> Result<String> {
    Repository::open_current()?.resolve(reference)
}

/// Get the commit message for a reference in the current repository.
pub fn get_commit_message(reference: &str) -> Result<String> {
    Repository::open_current()?.commit_message(reference)
}

/// Get commits in a range in the current repository.
pub fn get_commit_range(range: &str) -> Result<Vec<(String, String)>> {
    Repository::open_current()?.commits_in_range(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, Repository) {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();

        {
            let sig = git2::Signature::now("Test", "test@example.com").unwrap();
            let tree_id = {
                let mut index = repo.index().unwrap();
                index.write_tree().unwrap()
            };
            let tree = repo.find_tree(tree_id).unwrap();
            repo.commit(
                Some("HEAD"),
                &sig,
                &sig,
                "(FEATURE): Add initial scaffolding",
                &tree,
                &[],
            )
            .unwrap();
        }

        let wrapper = Repository::open(dir.path()).unwrap();
        (dir, wrapper)
    }

    #[test]
    fn test_open_repo() {
        let (dir, _repo) = create_test_repo();
        assert!(Repository::open(dir.path()).is_ok());
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = Repository::open(dir.path());
        assert!(matches!(
            result,
            Err(CmlintError::Git(GitError::NotARepository))
        ));
    }

    #[test]
    fn test_commit_message() {
        let (_dir, repo) = create_test_repo();
        let message = repo.commit_message("HEAD").unwrap();
        assert_eq!(message, "(FEATURE): Add initial scaffolding");
    }

    #[test]
    fn test_single_reference_range() {
        let (_dir, repo) = create_test_repo();
        let commits = repo.commits_in_range("HEAD").unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].1, "(FEATURE): Add initial scaffolding");
    }

    #[test]
    fn test_invalid_reference() {
        let (_dir, repo) = create_test_repo();
        let result = repo.commit_message("no-such-ref");
        assert!(matches!(
            result,
            Err(CmlintError::Git(GitError::InvalidReference { .. }))
        ));
    }
}
