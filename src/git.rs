//! Working-tree status queries.
//!
//! One narrow capability: report whether the repository has uncommitted or
//! untracked changes. Shells out to the git binary; a failed invocation
//! (git missing, not a repository) reads as "no changes" so the tool still
//! runs in unversioned trees.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Source of version-control status snapshots.
pub trait StatusProvider {
    /// One `git status --porcelain`-shaped snapshot: one line per changed
    /// or untracked file, each starting with its two status columns.
    /// `None` when the tree is clean or status cannot be determined.
    fn status(&self) -> Option<String>;
}

/// Real provider backed by the git binary.
pub struct GitStatus {
    workdir: PathBuf,
}

impl GitStatus {
    pub fn new(workdir: impl AsRef<Path>) -> Self {
        Self {
            workdir: workdir.as_ref().to_path_buf(),
        }
    }
}

impl StatusProvider for GitStatus {
    fn status(&self) -> Option<String> {
        let output = match Command::new("git")
            .args(["status", "--porcelain"])
            .current_dir(&self.workdir)
            .output()
        {
            Ok(o) if o.status.success() => o,
            _ => return None,
        };

        let status = String::from_utf8_lossy(&output.stdout)
            .trim_end()
            .to_string();
        if status.is_empty() {
            None
        } else {
            Some(status)
        }
    }
}
