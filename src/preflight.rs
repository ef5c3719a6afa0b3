//! Preflight checks - ensure the tool is safe to run before any file moves.
//!
//! Two checks, strictly ordered:
//! 1. Location: the working directory must be inside the `client/` tree,
//!    because every destination is resolved relative to it.
//! 2. Clean tree: every later step overwrites files without confirmation,
//!    so a clean git state is the only undo mechanism.

use std::path::Path;

use thiserror::Error;

use crate::git::StatusProvider;

/// Directory segment the tool must be run from.
const MARKER_SEGMENT: &str = "client";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreflightError {
    #[error("you must run this command in the client/ directory")]
    WrongDirectory,

    #[error("this git repository has untracked files or uncommitted changes")]
    DirtyWorkingTree(Vec<String>),
}

/// Run both checks, in order. The location check runs first; on failure
/// the status provider is never consulted and nothing is written.
pub fn validate(app_root: &Path, status: &dyn StatusProvider) -> Result<(), PreflightError> {
    if !in_client_directory(app_root) {
        return Err(PreflightError::WrongDirectory);
    }

    match status.status() {
        Some(snapshot) if !snapshot.trim().is_empty() => {
            Err(PreflightError::DirtyWorkingTree(changed_paths(&snapshot)))
        }
        // Clean, or status unavailable (no git / not a repository).
        _ => Ok(()),
    }
}

fn in_client_directory(path: &Path) -> bool {
    path.components().any(|c| c.as_os_str() == MARKER_SEGMENT)
}

/// Strip the two porcelain status columns from each line, preserving order.
/// `" M foo.txt"` and `"?? bar.txt"` both reduce to their path.
fn changed_paths(snapshot: &str) -> Vec<String> {
    snapshot
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.get(2..).unwrap_or(line).trim().to_string())
        .collect()
}
