//! End-to-end run of the full transplant sequence against a sandboxed
//! host project, using the fixtures actually shipped with the tool.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use rewire::git::StatusProvider;
use rewire::preflight::{self, PreflightError};
use rewire::transplant::{self, Workspace};
use rewire::paths;

struct FakeStatus(Option<&'static str>);

impl StatusProvider for FakeStatus {
    fn status(&self) -> Option<String> {
        self.0.map(str::to_string)
    }
}

/// The crate root, which is also the own-root layout the binary ships:
/// a `fixtures/` directory full of pre-authored templates.
fn shipped_own_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn host_project() -> (TempDir, Workspace) {
    let tmp = TempDir::new().unwrap();
    let app_root = tmp.path().join("project/client");
    fs::create_dir_all(&app_root).unwrap();
    let ws = Workspace {
        own_root: shipped_own_root(),
        app_root,
    };
    (tmp, ws)
}

fn assert_artifact_matches_fixture(ws: &Workspace, fixture: &str, dest: &str) {
    let src = paths::fixture(&ws.own_root, fixture);
    let dest = paths::app(&ws.app_root, dest);
    assert!(dest.exists(), "{} should exist", dest.display());
    assert_eq!(
        fs::read(&src).unwrap(),
        fs::read(&dest).unwrap(),
        "{} should be byte-identical to its fixture",
        dest.display()
    );
}

#[test]
fn test_full_setup_from_empty_host_tree() {
    let (_tmp, ws) = host_project();

    // Clean simulated status: preflight passes without a real repository.
    preflight::validate(&ws.app_root, &FakeStatus(None)).unwrap();
    transplant::run(&ws, transplant::steps()).unwrap();

    for step in transplant::steps() {
        assert_artifact_matches_fixture(&ws, step.fixture, step.dest);
    }

    // The Rails-side partial landed above the client root.
    let partial = ws
        .app_root
        .join("../app/views/application/_client.html.erb");
    assert!(partial.exists());
}

#[test]
fn test_setup_is_rerunnable() {
    let (_tmp, ws) = host_project();

    transplant::run(&ws, transplant::steps()).unwrap();
    transplant::run(&ws, transplant::steps()).unwrap();

    for step in transplant::steps() {
        assert_artifact_matches_fixture(&ws, step.fixture, step.dest);
    }
}

#[test]
fn test_scaffold_leftovers_in_public_are_removed() {
    let (_tmp, ws) = host_project();
    let public = ws.app_root.join("public");
    fs::create_dir_all(&public).unwrap();
    fs::write(public.join("manifest.json"), b"{}").unwrap();
    fs::write(public.join("favicon.ico"), b"icon").unwrap();

    transplant::run(&ws, transplant::steps()).unwrap();

    let mut names: Vec<_> = fs::read_dir(&public)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["index.html".to_string()]);
}

#[test]
fn test_dirty_tree_blocks_the_whole_run() {
    let (_tmp, ws) = host_project();

    let err = preflight::validate(
        &ws.app_root,
        &FakeStatus(Some(" M src/App.tsx\n?? notes.md")),
    )
    .unwrap_err();

    assert_eq!(
        err,
        PreflightError::DirtyWorkingTree(vec![
            "src/App.tsx".to_string(),
            "notes.md".to_string(),
        ])
    );

    // Nothing was written: the client root is still empty.
    assert_eq!(fs::read_dir(&ws.app_root).unwrap().count(), 0);
}

#[test]
fn test_wrong_directory_blocks_before_status() {
    let err =
        preflight::validate(Path::new("/work/project/server"), &FakeStatus(None)).unwrap_err();
    assert_eq!(err, PreflightError::WrongDirectory);
}
