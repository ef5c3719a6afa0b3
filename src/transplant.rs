//! The fixture transplant sequence: a fixed, ordered list of file moves
//! that rewire a generated client app to its Rails host.
//!
//! Steps are declarative descriptors executed strictly in declaration
//! order. Order matters once: the `public/` entry point uses
//! [`Mode::EmptyDirThenCopy`], so the seed file always lands in a fresh
//! directory. Any I/O failure halts the run at that step; recovery is
//! `git checkout` plus a re-run, which the preflight clean-tree check
//! guarantees is safe.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::paths;
use crate::report;

/// How a fixture lands at its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Copy the fixture over the destination, creating parent directories
    /// as needed, overwriting without confirmation.
    CopyOverwrite,
    /// Recursively delete the contents of the destination's directory
    /// (creating it if absent, leaving it present and empty), then copy.
    EmptyDirThenCopy,
}

/// One ordered unit of work: a shipped fixture bound to a destination
/// inside the host project.
pub struct TransplantStep {
    pub name: &'static str,
    /// Source file name under `<own root>/fixtures/`.
    pub fixture: &'static str,
    /// Destination, relative to the client root.
    pub dest: &'static str,
    pub mode: Mode,
    pub heading: &'static str,
    pub details: &'static [&'static str],
}

/// The two roots a run operates between: the tool's own fixtures on one
/// side, the client app being rewired on the other.
pub struct Workspace {
    pub own_root: PathBuf,
    pub app_root: PathBuf,
}

#[derive(Debug, Error)]
#[error("step {step} ({name}) failed: {source}")]
pub struct TransplantError {
    /// 1-based index of the failed step.
    pub step: usize,
    pub name: &'static str,
    #[source]
    pub source: io::Error,
}

const STEPS: [TransplantStep; 6] = [
    TransplantStep {
        name: "client partial",
        fixture: "_client.html.erb",
        dest: "../app/views/application/_client.html.erb",
        mode: Mode::CopyOverwrite,
        heading: "Creating app/views/application/_client.html.erb...",
        details: &[
            "This allows you to use <%= render \"client\" %> anywhere in your rails templates.",
            "It links to the bundles served from webpack-dev-server in development and the production template otherwise.",
        ],
    },
    TransplantStep {
        name: "public entry point",
        fixture: "index.html",
        dest: "public/index.html",
        mode: Mode::EmptyDirThenCopy,
        heading: "Replacing the contents of public/ with index.html...",
        details: &[
            "The generated static files already live in the rails app.",
            "index.html is just a <div id=\"root\"> element that HTMLWebpackPlugin injects the CSS and JS tags into in development.",
        ],
    },
    TransplantStep {
        name: "production template",
        fixture: "index.prod.html",
        dest: "fixtures/index.prod.html",
        mode: Mode::CopyOverwrite,
        heading: "Creating fixtures/index.prod.html...",
        details: &[
            "An erb file with <% content_for :extra_head %> and <% content_for :extra_js %> tags, served by rails in production.",
        ],
    },
    TransplantStep {
        name: "tsconfig",
        fixture: "tsconfig.json",
        dest: "tsconfig.json",
        mode: Mode::CopyOverwrite,
        heading: "Updating tsconfig.json...",
        details: &[
            "Sets strict: false and adds a src/ folder alias so imports like \"components/MyComponent\" work without relative paths.",
        ],
    },
    TransplantStep {
        name: "development env file",
        fixture: ".env.development",
        dest: ".env.development",
        mode: Mode::CopyOverwrite,
        heading: "Adding env variables to .env.development...",
        details: &[
            "Skips the preflight check (the rails root has its own package.json) and sets the port to 3001 since rails runs on 3000.",
        ],
    },
    TransplantStep {
        name: "production env file",
        fixture: ".env.production",
        dest: ".env.production",
        mode: Mode::CopyOverwrite,
        heading: "Adding env variables to .env.production...",
        details: &["Skips the preflight check during the production build too."],
    },
];

/// The fixed sequence, in execution order.
pub fn steps() -> &'static [TransplantStep] {
    &STEPS
}

/// Execute every step in order, announcing each one first. Halts at the
/// first failure; no retry, no rollback.
pub fn run(ws: &Workspace, steps: &[TransplantStep]) -> Result<(), TransplantError> {
    for (index, step) in steps.iter().enumerate() {
        report::announce(step.heading, step.details);
        execute(ws, step).map_err(|source| TransplantError {
            step: index + 1,
            name: step.name,
            source,
        })?;
    }
    Ok(())
}

fn execute(ws: &Workspace, step: &TransplantStep) -> io::Result<()> {
    let src = paths::fixture(&ws.own_root, step.fixture);
    let dest = paths::app(&ws.app_root, step.dest);

    if step.mode == Mode::EmptyDirThenCopy {
        if let Some(dir) = dest.parent() {
            empty_dir(dir)?;
        }
    }
    copy_overwrite(&src, &dest)
}

/// Copy `src` over `dest`, creating parent directories as needed.
fn copy_overwrite(src: &Path, dest: &Path) -> io::Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(src, dest)?;
    Ok(())
}

/// Delete everything inside `dir`, leaving (or creating) the directory
/// itself.
fn empty_dir(dir: &Path) -> io::Result<()> {
    if !dir.exists() {
        return fs::create_dir_all(dir);
    }
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}
