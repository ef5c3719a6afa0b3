//! Single source of truth for the rewire filesystem layout.
//!
//! This module defines WHERE files live. It has no I/O beyond locating the
//! tool's own fixture directory, no validation, no business logic.
//!
//! # Tool-Owned Paths (own root)
//!
//! ```text
//! <own root>/
//! └── fixtures/
//!     ├── _client.html.erb     # Rails partial that embeds the client
//!     ├── index.html           # Minimal dev entry point
//!     ├── index.prod.html      # Production ERB template
//!     ├── tsconfig.json        # Relaxed strictness + src/ alias
//!     ├── .env.development     # SKIP_PREFLIGHT_CHECK + PORT=3001
//!     └── .env.production      # SKIP_PREFLIGHT_CHECK
//! ```
//!
//! # Host-Project Paths (relative to the client/ directory)
//!
//! ```text
//! client/
//! ├── public/index.html
//! ├── fixtures/index.prod.html
//! ├── tsconfig.json
//! ├── .env.development
//! ├── .env.production
//! └── ../app/views/application/_client.html.erb   # Rails side
//! ```

use std::path::{Path, PathBuf};

/// Directory holding the fixtures shipped with the tool.
///
/// Looks for a `fixtures/` directory next to the running binary or any of
/// its ancestors (installed layout), falling back to the crate root
/// (development layout, also what `cargo run` and the test harness see).
pub fn own_root() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        for dir in exe.ancestors().skip(1) {
            if dir.join("fixtures").is_dir() {
                return dir.to_path_buf();
            }
        }
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Resolve a shipped fixture: `{own}/fixtures/{name}`
pub fn fixture(own: &Path, name: &str) -> PathBuf {
    own.join("fixtures").join(name)
}

/// Resolve a path inside the host project being rewired.
///
/// `rel` may reach above the client root (the Rails partial lives at
/// `../app/views/...`), so this is a plain join, not a sandbox.
pub fn app(root: &Path, rel: &str) -> PathBuf {
    root.join(rel)
}
