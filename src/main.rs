use std::env;
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use rewire::git::GitStatus;
use rewire::paths;
use rewire::preflight::{self, PreflightError};
use rewire::report;
use rewire::transplant::{self, Workspace};

#[derive(Parser)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Rewires a generated client app into its Rails host. Run once, from client/, on a clean git tree.",
    long_about = None
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Downstream build tooling keys off these; force production semantics
    // before anything else runs, overriding any inherited value.
    env::set_var("BABEL_ENV", "production");
    env::set_var("NODE_ENV", "production");

    let app_root = env::current_dir()?;
    let status = GitStatus::new(&app_root);
    if let Err(err) = preflight::validate(&app_root, &status) {
        print_preflight_error(&err);
        process::exit(1);
    }

    let ws = Workspace {
        own_root: paths::own_root(),
        app_root,
    };

    report::announce("Setting up your project...", &[]);

    if let Err(err) = transplant::run(&ws, transplant::steps()) {
        eprintln!("{}", err.to_string().red());
        process::exit(1);
    }

    report::success("Setup complete.", &[]);
    report::announce(
        "Run `bin/rails dev:backend` in one terminal and `bin/rails dev:client` in another to get started.",
        &["Happy coding!"],
    );

    Ok(())
}

fn print_preflight_error(err: &PreflightError) {
    match err {
        PreflightError::WrongDirectory => {
            eprintln!();
            eprintln!(
                "{}",
                "You must run this command in the client/ directory".red()
            );
            eprintln!();
        }
        PreflightError::DirtyWorkingTree(changes) => {
            eprintln!(
                "{}",
                "This git repository has untracked files or uncommitted changes:".red()
            );
            eprintln!();
            for change in changes {
                eprintln!("  {}", change);
            }
            eprintln!();
            eprintln!(
                "{}",
                "Remove untracked files, stash or commit any changes, and try again.".red()
            );
        }
    }
}
