//! Console progress output: a colored heading followed by dash-prefixed
//! detail lines and a trailing blank line. Log-only; nothing parses it and
//! nothing downstream depends on it.

use colored::Colorize;

/// Print a blue step heading and its detail lines.
pub fn announce(heading: &str, details: &[&str]) {
    println!("{}", heading.blue());
    for line in details {
        println!("- {}", line);
    }
    println!();
}

/// Same shape, green heading. Used for the completion banner.
pub fn success(heading: &str, details: &[&str]) {
    println!("{}", heading.green());
    for line in details {
        println!("- {}", line);
    }
    println!();
}
