// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! `tern explain <code>`.

use std::process;

use colored::Colorize;
use tern_diagnostics::codes::ErrorCodeRegistry;

use crate::output;

pub fn cmd_explain(code: &str) {
    let registry = ErrorCodeRegistry::default();

    let Some(info) = registry.get(code) else {
        eprintln!("{}: unknown error code `{}`", output::error_label(), code);
        eprintln!();
        eprintln!("Error codes use the format E0NNN (e.g., E0100, E0301).");
        process::exit(1);
    };

    println!("{}[{}]: {}", "error".red().bold(), output::code(info.code), info.title.bold());
    println!();
    println!("  {}: {}", output::section_header("Category"), info.category);
    println!();
    for line in info.description.lines() {
        println!("  {}", line);
    }
}
