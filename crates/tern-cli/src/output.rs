// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! CLI output styling.
//!
//! Respects NO_COLOR and FORCE_COLOR. Colors are disabled automatically
//! when output is piped.

use colored::{ColoredString, Colorize};

/// Initialize color support based on environment. Call once at startup.
pub fn init() {
    if std::env::var("NO_COLOR").is_ok() {
        colored::control::set_override(false);
    } else if std::env::var("FORCE_COLOR").is_ok() {
        colored::control::set_override(true);
    }
}

pub fn error_label() -> ColoredString {
    "error".red().bold()
}

pub fn file_path(path: &str) -> ColoredString {
    path.underline()
}

pub fn code(code: &str) -> ColoredString {
    code.red().bold()
}

pub fn section_header(header: &str) -> ColoredString {
    header.yellow().bold()
}
