// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! JavaScript output tree and printer for the Tern compiler.

pub mod ast;
mod config;
mod ident;
mod printer;

pub use ast::*;
pub use config::PrintConfig;
pub use ident::{is_binding_name, is_identifier, is_reserved};

/// Print a module with default configuration.
pub fn print_program(program: &Program) -> String {
    print_program_with_config(program, &PrintConfig::default())
}

/// Print a module with custom configuration.
pub fn print_program_with_config(program: &Program, config: &PrintConfig) -> String {
    let mut p = printer::Printer::new(config);
    p.format_program(program);
    p.finish()
}

/// Print one expression, without a trailing newline.
pub fn print_expr(expr: &Expr) -> String {
    let config = PrintConfig::default();
    let mut p = printer::Printer::new(&config);
    p.format_expr(expr);
    p.finish().trim_end().to_string()
}
