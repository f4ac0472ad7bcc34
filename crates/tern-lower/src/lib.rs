// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Lowering from the Tern AST to JavaScript.
//!
//! The pipeline, leaves first:
//! - [`literal`] and [`operators`]: scalar literals and the operator →
//!   runtime-function table
//! - [`returns`]: tail-position normalization (`fix_returns`)
//! - statement and expression lowering
//! - the pattern-match compiler
//! - class and data-type lowering
//!
//! Every error is fatal for the unit being lowered.

mod class;
pub mod error;
pub mod literal;
mod lower;
pub mod names;
pub mod operators;
pub mod options;
mod pattern;
pub mod returns;
mod visit;

pub use error::{LowerError, LowerErrorKind};
pub use lower::Lowerer;
pub use options::LowerOptions;
pub use returns::fix_returns;

use tern_ast::Module;
use tern_js as js;

/// Lower one compilation unit.
pub fn lower_module(module: &Module, options: &LowerOptions) -> Result<js::Program, LowerError> {
    Lowerer::new(options).lower_module(module)
}

/// Lower and print one compilation unit.
pub fn compile(
    module: &Module,
    options: &LowerOptions,
    print: &js::PrintConfig,
) -> Result<String, LowerError> {
    let program = lower_module(module, options)?;
    Ok(js::print_program_with_config(&program, print))
}
