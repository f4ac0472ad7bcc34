// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! `tern compile`: JSON syntax tree → JavaScript module.

use std::fs;
use std::path::Path;
use std::process;

use log::{debug, info};
use tern_ast::Module;
use tern_diagnostics::ToDiagnostic;
use tern_js::PrintConfig;
use tern_lower::LowerOptions;

use crate::{output, show_diagnostics, CompileArgs};

pub fn cmd_compile(args: &CompileArgs) {
    let input = read_or_exit(&args.input);
    // Diagnostics point into the Tern source; without it they carry no
    // source context.
    let (source, file) = match &args.source {
        Some(path) => (read_or_exit(path), path.display().to_string()),
        None => (String::new(), args.input.display().to_string()),
    };

    let module: Module = match serde_json::from_str(&input) {
        Ok(module) => module,
        Err(e) => {
            show_diagnostics(&[e.to_diagnostic()], &source, &file, "decode", args.error_format);
            process::exit(1);
        }
    };
    info!(
        "decoded {} definitions from {}",
        module.definitions.len(),
        args.input.display()
    );

    let options = LowerOptions {
        runtime_module: args.runtime_module.clone(),
        runtime_import: !args.no_runtime_import,
    };
    let print = PrintConfig {
        indent_width: args.indent,
    };
    debug!("{options:?}, {print:?}");

    let js = match tern_lower::compile(&module, &options, &print) {
        Ok(js) => js,
        Err(e) => {
            show_diagnostics(&[e.to_diagnostic()], &source, &file, "lower", args.error_format);
            process::exit(1);
        }
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &js) {
                let path = path.display().to_string();
                eprintln!("{}: writing {}: {}", output::error_label(), output::file_path(&path), e);
                process::exit(1);
            }
            info!("wrote {} bytes to {}", js.len(), path.display());
        }
        None => print!("{js}"),
    }
}

fn read_or_exit(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            let path = path.display().to_string();
            eprintln!("{}: reading {}: {}", output::error_label(), output::file_path(&path), e);
            process::exit(1);
        }
    }
}
