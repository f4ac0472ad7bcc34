// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Tern compiler CLI.

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use tern_diagnostics::formatter::DiagnosticFormatter;
use tern_diagnostics::json::{to_json_report, to_json_string};
use tern_diagnostics::Diagnostic;

#[derive(Parser)]
#[command(name = "tern")]
#[command(version, about = "Compile Tern syntax trees to JavaScript modules")]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lower a JSON syntax tree to a JavaScript module
    Compile(CompileArgs),
    /// Describe an error code
    Explain {
        /// Error code, e.g. E0301
        code: String,
    },
}

#[derive(Args)]
pub struct CompileArgs {
    /// Syntax tree produced by the Tern parser
    pub input: PathBuf,

    /// Write JavaScript here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Tern source the tree was parsed from, for error context
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Module the operator runtime is imported from
    #[arg(long, default_value = tern_lower::options::DEFAULT_RUNTIME_MODULE)]
    pub runtime_module: String,

    /// Do not import runtime functions
    #[arg(long)]
    pub no_runtime_import: bool,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 2)]
    pub indent: usize,

    /// How errors are reported
    #[arg(long, value_enum, default_value_t = Format::Human)]
    pub error_format: Format,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Human,
    Json,
}

fn main() {
    let cli = Cli::parse();
    output::init();
    init_logging(cli.verbose);

    match cli.command {
        Command::Compile(args) => commands::compile::cmd_compile(&args),
        Command::Explain { code } => commands::explain::cmd_explain(&code),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Report diagnostics from one phase: rendered to stderr, or as a JSON
/// report on stdout.
pub fn show_diagnostics(
    diags: &[Diagnostic],
    source: &str,
    file: &str,
    phase: &str,
    format: Format,
) {
    match format {
        Format::Human => {
            let formatter = DiagnosticFormatter::new(source).with_file_name(file);
            for diag in diags {
                eprint!("{}", formatter.format(diag));
            }
        }
        Format::Json => {
            let report = to_json_report(diags, source, file, phase);
            println!("{}", to_json_string(&report));
        }
    }
}
