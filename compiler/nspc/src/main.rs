//! Newspeak CLI
//!
//! Runs programs from a file or from standard input.

use std::process::ExitCode;

use nsp_diagnostic::emitter::ColorMode;
use nspc::commands::{lex_file, parse_file, run_file, run_stdin};
use nspc::tracing_setup::init_tracing;

/// Exit status for a command line that could not be understood.
const USAGE_ERROR: u8 = 2;

fn main() -> ExitCode {
    init_tracing();

    let mut color = ColorMode::Auto;
    let mut args = Vec::new();
    for arg in std::env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--color=") {
            let Some(mode) = ColorMode::from_flag(value) else {
                eprintln!("error: invalid value '{value}' for --color (expected auto, always or never)");
                return ExitCode::from(USAGE_ERROR);
            };
            color = mode;
        } else {
            args.push(arg);
        }
    }
    if color == ColorMode::Auto && std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        color = ColorMode::Never;
    }

    let Some(command) = args.first() else {
        return run_stdin(color);
    };

    match command.as_str() {
        "run" | "lex" | "parse" => {
            let Some(path) = args.get(1) else {
                eprintln!("error: missing file path");
                eprintln!("Usage: nsp {command} <file.nsp>");
                return ExitCode::from(USAGE_ERROR);
            };
            if let Some(extra) = args.get(2) {
                eprintln!("error: unexpected argument '{extra}'");
                return ExitCode::from(USAGE_ERROR);
            }
            match command.as_str() {
                "lex" => lex_file(path, color),
                "parse" => parse_file(path, color),
                _ => run_file(path, color),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("nsp {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        flag if flag.starts_with('-') => {
            eprintln!("error: unknown option '{flag}'");
            eprintln!();
            print_usage();
            ExitCode::from(USAGE_ERROR)
        }
        path => {
            if let Some(extra) = args.get(1) {
                eprintln!("error: unexpected argument '{extra}'");
                return ExitCode::from(USAGE_ERROR);
            }
            run_file(path, color)
        }
    }
}

fn print_usage() {
    println!("Newspeak interpreter");
    println!();
    println!("Usage: nsp [options] [command] [file.nsp]");
    println!();
    println!("Commands:");
    println!("  <file.nsp>          Run a program");
    println!("  run <file.nsp>      Run a program");
    println!("  lex <file.nsp>      Show the tokens of each statement");
    println!("  parse <file.nsp>    Show the syntax tree of each statement");
    println!("  help                Show this message");
    println!("  version             Show version information");
    println!();
    println!("With no file, statements are read from standard input.");
    println!();
    println!("Options:");
    println!("  --color=<when>      Colour diagnostics: auto, always or never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG            Enable tracing output on stderr, e.g. RUST_LOG=debug");
    println!("  NO_COLOR            Disable colour when --color=auto");
}
