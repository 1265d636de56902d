//! lox: Scan Lox source files or REPL input into tokens.
//!
//! Usage:
//!   lox [options] [FILE]
//!
//! With a file, the tokens are printed and the process exits with 65 if any
//! lexical error was found. Without a file, an interactive prompt scans each
//! line as it is entered.

mod error;
mod render;
mod repl;

use clap::Parser as ClapParser;
use error::{CliError, EXIT_DATA_ERROR, EXIT_USAGE};
use lox_diagnostics::DiagnosticCollection;
use render::{format_tokens, ColorChoice, Format, Renderer};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(ClapParser, Debug)]
#[command(name = "lox", version, about = "Lox scanner - tokenize Lox source code")]
pub struct Cli {
    /// Lox file to scan. Starts a prompt when omitted.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Token dump format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// When to color diagnostics.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Only report errors; do not print tokens.
    #[arg(short, long)]
    quiet: bool,

    /// Log scanner activity to stderr (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { EXIT_USAGE } else { 0 });
        }
    };

    init_tracing(cli.verbose);

    let result = match cli.file {
        Some(ref path) => run_file(&cli, path),
        None => repl::run_prompt(&cli).map(|()| 0),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            print_error(&e, cli.color.enabled());
            process::exit(e.exit_code());
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run_file(cli: &Cli, path: &Path) -> error::Result<i32> {
    let source = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(file = %path.display(), chars = source.chars().count(), "scanning file");

    let file = path.display().to_string();
    let had_error = run(cli, &source, Some(&file))?;
    Ok(if had_error { EXIT_DATA_ERROR } else { 0 })
}

/// Scan one source, print its tokens and diagnostics, and return whether any
/// error was reported.
pub(crate) fn run(cli: &Cli, source: &str, file: Option<&str>) -> error::Result<bool> {
    let mut diagnostics = DiagnosticCollection::new();
    let tokens = lox_scanner::scan_tokens(source, &mut diagnostics);
    debug!(tokens = tokens.len(), errors = diagnostics.error_count(), "scanned");

    if !cli.quiet {
        let dump = format_tokens(&tokens, cli.format)?;
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(dump.as_bytes());
        let _ = stdout.flush();
    }

    let renderer = Renderer::new(source, cli.color.enabled());
    for diag in diagnostics.diagnostics() {
        let diag = match file {
            Some(file) => diag.clone().with_file(file),
            None => diag.clone(),
        };
        eprint!("{}", renderer.render(&diag));
    }
    if diagnostics.has_errors() && file.is_some() {
        eprintln!("\n{}", renderer.summary(diagnostics.error_count()));
    }

    Ok(diagnostics.has_errors())
}

fn print_error(err: &CliError, color: bool) {
    if color {
        eprintln!("\x1b[1m\x1b[31merror\x1b[0m: {}", err);
    } else {
        eprintln!("error: {}", err);
    }
}
