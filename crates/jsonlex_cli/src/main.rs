//! jsonlex: Tokenize or check JSON files.
//!
//! Usage:
//!   jsonlex [options] [file...]
//!
//! Reads standard input when no file (or `-`) is given.

mod error;
mod input;
mod output;
mod tracing_config;

use clap::Parser as ClapParser;
use error::CliError;
use input::Source;
use jsonlex_diagnostics::DiagnosticCollection;
use jsonlex_scanner::{check_file, scan, Token, TokenKind};
use output::OutputFormat;
use rayon::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use std::process;
use tracing::{debug, trace};

#[derive(ClapParser, Debug)]
#[command(name = "jsonlex", about = "Lossless JSON lexical scanner", version)]
struct Cli {
    /// JSON files to scan. Use `-` for standard input.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Report lexical errors instead of listing tokens.
    #[arg(long)]
    check: bool,

    /// Output format for token listings and diagnostics.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// List token kinds only.
    #[arg(long = "kinds-only")]
    kinds_only: bool,

    /// Print diagnostics as plain lines, without colors or source snippets.
    #[arg(long)]
    plain: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Everything produced for one input, ready to print.
struct FileReport {
    source: Source,
    listing: String,
    /// Filled only by `--check`; a token listing reports errors in-band.
    diagnostics: DiagnosticCollection,
}

impl FileReport {
    /// Exit status this input contributes.
    fn exit_code(&self) -> i32 {
        if self.diagnostics.has_errors() {
            1
        } else {
            0
        }
    }
}

fn main() {
    tracing_config::init_tracing();
    let cli = Cli::parse();
    process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let paths = if cli.files.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        cli.files.clone()
    };

    let reports: Vec<Result<FileReport, CliError>> =
        paths.par_iter().map(|path| process_file(cli, path)).collect();

    let mut exit_code = 0;
    let mut error_count = 0;
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    for report in reports {
        let report = match report {
            Ok(report) => report,
            Err(err) => {
                print_error(&err.to_string());
                exit_code = exit_code.max(err.exit_code());
                continue;
            }
        };

        if let Err(err) = stdout.write_all(report.listing.as_bytes()) {
            print_error(&CliError::from(err).to_string());
            return 3;
        }

        error_count += report.diagnostics.error_count();
        exit_code = exit_code.max(report.exit_code());
        if cli.format == OutputFormat::Text && !report.diagnostics.is_empty() {
            print_diagnostics(cli, &report);
        }
    }

    if cli.format == OutputFormat::Text && error_count > 0 {
        let suffix = if error_count == 1 { "" } else { "s" };
        if !cli.plain && atty_is_terminal() {
            eprintln!("\n{}Found {} error{}.{}", RED, error_count, suffix, RESET);
        } else {
            eprintln!("\nFound {} error{}.", error_count, suffix);
        }
    }

    exit_code
}

/// Lex one input and render its output.
fn process_file(cli: &Cli, path: &std::path::Path) -> Result<FileReport, CliError> {
    let source = Source::load(path)?;
    let text = source.text()?;
    debug!(file = %source.name, bytes = text.len(), "lexing");

    let mut diagnostics = DiagnosticCollection::new();
    let mut listing = String::new();

    if cli.check {
        diagnostics = check_file(&source.name, text);
        if cli.format == OutputFormat::Json {
            for diagnostic in diagnostics.diagnostics() {
                output::write_diagnostic_json(&mut listing, diagnostic)?;
            }
        }
    } else {
        let tokens: Vec<Token> = scan(text)
            .inspect(|token| trace!(kind = %token.kind, start = token.start, count = token.count, "token"))
            .collect();
        debug!(
            file = %source.name,
            tokens = tokens.len(),
            failed = tokens.last().is_some_and(|t| t.kind == TokenKind::Undefined),
            "lexed"
        );
        output::write_tokens(&mut listing, &source.name, text, &tokens, cli.format, cli.kinds_only)?;
    }

    Ok(FileReport {
        source,
        listing,
        diagnostics,
    })
}

fn print_diagnostics(cli: &Cli, report: &FileReport) {
    let use_color = !cli.plain && atty_is_terminal();
    // Only reached for sources whose text has already been validated.
    let text = report.source.text().unwrap_or_default();
    for diagnostic in report.diagnostics.diagnostics() {
        if use_color {
            let pretty = output::pretty_report(diagnostic, &report.source.name, text);
            eprintln!("{:?}", pretty);
        } else {
            eprintln!("{}", diagnostic);
        }
    }
    if use_color {
        eprintln!(
            "{}{}: {} lexical error(s), {} warning(s){}",
            GRAY,
            report.source.name,
            report.diagnostics.error_count(),
            report.diagnostics.len() - report.diagnostics.error_count(),
            RESET
        );
    }
}

fn print_error(msg: &str) {
    if atty_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn atty_is_terminal() -> bool {
    // On Unix, check if stderr is a terminal
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["jsonlex"]).unwrap();
        assert!(cli.files.is_empty());
        assert!(!cli.check);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.kinds_only);
        assert!(!cli.plain);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "jsonlex", "--check", "--format", "json", "--kinds-only", "--plain", "a.json", "-",
        ])
        .unwrap();
        assert!(cli.check);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.kinds_only);
        assert!(cli.plain);
        assert_eq!(cli.files, vec![PathBuf::from("a.json"), PathBuf::from("-")]);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["jsonlex", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_process_file_lists_tokens() {
        let path = std::env::temp_dir().join(format!("jsonlex-cli-{}.json", process::id()));
        std::fs::write(&path, "[true, 1]").unwrap();
        let cli = Cli::try_parse_from(["jsonlex", "--kinds-only"]).unwrap();
        let report = process_file(&cli, &path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(
            report.listing,
            "BeginArray\nTrue\nComma\nNumber\nEndArray\nEndOfFile\n"
        );
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_process_file_checks() {
        let path = std::env::temp_dir().join(format!("jsonlex-cli-check-{}.json", process::id()));
        std::fs::write(&path, "{\"a\": 1.2.3}").unwrap();
        let cli = Cli::try_parse_from(["jsonlex", "--check", "--format", "json"]).unwrap();
        let report = process_file(&cli, &path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(report.diagnostics.error_count(), 1);
        assert!(report.listing.contains("\"code\":\"J1005\""));
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_listing_reports_errors_in_band_and_exits_zero() {
        let path = std::env::temp_dir().join(format!("jsonlex-cli-list-{}.json", process::id()));
        std::fs::write(&path, "[1..2]").unwrap();
        let cli = Cli::try_parse_from(["jsonlex", "--kinds-only"]).unwrap();
        let report = process_file(&cli, &path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(report.listing, "BeginArray\nUndefined\n");
        assert!(report.diagnostics.is_empty());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_check_warnings_do_not_fail() {
        let path = std::env::temp_dir().join(format!("jsonlex-cli-warn-{}.json", process::id()));
        std::fs::write(&path, "[01, -.5]").unwrap();
        let cli = Cli::try_parse_from(["jsonlex", "--check", "--format", "json"]).unwrap();
        let report = process_file(&cli, &path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(report.diagnostics.len(), 2);
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.listing.matches("\"category\":\"warning\"").count(), 2);
    }
}
