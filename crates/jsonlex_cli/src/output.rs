//! Rendering tokens and diagnostics.

use crate::error::CliError;
use clap::ValueEnum;
use jsonlex_diagnostics::Diagnostic;
use jsonlex_scanner::Token;
use miette::{LabeledSpan, NamedSource, Report, Severity};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns: offset, length, kind, text.
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    file: &'a str,
    kind: &'static str,
    start: usize,
    count: usize,
    text: &'a str,
}

#[derive(Serialize)]
struct DiagnosticRecord<'a> {
    file: Option<&'a str>,
    start: Option<usize>,
    length: Option<usize>,
    code: String,
    category: String,
    message: &'a str,
}

/// Render a token listing.
pub fn write_tokens(
    out: &mut String,
    file: &str,
    source: &str,
    tokens: &[Token],
    format: OutputFormat,
    kinds_only: bool,
) -> Result<(), CliError> {
    for token in tokens {
        let text = token.slice(source);
        match (format, kinds_only) {
            (OutputFormat::Text, true) => {
                out.push_str(token.kind.as_str());
                out.push('\n');
            }
            (OutputFormat::Text, false) => {
                out.push_str(&format!(
                    "{:>8} {:>6}  {:<12} {:?}\n",
                    token.start, token.count, token.kind, text
                ));
            }
            (OutputFormat::Json, _) => {
                let record = TokenRecord {
                    file,
                    kind: token.kind.as_str(),
                    start: token.start,
                    count: token.count,
                    text: if kinds_only { "" } else { text },
                };
                out.push_str(&serde_json::to_string(&record)?);
                out.push('\n');
            }
        }
    }
    Ok(())
}

/// Render one diagnostic as a JSON line.
pub fn write_diagnostic_json(out: &mut String, diagnostic: &Diagnostic) -> Result<(), CliError> {
    let record = DiagnosticRecord {
        file: diagnostic.file.as_deref(),
        start: diagnostic.span.map(|s| s.start),
        length: diagnostic.span.map(|s| s.length),
        code: format!("J{}", diagnostic.code),
        category: diagnostic.category.to_string(),
        message: &diagnostic.message_text,
    };
    out.push_str(&serde_json::to_string(&record)?);
    out.push('\n');
    Ok(())
}

/// Build a report that renders the diagnostic with a labelled source snippet.
pub fn pretty_report(diagnostic: &Diagnostic, file: &str, source: &str) -> Report {
    let span = diagnostic.span.unwrap_or_default();
    let label = LabeledSpan::at(span.to_range(), "here");
    let severity = if diagnostic.is_error() {
        Severity::Error
    } else {
        Severity::Warning
    };
    miette::miette!(
        severity = severity,
        labels = vec![label],
        code = format!("J{}", diagnostic.code),
        "{}",
        diagnostic.message_text
    )
    .with_source_code(NamedSource::new(file, source.to_string()))
}
