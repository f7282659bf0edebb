//! Lexical checking: run one pass and turn its failure, if any, into a
//! diagnostic, warning about numbers outside standard JSON form on the way.

use crate::char_codes::{
    is_digit, DOT, E_LOWER, E_UPPER, FALSE_KEYWORD, MINUS, NULL_KEYWORD, PLUS, TRUE_KEYWORD,
};
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};
use jsonlex_core::text::TextSpan;
use jsonlex_diagnostics::{messages, Diagnostic, DiagnosticCollection};
use tracing::debug;

const LITERAL_KEYWORDS: [&str; 3] = [FALSE_KEYWORD, TRUE_KEYWORD, NULL_KEYWORD];

/// Explain an `Undefined` token scanned from `source`.
///
/// Returns `None` for any other kind of token. The reason is recovered from
/// the text around the token, since the token itself only carries a span.
pub fn diagnose(token: Token, source: &str) -> Option<Diagnostic> {
    if token.kind != TokenKind::Undefined {
        return None;
    }

    let span = token.span();
    let rest = &source[token.start..];
    let current = rest.chars().next();
    let previous = source[..token.start].chars().next_back();

    let diagnostic = if token.count > 0 && rest.starts_with('"') {
        Diagnostic::at(span, &messages::LINE_BREAK_IN_STRING_LITERAL, &[])
    } else if token.count == 1 && current == Some('.') {
        Diagnostic::at(span, &messages::UNEXPECTED_DECIMAL_POINT, &[])
    } else if token.count == 1 && matches!(current, Some('e' | 'E')) {
        Diagnostic::at(span, &messages::UNEXPECTED_EXPONENT_MARKER, &[])
    } else if current.is_none() {
        // Only a number cut off by the end of the source stops here.
        Diagnostic::at(span, &messages::UNEXPECTED_END_OF_INPUT, &[])
    } else if matches!(previous, Some('.' | 'e' | 'E' | '+' | '-')) {
        Diagnostic::at(span, &messages::NUMBER_MUST_END_WITH_DIGIT, &[])
    } else if matches!(current, Some('-' | '0'..='9')) {
        let terminator = rest[number_len(rest)..]
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default();
        Diagnostic::at(span, &messages::INVALID_NUMBER_TERMINATOR_0, &[&terminator])
    } else if let Some(&keyword) = LITERAL_KEYWORDS.iter().find(|kw| rest.starts_with(**kw)) {
        Diagnostic::at(span, &messages::INVALID_LITERAL_TERMINATOR_0, &[keyword])
    } else {
        let ch = current.map(String::from).unwrap_or_default();
        Diagnostic::at(span, &messages::UNEXPECTED_CHARACTER_0, &[&ch])
    };

    Some(diagnostic)
}

/// Flag a `Number` token whose shape the scanner accepts but standard JSON
/// does not: a missing integer part (`-.5`, `-e5`), a leading zero (`01`) or
/// a decimal point without a following digit (`1.e5`).
pub fn lint_number(token: Token, source: &str) -> Option<Diagnostic> {
    if token.kind != TokenKind::Number {
        return None;
    }

    let text = token.slice(source);
    let bytes = text.as_bytes();
    let digits = if bytes[0] == MINUS { &bytes[1..] } else { bytes };
    let missing_integer = !digits.first().copied().is_some_and(is_digit);
    let leading_zero = digits.first() == Some(&b'0') && digits.get(1).copied().is_some_and(is_digit);
    let bare_point = bytes
        .iter()
        .position(|&b| b == DOT)
        .is_some_and(|dot| !bytes.get(dot + 1).copied().is_some_and(is_digit));

    (missing_integer || leading_zero || bare_point)
        .then(|| Diagnostic::at(token.span(), &messages::NON_STANDARD_NUMBER_0, &[text]))
}

/// Length of the number shape at the start of `number`, as the scanner walks
/// it: digits and decimal points, and exponent markers with an optional sign.
fn number_len(number: &str) -> usize {
    let bytes = number.as_bytes();
    let mut pos = 1;
    while let Some(&byte) = bytes.get(pos) {
        match byte {
            b'0'..=b'9' | DOT => pos += 1,
            E_LOWER | E_UPPER => {
                pos += 1;
                if matches!(bytes.get(pos), Some(&(PLUS | MINUS))) {
                    pos += 1;
                }
            }
            _ => break,
        }
    }
    pos
}

/// Lex `source` once and collect its lexical diagnostics.
///
/// Reports the terminating `Undefined` token, or an unterminated string when
/// the pass ran into the end of the source inside one. Numbers outside
/// standard JSON form are reported as warnings.
pub fn check(source: &str) -> DiagnosticCollection {
    let mut diagnostics = DiagnosticCollection::new();
    let mut scanner = Scanner::new(source);
    let mut token_count = 0usize;

    loop {
        let before = scanner.position();
        let Some(token) = scanner.next() else {
            break;
        };
        token_count += 1;

        match token.kind {
            TokenKind::Undefined => {
                if let Some(diagnostic) = diagnose(token, source) {
                    diagnostics.add(diagnostic);
                }
            }
            TokenKind::EndOfFile => {
                if let Some(open) = unterminated_string_start(source, before) {
                    diagnostics.add(Diagnostic::at(
                        TextSpan::from_bounds(open, source.len()),
                        &messages::UNTERMINATED_STRING_LITERAL,
                        &[],
                    ));
                }
            }
            TokenKind::Number => {
                if let Some(diagnostic) = lint_number(token, source) {
                    diagnostics.add(diagnostic);
                }
            }
            _ => {}
        }
    }

    debug!(
        bytes = source.len(),
        tokens = token_count,
        errors = diagnostics.error_count(),
        warnings = diagnostics.len() - diagnostics.error_count(),
        "checked source"
    );
    diagnostics
}

/// [`check`], with every diagnostic attributed to `file`.
pub fn check_file(file: &str, source: &str) -> DiagnosticCollection {
    let mut diagnostics = DiagnosticCollection::new();
    for diagnostic in check(source) {
        diagnostics.add(diagnostic.in_file(file));
    }
    diagnostics
}

/// Offset of the opening quote if the pull that started at `from` consumed an
/// unterminated string.
fn unterminated_string_start(source: &str, from: usize) -> Option<usize> {
    let rest = source[from..].trim_start();
    rest.starts_with('"').then(|| source.len() - rest.len())
}
