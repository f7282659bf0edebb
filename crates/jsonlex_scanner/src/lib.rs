//! jsonlex_scanner: Lossless lexical scanner for JSON text.
//!
//! Converts a borrowed JSON source into a lazy sequence of tokens. Tokens
//! carry a kind and an offset/length pair into the source; no text is
//! copied, escapes are not decoded and numbers are not interpreted.
//!
//! Malformed input is reported in-band as [`TokenKind::Undefined`] tokens.
//! The [`check`] module turns those into diagnostics.

mod char_codes;
pub mod check;
mod scanner;
mod token;

pub use check::{check, check_file, diagnose, lint_number};
pub use scanner::{scan, Scanner};
pub use token::{Token, TokenKind};
