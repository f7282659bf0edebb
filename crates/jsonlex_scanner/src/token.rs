//! Tokens produced by the scanner.

use jsonlex_core::text::TextSpan;
use std::fmt;
use std::ops::Range;

/// The lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Malformed input. Ends a lexing pass.
    Undefined,
    /// End of the source. Ends a lexing pass.
    EndOfFile,
    BeginObject,
    EndObject,
    BeginArray,
    EndArray,
    Colon,
    Comma,
    /// A string, including both quotes. Escapes are not decoded.
    String,
    /// A number in its source form.
    Number,
    False,
    True,
    Null,

    // Reserved for an escape-aware string mode; never produced by the scanner.
    BeginEscapedString,
    RawStringData,
    EscapedQuotationMark,
    EscapedReverseSolidus,
    EscapedSolidus,
    EscapedBackspace,
    EscapedFormfeed,
    EscapedLinefeed,
    EscapedCarriageReturn,
    EscapedHorizontalTab,
    EscapedUnicodeHex,
    EndEscapedString,
}

impl TokenKind {
    /// Stable display name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Undefined => "Undefined",
            TokenKind::EndOfFile => "EndOfFile",
            TokenKind::BeginObject => "BeginObject",
            TokenKind::EndObject => "EndObject",
            TokenKind::BeginArray => "BeginArray",
            TokenKind::EndArray => "EndArray",
            TokenKind::Colon => "Colon",
            TokenKind::Comma => "Comma",
            TokenKind::String => "String",
            TokenKind::Number => "Number",
            TokenKind::False => "False",
            TokenKind::True => "True",
            TokenKind::Null => "Null",
            TokenKind::BeginEscapedString => "BeginEscapedString",
            TokenKind::RawStringData => "RawStringData",
            TokenKind::EscapedQuotationMark => "EscapedQuotationMark",
            TokenKind::EscapedReverseSolidus => "EscapedReverseSolidus",
            TokenKind::EscapedSolidus => "EscapedSolidus",
            TokenKind::EscapedBackspace => "EscapedBackspace",
            TokenKind::EscapedFormfeed => "EscapedFormfeed",
            TokenKind::EscapedLinefeed => "EscapedLinefeed",
            TokenKind::EscapedCarriageReturn => "EscapedCarriageReturn",
            TokenKind::EscapedHorizontalTab => "EscapedHorizontalTab",
            TokenKind::EscapedUnicodeHex => "EscapedUnicodeHex",
            TokenKind::EndEscapedString => "EndEscapedString",
        }
    }

    /// Whether this kind ends a lexing pass.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, TokenKind::Undefined | TokenKind::EndOfFile)
    }

    /// Single-character punctuation: `{ } [ ] : ,`.
    #[inline]
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            TokenKind::BeginObject
                | TokenKind::EndObject
                | TokenKind::BeginArray
                | TokenKind::EndArray
                | TokenKind::Colon
                | TokenKind::Comma
        )
    }

    /// `true`, `false` or `null`.
    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::False | TokenKind::True | TokenKind::Null)
    }

    /// Kinds reserved for escape decoding that the scanner never emits.
    #[inline]
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            TokenKind::BeginEscapedString
                | TokenKind::RawStringData
                | TokenKind::EscapedQuotationMark
                | TokenKind::EscapedReverseSolidus
                | TokenKind::EscapedSolidus
                | TokenKind::EscapedBackspace
                | TokenKind::EscapedFormfeed
                | TokenKind::EscapedLinefeed
                | TokenKind::EscapedCarriageReturn
                | TokenKind::EscapedHorizontalTab
                | TokenKind::EscapedUnicodeHex
                | TokenKind::EndEscapedString
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One lexical unit: a kind plus the half-open region `[start, start + count)`
/// of the source it was scanned from.
///
/// A token holds no text. Use [`Token::slice`] with the same source to read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// Byte offset of the first character of the token.
    pub start: usize,
    /// Length of the token in bytes. Zero for end-of-input and point errors.
    pub count: usize,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, start: usize, count: usize) -> Self {
        Self { kind, start, count }
    }

    /// A zero-length token at `pos`.
    #[inline]
    pub fn empty(kind: TokenKind, pos: usize) -> Self {
        Self::new(kind, pos, 0)
    }

    /// Whether this token ends a lexing pass (`Undefined` or `EndOfFile`).
    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind.is_terminal()
    }

    /// End offset of the token (exclusive).
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.count
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    #[inline]
    pub fn span(&self) -> TextSpan {
        TextSpan::new(self.start, self.count)
    }

    /// The text of this token in `source`.
    ///
    /// `source` must be the buffer the token was scanned from. Panics if the
    /// token does not fit in it.
    #[inline]
    pub fn slice<'s>(&self, source: &'s str) -> &'s str {
        &source[self.range()]
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.span())
    }
}
