//! The JSON scanner.
//!
//! A single-pass, forward-only state machine over a borrowed source. Each
//! call to [`Scanner::next_token`] skips whitespace, classifies the current
//! character and runs one sub-scanner, leaving the cursor just past the
//! consumed region.

use crate::char_codes::*;
use crate::token::{Token, TokenKind};
use memchr::memchr3;
use std::iter::FusedIterator;

const LITERALS: [(&str, TokenKind); 3] = [
    (FALSE_KEYWORD, TokenKind::False),
    (TRUE_KEYWORD, TokenKind::True),
    (NULL_KEYWORD, TokenKind::Null),
];

/// Lex `source` lazily, one token per pull.
///
/// The returned iterator yields tokens up to and including the first
/// `EndOfFile` or `Undefined` token, then stops.
pub fn scan(source: &str) -> Scanner<'_> {
    Scanner::new(source)
}

/// One lexing pass over a source buffer.
///
/// The scanner owns its cursor and is deliberately not `Clone`: a pass
/// cannot be resumed from two places. Start a new scanner to lex again.
#[derive(Debug)]
pub struct Scanner<'a> {
    /// The source text being scanned.
    source: &'a str,
    /// Current byte position in the source.
    pos: usize,
    /// The token most recently yielded by the iterator.
    last: Option<Token>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            last: None,
        }
    }

    /// Create a scanner positioned at byte offset `pos`.
    ///
    /// Panics if `pos` is past the end of `source` or not on a char boundary.
    pub fn with_offset(source: &'a str, pos: usize) -> Self {
        assert!(
            pos <= source.len() && source.is_char_boundary(pos),
            "scanner offset {pos} is not a character boundary of a {}-byte source",
            source.len()
        );
        Self {
            source,
            pos,
            last: None,
        }
    }

    /// The source being scanned.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The current cursor position.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The token most recently yielded through [`Iterator::next`].
    #[inline]
    pub fn last_token(&self) -> Option<Token> {
        self.last
    }

    #[inline]
    fn bytes(&self) -> &'a [u8] {
        self.source.as_bytes()
    }

    /// The character starting at byte offset `pos`, if any.
    #[inline]
    fn char_at(&self, pos: usize) -> Option<char> {
        self.source[pos..].chars().next()
    }

    /// The offset just past the character at `pos`, clamped to the end.
    #[inline]
    fn advance_past(&self, pos: usize) -> usize {
        pos + self.char_at(pos).map_or(0, char::len_utf8)
    }

    /// Whether the character at `pos` may follow a value. End of input may.
    #[inline]
    fn is_post_value_at(&self, pos: usize) -> bool {
        self.char_at(pos).map_or(true, is_post_value)
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    fn skip_whitespace(&mut self) {
        let bytes = self.bytes();
        while let Some(&byte) = bytes.get(self.pos) {
            if byte.is_ascii() {
                if !is_white_space(byte as char) {
                    return;
                }
                self.pos += 1;
            } else {
                match self.char_at(self.pos) {
                    Some(ch) if is_white_space(ch) => self.pos += ch.len_utf8(),
                    _ => return,
                }
            }
        }
    }

    /// Scan the next token.
    ///
    /// Unlike the iterator, this keeps producing tokens after a terminal
    /// one; at the end of the source it returns `EndOfFile` every time.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(&byte) = self.bytes().get(self.pos) else {
            return Token::empty(TokenKind::EndOfFile, self.source.len());
        };

        match byte {
            OPEN_BRACE => self.scan_punctuation(TokenKind::BeginObject),
            CLOSE_BRACE => self.scan_punctuation(TokenKind::EndObject),
            OPEN_BRACKET => self.scan_punctuation(TokenKind::BeginArray),
            CLOSE_BRACKET => self.scan_punctuation(TokenKind::EndArray),
            COLON => self.scan_punctuation(TokenKind::Colon),
            COMMA => self.scan_punctuation(TokenKind::Comma),
            DOUBLE_QUOTE => self.scan_string(),
            MINUS | b'0'..=b'9' => self.scan_number(),
            _ => self.scan_literal(),
        }
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    fn scan_punctuation(&mut self, kind: TokenKind) -> Token {
        let start = self.pos;
        self.pos += 1;
        Token::new(kind, start, 1)
    }

    /// Scan a string starting at the opening quote. The token includes both
    /// quotes. A raw line feed inside the string is an error covering the
    /// string so far, line feed included.
    fn scan_string(&mut self) -> Token {
        let bytes = self.bytes();
        let start = self.pos;
        let mut pos = start + 1;
        let mut escaping = false;

        while let Some(offset) = memchr3(DOUBLE_QUOTE, BACKSLASH, LINE_FEED, &bytes[pos..]) {
            // Any ordinary character in between ends a pending escape.
            if offset > 0 {
                escaping = false;
            }
            let at = pos + offset;
            pos = at + 1;
            match bytes[at] {
                LINE_FEED => {
                    self.pos = pos;
                    return Token::new(TokenKind::Undefined, start, pos - start);
                }
                DOUBLE_QUOTE if !escaping => {
                    self.pos = pos;
                    return Token::new(TokenKind::String, start, pos - start);
                }
                BACKSLASH => escaping = !escaping,
                _ => escaping = false,
            }
        }

        self.pos = bytes.len();
        Token::empty(TokenKind::EndOfFile, bytes.len())
    }

    /// Scan a number starting at `-` or a digit. Only the lexical shape is
    /// checked: at most one decimal point, which must precede the exponent,
    /// at most one exponent, a final digit and a legal terminator.
    fn scan_number(&mut self) -> Token {
        let bytes = self.bytes();
        let start = self.pos;
        let mut pos = start + 1;
        let mut has_decimal = false;
        let mut has_exponent = false;

        while let Some(&byte) = bytes.get(pos) {
            match byte {
                b'0'..=b'9' => pos += 1,
                E_LOWER | E_UPPER => {
                    if has_exponent {
                        self.pos = pos + 1;
                        return Token::new(TokenKind::Undefined, pos, 1);
                    }
                    has_exponent = true;
                    pos += 1;
                    if matches!(bytes.get(pos), Some(&(PLUS | MINUS))) {
                        pos += 1;
                    }
                }
                DOT => {
                    if has_decimal || has_exponent {
                        self.pos = pos + 1;
                        return Token::new(TokenKind::Undefined, pos, 1);
                    }
                    has_decimal = true;
                    pos += 1;
                }
                _ => break,
            }
        }

        if !is_digit(bytes[pos - 1]) {
            self.pos = self.advance_past(pos);
            return Token::empty(TokenKind::Undefined, pos);
        }

        // The cursor stays on the offending character so it is not skipped.
        self.pos = pos;
        if !self.is_post_value_at(pos) {
            return Token::empty(TokenKind::Undefined, start);
        }

        Token::new(TokenKind::Number, start, pos - start)
    }

    /// Scan `false`, `true` or `null`. Anything else is a point error at the
    /// current character, which is skipped to guarantee progress.
    fn scan_literal(&mut self) -> Token {
        let start = self.pos;
        let rest = &self.source[start..];

        let matched = LITERALS
            .iter()
            .find(|(keyword, _)| rest.starts_with(keyword));

        match matched {
            Some(&(keyword, kind)) if self.is_post_value_at(start + keyword.len()) => {
                self.pos = start + keyword.len();
                Token::new(kind, start, keyword.len())
            }
            _ => {
                self.pos = self.advance_past(start);
                Token::empty(TokenKind::Undefined, start)
            }
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.last.is_some_and(|token| token.is_end()) {
            return None;
        }
        let token = self.next_token();
        self.last = Some(token);
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.last.is_some_and(|token| token.is_end()) {
            (0, Some(0))
        } else {
            // Every token but the last consumes at least one byte.
            (1, Some(self.source.len() - self.pos + 1))
        }
    }
}

impl FusedIterator for Scanner<'_> {}
