//! Character code constants and classification used by the scanner.

pub const LINE_FEED: u8 = b'\n';
pub const DOUBLE_QUOTE: u8 = b'"';
pub const BACKSLASH: u8 = b'\\';
pub const PLUS: u8 = b'+';
pub const MINUS: u8 = b'-';
pub const DOT: u8 = b'.';
pub const COLON: u8 = b':';
pub const COMMA: u8 = b',';
pub const OPEN_BRACE: u8 = b'{';
pub const CLOSE_BRACE: u8 = b'}';
pub const OPEN_BRACKET: u8 = b'[';
pub const CLOSE_BRACKET: u8 = b']';
pub const E_LOWER: u8 = b'e';
pub const E_UPPER: u8 = b'E';

/// Keywords in match priority order.
pub const FALSE_KEYWORD: &str = "false";
pub const TRUE_KEYWORD: &str = "true";
pub const NULL_KEYWORD: &str = "null";

/// Check if a byte is a decimal digit.
#[inline]
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Check if a character is whitespace, using the Unicode `White_Space` property.
#[inline]
pub fn is_white_space(ch: char) -> bool {
    ch.is_whitespace()
}

/// Check if a character may legally follow a number or a literal.
#[inline]
pub fn is_post_value(ch: char) -> bool {
    is_white_space(ch) || matches!(ch, '{' | '}' | '[' | ']' | ':' | ',' | '"')
}
