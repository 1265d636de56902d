//! Character classification used by the scanner.
//!
//! Lox identifiers and numbers are ASCII only; anything outside these classes
//! is an unexpected character.

pub const LINE_FEED: char = '\n';
pub const DOUBLE_QUOTE: char = '"';
pub const DOT: char = '.';
pub const SLASH: char = '/';
pub const EQUALS: char = '=';

/// Whitespace that is skipped without producing a token. Line feeds are
/// handled separately because they advance the line counter.
#[inline]
pub fn is_white_space(ch: char) -> bool {
    matches!(ch, ' ' | '\r' | '\t')
}

#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if a character can start an identifier.
#[inline]
pub fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Check if a character can be part of an identifier.
#[inline]
pub fn is_alpha_numeric(ch: char) -> bool {
    is_alpha(ch) || is_digit(ch)
}
