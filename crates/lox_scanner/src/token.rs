//! Tokens produced by the scanner.

use crate::token_kind::TokenKind;
use lox_core::text::TextSpan;
use serde::Serialize;
use std::fmt;

/// The decoded value of a literal token.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Number(f64),
    /// The text between the quotes, with no escape processing.
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(value) => f.write_str(&format_number(*value)),
            Literal::String(value) => f.write_str(value),
        }
    }
}

/// Render a number the way the reference token dump does: plain decimal with
/// at least one fractional digit in `[1e-3, 1e7)`, otherwise `d.dddE<exp>`.
fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{:?}", value);
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{}E{}", mantissa, exponent),
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => scientific,
    }
}

/// A scanned token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source text of the token. Empty for end of input.
    pub lexeme: String,
    /// Decoded value for `STRING` and `NUMBER` tokens.
    pub literal: Option<Literal>,
    /// 1-based line of the token's first character.
    pub line: u32,
    /// Char offsets of the lexeme in the source.
    pub span: TextSpan,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: String, line: u32, span: TextSpan) -> Self {
        Self {
            kind,
            lexeme,
            literal: None,
            line,
            span,
        }
    }

    pub fn with_literal(mut self, literal: Literal) -> Self {
        self.literal = Some(literal);
        self
    }

    /// The end-of-input token at `pos`.
    pub fn eof(line: u32, pos: u32) -> Self {
        Self::new(TokenKind::Eof, String::new(), line, TextSpan::empty(pos))
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// The numeric value of a `NUMBER` token.
    pub fn number(&self) -> Option<f64> {
        match self.literal {
            Some(Literal::Number(value)) => Some(value),
            _ => None,
        }
    }

    /// The body of a `STRING` token.
    pub fn string(&self) -> Option<&str> {
        match self.literal {
            Some(Literal::String(ref value)) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.kind, self.lexeme)?;
        match self.literal {
            Some(ref literal) => write!(f, "{}", literal),
            None => f.write_str("null"),
        }
    }
}
