//! The Lox scanner.
//!
//! Walks the source one character at a time, marking the start of each lexeme
//! and consuming characters until the lexeme is complete. Lookahead never
//! goes further than two characters past the cursor (`peek` and `peek_next`),
//! so no lexeme ever needs backtracking.

use crate::char_codes::*;
use crate::token::{Literal, Token};
use crate::token_kind::TokenKind;
use lox_core::text::TextSpan;
use lox_diagnostics::{messages, Diagnostic, DiagnosticMessage, Reporter};
use tracing::{debug, trace};

/// Scan a complete source string into tokens, reporting lexical errors to
/// `reporter`. The result always ends with exactly one `EOF` token.
pub fn scan_tokens(source: &str, reporter: &mut dyn Reporter) -> Vec<Token> {
    Scanner::new(source, reporter).scan_tokens()
}

/// The scanner converts Lox source text into tokens.
///
/// A scanner is single-use: [`Scanner::scan_tokens`] consumes it.
pub struct Scanner<'r> {
    /// The source text being scanned.
    text: Vec<char>,
    /// Tokens emitted so far.
    tokens: Vec<Token>,
    /// Start of the lexeme being scanned.
    start: usize,
    /// Next unconsumed character.
    current: usize,
    /// Line the cursor is on.
    line: u32,
    /// Line the current lexeme started on.
    start_line: u32,
    error_count: usize,
    reporter: &'r mut dyn Reporter,
}

impl<'r> Scanner<'r> {
    /// Create a new scanner for the given source text.
    pub fn new(source: &str, reporter: &'r mut dyn Reporter) -> Self {
        Self {
            text: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
            error_count: 0,
            reporter,
        }
    }

    /// Scan the whole source and return its tokens.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.line, self.current as u32));
        debug!(
            tokens = self.tokens.len(),
            errors = self.error_count,
            lines = self.line,
            "scan finished"
        );
        self.tokens
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    fn scan_token(&mut self) {
        let ch = self.advance();
        match ch {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            '!' => self.add_either(TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.add_either(TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.add_either(TokenKind::LessEqual, TokenKind::Less),
            '>' => self.add_either(TokenKind::GreaterEqual, TokenKind::Greater),

            SLASH => {
                if self.match_char(SLASH) {
                    // A comment runs to the end of the line. The newline itself
                    // is left for the main loop so the line counter stays right.
                    while self.peek().map_or(false, |c| c != LINE_FEED) {
                        self.current += 1;
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            LINE_FEED => self.line += 1,
            c if is_white_space(c) => {}

            DOUBLE_QUOTE => self.scan_string(),
            c if is_digit(c) => self.scan_number(),
            c if is_alpha(c) => self.scan_identifier(),

            c => {
                let text = c.to_string();
                self.error(&messages::UNEXPECTED_CHARACTER, &[&text]);
            }
        }
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    fn scan_string(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == DOUBLE_QUOTE {
                break;
            }
            if ch == LINE_FEED {
                self.line += 1;
            }
            self.current += 1;
        }

        if self.is_at_end() {
            self.error(&messages::UNTERMINATED_STRING, &[]);
            return;
        }

        // The closing quote.
        self.current += 1;

        let value = self.chars_to_string(self.start + 1, self.current - 1);
        self.add_literal(TokenKind::String, Literal::String(value));
    }

    fn scan_number(&mut self) {
        self.scan_digits();

        if self.peek() == Some(DOT) && self.peek_next().map_or(false, is_digit) {
            self.current += 1;
            self.scan_digits();
        }

        // A digit run with an optional fractional part always parses.
        let value: f64 = self
            .chars_to_string(self.start, self.current)
            .parse()
            .unwrap_or_default();
        self.add_literal(TokenKind::Number, Literal::Number(value));
    }

    fn scan_digits(&mut self) {
        while self.peek().map_or(false, is_digit) {
            self.current += 1;
        }
    }

    fn scan_identifier(&mut self) {
        while self.peek().map_or(false, is_alpha_numeric) {
            self.current += 1;
        }

        let text = self.chars_to_string(self.start, self.current);
        let kind = TokenKind::from_keyword(&text).unwrap_or(TokenKind::Identifier);
        self.push_token(Token::new(kind, text, self.start_line, self.lexeme_span()));
    }

    // ========================================================================
    // Cursor helpers
    // ========================================================================

    #[inline]
    fn is_at_end(&self) -> bool {
        self.current >= self.text.len()
    }

    /// Consume the next character. Only called when input remains.
    #[inline]
    fn advance(&mut self) -> char {
        let ch = self.text[self.current];
        self.current += 1;
        ch
    }

    /// Consume the next character if it is `expected`.
    #[inline]
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }
        self.current += 1;
        true
    }

    /// The next unconsumed character.
    #[inline]
    fn peek(&self) -> Option<char> {
        self.text.get(self.current).copied()
    }

    /// The character after [`Scanner::peek`]. The furthest the scanner ever looks.
    #[inline]
    fn peek_next(&self) -> Option<char> {
        self.text.get(self.current + 1).copied()
    }

    fn chars_to_string(&self, start: usize, end: usize) -> String {
        self.text[start..end].iter().collect()
    }

    fn lexeme_span(&self) -> TextSpan {
        TextSpan::from_bounds(self.start as u32, self.current as u32)
    }

    // ========================================================================
    // Emission
    // ========================================================================

    fn add_either(&mut self, with_equals: TokenKind, alone: TokenKind) {
        let kind = if self.match_char(EQUALS) { with_equals } else { alone };
        self.add_token(kind);
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme = self.chars_to_string(self.start, self.current);
        self.push_token(Token::new(kind, lexeme, self.start_line, self.lexeme_span()));
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Literal) {
        let lexeme = self.chars_to_string(self.start, self.current);
        let token = Token::new(kind, lexeme, self.start_line, self.lexeme_span())
            .with_literal(literal);
        self.push_token(token);
    }

    fn push_token(&mut self, token: Token) {
        trace!(kind = %token.kind, lexeme = %token.lexeme, line = token.line, "token");
        self.tokens.push(token);
    }

    /// Report a problem with the current lexeme. Errors are cited at the line
    /// the lexeme started on.
    fn error(&mut self, message: &DiagnosticMessage, args: &[&str]) {
        self.error_count += 1;
        let diagnostic = Diagnostic::new(self.start_line, message, args).with_span(self.lexeme_span());
        debug!(line = diagnostic.line, code = diagnostic.code, "lexical error");
        self.reporter.report_diagnostic(diagnostic);
    }
}
