//! lox_scanner: Lexer/tokenizer for Lox source code.
//!
//! Converts a complete source string into an ordered token list in a single
//! pass, with at most two characters of lookahead. Lexical errors are handed
//! to a [`Reporter`](lox_diagnostics::Reporter) and never stop the scan.

mod char_codes;
mod scanner;
mod token;
mod token_kind;

pub use scanner::{scan_tokens, Scanner};
pub use token::{Literal, Token};
pub use token_kind::TokenKind;
