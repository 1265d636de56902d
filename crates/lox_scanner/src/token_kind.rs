//! TokenKind enum - every token the Lox scanner can produce.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

lazy_static! {
    /// Reserved words, keyed by their exact spelling. Built once and never
    /// mutated afterwards.
    static ref KEYWORDS: FxHashMap<&'static str, TokenKind> = {
        let mut keywords = FxHashMap::default();
        for kind in TokenKind::KEYWORDS {
            if let Some(text) = kind.keyword_text() {
                keywords.insert(text, *kind);
            }
        }
        keywords
    };
}

impl TokenKind {
    /// All reserved-word kinds.
    pub const KEYWORDS: &'static [TokenKind] = &[
        TokenKind::And,
        TokenKind::Class,
        TokenKind::Else,
        TokenKind::False,
        TokenKind::Fun,
        TokenKind::For,
        TokenKind::If,
        TokenKind::Nil,
        TokenKind::Or,
        TokenKind::Print,
        TokenKind::Return,
        TokenKind::Super,
        TokenKind::This,
        TokenKind::True,
        TokenKind::Var,
        TokenKind::While,
    ];

    /// Check if this is a reserved word.
    pub fn is_keyword(self) -> bool {
        self >= TokenKind::And && self <= TokenKind::While
    }

    /// Check if this token carries a literal value or a name.
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::String | TokenKind::Number)
    }

    /// Check if this is punctuation or an operator.
    pub fn is_punctuation(self) -> bool {
        self <= TokenKind::LessEqual
    }

    /// Look up a keyword kind from text. Case-sensitive.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        KEYWORDS.get(text).copied()
    }

    /// The spelling of a reserved word.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            TokenKind::And => Some("and"),
            TokenKind::Class => Some("class"),
            TokenKind::Else => Some("else"),
            TokenKind::False => Some("false"),
            TokenKind::Fun => Some("fun"),
            TokenKind::For => Some("for"),
            TokenKind::If => Some("if"),
            TokenKind::Nil => Some("nil"),
            TokenKind::Or => Some("or"),
            TokenKind::Print => Some("print"),
            TokenKind::Return => Some("return"),
            TokenKind::Super => Some("super"),
            TokenKind::This => Some("this"),
            TokenKind::True => Some("true"),
            TokenKind::Var => Some("var"),
            TokenKind::While => Some("while"),
            _ => None,
        }
    }

    /// The spelling of a punctuation or operator token.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            TokenKind::LeftParen => Some("("),
            TokenKind::RightParen => Some(")"),
            TokenKind::LeftBrace => Some("{"),
            TokenKind::RightBrace => Some("}"),
            TokenKind::Comma => Some(","),
            TokenKind::Dot => Some("."),
            TokenKind::Minus => Some("-"),
            TokenKind::Plus => Some("+"),
            TokenKind::Semicolon => Some(";"),
            TokenKind::Slash => Some("/"),
            TokenKind::Star => Some("*"),
            TokenKind::Bang => Some("!"),
            TokenKind::BangEqual => Some("!="),
            TokenKind::Equal => Some("="),
            TokenKind::EqualEqual => Some("=="),
            TokenKind::Greater => Some(">"),
            TokenKind::GreaterEqual => Some(">="),
            TokenKind::Less => Some("<"),
            TokenKind::LessEqual => Some("<="),
            _ => None,
        }
    }

    /// The stable upper-snake identifier of this kind, e.g. `BANG_EQUAL`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fun => "FUN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_round_trips() {
        assert_eq!(TokenKind::KEYWORDS.len(), 16);
        for kind in TokenKind::KEYWORDS {
            assert!(kind.is_keyword());
            let text = kind.keyword_text().unwrap();
            assert_eq!(TokenKind::from_keyword(text), Some(*kind));
        }
    }

    #[test]
    fn test_keyword_lookup_is_case_sensitive() {
        assert_eq!(TokenKind::from_keyword("while"), Some(TokenKind::While));
        assert_eq!(TokenKind::from_keyword("While"), None);
        assert_eq!(TokenKind::from_keyword("whilst"), None);
    }

    #[test]
    fn test_classification() {
        assert!(TokenKind::LessEqual.is_punctuation());
        assert!(!TokenKind::Identifier.is_punctuation());
        assert!(TokenKind::Number.is_literal());
        assert!(!TokenKind::Eof.is_keyword());
        assert!(!TokenKind::Number.is_keyword());
    }

    #[test]
    fn test_punctuation_text_covers_operators() {
        assert_eq!(TokenKind::BangEqual.punctuation_text(), Some("!="));
        assert_eq!(TokenKind::Slash.punctuation_text(), Some("/"));
        assert_eq!(TokenKind::Identifier.punctuation_text(), None);
        assert_eq!(TokenKind::While.punctuation_text(), None);
        assert_eq!(TokenKind::Eof.punctuation_text(), None);
    }

    #[test]
    fn test_display_uses_stable_names() {
        assert_eq!(TokenKind::BangEqual.to_string(), "BANG_EQUAL");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
        assert_eq!(TokenKind::LeftParen.to_string(), "LEFT_PAREN");
    }
}
