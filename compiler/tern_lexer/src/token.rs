//! Token types for the tern lexer.
//!
//! A token is pure data: its kind, the exact lexeme it was built from, and
//! where that lexeme sits in the source.

use std::fmt;

use crate::Span;

/// Lexeme carried by the terminating [`TokenKind::Eof`] token.
pub const EOF_LEXEME: &str = "EndOfFile";

/// Closed set of token kinds.
///
/// Discriminant order carries no meaning beyond identity.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // Literals
    Number,
    Identifier,
    String,

    // Keywords
    Let,
    Const,
    Fn,
    If,
    Else,

    // Grouping
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Comma,
    Dot,
    Colon,
    Semicolon,

    // Operators
    /// `+ - * / % ^`; the lexeme tells which.
    BinaryOperator,
    Equals,
    DoubleEquals,
    NotEquals,
    Not,
    LessThan,
    GreaterThan,
    LessThanEquals,
    GreaterThanEquals,
    And,
    Or,
    PlusEquals,
    MinusEquals,
    TimesEquals,
    DivideEquals,
    XorEqual,
    Increment,
    Decrement,

    /// End of input. Always the last token, and only ever once.
    Eof,
}

impl TokenKind {
    /// Short human-readable label used in diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Let => "let",
            TokenKind::Const => "const",
            TokenKind::Fn => "fn",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenBrace => "{",
            TokenKind::CloseBrace => "}",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::BinaryOperator => "binary operator",
            TokenKind::Equals => "=",
            TokenKind::DoubleEquals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::Not => "!",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::LessThanEquals => "<=",
            TokenKind::GreaterThanEquals => ">=",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::PlusEquals => "+=",
            TokenKind::MinusEquals => "-=",
            TokenKind::TimesEquals => "*=",
            TokenKind::DivideEquals => "/=",
            TokenKind::XorEqual => "^=",
            TokenKind::Increment => "++",
            TokenKind::Decrement => "--",
            TokenKind::Eof => "end of file",
        }
    }

    /// Returns `true` for `let`, `const`, `fn`, `if` and `else`.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Let | TokenKind::Const | TokenKind::Fn | TokenKind::If | TokenKind::Else
        )
    }

    /// Returns `true` for the compound assignment operators (`+=`, `-=`, `*=`, `/=`, `^=`).
    pub fn is_compound_assignment(&self) -> bool {
        matches!(
            self,
            TokenKind::PlusEquals
                | TokenKind::MinusEquals
                | TokenKind::TimesEquals
                | TokenKind::DivideEquals
                | TokenKind::XorEqual
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token: kind, literal text and source span.
///
/// `value` is the exact consumed lexeme, except for strings (contents without
/// the delimiters) and EOF ([`EOF_LEXEME`]).
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            value: value.into(),
            span,
        }
    }

    /// The end-of-input token at byte offset `pos`.
    pub fn eof(pos: u32) -> Self {
        Token {
            kind: TokenKind::Eof,
            value: EOF_LEXEME.to_string(),
            span: Span::point(pos),
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.value, self.span)
    }
}
