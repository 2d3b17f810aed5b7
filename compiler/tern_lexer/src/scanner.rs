//! Hand-written scanner producing the token sequence.
//!
//! # Design
//!
//! A single left-to-right pass over a [`Cursor`] with no backtracking. The
//! main dispatch is keyed on the current character; operator arms consult a
//! small table of `(second char, kind)` pairs, so every multi-character
//! operator is decided by exactly one character of lookahead.
//!
//! Identifier characters are "cased" letters: a character counts as
//! alphabetic when its upper- and lower-case forms differ. Digits and `_`
//! never continue an identifier, so `abc123` is two tokens.

use crate::cursor::Cursor;
use crate::keywords;
use crate::{LexError, LexErrorKind, Span, Token, TokenKind};

/// Second-character table for an operator: `(lookahead, kind)` pairs.
type Lookahead = &'static [(char, TokenKind)];

const PLUS: Lookahead = &[('+', TokenKind::Increment), ('=', TokenKind::PlusEquals)];
const MINUS: Lookahead = &[('-', TokenKind::Decrement), ('=', TokenKind::MinusEquals)];
const STAR: Lookahead = &[('=', TokenKind::TimesEquals)];
const SLASH: Lookahead = &[('=', TokenKind::DivideEquals)];
const CARET: Lookahead = &[('=', TokenKind::XorEqual)];
const EQUAL: Lookahead = &[('=', TokenKind::DoubleEquals)];
const BANG: Lookahead = &[('=', TokenKind::NotEquals)];
const LESS: Lookahead = &[('=', TokenKind::LessThanEquals)];
const GREATER: Lookahead = &[('=', TokenKind::GreaterThanEquals)];

/// Tokenize `source` into an EOF-terminated token sequence.
///
/// Returns the first fatal [`LexError`] instead of a partial sequence.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let Ok(source_len) = u32::try_from(source.len()) else {
        return Err(LexError::new(
            LexErrorKind::SourceTooLarge { len: source.len() },
            Span::point(0),
        ));
    };

    let result = Scanner::new(Cursor::new(source, source_len)).run();
    match &result {
        Ok(tokens) => tracing::debug!(tokens = tokens.len(), "tokenized source"),
        Err(err) => tracing::debug!(%err, "tokenize failed"),
    }
    result
}

/// Returns `true` if `c` has distinct upper- and lower-case forms.
pub fn is_alpha(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    !c.to_uppercase().eq(c.to_lowercase())
}

/// Returns `true` for the characters discarded between tokens.
#[inline]
pub fn is_skippable(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

struct Scanner<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(c) = self.cursor.current() {
            self.next_token(c)?;
        }
        self.tokens.push(Token::eof(self.cursor.pos()));
        Ok(self.tokens)
    }

    fn next_token(&mut self, c: char) -> Result<(), LexError> {
        let start = self.cursor.pos();
        match c {
            c if is_skippable(c) => self.cursor.advance(),
            '(' => self.single(start, TokenKind::OpenParen),
            ')' => self.single(start, TokenKind::CloseParen),
            '{' => self.single(start, TokenKind::OpenBrace),
            '}' => self.single(start, TokenKind::CloseBrace),
            '[' => self.single(start, TokenKind::OpenBracket),
            ']' => self.single(start, TokenKind::CloseBracket),
            ',' => self.single(start, TokenKind::Comma),
            '.' => self.single(start, TokenKind::Dot),
            ':' => self.single(start, TokenKind::Colon),
            ';' => self.single(start, TokenKind::Semicolon),
            '%' => self.single(start, TokenKind::BinaryOperator),
            '+' => self.operator(start, PLUS, TokenKind::BinaryOperator),
            '-' => self.operator(start, MINUS, TokenKind::BinaryOperator),
            '*' => self.operator(start, STAR, TokenKind::BinaryOperator),
            '/' => self.operator(start, SLASH, TokenKind::BinaryOperator),
            '^' => self.operator(start, CARET, TokenKind::BinaryOperator),
            '=' => self.operator(start, EQUAL, TokenKind::Equals),
            '!' => self.operator(start, BANG, TokenKind::Not),
            '<' => self.operator(start, LESS, TokenKind::LessThan),
            '>' => self.operator(start, GREATER, TokenKind::GreaterThan),
            '&' => self.doubled(start, '&', TokenKind::And)?,
            '|' => self.doubled(start, '|', TokenKind::Or)?,
            '"' => self.string(start, b'"')?,
            '\'' => self.string(start, b'\'')?,
            '0'..='9' => self.number(start),
            c if is_alpha(c) => self.identifier(start),
            _ => {
                self.cursor.advance();
                return Err(LexError::unrecognized_character(
                    c,
                    Span::new(start, self.cursor.pos()),
                ));
            }
        }
        Ok(())
    }

    // ─── Helpers ───────────────────────────────────────────────────

    fn push(&mut self, kind: TokenKind, start: u32) {
        let value = self.cursor.slice_from(start);
        self.tokens
            .push(Token::new(kind, value, Span::new(start, self.cursor.pos())));
    }

    fn single(&mut self, start: u32, kind: TokenKind) {
        self.cursor.advance();
        self.push(kind, start);
    }

    // ─── Operators ─────────────────────────────────────────────────

    /// Consume the operator character, then one more if the lookahead
    /// table names it; otherwise emit `fallback` for the single character.
    fn operator(&mut self, start: u32, table: Lookahead, fallback: TokenKind) {
        self.cursor.advance();
        let next = self.cursor.current();
        let kind = table
            .iter()
            .find(|(second, _)| Some(*second) == next)
            .map(|&(_, kind)| kind);
        match kind {
            Some(kind) => {
                self.cursor.advance();
                self.push(kind, start);
            }
            None => self.push(fallback, start),
        }
    }

    /// `&&` and `||`: valid only when doubled. A lone `&` or `|` is an
    /// unrecognized character.
    fn doubled(&mut self, start: u32, c: char, kind: TokenKind) -> Result<(), LexError> {
        self.cursor.advance();
        if self.cursor.current() == Some(c) {
            self.cursor.advance();
            self.push(kind, start);
            Ok(())
        } else {
            Err(LexError::unrecognized_character(
                c,
                Span::new(start, self.cursor.pos()),
            ))
        }
    }

    // ─── Literals ──────────────────────────────────────────────────

    /// String literal delimited by `quote` on both ends, contents verbatim.
    fn string(&mut self, start: u32, quote: u8) -> Result<(), LexError> {
        self.cursor.advance(); // consume opening quote
        let content_start = self.cursor.pos();
        if !self.cursor.eat_until_ascii(quote) {
            return Err(LexError::unterminated_string(
                char::from(quote),
                Span::new(start, self.cursor.pos()),
            ));
        }
        let content = self.cursor.slice_from(content_start);
        self.cursor.advance(); // consume closing quote
        self.tokens.push(Token::new(
            TokenKind::String,
            content,
            Span::new(start, self.cursor.pos()),
        ));
        Ok(())
    }

    fn number(&mut self, start: u32) {
        self.cursor.eat_while(|c| c.is_ascii_digit());
        self.push(TokenKind::Number, start);
    }

    fn identifier(&mut self, start: u32) {
        self.cursor.eat_while(is_alpha);
        let text = self.cursor.slice_from(start);
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Identifier);
        self.push(kind, start);
    }
}
