//! Tern Lexer - tokenizer for the tern scripting language.
//!
//! Turns source text into an ordered, EOF-terminated sequence of [`Token`]s.
//! The crate is standalone: parsers, formatters and highlighters can depend
//! on it without pulling in the runtime.
//!
//! # Architecture
//!
//! - [`Cursor`]: character cursor with one character of lookahead
//! - `scanner`: single-pass dispatch on the current character
//! - [`keywords`]: rewrites identifier runs that are reserved words
//! - [`LexError`]: fatal errors (unterminated string, unrecognized character)
//!
//! ```text
//! let tokens = tern_lexer::tokenize("let x = 5;")?;
//! // [Let, Identifier("x"), Equals, Number("5"), Semicolon, Eof]
//! ```

mod cursor;
pub mod keywords;
mod lex_error;
mod scanner;
mod span;
mod token;

pub use cursor::Cursor;
pub use lex_error::{LexError, LexErrorKind};
pub use scanner::{is_alpha, is_skippable, tokenize};
pub use span::Span;
pub use token::{Token, TokenKind, EOF_LEXEME};
