//! Lexer error types.
//!
//! Every lexical error is fatal: `tokenize` stops at the first one and returns
//! it instead of a token sequence. These errors describe malformed source text
//! and are deliberately a different type from the runtime binding errors.

use crate::Span;

/// A fatal lexical error with its location.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// Input ended before the closing delimiter of a string literal.
    #[error("unterminated string literal (missing closing {quote})")]
    UnterminatedString { quote: char },
    /// A character that starts no token. Includes a lone `&` or `|`.
    #[error("unrecognized character {ch:?} (U+{:04X})", code_point(.ch))]
    UnrecognizedCharacter { ch: char },
    /// Source longer than the `u32` offsets used by spans.
    #[error("source is too large to tokenize ({len} bytes)")]
    SourceTooLarge { len: usize },
}

fn code_point(ch: &char) -> u32 {
    u32::from(*ch)
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { span, kind }
    }

    /// Construct an unterminated-string error spanning from the opening delimiter to EOF.
    pub fn unterminated_string(quote: char, span: Span) -> Self {
        Self::new(LexErrorKind::UnterminatedString { quote }, span)
    }

    /// Construct an unrecognized-character error.
    pub fn unrecognized_character(ch: char, span: Span) -> Self {
        Self::new(LexErrorKind::UnrecognizedCharacter { ch }, span)
    }

    /// Full diagnostic line, including the offending source text when available.
    pub fn message(&self, source: &str) -> String {
        match self.span.text(source) {
            Some(text) if !text.is_empty() => format!("error: {self} -> `{text}`"),
            _ => format!("error: {self}"),
        }
    }
}
