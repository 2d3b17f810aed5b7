//! Keyword resolution.
//!
//! Identifier runs are scanned first and then checked against this table;
//! a match rewrites the token kind from `Identifier` to the keyword kind.
//! Matching is exact and case-sensitive (`Let` stays an identifier).

use crate::TokenKind;

/// Every reserved word, in the order the table below checks them.
pub const KEYWORDS: [&str; 5] = ["let", "const", "fn", "if", "else"];

/// Look up a reserved keyword by text.
///
/// Returns `None` for ordinary identifiers. Keywords are 2-5 chars, so the
/// length guard rejects most identifiers without a string comparison.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    if !(2..=5).contains(&text.len()) {
        return None;
    }
    match text {
        "let" => Some(TokenKind::Let),
        "const" => Some(TokenKind::Const),
        "fn" => Some(TokenKind::Fn),
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
