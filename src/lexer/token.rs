//! Token definitions

use logos::Span;
use serde::Serialize;
use std::fmt;

/// Kinds of tokens produced by the scanner.
///
/// This enumeration is the contract consumed by any downstream parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// A character the scanner does not recognize (a raw control character).
    Undefined,
    /// The end-of-file marker. Its contents are always empty.
    EndOfFile,
    Whitespace,
    /// A `#` comment running up to the next line terminator.
    Comment,
    Identifier,
    /// A run of symbol characters that is not a known punctuation string.
    Operator,
    Integer,
    /// A 64-bit floating point literal such as `3.14` or `.5`.
    Float64,

    // Keywords
    /// `def`, which defines a function.
    DefKeyword,
    /// `var`, which defines a variable or a field depending on the context.
    VarKeyword,
    /// `class`, which defines a class.
    ClassKeyword,

    // Structural punctuation
    Semicolon,
    Eq,
    Comma,
    Dot,
    LeftParen,
    RightParen,
}

impl TokenKind {
    /// Whitespace and comments: significant to scanning, ignored by syntax analysis.
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::DefKeyword | TokenKind::VarKeyword | TokenKind::ClassKeyword
        )
    }

    pub fn is_punctuation(self) -> bool {
        matches!(
            self,
            TokenKind::Semicolon
                | TokenKind::Eq
                | TokenKind::Comma
                | TokenKind::Dot
                | TokenKind::LeftParen
                | TokenKind::RightParen
        )
    }

    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::Integer | TokenKind::Float64)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A classified slice of the source text.
///
/// `contents` is exactly the text consumed for this token, so concatenating
/// the contents of a full token stream reproduces the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub contents: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, contents: &'a str) -> Self {
        Self { kind, contents }
    }

    /// The end-of-file marker.
    pub fn end_of_file() -> Self {
        Self {
            kind: TokenKind::EndOfFile,
            contents: "",
        }
    }

    pub fn is_end_of_file(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }

    /// Length of the token's contents in bytes.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.contents)
    }
}

/// A token together with its byte span in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenWithPosition<'a> {
    pub token: Token<'a>,
    pub span: Span,
}

impl<'a> TokenWithPosition<'a> {
    pub fn kind(&self) -> TokenKind {
        self.token.kind
    }

    pub fn contents(&self) -> &'a str {
        self.token.contents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivia_kinds() {
        assert!(TokenKind::Whitespace.is_trivia());
        assert!(TokenKind::Comment.is_trivia());
        assert!(!TokenKind::Identifier.is_trivia());
        assert!(!TokenKind::EndOfFile.is_trivia());
    }

    #[test]
    fn test_kind_groups_are_disjoint() {
        let all = [
            TokenKind::Undefined,
            TokenKind::EndOfFile,
            TokenKind::Whitespace,
            TokenKind::Comment,
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Integer,
            TokenKind::Float64,
            TokenKind::DefKeyword,
            TokenKind::VarKeyword,
            TokenKind::ClassKeyword,
            TokenKind::Semicolon,
            TokenKind::Eq,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::LeftParen,
            TokenKind::RightParen,
        ];

        for kind in all {
            let groups = [
                kind.is_trivia(),
                kind.is_keyword(),
                kind.is_punctuation(),
                kind.is_literal(),
            ];
            assert!(groups.iter().filter(|&&g| g).count() <= 1, "{kind}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::new(TokenKind::DefKeyword, "def").to_string(), "DefKeyword(\"def\")");
        assert_eq!(Token::new(TokenKind::Whitespace, "\n").to_string(), "Whitespace(\"\\n\")");
        assert_eq!(Token::end_of_file().to_string(), "EndOfFile(\"\")");
    }

    #[test]
    fn test_serialize() {
        let token = Token::new(TokenKind::Float64, "3.14");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"kind":"Float64","contents":"3.14"}"#);
    }
}
