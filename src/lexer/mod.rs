//! Lexical analysis module for the Kaleidoscope language.
//!
//! This module turns source text into a lossless stream of classified tokens.
//! Whitespace and comments are emitted as trivia tokens rather than skipped,
//! so concatenating the contents of every token reproduces the source. The
//! scanner never fails: characters it cannot classify come out as
//! [`TokenKind::Undefined`] tokens, one character at a time.

mod classify;
#[allow(clippy::module_inception)]
mod lexer;
pub mod literal_parser;
mod shape;
mod token;

pub use classify::{
    classify_identifier_or_keyword, classify_operator_or_special, keywords, punctuation,
};
pub use lexer::{tokenize, Lexer};
pub use literal_parser::{parse_float, parse_integer, parse_literal, LiteralValue};
pub use token::{Token, TokenKind, TokenWithPosition};
