//! Kaleidoscope Language Scanner Library
//!
//! This library provides the lexical front end for a small Kaleidoscope-derived
//! language: a lossless scanner, literal value conversion, and the session
//! plumbing used by the `objkaleidoscope` command-line tool.

pub mod driver;
pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use driver::{DumpFormat, DumpOptions, SourceSession};
pub use error::{ErrorCollector, KaleidoscopeError, KaleidoscopeResult, LexerError};
pub use lexer::{tokenize, Lexer, LiteralValue, Token, TokenKind, TokenWithPosition};
