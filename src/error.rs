//! 統一的なエラーハンドリングモジュール
//!
//! レキサー自体は失敗しない。このモジュールのエラーは、その出力を利用する
//! リテラル変換・ファイル読み込み・字句チェックで使用されます。

use crate::lexer::TokenKind;
use codespan_reporting::diagnostic::{Diagnostic, Label, Severity};
use logos::Span;
use thiserror::Error;

/// 統一エラー型
#[derive(Error, Debug, Clone)]
pub enum KaleidoscopeError {
    /// レキサーエラー
    #[error("lexical error: {0}")]
    Lexer(#[from] LexerError),

    /// ファイルI/Oエラー
    #[error("file error: {0}")]
    Io(String),

    #[error("{0}")]
    Other(String),
}

/// レキサーエラーの詳細
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexerError {
    #[error("unrecognized character {token:?}")]
    UndefinedToken { token: String, span: Span },

    #[error("invalid integer literal '{literal}'")]
    InvalidInteger { literal: String, span: Span },

    #[error("invalid double-precision floating point literal '{literal}'")]
    InvalidFloat { literal: String, span: Span },

    #[error("expected a numeric literal, found {kind}")]
    NotALiteral { kind: TokenKind, span: Span },
}

impl LexerError {
    pub fn span(&self) -> Span {
        match self {
            LexerError::UndefinedToken { span, .. }
            | LexerError::InvalidInteger { span, .. }
            | LexerError::InvalidFloat { span, .. }
            | LexerError::NotALiteral { span, .. } => span.clone(),
        }
    }

    /// 位置情報なしで作られたエラーに位置を付与
    pub fn with_span(self, span: Span) -> Self {
        match self {
            LexerError::UndefinedToken { token, .. } => LexerError::UndefinedToken { token, span },
            LexerError::InvalidInteger { literal, .. } => {
                LexerError::InvalidInteger { literal, span }
            }
            LexerError::InvalidFloat { literal, .. } => LexerError::InvalidFloat { literal, span },
            LexerError::NotALiteral { kind, .. } => LexerError::NotALiteral { kind, span },
        }
    }

    fn label_message(&self) -> &'static str {
        match self {
            LexerError::UndefinedToken { .. } => "this character is not part of the language",
            LexerError::InvalidInteger { .. } => "does not fit in a 32-bit signed integer",
            LexerError::InvalidFloat { .. } => "not a valid 64-bit float",
            LexerError::NotALiteral { .. } => "expected an integer or float here",
        }
    }
}

/// エラー情報とソースコードの位置情報を含むエラー
#[derive(Debug, Clone)]
pub struct DiagnosticError {
    pub error: KaleidoscopeError,
    pub file_id: usize,
}

impl DiagnosticError {
    pub fn new(error: KaleidoscopeError, file_id: usize) -> Self {
        Self { error, file_id }
    }

    /// codespan-reportingのDiagnosticに変換
    pub fn to_diagnostic(&self, severity: Severity) -> Diagnostic<usize> {
        let labels = match &self.error {
            KaleidoscopeError::Lexer(e) => vec![
                Label::primary(self.file_id, e.span()).with_message(e.label_message())
            ],
            KaleidoscopeError::Io(_) | KaleidoscopeError::Other(_) => vec![],
        };

        Diagnostic::new(severity)
            .with_message(self.error.to_string())
            .with_labels(labels)
    }
}

/// 複数のエラーを蓄積するためのコレクター
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<DiagnosticError>,
    warnings: Vec<DiagnosticError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: KaleidoscopeError, file_id: usize) {
        self.errors.push(DiagnosticError::new(error, file_id));
    }

    pub fn add_warning(&mut self, error: KaleidoscopeError, file_id: usize) {
        self.warnings.push(DiagnosticError::new(error, file_id));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn errors(&self) -> &[DiagnosticError] {
        &self.errors
    }

    pub fn warnings(&self) -> &[DiagnosticError] {
        &self.warnings
    }

    /// エラーと警告をクリア
    pub fn clear(&mut self) {
        self.errors.clear();
        self.warnings.clear();
    }

    /// すべての診断情報（エラーが先）
    pub fn diagnostics(&self) -> impl Iterator<Item = Diagnostic<usize>> + '_ {
        let errors = self.errors.iter().map(|e| e.to_diagnostic(Severity::Error));
        let warnings = self
            .warnings
            .iter()
            .map(|w| w.to_diagnostic(Severity::Warning));
        errors.chain(warnings)
    }
}

pub type KaleidoscopeResult<T> = Result<T, KaleidoscopeError>;

impl From<std::io::Error> for KaleidoscopeError {
    fn from(e: std::io::Error) -> Self {
        KaleidoscopeError::Io(e.to_string())
    }
}
