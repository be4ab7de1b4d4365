//! ソースセッション管理モジュール
//!
//! 1つのソース単位と、その診断情報を報告するためのファイルデータベースを保持し、
//! トークンダンプ・字句チェック・REPLのエコー出力を提供します。

use crate::error::{ErrorCollector, KaleidoscopeError, KaleidoscopeResult, LexerError};
use crate::lexer::{parse_literal, Lexer, TokenKind, TokenWithPosition};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream, WriteColor};
use std::fs;
use std::path::Path;

/// トークンダンプの出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DumpFormat {
    /// 1行に1トークン
    #[default]
    Text,
    /// 整形済みJSON配列
    Json,
}

/// [`format_tokens`] のオプション
#[derive(Debug, Clone, Copy)]
pub struct DumpOptions {
    pub format: DumpFormat,
    /// 空白とコメントのトークンを含める
    pub trivia: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            format: DumpFormat::Text,
            trivia: true,
        }
    }
}

/// ソース単位と収集した診断情報
pub struct SourceSession {
    pub source_name: String,
    pub source: String,
    pub files: SimpleFiles<String, String>,
    pub file_id: usize,
    pub error_collector: ErrorCollector,
}

impl SourceSession {
    /// ファイルからセッションを作成
    pub fn from_file<P: AsRef<Path>>(path: P) -> KaleidoscopeResult<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            KaleidoscopeError::Io(format!("failed to read {}: {}", path.display(), e))
        })?;
        log::debug!("loaded {} ({} bytes)", path.display(), source.len());
        Ok(Self::from_string(path.display().to_string(), source))
    }

    /// 文字列からセッションを作成
    pub fn from_string(source_name: impl Into<String>, source: String) -> Self {
        let source_name = source_name.into();
        let mut files = SimpleFiles::new();
        let file_id = files.add(source_name.clone(), source.clone());

        Self {
            source_name,
            source,
            files,
            file_id,
            error_collector: ErrorCollector::new(),
        }
    }

    /// ソース全体のトークン（末尾にEOFを含む）
    pub fn tokens(&self) -> Vec<TokenWithPosition<'_>> {
        Lexer::new(&self.source).collect_tokens()
    }

    /// ソース全体を走査して字句上の問題を記録
    ///
    /// 未定義トークンはエラー、値に変換できない数値リテラルは警告として扱う。
    /// 前回の結果は破棄される。戻り値はエラーの数。
    pub fn check(&mut self) -> usize {
        self.error_collector.clear();
        let mut literals = 0;

        for token in Lexer::new(&self.source) {
            match token.kind() {
                TokenKind::Undefined => {
                    let error = LexerError::UndefinedToken {
                        token: token.contents().to_string(),
                        span: token.span.clone(),
                    };
                    self.error_collector.add_error(error.into(), self.file_id);
                }
                TokenKind::Integer | TokenKind::Float64 => {
                    literals += 1;
                    if let Err(e) = parse_literal(&token.token) {
                        self.error_collector
                            .add_warning(e.with_span(token.span.clone()).into(), self.file_id);
                    }
                }
                _ => {}
            }
        }

        log::debug!(
            "checked {}: {} literal(s), {} error(s), {} warning(s)",
            self.source_name,
            literals,
            self.error_collector.error_count(),
            self.error_collector.warning_count()
        );
        self.error_collector.error_count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_collector.has_errors()
    }

    pub fn error_count(&self) -> usize {
        self.error_collector.error_count()
    }

    /// 診断情報を標準エラーに報告
    pub fn report_diagnostics(&self, color: ColorChoice) -> KaleidoscopeResult<()> {
        let writer = StandardStream::stderr(color);
        let mut lock = writer.lock();
        self.emit_diagnostics(&mut lock)
    }

    /// 診断情報を任意のライターに出力
    pub fn emit_diagnostics(&self, writer: &mut dyn WriteColor) -> KaleidoscopeResult<()> {
        let config = codespan_reporting::term::Config::default();
        for diagnostic in self.error_collector.diagnostics() {
            codespan_reporting::term::emit(writer, &config, &self.files, &diagnostic).map_err(
                |e| KaleidoscopeError::Io(format!("failed to emit diagnostic: {}", e)),
            )?;
        }
        Ok(())
    }
}

/// トークンダンプを文字列として出力
pub fn format_tokens(
    tokens: &[TokenWithPosition<'_>],
    options: &DumpOptions,
) -> KaleidoscopeResult<String> {
    let selected: Vec<_> = tokens
        .iter()
        .filter(|t| options.trivia || !t.kind().is_trivia())
        .collect();

    match options.format {
        DumpFormat::Text => Ok(selected
            .iter()
            .enumerate()
            .map(|(i, t)| format!("{:4}: {} @ {:?}", i, t.token, t.span))
            .collect::<Vec<_>>()
            .join("\n")),
        DumpFormat::Json => serde_json::to_string_pretty(&selected)
            .map_err(|e| KaleidoscopeError::Other(format!("failed to serialize tokens: {}", e))),
    }
}

/// 1行をトークン化し、EOF以外の各トークンの後ろに `", "` を付けて出力
pub fn echo_line(line: &str) -> String {
    Lexer::new(line).fold(String::new(), |mut out, t| {
        out.push_str(&t.token.to_string());
        out.push_str(", ");
        out
    })
}

/// キーワード表と記号表を出力
pub fn describe_tables() -> String {
    let keywords = crate::lexer::keywords()
        .map(|(text, kind)| format!("  {:<6} {}", text, kind))
        .collect::<Vec<_>>()
        .join("\n");
    let punctuation = crate::lexer::punctuation()
        .map(|(text, kind)| format!("  {:<6} {}", text, kind))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "keywords:\n{}\npunctuation:\n{}\nother symbol runs: {}",
        keywords,
        punctuation,
        TokenKind::Operator
    )
}
