//! キーワード表と記号表
//!
//! どちらもレキサーが形を決めた後に完全一致で引く。表にない場合は形ごとの
//! 汎用の種類になる。

use indexmap::IndexMap;
use std::sync::LazyLock;

use super::token::TokenKind;

static KEYWORDS: LazyLock<IndexMap<&'static str, TokenKind>> = LazyLock::new(|| {
    IndexMap::from([
        ("def", TokenKind::DefKeyword),
        ("var", TokenKind::VarKeyword),
        ("class", TokenKind::ClassKeyword),
    ])
});

static PUNCTUATION: LazyLock<IndexMap<&'static str, TokenKind>> = LazyLock::new(|| {
    IndexMap::from([
        (";", TokenKind::Semicolon),
        ("=", TokenKind::Eq),
        (",", TokenKind::Comma),
        (".", TokenKind::Dot),
        ("(", TokenKind::LeftParen),
        (")", TokenKind::RightParen),
    ])
});

/// 識別子形のテキストを分類（キーワードまたは `Identifier`）
pub fn classify_identifier_or_keyword(text: &str) -> TokenKind {
    KEYWORDS.get(text).copied().unwrap_or(TokenKind::Identifier)
}

/// 記号形のテキストを分類（記号の種類または汎用の `Operator`）
pub fn classify_operator_or_special(text: &str) -> TokenKind {
    PUNCTUATION.get(text).copied().unwrap_or(TokenKind::Operator)
}

/// キーワード表（宣言順）
pub fn keywords() -> impl Iterator<Item = (&'static str, TokenKind)> {
    KEYWORDS.iter().map(|(text, kind)| (*text, *kind))
}

/// 記号表（宣言順）
pub fn punctuation() -> impl Iterator<Item = (&'static str, TokenKind)> {
    PUNCTUATION.iter().map(|(text, kind)| (*text, *kind))
}
