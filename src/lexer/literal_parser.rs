//! リテラルの解析
//!
//! レキサーは数値テキストの分類のみを行う。値への変換はこの層で行い、
//! 範囲外のリテラルはここでエラーになる。

use super::token::{Token, TokenKind};
use crate::error::LexerError;
use serde::Serialize;
use std::fmt;

/// 数値リテラルの値
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LiteralValue {
    Int32(i32),
    Float64(f64),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Int32(value) => write!(f, "{}", value),
            LiteralValue::Float64(value) => write!(f, "{:?}", value),
        }
    }
}

/// 整数リテラルを解析（32ビット符号付き）
///
/// エラーの位置情報は空なので、呼び出し側で [`LexerError::with_span`] を使って付与する。
pub fn parse_integer(token: &Token<'_>) -> Result<i32, LexerError> {
    expect_kind(token, TokenKind::Integer)?;
    token
        .contents
        .parse::<i32>()
        .map_err(|_| LexerError::InvalidInteger {
            literal: token.contents.to_string(),
            span: 0..0,
        })
}

/// 浮動小数点リテラルを解析（無限大になる値はエラー）
pub fn parse_float(token: &Token<'_>) -> Result<f64, LexerError> {
    expect_kind(token, TokenKind::Float64)?;
    token
        .contents
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| LexerError::InvalidFloat {
            literal: token.contents.to_string(),
            span: 0..0,
        })
}

/// トークンの種類に応じて数値リテラルを解析
pub fn parse_literal(token: &Token<'_>) -> Result<LiteralValue, LexerError> {
    match token.kind {
        TokenKind::Integer => parse_integer(token).map(LiteralValue::Int32),
        TokenKind::Float64 => parse_float(token).map(LiteralValue::Float64),
        kind => Err(LexerError::NotALiteral { kind, span: 0..0 }),
    }
}

fn expect_kind(token: &Token<'_>, expected: TokenKind) -> Result<(), LexerError> {
    if token.kind == expected {
        Ok(())
    } else {
        Err(LexerError::NotALiteral {
            kind: token.kind,
            span: 0..0,
        })
    }
}
