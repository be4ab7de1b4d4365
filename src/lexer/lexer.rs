//! レキサーのメイン実装

use super::classify::{classify_identifier_or_keyword, classify_operator_or_special};
use super::shape::{match_shape, NumberShape, Shape};
use super::token::{Token, TokenKind, TokenWithPosition};

/// 1つのソース単位（1行または1ファイル）に対するレキサー
///
/// 可変な状態はカーソルのみ。`peek` はカーソルを動かさず、`read` は返した
/// トークンの長さだけ進める。
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// 新しいレキサーを作成
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// カーソルのバイト位置
    pub fn position(&self) -> usize {
        self.pos
    }

    /// まだ読み込んでいない残りのテキスト
    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// カーソルを動かさずに次のトークンを計算
    pub fn peek(&self) -> Token<'a> {
        let rest = self.remainder();
        let Some(first) = rest.chars().next() else {
            return Token::end_of_file();
        };

        let Some((shape, len)) = match_shape(rest) else {
            // どの規則にも当てはまらない文字は1文字だけ取る
            return Token::new(TokenKind::Undefined, &rest[..first.len_utf8()]);
        };

        let contents = &rest[..len];
        let kind = match shape {
            Shape::Whitespace => TokenKind::Whitespace,
            Shape::Comment => TokenKind::Comment,
            Shape::Word => classify_identifier_or_keyword(contents),
            Shape::Number(NumberShape::Integer) => TokenKind::Integer,
            Shape::Number(NumberShape::Float) => TokenKind::Float64,
            Shape::Number(NumberShape::LoneDot) | Shape::Delimiter | Shape::Symbol => {
                classify_operator_or_special(contents)
            }
        };
        Token::new(kind, contents)
    }

    /// 次のトークンを取得
    ///
    /// 終端ではカーソルを動かさずにEOFを返し続ける。
    pub fn read(&mut self) -> Token<'a> {
        let token = self.peek();
        log::trace!("read {} at {}", token, self.pos);
        self.pos += token.len();
        token
    }

    /// 位置情報付きで次のトークンを取得（終端では `None`）
    pub fn next_token(&mut self) -> Option<TokenWithPosition<'a>> {
        let start = self.pos;
        let token = self.read();
        if token.is_end_of_file() {
            return None;
        }

        Some(TokenWithPosition {
            token,
            span: start..self.pos,
        })
    }

    /// すべてのトークンを収集（末尾にEOFを含む）
    pub fn collect_tokens(mut self) -> Vec<TokenWithPosition<'a>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens.push(TokenWithPosition {
            token: Token::end_of_file(),
            span: self.pos..self.pos,
        });
        tokens
    }

    /// 空白とコメントを除いたトークン列
    pub fn significant(self) -> impl Iterator<Item = TokenWithPosition<'a>> {
        self.filter(|token| !token.kind().is_trivia())
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = TokenWithPosition<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // 各トークンは最低1バイトを消費する
        let remaining = self.source.len() - self.pos;
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// ソースコードをトークン化（EOFは含まない）
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).map(|t| t.token).collect()
}
