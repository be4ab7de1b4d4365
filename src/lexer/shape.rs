//! Shape detection.
//!
//! A shape is the coarse character class a token starts with. Shapes are
//! matched as maximal runs; exact-string classification happens afterwards
//! in [`super::classify`].

use logos::Logos;

/// Numeric lookahead outcome for a digit run or a leading `.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberShape {
    Integer,
    Float,
    /// A `.` with no digit on either side. This is symbol-shaped text.
    LoneDot,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    #[regex(r"\s+")]
    Whitespace,

    // Symbol characters are a subset of the comment body, so a comment is
    // never shorter than the competing symbol run
    #[regex(r"#[^\r\n]*", priority = 3)]
    Comment,

    #[regex(r"\p{Alphabetic}[\p{Alphabetic}0-9]*")]
    Word,

    // A one-character `.` is also a symbol run, and the numeric rule is
    // tried first
    #[regex(r"[0-9]+", number)]
    #[token(".", number, priority = 3)]
    Number(NumberShape),

    // Structural delimiters stand alone and end any symbol run
    #[regex(r"[(),;]")]
    Delimiter,

    #[regex(r"[^\p{Alphabetic}0-9\s\p{Cc}(),;]+")]
    Symbol,
}

/// Extends a digit run, or a lone `.`, with a fractional part when a `.` is
/// followed by at least one digit. Never backtracks into the consumed run.
fn number(lex: &mut logos::Lexer<Shape>) -> NumberShape {
    let after_dot = if lex.slice() == "." {
        Some(lex.remainder())
    } else {
        lex.remainder().strip_prefix('.')
    };

    let fraction = after_dot.map_or(0, digit_run);
    if fraction == 0 {
        return if lex.slice() == "." {
            NumberShape::LoneDot
        } else {
            NumberShape::Integer
        };
    }

    let dot = usize::from(lex.slice() != ".");
    lex.bump(dot + fraction);
    NumberShape::Float
}

fn digit_run(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

/// Matches the shape at the start of `text`, returning it with its byte length.
///
/// Returns `None` when `text` is empty or starts with a character that has no
/// shape (a control character that is not whitespace).
pub(crate) fn match_shape(text: &str) -> Option<(Shape, usize)> {
    let mut lex = Shape::lexer(text);
    match lex.next()? {
        Ok(shape) => Some((shape, lex.span().end)),
        Err(()) => None,
    }
}
