//! Literal conversion tests
//!
//! Numeric tokens straight from the scanner, converted to values.

#[cfg(test)]
mod tests {
    use objkaleidoscope::error::LexerError;
    use objkaleidoscope::lexer::{parse_float, parse_integer, parse_literal, tokenize, LiteralValue, TokenKind};
    use test_case::test_case;

    /// Scan `source` and convert every literal token in it
    fn literal_values(source: &str) -> Vec<Result<LiteralValue, LexerError>> {
        tokenize(source)
            .iter()
            .filter(|t| t.kind.is_literal())
            .map(parse_literal)
            .collect()
    }

    #[test_case("0", 0 ; "zero")]
    #[test_case("42", 42 ; "small")]
    #[test_case("0042", 42 ; "leading zeros")]
    #[test_case("2147483647", i32::MAX ; "max")]
    fn test_integer_values(source: &str, expected: i32) {
        let tokens = tokenize(source);
        assert_eq!(tokens.len(), 1);
        assert_eq!(parse_integer(&tokens[0]), Ok(expected));
    }

    #[test_case("0.5", 0.5 ; "fraction")]
    #[test_case(".25", 0.25 ; "leading dot")]
    #[test_case("10.0", 10.0 ; "whole")]
    #[test_case("1.000000000000000000001", 1.0 ; "rounds")]
    fn test_float_values(source: &str, expected: f64) {
        let tokens = tokenize(source);
        assert_eq!(tokens.len(), 1);
        assert_eq!(parse_float(&tokens[0]), Ok(expected));
    }

    #[test]
    fn test_mixed_literals() {
        let values = literal_values("var x = 1; var y = 2.5; f(3.)");
        assert_eq!(
            values,
            vec![
                Ok(LiteralValue::Int32(1)),
                Ok(LiteralValue::Float64(2.5)),
                Ok(LiteralValue::Int32(3)),
            ]
        );
    }

    #[test]
    fn test_out_of_range_integer() {
        let tokens = tokenize("4294967296");
        assert_eq!(tokens[0].kind, TokenKind::Integer);

        let err = parse_integer(&tokens[0]).unwrap_err();
        assert_eq!(err.to_string(), "invalid integer literal '4294967296'");
    }

    #[test]
    fn test_conversion_rejects_other_kinds() {
        for token in tokenize("x ( # c") {
            assert!(matches!(
                parse_literal(&token),
                Err(LexerError::NotALiteral { .. })
            ));
        }
    }
}
