// Integration tests for the MINIC scanner.
// Testing: skipping, classification, greedy matching, positions, errors.

#[cfg(test)]
mod tests {
    use minic::{tokenize, AnalysisError, ErrorKind, LexicalCause, Span, TokenKind};

    // Helper: scan and unwrap the token stream.
    fn tokens_of(source: &str) -> Vec<(TokenKind, String)> {
        tokenize(source)
            .expect("expected source to scan cleanly")
            .into_iter()
            .map(|token| (token.kind, token.lexeme))
            .collect()
    }

    // Helper: scan and unwrap the first error.
    fn error_of(source: &str) -> AnalysisError {
        match tokenize(source) {
            Ok(tokens) => panic!("expected a lexical error, got tokens: {:?}", tokens),
            Err(error) => error,
        }
    }

    // ========== Insignificant content ==========

    #[test]
    fn test_empty_input_has_no_tokens() {
        assert!(tokens_of("").is_empty());
    }

    #[test]
    fn test_whitespace_only_has_no_tokens() {
        assert!(tokens_of("  \t \r\n   \n").is_empty());
    }

    #[test]
    fn test_line_comments_have_no_tokens() {
        assert!(tokens_of("# first comment\n# second comment\n").is_empty());
    }

    #[test]
    fn test_block_comments_have_no_tokens() {
        assert!(tokens_of("/* one */ /* two\nspanning lines */").is_empty());
    }

    #[test]
    fn test_mixed_insignificant_content_has_no_tokens() {
        assert!(tokens_of("  # note\n /* block */ \t\n").is_empty());
    }

    #[test]
    fn test_token_after_block_comment_keeps_its_position() {
        let tokens = tokenize("/* a\nb */ let").expect("scan");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Let);
        assert_eq!(tokens[0].span, Span::new(2, 6));
    }

    #[test]
    fn test_line_comment_runs_to_end_of_line_only() {
        let tokens = tokenize("# comment\nlet").expect("scan");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].span, Span::new(2, 1));
    }

    // ========== Operators and delimiters ==========

    #[test]
    fn test_two_character_operators_scan_as_one_token() {
        let cases = [
            ("==", TokenKind::EqualEqual),
            (">=", TokenKind::GreaterEqual),
            ("<=", TokenKind::LessEqual),
            ("!=", TokenKind::BangEqual),
            ("&&", TokenKind::AndAnd),
            ("||", TokenKind::OrOr),
        ];

        for (source, kind) in cases {
            let tokens = tokens_of(source);
            assert_eq!(tokens.len(), 1, "'{}' must be a single token", source);
            assert_eq!(tokens[0], (kind, source.to_string()));
        }
    }

    #[test]
    fn test_single_character_operators_and_delimiters() {
        let tokens = tokens_of("+ - * / = > < ( ) { } ; : .");
        let kinds: Vec<TokenKind> = tokens.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Assign,
                TokenKind::Greater,
                TokenKind::Less,
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::Semicolon,
                TokenKind::Colon,
                TokenKind::Dot,
            ]
        );
    }

    #[test]
    fn test_triple_equals_is_double_then_single() {
        let tokens = tokens_of("===");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::EqualEqual, "==".to_string()),
                (TokenKind::Assign, "=".to_string()),
            ]
        );
    }

    #[test]
    fn test_slash_not_opening_a_comment_is_division() {
        let tokens = tokens_of("a / b");
        assert_eq!(tokens[1].0, TokenKind::Slash);
    }

    // ========== Numbers ==========

    #[test]
    fn test_integer_and_float_literals() {
        assert_eq!(tokens_of("42"), vec![(TokenKind::Number, "42".to_string())]);
        assert_eq!(
            tokens_of("3.14"),
            vec![(TokenKind::Number, "3.14".to_string())]
        );
    }

    #[test]
    fn test_leading_dot_number() {
        assert_eq!(tokens_of(".5"), vec![(TokenKind::Number, ".5".to_string())]);
    }

    #[test]
    fn test_trailing_dot_is_not_part_of_the_number() {
        // "3." scans as NUMBER then DOT, never one malformed token.
        let tokens = tokens_of("3.");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Number, "3".to_string()),
                (TokenKind::Dot, ".".to_string()),
            ]
        );
    }

    #[test]
    fn test_trailing_dot_before_identifier() {
        let tokens = tokens_of("3.x");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Number, "3".to_string()),
                (TokenKind::Dot, ".".to_string()),
                (TokenKind::Identifier, "x".to_string()),
            ]
        );
    }

    // ========== Identifiers and keywords ==========

    #[test]
    fn test_keywords_classify_by_spelling() {
        let cases = [
            ("function", TokenKind::Function),
            ("main", TokenKind::Main),
            ("let", TokenKind::Let),
            ("const", TokenKind::Const),
            ("number", TokenKind::TypeNumber),
            ("int", TokenKind::TypeNumber),
            ("float", TokenKind::TypeFloat),
            ("print", TokenKind::Print),
            ("read", TokenKind::Read),
            ("console", TokenKind::Console),
            ("if", TokenKind::If),
            ("else", TokenKind::Else),
            ("while", TokenKind::While),
        ];

        for (source, kind) in cases {
            let tokens = tokens_of(source);
            assert_eq!(tokens[0], (kind, source.to_string()));
        }
    }

    #[test]
    fn test_unreserved_spellings_are_identifiers() {
        for source in ["letx", "x", "_tmp", "value2", "log", "Main"] {
            let tokens = tokens_of(source);
            assert_eq!(
                tokens[0],
                (TokenKind::Identifier, source.to_string()),
                "'{}' must scan as an identifier",
                source
            );
        }
    }

    // ========== Strings ==========

    #[test]
    fn test_string_literal_keeps_raw_content() {
        let tokens = tokens_of("\"hello world\"");
        assert_eq!(
            tokens,
            vec![(TokenKind::StringLiteral, "hello world".to_string())]
        );
    }

    #[test]
    fn test_string_literal_does_not_process_escapes() {
        // The backslash and the 'n' stay two separate raw characters.
        let tokens = tokens_of("\"a\\nb\"");
        assert_eq!(tokens[0].1, "a\\nb");
    }

    // ========== Lexical errors ==========

    #[test]
    fn test_unterminated_string_points_at_opening_quote() {
        let error = error_of("  \"abc");
        assert_eq!(error.code, "E_LEXICAL");
        assert_eq!(error.span, Span::new(1, 3));
        assert_eq!(
            error.kind,
            ErrorKind::Lexical(LexicalCause::UnterminatedString)
        );
    }

    #[test]
    fn test_unterminated_block_comment_points_at_opening() {
        let error = error_of("let\n  /* never closed");
        assert_eq!(error.span, Span::new(2, 3));
        assert_eq!(
            error.kind,
            ErrorKind::Lexical(LexicalCause::UnterminatedBlockComment)
        );
    }

    #[test]
    fn test_unrecognized_character() {
        let error = error_of("a @ b");
        assert_eq!(error.span, Span::new(1, 3));
        assert_eq!(
            error.kind,
            ErrorKind::Lexical(LexicalCause::UnrecognizedCharacter('@'))
        );
    }

    #[test]
    fn test_lone_bang_is_unrecognized_at_its_own_position() {
        let error = error_of("a ! b");
        assert_eq!(error.span, Span::new(1, 3));
        assert_eq!(
            error.kind,
            ErrorKind::Lexical(LexicalCause::UnrecognizedCharacter('!'))
        );
    }

    #[test]
    fn test_lone_ampersand_and_pipe_are_unrecognized() {
        for (source, ch) in [("&", '&'), ("|", '|')] {
            let error = error_of(source);
            assert_eq!(
                error.kind,
                ErrorKind::Lexical(LexicalCause::UnrecognizedCharacter(ch))
            );
        }
    }

    // ========== Positions ==========

    #[test]
    fn test_spans_track_lines_and_columns() {
        let tokens = tokenize("let x\n  = 1;").expect("scan");
        let spans: Vec<Span> = tokens.iter().map(|token| token.span).collect();
        assert_eq!(
            spans,
            vec![
                Span::new(1, 1), // let
                Span::new(1, 5), // x
                Span::new(2, 3), // =
                Span::new(2, 5), // 1
                Span::new(2, 6), // ;
            ]
        );
    }
}
