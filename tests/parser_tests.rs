// Integration tests for the MINIC parser and the driver-facing API.
// Testing: full-program acceptance, the consumed-token trace, and the
// structured errors raised at each grammar decision point.

#[cfg(test)]
mod tests {
    use minic::{
        parse, parse_with_trace, AnalysisError, ErrorKind, LexicalCause, RecordingTrace,
        SyntaxCause, TokenKind,
    };

    // Helper: parse and unwrap the first error.
    fn error_of(source: &str) -> AnalysisError {
        match parse(source) {
            Ok(()) => panic!("expected a parse error for: {}", source),
            Err(error) => error,
        }
    }

    // Helper: assert a source parses cleanly.
    fn assert_parses(source: &str) {
        if let Err(error) = parse(source) {
            panic!("expected success, got {:?}: {}", error, error);
        }
    }

    const CANONICAL: &str = "\
function main() {
    let x : number;
    x = 1 + 2 * 3;
    console.log(x);
}
";

    // ========== Acceptance ==========

    #[test]
    fn test_canonical_program_parses() {
        assert_parses(CANONICAL);
    }

    #[test]
    fn test_minimal_program() {
        assert_parses("function main() { }");
    }

    #[test]
    fn test_declarations_let_and_const_with_both_types() {
        assert_parses(
            "function main() {
                let a : number;
                const b : float;
                let c : int;
            }",
        );
    }

    #[test]
    fn test_read_statement() {
        assert_parses("function main() { read(x); }");
    }

    #[test]
    fn test_write_statement_with_identifier_and_string() {
        assert_parses("function main() { console.log(x); }");
        assert_parses("function main() { console.log(\"hello\"); }");
    }

    #[test]
    fn test_if_without_else_parses() {
        assert_parses("function main() { if (1 > 2) { } }");
    }

    #[test]
    fn test_if_with_else() {
        assert_parses(
            "function main() {
                if (x >= 10) { console.log(\"big\"); } else { console.log(\"small\"); }
            }",
        );
    }

    #[test]
    fn test_while_loop() {
        assert_parses(
            "function main() {
                let i : number;
                i = 0;
                while (i < 10) { i = i + 1; }
            }",
        );
    }

    #[test]
    fn test_nested_blocks_and_control_flow() {
        assert_parses(
            "function main() {
                { }
                if (a != b) {
                    while (a < b) { { a = a + 1; } }
                }
            }",
        );
    }

    #[test]
    fn test_parenthesized_arithmetic_operand() {
        assert_parses("function main() { x = (1 + 2) * 3; }");
    }

    #[test]
    fn test_leading_dot_float_in_expression() {
        assert_parses("function main() { x = .5 + 1; }");
    }

    #[test]
    fn test_logical_chaining_at_one_level() {
        assert_parses(
            "function main() {
                if (a > 1 && b < 2 || c == 3) { }
            }",
        );
    }

    #[test]
    fn test_parenthesized_relational_expression() {
        assert_parses("function main() { if ((a > 1) || b < 2) { } }");
        assert_parses("function main() { if ((a > 1)) { } }");
    }

    #[test]
    fn test_comments_are_invisible_to_the_grammar() {
        assert_parses(
            "function main() { # header
                /* declarations */
                let x : number;
                x = 1; # trailing note
            }",
        );
    }

    // ========== Trace ==========

    #[test]
    fn test_trace_covers_every_token_in_order() {
        let mut trace = RecordingTrace::new();
        parse_with_trace(CANONICAL, &mut trace).expect("canonical program parses");

        // 26 tokens in the canonical program, each consumed exactly once.
        assert_eq!(trace.records.len(), 26);
        assert_eq!(
            trace.records[0],
            (TokenKind::Function, "function".to_string())
        );
        assert_eq!(trace.records[8], (TokenKind::TypeNumber, "number".to_string()));
        assert_eq!(trace.records[20], (TokenKind::Identifier, "log".to_string()));
        assert_eq!(
            trace.records[25],
            (TokenKind::RightBrace, "}".to_string())
        );
    }

    #[test]
    fn test_relational_operators_appear_in_the_trace() {
        let mut trace = RecordingTrace::new();
        parse_with_trace("function main() { if (1 > 2) { } }", &mut trace)
            .expect("program parses");

        assert!(trace
            .records
            .contains(&(TokenKind::Greater, ">".to_string())));
    }

    #[test]
    fn test_reparsing_yields_the_same_result_and_trace() {
        let mut first = RecordingTrace::new();
        let mut second = RecordingTrace::new();

        assert!(parse_with_trace(CANONICAL, &mut first).is_ok());
        assert!(parse_with_trace(CANONICAL, &mut second).is_ok());

        assert_eq!(first.records, second.records);
    }

    #[test]
    fn test_partial_trace_survives_a_failure() {
        let mut trace = RecordingTrace::new();
        let result = parse_with_trace("function main() { let x number; }", &mut trace);

        assert!(result.is_err());
        // Everything before the failure was consumed and recorded.
        assert_eq!(
            trace.records.last(),
            Some(&(TokenKind::Identifier, "x".to_string()))
        );
    }

    // ========== Syntactic errors ==========

    #[test]
    fn test_missing_colon_reports_expected_versus_found() {
        let error = error_of("function main() { let x number; }");
        assert_eq!(error.code, "E_SYNTAX");
        match error.kind {
            ErrorKind::Syntax(SyntaxCause::ExpectedKind {
                expected,
                found,
                ref lexeme,
            }) => {
                assert_eq!(expected, TokenKind::Colon);
                assert_eq!(found, TokenKind::TypeNumber);
                assert_eq!(lexeme, "number");
            }
            ref other => panic!("unexpected error kind: {:?}", other),
        }
    }

    #[test]
    fn test_bad_type_reports_the_decision_point() {
        let error = error_of("function main() { let x : string; }");
        match error.kind {
            ErrorKind::Syntax(SyntaxCause::UnexpectedToken {
                expected,
                found,
                ref lexeme,
            }) => {
                assert_eq!(expected, "'number' or 'float'");
                assert_eq!(found, TokenKind::Identifier);
                assert_eq!(lexeme, "string");
            }
            ref other => panic!("unexpected error kind: {:?}", other),
        }
    }

    #[test]
    fn test_console_requires_the_log_spelling() {
        let error = error_of("function main() { console.warn(x); }");
        match error.kind {
            ErrorKind::Syntax(SyntaxCause::ExpectedText {
                expected,
                found,
                ref lexeme,
            }) => {
                assert_eq!(expected, "log");
                assert_eq!(found, TokenKind::Identifier);
                assert_eq!(lexeme, "warn");
            }
            ref other => panic!("unexpected error kind: {:?}", other),
        }
    }

    #[test]
    fn test_write_argument_must_be_identifier_or_string() {
        let error = error_of("function main() { console.log(1); }");
        match error.kind {
            ErrorKind::Syntax(SyntaxCause::UnexpectedToken { expected, found, .. }) => {
                assert_eq!(expected, "an identifier or a string literal");
                assert_eq!(found, TokenKind::Number);
            }
            ref other => panic!("unexpected error kind: {:?}", other),
        }
    }

    #[test]
    fn test_declaration_after_command_is_rejected() {
        // Declarations must all precede commands.
        let error = error_of("function main() { x = 1; let y : number; }");
        match error.kind {
            ErrorKind::Syntax(SyntaxCause::ExpectedKind { expected, found, .. }) => {
                assert_eq!(expected, TokenKind::RightBrace);
                assert_eq!(found, TokenKind::Let);
            }
            ref other => panic!("unexpected error kind: {:?}", other),
        }
    }

    #[test]
    fn test_parenthesized_arithmetic_cannot_open_a_comparison() {
        // In a condition, a leading '(' always selects the parenthesized
        // relational alternative, so '(1 + 2) > 3' does not parse.
        let error = error_of("function main() { if ((1 + 2) > 3) { } }");
        match error.kind {
            ErrorKind::Syntax(SyntaxCause::UnexpectedToken { expected, .. }) => {
                assert_eq!(expected, "a relational operator");
            }
            ref other => panic!("unexpected error kind: {:?}", other),
        }
    }

    #[test]
    fn test_trailing_tokens_after_program_end() {
        let error = error_of("function main() { } let");
        match error.kind {
            ErrorKind::Syntax(SyntaxCause::TrailingInput { found, ref lexeme }) => {
                assert_eq!(found, TokenKind::Let);
                assert_eq!(lexeme, "let");
            }
            ref other => panic!("unexpected error kind: {:?}", other),
        }
    }

    #[test]
    fn test_premature_end_of_input() {
        let error = error_of("function main() {");
        match error.kind {
            ErrorKind::Syntax(SyntaxCause::UnexpectedEnd { expected }) => {
                assert_eq!(expected, "RIGHT_BRACE");
            }
            ref other => panic!("unexpected error kind: {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_expects_the_program_header() {
        let error = error_of("");
        match error.kind {
            ErrorKind::Syntax(SyntaxCause::UnexpectedEnd { expected }) => {
                assert_eq!(expected, "FUNCTION");
            }
            ref other => panic!("unexpected error kind: {:?}", other),
        }
    }

    #[test]
    fn test_reserved_print_keyword_is_not_a_command() {
        let error = error_of("function main() { print(x); }");
        match error.kind {
            ErrorKind::Syntax(SyntaxCause::ExpectedKind { expected, found, .. }) => {
                // commands() cannot start with PRINT, so the program
                // expects its closing brace next.
                assert_eq!(expected, TokenKind::RightBrace);
                assert_eq!(found, TokenKind::Print);
            }
            ref other => panic!("unexpected error kind: {:?}", other),
        }
    }

    #[test]
    fn test_missing_condition_reports_the_decision_point() {
        let error = error_of("function main() { if () { } }");
        match error.kind {
            ErrorKind::Syntax(SyntaxCause::UnexpectedToken { expected, found, .. }) => {
                assert_eq!(expected, "the start of a relational expression");
                assert_eq!(found, TokenKind::RightParen);
            }
            ref other => panic!("unexpected error kind: {:?}", other),
        }
    }

    // ========== Lexical errors through the parser ==========

    #[test]
    fn test_scanner_errors_propagate_unchanged() {
        let error = error_of("function main() { x = 1 @ 2; }");
        assert_eq!(error.code, "E_LEXICAL");
        assert_eq!(
            error.kind,
            ErrorKind::Lexical(LexicalCause::UnrecognizedCharacter('@'))
        );
    }

    #[test]
    fn test_unterminated_string_surfaces_from_parse() {
        let error = error_of("function main() { console.log(\"oops); }");
        assert_eq!(
            error.kind,
            ErrorKind::Lexical(LexicalCause::UnterminatedString)
        );
    }
}
