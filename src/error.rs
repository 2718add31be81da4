/*
 * ==========================================================================
 * MINIC - Check Before You Run!
 * ==========================================================================
 *
 * License:
 * This file is part of the MINIC language front end.
 *
 * MINIC is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use std::fmt;

/// What went wrong while scanning.
///
/// Lexical errors are raised by the scanner at the point of detection and
/// never caught by it; the span on the surrounding `AnalysisError` marks
/// the **starting** position of the offending construct.
#[derive(Debug, Clone, PartialEq)]
pub enum LexicalCause {
    /// A `"` string literal reached end of input before its closing quote.
    UnterminatedString,

    /// A `/*` block comment reached end of input before its closing `*/`.
    UnterminatedBlockComment,

    /// A character matched no lexical rule. Also covers a lone `!`, `&`,
    /// or `|` missing its partner character.
    UnrecognizedCharacter(char),
}

/// What went wrong while parsing.
///
/// Each case carries the expected-versus-found data structurally, so a
/// caller can format a message (or assert on the exact mismatch) without
/// re-deriving anything.
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxCause {
    /// The lookahead's kind differed from the one the grammar requires.
    ExpectedKind {
        expected: TokenKind,
        found: TokenKind,
        lexeme: String,
    },

    /// The lookahead had the right kind but the wrong spelling.
    ///
    /// Only raised for the contextual `log` identifier after `console` `.`.
    ExpectedText {
        expected: &'static str,
        found: TokenKind,
        lexeme: String,
    },

    /// No alternative matched at a grammar decision point. `expected`
    /// describes the legal choices in words (e.g. `"'number' or 'float'"`).
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
        lexeme: String,
    },

    /// Tokens remained after the closing `}` of `main`.
    TrailingInput { found: TokenKind, lexeme: String },

    /// Input ran out where a token was required.
    UnexpectedEnd { expected: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    Lexical(LexicalCause),
    Syntax(SyntaxCause),
}

/// A fatal analysis error, lexical or syntactic.
///
/// Analysis halts at the first occurrence: there is no recovery and no
/// multi-error reporting. Trace records emitted before the failure
/// remain valid.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisError {
    /// Stable error code (`E_LEXICAL`, `E_SYNTAX`).
    pub code: &'static str,

    /// The structured cause.
    pub kind: ErrorKind,

    /// Primary source location.
    pub span: Span,

    /// Optional note / help text.
    pub help: Option<String>,
}

impl AnalysisError {
    fn lexical(cause: LexicalCause, span: Span) -> Self {
        Self {
            code: "E_LEXICAL",
            kind: ErrorKind::Lexical(cause),
            span,
            help: None,
        }
    }

    fn syntax(cause: SyntaxCause, span: Span) -> Self {
        Self {
            code: "E_SYNTAX",
            kind: ErrorKind::Syntax(cause),
            span,
            help: None,
        }
    }

    /// A string literal left open at end of input. `span` is the opening
    /// quote's position.
    pub fn unterminated_string(span: Span) -> Self {
        Self::lexical(LexicalCause::UnterminatedString, span)
            .with_help("add a closing '\"' before the end of the file")
    }

    /// A block comment left open at end of input. `span` is the opening
    /// `/*`'s position.
    pub fn unterminated_block_comment(span: Span) -> Self {
        Self::lexical(LexicalCause::UnterminatedBlockComment, span)
            .with_help("close the comment with '*/'")
    }

    /// A character no lexical rule accepts, at its own position.
    pub fn unrecognized_character(ch: char, span: Span) -> Self {
        Self::lexical(LexicalCause::UnrecognizedCharacter(ch), span)
    }

    /// The grammar required `expected` but the lookahead was `found`.
    pub fn expected_kind(expected: TokenKind, found: &Token) -> Self {
        Self::syntax(
            SyntaxCause::ExpectedKind {
                expected,
                found: found.kind,
                lexeme: found.lexeme.clone(),
            },
            found.span,
        )
    }

    /// The grammar required the exact spelling `expected`.
    pub fn expected_text(expected: &'static str, found: &Token) -> Self {
        Self::syntax(
            SyntaxCause::ExpectedText {
                expected,
                found: found.kind,
                lexeme: found.lexeme.clone(),
            },
            found.span,
        )
    }

    /// No alternative matched at a decision point.
    pub fn unexpected_token(expected: &'static str, found: &Token) -> Self {
        Self::syntax(
            SyntaxCause::UnexpectedToken {
                expected,
                found: found.kind,
                lexeme: found.lexeme.clone(),
            },
            found.span,
        )
    }

    /// Tokens remained after the program's closing brace.
    pub fn trailing_input(found: &Token) -> Self {
        Self::syntax(
            SyntaxCause::TrailingInput {
                found: found.kind,
                lexeme: found.lexeme.clone(),
            },
            found.span,
        )
    }

    /// Input ended where `expected` was required. `span` is the scanner's
    /// end-of-input position.
    pub fn unexpected_end(expected: &'static str, span: Span) -> Self {
        Self::syntax(SyntaxCause::UnexpectedEnd { expected }, span)
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Renders the human-readable message from the structured cause.
    pub fn message(&self) -> String {
        match &self.kind {
            ErrorKind::Lexical(cause) => match cause {
                LexicalCause::UnterminatedString => "unterminated string literal".to_string(),
                LexicalCause::UnterminatedBlockComment => {
                    "unterminated block comment".to_string()
                }
                LexicalCause::UnrecognizedCharacter(ch) => {
                    format!("unrecognized character '{}'", ch)
                }
            },
            ErrorKind::Syntax(cause) => match cause {
                SyntaxCause::ExpectedKind {
                    expected,
                    found,
                    lexeme,
                } => format!(
                    "expected {}, found {} ('{}')",
                    expected.name(),
                    found.name(),
                    lexeme
                ),
                SyntaxCause::ExpectedText {
                    expected,
                    found,
                    lexeme,
                } => format!(
                    "expected '{}', found {} ('{}')",
                    expected,
                    found.name(),
                    lexeme
                ),
                SyntaxCause::UnexpectedToken {
                    expected,
                    found,
                    lexeme,
                } => format!(
                    "expected {}, found {} ('{}')",
                    expected,
                    found.name(),
                    lexeme
                ),
                SyntaxCause::TrailingInput { found, lexeme } => format!(
                    "unexpected input after the end of the program: {} ('{}')",
                    found.name(),
                    lexeme
                ),
                SyntaxCause::UnexpectedEnd { expected } => {
                    format!("expected {}, found end of input", expected)
                }
            },
        }
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AnalysisError {}
