/*
 * ==========================================================================
 * MINIC - Check Before You Run!
 * ==========================================================================
 *
 * File:      lexer/token.rs
 * Purpose:   Defines the fundamental lexical token types used by the MINIC
 *            front end during the scanning and parsing stages.
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

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// Represents the **category of a lexical token** in the MINIC language.
///
/// `TokenKind` identifies how a sequence of characters from the source
/// code should be interpreted by the parser.
///
/// # Front-End Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser → accept / reject
/// ```
///
/// The set is closed: every grammar decision point matches exhaustively
/// over it, so adding a kind forces every decision point to be revisited.
/// End of input is *not* a kind; the scanner signals it by returning no
/// token at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// The `function` keyword opening the program header.
    Function,

    /// The `main` keyword naming the single entry point.
    Main,

    /// The `let` declaration keyword.
    Let,

    /// The `const` declaration keyword.
    Const,

    /// The integer type keyword. Spelled `number` or `int` in source.
    TypeNumber,

    /// The `float` type keyword.
    TypeFloat,

    /// The `print` keyword.
    ///
    /// Reserved by the language but used by no grammar production; a
    /// program using it fails at parse time with an unexpected token.
    Print,

    /// The `read` input keyword.
    Read,

    /// The `console` keyword heading a `console.log(...)` statement.
    Console,

    /// The `if` keyword.
    If,

    /// The `else` keyword.
    Else,

    /// The `while` keyword.
    While,

    /// A user-defined name.
    ///
    /// Used for:
    /// - Variable names in declarations and assignments
    /// - The contextual `log` following `console` `.`
    Identifier,

    /// A numeric literal.
    ///
    /// Includes:
    /// - Integer values: `42`
    /// - Floating-point values: `3.14`, `.5`
    Number,

    /// A double-quoted string literal.
    ///
    /// The lexeme holds the raw inner content, without the quotes and
    /// without any escape processing.
    StringLiteral,

    /// `+`
    Plus,

    /// `-`
    Minus,

    /// `*`
    Star,

    /// `/`
    Slash,

    /// `=` (assignment)
    Assign,

    /// `>`
    Greater,

    /// `>=`
    GreaterEqual,

    /// `<`
    Less,

    /// `<=`
    LessEqual,

    /// `==` (comparison)
    EqualEqual,

    /// `!=`
    BangEqual,

    /// `&&`
    AndAnd,

    /// `||`
    OrOr,

    /// `(`
    LeftParen,

    /// `)`
    RightParen,

    /// `{`
    LeftBrace,

    /// `}`
    RightBrace,

    /// `;`
    Semicolon,

    /// `:`
    Colon,

    /// `.`
    Dot,
}

impl TokenKind {
    /// Stable uppercase display name, used in trace lines and error
    /// messages (`IDENTIFIER`, `NUMBER`, `COLON`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Function => "FUNCTION",
            TokenKind::Main => "MAIN",
            TokenKind::Let => "LET",
            TokenKind::Const => "CONST",
            TokenKind::TypeNumber => "TYPE_NUMBER",
            TokenKind::TypeFloat => "TYPE_FLOAT",
            TokenKind::Print => "PRINT",
            TokenKind::Read => "READ",
            TokenKind::Console => "CONSOLE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::BangEqual => "NOT_EQUAL",
            TokenKind::AndAnd => "LOGICAL_AND",
            TokenKind::OrOr => "LOGICAL_OR",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::Dot => "DOT",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Represents a **single lexical token** produced by the MINIC scanner.
///
/// A `Token` is a fully classified unit of source code consisting of:
/// - A token category (`TokenKind`)
/// - The original source text (`lexeme`)
/// - The starting position for error reporting
///
/// # Example Tokens
/// ```text
/// let      →  { kind: Let,        lexeme: "let",   span: 2:3 }
/// total    →  { kind: Identifier, lexeme: "total", span: 2:7 }
/// 42       →  { kind: Number,     lexeme: "42",    span: 3:9 }
/// ```
///
/// Tokens are created on demand by the scanner, consumed exactly once by
/// the parser, and never mutated or reused.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    ///
    /// Numbers and identifiers keep their literal spelling; string
    /// literals keep the raw inner content.
    pub lexeme: String,

    /// The starting position of the lexeme in the source.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**.
    ///
    /// Prints only the token's lexeme (the exact source text) rather than
    /// its full internal structure, so error messages show users what
    /// they wrote.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
