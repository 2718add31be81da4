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

use crate::error::AnalysisError;
use crate::lexer::keywords::keyword_kind;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// The MINIC lexical scanner.
///
/// `Lexer` walks the source text character by character and classifies one
/// token per `next_token` call. It is **pull-based**: the parser requests
/// exactly the tokens it consumes, and nothing is buffered beyond the
/// cursor itself.
///
/// The cursor advances monotonically to end of input; it is never reset
/// or rewound. Line and column tracking lives entirely in `advance`, the
/// single character-consumption primitive.
pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    column: usize,
}

/// Scans an entire source text into a token vector.
///
/// Convenience wrapper used by the `--dump-tokens` CLI mode and by tests;
/// the parser itself pulls tokens one at a time instead.
pub fn tokenize(source: &str) -> Result<Vec<Token>, AnalysisError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }

    Ok(tokens)
}

impl Lexer {
    /// Creates a new scanner over `source`, with the cursor at line 1,
    /// column 1.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            column: 1,
        }
    }

    /// The current cursor position.
    ///
    /// Between tokens this is where the *next* token would start; at end
    /// of input it is one column past the last character. The parser uses
    /// it to anchor premature-end-of-input errors.
    pub fn position(&self) -> Span {
        Span::new(self.line, self.column)
    }

    /// Scans and returns the next token, or `None` at end of input.
    ///
    /// # Behavior
    /// - First skips insignificant content: whitespace, `#` line comments,
    ///   and `/* ... */` block comments.
    /// - Then classifies the first remaining character, trying in order:
    ///   string literal, number, identifier/keyword, operator/delimiter.
    ///
    /// # Errors
    /// Raises immediately at the point of detection, carrying the
    /// starting position of the offending token:
    /// - unterminated string (at the opening quote)
    /// - unterminated block comment (at the opening `/*`)
    /// - unrecognized character (at the character itself)
    pub fn next_token(&mut self) -> Result<Option<Token>, AnalysisError> {
        self.skip_insignificant()?;

        if self.is_at_end() {
            return Ok(None);
        }

        let span = self.position();
        let ch = self.peek();

        if ch == '"' {
            return self.string(span).map(Some);
        }

        // A leading '.' starts a number only when a digit follows;
        // otherwise it falls through to the DOT delimiter.
        if ch.is_numeric() || (ch == '.' && self.peek_next().is_numeric()) {
            return Ok(Some(self.number(span)));
        }

        if ch.is_alphabetic() || ch == '_' {
            return Ok(Some(self.identifier(span)));
        }

        self.operator(span).map(Some)
    }

    /// Skips runs of whitespace, `#` line comments, and block comments,
    /// repeating until none of the three matches.
    fn skip_insignificant(&mut self) -> Result<(), AnalysisError> {
        loop {
            if self.is_at_end() {
                return Ok(());
            }

            let ch = self.peek();

            if ch.is_whitespace() {
                self.advance();
                continue;
            }

            if ch == '#' {
                while !self.is_at_end() && self.peek() != '\n' {
                    self.advance();
                }
                continue;
            }

            if ch == '/' && self.peek_next() == '*' {
                self.block_comment()?;
                continue;
            }

            return Ok(());
        }
    }

    /// Skips a block comment delimited by `/* ... */`.
    ///
    /// # Errors
    /// If end of input is reached before the closing `*/`, reports an
    /// unterminated block comment at the comment's opening position.
    fn block_comment(&mut self) -> Result<(), AnalysisError> {
        let opening = self.position();

        self.advance(); // '/'
        self.advance(); // '*'

        while !self.is_at_end() {
            if self.peek() == '*' && self.peek_next() == '/' {
                self.advance();
                self.advance();
                return Ok(());
            }
            self.advance();
        }

        Err(AnalysisError::unterminated_block_comment(opening))
    }

    /// Scans a string literal opened by `"`.
    ///
    /// All characters are accumulated verbatim, with no escape
    /// interpretation, until the closing quote. The surrounding quotes
    /// are not part of the lexeme.
    ///
    /// # Errors
    /// If end of input arrives before the closing quote, reports an
    /// unterminated string at the opening quote's position.
    fn string(&mut self, span: Span) -> Result<Token, AnalysisError> {
        self.advance(); // opening quote

        let mut content = String::new();
        while !self.is_at_end() && self.peek() != '"' {
            content.push(self.advance());
        }

        if self.is_at_end() {
            return Err(AnalysisError::unterminated_string(span));
        }

        self.advance(); // closing quote

        Ok(Token::new(TokenKind::StringLiteral, content, span))
    }

    /// Scans an integer or floating-point numeric literal.
    ///
    /// Consumes a maximal run of digits, then a `.` and a second maximal
    /// run only when the `.` is immediately followed by a digit. A
    /// trailing `.` with no digit after it is left for the next scan, so
    /// `3.` yields NUMBER `"3"` and the `.` classifies separately as DOT.
    fn number(&mut self, span: Span) -> Token {
        let mut lexeme = String::new();

        if self.peek().is_numeric() {
            lexeme.push(self.advance());
            while !self.is_at_end() && self.peek().is_numeric() {
                lexeme.push(self.advance());
            }
        }

        if !self.is_at_end() && self.peek() == '.' && self.peek_next().is_numeric() {
            lexeme.push(self.advance()); // '.'
            while !self.is_at_end() && self.peek().is_numeric() {
                lexeme.push(self.advance());
            }
        }

        Token::new(TokenKind::Number, lexeme, span)
    }

    /// Scans an identifier or keyword token.
    ///
    /// Reads all alphanumeric and underscore characters (maximal munch),
    /// then looks the spelling up in the reserved-word table. Spellings
    /// not in the table classify as identifiers.
    fn identifier(&mut self, span: Span) -> Token {
        let mut lexeme = String::new();
        lexeme.push(self.advance());

        while !self.is_at_end() && (self.peek().is_alphanumeric() || self.peek() == '_') {
            lexeme.push(self.advance());
        }

        let kind = keyword_kind(&lexeme).unwrap_or(TokenKind::Identifier);

        Token::new(kind, lexeme, span)
    }

    /// Classifies an operator or delimiter, applying the greedy
    /// two-character check before falling back to the single character.
    ///
    /// # Errors
    /// A lone `!`, `&`, or `|` without its partner character, like any
    /// character outside the language's alphabet, is an unrecognized
    /// character error at that character's own position.
    fn operator(&mut self, span: Span) -> Result<Token, AnalysisError> {
        let ch = self.advance();

        let token = match ch {
            '+' => Token::new(TokenKind::Plus, "+", span),
            '-' => Token::new(TokenKind::Minus, "-", span),
            '*' => Token::new(TokenKind::Star, "*", span),
            '/' => Token::new(TokenKind::Slash, "/", span),
            '(' => Token::new(TokenKind::LeftParen, "(", span),
            ')' => Token::new(TokenKind::RightParen, ")", span),
            '{' => Token::new(TokenKind::LeftBrace, "{", span),
            '}' => Token::new(TokenKind::RightBrace, "}", span),
            ';' => Token::new(TokenKind::Semicolon, ";", span),
            ':' => Token::new(TokenKind::Colon, ":", span),
            '.' => Token::new(TokenKind::Dot, ".", span),
            '=' => {
                if self.match_char('=') {
                    Token::new(TokenKind::EqualEqual, "==", span)
                } else {
                    Token::new(TokenKind::Assign, "=", span)
                }
            }
            '>' => {
                if self.match_char('=') {
                    Token::new(TokenKind::GreaterEqual, ">=", span)
                } else {
                    Token::new(TokenKind::Greater, ">", span)
                }
            }
            '<' => {
                if self.match_char('=') {
                    Token::new(TokenKind::LessEqual, "<=", span)
                } else {
                    Token::new(TokenKind::Less, "<", span)
                }
            }
            '!' => {
                if self.match_char('=') {
                    Token::new(TokenKind::BangEqual, "!=", span)
                } else {
                    return Err(AnalysisError::unrecognized_character(ch, span));
                }
            }
            '&' => {
                if self.match_char('&') {
                    Token::new(TokenKind::AndAnd, "&&", span)
                } else {
                    return Err(AnalysisError::unrecognized_character(ch, span));
                }
            }
            '|' => {
                if self.match_char('|') {
                    Token::new(TokenKind::OrOr, "||", span)
                } else {
                    return Err(AnalysisError::unrecognized_character(ch, span));
                }
            }
            _ => return Err(AnalysisError::unrecognized_character(ch, span)),
        };

        Ok(token)
    }

    /// Conditionally consumes the next character.
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() {
            return false;
        }
        if self.chars[self.current] != expected {
            return false;
        }
        self.advance();
        true
    }

    /// Advances the cursor by one character and returns it.
    ///
    /// The only place line/column bookkeeping happens: a newline bumps
    /// the line and resets the column to 1.
    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        ch
    }

    /// Returns the current character without consuming it, `'\0'` at end
    /// of input.
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    /// Returns the character after the current one without consuming it,
    /// `'\0'` if the lookahead is out of range.
    fn peek_next(&self) -> char {
        if self.current + 1 >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.current + 1]
        }
    }

    /// Determines whether the scanner has reached the end of input.
    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}
