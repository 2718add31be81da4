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
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;

impl<'t> Parser<'t> {
    /// Refreshes the lookahead with the next token from the scanner.
    ///
    /// Any lexical error the scanner raises at this point propagates
    /// unchanged.
    pub(crate) fn advance(&mut self) -> Result<(), AnalysisError> {
        self.lookahead = self.lexer.next_token()?;
        Ok(())
    }

    /// Checks the lookahead's kind without consuming it. `false` at end
    /// of input.
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.lookahead
            .as_ref()
            .map_or(false, |token| token.kind == kind)
    }

    /// The lookahead's kind, `None` at end of input.
    ///
    /// Every grammar decision point selects its alternative from this
    /// value alone.
    pub(crate) fn lookahead_kind(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|token| token.kind)
    }

    /// Consumes a token of the required kind or fails.
    ///
    /// This is the parser's single consumption primitive: on success the
    /// consumed token is reported to the trace sink and the lookahead is
    /// refreshed from the scanner. On mismatch the structured
    /// expected-versus-found error is returned and the parse is over;
    /// errors are fatal and the parser is not reusable afterwards.
    pub(crate) fn consume(&mut self, expected: TokenKind) -> Result<(), AnalysisError> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => {
                return Err(AnalysisError::unexpected_end(
                    expected.name(),
                    self.lexer.position(),
                ))
            }
        };

        if token.kind != expected {
            return Err(AnalysisError::expected_kind(expected, &token));
        }

        self.trace.token_consumed(&token);
        self.advance()
    }

    /// Consumes a token of the required kind **and** exact lexeme.
    ///
    /// Used only for the contextual `log` identifier in
    /// `console` `.` `log`: `log` is not a keyword, so the kind check
    /// alone cannot distinguish it.
    pub(crate) fn consume_exact(
        &mut self,
        expected: TokenKind,
        text: &'static str,
    ) -> Result<(), AnalysisError> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => {
                return Err(AnalysisError::unexpected_end(
                    expected.name(),
                    self.lexer.position(),
                ))
            }
        };

        if token.kind != expected {
            return Err(AnalysisError::expected_kind(expected, &token));
        }
        if token.lexeme != text {
            return Err(AnalysisError::expected_text(text, &token));
        }

        self.trace.token_consumed(&token);
        self.advance()
    }

    /// Consumes the token if the lookahead has the given kind.
    ///
    /// Returns whether it did; the token stream is left untouched
    /// otherwise. Drives the tail loops of the expression grammar and the
    /// optional `else`.
    pub(crate) fn consume_if(&mut self, kind: TokenKind) -> Result<bool, AnalysisError> {
        if self.check(kind) {
            self.consume(kind)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Builds the no-alternative-matched error for a decision point,
    /// naming the legal choices. Points at the lookahead, or at the
    /// scanner's end-of-input position when input ran out.
    pub(crate) fn unexpected(&self, expected: &'static str) -> AnalysisError {
        match self.lookahead.as_ref() {
            Some(token) => AnalysisError::unexpected_token(expected, token),
            None => AnalysisError::unexpected_end(expected, self.lexer.position()),
        }
    }
}
