/*
 * ==========================================================================
 * MINIC - Check Before You Run!
 * ==========================================================================
 *
 * Expression-level grammar procedures.
 *
 * Arithmetic expressions have exactly two precedence levels (term over
 * factor); relational expressions chain `&&` and `||` at a single level,
 * left to right. The left-recursive productions are implemented as
 * explicit tail loops: parse one operand, then keep consuming an
 * operator-and-operand pair while the lookahead matches. Termination is
 * immediate once the lookahead stops matching.
 *
 * --------------------------------------------------------------------------
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
    /// arith_expr := term (('+' | '-') term)*
    pub(crate) fn arithmetic_expression(&mut self) -> Result<(), AnalysisError> {
        self.term()?;

        while self.consume_if(TokenKind::Plus)? || self.consume_if(TokenKind::Minus)? {
            self.term()?;
        }

        Ok(())
    }

    /// term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<(), AnalysisError> {
        self.factor()?;

        while self.consume_if(TokenKind::Star)? || self.consume_if(TokenKind::Slash)? {
            self.factor()?;
        }

        Ok(())
    }

    /// factor := NUMBER | IDENTIFIER | '(' arith_expr ')'
    fn factor(&mut self) -> Result<(), AnalysisError> {
        match self.lookahead_kind() {
            Some(TokenKind::Number) => self.consume(TokenKind::Number),
            Some(TokenKind::Identifier) => self.consume(TokenKind::Identifier),
            Some(TokenKind::LeftParen) => {
                self.consume(TokenKind::LeftParen)?;
                self.arithmetic_expression()?;
                self.consume(TokenKind::RightParen)
            }
            _ => Err(self.unexpected("a number, an identifier, or '('")),
        }
    }

    /// rel_expr := rel_term (logic_op rel_term)*
    ///
    /// `&&` and `||` share one precedence level and chain left to right.
    /// No evaluator exists, so no evaluation order is implied.
    pub(crate) fn relational_expression(&mut self) -> Result<(), AnalysisError> {
        match self.lookahead_kind() {
            Some(TokenKind::Number | TokenKind::Identifier | TokenKind::LeftParen) => {
                self.relational_term()?;
            }
            _ => return Err(self.unexpected("the start of a relational expression")),
        }

        while self.consume_if(TokenKind::AndAnd)? || self.consume_if(TokenKind::OrOr)? {
            self.relational_term()?;
        }

        Ok(())
    }

    /// rel_term := (arith_expr rel_op arith_expr) | '(' rel_expr ')'
    ///
    /// A leading `(` always selects the parenthesized relational
    /// alternative, never a parenthesized arithmetic operand; that keeps
    /// the alternatives distinguishable under one token of lookahead.
    fn relational_term(&mut self) -> Result<(), AnalysisError> {
        match self.lookahead_kind() {
            Some(TokenKind::Number | TokenKind::Identifier) => {
                self.arithmetic_expression()?;
                self.relational_operator()?;
                self.arithmetic_expression()
            }
            Some(TokenKind::LeftParen) => {
                self.consume(TokenKind::LeftParen)?;
                self.relational_expression()?;
                self.consume(TokenKind::RightParen)
            }
            _ => Err(self.unexpected("an arithmetic comparison or '('")),
        }
    }

    /// rel_op := '>' | '>=' | '<' | '<=' | '==' | '!='
    fn relational_operator(&mut self) -> Result<(), AnalysisError> {
        match self.lookahead_kind() {
            Some(
                op @ (TokenKind::Greater
                | TokenKind::GreaterEqual
                | TokenKind::Less
                | TokenKind::LessEqual
                | TokenKind::EqualEqual
                | TokenKind::BangEqual),
            ) => self.consume(op),
            _ => Err(self.unexpected("a relational operator")),
        }
    }
}
