/*
 * ==========================================================================
 * MINIC - Check Before You Run!
 * ==========================================================================
 *
 * Statement-level grammar procedures: the program header, declarations,
 * and the command forms. One procedure per nonterminal; selection at
 * every branching point is driven purely by the current lookahead's
 * kind, so one token of lookahead always suffices and nothing
 * backtracks.
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
    /// program := 'function' 'main' '(' ')' '{' body '}'
    ///
    /// Additionally fails if any token remains after the closing `}`;
    /// the whole input must be consumed.
    pub(crate) fn program(&mut self) -> Result<(), AnalysisError> {
        self.consume(TokenKind::Function)?;
        self.consume(TokenKind::Main)?;
        self.consume(TokenKind::LeftParen)?;
        self.consume(TokenKind::RightParen)?;
        self.consume(TokenKind::LeftBrace)?;
        self.body()?;
        self.consume(TokenKind::RightBrace)?;

        if let Some(token) = self.lookahead.as_ref() {
            return Err(AnalysisError::trailing_input(token));
        }

        Ok(())
    }

    /// body := declarations commands
    fn body(&mut self) -> Result<(), AnalysisError> {
        self.declarations()?;
        self.commands()
    }

    /// declarations := declaration*
    ///
    /// Loops while the lookahead can start a declaration.
    fn declarations(&mut self) -> Result<(), AnalysisError> {
        while matches!(
            self.lookahead_kind(),
            Some(TokenKind::Let | TokenKind::Const)
        ) {
            self.declaration()?;
        }
        Ok(())
    }

    /// declaration := ('let' | 'const') IDENTIFIER ':' type ';'
    fn declaration(&mut self) -> Result<(), AnalysisError> {
        match self.lookahead_kind() {
            Some(TokenKind::Let) => self.consume(TokenKind::Let)?,
            Some(TokenKind::Const) => self.consume(TokenKind::Const)?,
            _ => return Err(self.unexpected("'let' or 'const'")),
        }

        self.consume(TokenKind::Identifier)?;
        self.consume(TokenKind::Colon)?;
        self.type_spec()?;
        self.consume(TokenKind::Semicolon)
    }

    /// type := 'number' | 'float'
    fn type_spec(&mut self) -> Result<(), AnalysisError> {
        match self.lookahead_kind() {
            Some(TokenKind::TypeNumber) => self.consume(TokenKind::TypeNumber),
            Some(TokenKind::TypeFloat) => self.consume(TokenKind::TypeFloat),
            _ => Err(self.unexpected("'number' or 'float'")),
        }
    }

    /// commands := command*
    ///
    /// Loops while the lookahead is in the FIRST set of `command`.
    fn commands(&mut self) -> Result<(), AnalysisError> {
        while matches!(
            self.lookahead_kind(),
            Some(
                TokenKind::Identifier
                    | TokenKind::Read
                    | TokenKind::Console
                    | TokenKind::If
                    | TokenKind::While
                    | TokenKind::LeftBrace
            )
        ) {
            self.command()?;
        }
        Ok(())
    }

    /// command := assignment | read_stmt | write_stmt | conditional
    ///          | loop | block
    fn command(&mut self) -> Result<(), AnalysisError> {
        match self.lookahead_kind() {
            Some(TokenKind::Identifier) => self.assignment(),
            Some(TokenKind::Read) => self.read_statement(),
            Some(TokenKind::Console) => self.write_statement(),
            Some(TokenKind::If) => self.conditional(),
            Some(TokenKind::While) => self.while_loop(),
            Some(TokenKind::LeftBrace) => self.block(),
            _ => Err(self.unexpected("the start of a command")),
        }
    }

    /// assignment := IDENTIFIER '=' arith_expr ';'
    fn assignment(&mut self) -> Result<(), AnalysisError> {
        self.consume(TokenKind::Identifier)?;
        self.consume(TokenKind::Assign)?;
        self.arithmetic_expression()?;
        self.consume(TokenKind::Semicolon)
    }

    /// read_stmt := 'read' '(' IDENTIFIER ')' ';'
    fn read_statement(&mut self) -> Result<(), AnalysisError> {
        self.consume(TokenKind::Read)?;
        self.consume(TokenKind::LeftParen)?;
        self.consume(TokenKind::Identifier)?;
        self.consume(TokenKind::RightParen)?;
        self.consume(TokenKind::Semicolon)
    }

    /// write_stmt := 'console' '.' 'log' '(' (IDENTIFIER | STRING) ')' ';'
    ///
    /// `log` is an ordinary identifier required by exact lexeme, the
    /// only place the grammar inspects a token's spelling.
    fn write_statement(&mut self) -> Result<(), AnalysisError> {
        self.consume(TokenKind::Console)?;
        self.consume(TokenKind::Dot)?;
        self.consume_exact(TokenKind::Identifier, "log")?;
        self.consume(TokenKind::LeftParen)?;

        match self.lookahead_kind() {
            Some(TokenKind::Identifier) => self.consume(TokenKind::Identifier)?,
            Some(TokenKind::StringLiteral) => self.consume(TokenKind::StringLiteral)?,
            _ => return Err(self.unexpected("an identifier or a string literal")),
        }

        self.consume(TokenKind::RightParen)?;
        self.consume(TokenKind::Semicolon)
    }

    /// conditional := 'if' '(' rel_expr ')' block ('else' block)?
    fn conditional(&mut self) -> Result<(), AnalysisError> {
        self.consume(TokenKind::If)?;
        self.consume(TokenKind::LeftParen)?;
        self.relational_expression()?;
        self.consume(TokenKind::RightParen)?;
        self.block()?;

        if self.consume_if(TokenKind::Else)? {
            self.block()?;
        }

        Ok(())
    }

    /// loop := 'while' '(' rel_expr ')' block
    fn while_loop(&mut self) -> Result<(), AnalysisError> {
        self.consume(TokenKind::While)?;
        self.consume(TokenKind::LeftParen)?;
        self.relational_expression()?;
        self.consume(TokenKind::RightParen)?;
        self.block()
    }

    /// block := '{' commands '}'
    fn block(&mut self) -> Result<(), AnalysisError> {
        self.consume(TokenKind::LeftBrace)?;
        self.commands()?;
        self.consume(TokenKind::RightBrace)
    }
}
