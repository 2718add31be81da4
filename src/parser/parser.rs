/*
 * ==========================================================================
 * MINIC - Check Before You Run!
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public
 * `parse()` / `parse_with_trace()` driver functions used to validate a
 * MINIC source text against the language grammar.
 *
 * The parsing implementation itself is split across multiple modules:
 * - `statements.rs`   → Program, declaration, and command grammar
 * - `expressions.rs`  → Arithmetic and relational expression grammar
 * - `helpers.rs`      → Lookahead inspection and token consumption
 *
 * This file serves as the **root coordinator** of the parsing process.
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
use crate::lexer::lexer::Lexer;
use crate::lexer::token::Token;
use crate::trace::{SilentTrace, TraceSink};

/// The core MINIC recursive-descent parser.
///
/// This structure maintains:
/// - The scanner it pulls tokens from, in lock-step
/// - A **single** lookahead token (`None` marks end of input)
/// - The trace sink notified once per consumed token
///
/// The lookahead always equals the next token the scanner would produce
/// if asked now; it is refreshed only immediately after a successful
/// consume. The parser never looks further ahead and never backtracks.
///
/// The actual grammar logic is implemented through extension modules
/// (`statements`, `expressions`, `helpers`) via additional `impl Parser`
/// blocks.
pub struct Parser<'t> {
    /// The scanner supplying tokens on demand.
    pub(crate) lexer: Lexer,

    /// The one pending token not yet consumed.
    pub(crate) lookahead: Option<Token>,

    /// Observer for successfully consumed tokens.
    pub(crate) trace: &'t mut dyn TraceSink,
}

/// Validates a complete MINIC source text against the grammar.
///
/// Each invocation owns an independent scanner + lookahead pair, so
/// re-running on the same source always yields the same result. No
/// state survives between calls.
///
/// # Returns
/// - `Ok(())` once every token has been consumed and the program
///   nonterminal accepted.
/// - The first `AnalysisError` (lexical or syntactic) otherwise.
pub fn parse(source: &str) -> Result<(), AnalysisError> {
    let mut trace = SilentTrace;
    parse_with_trace(source, &mut trace)
}

/// Like [`parse`], but reporting every consumed token to `trace` in
/// consumption order. Records delivered before a failure are valid.
pub fn parse_with_trace(
    source: &str,
    trace: &mut dyn TraceSink,
) -> Result<(), AnalysisError> {
    let mut parser = Parser::new(Lexer::new(source), trace);
    parser.parse()
}

impl<'t> Parser<'t> {
    /// Creates a parser over `lexer`. The lookahead starts empty and is
    /// primed by [`Parser::parse`].
    pub fn new(lexer: Lexer, trace: &'t mut dyn TraceSink) -> Self {
        Self {
            lexer,
            lookahead: None,
            trace,
        }
    }

    /// Runs the top nonterminal over the whole token stream.
    ///
    /// Priming the lookahead is the first token pull, so a lexical error
    /// at the very start of the input surfaces here too.
    pub fn parse(&mut self) -> Result<(), AnalysisError> {
        self.advance()?;
        self.program()
    }
}
