/*
 * ==========================================================================
 * MINIC - Check Before You Run!
 * ==========================================================================
 *
 * File:      lib.rs
 * Purpose:   Public API of the MINIC language front end.
 *
 * MINIC is a syntax checker for a small imperative teaching language:
 * it answers only "does this text match the grammar?". No syntax tree is
 * built, no symbols are resolved, nothing executes.
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

pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod trace;

pub use diagnostics::DiagnosticPrinter;
pub use error::{AnalysisError, ErrorKind, LexicalCause, SyntaxCause};
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use parser::{parse, parse_with_trace, Parser};
pub use span::Span;
pub use trace::{ConsoleTrace, RecordingTrace, SilentTrace, TraceSink};
