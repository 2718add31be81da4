/*
 * ==========================================================================
 * MINIC - Check Before You Run!
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for the MINIC lexical scanner.
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

/// Reserved-word table: spelling → keyword kind.
pub mod keywords;

/// The pull-based character scanner.
pub mod lexer;

/// Token kinds and the token value itself.
pub mod token;

pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
