/*
 * ==========================================================================
 * MINIC - Check Before You Run!
 * ==========================================================================
 *
 * File:      lexer/keywords.rs
 * Purpose:   Defines the reserved-word table for the MINIC language.
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

use crate::lexer::token::TokenKind;

/// Maps a reserved spelling to its keyword `TokenKind`.
///
/// This function is used exclusively by the scanner, **after** an
/// identifier-shaped lexeme has been fully scanned, to distinguish
/// user-defined identifiers from language-defined keywords. Any spelling
/// not present here classifies as `TokenKind::Identifier`.
///
/// # Language Rules
/// - Lookup is case-sensitive.
/// - `int` and `number` are two spellings of the same type keyword.
/// - `log` is deliberately **not** reserved: it is a contextual
///   identifier the parser requires by lexeme after `console` `.`.
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    match word {
        "function" => Some(TokenKind::Function),
        "main" => Some(TokenKind::Main),
        "let" => Some(TokenKind::Let),
        "const" => Some(TokenKind::Const),
        "int" | "number" => Some(TokenKind::TypeNumber),
        "float" => Some(TokenKind::TypeFloat),
        "print" => Some(TokenKind::Print),
        "read" => Some(TokenKind::Read),
        "console" => Some(TokenKind::Console),
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        "while" => Some(TokenKind::While),
        _ => None,
    }
}
