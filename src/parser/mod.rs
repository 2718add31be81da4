/*
 * ==========================================================================
 * MINIC - Check Before You Run!
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the MINIC recursive-descent parser.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic
 *   - Statement-level grammar
 *   - Expression-level grammar
 *   - Shared helper utilities
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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the `parse(source)` / `parse_with_trace(source, sink)` entry
///   points
pub mod parser;

/// Statement-level grammar:
/// - program header / body
/// - let / const declarations
/// - assignment, read, console.log, if / else, while, blocks
pub mod statements;

/// Expression-level grammar:
/// - arith_expr → term → factor
/// - rel_expr → rel_term, with `&&` / `||` chaining
pub mod expressions;

/// Shared parser helpers:
/// - lookahead inspection
/// - token consumption and tracing
/// - decision-point error construction
pub mod helpers;

pub use parser::{parse, parse_with_trace, Parser};
