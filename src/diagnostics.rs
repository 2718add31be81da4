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
use crate::span::Span;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for MINIC analysis errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the exact error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is intentionally inspired by `rustc` diagnostics, but
/// simplified for MINIC and designed to remain readable without color.
pub struct DiagnosticPrinter {
    /// Full source code of the file being checked.
    ///
    /// Stored as a single string so specific lines can be extracted for
    /// error reporting.
    source: String,

    /// Name of the source file (e.g. `main.mc`), used only for display.
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given source file.
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Prints a formatted error diagnostic to stderr.
    ///
    /// # Output Example
    /// ```text
    /// error[E_SYNTAX]: expected COLON, found TYPE_NUMBER ('number')
    ///   --> example.mc:2:9
    ///    |
    ///  2 |   let x number;
    ///    |         ^
    /// ```
    pub fn print(&self, error: &AnalysisError) {
        let Span { line, column } = error.span;

        let lines: Vec<&str> = self.source.lines().collect();

        // Lines are 1-indexed in diagnostics, but vectors are 0-indexed.
        let src_line = lines.get(line.saturating_sub(1)).copied().unwrap_or("");

        eprintln!(
            "error[{}]: {}\n  --> {}:{}:{}",
            error.code,
            error.message(),
            self.file_name,
            line,
            column
        );

        eprintln!("   |");
        eprintln!("{:>3} | {}", line, src_line);

        // Caret underline at the 1-based column.
        let mut underline = String::new();
        for _ in 1..column {
            underline.push(' ');
        }
        underline.push('^');

        eprintln!("   | {}", underline);

        if let Some(help) = &error.help {
            eprintln!("\nhelp: {}", help);
        }
    }
}
