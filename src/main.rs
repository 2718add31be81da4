/*
 * ==========================================================================
 * MINIC - Check Before You Run!
 * ==========================================================================
 *
 * File:      main.rs
 * Purpose:   CLI driver for the MINIC syntax checker.
 *
 * The driver owns all I/O: it reads the source file, hands the text to
 * the front end, and renders the outcome. Exit code 0 means the program
 * conforms to the grammar; any analysis error exits non-zero after a
 * diagnostic.
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

use std::env;
use std::fs;
use std::process;

use minic::{parse_with_trace, tokenize, ConsoleTrace, DiagnosticPrinter};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage() {
    eprintln!("Usage: minic <file.mc> [--dump-tokens]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --dump-tokens    print the scanned token stream as JSON and exit");
    eprintln!("  -h, --help       show this help");
    eprintln!("  -v, --version    show the version");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "--help" | "-h" => print_usage(),
        "--version" | "-v" => println!("minic {}", VERSION),
        filename => {
            let dump_tokens = args.iter().skip(2).any(|arg| arg == "--dump-tokens");
            check_file(filename, dump_tokens);
        }
    }
}

fn check_file(filename: &str, dump_tokens: bool) {
    let source = match fs::read_to_string(filename) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read '{}': {}", filename, err);
            process::exit(1);
        }
    };

    if dump_tokens {
        dump_token_stream(filename, &source);
        return;
    }

    let mut trace = ConsoleTrace;
    match parse_with_trace(&source, &mut trace) {
        Ok(()) => {
            println!();
            println!("{}: syntax OK", filename);
        }
        Err(error) => {
            DiagnosticPrinter::new(filename, source).print(&error);
            process::exit(1);
        }
    }
}

/// Runs the scanner to completion and prints the token stream as JSON.
fn dump_token_stream(filename: &str, source: &str) {
    match tokenize(source) {
        Ok(tokens) => {
            let json = serde_json::to_string_pretty(&tokens)
                .expect("token stream serializes to JSON");
            println!("{}", json);
        }
        Err(error) => {
            DiagnosticPrinter::new(filename, source).print(&error);
            process::exit(1);
        }
    }
}
