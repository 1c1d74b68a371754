//! A tiny `wc` built on an option schema.
//!
//! Shows the boundary an embedding tool is responsible for: declaring the
//! schema, parsing `std::env::args`, printing help, and turning schema or
//! parse errors into a diagnostic and a non-zero exit status.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p optschema-demos --example wordcount -- -lw Cargo.toml
//! cargo run -p optschema-demos --example wordcount -- --help
//! RUST_LOG=debug cargo run -p optschema-demos --example wordcount -- --wor README.md
//! ```

use std::process::ExitCode;

use optschema_core::{OptionSchema, ParseError, SchemaError};
use optschema_demos::init_tracing;

#[derive(Debug, Default)]
struct Counts {
    lines: bool,
    words: bool,
    bytes: bool,
}

fn schema() -> Result<OptionSchema, SchemaError> {
    OptionSchema::new()
        .add("help", Some('h'), "Show this help message and exit")?
        .add("lines", Some('l'), "Print the newline counts")?
        .add("words", Some('w'), "Print the word counts")?
        .add("bytes", Some('c'), "Print the byte counts")?
        .add_required_with_action(
            "min-length",
            Some('m'),
            "N",
            "Only count words of at least N characters\n(default: 1)",
            |o| {
                o.argument_value()
                    .parse::<usize>()
                    .map(|_| ())
                    .map_err(|e| ParseError::rejected_with_source(o, format!("{o}: {e}"), e))
            },
        )
}

fn main() -> ExitCode {
    init_tracing();

    let schema = match schema() {
        Ok(schema) => schema,
        Err(e) => {
            eprintln!("wordcount: bad option declaration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let setting = match schema.parse(std::env::args().skip(1)) {
        Ok(setting) => setting,
        Err(e) => {
            eprintln!("wordcount: {e}");
            eprintln!("Try 'wordcount --help' for more information.");
            return ExitCode::from(2);
        }
    };

    let mut counts = Counts::default();
    let mut min_length = 1;
    for option in setting.options() {
        match option.name() {
            "help" => {
                println!("Usage: wordcount [OPTION]... [FILE]...");
                println!();
                for line in schema.help_message() {
                    println!("  {line}");
                }
                return ExitCode::SUCCESS;
            }
            "lines" => counts.lines = true,
            "words" => counts.words = true,
            "bytes" => counts.bytes = true,
            "min-length" => {
                min_length = option
                    .argument_value()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(min_length);
            }
            _ => {}
        }
    }
    if !(counts.lines || counts.words || counts.bytes) {
        counts = Counts {
            lines: true,
            words: true,
            bytes: true,
        };
    }

    let mut status = ExitCode::SUCCESS;
    for path in setting.arguments() {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("wordcount: {path}: {e}");
                status = ExitCode::FAILURE;
                continue;
            }
        };

        let mut row = Vec::new();
        if counts.lines {
            row.push(text.lines().count().to_string());
        }
        if counts.words {
            let words = text
                .split_whitespace()
                .filter(|w| w.chars().count() >= min_length)
                .count();
            row.push(words.to_string());
        }
        if counts.bytes {
            row.push(text.len().to_string());
        }
        println!("{} {path}", row.join(" "));
    }
    status
}
