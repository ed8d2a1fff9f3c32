//! Generate error code documentation from the error enums themselves.
//!
//! Codes, descriptions, details, and help text come straight from the
//! `code()`, `description()`, `details()`, and `help()` methods on
//! `GenerateError` and `ConfigError`.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use wordsearch::errors::ConfigError;
use wordsearch::generator::GenerateError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// One of every `ConfigError`, with plausible field values
fn all_config_error_variants() -> Vec<ConfigError> {
    vec![
        ConfigError::ZeroGridSize,
        ConfigError::ZeroWords,
        ConfigError::ZeroAttempts,
        ConfigError::EmptyWord,
        ConfigError::InvalidWordChars { word: "hot-pink".to_string(), invalid_char: '-' },
        ConfigError::WordTooLong { word: "turquoise".to_string(), len: 9, size: 5 },
        ConfigError::DuplicateWord { word: "red".to_string() },
        ConfigError::NotEnoughWords { requested: 5, available: 2, size: 4 },
        ConfigError::TooManyWordsForRows { num_words: 6, size: 4 },
    ]
}

/// One of every `GenerateError`
fn all_generate_error_variants() -> Vec<GenerateError> {
    vec![
        GenerateError::from(ConfigError::ZeroGridSize),
        GenerateError::PlacementFailed { word: "violet".to_string(), attempts: 1000 },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Generate Errors (G001–G002)](#generate-errors)");
    println!("- [Config Errors (C001–C009)](#config-errors)");
    println!("- [How to Use Error Codes](#how-to-use-error-codes)\n");

    generate_generate_error_docs();
    generate_config_error_docs();

    println!("\n## How to Use Error Codes\n");
    println!("When you see an error like:\n");
    println!("```");
    println!("Error: G001\n  caused by: Grid size must be at least 1 (C001)");
    println!("```\n");
    println!("1. Note the innermost error code (e.g., `C001`)");
    println!("2. Look it up in this document for a detailed explanation");
    println!("3. Follow the suggested resolution steps\n");
}

fn generate_generate_error_docs() {
    println!("## Generate Errors\n");
    println!("Top-level errors from puzzle generation. These wrap configuration errors or report a placement that ran out of attempts.\n");
    generate_error_docs!(all_generate_error_variants());
}

fn generate_config_error_docs() {
    println!("## Config Errors\n");
    println!("Errors in the puzzle settings or the word list, caught before any letter is placed.\n");
    generate_error_docs!(all_config_error_variants());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_config_error_codes_are_unique() {
        let codes: HashSet<&str> = all_config_error_variants().iter().map(ConfigError::code).collect();
        assert_eq!(codes.len(), 9);
    }

    #[test]
    fn test_generate_error_codes_are_unique() {
        let codes: HashSet<&str> = all_generate_error_variants().iter().map(GenerateError::code).collect();
        assert_eq!(codes.len(), 2);
    }

    #[test]
    fn test_every_detail_is_documented() {
        for e in all_config_error_variants() {
            assert!(!e.description().is_empty(), "{} has no description", e.code());
            assert!(!e.details().is_empty(), "{} has no details", e.code());
        }
        for e in all_generate_error_variants() {
            assert!(!e.description().is_empty(), "{} has no description", e.code());
            assert!(!e.details().is_empty(), "{} has no details", e.code());
        }
    }
}
