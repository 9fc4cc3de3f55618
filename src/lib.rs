//! # lemo
//!
//! lemo is an interpreter for a tiny whitespace-delimited stack language.
//! Source text is lexed into a flat sequence of integer literals and
//! operation keywords, which is then executed against a bounded stack of
//! 64-bit integers. The only visible effect of a program is the output of its
//! `dump` operations.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{fs, io::Write, path::Path};

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{
        evaluator::{core::interpret_with_capacity, stack::DEFAULT_STACK_CAPACITY},
        lexer::{DEFAULT_DELIMITERS, lex},
    },
};

/// Provides unified error types for lexing, evaluation and file loading.
///
/// This module defines all errors that can be raised while reading a
/// program, lexing it or executing it. Each error carries the context needed
/// to report it: the offending word and line, or the operation and observed
/// stack depth.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (I/O, lexer, evaluator).
/// - Implements `Display` for user-facing diagnostics.
/// - Composes the phase errors into one top-level `Error` for `?`.
pub mod error;
/// Orchestrates lexing and execution.
///
/// This module ties together the lexer and the evaluator and exposes the
/// token model shared between them.
///
/// # Responsibilities
/// - Converts source text into tokens.
/// - Executes tokens against the evaluation stack.
pub mod interpreter;

/// Settings for a single run of a lemo program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterOptions {
    /// Maximum number of values the evaluation stack may hold.
    pub stack_capacity: usize,
    /// Characters that separate words in the source text.
    pub delimiters:     Vec<char>,
}

impl Default for InterpreterOptions {
    fn default() -> Self {
        Self { stack_capacity: DEFAULT_STACK_CAPACITY,
               delimiters:     DEFAULT_DELIMITERS.to_vec(), }
    }
}

/// Reads a whole source file into memory.
///
/// # Errors
/// Returns `Error::Io` if the file cannot be opened or read.
pub fn read_source(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(),
                                                          source })
}

/// Lexes and executes a lemo program, writing dumped values to `out`.
///
/// Lexing finishes before execution starts, so a program with an invalid
/// word produces no output at all.
///
/// # Errors
/// Returns an error if lexing fails or if any runtime error occurs.
///
/// # Examples
/// ```
/// use lemo::{InterpreterOptions, run};
///
/// let mut out = Vec::new();
/// run("push 5 duplicate add dump", &InterpreterOptions::default(), &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "10\n");
///
/// // Dumping from an empty stack is an error.
/// let mut out = Vec::new();
/// assert!(run("dump", &InterpreterOptions::default(), &mut out).is_err());
/// ```
pub fn run<W: Write>(source: &str, options: &InterpreterOptions, out: &mut W) -> Result<(), Error> {
    let tokens = lex(source, &options.delimiters)?;
    debug!(tokens = tokens.len(),
           capacity = options.stack_capacity,
           "starting evaluation");
    interpret_with_capacity(&tokens, options.stack_capacity, out)?;
    Ok(())
}
