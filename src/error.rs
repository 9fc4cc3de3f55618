use std::path::PathBuf;

/// Lexing errors.
///
/// Defines the errors that can occur while splitting source text into words
/// and classifying them as integer literals or operation keywords.
pub mod lex_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing a token
/// sequence: missing operands, arity violations, stack overflow and output
/// failures.
pub mod runtime_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Any failure that can end a lemo run.
pub enum Error {
    /// The source file could not be opened or read.
    Io {
        /// The path that was being read.
        path:   PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The source text could not be lexed.
    Lex(LexError),
    /// The token sequence failed during execution.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f,
                                                "Failed to read the input file '{}': {source}. Perhaps this file does not exist?",
                                                path.display()),
            Self::Lex(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Lex(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
