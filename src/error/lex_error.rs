#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while lexing source text.
pub enum LexError {
    /// A word matched neither the integer literal grammar nor any keyword.
    InvalidToken {
        /// The offending word, exactly as it appeared in the source.
        token: String,
        /// The source line where the word starts.
        line:  usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken { token, line } => {
                write!(f, "Error on line {line}: Invalid token '{token}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
