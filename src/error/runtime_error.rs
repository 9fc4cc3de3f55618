use crate::interpreter::lexer::OpKind;

#[derive(Debug)]
/// Represents all errors that can occur while executing a token sequence.
pub enum RuntimeError {
    /// An operation expected an integer operand that was not there.
    ///
    /// Raised when `push` is the final token, or when a bare integer literal
    /// is reached where an operation was expected.
    MissingOperand {
        /// Index of the offending token in the token sequence.
        position: usize,
    },
    /// An operation needed more values than the stack currently holds.
    ArityViolation {
        /// The operation that was being executed.
        op:        OpKind,
        /// How many values the operation consumes.
        required:  usize,
        /// How many values were on the stack.
        available: usize,
    },
    /// A push would exceed the stack's capacity.
    StackOverflow {
        /// The maximum number of values the stack may hold.
        capacity: usize,
    },
    /// Writing a dumped value to the output failed.
    Output(std::io::Error),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOperand { position } => write!(f,
                                                        "Error at token {position}: Missing operand, every 'push' must be directly followed by an integer literal."),
            Self::ArityViolation { op,
                                   required,
                                   available, } => write!(f,
                                                          "Error: '{op}' needs {required} value(s) on the stack, but found {available}."),
            Self::StackOverflow { capacity } => {
                write!(f, "Error: Stack overflow, capacity is {capacity} values.")
            },
            Self::Output(e) => write!(f, "Error: Failed to write output: {e}."),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output(e) => Some(e),
            _ => None,
        }
    }
}
