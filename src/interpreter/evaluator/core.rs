use std::io::Write;

use tracing::{debug, trace};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::stack::{DEFAULT_STACK_CAPACITY, Stack},
        lexer::{OpKind, Token},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the state of one program run.
///
/// A `Context` owns the evaluation stack and borrows the sink that dumped
/// values are written to. It lives for exactly one pass over a token
/// sequence and is dropped afterwards; nothing carries over between runs.
pub struct Context<'w, W: Write> {
    /// The evaluation stack.
    pub stack: Stack,
    out:       &'w mut W,
}

impl<'w, W: Write> Context<'w, W> {
    /// Creates a context with an empty stack of the given capacity.
    #[must_use]
    pub fn new(capacity: usize, out: &'w mut W) -> Self {
        Self { stack: Stack::with_capacity(capacity),
               out }
    }

    /// Executes a token sequence from start to end.
    ///
    /// Every token reached by the main loop must be an operation. A `push`
    /// consumes the integer literal that follows it, so the loop advances by
    /// two over it and by one over everything else. Execution stops at the
    /// first error; there is no partial recovery.
    ///
    /// # Parameters
    /// - `tokens`: Token sequence produced by the lexer.
    ///
    /// # Returns
    /// `Ok(())` once the end of the sequence is reached.
    pub fn run(&mut self, tokens: &[Token]) -> EvalResult<()> {
        let mut i = 0;

        while i < tokens.len() {
            let Token::Operation(op) = tokens[i] else {
                return Err(RuntimeError::MissingOperand { position: i });
            };

            if op == OpKind::Push {
                let Some(&Token::Number(value)) = tokens.get(i + 1) else {
                    return Err(RuntimeError::MissingOperand { position: i });
                };
                self.stack.push(value)?;
                i += 2;
            } else {
                self.eval_op(op)?;
                i += 1;
            }

            trace!(%op, depth = self.stack.depth(), "executed");
        }

        debug!(depth = self.stack.depth(), "program finished");
        Ok(())
    }

    /// Executes a single operation that takes no inline operand.
    ///
    /// `Add` wraps on overflow and `LeftShift` shifts the raw bit pattern,
    /// both matching native 64-bit signed arithmetic.
    ///
    /// # Parameters
    /// - `op`: The operation to execute. `Push` is handled by [`Context::run`]
    ///   since it needs the following token.
    fn eval_op(&mut self, op: OpKind) -> EvalResult<()> {
        match op {
            OpKind::Push => unreachable!("push is executed together with its operand"),
            OpKind::Duplicate => {
                let top = *self.stack.top_mut(op)?;
                self.stack.push(top)
            },
            OpKind::Dump => {
                let value = self.stack.pop(op)?;
                writeln!(self.out, "{value}").map_err(RuntimeError::Output)
            },
            OpKind::Add => {
                let (a, b) = self.stack.pop_pair(op)?;
                self.stack.push(a.wrapping_add(b))
            },
            OpKind::LeftShift => {
                let top = self.stack.top_mut(op)?;
                *top = top.wrapping_shl(1);
                Ok(())
            },
            OpKind::RightShift => {
                let top = self.stack.top_mut(op)?;
                *top >>= 1;
                Ok(())
            },
        }
    }
}

/// Executes a token sequence with the default stack capacity.
///
/// Each `dump` writes one decimal line to `out`.
///
/// # Errors
/// Returns a `RuntimeError` for a missing `push` operand, an arity violation,
/// a stack overflow or a failed write.
///
/// # Example
/// ```
/// use lemo::interpreter::{
///     evaluator::core::interpret,
///     lexer::{OpKind, Token},
/// };
///
/// let tokens = [Token::Operation(OpKind::Push),
///               Token::Number(3),
///               Token::Operation(OpKind::Push),
///               Token::Number(4),
///               Token::Operation(OpKind::Add),
///               Token::Operation(OpKind::Dump)];
///
/// let mut out = Vec::new();
/// interpret(&tokens, &mut out).unwrap();
/// assert_eq!(out, b"7\n");
/// ```
pub fn interpret<W: Write>(tokens: &[Token], out: &mut W) -> EvalResult<()> {
    interpret_with_capacity(tokens, DEFAULT_STACK_CAPACITY, out)
}

/// Executes a token sequence on a stack holding at most `capacity` values.
///
/// # Errors
/// Same as [`interpret`].
pub fn interpret_with_capacity<W: Write>(tokens: &[Token],
                                         capacity: usize,
                                         out: &mut W)
                                         -> EvalResult<()> {
    Context::new(capacity, out).run(tokens)
}
