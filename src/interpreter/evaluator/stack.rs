use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::OpKind},
};

/// Number of values a stack holds when no other capacity is configured.
pub const DEFAULT_STACK_CAPACITY: usize = 100;

/// A bounded stack of 64-bit integers.
///
/// Grows on demand up to `capacity` values. Every push checks the ceiling
/// and fails with `RuntimeError::StackOverflow` instead of growing past it.
/// Every read checks the depth and fails with `RuntimeError::ArityViolation`
/// on behalf of the operation doing the read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    values:   Vec<i64>,
    capacity: usize,
}

impl Default for Stack {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_STACK_CAPACITY)
    }
}

impl Stack {
    /// Creates an empty stack that holds at most `capacity` values.
    #[must_use]
    pub const fn with_capacity(capacity: usize) -> Self {
        Self { values: Vec::new(),
               capacity }
    }

    /// The number of values currently on the stack.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.values.len()
    }

    /// The maximum number of values the stack may hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pushes a value on top of the stack.
    ///
    /// # Example
    /// ```
    /// use lemo::{error::RuntimeError, interpreter::evaluator::stack::Stack};
    ///
    /// let mut stack = Stack::with_capacity(1);
    /// assert!(stack.push(1).is_ok());
    /// assert!(matches!(stack.push(2), Err(RuntimeError::StackOverflow { capacity: 1 })));
    /// ```
    pub fn push(&mut self, value: i64) -> EvalResult<()> {
        if self.values.len() >= self.capacity {
            return Err(RuntimeError::StackOverflow { capacity: self.capacity, });
        }
        self.values.push(value);
        Ok(())
    }

    /// Removes and returns the top value, on behalf of `op`.
    pub fn pop(&mut self, op: OpKind) -> EvalResult<i64> {
        self.values.pop().ok_or_else(|| underflow(op, 1, 0))
    }

    /// Returns a mutable reference to the top value, on behalf of `op`.
    pub fn top_mut(&mut self, op: OpKind) -> EvalResult<&mut i64> {
        self.values.last_mut().ok_or_else(|| underflow(op, 1, 0))
    }

    /// Removes the top two values and returns them as `(second, top)`.
    ///
    /// # Example
    /// ```
    /// use lemo::{
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::stack::Stack, lexer::OpKind},
    /// };
    ///
    /// let mut stack = Stack::default();
    /// stack.push(1).unwrap();
    /// stack.push(2).unwrap();
    /// assert_eq!(stack.pop_pair(OpKind::Add).unwrap(), (1, 2));
    ///
    /// stack.push(3).unwrap();
    /// assert!(matches!(stack.pop_pair(OpKind::Add),
    ///                  Err(RuntimeError::ArityViolation { required: 2, available: 1, .. })));
    /// ```
    pub fn pop_pair(&mut self, op: OpKind) -> EvalResult<(i64, i64)> {
        let depth = self.values.len();
        let [.., a, b] = self.values[..] else {
            return Err(underflow(op, 2, depth));
        };
        self.values.truncate(depth - 2);
        Ok((a, b))
    }
}

const fn underflow(op: OpKind, required: usize, available: usize) -> RuntimeError {
    RuntimeError::ArityViolation { op,
                                   required,
                                   available }
}
