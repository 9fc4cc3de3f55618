/// Core evaluation logic and run context.
///
/// Contains the main execution loop, per-operation dispatch and the
/// `interpret` entry points.
pub mod core;

/// The bounded evaluation stack.
///
/// Provides the capacity-checked integer stack and the depth checks that
/// report arity violations.
pub mod stack;
