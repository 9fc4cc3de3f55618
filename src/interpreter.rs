/// The evaluator module executes token sequences.
///
/// The evaluator walks the tokens produced by the lexer, applies each
/// operation to a bounded integer stack and writes one line of output per
/// `dump`. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Executes `push`, `add`, `duplicate`, `dump`, `lshift` and `rshift`.
/// - Checks stack depth before every operation and capacity on every push.
/// - Reports runtime errors such as arity violations or stack overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for execution.
///
/// The lexer reads the raw source text, splits it into delimiter-separated
/// words, drops line comments and classifies every remaining word as an
/// integer literal or an operation keyword.
///
/// # Responsibilities
/// - Converts the input text into an ordered sequence of tokens.
/// - Skips `//` line comments.
/// - Reports lexical errors, with line numbers, for invalid words.
pub mod lexer;
