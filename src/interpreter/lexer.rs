use logos::Logos;
use tracing::debug;

use crate::error::LexError;

/// Characters that separate words when no other delimiter set is given.
pub const DEFAULT_DELIMITERS: &[char] = &[' ', '\n'];

/// The word that opens a line comment.
const COMMENT_OPENER: &str = "//";

/// Represents a lexical token of a lemo program.
///
/// Comments never become tokens. The operand of a `push` is not folded into
/// the operation: it follows as its own [`Token::Number`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    Number(i64),
    /// Operation keyword tokens, such as `dump`.
    Operation(OpKind),
}

/// The instructions understood by the evaluator.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum OpKind {
    /// `push`
    Push,
    /// `add`
    Add,
    /// `duplicate`
    Duplicate,
    /// `dump`
    Dump,
    /// `rshift`
    RightShift,
    /// `lshift`
    LeftShift,
}

impl OpKind {
    /// Returns the source keyword for this operation.
    ///
    /// # Example
    /// ```
    /// use lemo::interpreter::lexer::OpKind;
    ///
    /// assert_eq!(OpKind::LeftShift.keyword(), "lshift");
    /// ```
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Add => "add",
            Self::Duplicate => "duplicate",
            Self::Dump => "dump",
            Self::RightShift => "rshift",
            Self::LeftShift => "lshift",
        }
    }
}

impl std::fmt::Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Classification of a single delimiter-free word.
///
/// A word is only valid when this lexer produces exactly one token covering
/// all of it, so `12ab` or `pushx` are rejected rather than split.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum Word {
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    #[token("push")]
    Push,
    #[token("add")]
    Add,
    #[token("duplicate")]
    Duplicate,
    #[token("dump")]
    Dump,
    #[token("rshift")]
    RightShift,
    #[token("lshift")]
    LeftShift,
}

impl From<Word> for Token {
    fn from(word: Word) -> Self {
        match word {
            Word::Integer(n) => Self::Number(n),
            Word::Push => Self::Operation(OpKind::Push),
            Word::Add => Self::Operation(OpKind::Add),
            Word::Duplicate => Self::Operation(OpKind::Duplicate),
            Word::Dump => Self::Operation(OpKind::Dump),
            Word::RightShift => Self::Operation(OpKind::RightShift),
            Word::LeftShift => Self::Operation(OpKind::LeftShift),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// The slice is known to be all decimal digits, so the only possible failure
/// is overflow. Out-of-range literals saturate to `i64::MAX`.
fn parse_integer(lex: &logos::Lexer<Word>) -> i64 {
    lex.slice().parse().unwrap_or(i64::MAX)
}

/// Classifies one word as a [`Token`].
///
/// # Parameters
/// - `word`: A non-empty run of non-delimiter characters.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The token for the word, or `LexError::InvalidToken` if the word is not a
/// complete integer literal or keyword.
fn classify(word: &str, line: usize) -> Result<Token, LexError> {
    let invalid = || LexError::InvalidToken { token: word.to_string(),
                                              line };

    let mut lexer = Word::lexer(word);
    let token = match lexer.next() {
        Some(Ok(token)) if lexer.span() == (0..word.len()) => token,
        _ => return Err(invalid()),
    };

    if lexer.next().is_some() {
        return Err(invalid());
    }

    Ok(token.into())
}

/// Splits source text into a sequence of tokens.
///
/// Words are maximal runs of characters not in `delimiters`. A word that is
/// exactly `//` discards the rest of its line. Every other word must be a
/// run of decimal digits or one of the keywords `push`, `add`, `duplicate`,
/// `dump`, `lshift` and `rshift`.
///
/// # Errors
/// Returns `LexError::InvalidToken` for the first word that is neither an
/// integer literal nor a keyword.
///
/// # Example
/// ```
/// use lemo::interpreter::lexer::{DEFAULT_DELIMITERS, OpKind, Token, lex};
///
/// let tokens = lex("push 5 // five\ndump", DEFAULT_DELIMITERS).unwrap();
///
/// assert_eq!(tokens,
///            vec![Token::Operation(OpKind::Push),
///                 Token::Number(5),
///                 Token::Operation(OpKind::Dump)]);
/// ```
pub fn lex(source: &str, delimiters: &[char]) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut rest = source;
    let mut line = 1;

    while let Some(start) = rest.find(|c: char| !delimiters.contains(&c)) {
        line += count_newlines(&rest[..start]);
        rest = &rest[start..];

        let end = rest.find(|c: char| delimiters.contains(&c))
                      .unwrap_or(rest.len());
        let (word, tail) = rest.split_at(end);

        if word == COMMENT_OPENER {
            rest = &tail[tail.find('\n').unwrap_or(tail.len())..];
            continue;
        }

        // Without '\n' in the delimiter set a word can start on an earlier line.
        let body = word.trim_start_matches('\n');
        line += word.len() - body.len();

        tokens.push(classify(word, line)?);
        line += count_newlines(body);
        rest = tail;
    }

    debug!(tokens = tokens.len(), lines = line, "lexed source");
    Ok(tokens)
}

fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}
