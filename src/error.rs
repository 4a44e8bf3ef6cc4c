use std::fmt;
use thiserror::Error;

/// Error raised by a value transform that was handed a value it cannot interpret
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error("expected {expected}, found {found}")]
    Unexpected {
        expected: &'static str,
        found: &'static str,
    },
    #[error("cannot convert '{text}' to {target}: {reason}")]
    Conversion {
        text: String,
        target: &'static str,
        reason: String,
    },
    #[error("{0}")]
    Custom(String),
}

impl ValueError {
    pub fn custom(message: impl Into<String>) -> Self {
        ValueError::Custom(message.into())
    }
}

/// Errors caused by how a grammar was put together rather than by the input
///
/// Unlike an ordinary match failure, these are never absorbed by backtracking:
/// `choice`, `optional` and the repetition combinators propagate them unchanged
/// so that a misspelled rule name cannot hide behind an alternative.
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("undefined rule '{name}'")]
    UndefinedRule { name: String },
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

impl GrammarError {
    pub fn undefined_rule(name: &str) -> Self {
        GrammarError::UndefinedRule {
            name: name.to_owned(),
        }
    }
}

/// Why a parser gave up with an error instead of reporting a non-match
///
/// Grammar bugs and failed value transforms both abort the parse, but only the
/// former says something is wrong with the grammar. A transform fails on the
/// text it was handed, e.g. an integer literal too large for `i64`.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error("value transform failed: {0}")]
    Transform(#[from] ValueError),
}

/// Where in the original text something happened
///
/// We report the byte offset within the line instead of a column number. The
/// column depends on tab width and on how multi-byte characters get rendered,
/// while the byte offset is unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Absolute byte offset into the text
    pub offset: usize,
    /// 1-based line number
    pub line: usize,
    /// Byte offset from the start of `line`
    pub line_offset: usize,
}

impl Location {
    /// Locate `rest`, a suffix of `text` left over by a parser
    ///
    /// An offset that falls inside a character is moved back to its start.
    pub fn of(text: &str, rest: &str) -> Self {
        let mut offset = text.len().saturating_sub(rest.len());
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }
        let consumed = &text[..offset];

        let line = consumed.matches('\n').count() + 1;
        let line_start = consumed.rfind('\n').map_or(0, |i| i + 1);

        Location {
            offset,
            line,
            line_offset: offset - line_start,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, byte offset {} (absolute position: {})",
            self.line, self.line_offset, self.offset
        )
    }
}

/// Errors returned by [`Peg::parse`](crate::Peg::parse)
#[derive(Debug, Error)]
pub enum PegError {
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error("rule '{rule}' could not build its value: {source}")]
    Transform { rule: String, source: ValueError },
    #[error("input does not match rule '{rule}'")]
    NoMatch { rule: String },
    #[error("rule '{rule}' left unconsumed input at {location}")]
    TrailingInput { rule: String, location: Location },
}

impl PegError {
    pub(crate) fn from_parse(rule: &str, err: ParseError) -> Self {
        match err {
            ParseError::Grammar(err) => PegError::Grammar(err),
            ParseError::Transform(source) => PegError::Transform {
                rule: rule.to_owned(),
                source,
            },
        }
    }

    /// True for errors caused by the grammar itself rather than the input
    pub fn is_grammar_error(&self) -> bool {
        matches!(self, PegError::Grammar(_))
    }
}
