use crate::error::ParseError;
use crate::grammar::Grammar;
use crate::value::Value;
use std::sync::Arc;

/// A successful match: the unconsumed suffix of the input and the value produced
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'i> {
    pub rest: &'i str,
    pub value: Value,
}

impl<'i> Match<'i> {
    pub fn new(rest: &'i str, value: Value) -> Self {
        Match { rest, value }
    }
}

/// `Ok(Some(_))` on success, `Ok(None)` when the parser does not match, and
/// `Err(_)` when the parse has to be abandoned: the grammar is broken or a value
/// transform rejected what was matched
pub type ParseResult<'i> = Result<Option<Match<'i>>, ParseError>;

/// Core parser trait for the combinators
///
/// Parsers are immutable once built: the same parser (and the grammar holding it)
/// can be used for any number of parses, from any number of threads.
pub trait Parser: Send + Sync {
    /// Attempt to match a prefix of `input`
    ///
    /// A non-match (`Ok(None)`) never consumes input; the caller still holds the
    /// original `input` and simply tries something else.
    fn parse<'i>(&self, input: &'i str, grammar: &Grammar) -> ParseResult<'i>;
}

/// A type-erased, shareable parser as stored in a [`Grammar`]
pub type Rule = Arc<dyn Parser>;

/// Erase the type of a parser so it can be stored next to parsers of other types
pub fn boxed<P: Parser + 'static>(parser: P) -> Rule {
    Arc::new(parser)
}

impl<P: Parser + ?Sized> Parser for Arc<P> {
    fn parse<'i>(&self, input: &'i str, grammar: &Grammar) -> ParseResult<'i> {
        (**self).parse(input, grammar)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    fn parse<'i>(&self, input: &'i str, grammar: &Grammar) -> ParseResult<'i> {
        (**self).parse(input, grammar)
    }
}

impl<P: Parser + ?Sized> Parser for &P {
    fn parse<'i>(&self, input: &'i str, grammar: &Grammar) -> ParseResult<'i> {
        (**self).parse(input, grammar)
    }
}
