use crate::grammar::Grammar;
use crate::parser::{Match, ParseResult, Parser};
use crate::value::Value;

/// Positive lookahead: matches, without consuming, wherever `parser` matches
///
/// Produces [`Value::Ignore`] so it disappears from enclosing sequences.
pub struct AndNext<P> {
    parser: P,
}

impl<P> AndNext<P> {
    pub fn new(parser: P) -> Self {
        AndNext { parser }
    }
}

impl<P: Parser> Parser for AndNext<P> {
    fn parse<'i>(&self, input: &'i str, grammar: &Grammar) -> ParseResult<'i> {
        Ok(self
            .parser
            .parse(input, grammar)?
            .map(|_| Match::new(input, Value::Ignore)))
    }
}

/// Negative lookahead: matches, without consuming, wherever `parser` does not
///
/// Produces [`Value::Ignore`] so it disappears from enclosing sequences.
pub struct NotNext<P> {
    parser: P,
}

impl<P> NotNext<P> {
    pub fn new(parser: P) -> Self {
        NotNext { parser }
    }
}

impl<P: Parser> Parser for NotNext<P> {
    fn parse<'i>(&self, input: &'i str, grammar: &Grammar) -> ParseResult<'i> {
        match self.parser.parse(input, grammar)? {
            Some(_) => Ok(None),
            None => Ok(Some(Match::new(input, Value::Ignore))),
        }
    }
}

/// Convenience function to create an AndNext parser
pub fn and_next<P: Parser>(parser: P) -> AndNext<P> {
    AndNext::new(parser)
}

/// Convenience function to create a NotNext parser
pub fn not_next<P: Parser>(parser: P) -> NotNext<P> {
    NotNext::new(parser)
}
