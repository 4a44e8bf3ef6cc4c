use crate::grammar::Grammar;
use crate::many::repeat;
use crate::parser::{ParseResult, Parser, Rule, boxed};

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Same as [`ZeroOrMore`](crate::ZeroOrMore) except that it fails when the first
/// attempt does not match.
pub struct OneOrMore<P> {
    parser: P,
    delimiter: Option<Rule>,
}

impl<P> OneOrMore<P> {
    pub fn new(parser: P) -> Self {
        OneOrMore {
            parser,
            delimiter: None,
        }
    }

    /// Require `delimiter` between successive matches
    pub fn delimited<D: Parser + 'static>(mut self, delimiter: D) -> Self {
        self.delimiter = Some(boxed(delimiter));
        self
    }
}

impl<P: Parser> Parser for OneOrMore<P> {
    fn parse<'i>(&self, input: &'i str, grammar: &Grammar) -> ParseResult<'i> {
        match repeat(&self.parser, self.delimiter.as_ref(), input, grammar)? {
            (0, _) => Ok(None),
            (_, m) => Ok(Some(m)),
        }
    }
}

/// Convenience function to create a OneOrMore parser
pub fn one_or_more<P: Parser>(parser: P) -> OneOrMore<P> {
    OneOrMore::new(parser)
}
