use crate::grammar::Grammar;
use crate::parser::{Match, ParseResult, Parser};
use crate::value::Value;

/// Parser combinator that matches its parser if it can, and nothing otherwise
///
/// Never fails: when the inner parser does not match, the original input is
/// returned untouched and the value is [`Value::Nil`].
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<P: Parser> Parser for Optional<P> {
    fn parse<'i>(&self, input: &'i str, grammar: &Grammar) -> ParseResult<'i> {
        match self.parser.parse(input, grammar)? {
            Some(m) => Ok(Some(m)),
            None => Ok(Some(Match::new(input, Value::Nil))),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<P: Parser>(parser: P) -> Optional<P> {
    Optional::new(parser)
}
