use crate::grammar::Grammar;
use crate::parser::{Match, ParseResult, Parser};
use crate::value::Value;

/// Parser that only matches when there is no input left
///
/// Produces [`Value::Nil`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EndOfInput;

impl Parser for EndOfInput {
    fn parse<'i>(&self, input: &'i str, _grammar: &Grammar) -> ParseResult<'i> {
        if input.is_empty() {
            Ok(Some(Match::new(input, Value::Nil)))
        } else {
            Ok(None)
        }
    }
}

/// Convenience function to create an EndOfInput parser
pub fn end_of_input() -> EndOfInput {
    EndOfInput
}
