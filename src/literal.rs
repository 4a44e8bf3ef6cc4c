use crate::grammar::Grammar;
use crate::parser::{Match, ParseResult, Parser};
use crate::value::Value;

/// Parser that matches an exact string at the start of the input
///
/// Produces the matched text as a [`Value::Str`].
#[derive(Debug, Clone)]
pub struct Literal {
    text: String,
}

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        Literal { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Parser for Literal {
    fn parse<'i>(&self, input: &'i str, _grammar: &Grammar) -> ParseResult<'i> {
        Ok(input
            .strip_prefix(self.text.as_str())
            .map(|rest| Match::new(rest, Value::Str(self.text.clone()))))
    }
}

/// Convenience function to create a Literal parser
pub fn literal(text: impl Into<String>) -> Literal {
    Literal::new(text)
}
