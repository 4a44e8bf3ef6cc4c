use crate::grammar::Grammar;
use crate::parser::{Match, ParseResult, Parser};

/// Parser that matches content between opening and closing delimiters
///
/// This parses `open body close` and produces just the body's value, with the
/// delimiters discarded. Fails as a whole if any of the three fails.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub struct Bounded<O, B, C> {
    open: O,
    body: B,
    close: C,
}

impl<O, B, C> Bounded<O, B, C> {
    pub fn new(open: O, body: B, close: C) -> Self {
        Bounded { open, body, close }
    }
}

impl<O, B, C> Parser for Bounded<O, B, C>
where
    O: Parser,
    B: Parser,
    C: Parser,
{
    fn parse<'i>(&self, input: &'i str, grammar: &Grammar) -> ParseResult<'i> {
        let Some(open) = self.open.parse(input, grammar)? else {
            return Ok(None);
        };
        let Some(body) = self.body.parse(open.rest, grammar)? else {
            return Ok(None);
        };
        let Some(close) = self.close.parse(body.rest, grammar)? else {
            return Ok(None);
        };
        Ok(Some(Match::new(close.rest, body.value)))
    }
}

/// Convenience function to create a Bounded parser
pub fn bounded<O, B, C>(open: O, body: B, close: C) -> Bounded<O, B, C>
where
    O: Parser,
    B: Parser,
    C: Parser,
{
    Bounded::new(open, body, close)
}
