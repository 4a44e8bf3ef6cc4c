use crate::grammar::Grammar;
use crate::parser::{Match, ParseResult, Parser, Rule, boxed};
use crate::value::Value;

/// Parser combinator that matches its parsers one after another
///
/// Each parser runs against the input left over by the previous one. Produces a
/// [`Value::List`] with one element per parser, leaving out [`Value::Ignore`].
/// If any parser fails the whole sequence fails and nothing is consumed.
///
/// Unlike chained pairs, the list stays flat however many parsers are given:
/// `sequence![a, b, c]` produces `[a, b, c]`, not `[[a, b], c]`.
#[derive(Clone, Default)]
pub struct Sequence {
    parsers: Vec<Rule>,
}

impl Sequence {
    pub fn new(parsers: Vec<Rule>) -> Self {
        Sequence { parsers }
    }

    /// Append one more parser to the sequence
    pub fn then<P: Parser + 'static>(mut self, parser: P) -> Self {
        self.parsers.push(boxed(parser));
        self
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl Parser for Sequence {
    fn parse<'i>(&self, input: &'i str, grammar: &Grammar) -> ParseResult<'i> {
        let mut rest = input;
        let mut values = Vec::with_capacity(self.parsers.len());

        for parser in &self.parsers {
            let Some(m) = parser.parse(rest, grammar)? else {
                return Ok(None);
            };
            rest = m.rest;
            if !m.value.is_ignore() {
                values.push(m.value);
            }
        }

        Ok(Some(Match::new(rest, Value::List(values))))
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<I>(parsers: I) -> Sequence
where
    I: IntoIterator<Item = Rule>,
{
    Sequence::new(parsers.into_iter().collect())
}

/// Build a [`Sequence`] from parsers of different types
///
/// ```
/// use pegre::{Grammar, Parser, Value, ValueExt, literal, sequence};
///
/// let parser = sequence![literal("a"), literal(",").ignore(), literal("b")];
/// let m = parser.parse("a,bc", &Grammar::new()).unwrap().unwrap();
/// assert_eq!(m.rest, "c");
/// assert_eq!(m.value, Value::List(vec![Value::from("a"), Value::from("b")]));
/// ```
#[macro_export]
macro_rules! sequence {
    ($($parser:expr),* $(,)?) => {
        $crate::Sequence::new(vec![$($crate::boxed($parser)),*])
    };
}
