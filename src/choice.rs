use crate::grammar::Grammar;
use crate::parser::{ParseResult, Parser, Rule, boxed};

/// Parser combinator for ordered choice
///
/// Tries each alternative against the original input and produces the result of
/// the first one that matches. Later alternatives are never consulted once one
/// has matched, even if they would have consumed more.
#[derive(Clone, Default)]
pub struct Choice {
    alternatives: Vec<Rule>,
}

impl Choice {
    pub fn new(alternatives: Vec<Rule>) -> Self {
        Choice { alternatives }
    }

    /// Add a lower-priority alternative
    pub fn or<P: Parser + 'static>(mut self, parser: P) -> Self {
        self.alternatives.push(boxed(parser));
        self
    }

    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

impl Parser for Choice {
    fn parse<'i>(&self, input: &'i str, grammar: &Grammar) -> ParseResult<'i> {
        for alternative in &self.alternatives {
            if let Some(m) = alternative.parse(input, grammar)? {
                return Ok(Some(m));
            }
        }
        Ok(None)
    }
}

/// Convenience function to create a Choice parser
pub fn choice<I>(alternatives: I) -> Choice
where
    I: IntoIterator<Item = Rule>,
{
    Choice::new(alternatives.into_iter().collect())
}

/// Build a [`Choice`] from parsers of different types
#[macro_export]
macro_rules! choice {
    ($($parser:expr),* $(,)?) => {
        $crate::Choice::new(vec![$($crate::boxed($parser)),*])
    };
}
