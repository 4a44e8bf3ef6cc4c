use crate::grammar::Grammar;
use crate::parser::{ParseResult, Parser};

/// Parser that defers to a named rule of the grammar
///
/// The name is only looked up at parse time, so rules can refer to themselves
/// and to rules that are added to the grammar later. This is what makes
/// recursive grammars possible.
#[derive(Debug, Clone)]
pub struct Nonterminal {
    name: String,
}

impl Nonterminal {
    pub fn new(name: impl Into<String>) -> Self {
        Nonterminal { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Parser for Nonterminal {
    fn parse<'i>(&self, input: &'i str, grammar: &Grammar) -> ParseResult<'i> {
        log::trace!("entering rule '{}'", self.name);
        grammar.resolve(&self.name)?.parse(input, grammar)
    }
}

/// Convenience function to create a Nonterminal parser
pub fn nonterminal(name: impl Into<String>) -> Nonterminal {
    Nonterminal::new(name)
}
