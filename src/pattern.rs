use crate::error::GrammarError;
use crate::grammar::Grammar;
use crate::parser::{Match, ParseResult, Parser};
use crate::value::Value;
use regex::Regex;

/// Parser that matches a regular expression anchored at the start of the input
///
/// The pattern never searches ahead: `regex("b")` does not match `"ab"`.
/// Produces the whole match (not a capture group) as a [`Value::Str`].
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, GrammarError> {
        let invalid = |source| GrammarError::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        };

        // Validate on its own first so a stray `)` cannot close the anchoring group
        Regex::new(pattern).map_err(invalid)?;
        let regex = Regex::new(&format!(r"\A(?:{})", pattern)).map_err(invalid)?;

        Ok(Pattern {
            source: pattern.to_owned(),
            regex,
        })
    }

    /// The pattern as written, without the anchoring
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Parser for Pattern {
    fn parse<'i>(&self, input: &'i str, _grammar: &Grammar) -> ParseResult<'i> {
        Ok(self.regex.find(input).map(|found| {
            Match::new(&input[found.end()..], Value::Str(found.as_str().to_owned()))
        }))
    }
}

/// Convenience function to create a Pattern parser
pub fn regex(pattern: &str) -> Result<Pattern, GrammarError> {
    Pattern::new(pattern)
}
