use crate::error::{Location, PegError};
use crate::grammar::Grammar;
use crate::parser::{Match, Parser};
use crate::value::Value;

/// Name of the rule parsing starts from unless configured otherwise
pub const DEFAULT_START: &str = "start";

/// How a [`Peg`] runs its grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PegOptions {
    /// Rule to start parsing from
    pub start: String,
    /// Treat input left over after the start rule matched as an error
    pub require_full_match: bool,
}

impl Default for PegOptions {
    fn default() -> Self {
        PegOptions {
            start: DEFAULT_START.to_owned(),
            require_full_match: false,
        }
    }
}

/// A grammar together with the rule to start parsing from
///
/// ```
/// use pegre::{Grammar, Peg, Value, ValueExt, choice, literal, nonterminal, sequence, value::nth};
///
/// let grammar = Grammar::new().rule(
///     "start",
///     choice![
///         sequence![literal("("), nonterminal("start"), literal(")")].try_map(nth(1)),
///         literal("x"),
///     ],
/// );
/// let peg = Peg::new(grammar);
/// assert_eq!(peg.parse("((x))").unwrap(), Value::from("x"));
/// assert!(peg.parse("((").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Peg {
    grammar: Grammar,
    options: PegOptions,
}

impl Peg {
    pub fn new(grammar: Grammar) -> Self {
        Peg {
            grammar,
            options: PegOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PegOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.options.start = start.into();
        self
    }

    pub fn require_full_match(mut self, require: bool) -> Self {
        self.options.require_full_match = require;
        self
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn options(&self) -> &PegOptions {
        &self.options
    }

    /// Run the start rule and return the full match, including what it left over
    ///
    /// Ignores `require_full_match`.
    pub fn parse_prefix<'i>(&self, text: &'i str) -> Result<Match<'i>, PegError> {
        let start = &self.options.start;
        log::debug!("parsing {} bytes from rule '{}'", text.len(), start);

        let rule = self.grammar.resolve(start)?;
        let result = rule
            .parse(text, &self.grammar)
            .map_err(|err| PegError::from_parse(start, err))?;
        match result {
            Some(m) => {
                log::debug!(
                    "rule '{}' matched, {} bytes left over",
                    start,
                    m.rest.len()
                );
                Ok(m)
            }
            None => {
                log::debug!("rule '{}' did not match", start);
                Err(PegError::NoMatch {
                    rule: start.clone(),
                })
            }
        }
    }

    /// Parse `text` and return the value produced by the start rule
    pub fn parse(&self, text: &str) -> Result<Value, PegError> {
        let m = self.parse_prefix(text)?;
        if self.options.require_full_match && !m.rest.is_empty() {
            return Err(PegError::TrailingInput {
                rule: self.options.start.clone(),
                location: Location::of(text, m.rest),
            });
        }
        Ok(m.value)
    }
}
