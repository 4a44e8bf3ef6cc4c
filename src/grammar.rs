use crate::error::GrammarError;
use crate::parser::{Parser, Rule, boxed};
use std::collections::HashMap;
use std::fmt;

/// A set of named rules
///
/// Rules may refer to each other by name through
/// [`nonterminal`](crate::nonterminal()), in any order; names only need to
/// exist by the time parsing starts. A grammar is never modified by parsing,
/// so one grammar can serve any number of parses at once.
#[derive(Clone, Default)]
pub struct Grammar {
    rules: HashMap<String, Rule>,
}

impl Grammar {
    pub fn new() -> Self {
        Grammar::default()
    }

    /// Add a rule, replacing any earlier rule with the same name
    pub fn rule<P: Parser + 'static>(mut self, name: impl Into<String>, parser: P) -> Self {
        self.insert(name, parser);
        self
    }

    /// Add a rule, returning the one it replaced
    pub fn insert<P: Parser + 'static>(&mut self, name: impl Into<String>, parser: P) -> Option<Rule> {
        self.insert_rule(name, boxed(parser))
    }

    /// Add an already type-erased rule, returning the one it replaced
    pub fn insert_rule(&mut self, name: impl Into<String>, rule: Rule) -> Option<Rule> {
        self.rules.insert(name.into(), rule)
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    /// Look up the rule called `name`
    ///
    /// A missing rule means the grammar is incomplete, which is reported as an
    /// error rather than as a failed match.
    pub fn resolve(&self, name: &str) -> Result<&Rule, GrammarError> {
        self.rules.get(name).ok_or_else(|| {
            log::warn!("grammar has no rule named '{}'", name);
            GrammarError::undefined_rule(name)
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("Grammar").field("rules", &names).finish()
    }
}

impl<N: Into<String>> FromIterator<(N, Rule)> for Grammar {
    fn from_iter<I: IntoIterator<Item = (N, Rule)>>(iter: I) -> Self {
        Grammar {
            rules: iter.into_iter().map(|(name, rule)| (name.into(), rule)).collect(),
        }
    }
}

impl<N: Into<String>> Extend<(N, Rule)> for Grammar {
    fn extend<I: IntoIterator<Item = (N, Rule)>>(&mut self, iter: I) {
        for (name, rule) in iter {
            self.insert_rule(name, rule);
        }
    }
}
