use crate::error::ParseError;
use crate::grammar::Grammar;
use crate::parser::{Match, ParseResult, Parser, Rule, boxed};
use crate::value::Value;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Produces a [`Value::List`] of the matched values, leaving out
/// [`Value::Ignore`]. Never fails.
///
/// With a delimiter, matches `p (d p)*`. Delimiter values are kept in the list
/// unless ignored, and a delimiter that is not followed by another match of `p`
/// is not consumed.
pub struct ZeroOrMore<P> {
    parser: P,
    delimiter: Option<Rule>,
}

impl<P> ZeroOrMore<P> {
    pub fn new(parser: P) -> Self {
        ZeroOrMore {
            parser,
            delimiter: None,
        }
    }

    /// Require `delimiter` between successive matches
    pub fn delimited<D: Parser + 'static>(mut self, delimiter: D) -> Self {
        self.delimiter = Some(boxed(delimiter));
        self
    }
}

impl<P: Parser> Parser for ZeroOrMore<P> {
    fn parse<'i>(&self, input: &'i str, grammar: &Grammar) -> ParseResult<'i> {
        let (_, m) = repeat(&self.parser, self.delimiter.as_ref(), input, grammar)?;
        Ok(Some(m))
    }
}

/// Convenience function to create a ZeroOrMore parser
pub fn zero_or_more<P: Parser>(parser: P) -> ZeroOrMore<P> {
    ZeroOrMore::new(parser)
}

/// Match `parser` as many times as possible, returning the number of matches
///
/// An iteration that consumes nothing ends the repetition, since repeating it
/// could never make progress.
pub(crate) fn repeat<'i, P>(
    parser: &P,
    delimiter: Option<&Rule>,
    input: &'i str,
    grammar: &Grammar,
) -> Result<(usize, Match<'i>), ParseError>
where
    P: Parser + ?Sized,
{
    let mut values = Vec::new();

    let Some(first) = parser.parse(input, grammar)? else {
        return Ok((0, Match::new(input, Value::List(values))));
    };
    let mut rest = first.rest;
    let mut count = 1;
    push_value(&mut values, first.value);

    loop {
        let (next, separator) = match delimiter {
            Some(delimiter) => match delimiter.parse(rest, grammar)? {
                Some(m) => (m.rest, Some(m.value)),
                None => break,
            },
            None => (rest, None),
        };

        let Some(m) = parser.parse(next, grammar)? else {
            break;
        };
        if m.rest.len() == rest.len() {
            break;
        }

        if let Some(separator) = separator {
            push_value(&mut values, separator);
        }
        push_value(&mut values, m.value);
        rest = m.rest;
        count += 1;
    }

    Ok((count, Match::new(rest, Value::List(values))))
}

fn push_value(values: &mut Vec<Value>, value: Value) {
    if !value.is_ignore() {
        values.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::nonterminal::nonterminal;
    use crate::optional::optional;
    use crate::pattern::regex;
    use crate::valued::ValueExt;

    fn strs(items: &[&str]) -> Value {
        Value::List(items.iter().map(|s| Value::from(*s)).collect())
    }

    #[test]
    fn test_many_zero_matches() {
        let grammar = Grammar::new();
        let m = zero_or_more(literal("a")).parse("xyz", &grammar).unwrap().unwrap();
        assert_eq!(m.value, Value::List(vec![]));
        assert_eq!(m.rest, "xyz");
    }

    #[test]
    fn test_many_multiple_matches() {
        let grammar = Grammar::new();
        let m = zero_or_more(literal("a")).parse("aaab", &grammar).unwrap().unwrap();
        assert_eq!(m.value, strs(&["a", "a", "a"]));
        assert_eq!(m.rest, "b");
    }

    #[test]
    fn test_many_all_matches() {
        let grammar = Grammar::new();
        let m = zero_or_more(literal("a")).parse("aaaa", &grammar).unwrap().unwrap();
        assert_eq!(m.value, strs(&["a", "a", "a", "a"]));
        assert_eq!(m.rest, "");
    }

    #[test]
    fn test_many_empty_input() {
        let grammar = Grammar::new();
        let m = zero_or_more(literal("a")).parse("", &grammar).unwrap().unwrap();
        assert_eq!(m.value, Value::List(vec![]));
    }

    #[test]
    fn test_many_omits_ignored_values() {
        let grammar = Grammar::new();
        let m = zero_or_more(literal("a").ignore())
            .parse("aab", &grammar)
            .unwrap()
            .unwrap();
        assert_eq!(m.value, Value::List(vec![]));
        assert_eq!(m.rest, "b");
    }

    #[test]
    fn test_many_delimited() {
        let grammar = Grammar::new();
        let parser = zero_or_more(regex(r"\d").unwrap()).delimited(literal(",").ignore());
        let m = parser.parse("1,2,3;", &grammar).unwrap().unwrap();
        assert_eq!(m.value, strs(&["1", "2", "3"]));
        assert_eq!(m.rest, ";");
    }

    #[test]
    fn test_many_delimiter_values_kept() {
        let grammar = Grammar::new();
        let parser = zero_or_more(regex(r"\d").unwrap()).delimited(literal("+"));
        let m = parser.parse("1+2", &grammar).unwrap().unwrap();
        assert_eq!(m.value, strs(&["1", "+", "2"]));
    }

    #[test]
    fn test_many_trailing_delimiter_not_consumed() {
        let grammar = Grammar::new();
        let parser = zero_or_more(regex(r"\d").unwrap()).delimited(literal(","));
        let m = parser.parse("1,2,x", &grammar).unwrap().unwrap();
        assert_eq!(m.value, strs(&["1", ",", "2"]));
        assert_eq!(m.rest, ",x");
    }

    #[test]
    fn test_many_stops_on_empty_match() {
        let grammar = Grammar::new();
        let m = zero_or_more(optional(literal("a")))
            .parse("aab", &grammar)
            .unwrap()
            .unwrap();
        assert_eq!(m.value, strs(&["a", "a"]));
        assert_eq!(m.rest, "b");
    }

    #[test]
    fn test_many_transform_applies_to_list() {
        let grammar = Grammar::new();
        let parser = zero_or_more(literal("a")).map(|v| {
            Value::Int(v.as_list().map_or(-1, |items| items.len() as i64))
        });
        assert_eq!(parser.parse("aaa", &grammar).unwrap().unwrap().value, Value::Int(3));
        assert_eq!(parser.parse("b", &grammar).unwrap().unwrap().value, Value::Int(0));
    }

    #[test]
    fn test_many_propagates_grammar_errors() {
        let grammar = Grammar::new();
        assert!(zero_or_more(nonterminal("missing")).parse("a", &grammar).is_err());
    }

    #[test]
    fn test_repeat_counts_matches() {
        let grammar = Grammar::new();
        let (count, m) = repeat(&literal("ab"), None, "ababa", &grammar).unwrap();
        assert_eq!(count, 2);
        assert_eq!(m.rest, "a");
    }
}
