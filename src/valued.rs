use crate::error::ValueError;
use crate::grammar::Grammar;
use crate::parser::{Match, ParseResult, Parser};
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// A fallible function from a raw value to a produced value
pub type TransformFn = dyn Fn(Value) -> Result<Value, ValueError> + Send + Sync;

/// How a parser turns its raw match into the value its caller sees
#[derive(Clone, Default)]
pub enum ValueSpec {
    /// Pass the raw value through
    #[default]
    Raw,
    /// Discard the raw value and produce this one instead
    Constant(Value),
    /// Produce the result of applying a function to the raw value
    Transform(Arc<TransformFn>),
    /// Still match, but produce [`Value::Ignore`] so list-building combinators drop it
    Ignore,
}

impl ValueSpec {
    pub fn transform<F>(f: F) -> Self
    where
        F: Fn(Value) -> Result<Value, ValueError> + Send + Sync + 'static,
    {
        ValueSpec::Transform(Arc::new(f))
    }

    pub fn apply(&self, raw: Value) -> Result<Value, ValueError> {
        match self {
            ValueSpec::Raw => Ok(raw),
            ValueSpec::Constant(value) => Ok(value.clone()),
            ValueSpec::Transform(f) => f(raw),
            ValueSpec::Ignore => Ok(Value::Ignore),
        }
    }
}

impl fmt::Debug for ValueSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueSpec::Raw => write!(f, "Raw"),
            ValueSpec::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            ValueSpec::Transform(_) => write!(f, "Transform(..)"),
            ValueSpec::Ignore => write!(f, "Ignore"),
        }
    }
}

impl From<Value> for ValueSpec {
    fn from(value: Value) -> Self {
        match value {
            Value::Ignore => ValueSpec::Ignore,
            value => ValueSpec::Constant(value),
        }
    }
}

/// Parser combinator that applies a [`ValueSpec`] to another parser's value
///
/// The [`ValueSpec`] is applied exactly once, to the complete value of the wrapped
/// parser, and only when it matched.
pub struct Valued<P> {
    parser: P,
    spec: ValueSpec,
}

impl<P> Valued<P> {
    pub fn new(parser: P, spec: ValueSpec) -> Self {
        Valued { parser, spec }
    }

    pub fn spec(&self) -> &ValueSpec {
        &self.spec
    }
}

impl<P: Parser> Parser for Valued<P> {
    fn parse<'i>(&self, input: &'i str, grammar: &Grammar) -> ParseResult<'i> {
        let Some(Match { rest, value }) = self.parser.parse(input, grammar)? else {
            return Ok(None);
        };
        let value = self.spec.apply(value)?;
        Ok(Some(Match::new(rest, value)))
    }
}

/// Extension trait to attach value interpretation to any parser
///
/// ```
/// use pegre::{Grammar, Parser, Value, ValueExt, regex, value::to_int};
///
/// let number = regex(r"\d+").unwrap().try_map(to_int);
/// let m = number.parse("123abc", &Grammar::new()).unwrap().unwrap();
/// assert_eq!(m.rest, "abc");
/// assert_eq!(m.value, Value::Int(123));
/// ```
pub trait ValueExt: Parser + Sized {
    fn value(self, spec: impl Into<ValueSpec>) -> Valued<Self> {
        Valued::new(self, spec.into())
    }

    fn map<F>(self, f: F) -> Valued<Self>
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Valued::new(self, ValueSpec::transform(move |value| Ok(f(value))))
    }

    fn try_map<F>(self, f: F) -> Valued<Self>
    where
        F: Fn(Value) -> Result<Value, ValueError> + Send + Sync + 'static,
    {
        Valued::new(self, ValueSpec::transform(f))
    }

    fn constant(self, value: impl Into<Value>) -> Valued<Self> {
        Valued::new(self, ValueSpec::Constant(value.into()))
    }

    fn ignore(self) -> Valued<Self> {
        Valued::new(self, ValueSpec::Ignore)
    }
}

impl<P: Parser> ValueExt for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::literal::literal;
    use crate::pattern::regex;
    use crate::value::to_int;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_raw_passes_value_through() {
        let grammar = Grammar::new();
        let m = literal("a").value(ValueSpec::Raw).parse("ab", &grammar).unwrap().unwrap();
        assert_eq!(m.value, Value::from("a"));
        assert_eq!(m.rest, "b");
    }

    #[test]
    fn test_constant_replaces_value() {
        let grammar = Grammar::new();
        let m = literal("true").constant(true).parse("true", &grammar).unwrap().unwrap();
        assert_eq!(m.value, Value::Bool(true));
    }

    #[test]
    fn test_value_from_ignore_marker() {
        let grammar = Grammar::new();
        let m = literal("a").value(crate::value::IGNORE).parse("a", &grammar).unwrap().unwrap();
        assert_eq!(m.value, Value::Ignore);
        assert_eq!(m.rest, "");
    }

    #[test]
    fn test_ignore_still_consumes() {
        let grammar = Grammar::new();
        let m = literal("ab").ignore().parse("abc", &grammar).unwrap().unwrap();
        assert_eq!(m.rest, "c");
        assert!(m.value.is_ignore());
    }

    #[test]
    fn test_map() {
        let grammar = Grammar::new();
        let parser = literal("x").map(|v| Value::List(vec![v]));
        let m = parser.parse("x", &grammar).unwrap().unwrap();
        assert_eq!(m.value, Value::List(vec![Value::from("x")]));
    }

    #[test]
    fn test_try_map_converts_number() {
        let grammar = Grammar::new();
        let m = regex(r"\d+").unwrap().try_map(to_int).parse("42", &grammar).unwrap().unwrap();
        assert_eq!(m.value, Value::Int(42));
    }

    #[test]
    fn test_try_map_converts_non_ascii_digits() {
        let grammar = Grammar::new();
        let parser = regex(r"\d+").unwrap().try_map(to_int);
        let m = parser.parse("١٢٣abc", &grammar).unwrap().unwrap();
        assert_eq!(m.rest, "abc");
        assert_eq!(m.value, Value::Int(123));
    }

    #[test]
    fn test_failed_transform_is_an_error() {
        let grammar = Grammar::new();
        let parser = regex(r"\d+").unwrap().try_map(to_int);
        let result = parser.parse("99999999999999999999999", &grammar);
        assert!(matches!(result, Err(ParseError::Transform(_))));
    }

    #[test]
    fn test_transform_not_applied_on_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let parser = literal("a").map(move |v| {
            counter.fetch_add(1, Ordering::SeqCst);
            v
        });

        let grammar = Grammar::new();
        assert_eq!(parser.parse("b", &grammar).unwrap(), None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(parser.parse("a", &grammar).unwrap().is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_stacked_specs_apply_in_order() {
        let grammar = Grammar::new();
        let parser = literal("7")
            .try_map(to_int)
            .map(|v| Value::Int(v.as_int().unwrap_or(0) * 2));
        let m = parser.parse("7", &grammar).unwrap().unwrap();
        assert_eq!(m.value, Value::Int(14));
    }

    #[test]
    fn test_spec_debug() {
        assert_eq!(format!("{:?}", ValueSpec::default()), "Raw");
        assert_eq!(format!("{:?}", ValueSpec::transform(|v| Ok(v))), "Transform(..)");
        assert_eq!(format!("{:?}", ValueSpec::from(Value::Ignore)), "Ignore");
    }
}
