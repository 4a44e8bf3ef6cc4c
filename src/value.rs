use crate::error::ValueError;
use std::any::Any;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// The value produced by a successful parse
///
/// Primitive matchers produce [`Value::Str`], list-building combinators produce
/// [`Value::List`], and value transforms may turn either into anything else,
/// including arbitrary Rust types wrapped in [`Value::Opaque`].
#[derive(Clone)]
pub enum Value {
    /// Marker for values that list-building combinators leave out
    Ignore,
    /// Placeholder for "nothing matched" (e.g. `optional` on non-matching input)
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    /// Result of a transform that builds a caller-defined type
    Opaque(Arc<dyn Any + Send + Sync>),
}

/// The shared `Ignore` marker, for use with [`ValueSpec::Constant`](crate::ValueSpec)
/// or anywhere a value needs to be dropped from a sequence
pub const IGNORE: Value = Value::Ignore;

impl Value {
    /// Wrap a caller-defined value
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Value::Opaque(Arc::new(value))
    }

    pub fn is_ignore(&self) -> bool {
        matches!(self, Value::Ignore)
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Take the elements out of a list, or fail with a [`ValueError`]
    pub fn into_list(self) -> Result<Vec<Value>, ValueError> {
        match self {
            Value::List(items) => Ok(items),
            other => Err(other.unexpected("list")),
        }
    }

    /// Borrow the caller-defined value inside an `Opaque`, if it has type `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Opaque(inner) => (**inner).downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Ignore => "ignore",
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Opaque(_) => "opaque",
        }
    }

    fn unexpected(&self, expected: &'static str) -> ValueError {
        ValueError::Unexpected {
            expected,
            found: self.kind(),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Ignore => write!(f, "Ignore"),
            Value::Nil => write!(f, "Nil"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::List(items) => f.debug_tuple("List").field(items).finish(),
            Value::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Value::Opaque(inner) => write!(f, "Opaque({:p})", Arc::as_ptr(inner)),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Ignore, Value::Ignore) => true,
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            // Opaque values compare by identity
            (Value::Opaque(a), Value::Opaque(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
            _ => false,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

/// First code point of each run of ten Unicode decimal digits (category Nd)
///
/// `\d` in a pattern matches all of these, so the number transforms accept them.
const DIGIT_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

fn decimal_digit(c: char) -> Option<u32> {
    let c = u32::from(c);
    let run = DIGIT_ZEROS.partition_point(|&zero| zero <= c).checked_sub(1)?;
    let digit = c - DIGIT_ZEROS[run];
    (digit < 10).then_some(digit)
}

/// Rewrite decimal digits of any script as ASCII digits
fn ascii_digits(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }
    text.chars()
        .map(|c| match decimal_digit(c) {
            Some(d) => char::from_digit(d, 10).unwrap_or(c),
            None => c,
        })
        .collect()
}

/// Parse a matched string as a base-10 integer
///
/// Digits may come from any script, as long as they all are decimal digits.
pub fn to_int(value: Value) -> Result<Value, ValueError> {
    match value {
        Value::Str(text) => {
            let parsed = ascii_digits(text.trim()).parse::<i64>();
            parsed.map(Value::Int).map_err(|e| ValueError::Conversion {
                text,
                target: "integer",
                reason: e.to_string(),
            })
        }
        Value::Int(n) => Ok(Value::Int(n)),
        other => Err(other.unexpected("string")),
    }
}

/// Parse a matched string as a float
pub fn to_float(value: Value) -> Result<Value, ValueError> {
    match value {
        Value::Str(text) => {
            let parsed = ascii_digits(text.trim()).parse::<f64>();
            parsed.map(Value::Float).map_err(|e| ValueError::Conversion {
                text,
                target: "float",
                reason: e.to_string(),
            })
        }
        Value::Int(n) => Ok(Value::Float(n as f64)),
        Value::Float(x) => Ok(Value::Float(x)),
        other => Err(other.unexpected("string")),
    }
}

/// Strip the first and last character of a matched string, e.g. surrounding quotes
pub fn unquote(value: Value) -> Result<Value, ValueError> {
    let text = match value {
        Value::Str(text) => text,
        other => return Err(other.unexpected("string")),
    };

    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(_), Some(_)) => Ok(Value::Str(chars.as_str().to_owned())),
        _ => Err(ValueError::Conversion {
            text,
            target: "unquoted string",
            reason: "needs at least two characters".into(),
        }),
    }
}

/// Turn a list of `[key, value]` pairs into a map
///
/// Later duplicates of a key replace earlier ones.
pub fn pairs_to_map(value: Value) -> Result<Value, ValueError> {
    let mut map = BTreeMap::new();

    for pair in value.into_list()? {
        let mut pair = pair.into_list()?.into_iter();
        match (pair.next(), pair.next(), pair.next()) {
            (Some(Value::Str(key)), Some(value), None) => {
                map.insert(key, value);
            }
            _ => return Err(ValueError::custom("expected a [string, value] pair")),
        }
    }

    Ok(Value::Map(map))
}

/// Build a transform that keeps only element `index` of a list
pub fn nth(index: usize) -> impl Fn(Value) -> Result<Value, ValueError> + Send + Sync + 'static {
    move |value| {
        let items = value.into_list()?;
        let len = items.len();
        items.into_iter().nth(index).ok_or_else(|| {
            ValueError::custom(format!("index {} out of range for list of {}", index, len))
        })
    }
}
