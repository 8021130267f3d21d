//! The closed value model rendered by representations.
//!
//! Arguments handed to a message factory are converted into [`Value`], a
//! tagged enum covering every shape the renderer knows how to display:
//! null, booleans, numbers, characters, text, pre-formatted (unquoted)
//! text, ordered groups, keyed groups, and a fallback for values that only
//! carry their own display text.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fmt::Write as _;

/// A runtime value captured by a message factory, in renderable form.
///
/// Conversion is done up front via `From`/`Into` so that rendering is a
/// closed, exhaustive match instead of open-ended type inspection. The
/// [`args!`](crate::args) macro builds a `Vec<Value>` from heterogeneous
/// literals.
///
/// # Example
///
/// ```rust
/// use failmsg::Value;
///
/// let v = Value::from("Yoda");
/// assert_eq!(v, Value::Text("Yoda".to_string()));
///
/// let n: Value = Option::<i32>::None.into();
/// assert_eq!(n, Value::Null);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An absent value. Renders as the bare token `null`.
    Null,
    /// Renders as `true` / `false`.
    Bool(bool),
    /// Renders in decimal form.
    Int(i64),
    /// Renders in Rust's `Display` form.
    Float(f64),
    /// A single character. Renders single-quoted: `'x'`.
    Char(char),
    /// Plain text. Renders double-quoted: `"x"`.
    Text(String),
    /// Pre-formatted text that bypasses quoting entirely.
    Unquoted(UnquotedText),
    /// An ordered group (array, sequence, set). Renders bracketed.
    List(Vec<Value>),
    /// A keyed group. Renders braced, normalized by rendered key.
    Map(Vec<(Value, Value)>),
    /// A custom value's own natural display text. Renders verbatim.
    Display(String),
    /// A value with no usable display form. Renders as a generic
    /// placeholder instead of failing.
    Unrenderable,
}

impl Value {
    /// Capture a custom value through its own `Display` implementation.
    ///
    /// This is the fallback branch for "any other value": the display text
    /// is taken as-is and never quoted. If the value's formatter errors,
    /// the result degrades to [`Value::Unrenderable`] rather than
    /// propagating.
    ///
    /// # Example
    ///
    /// ```rust
    /// use failmsg::Value;
    ///
    /// struct Jedi(&'static str);
    /// impl std::fmt::Display for Jedi {
    ///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    ///         write!(f, "Jedi({})", self.0)
    ///     }
    /// }
    ///
    /// assert_eq!(Value::display(Jedi("Yoda")), Value::Display("Jedi(Yoda)".to_string()));
    /// ```
    pub fn display(value: impl fmt::Display) -> Self {
        let mut text = String::new();
        match write!(&mut text, "{}", value) {
            Ok(()) => Value::Display(text),
            Err(_) => Value::Unrenderable,
        }
    }

    /// Whether this value is a group (list or map).
    pub fn is_group(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_))
    }
}

/// Text that must be emitted verbatim, bypassing default quoting.
///
/// Wrap an argument in `UnquotedText` when it is already composed human
/// text (a sub-message, a code snippet) rather than atomic data. The
/// renderer recognizes the wrapper ahead of every other rule and returns
/// its content unchanged.
///
/// Its `Display` form equals its content, and equality is content
/// equality, so it composes transparently wherever a rendered value is
/// expected.
///
/// # Example
///
/// ```rust
/// use failmsg::{unquoted, StandardRepresentation, Representation, Value};
///
/// let repr = StandardRepresentation::new();
/// assert_eq!(repr.render(&unquoted("green")), "green");
/// assert_eq!(repr.render(&Value::from("green")), "\"green\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnquotedText(String);

impl UnquotedText {
    /// Wrap a string for verbatim rendering.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The wrapped text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnquotedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shorthand for `Value::Unquoted(UnquotedText::new(text))`.
pub fn unquoted(text: impl Into<String>) -> Value {
    Value::Unquoted(UnquotedText::new(text))
}

/// Build a `Vec<Value>` from heterogeneous arguments.
///
/// # Example
///
/// ```rust
/// use failmsg::{args, Value};
///
/// let captured = args!["Yoda", 900, true];
/// assert_eq!(captured[1], Value::Int(900));
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::Value::from($value)),*]
    };
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Int(v.into())
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int(v.into())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::Int(v.into())
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::Int(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v.into())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        // u64 values beyond i64 range keep their decimal form.
        match i64::try_from(v) {
            Ok(i) => Value::Int(i),
            Err(_) => Value::Display(v.to_string()),
        }
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::from(v as u64)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<UnquotedText> for Value {
    fn from(v: UnquotedText) -> Self {
        Value::Unquoted(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(v: &[T]) -> Self {
        Value::List(v.iter().cloned().map(Into::into).collect())
    }
}

impl<K: Into<Value>, V: Into<Value>, S> From<HashMap<K, V, S>> for Value {
    fn from(v: HashMap<K, V, S>) -> Self {
        Value::Map(v.into_iter().map(|(k, val)| (k.into(), val.into())).collect())
    }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(v: BTreeMap<K, V>) -> Self {
        Value::Map(v.into_iter().map(|(k, val)| (k.into(), val.into())).collect())
    }
}

/// Date and time values render in their semantic ISO form, unquoted.
#[cfg(feature = "chrono")]
mod chrono_impls {
    use super::Value;
    use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

    impl From<DateTime<Utc>> for Value {
        fn from(v: DateTime<Utc>) -> Self {
            Value::Display(v.to_rfc3339_opts(SecondsFormat::Secs, true))
        }
    }

    impl From<NaiveDateTime> for Value {
        fn from(v: NaiveDateTime) -> Self {
            Value::Display(v.to_string())
        }
    }

    impl From<NaiveDate> for Value {
        fn from(v: NaiveDate) -> Self {
            Value::Display(v.to_string())
        }
    }
}
