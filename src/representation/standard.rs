//! The default rendering policy.
//!
//! [`StandardRepresentation`] is the representation used by
//! [`MessageFactory::create`](crate::MessageFactory::create) unless the
//! caller supplies another one. It is a plain config value: share one
//! instance freely across threads, or build a tweaked copy per call.

use super::value::Value;
use super::Representation;

/// Placeholder emitted for values with no usable display form.
pub const UNRENDERABLE: &str = "<unrenderable>";

/// The default, type-driven rendering policy.
///
/// Quoting is decided by the value's shape: text is double-quoted,
/// characters are single-quoted, everything else (numbers, booleans,
/// null, dates, custom display text) is emitted bare. Groups are
/// bracketed (`[a, b]`) or braced (`{k=v}`) with every element rendered
/// by the same rule.
///
/// Use the builder methods to bound output size:
///
/// ```rust
/// use failmsg::{Representation, StandardRepresentation, Value};
///
/// let repr = StandardRepresentation::new()
///     .truncate_text_at(10)
///     .max_group_elements(3);
///
/// assert_eq!(repr.render(&Value::from("a very long string")), "\"a very ...\"");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StandardRepresentation {
    /// Maximum characters of quoted text before truncating with `...`.
    truncate_text_at: Option<usize>,
    /// Maximum group elements rendered before eliding the tail with `...`.
    max_group_elements: Option<usize>,
}

impl StandardRepresentation {
    /// Create the default representation: no truncation, no elision.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compact representation for terse contexts: text capped at
    /// 60 characters, groups at 10 elements.
    pub fn compact() -> Self {
        Self::new().truncate_text_at(60).max_group_elements(10)
    }

    /// Cap rendered text at `chars` characters (the `...` tail counts
    /// toward the cap). Multi-byte safe.
    pub fn truncate_text_at(mut self, chars: usize) -> Self {
        self.truncate_text_at = Some(chars);
        self
    }

    /// Render at most `n` elements per group, eliding the rest as `...`.
    pub fn max_group_elements(mut self, n: usize) -> Self {
        self.max_group_elements = Some(n);
        self
    }

    /// Truncate a string to the configured maximum length.
    /// Handles multi-byte UTF-8 characters safely.
    fn truncate(&self, s: &str) -> String {
        let Some(max) = self.truncate_text_at else {
            return s.to_string();
        };
        if s.chars().count() <= max {
            s.to_string()
        } else {
            // Reserve 3 chars for "..."
            let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
            format!("{}...", truncated)
        }
    }

    /// Render the visible slice of a group, honoring `max_group_elements`.
    fn group_parts<'a>(&self, values: &'a [Value]) -> (&'a [Value], bool) {
        match self.max_group_elements {
            Some(max) if values.len() > max => (&values[..max], true),
            _ => (values, false),
        }
    }

    fn render_map(&self, entries: &[(Value, Value)]) -> String {
        // Keyed groups have no inherent order; normalize by rendered key
        // so equal maps always render identically.
        let mut rendered: Vec<(String, String)> = entries
            .iter()
            .map(|(k, v)| (self.render(k), self.render(v)))
            .collect();
        rendered.sort_by(|a, b| a.0.cmp(&b.0));

        let elided = match self.max_group_elements {
            Some(max) if rendered.len() > max => {
                rendered.truncate(max);
                true
            }
            _ => false,
        };

        let mut parts: Vec<String> = rendered
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        if elided {
            parts.push("...".to_string());
        }
        format!("{{{}}}", parts.join(", "))
    }
}

impl Representation for StandardRepresentation {
    fn render(&self, value: &Value) -> String {
        match value {
            // The unquoted marker wins over every other rule.
            Value::Unquoted(text) => text.as_str().to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Char(c) => format!("'{}'", c),
            Value::Text(s) => format!("\"{}\"", self.truncate(s)),
            Value::List(items) => self.render_group(items),
            Value::Map(entries) => self.render_map(entries),
            Value::Display(s) => s.clone(),
            Value::Unrenderable => UNRENDERABLE.to_string(),
        }
    }

    fn render_group(&self, values: &[Value]) -> String {
        let (visible, elided) = self.group_parts(values);
        let mut parts: Vec<String> = visible.iter().map(|v| self.render(v)).collect();
        if elided {
            parts.push("...".to_string());
        }
        format!("[{}]", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::representation::value::unquoted;
    use proptest::prelude::*;

    fn repr() -> StandardRepresentation {
        StandardRepresentation::new()
    }

    #[test]
    fn test_null_renders_bare() {
        assert_eq!(repr().render(&Value::Null), "null");
    }

    #[test]
    fn test_text_is_double_quoted() {
        assert_eq!(repr().render(&Value::from("Yoda")), "\"Yoda\"");
    }

    #[test]
    fn test_char_is_single_quoted() {
        assert_eq!(repr().render(&Value::from('a')), "'a'");
    }

    #[test]
    fn test_unquoted_is_verbatim() {
        assert_eq!(repr().render(&unquoted("green")), "green");
    }

    #[test]
    fn test_scalars_render_bare() {
        assert_eq!(repr().render(&Value::from(8i32)), "8");
        assert_eq!(repr().render(&Value::from(true)), "true");
        assert_eq!(repr().render(&Value::from(2.5f64)), "2.5");
    }

    #[test]
    fn test_empty_group() {
        assert_eq!(repr().render_group(&[]), "[]");
    }

    #[test]
    fn test_singleton_group_matches_render() {
        let r = repr();
        let x = Value::from("Yoda");
        assert_eq!(r.render_group(std::slice::from_ref(&x)), format!("[{}]", r.render(&x)));
    }

    #[test]
    fn test_group_of_names() {
        let r = repr();
        let group = vec![Value::from("Yoda"), Value::from("Luke"), Value::from("Obiwan")];
        assert_eq!(r.render_group(&group), r#"["Yoda", "Luke", "Obiwan"]"#);
    }

    #[test]
    fn test_nested_groups() {
        let v = Value::from(vec![vec![1, 2], vec![3]]);
        assert_eq!(repr().render(&v), "[[1, 2], [3]]");
    }

    #[test]
    fn test_map_sorted_by_rendered_key() {
        let entries = vec![
            (Value::from("b"), Value::from(2)),
            (Value::from("a"), Value::from(1)),
        ];
        assert_eq!(repr().render(&Value::Map(entries)), r#"{"a"=1, "b"=2}"#);
    }

    #[test]
    fn test_empty_map() {
        assert_eq!(repr().render(&Value::Map(Vec::new())), "{}");
    }

    #[test]
    fn test_unrenderable_placeholder() {
        assert_eq!(repr().render(&Value::Unrenderable), UNRENDERABLE);
    }

    #[test]
    fn test_truncate_short_string() {
        let r = repr().truncate_text_at(60);
        assert_eq!(r.render(&Value::from("hello")), "\"hello\"");
    }

    #[test]
    fn test_truncate_long_string() {
        let r = repr().truncate_text_at(10);
        assert_eq!(r.render(&Value::from("hello world!")), "\"hello w...\"");
    }

    #[test]
    fn test_truncate_unicode() {
        let r = repr().truncate_text_at(6);
        // 7 chars in, 3 chars + "..." out
        assert_eq!(r.render(&Value::from("日本語ですよね")), "\"日本語...\"");
    }

    #[test]
    fn test_group_elision() {
        let r = repr().max_group_elements(2);
        let group = vec![Value::from(1), Value::from(2), Value::from(3), Value::from(4)];
        assert_eq!(r.render_group(&group), "[1, 2, ...]");
    }

    #[test]
    fn test_compact_preset() {
        let r = StandardRepresentation::compact();
        let long = "x".repeat(100);
        let rendered = r.render(&Value::from(long));
        assert_eq!(rendered.chars().count(), 62); // 60 + 2 quotes
        assert!(rendered.ends_with("...\""));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Text always comes back delimited by double quotes, with the
        /// original string inside when no truncation is configured.
        #[test]
        fn text_is_quoted_verbatim(s in "[^\"]{0,40}") {
            let rendered = repr().render(&Value::from(s.as_str()));
            prop_assert_eq!(rendered, format!("\"{}\"", s));
        }

        /// The unquoted marker returns exactly its content.
        #[test]
        fn unquoted_is_identity(s in ".{0,40}") {
            prop_assert_eq!(repr().render(&unquoted(s.as_str())), s);
        }

        /// Rendering is deterministic: same value, same output.
        #[test]
        fn render_is_deterministic(items in prop::collection::vec(-100i64..100, 0..8)) {
            let group: Vec<Value> = items.into_iter().map(Value::from).collect();
            let r = repr();
            prop_assert_eq!(r.render_group(&group), r.render_group(&group));
        }
    }
}
