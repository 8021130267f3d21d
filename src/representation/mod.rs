//! Value rendering for failure messages.
//!
//! This module provides the pluggable rendering strategy:
//! - `Representation` - the strategy trait consumed by the message engine
//! - `StandardRepresentation` - the default quoting/formatting policy
//! - `Value` / `UnquotedText` - the closed model of renderable values
//!
//! A representation is supplied at message-creation time, never at
//! factory-construction time, so one factory can be rendered under
//! different policies.

mod standard;
pub mod value;

pub use standard::{StandardRepresentation, UNRENDERABLE};
pub use value::{unquoted, UnquotedText, Value};

/// Strategy converting a value, or a group of values, into display text.
///
/// Implementations must be total and deterministic: `render` never
/// panics, performs no I/O, and holds no mutable state, so a single
/// instance can be shared across concurrent callers.
///
/// Implement this trait to swap the entire formatting policy without
/// touching any message factory:
///
/// ```rust
/// use failmsg::{Description, MessageFactory, Representation, Value, args};
///
/// /// Renders every value through its debug-ish raw form, unquoted.
/// struct Bare;
///
/// impl Representation for Bare {
///     fn render(&self, value: &Value) -> String {
///         match value {
///             Value::Text(s) => s.clone(),
///             other => failmsg::StandardRepresentation::new().render(other),
///         }
///     }
/// }
///
/// let factory = MessageFactory::new("expected <%s>", args!["Yoda"]);
/// assert_eq!(factory.create_with(&Description::empty(), &Bare), "expected <Yoda>");
/// ```
pub trait Representation: Send + Sync {
    /// Render a single value into its display text.
    fn render(&self, value: &Value) -> String;

    /// Render an ordered group as `[e1, e2, ...]`, each element through
    /// [`render`](Self::render), joined by `", "`.
    fn render_group(&self, values: &[Value]) -> String {
        let parts: Vec<String> = values.iter().map(|v| self.render(v)).collect();
        format!("[{}]", parts.join(", "))
    }
}
