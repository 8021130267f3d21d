//! The message factory: a template bound to captured arguments.
//!
//! A [`MessageFactory`] is built by a specialized assertion factory with a
//! fixed template and that failure's arguments, then handed to the
//! assertion layer, which renders it with the active description and
//! representation. Construction is cheap and validates nothing; all text
//! production is deferred to `create`.

mod template;

pub use template::LINE_SEPARATOR;

use crate::description::Description;
use crate::error::MessageError;
use crate::representation::{Representation, StandardRepresentation, Value};
use template::{placeholder_count, scan, Segment};

/// An immutable (template, arguments) pair rendering to a diagnostic
/// string on demand.
///
/// Templates use `%s` for "insert the next rendered argument", `%n` for a
/// line separator, and `%%` for a literal percent. Arguments are captured
/// by value at construction, so later changes to the caller's data can
/// never alter the eventual message.
///
/// Rendering is pure: calling `create` twice with equal inputs yields
/// byte-identical strings.
///
/// # Example
///
/// ```rust
/// use failmsg::{args, unquoted, Description, MessageFactory};
///
/// let factory = MessageFactory::new(
///     "Expecting:%n <%s>%nto be <%s>",
///     vec![failmsg::Value::from("Yoda"), unquoted("green")],
/// );
///
/// assert_eq!(
///     factory.create(&Description::empty()),
///     "Expecting:\n <\"Yoda\">\nto be <green>"
/// );
/// ```
///
/// # Panics
///
/// The `create`/`create_with` convenience methods panic when the template's
/// placeholder count does not match the number of captured arguments, or
/// when a lazy description fails. Both indicate a bug in the calling
/// factory; use [`try_create`](Self::try_create) /
/// [`try_create_with`](Self::try_create_with) for a `Result` instead.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageFactory {
    template: String,
    args: Vec<Value>,
}

impl MessageFactory {
    /// Capture a template and its arguments. No validation happens here;
    /// a placeholder/argument mismatch is reported when rendering.
    pub fn new(template: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            template: template.into(),
            args,
        }
    }

    /// The captured template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The captured arguments, in substitution order.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    // =========================================================================
    // Rendering (panics on programming errors)
    // =========================================================================

    /// Render the message with the default [`StandardRepresentation`].
    ///
    /// # Panics
    ///
    /// Panics on placeholder/argument count mismatch or a failed lazy
    /// description.
    pub fn create(&self, description: &Description) -> String {
        self.create_with(description, &StandardRepresentation::new())
    }

    /// Render the message with a caller-supplied representation.
    ///
    /// # Panics
    ///
    /// Panics on placeholder/argument count mismatch or a failed lazy
    /// description.
    pub fn create_with(
        &self,
        description: &Description,
        representation: &dyn Representation,
    ) -> String {
        self.try_create_with(description, representation)
            .unwrap_or_else(|err| {
                panic!("cannot render message template {:?}: {}", self.template, err)
            })
    }

    // =========================================================================
    // Non-panicking rendering
    // =========================================================================

    /// Render with the default representation, returning programming
    /// errors instead of panicking.
    pub fn try_create(&self, description: &Description) -> Result<String, MessageError> {
        self.try_create_with(description, &StandardRepresentation::new())
    }

    /// Render with a caller-supplied representation, returning programming
    /// errors instead of panicking.
    pub fn try_create_with(
        &self,
        description: &Description,
        representation: &dyn Representation,
    ) -> Result<String, MessageError> {
        let segments = scan(&self.template);

        let expected = placeholder_count(&segments);
        if expected != self.args.len() {
            return Err(MessageError::PlaceholderMismatch {
                expected,
                found: self.args.len(),
            });
        }

        let mut out = description.prefix()?;
        let mut args = self.args.iter();
        for segment in &segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Newline => out.push_str(LINE_SEPARATOR),
                // Count was checked above, one argument per placeholder.
                Segment::Placeholder => match args.next() {
                    Some(arg) => out.push_str(&representation.render(arg)),
                    None => unreachable!("placeholder count already validated"),
                },
            }
        }
        Ok(out)
    }
}
