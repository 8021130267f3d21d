//! Contextual labels prefixed to failure messages.
//!
//! A [`Description`] carries the "what was being asserted" context that
//! leads every diagnostic, e.g. `[user ids] expected ...`. Labels can be
//! supplied eagerly or as a deferred computation that only runs if a
//! failure actually renders.

use std::fmt;
use std::sync::Arc;

use crate::error::MessageError;

/// A short contextual label prefixed to every rendered message.
///
/// Three variants:
/// - `Empty` - renders as no prefix at all
/// - `Text` - a fixed label, captured eagerly
/// - `Lazy` - a deferred computation, invoked once per `create` call so
///   expensive label construction only happens when a failure renders
///
/// A non-empty label renders as the prefix `"[label] "` (trailing space
/// included).
///
/// # Example
///
/// ```rust
/// use failmsg::{args, Description, MessageFactory};
///
/// let factory = MessageFactory::new("to be ASCII", args![]);
/// assert_eq!(factory.create(&Description::new("Test")), "[Test] to be ASCII");
/// assert_eq!(factory.create(&Description::empty()), "to be ASCII");
/// ```
#[derive(Clone)]
pub enum Description {
    /// No label; messages render with no prefix.
    Empty,
    /// A fixed label.
    Text(String),
    /// A label computed on demand, once per rendering.
    Lazy(Arc<dyn Fn() -> anyhow::Result<String> + Send + Sync>),
}

impl Description {
    /// The empty description (no prefix).
    pub fn empty() -> Self {
        Description::Empty
    }

    /// A fixed-text description. An empty string behaves like
    /// [`Description::empty`].
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        if label.is_empty() {
            Description::Empty
        } else {
            Description::Text(label)
        }
    }

    /// A deferred description; `label` runs once per `create` call.
    ///
    /// # Example
    ///
    /// ```rust
    /// use failmsg::Description;
    ///
    /// let ids = vec![4, 8, 15];
    /// let description = Description::lazy(move || format!("checking {} ids", ids.len()));
    /// ```
    pub fn lazy(label: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Description::Lazy(Arc::new(move || Ok(label())))
    }

    /// A deferred description whose computation may fail.
    ///
    /// A failure surfaces as [`MessageError::Description`] when the
    /// message renders; it is never silently replaced by a placeholder.
    pub fn try_lazy(
        label: impl Fn() -> anyhow::Result<String> + Send + Sync + 'static,
    ) -> Self {
        Description::Lazy(Arc::new(label))
    }

    /// Compute the raw label text. Empty descriptions yield `""`.
    pub fn label(&self) -> Result<String, MessageError> {
        match self {
            Description::Empty => Ok(String::new()),
            Description::Text(label) => Ok(label.clone()),
            Description::Lazy(f) => f().map_err(MessageError::Description),
        }
    }

    /// Compute the message prefix: `"[label] "` for a non-empty label,
    /// `""` otherwise.
    pub(crate) fn prefix(&self) -> Result<String, MessageError> {
        let label = self.label()?;
        if label.is_empty() {
            Ok(label)
        } else {
            Ok(format!("[{}] ", label))
        }
    }
}

impl Default for Description {
    fn default() -> Self {
        Description::Empty
    }
}

impl fmt::Debug for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Description::Empty => f.write_str("Description::Empty"),
            Description::Text(label) => f.debug_tuple("Description::Text").field(label).finish(),
            Description::Lazy(_) => f.write_str("Description::Lazy(..)"),
        }
    }
}

impl From<&str> for Description {
    fn from(label: &str) -> Self {
        Description::new(label)
    }
}

impl From<String> for Description {
    fn from(label: String) -> Self {
        Description::new(label)
    }
}

/// A missing description is the empty description.
impl<T: Into<Description>> From<Option<T>> for Description {
    fn from(label: Option<T>) -> Self {
        match label {
            Some(inner) => inner.into(),
            None => Description::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_prefix() {
        assert_eq!(Description::empty().prefix().unwrap(), "");
        assert_eq!(Description::new("").prefix().unwrap(), "");
    }

    #[test]
    fn test_text_prefix_is_bracketed() {
        assert_eq!(Description::new("Test").prefix().unwrap(), "[Test] ");
    }

    #[test]
    fn test_none_is_empty() {
        let d: Description = Option::<&str>::None.into();
        assert_eq!(d.label().unwrap(), "");
    }

    #[test]
    fn test_lazy_runs_per_call() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let d = Description::lazy(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            "computed".to_string()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(d.prefix().unwrap(), "[computed] ");
        assert_eq!(d.prefix().unwrap(), "[computed] ");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_try_lazy_failure_surfaces() {
        let d = Description::try_lazy(|| Err(anyhow::anyhow!("boom")));
        let err = d.prefix().unwrap_err();
        assert!(matches!(err, MessageError::Description(_)));
        assert!(err.to_string().contains("boom"));
    }
}
