//! Error type for message creation.

/// Programming errors raised while rendering a message.
///
/// These indicate a bug in the calling factory or its description
/// callback, not a data-dependent condition: rendering itself never fails
/// (values without a display form degrade to a placeholder instead).
/// The panicking `create` methods report these by panicking; the `try_`
/// twins return them.
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    /// The template's placeholder count does not match the number of
    /// captured arguments.
    #[error("template expects {expected} argument(s) but {found} were captured")]
    PlaceholderMismatch { expected: usize, found: usize },

    /// A lazily-computed description failed to produce its label.
    ///
    /// Surfaced distinctly from rendering so broken label callbacks are
    /// never masked as a formatting degradation.
    #[error("description callback failed: {0}")]
    Description(#[source] anyhow::Error),
}
