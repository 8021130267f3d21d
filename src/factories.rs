//! Representative specialized message factories.
//!
//! An assertion layer defines one small factory function per failure kind,
//! each binding a fixed template to that failure's values. This module
//! ships the common ones and serves as the pattern for downstream
//! factories: a free function taking the relevant values and returning a
//! [`MessageFactory`], nothing more.

use crate::message::MessageFactory;
use crate::representation::Value;

/// Message for a failed equality assertion.
///
/// # Example
///
/// ```rust
/// use failmsg::{factories::should_be_equal, Description};
///
/// let msg = should_be_equal("Luke", "Yoda").create(&Description::empty());
/// assert_eq!(msg, "\nexpecting:\n <\"Luke\">\nto be equal to:\n <\"Yoda\">");
/// ```
pub fn should_be_equal(actual: impl Into<Value>, expected: impl Into<Value>) -> MessageFactory {
    MessageFactory::new(
        "%nexpecting:%n <%s>%nto be equal to:%n <%s>",
        vec![actual.into(), expected.into()],
    )
}

/// Message for a failed inequality assertion.
pub fn should_not_be_equal(actual: impl Into<Value>, other: impl Into<Value>) -> MessageFactory {
    MessageFactory::new(
        "%nexpecting:%n <%s>%nnot to be equal to:%n <%s>",
        vec![actual.into(), other.into()],
    )
}

/// Message for a failed containment assertion.
pub fn should_contain(actual: impl Into<Value>, expected: impl Into<Value>) -> MessageFactory {
    MessageFactory::new(
        "%nexpecting:%n <%s>%nto contain:%n <%s>",
        vec![actual.into(), expected.into()],
    )
}

/// Message for a size mismatch.
pub fn should_have_size(
    actual: impl Into<Value>,
    actual_size: usize,
    expected_size: usize,
) -> MessageFactory {
    MessageFactory::new(
        "%nexpecting size:%n <%s>%nbut was:%n <%s>%nin:%n <%s>",
        vec![expected_size.into(), actual_size.into(), actual.into()],
    )
}

/// Message for a non-empty value that was expected to be empty.
pub fn should_be_empty(actual: impl Into<Value>) -> MessageFactory {
    MessageFactory::new("%nexpecting empty but was: <%s>", vec![actual.into()])
}
