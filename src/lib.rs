//! # failmsg
//!
//! A failure-message engine for assertion libraries.
//!
//! Given a failed assertion, `failmsg` produces the human-readable
//! diagnostic string: it renders arbitrary values (strings, chars,
//! numbers, collections, maps, custom objects) into a consistent textual
//! form, substitutes them into a message template, and prefixes the
//! result with the assertion's description.
//!
//! ## Quick Start
//!
//! ```rust
//! use failmsg::{args, Description, MessageFactory};
//!
//! let factory = MessageFactory::new(
//!     "%nexpecting:%n <%s>%nto contain:%n <%s>",
//!     args![vec!["Yoda", "Luke"], "Obiwan"],
//! );
//!
//! let message = factory.create(&Description::new("jedi"));
//! assert_eq!(
//!     message,
//!     "[jedi] \nexpecting:\n <[\"Yoda\", \"Luke\"]>\nto contain:\n <\"Obiwan\">"
//! );
//! ```
//!
//! ## Custom Rendering Policy
//!
//! The representation is supplied at creation time, so one factory can be
//! rendered under different policies:
//!
//! ```rust
//! use failmsg::{args, Description, MessageFactory, StandardRepresentation};
//!
//! let factory = MessageFactory::new("got <%s>", args!["a rather long value"]);
//!
//! let compact = StandardRepresentation::new().truncate_text_at(10);
//! assert_eq!(
//!     factory.create_with(&Description::empty(), &compact),
//!     "got <\"a rathe...\">"
//! );
//! ```
//!
//! ## Lazy Descriptions
//!
//! Expensive labels are computed only when a failure actually renders:
//!
//! ```rust
//! use failmsg::{args, Description, MessageFactory};
//!
//! let ids: Vec<u32> = (0..10_000).collect();
//! let description = Description::lazy(move || format!("checking {} ids", ids.len()));
//!
//! let factory = MessageFactory::new("to be sorted", args![]);
//! assert_eq!(factory.create(&description), "[checking 10000 ids] to be sorted");
//! ```

pub mod description;
pub mod error;
pub mod factories;
pub mod message;
pub mod representation;

#[cfg(feature = "json")]
mod json;

// Core types
pub use description::Description;
pub use error::MessageError;
pub use message::{MessageFactory, LINE_SEPARATOR};
pub use representation::{
    unquoted, Representation, StandardRepresentation, UnquotedText, Value, UNRENDERABLE,
};
