//! Markdown to reStructuredText conversion.
//!
//! The pipeline runs in three passes:
//! - [`parsing::blocks`] splits the document into block tokens,
//! - [`parsing::inline`] resolves the span-level markup inside them,
//! - [`render`] turns the token tree into reST text.
//!
//! [`convert`] ties the passes together.

pub mod convert;
pub mod error;
pub mod io;
pub mod options;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

pub use convert::{PROLOG, convert, convert_file};
pub use error::{ConvertError, UnsupportedConstruct};
pub use options::{Options, TableMode};
