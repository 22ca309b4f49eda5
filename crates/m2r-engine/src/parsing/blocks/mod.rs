//! # Block Lexing
//!
//! Splits a normalised document into [`BlockToken`]s by trying an ordered
//! rule set at each position.
//!
//! ## Modules
//!
//! - [`grammar`]: rule sets per context (document, list item, footnote)
//! - [`kinds`]: one scanner per construct, owning its delimiters
//! - [`lexer`]: drives the rules and recurses into containers
//! - [`lines`]: line iteration with byte offsets
//! - [`types`]: the token tree

pub mod grammar;
pub mod kinds;
pub mod lexer;
pub mod lines;
pub mod types;

pub use grammar::{BlockRule, DOCUMENT_RULES, FOOTNOTE_RULES, LIST_ITEM_RULES};
pub use lexer::{BlockLexer, MAX_NESTING};
pub use types::{Alignment, BlockToken, InlineText, ListItem, Table, keyify};
