//! # Inline Lexing
//!
//! Turns the text carried by block tokens into [`InlineToken`]s.
//!
//! ## Modules
//!
//! - [`cursor`]: byte cursor over the text being lexed
//! - [`grammar`]: rule precedence and the options that edit it
//! - [`kinds`]: one scanner per construct
//! - [`lexer`]: drives the rules, recursing into emphasis and link text
//! - [`types`]: the token enum

pub mod cursor;
pub mod grammar;
pub mod kinds;
pub mod lexer;
pub mod types;

pub use grammar::{DEFAULT_RULES, InlineRule, rules_for};
pub use lexer::InlineLexer;
pub use types::InlineToken;
