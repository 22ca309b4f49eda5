pub mod code_span;
pub mod emphasis;
pub mod html;
pub mod link;
pub mod rest;
pub mod text;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strikethrough, Strong};
pub use html::InlineHtml;
pub use link::{
    Autolink, FootnoteRef, ImageLink, ImageLinkParts, Link, LinkParts, NoLink, RefLink, RefParts,
    Url,
};
pub use rest::{EolLiteralMarker, InlineMath, RestLink, RestRole};
pub use text::{Escape, LineBreak};
