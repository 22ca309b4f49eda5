use crate::parsing::tag::{COMMENT_OPEN, closing_tag_ends, comment_ends, open_tag};

/// Raw HTML inside a line: a comment, a tag with its closing tag, or a
/// lone opening tag.
pub struct InlineHtml;

impl InlineHtml {
    pub fn scan(s: &str) -> Option<usize> {
        if s.starts_with(COMMENT_OPEN) {
            return comment_ends(s).next();
        }
        let tag = open_tag(s)?;
        if tag.self_closing {
            return Some(tag.len);
        }
        let closed = closing_tag_ends(&s[tag.len..], tag.name).next();
        Some(tag.len + closed.unwrap_or(0))
    }
}
