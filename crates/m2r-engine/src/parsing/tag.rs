//! HTML tag recognition shared by block and inline HTML.

/// Tags that never open an HTML block.
pub const INLINE_TAGS: &[&str] = &[
    "a", "em", "strong", "small", "s", "cite", "q", "dfn", "abbr", "data", "time", "code", "var",
    "samp", "kbd", "sub", "sup", "i", "b", "u", "mark", "ruby", "rt", "rp", "bdi", "bdo", "span",
    "br", "wbr", "ins", "del", "img", "font",
];

pub const COMMENT_OPEN: &str = "<!--";
pub const COMMENT_CLOSE: &str = "-->";

/// An opening tag found at the start of some text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenTag<'a> {
    pub name: &'a str,
    /// Byte length up to and including `>`.
    pub len: usize,
    pub self_closing: bool,
}

pub fn is_inline_tag(name: &str) -> bool {
    INLINE_TAGS.iter().any(|t| t.eq_ignore_ascii_case(name))
}

fn is_attr_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')
}

/// Parses `<name attr="v" ...>` or `<name .../>` at the start of `s`.
///
/// The name must be followed by whitespace, `/` or `>`, so autolinks such as
/// `<http://x>` and `<a@b.c>` are rejected.
pub fn open_tag(s: &str) -> Option<OpenTag<'_>> {
    let rest = s.strip_prefix('<')?;
    if !rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    let name_len = rest
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(rest.len());
    let name = &rest[..name_len];
    let mut i = 1 + name_len;

    loop {
        let after_ws = s[i..].trim_start();
        let ws = s[i..].len() - after_ws.len();
        if after_ws.starts_with("/>") {
            return Some(OpenTag {
                name,
                len: i + ws + 2,
                self_closing: true,
            });
        }
        if after_ws.starts_with('>') {
            return Some(OpenTag {
                name,
                len: i + ws + 1,
                self_closing: false,
            });
        }
        // every attribute must be separated from the name or previous value
        if ws == 0
            || !after_ws.starts_with(|c: char| c.is_ascii_alphabetic() || matches!(c, '-' | '_' | ':'))
        {
            return None;
        }
        i += ws;
        let attr_len = s[i..].find(|c: char| !is_attr_char(c)).unwrap_or(s.len() - i);
        i += attr_len;

        let after_name = s[i..].trim_start();
        if let Some(value) = after_name.strip_prefix('=') {
            let value_start = s.len() - value.trim_start().len();
            let value = &s[value_start..];
            let value_len = match value.chars().next() {
                Some(q @ ('"' | '\'')) => value[1..].find(q)? + 2,
                Some(_) => value
                    .find(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '>' | '<' | '='))
                    .unwrap_or(value.len()),
                None => return None,
            };
            if value_len == 0 {
                return None;
            }
            i = value_start + value_len;
        }
    }
}

/// Byte offsets just past each `</name>` in `s`, in order.
pub fn closing_tag_ends<'a>(s: &'a str, name: &'a str) -> impl Iterator<Item = usize> + 'a {
    let mut from = 0;
    std::iter::from_fn(move || {
        while let Some(rel) = s[from..].find("</") {
            let start = from + rel;
            from = start + 2;
            let rest = &s[from..];
            if rest.len() >= name.len()
                && rest.is_char_boundary(name.len())
                && rest[..name.len()].eq_ignore_ascii_case(name)
            {
                let after = rest[name.len()..].trim_start();
                if after.starts_with('>') {
                    return Some(s.len() - after.len() + 1);
                }
            }
        }
        None
    })
}

/// Byte offsets just past each `-->` in a comment starting at `s`.
pub fn comment_ends(s: &str) -> impl Iterator<Item = usize> + '_ {
    let body_start = if s.starts_with(COMMENT_OPEN) {
        COMMENT_OPEN.len()
    } else {
        s.len()
    };
    s[body_start..]
        .match_indices(COMMENT_CLOSE)
        .map(move |(i, _)| body_start + i + COMMENT_CLOSE.len())
}
