use crate::parsing::blocks::lines::{leading_spaces, lines_with_offsets, skip_newlines};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDef<'a> {
    pub key: &'a str,
    pub url: &'a str,
    pub title: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootnoteDef<'a> {
    pub key: &'a str,
    /// Body with continuation lines de-indented.
    pub body: String,
}

/// `[key]: url "title"` link definitions and `[^key]: text` footnotes.
pub struct Definition;

impl Definition {
    pub const FOOTNOTE_OPEN: &'static str = "[^";
    pub const SEPARATOR: &'static str = "]:";

    /// Parses a link definition line.
    pub fn link(line: &str) -> Option<LinkDef<'_>> {
        let rest = line.trim_start_matches(' ').strip_prefix('[')?;
        let close = rest.find(']')?;
        let key = &rest[..close];
        if key.is_empty() || key.contains('^') {
            return None;
        }
        let rest = rest[close..].strip_prefix(Self::SEPARATOR)?;
        let rest = rest.trim_start_matches(' ');
        let rest = rest.strip_prefix('<').unwrap_or(rest);
        let url_len = rest
            .find(|c: char| c.is_whitespace() || c == '>')
            .unwrap_or(rest.len());
        if url_len == 0 {
            return None;
        }
        let url = &rest[..url_len];
        let rest = &rest[url_len..];
        let rest = rest.strip_prefix('>').unwrap_or(rest);

        let title = match rest.trim() {
            "" => None,
            t if rest.starts_with(' ')
                && t.len() >= 3
                && t.starts_with(['"', '('])
                && t.ends_with(['"', ')']) =>
            {
                Some(&t[1..t.len() - 1])
            }
            _ => return None,
        };
        Some(LinkDef { key, url, title })
    }

    pub fn is_link_definition(line: &str) -> bool {
        Self::link(line).is_some()
    }

    /// Splits a footnote definition's first line into key and text.
    fn footnote_head(line: &str) -> Option<(&str, &str)> {
        let rest = line.strip_prefix(Self::FOOTNOTE_OPEN)?;
        let close = rest.find(']')?;
        let key = &rest[..close];
        if key.is_empty() {
            return None;
        }
        let text = rest[close..].strip_prefix(Self::SEPARATOR)?;
        Some((key, text.trim_start_matches(' ')))
    }

    pub fn is_footnote_definition(line: &str) -> bool {
        Self::footnote_head(line).is_some()
    }

    pub fn scan_link(s: &str) -> Option<(usize, LinkDef<'_>)> {
        let line = lines_with_offsets(s).next()?;
        let def = Self::link(line.text)?;
        Some((skip_newlines(s, line.end), def))
    }

    /// Scans a footnote definition plus its indented continuation lines.
    pub fn scan_footnote(s: &str) -> Option<(usize, FootnoteDef<'_>)> {
        let mut lines = lines_with_offsets(s);
        let first = lines.next()?;
        let (key, text) = Self::footnote_head(first.text)?;

        let mut consumed = first.end;
        let mut continuation = Vec::new();
        let mut blanks = 0;
        for line in lines {
            if line.text.is_empty() {
                blanks += 1;
            } else if line.text.starts_with(' ') {
                continuation.extend(std::iter::repeat_n("", blanks));
                continuation.push(line.text);
                blanks = 0;
            } else {
                break;
            }
            consumed = line.end;
        }

        let indent = continuation
            .iter()
            .filter(|l| !l.is_empty())
            .map(|l| leading_spaces(l))
            .min()
            .unwrap_or(0);
        let mut body = vec![text];
        body.extend(
            continuation
                .iter()
                .map(|l| if l.is_empty() { *l } else { &l[indent..] }),
        );

        Some((
            consumed,
            FootnoteDef {
                key,
                body: body.join("\n"),
            },
        ))
    }
}
