//! Links, images, autolinks and footnote references.

use regex::Regex;
use std::sync::OnceLock;

/// Index of the `]` closing the `[` at the start of `s`.
///
/// Brackets nest; backslash-escaped brackets are skipped.
fn closing_bracket(s: &str) -> Option<usize> {
    if !s.starts_with('[') {
        return None;
    }
    let mut depth = 0usize;
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn split_image(s: &str) -> (bool, &str) {
    match s.strip_prefix('!') {
        Some(rest) if rest.starts_with('[') => (true, rest),
        _ => (false, s),
    }
}

/// The pieces of `[text](target "title")` or its image form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkParts<'a> {
    pub len: usize,
    pub is_image: bool,
    pub text: &'a str,
    pub target: &'a str,
    pub title: Option<&'a str>,
}

/// Inline links `[text](target "title")` and images `![alt](src)`.
pub struct Link;

impl Link {
    pub fn scan(s: &str) -> Option<LinkParts<'_>> {
        let (is_image, bracketed) = split_image(s);
        let offset = s.len() - bracketed.len();
        let close = closing_bracket(bracketed)?;
        let text = &bracketed[1..close];

        let dest_start = offset + close + 1;
        let inner = s[dest_start..].strip_prefix('(')?;
        let mut i = dest_start + 1;

        i += inner.len() - inner.trim_start().len();
        let (target, target_len) = Self::destination(&s[i..])?;
        i += target_len;

        let after_target = &s[i..];
        let ws = after_target.len() - after_target.trim_start().len();
        let mut title = None;
        if ws > 0 && let Some((t, n)) = Self::title(&after_target[ws..]) {
            title = Some(t);
            i += ws + n;
        }

        let tail = &s[i..];
        let tail = tail.trim_start();
        if !tail.starts_with(')') {
            return None;
        }
        let len = s.len() - tail.len() + 1;
        Some(LinkParts {
            len,
            is_image,
            text,
            target,
            title,
        })
    }

    /// `<target>` or a run without whitespace and with balanced parentheses.
    fn destination(s: &str) -> Option<(&str, usize)> {
        if let Some(angled) = s.strip_prefix('<') {
            let end = angled.find(['>', '\n'])?;
            if !angled[end..].starts_with('>') {
                return None;
            }
            return Some((&angled[..end], end + 2));
        }
        let mut depth = 0usize;
        for (i, c) in s.char_indices() {
            match c {
                '(' => depth += 1,
                ')' if depth == 0 => return Some((&s[..i], i)),
                ')' => depth -= 1,
                c if c.is_whitespace() => return Some((&s[..i], i)),
                _ => {}
            }
        }
        None
    }

    /// A quoted title followed (after optional whitespace) by `)`.
    fn title(s: &str) -> Option<(&str, usize)> {
        let quote = s.chars().next().filter(|c| matches!(c, '"' | '\''))?;
        let body = &s[1..];
        for (i, c) in body.char_indices() {
            if c == quote && body[i + 1..].trim_start().starts_with(')') {
                return Some((&body[..i], i + 2));
            }
        }
        None
    }
}

/// The pieces of `[text][key]` or `[key]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefParts<'a> {
    pub len: usize,
    pub is_image: bool,
    pub text: &'a str,
    pub key: &'a str,
}

/// `[text][key]`; an empty key reuses the text.
pub struct RefLink;

impl RefLink {
    pub fn scan(s: &str) -> Option<RefParts<'_>> {
        let (is_image, bracketed) = split_image(s);
        let close = closing_bracket(bracketed)?;
        let text = &bracketed[1..close];

        let after = &bracketed[close + 1..];
        let key_part = after.trim_start().strip_prefix('[')?;
        let key_end = key_part.find(']')?;
        let key = &key_part[..key_end];
        if key.contains(['[', '^']) {
            return None;
        }
        Some(RefParts {
            len: s.len() - key_part.len() + key_end + 1,
            is_image,
            text,
            key: if key.is_empty() { text } else { key },
        })
    }
}

/// `[key]` with no destination.
pub struct NoLink;

impl NoLink {
    pub fn scan(s: &str) -> Option<RefParts<'_>> {
        let (is_image, bracketed) = split_image(s);
        let offset = s.len() - bracketed.len();
        let close = closing_bracket(bracketed)?;
        let text = &bracketed[1..close];
        if text.is_empty() {
            return None;
        }
        Some(RefParts {
            len: offset + close + 1,
            is_image,
            text,
            key: text,
        })
    }
}

/// The pieces of `[![alt](src)](target)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageLinkParts<'a> {
    pub len: usize,
    pub alt: &'a str,
    pub src: &'a str,
    pub target: &'a str,
}

/// A link whose only text is an image.
pub struct ImageLink;

impl ImageLink {
    pub const OPEN: &str = "[!";

    pub fn scan(s: &str) -> Option<ImageLinkParts<'_>> {
        if !s.starts_with(Self::OPEN) {
            return None;
        }
        let outer = Link::scan(s)?;
        let inner = Link::scan(outer.text)?;
        if !inner.is_image || inner.len != outer.text.len() {
            return None;
        }
        Some(ImageLinkParts {
            len: outer.len,
            alt: inner.text,
            src: inner.target,
            target: outer.target,
        })
    }
}

/// `<scheme:…>` and `<user@host>`.
pub struct Autolink;

impl Autolink {
    /// Returns the consumed length, the link, and whether it is an email.
    pub fn scan(s: &str) -> Option<(usize, &str, bool)> {
        let body = s.strip_prefix('<')?;
        let end = body.find(['>', ' ', '\n'])?;
        if !body[end..].starts_with('>') {
            return None;
        }
        let link = &body[..end];
        // the last separator with something on both sides decides the kind
        let (_, sep) = link
            .char_indices()
            .rev()
            .skip(1)
            .find(|(i, c)| *i > 0 && matches!(c, '@' | ':'))?;
        Some((end + 2, link, sep == '@'))
    }
}

/// A bare `http://` or `https://` URL.
pub struct Url;

impl Url {
    const TRAILING: &[char] = &['.', ',', ':', ';', '"', '\'', ')', ']'];

    /// Trailing sentence punctuation is left out of the URL.
    pub fn scan(s: &str) -> Option<usize> {
        static URL_REGEX: OnceLock<Regex> = OnceLock::new();
        let url_regex =
            URL_REGEX.get_or_init(|| Regex::new(r"^https?://[^\s<]+").expect("Invalid URL regex"));

        let url = url_regex.find(s)?.as_str().trim_end_matches(Self::TRAILING);
        (!url.ends_with("://")).then_some(url.len())
    }
}

/// `[^key]`
pub struct FootnoteRef;

impl FootnoteRef {
    pub const OPEN: &str = "[^";

    pub fn scan(s: &str) -> Option<(usize, &str)> {
        let body = s.strip_prefix(Self::OPEN)?;
        let end = body.find([']', '\n'])?;
        let key = &body[..end];
        if key.is_empty() || !body[end..].starts_with(']') {
            return None;
        }
        Some((Self::OPEN.len() + end + 1, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn plain_link() {
        let src = "[a](http://x.org/) b";
        assert_eq!(
            Link::scan(src),
            Some(LinkParts {
                len: 18,
                is_image: false,
                text: "a",
                target: "http://x.org/",
                title: None
            })
        );
    }

    #[test]
    fn link_with_title() {
        let parts = Link::scan("[a](b.html \"the title\")").unwrap();
        assert_eq!(parts.target, "b.html");
        assert_eq!(parts.title, Some("the title"));
        assert_eq!(parts.len, 23);
    }

    #[test]
    fn image() {
        let parts = Link::scan("![alt text](img.png)").unwrap();
        assert!(parts.is_image);
        assert_eq!(parts.text, "alt text");
        assert_eq!(parts.target, "img.png");
    }

    #[rstest]
    #[case::nested_brackets("[a [b] c](x)", Some("x"))]
    #[case::parens_in_target("[a](f(x).html)", Some("f(x).html"))]
    #[case::angled("[a](<x y>)", Some("x y"))]
    #[case::space_in_target("[a](x y)", None)]
    #[case::no_destination("[a] (x)", None)]
    #[case::unclosed("[a](x", None)]
    fn link_destinations(#[case] input: &str, #[case] target: Option<&str>) {
        assert_eq!(Link::scan(input).map(|p| p.target), target);
    }

    #[test]
    fn reference_links() {
        let parts = RefLink::scan("[text][Key] x").unwrap();
        assert_eq!((parts.len, parts.text, parts.key), (11, "text", "Key"));
        assert_eq!(RefLink::scan("[text][]").unwrap().key, "text");
        assert_eq!(RefLink::scan("[text] x"), None);
    }

    #[test]
    fn shortcut_links() {
        let parts = NoLink::scan("[key] x").unwrap();
        assert_eq!((parts.len, parts.key), (5, "key"));
        assert_eq!(NoLink::scan("[]"), None);
    }

    #[test]
    fn image_links() {
        assert_eq!(
            ImageLink::scan("[![alt](a.png)](http://x/) y"),
            Some(ImageLinkParts {
                len: 26,
                alt: "alt",
                src: "a.png",
                target: "http://x/"
            })
        );
        assert_eq!(ImageLink::scan("[![alt](a.png) more](http://x/)"), None);
    }

    #[rstest]
    #[case::url("<http://x.org/> y", Some((15, "http://x.org/", false)))]
    #[case::email("<me@x.org>", Some((10, "me@x.org", true)))]
    #[case::mailto("<mailto:me@x.org>", Some((17, "mailto:me@x.org", true)))]
    #[case::no_separator("<abc>", None)]
    #[case::tag_with_space("<a href=x>", None)]
    fn autolinks(#[case] input: &str, #[case] expected: Option<(usize, &str, bool)>) {
        assert_eq!(Autolink::scan(input), expected);
    }

    #[rstest]
    #[case::trailing_period("http://x.org/a. Next", Some(14))]
    #[case::stops_at_space("https://x.org b", Some(13))]
    #[case::scheme_only("http://", None)]
    #[case::not_a_url("ftp://x", None)]
    fn bare_urls(#[case] input: &str, #[case] expected: Option<usize>) {
        assert_eq!(Url::scan(input), expected);
    }

    #[test]
    fn footnote_refs() {
        assert_eq!(FootnoteRef::scan("[^1] x"), Some((4, "1")));
        assert_eq!(FootnoteRef::scan("[^] x"), None);
        assert_eq!(FootnoteRef::scan("[^a\nb]"), None);
    }
}
