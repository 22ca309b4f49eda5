//! reST inline constructs that pass through conversion verbatim.

const TICK: char = '`';

fn is_role_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | ':' | '+' | '-')
}

/// `` `` `` cannot open any of these forms; it is always a code span.
fn opens_interpreted(s: &str) -> bool {
    s.starts_with(TICK) && !s.starts_with("``")
}

/// Length of the interpreted text `` `...` `` at the start of `s`.
fn interpreted_len(s: &str) -> Option<usize> {
    if !opens_interpreted(s) {
        return None;
    }
    let close = s[1..].find(TICK)?;
    (close > 0).then_some(close + 2)
}

/// `:role:`text`` and `` `text`:role: ``.
pub struct RestRole;

impl RestRole {
    pub fn scan(s: &str) -> Option<usize> {
        if s.starts_with(':') {
            Self::prefix_form(s)
        } else {
            Self::suffix_form(s)
        }
    }

    fn prefix_form(s: &str) -> Option<usize> {
        let name = &s[1..];
        if !name.starts_with(|c: char| c.is_ascii_alphanumeric()) {
            return None;
        }
        let run = name.find(|c: char| !is_role_char(c)).unwrap_or(name.len());
        if !name[..run].ends_with(':') || !name[run..].starts_with(TICK) {
            return None;
        }
        let after = 1 + run;
        let body = &s[after..];
        if body.starts_with("``") {
            return None;
        }
        let close = body[1..].find(TICK)?;
        if body[1..1 + close].contains('\n') {
            return None;
        }
        Some(after + close + 2)
    }

    fn suffix_form(s: &str) -> Option<usize> {
        let text_len = interpreted_len(s)?;
        let name = s[text_len..].strip_prefix(':')?;
        if !name.starts_with(|c: char| c.is_ascii_alphanumeric()) {
            return None;
        }
        let run = name.find(|c: char| !is_role_char(c)).unwrap_or(name.len());
        let end = name[..run].rfind(':')?;
        (end > 0).then_some(text_len + 1 + end + 1)
    }
}

/// `` `text`_ `` and `` `text`__ ``.
pub struct RestLink;

impl RestLink {
    pub fn scan(s: &str) -> Option<usize> {
        let text_len = interpreted_len(s)?;
        let underscores = s[text_len..].bytes().take_while(|b| *b == b'_').count();
        match underscores {
            0 => None,
            n => Some(text_len + n.min(2)),
        }
    }
}

/// `` `$...$` ``
pub struct InlineMath;

impl InlineMath {
    pub const OPEN: &str = "`$";
    pub const CLOSE: &str = "$`";

    /// The body must be non-empty and stay on one line without a backtick,
    /// so a match never spans two code spans.
    pub fn scan(s: &str) -> Option<(usize, &str)> {
        let body = s.strip_prefix(Self::OPEN)?;
        let close = body.find(Self::CLOSE)?;
        let math = &body[..close];
        if math.is_empty() || math.contains(['\n', TICK]) {
            return None;
        }
        Some((Self::OPEN.len() + close + Self::CLOSE.len(), math))
    }
}

/// `::` at the very end of a paragraph.
pub struct EolLiteralMarker;

impl EolLiteralMarker {
    pub const MARKER: &str = "::";

    /// Returns the consumed length and whether the marker directly follows
    /// text, in which case one colon is kept.
    pub fn scan(s: &str) -> Option<(usize, bool)> {
        let after_ws = s.trim_start();
        let marker = after_ws.strip_prefix(Self::MARKER)?;
        if !marker.trim().is_empty() {
            return None;
        }
        Some((s.len(), after_ws.len() == s.len()))
    }
}
