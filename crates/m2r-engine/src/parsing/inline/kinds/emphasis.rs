/// Whether an underscore run may open at a position preceded by `prev`.
fn underscore_may_open(prev: Option<char>) -> bool {
    !prev.is_some_and(char::is_alphanumeric)
}

fn marker_of(s: &str, allow_underscore: bool) -> Option<u8> {
    match s.as_bytes().first() {
        Some(b'*') => Some(b'*'),
        Some(b'_') if allow_underscore => Some(b'_'),
        _ => None,
    }
}

/// `**x**` and `__x__`.
pub struct Strong;

impl Strong {
    /// Returns the consumed length and the body.
    ///
    /// The body closes at the first doubled marker not followed by a third.
    pub fn scan(s: &str, prev: Option<char>, allow_underscore: bool) -> Option<(usize, &str)> {
        let m = marker_of(s, allow_underscore)?;
        let bytes = s.as_bytes();
        if bytes.get(1) != Some(&m) {
            return None;
        }
        if m == b'_' && !underscore_may_open(prev) {
            return None;
        }
        let body = &bytes[2..];
        (1..body.len())
            .find(|&p| body[p] == m && body.get(p + 1) == Some(&m) && body.get(p + 2) != Some(&m))
            .map(|p| (p + 4, &s[2..2 + p]))
    }
}

/// `*x*` and `_x_`.
pub struct Emphasis;

impl Emphasis {
    /// Returns the consumed length and the body.
    ///
    /// Doubled markers inside the body are skipped as a unit, so `*a **b** c*`
    /// is one emphasis. An underscore body must close at a word boundary.
    pub fn scan(s: &str, prev: Option<char>, allow_underscore: bool) -> Option<(usize, &str)> {
        let m = marker_of(s, allow_underscore)?;
        if m == b'_' && !underscore_may_open(prev) {
            return None;
        }
        let bytes = s.as_bytes();
        if bytes.get(1).is_none_or(|b| *b == m || b.is_ascii_whitespace()) {
            return None;
        }
        let mut p = 1;
        while p < bytes.len() {
            if bytes[p] != m {
                p += 1;
                continue;
            }
            if bytes.get(p + 1) == Some(&m) {
                p += 2;
                continue;
            }
            let closes_word = m != b'_'
                || !s[p + 1..].chars().next().is_some_and(char::is_alphanumeric);
            if closes_word {
                return Some((p + 1, &s[1..p]));
            }
            p += 1;
        }
        None
    }
}

/// `~~x~~`
pub struct Strikethrough;

impl Strikethrough {
    pub const MARKER: &str = "~~";

    pub fn scan(s: &str) -> Option<(usize, &str)> {
        let body = s.strip_prefix(Self::MARKER)?;
        if body.starts_with(char::is_whitespace) {
            return None;
        }
        body.match_indices(Self::MARKER)
            .find(|(p, _)| body[..*p].chars().next_back().is_some_and(|c| !c.is_whitespace()))
            .map(|(p, _)| (p + 2 * Self::MARKER.len(), &body[..p]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::stars("**a** b", Some((5, "a")))]
    #[case::underscores("__a__ b", Some((5, "a")))]
    #[case::triple_close_extends("**a***", Some((6, "a*")))]
    #[case::empty("****", None)]
    #[case::unclosed("**a", None)]
    fn strong(#[case] input: &str, #[case] expected: Option<(usize, &str)>) {
        assert_eq!(Strong::scan(input, None, true), expected);
    }

    #[rstest]
    #[case::stars("*a* b", Some((3, "a")))]
    #[case::underscores("_a_ b", Some((3, "a")))]
    #[case::nested_strong("*a **b** c*", Some((11, "a **b** c")))]
    #[case::space_after_open("* a*", None)]
    #[case::intraword_close_skipped("_a_b_ c", Some((5, "a_b")))]
    #[case::unclosed("*a", None)]
    fn emphasis(#[case] input: &str, #[case] expected: Option<(usize, &str)>) {
        assert_eq!(Emphasis::scan(input, None, true), expected);
    }

    #[test]
    fn underscores_respect_the_option() {
        assert_eq!(Emphasis::scan("_a_", None, false), None);
        assert_eq!(Strong::scan("__a__", None, false), None);
        assert_eq!(Emphasis::scan("*a*", None, false), Some((3, "a")));
    }

    #[test]
    fn underscores_do_not_open_inside_words() {
        assert_eq!(Emphasis::scan("_b_", Some('a'), true), None);
        assert_eq!(Strong::scan("__b__", Some('a'), true), None);
        assert_eq!(Emphasis::scan("*b*", Some('a'), true), Some((3, "b")));
    }

    #[rstest]
    #[case::simple("~~gone~~ x", Some((8, "gone")))]
    #[case::space_before_close("~~a ~~b~~", Some((9, "a ~~b")))]
    #[case::space_after_open("~~ a~~", None)]
    fn strikethrough(#[case] input: &str, #[case] expected: Option<(usize, &str)>) {
        assert_eq!(Strikethrough::scan(input), expected);
    }
}
