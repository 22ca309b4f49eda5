use crate::parsing::blocks::lines::{leading_spaces, lines_with_offsets, skip_newlines};

/// ATX (`# title`) and setext (`title` over `===`) headings.
pub struct Heading;

impl Heading {
    pub const HASH: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Parses an ATX heading line into its level and text.
    pub fn atx(line: &str) -> Option<(u8, &str)> {
        let t = line.trim_start_matches(' ');
        let level = t.len() - t.trim_start_matches(Self::HASH).len();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let rest = &t[level..];
        if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
            return None;
        }
        let text = rest.trim().trim_end_matches(Self::HASH).trim_end();
        if text.is_empty() {
            return None;
        }
        Some((level as u8, text))
    }

    /// Level of a setext underline (`===` is 1, `---` is 2).
    pub fn underline(line: &str) -> Option<u8> {
        let t = line.trim();
        if leading_spaces(line) > 3 || t.is_empty() {
            return None;
        }
        if t.bytes().all(|b| b == b'=') {
            Some(1)
        } else if t.bytes().all(|b| b == b'-') {
            Some(2)
        } else {
            None
        }
    }

    pub fn scan_atx(s: &str) -> Option<(usize, u8, &str)> {
        let line = lines_with_offsets(s).next()?;
        let (level, text) = Self::atx(line.text)?;
        Some((skip_newlines(s, line.end), level, text))
    }

    pub fn scan_setext(s: &str) -> Option<(usize, u8, &str)> {
        let mut lines = lines_with_offsets(s);
        let title = lines.next()?;
        let underline = lines.next()?;
        if title.is_blank() {
            return None;
        }
        let level = Self::underline(underline.text)?;
        Some((skip_newlines(s, underline.end), level, title.text.trim()))
    }
}

/// A horizontal rule: three or more of `-`, `*` or `_`, spaces allowed.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [char; 3] = ['-', '*', '_'];

    /// Whether `line` is a rule with no leading indentation.
    pub fn is_rule_body(line: &str) -> bool {
        if !line.starts_with(Self::CHARS) {
            return false;
        }
        let mut count = 0;
        for c in line.chars() {
            if Self::CHARS.contains(&c) {
                count += 1;
            } else if c != ' ' {
                return false;
            }
        }
        count >= 3
    }

    pub fn is_rule(line: &str) -> bool {
        leading_spaces(line) <= 3 && Self::is_rule_body(line.trim_start_matches(' '))
    }

    pub fn scan(s: &str) -> Option<usize> {
        let line = lines_with_offsets(s).next()?;
        Self::is_rule(line.text).then(|| skip_newlines(s, line.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# head 1", Some((1, "head 1")))]
    #[case("###### six", Some((6, "six")))]
    #[case("## closed ##", Some((2, "closed")))]
    #[case("  # indented", Some((1, "indented")))]
    #[case("####### seven", None)]
    #[case("#hashtag", None)]
    #[case("#", None)]
    fn atx_headings(#[case] line: &str, #[case] expected: Option<(u8, &str)>) {
        assert_eq!(Heading::atx(line), expected);
    }

    #[rstest]
    #[case("===", Some(1))]
    #[case("---  ", Some(2))]
    #[case("=-=", None)]
    #[case("", None)]
    fn setext_underlines(#[case] line: &str, #[case] expected: Option<u8>) {
        assert_eq!(Heading::underline(line), expected);
    }

    #[test]
    fn setext_scan_consumes_both_lines() {
        let (n, level, text) = Heading::scan_setext("Title\n=====\n\nnext").unwrap();
        assert_eq!((level, text), (1, "Title"));
        assert_eq!(n, "Title\n=====\n\n".len());
    }

    #[rstest]
    #[case("---", true)]
    #[case("* * *", true)]
    #[case("_-*", true)]
    #[case("   ***", true)]
    #[case("    ***", false)]
    #[case("--", false)]
    #[case("- a -", false)]
    fn rules(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(ThematicBreak::is_rule(line), expected);
    }
}
