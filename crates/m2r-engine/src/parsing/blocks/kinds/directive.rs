use crate::parsing::blocks::lines::lines_with_offsets;

/// reST explicit markup (`.. note::`, `.. [#a] text`, comments).
///
/// The block runs until the next line that starts with a non-space
/// character, so indented bodies and blank lines inside it stay attached.
pub struct Directive;

impl Directive {
    pub const MARKER: &'static str = "..";

    /// `..` followed by whitespace or the end of the line.
    pub fn opens(line: &str) -> bool {
        line.trim_start_matches(' ')
            .strip_prefix(Self::MARKER)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
    }

    /// Returns the consumed length and the directive text without its final
    /// newline.
    pub fn scan(s: &str) -> Option<(usize, &str)> {
        let mut lines = lines_with_offsets(s);
        let first = lines.next()?;
        if !Self::opens(first.text) {
            return None;
        }
        let mut end = first.end;
        for line in lines {
            if !line.text.is_empty() && !line.text.starts_with(' ') {
                break;
            }
            end = line.end;
        }
        let text = &s[..end];
        Some((end, text.strip_suffix('\n').unwrap_or(text)))
    }
}

/// A line holding nothing but `::`, which reST reads as a literal block
/// introducer.
pub struct LiteralMarker;

impl LiteralMarker {
    pub const MARKER: &'static str = "::";

    pub fn scan(s: &str) -> Option<usize> {
        let line = lines_with_offsets(s).next()?;
        (line.text.trim_end() == Self::MARKER).then_some(line.end)
    }
}
