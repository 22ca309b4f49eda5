/// A single line of the text being lexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Line text without its newline.
    pub text: &'a str,
    /// Byte offset where the line starts.
    pub start: usize,
    /// Byte offset just past the newline, or the end of input.
    pub end: usize,
}

impl LineRef<'_> {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Returns an iterator over the lines of `s` with their byte offsets.
///
/// A trailing newline does not produce an empty final line.
pub fn lines_with_offsets(s: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    std::iter::from_fn(move || {
        if offset >= s.len() {
            return None;
        }
        let start = offset;
        let (text, end) = match s[start..].find('\n') {
            Some(i) => (&s[start..start + i], start + i + 1),
            None => (&s[start..], s.len()),
        };
        offset = end;
        Some(LineRef { text, start, end })
    })
}

/// The first line of `s`, if any.
pub fn first_line(s: &str) -> Option<LineRef<'_>> {
    lines_with_offsets(s).next()
}

/// Advances `pos` past any run of newlines.
pub fn skip_newlines(s: &str, pos: usize) -> usize {
    pos + s[pos..].len() - s[pos..].trim_start_matches('\n').len()
}

/// Number of leading spaces on a line.
pub fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}
