use crate::parsing::blocks::lines::lines_with_offsets;

/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Whether the line opens (or continues) a quote.
    pub fn is_quoted(line: &str) -> bool {
        line.trim_start_matches(' ').starts_with(Self::PREFIX)
    }

    /// Strips one level of quoting: leading spaces, `>`, and one optional space.
    ///
    /// Lazy continuation lines without a `>` come back unchanged.
    pub fn strip_prefix(line: &str) -> &str {
        let t = line.trim_start_matches(' ');
        match t.strip_prefix(Self::PREFIX) {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        }
    }

    /// Scans a quote at the start of `s`.
    ///
    /// Returns the consumed length and the quote body with one level of
    /// prefixes removed. Blank lines stay inside the quote when another
    /// quoted line follows them.
    pub fn scan(s: &str) -> Option<(usize, String)> {
        let mut lines = lines_with_offsets(s);
        let first = lines.next()?;
        if !Self::is_quoted(first.text) {
            return None;
        }

        let mut body = vec![Self::strip_prefix(first.text)];
        let mut consumed = first.end;
        let mut blanks = Vec::new();

        for line in lines {
            if line.text.is_empty() {
                blanks.push("");
                consumed = line.end;
                continue;
            }
            if !blanks.is_empty() && !Self::is_quoted(line.text) {
                break;
            }
            body.append(&mut blanks);
            body.push(Self::strip_prefix(line.text));
            consumed = line.end;
        }

        Some((consumed, body.join("\n")))
    }
}
