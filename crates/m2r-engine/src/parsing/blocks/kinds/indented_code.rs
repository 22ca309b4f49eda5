use crate::parsing::blocks::lines::lines_with_offsets;

/// Code indented by four spaces.
pub struct IndentedCode;

impl IndentedCode {
    pub const INDENT: &'static str = "    ";

    fn is_code_line(line: &str) -> bool {
        line.strip_prefix(Self::INDENT)
            .is_some_and(|rest| !rest.is_empty())
    }

    /// Returns the consumed length and the de-indented code.
    ///
    /// Blank lines between indented lines belong to the block.
    pub fn scan(s: &str) -> Option<(usize, String)> {
        let mut consumed = 0;
        let mut kept = Vec::new();
        let mut pending_blank = Vec::new();

        for line in lines_with_offsets(s) {
            if line.text.is_empty() {
                if kept.is_empty() {
                    return None;
                }
                pending_blank.push("");
                consumed = line.end;
                continue;
            }
            if !Self::is_code_line(line.text) {
                break;
            }
            kept.append(&mut pending_blank);
            kept.push(&line.text[Self::INDENT.len()..]);
            consumed = line.end;
        }

        if kept.is_empty() {
            return None;
        }
        Some((consumed, kept.join("\n")))
    }
}
