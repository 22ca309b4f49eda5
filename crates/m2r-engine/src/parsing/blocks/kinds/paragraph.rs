use crate::parsing::blocks::lines::{LineRef, lines_with_offsets, skip_newlines};

use super::{BlockHtml, BlockQuote, CodeFence, Definition, Heading, List, ThematicBreak};

/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default leaf block when no
/// other block opener matches. They run until a blank line or a line that
/// opens another block.
pub struct Paragraph;

impl Paragraph {
    /// Whether `line` starts a block that ends a paragraph. `next` is the
    /// line after it, for the setext underline check.
    fn interrupts(line: &str, next: Option<&LineRef<'_>>) -> bool {
        CodeFence::open(line).is_some()
            || List::marker(line).is_some()
            || ThematicBreak::is_rule(line)
            || Heading::atx(line).is_some()
            || next.is_some_and(|next| Heading::underline(next.text).is_some())
            || BlockQuote::is_quoted(line)
            || Definition::is_link_definition(line)
            || Definition::is_footnote_definition(line)
            || BlockHtml::opens(line)
    }

    /// Returns the consumed length and the paragraph text, one source line
    /// per text line with leading spaces removed.
    ///
    /// Reads no further than one line past the paragraph.
    pub fn scan(s: &str) -> Option<(usize, String)> {
        let mut lines = lines_with_offsets(s).peekable();
        let first = lines.next()?;
        if first.is_blank() {
            return None;
        }

        let mut text = first.text.trim_start().to_string();
        let mut end = first.end;
        while let Some(line) = lines.next_if(|line| !line.is_blank()) {
            if Self::interrupts(line.text, lines.peek()) {
                break;
            }
            text.push('\n');
            text.push_str(line.text.trim_start());
            end = line.end;
        }
        Some((skip_newlines(s, end), text))
    }
}
