use crate::parsing::blocks::lines::{LineRef, leading_spaces, lines_with_offsets};

use super::{Definition, ThematicBreak};

/// The bullet that opens a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    pub indent: usize,
    pub ordered: bool,
    /// Indent, bullet and the spaces after it.
    pub width: usize,
}

/// An item's source with its bullet removed and continuation lines outdented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawItem {
    pub text: String,
    pub loose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawList {
    pub consumed: usize,
    pub ordered: bool,
    pub items: Vec<RawItem>,
}

pub struct List;

impl List {
    pub const BULLETS: [char; 3] = ['*', '+', '-'];
    pub const ORDERED_SUFFIX: char = '.';

    /// Reads a bullet (`*`, `+`, `-` or `N.`) followed by at least one space.
    pub fn marker(line: &str) -> Option<ListMarker> {
        let indent = leading_spaces(line);
        let t = &line[indent..];
        let (ordered, bullet_len) = if t.starts_with(Self::BULLETS) {
            (false, 1)
        } else {
            let digits = t.len() - t.trim_start_matches(|c: char| c.is_ascii_digit()).len();
            if digits == 0 || !t[digits..].starts_with(Self::ORDERED_SUFFIX) {
                return None;
            }
            (true, digits + 1)
        };
        let after = &t[bullet_len..];
        let spaces = leading_spaces(after);
        if spaces == 0 || spaces == after.len() {
            return None;
        }
        Some(ListMarker {
            indent,
            ordered,
            width: indent + bullet_len + spaces,
        })
    }

    fn marker_at(line: &str, indent: usize) -> Option<ListMarker> {
        Self::marker(line).filter(|m| m.indent == indent)
    }

    /// Lines that end a list even without a blank line before them.
    fn interrupts(line: &str, first: ListMarker) -> bool {
        let unindented = if leading_spaces(line) >= first.indent {
            &line[first.indent..]
        } else {
            line
        };
        ThematicBreak::is_rule_body(line)
            || ThematicBreak::is_rule_body(unindented)
            || Definition::is_link_definition(line)
            || Definition::is_footnote_definition(line)
            || Self::marker_at(line, first.indent).is_some_and(|m| m.ordered != first.ordered)
    }

    /// Collects the list's lines after `head`, stopping at the first line
    /// that no longer belongs to it. Returns them with the list's end offset.
    fn block_lines<'a>(
        head: LineRef<'a>,
        rest: impl Iterator<Item = LineRef<'a>>,
        first: ListMarker,
        len: usize,
    ) -> (Vec<LineRef<'a>>, usize) {
        let mut lines = vec![head];
        let mut after_blank = false;
        for line in rest {
            if line.text.is_empty() {
                after_blank = true;
                lines.push(line);
                continue;
            }
            let leaves_list = after_blank
                && !line.text.starts_with(' ')
                && Self::marker_at(line.text, first.indent).is_none();
            if Self::interrupts(line.text, first) || leaves_list {
                return (lines, line.start);
            }
            after_blank = false;
            lines.push(line);
        }
        (lines, len)
    }

    /// Scans a whole list (all sibling items) at the start of `s`.
    pub fn scan(s: &str) -> Option<RawList> {
        let mut rest = lines_with_offsets(s);
        let head = rest.next()?;
        let first = Self::marker(head.text)?;
        let (lines, consumed) = Self::block_lines(head, rest, first, s.len());

        let mut groups = vec![(first, vec![head.text])];
        for line in &lines[1..] {
            match Self::marker_at(line.text, first.indent) {
                Some(marker) => groups.push((marker, vec![line.text])),
                None => {
                    if let Some((_, group)) = groups.last_mut() {
                        group.push(line.text);
                    }
                }
            }
        }

        let last = groups.len().saturating_sub(1);
        let mut next_loose = false;
        let mut items = Vec::with_capacity(groups.len());
        for (idx, (marker, group)) in groups.into_iter().enumerate() {
            let text = Self::item_text(marker, &group.join("\n"));

            let mut loose = next_loose || Self::has_inner_blank(&text);
            if idx != last {
                next_loose = text.ends_with('\n');
                loose = loose || next_loose;
            }
            items.push(RawItem { text, loose });
        }

        Some(RawList {
            consumed,
            ordered: first.ordered,
            items,
        })
    }

    /// Removes the bullet and outdents continuation lines by its width.
    fn item_text(marker: ListMarker, raw: &str) -> String {
        let text = &raw[marker.width..];
        if !text.contains("\n ") {
            return text.to_string();
        }
        text.split('\n')
            .map(|line| &line[leading_spaces(line).min(marker.width)..])
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// A blank line followed by more content.
    fn has_inner_blank(text: &str) -> bool {
        text.match_indices("\n\n")
            .any(|(i, _)| !text[i + 2..].trim().is_empty())
    }
}
