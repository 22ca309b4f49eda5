use crate::parsing::blocks::lines::{leading_spaces, skip_newlines};
use crate::parsing::tag::{COMMENT_OPEN, closing_tag_ends, comment_ends, is_inline_tag, open_tag};

/// Raw HTML standing on its own, ended by a blank line or end of input.
pub struct BlockHtml;

impl BlockHtml {
    /// Whether `line` starts with a comment or a block-level tag.
    pub fn opens(line: &str) -> bool {
        let t = line.trim_start_matches(' ');
        t.starts_with(COMMENT_OPEN) || open_tag(t).is_some_and(|tag| !is_inline_tag(tag.name))
    }

    /// Returns the consumed length and the HTML itself.
    ///
    /// Candidate ends are tried shortest first: comment close, matching
    /// closing tag, then the bare opening tag. The first one followed by a
    /// blank line (or end of input) wins.
    pub fn scan(s: &str) -> Option<(usize, &str)> {
        let indent = leading_spaces(s);
        let t = &s[indent..];

        let mut candidates: Vec<usize> = Vec::new();
        if t.starts_with(COMMENT_OPEN) {
            candidates.extend(comment_ends(t));
        } else if let Some(tag) = open_tag(t)
            && !is_inline_tag(tag.name)
        {
            if !tag.self_closing {
                candidates.extend(closing_tag_ends(&t[tag.len..], tag.name).map(|end| tag.len + end));
            }
            candidates.push(tag.len);
        }

        candidates
            .into_iter()
            .find_map(|end| Self::block_end(t, end).map(|n| (indent + n, &t[..end])))
    }

    /// Where the block ends if `end` is followed only by spaces and then a
    /// blank line or the end of input.
    fn block_end(t: &str, end: usize) -> Option<usize> {
        let after = &t[end..];
        let spaces = leading_spaces(after);
        let tail = &after[spaces..];
        if tail.trim().is_empty() {
            return Some(t.len());
        }
        tail.starts_with("\n\n")
            .then(|| skip_newlines(t, end + spaces))
    }
}
