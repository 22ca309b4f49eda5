/// Backtick code spans.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: u8 = b'`';

    /// Matches a run of n backticks, content, and a closing run of exactly n.
    ///
    /// Returns the consumed length and the content with surrounding
    /// whitespace trimmed. Whitespace-only content is not a code span.
    pub fn scan(s: &str) -> Option<(usize, &str)> {
        let bytes = s.as_bytes();
        let ticks = bytes.iter().take_while(|b| **b == Self::TICK).count();
        if ticks == 0 {
            return None;
        }
        let body = &s[ticks..];
        let body_bytes = body.as_bytes();

        let mut p = 0;
        while p < body_bytes.len() {
            if body_bytes[p] != Self::TICK {
                p += 1;
                continue;
            }
            let run = body_bytes[p..].iter().take_while(|b| **b == Self::TICK).count();
            if run == ticks && p > 0 {
                let content = body[..p].trim();
                if content.is_empty() {
                    return None;
                }
                return Some((ticks + p + run, content));
            }
            p += run;
        }
        None
    }
}
