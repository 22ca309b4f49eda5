use crate::parsing::blocks::lines::{lines_with_offsets, skip_newlines};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// An opening or closing fence: its character and run length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    pub len: usize,
}

/// A fenced code block as found in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fenced {
    pub consumed: usize,
    pub lang: Option<String>,
    pub code: String,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Reads the fence run at the start of a line, ignoring leading spaces.
    ///
    /// Returns the signature and the text after the run.
    pub fn sig(line: &str) -> Option<(FenceSig, &str)> {
        let t = line.trim_start_matches(' ');
        let kind = if t.starts_with(Self::BACKTICKS) {
            FenceKind::Backticks
        } else if t.starts_with(Self::TILDES) {
            FenceKind::Tildes
        } else {
            return None;
        };
        let ch = match kind {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        };
        let len = t.len() - t.trim_start_matches(ch).len();
        Some((FenceSig { kind, len }, &t[len..]))
    }

    /// Whether `line` opens a fence, and with which language.
    ///
    /// Backtick fences may not carry backticks in their info string.
    pub fn open(line: &str) -> Option<(FenceSig, Option<String>)> {
        let (sig, info) = Self::sig(line)?;
        if sig.kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }
        let lang = info.split_whitespace().next().map(str::to_string);
        Some((sig, lang))
    }

    /// A closing fence uses the same character, at least as many times, and
    /// nothing else.
    pub fn closes(open: FenceSig, line: &str) -> bool {
        match Self::sig(line) {
            Some((sig, rest)) => {
                sig.kind == open.kind && sig.len >= open.len && rest.trim().is_empty()
            }
            None => false,
        }
    }

    /// Scans a fenced block at the start of `s`.
    ///
    /// A fence that is never closed runs to the end of input.
    pub fn scan(s: &str) -> Option<Fenced> {
        let mut lines = lines_with_offsets(s);
        let first = lines.next()?;
        let (sig, lang) = Self::open(first.text)?;

        let mut body = Vec::new();
        let mut consumed = s.len();
        for line in lines {
            if Self::closes(sig, line.text) {
                consumed = skip_newlines(s, line.end);
                break;
            }
            body.push(line.text);
        }

        Some(Fenced {
            consumed,
            lang,
            code: body.join("\n").trim_end().to_string(),
        })
    }
}
