use crate::parsing::blocks::lines::{lines_with_offsets, skip_newlines};
use crate::parsing::blocks::types::Alignment;

/// Whether rows must start with a pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    /// `| a | b |`
    Piped,
    /// `a | b`
    Pipeless,
}

/// A table's cells as source text, before inline lexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub header: Vec<String>,
    pub aligns: Vec<Alignment>,
    pub rows: Vec<Vec<String>>,
}

pub struct PipeTable;

impl PipeTable {
    pub const PIPE: char = '|';
    const DELIMITER_CHARS: [char; 4] = ['-', ':', '|', ' '];

    fn is_header(line: &str, style: TableStyle) -> bool {
        let t = line.trim_start_matches(' ');
        match style {
            TableStyle::Piped => t.starts_with(Self::PIPE) && t.len() > 1,
            TableStyle::Pipeless => !t.is_empty() && Self::has_unescaped_pipe(t),
        }
    }

    fn is_delimiter_row(line: &str, style: TableStyle) -> bool {
        let t = line.trim_start_matches(' ');
        if !t.chars().all(|c| Self::DELIMITER_CHARS.contains(&c)) || !t.contains(['-', ':']) {
            return false;
        }
        match style {
            TableStyle::Piped => t.starts_with(Self::PIPE),
            TableStyle::Pipeless => t.starts_with(['-', ':']) && t.contains(Self::PIPE),
        }
    }

    fn is_body_row(line: &str, style: TableStyle) -> bool {
        match style {
            TableStyle::Piped => line.trim_start_matches(' ').starts_with(Self::PIPE),
            TableStyle::Pipeless => !line.trim().is_empty() && Self::has_unescaped_pipe(line),
        }
    }

    fn has_unescaped_pipe(s: &str) -> bool {
        Self::split_unescaped(s).len() > 1
    }

    /// Splits on `|` not preceded by a backslash.
    fn split_unescaped(s: &str) -> Vec<&str> {
        let mut parts = Vec::new();
        let mut start = 0;
        let mut escaped = false;
        for (i, c) in s.char_indices() {
            if c == Self::PIPE && !escaped {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            escaped = c == '\\' && !escaped;
        }
        parts.push(&s[start..]);
        parts
    }

    /// Cells of one row with outer pipes removed and cell text trimmed.
    pub fn split_row(line: &str) -> Vec<String> {
        let mut t = line.trim();
        if let Some(rest) = t.strip_prefix(Self::PIPE) {
            t = rest;
        }
        if t.ends_with(Self::PIPE) && !t.ends_with("\\|") {
            t = &t[..t.len() - 1];
        }
        Self::split_unescaped(t)
            .into_iter()
            .map(|cell| cell.trim().to_string())
            .collect()
    }

    pub fn alignment(cell: &str) -> Alignment {
        let c = cell.trim();
        match (c.starts_with(':'), c.ends_with(':') && c.len() > 1) {
            (true, true) => Alignment::Center,
            (false, true) => Alignment::Right,
            (true, false) => Alignment::Left,
            (false, false) => Alignment::None,
        }
    }

    /// Scans a header row, a delimiter row and any body rows.
    ///
    /// Body rows are padded with empty cells or truncated to the header width.
    pub fn scan(s: &str, style: TableStyle) -> Option<(usize, RawTable)> {
        let mut lines = lines_with_offsets(s);
        let header_line = lines.next()?;
        if !Self::is_header(header_line.text, style) {
            return None;
        }
        let delimiter = lines.next()?;
        if !Self::is_delimiter_row(delimiter.text, style) {
            return None;
        }

        let header = Self::split_row(header_line.text);
        let width = header.len();
        let mut aligns: Vec<_> = Self::split_row(delimiter.text)
            .iter()
            .map(|c| Self::alignment(c))
            .collect();
        aligns.resize(width, Alignment::None);

        let mut consumed = delimiter.end;
        let mut rows = Vec::new();
        for line in lines {
            if !Self::is_body_row(line.text, style) {
                break;
            }
            let mut row = Self::split_row(line.text);
            row.resize(width, String::new());
            rows.push(row);
            consumed = line.end;
        }

        Some((
            skip_newlines(s, consumed),
            RawTable {
                header,
                aligns,
                rows,
            },
        ))
    }
}
