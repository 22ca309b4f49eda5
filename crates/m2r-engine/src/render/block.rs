use unicode_width::UnicodeWidthStr;

use crate::parsing::{BlockToken, InlineText};

use super::{Renderer, indent_block};

/// Underline character per heading level, 1 through 6.
pub const HEADING_MARKS: [char; 6] = ['=', '-', '^', '~', '"', '#'];

fn heading_mark(level: u8) -> char {
    let index = usize::from(level.clamp(1, 6)) - 1;
    HEADING_MARKS[index]
}

pub fn code_block(lang: Option<&str>, code: &str) -> String {
    if code.is_empty() {
        return String::new();
    }
    let directive = match lang {
        Some("math") => "\n.. math::\n\n".to_string(),
        Some(lang) => format!("\n.. code-block:: {lang}\n\n"),
        None => "\n.. code-block::\n\n".to_string(),
    };
    format!("{directive}{}\n", indent_block(code))
}

pub fn raw_html_block(html: &str) -> String {
    format!("\n\n.. raw:: html\n\n{}\n\n", indent_block(html))
}

impl Renderer<'_> {
    /// Renders a run of blocks. In a tight list item, `Text` runs are
    /// written bare instead of as paragraphs.
    pub fn blocks(&mut self, blocks: &[BlockToken], tight: bool) -> String {
        let mut out = String::new();
        for block in blocks {
            out.push_str(&self.block(block, tight));
        }
        out
    }

    fn block(&mut self, block: &BlockToken, tight: bool) -> String {
        match block {
            BlockToken::Paragraph(text) => self.paragraph(text),
            BlockToken::Text(text) if tight => self.inline(text),
            BlockToken::Text(text) => self.paragraph(text),
            BlockToken::Heading { level, text } => {
                let text = self.inline(text);
                let underline = heading_mark(*level)
                    .to_string()
                    .repeat(UnicodeWidthStr::width(text.as_str()));
                format!("\n{text}\n{underline}\n")
            }
            BlockToken::List { ordered, items } => self.list(*ordered, items),
            BlockToken::BlockQuote(body) => {
                let body = self.blocks(body, false);
                format!("\n..\n\n{}\n\n", indent_block(body.trim_matches('\n')))
            }
            BlockToken::Code { lang, text } => code_block(lang.as_deref(), text),
            BlockToken::Table(table) => self.table(table),
            BlockToken::Html(html) => raw_html_block(html),
            BlockToken::Directive(raw) => format!("\n{raw}"),
            BlockToken::HorizontalRule => "\n----\n".to_string(),
            BlockToken::LiteralMarker => "\n\n".to_string(),
            BlockToken::FootnoteDefinition { .. } | BlockToken::LinkDefinition { .. } => {
                String::new()
            }
        }
    }

    /// Wraps the text in newlines, unless it already starts or ends with an
    /// image directive that brings its own.
    fn paragraph(&mut self, text: &InlineText) -> String {
        let body = self.inline(text);
        let open = if body.starts_with('\n') { "" } else { "\n" };
        let close = if body.ends_with('\n') { "" } else { "\n" };
        format!("{open}{body}{close}")
    }
}
