//! # Rendering
//!
//! Writes a parsed [`Document`] out as reStructuredText.
//!
//! Every block renders to a self-contained chunk that starts with a newline,
//! so chunks can be concatenated without tracking blank lines. Containers
//! (lists, quotes, footnotes) indent the rendered chunks of their children.
//!
//! ## Modules
//!
//! - [`block`]: one arm per block token
//! - [`inline`]: inline markup and the `\ ` separators reST needs around it
//! - [`list`]: list markers and item indentation
//! - [`table`]: `list-table` and raw HTML tables
//! - [`footnotes`]: the trailing footnote section
//! - [`html`]: inline tokens as HTML, for raw-HTML fallbacks

use std::collections::HashMap;

use crate::options::Options;
use crate::parsing::{BlockToken, Document};

pub mod block;
pub mod footnotes;
pub mod html;
pub mod inline;
pub mod list;
pub mod table;

/// One level of reST indentation.
pub const INDENT: &str = "   ";

/// Name of the role declared by [`crate::PROLOG`].
pub const RAW_HTML_ROLE: &str = "raw-html-m2r";

/// The reST text of a document, and whether it uses the raw HTML role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    pub body: String,
    pub needs_prolog: bool,
}

/// Mutable state for one conversion.
#[derive(Debug, Default)]
pub struct RendererState<'a> {
    pub list_depth: usize,
    /// Footnote bodies by key; a later definition replaces an earlier one.
    pub footnotes: HashMap<&'a str, &'a [BlockToken]>,
    /// Referenced footnote keys, in first-reference order.
    pub referenced: Vec<String>,
    pub raw_html_used: bool,
}

pub struct Renderer<'a> {
    options: &'a Options,
    document: &'a Document,
    state: RendererState<'a>,
}

impl<'a> Renderer<'a> {
    pub fn new(options: &'a Options, document: &'a Document) -> Self {
        let mut state = RendererState::default();
        collect_footnotes(&document.blocks, &mut state.footnotes);
        Self {
            options,
            document,
            state,
        }
    }

    pub fn render(mut self) -> RenderOutput {
        let document = self.document;
        let mut body = self.blocks(&document.blocks, false);
        body.push_str(&self.footnotes());
        RenderOutput {
            body,
            needs_prolog: self.state.raw_html_used,
        }
    }
}

fn collect_footnotes<'a>(blocks: &'a [BlockToken], into: &mut HashMap<&'a str, &'a [BlockToken]>) {
    for block in blocks {
        match block {
            BlockToken::FootnoteDefinition { key, body } => {
                into.insert(key.as_str(), body.as_slice());
                collect_footnotes(body, into);
            }
            BlockToken::BlockQuote(body) => collect_footnotes(body, into),
            BlockToken::List { items, .. } => {
                for item in items {
                    collect_footnotes(&item.body, into);
                }
            }
            _ => {}
        }
    }
}

/// Indents every non-empty line by one [`INDENT`].
pub fn indent_block(block: &str) -> String {
    block
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{INDENT}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_document;
    use pretty_assertions::assert_eq;

    fn render(src: &str) -> RenderOutput {
        let options = Options::default();
        let doc = parse_document(src, &options).unwrap();
        Renderer::new(&options, &doc).render()
    }

    #[test]
    fn indent_skips_empty_lines() {
        assert_eq!(indent_block("a\n\n  b"), "   a\n\n     b");
    }

    #[test]
    fn plain_output_needs_no_prolog() {
        let out = render("# Title\n\ntext");
        assert!(!out.needs_prolog);
        assert_eq!(out.body, "\nTitle\n=====\n\ntext\n");
    }

    #[test]
    fn inline_html_needs_prolog() {
        assert!(render("a <b>c</b>").needs_prolog);
    }

    #[test]
    fn block_html_does_not_need_prolog() {
        assert!(!render("<div>x</div>").needs_prolog);
    }

    #[test]
    fn footnotes_found_inside_containers() {
        let options = Options::default();
        let doc = parse_document("> [^a]: one\n\n[^b]: two\n\n[^b]: three", &options).unwrap();
        let renderer = Renderer::new(&options, &doc);
        assert!(renderer.state.footnotes.contains_key("a"));
        let BlockToken::Paragraph(text) = &renderer.state.footnotes["b"][0] else {
            panic!("expected Paragraph");
        };
        assert_eq!(text.source, "three");
    }
}
