//! # Markdown Parsing
//!
//! Two passes over a normalised document. The block pass splits it into a
//! tree of [`BlockToken`]s; the inline pass fills in the inline tokens of
//! every text-bearing block once link and footnote definitions are known.

use std::collections::{HashMap, HashSet};

use crate::error::ConvertError;
use crate::options::Options;

pub mod blocks;
pub mod inline;
pub mod tag;

pub use blocks::{BlockLexer, BlockToken, InlineText};
pub use inline::{InlineLexer, InlineToken};

const TAB_STOP: usize = 4;
const SYMBOL_FOR_NEWLINE: char = '\u{2424}';

/// A parsed document, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<BlockToken>,
}

/// Where a reference-style link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub url: String,
    pub title: Option<String>,
}

/// Link and footnote keys defined anywhere in a document.
#[derive(Debug, Clone, Default)]
pub struct Definitions {
    pub links: HashMap<String, LinkTarget>,
    pub footnotes: HashSet<String>,
}

impl Definitions {
    pub fn collect(blocks: &[BlockToken]) -> Self {
        let mut defs = Self::default();
        defs.visit(blocks);
        defs
    }

    fn visit(&mut self, blocks: &[BlockToken]) {
        for block in blocks {
            match block {
                BlockToken::LinkDefinition { key, url, title } => {
                    self.links.insert(
                        key.clone(),
                        LinkTarget {
                            url: url.clone(),
                            title: title.clone(),
                        },
                    );
                }
                BlockToken::FootnoteDefinition { key, body } => {
                    if !self.footnotes.insert(key.clone()) {
                        log::warn!(
                            "footnote [^{key}] defined more than once; the last definition wins"
                        );
                    }
                    self.visit(body);
                }
                BlockToken::BlockQuote(body) => self.visit(body),
                BlockToken::List { items, .. } => {
                    for item in items {
                        self.visit(&item.body);
                    }
                }
                _ => {}
            }
        }
    }
}

/// Prepares raw input for the block lexer.
///
/// Line endings become `\n`, tabs expand to 4-column stops, `␤` becomes a
/// newline, lines of spaces become empty and trailing newlines are removed.
pub fn normalize(text: &str) -> String {
    let text = text
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace(SYMBOL_FOR_NEWLINE, "\n");

    let lines: Vec<String> = text
        .split('\n')
        .map(|line| {
            let line = expand_tabs(line);
            if line.bytes().all(|b| b == b' ') {
                String::new()
            } else {
                line
            }
        })
        .collect();

    lines.join("\n").trim_end_matches('\n').to_string()
}

fn expand_tabs(line: &str) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + TAB_STOP);
    let mut col = 0;
    for c in line.chars() {
        if c == '\t' {
            let pad = TAB_STOP - col % TAB_STOP;
            out.extend(std::iter::repeat_n(' ', pad));
            col += pad;
        } else {
            out.push(c);
            col += 1;
        }
    }
    out
}

/// Runs both passes over `text`.
pub fn parse_document(text: &str, options: &Options) -> Result<Document, ConvertError> {
    let source = normalize(text);
    let mut blocks = BlockLexer::new().lex(&source)?;
    let definitions = Definitions::collect(&blocks);
    log::debug!(
        "{} blocks, {} link definitions, {} footnotes",
        blocks.len(),
        definitions.links.len(),
        definitions.footnotes.len()
    );
    let lexer = InlineLexer::new(options, &definitions);
    lex_inlines(&mut blocks, &lexer);
    Ok(Document { blocks })
}

fn lex_inlines(blocks: &mut [BlockToken], lexer: &InlineLexer) {
    for block in blocks {
        match block {
            BlockToken::Paragraph(text)
            | BlockToken::Text(text)
            | BlockToken::Heading { text, .. } => text.tokens = lexer.lex(&text.source),
            BlockToken::List { items, .. } => {
                for item in items {
                    lex_inlines(&mut item.body, lexer);
                }
            }
            BlockToken::BlockQuote(body) | BlockToken::FootnoteDefinition { body, .. } => {
                lex_inlines(body, lexer)
            }
            BlockToken::Table(table) => {
                for cell in table.header.iter_mut().chain(table.rows.iter_mut().flatten()) {
                    cell.tokens = lexer.lex(&cell.source);
                }
            }
            _ => {}
        }
    }
}
