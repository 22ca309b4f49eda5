use crate::error::ConvertError;

use super::grammar::{BlockRule, DOCUMENT_RULES, FOOTNOTE_RULES, LIST_ITEM_RULES};
use super::kinds::{
    BlockHtml, BlockQuote, CodeFence, Definition, Directive, Heading, IndentedCode, List,
    LiteralMarker, Paragraph, PipeTable, TableStyle, ThematicBreak,
};
use super::lines::first_line;
use super::types::{BlockToken, InlineText, ListItem, Table, keyify};

/// Quotes and lists nested deeper than this are kept as plain text.
pub const MAX_NESTING: usize = 32;

/// What a matched rule contributes to the token stream.
enum Emit {
    Token(BlockToken),
    /// One line for the current `Text` run.
    Text(String),
    /// A blank line: ends the current `Text` run.
    Break,
    /// A single newline between lines of one `Text` run.
    Nothing,
}

struct Step {
    consumed: usize,
    emit: Emit,
}

impl Step {
    fn token(consumed: usize, token: BlockToken) -> Self {
        Self {
            consumed,
            emit: Emit::Token(token),
        }
    }
}

/// Splits normalised text into block tokens.
#[derive(Debug, Default)]
pub struct BlockLexer {
    depth: usize,
}

impl BlockLexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lexes a whole document.
    pub fn lex(&mut self, text: &str) -> Result<Vec<BlockToken>, ConvertError> {
        self.lex_with(text, DOCUMENT_RULES)
    }

    /// Lexes `text` with an explicit rule set.
    ///
    /// Consecutive `Text` lines are joined unless a blank line separates
    /// them.
    pub fn lex_with(
        &mut self,
        text: &str,
        rules: &[BlockRule],
    ) -> Result<Vec<BlockToken>, ConvertError> {
        let mut out = Vec::new();
        let mut pos = 0;
        let mut text_run_open = false;

        'outer: while pos < text.len() {
            let rest = &text[pos..];
            for rule in rules {
                let Some(step) = self.apply(*rule, rest)? else {
                    continue;
                };
                if step.consumed == 0 {
                    continue;
                }
                pos += step.consumed;
                match step.emit {
                    Emit::Token(token) => {
                        out.push(token);
                        text_run_open = false;
                    }
                    Emit::Text(line) => {
                        match out.last_mut() {
                            Some(BlockToken::Text(run)) if text_run_open => {
                                run.source.push('\n');
                                run.source.push_str(&line);
                            }
                            _ => out.push(BlockToken::Text(InlineText::new(line))),
                        }
                        text_run_open = true;
                    }
                    Emit::Break => text_run_open = false,
                    Emit::Nothing => {}
                }
                continue 'outer;
            }
            let line = first_line(rest).map_or("", |l| l.text);
            return Err(ConvertError::Parse {
                offset: pos,
                reason: format!("no block rule matches {line:?}"),
            });
        }

        Ok(out)
    }

    fn apply(&mut self, rule: BlockRule, s: &str) -> Result<Option<Step>, ConvertError> {
        let step = match rule {
            BlockRule::Directive => Directive::scan(s)
                .map(|(n, text)| Step::token(n, BlockToken::Directive(text.to_string()))),
            BlockRule::LiteralMarker => {
                LiteralMarker::scan(s).map(|n| Step::token(n, BlockToken::LiteralMarker))
            }
            BlockRule::Newline => {
                let n = s.len() - s.trim_start_matches('\n').len();
                (n > 0).then_some(Step {
                    consumed: n,
                    emit: if n > 1 { Emit::Break } else { Emit::Nothing },
                })
            }
            BlockRule::HorizontalRule => {
                ThematicBreak::scan(s).map(|n| Step::token(n, BlockToken::HorizontalRule))
            }
            BlockRule::IndentedCode => IndentedCode::scan(s)
                .map(|(n, text)| Step::token(n, BlockToken::Code { lang: None, text })),
            BlockRule::Fence => CodeFence::scan(s).map(|f| {
                Step::token(
                    f.consumed,
                    BlockToken::Code {
                        lang: f.lang,
                        text: f.code,
                    },
                )
            }),
            BlockRule::Heading => Heading::scan_atx(s).map(|(n, level, text)| {
                Step::token(
                    n,
                    BlockToken::Heading {
                        level,
                        text: InlineText::new(text),
                    },
                )
            }),
            BlockRule::SetextHeading => Heading::scan_setext(s).map(|(n, level, text)| {
                Step::token(
                    n,
                    BlockToken::Heading {
                        level,
                        text: InlineText::new(text),
                    },
                )
            }),
            BlockRule::PipelessTable => Self::table(s, TableStyle::Pipeless),
            BlockRule::Table => Self::table(s, TableStyle::Piped),
            BlockRule::BlockQuote => match BlockQuote::scan(s) {
                Some((n, body)) => {
                    let body = self.nested(&body, DOCUMENT_RULES)?;
                    Some(Step::token(n, BlockToken::BlockQuote(body)))
                }
                None => None,
            },
            BlockRule::List => match List::scan(s) {
                Some(list) => {
                    let mut items = Vec::with_capacity(list.items.len());
                    for item in list.items {
                        items.push(ListItem {
                            loose: item.loose,
                            body: self.nested(&item.text, LIST_ITEM_RULES)?,
                        });
                    }
                    Some(Step::token(
                        list.consumed,
                        BlockToken::List {
                            ordered: list.ordered,
                            items,
                        },
                    ))
                }
                None => None,
            },
            BlockRule::Html => BlockHtml::scan(s)
                .map(|(n, html)| Step::token(n, BlockToken::Html(html.to_string()))),
            BlockRule::LinkDefinition => Definition::scan_link(s).map(|(n, def)| {
                Step::token(
                    n,
                    BlockToken::LinkDefinition {
                        key: keyify(def.key),
                        url: def.url.to_string(),
                        title: def.title.map(str::to_string),
                    },
                )
            }),
            BlockRule::FootnoteDefinition => match Definition::scan_footnote(s) {
                Some((n, def)) => {
                    let body = self.nested(&def.body, FOOTNOTE_RULES)?;
                    Some(Step::token(
                        n,
                        BlockToken::FootnoteDefinition {
                            key: keyify(def.key),
                            body,
                        },
                    ))
                }
                None => None,
            },
            BlockRule::Paragraph => Paragraph::scan(s)
                .map(|(n, text)| Step::token(n, BlockToken::Paragraph(InlineText::new(text)))),
            BlockRule::Text => first_line(s)
                .filter(|line| !line.text.is_empty())
                .map(|line| Step {
                    consumed: line.text.len(),
                    emit: Emit::Text(line.text.trim_start().to_string()),
                }),
        };
        Ok(step)
    }

    fn table(s: &str, style: TableStyle) -> Option<Step> {
        let (n, raw) = PipeTable::scan(s, style)?;
        let table = Table {
            header: raw.header.into_iter().map(InlineText::new).collect(),
            aligns: raw.aligns,
            rows: raw
                .rows
                .into_iter()
                .map(|row| row.into_iter().map(InlineText::new).collect())
                .collect(),
        };
        Some(Step::token(n, BlockToken::Table(table)))
    }

    /// Lexes the body of a container one level deeper.
    fn nested(&mut self, body: &str, rules: &[BlockRule]) -> Result<Vec<BlockToken>, ConvertError> {
        if self.depth >= MAX_NESTING {
            log::warn!("nesting deeper than {MAX_NESTING} levels kept as plain text");
            let text = body.trim();
            if text.is_empty() {
                return Ok(Vec::new());
            }
            return Ok(vec![BlockToken::Paragraph(InlineText::new(text))]);
        }
        self.depth += 1;
        let result = self.lex_with(body, rules);
        self.depth -= 1;
        result
    }
}
