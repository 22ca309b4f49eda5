use relative_path::RelativePath;
use url::{ParseError, Url};

use crate::error::UnsupportedConstruct;
use crate::parsing::{InlineText, InlineToken};

use super::html::{attribute, inline_html};
use super::{RAW_HTML_ROLE, Renderer};

/// Escaped characters that keep their backslash in reST.
const REST_SIGNIFICANT: &[char] = &['\\', '`', '*', '_', '|'];

/// Escaped space: separates inline markup from an adjacent word.
const SEPARATOR: &str = "\\ ";

/// Characters that may directly follow the end of inline markup.
const AFTER_MARKUP: &[char] = &[
    '-', '.', ',', ':', ';', '!', '?', '\\', '/', '\'', '"', ')', ']', '}', '>',
];

/// A piece of rendered inline output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Text that can touch anything.
    Plain(String),
    /// Inline markup whose start and end must not touch a word.
    Markup(String),
    /// A directive that needs a blank line on each side, such as an image.
    Block(String),
}

/// Concatenates fragments, adding `\ ` wherever markup meets a word.
///
/// Spaces next to a [`Fragment::Block`] are dropped so the text around it
/// does not turn into an indented block.
pub fn join(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    let mut after_markup = false;
    let mut after_block = false;
    for fragment in fragments {
        match fragment {
            Fragment::Markup(markup) => {
                let touches = out.chars().next_back().is_some_and(|c| !c.is_whitespace());
                if touches {
                    out.push_str(SEPARATOR);
                }
                out.push_str(markup);
                after_markup = true;
                after_block = false;
            }
            Fragment::Block(block) => {
                out.truncate(out.trim_end_matches(' ').len());
                out.push_str(block);
                after_markup = false;
                after_block = true;
            }
            Fragment::Plain(text) => {
                let text = if after_block {
                    text.trim_start_matches(' ')
                } else {
                    text.as_str()
                };
                if after_markup
                    && text
                        .chars()
                        .next()
                        .is_some_and(|c| !c.is_whitespace() && !AFTER_MARKUP.contains(&c))
                {
                    out.push_str(SEPARATOR);
                }
                if !text.is_empty() {
                    after_markup = false;
                    after_block = false;
                }
                out.push_str(text);
            }
        }
    }
    out
}

/// The characters of link text, without markup.
fn plain_text(tokens: &[InlineToken]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            InlineToken::Text(s)
            | InlineToken::CodeSpan(s)
            | InlineToken::InlineMath(s)
            | InlineToken::InlineHtml(s)
            | InlineToken::RestRole(s)
            | InlineToken::RestLink(s) => out.push_str(s),
            InlineToken::Escape(c) => out.push(*c),
            InlineToken::Emphasis(body)
            | InlineToken::Strong(body)
            | InlineToken::Strikethrough(body)
            | InlineToken::Link { text: body, .. } => out.push_str(&plain_text(body)),
            InlineToken::Image { alt, .. } | InlineToken::ImageLink { alt, .. } => {
                out.push_str(alt)
            }
            InlineToken::Autolink { url, .. } => out.push_str(url),
            InlineToken::FootnoteRef(key) => out.push_str(key),
            InlineToken::LineBreak => out.push(' '),
            InlineToken::EolLiteralMarker { keep_colon } => {
                if *keep_colon {
                    out.push(':');
                }
            }
        }
    }
    out
}

/// Link text inside `` `text <target>`_ ``, with the characters that would
/// end it early escaped.
fn link_text(tokens: &[InlineToken]) -> String {
    let mut out = String::new();
    for c in plain_text(tokens).chars() {
        if matches!(c, '`' | '<') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// `:doc:` target for a relative path: the extension and any anchor dropped.
fn doc_target(target: &str) -> String {
    let path = target.split('#').next().unwrap_or(target);
    let path = RelativePath::new(path);
    let stem = path.file_stem().unwrap_or(path.as_str());
    match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent.join(stem).into_string(),
        _ => stem.to_string(),
    }
}

fn is_relative(target: &str) -> bool {
    !target.starts_with("//")
        && matches!(Url::parse(target), Err(ParseError::RelativeUrlWithoutBase))
}

pub fn image(src: &str, target: &str, alt: &str) -> String {
    let mut out = format!("\n\n.. image:: {src}\n   :target: {target}\n");
    if !alt.is_empty() {
        out.push_str(&format!("   :alt: {alt}\n"));
    }
    out.push('\n');
    out
}

impl Renderer<'_> {
    /// Renders the inline tokens of a text-bearing block.
    pub fn inline(&mut self, text: &InlineText) -> String {
        self.inline_tokens(&text.tokens)
    }

    fn inline_tokens(&mut self, tokens: &[InlineToken]) -> String {
        let fragments = self.fragments(tokens);
        join(&fragments)
    }

    fn fragments(&mut self, tokens: &[InlineToken]) -> Vec<Fragment> {
        let mut out = Vec::with_capacity(tokens.len());
        for token in tokens {
            match token {
                InlineToken::Text(s) => out.push(Fragment::Plain(s.clone())),
                InlineToken::Escape(c) if REST_SIGNIFICANT.contains(c) => {
                    out.push(Fragment::Plain(format!("\\{c}")))
                }
                InlineToken::Escape(c) => out.push(Fragment::Plain(c.to_string())),
                InlineToken::Emphasis(body) => {
                    let body = self.inline_tokens(body);
                    out.push(Fragment::Markup(format!("*{body}*")));
                }
                InlineToken::Strong(body) => {
                    let body = self.inline_tokens(body);
                    out.push(Fragment::Markup(format!("**{body}**")));
                }
                InlineToken::CodeSpan(code) => out.push(self.code_span(code)),
                InlineToken::Strikethrough(body) => {
                    let html = format!("<del>{}</del>", inline_html(body));
                    out.push(self.raw_html(&html));
                }
                InlineToken::Link {
                    target,
                    title,
                    text,
                } => out.push(self.link(target, title.as_deref(), text)),
                InlineToken::Image { src, alt, .. } => {
                    out.push(Fragment::Block(image(src, src, alt)))
                }
                InlineToken::ImageLink { src, target, alt } => {
                    out.push(Fragment::Block(image(src, target, alt)))
                }
                InlineToken::Autolink { url, .. } => out.push(Fragment::Plain(url.clone())),
                InlineToken::LineBreak => {
                    out.push(self.raw_html("<br>"));
                    out.push(Fragment::Plain("\n".to_string()));
                }
                InlineToken::InlineHtml(html) => out.push(self.raw_html(html)),
                InlineToken::RestRole(s) | InlineToken::RestLink(s) => {
                    out.push(Fragment::Plain(s.clone()))
                }
                InlineToken::InlineMath(math) => {
                    out.push(Fragment::Markup(format!(":math:`{math}`")))
                }
                InlineToken::FootnoteRef(key) => {
                    if !self.state.referenced.contains(key) {
                        self.state.referenced.push(key.clone());
                    }
                    out.push(Fragment::Markup(format!("[#fn-{key}]_")));
                }
                InlineToken::EolLiteralMarker { keep_colon } => {
                    let marker = if *keep_colon { ":" } else { "" };
                    out.push(Fragment::Plain(marker.to_string()));
                }
            }
        }
        out
    }

    fn raw_html(&mut self, html: &str) -> Fragment {
        self.state.raw_html_used = true;
        Fragment::Markup(format!(":{RAW_HTML_ROLE}:`{html}`"))
    }

    fn code_span(&mut self, code: &str) -> Fragment {
        if code.contains("``") || code.starts_with('`') || code.ends_with('`') {
            log::debug!("{}; using raw html", UnsupportedConstruct::NestedBackticks);
            let escaped = html_escape::encode_text(code).replace('`', "&#96;");
            let html = format!(
                "<code class=\"docutils literal\"><span class=\"pre\">{escaped}</span></code>"
            );
            return self.raw_html(&html);
        }
        Fragment::Markup(format!("``{code}``"))
    }

    fn link(&mut self, target: &str, title: Option<&str>, text: &[InlineToken]) -> Fragment {
        if let Some(title) = title {
            log::debug!(
                "{}; using raw html",
                UnsupportedConstruct::LinkTitle(title.to_string())
            );
            let html = format!(
                "<a href=\"{}\" title=\"{}\">{}</a>",
                attribute(target),
                attribute(title),
                inline_html(text)
            );
            return self.raw_html(&html);
        }

        let text = link_text(text);
        if self.options.parse_relative_links && is_relative(target) {
            if let Some(anchor) = target.strip_prefix('#') {
                return Fragment::Markup(format!(":ref:`{text} <{anchor}>`"));
            }
            return Fragment::Markup(format!(":doc:`{text} <{}>`", doc_target(target)));
        }

        let suffix = if self.options.anonymous_references {
            "__"
        } else {
            "_"
        };
        Fragment::Markup(format!("`{text} <{target}>`{suffix}"))
    }
}
