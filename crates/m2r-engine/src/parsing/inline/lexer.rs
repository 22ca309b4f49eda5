use crate::options::Options;
use crate::parsing::Definitions;
use crate::parsing::blocks::keyify;

use super::cursor::Cursor;
use super::grammar::{InlineRule, rules_for};
use super::kinds::{
    Autolink, CodeSpan, Emphasis, EolLiteralMarker, Escape, FootnoteRef, ImageLink, InlineHtml,
    InlineMath, LineBreak, Link, NoLink, RefLink, RefParts, RestLink, RestRole, Strikethrough,
    Strong, Url,
};
use super::types::InlineToken;

/// Splits block text into inline tokens.
///
/// At each position the rules are tried in order and the first match wins;
/// characters no rule claims accumulate into `Text`.
pub struct InlineLexer<'a> {
    rules: &'static [InlineRule],
    allow_underscore: bool,
    definitions: &'a Definitions,
}

impl<'a> InlineLexer<'a> {
    pub fn new(options: &Options, definitions: &'a Definitions) -> Self {
        Self {
            rules: rules_for(options),
            allow_underscore: !options.no_underscore_emphasis,
            definitions,
        }
    }

    pub fn lex(&self, text: &str) -> Vec<InlineToken> {
        self.lex_in(text, false)
    }

    fn lex_in(&self, text: &str, in_link: bool) -> Vec<InlineToken> {
        let mut out = Vec::new();
        let mut cur = Cursor::new(text);
        let mut text_start = 0;

        fn flush_text(out: &mut Vec<InlineToken>, s: &str) {
            if s.is_empty() {
                return;
            }
            match out.last_mut() {
                Some(InlineToken::Text(prev)) => prev.push_str(s),
                _ => out.push(InlineToken::Text(s.to_string())),
            }
        }

        while !cur.eof() {
            let start = cur.pos();
            let Some(token) = self.try_rules(&mut cur, in_link) else {
                cur.bump();
                continue;
            };
            flush_text(&mut out, &text[text_start..start]);
            match token {
                InlineToken::Text(t) => flush_text(&mut out, &t),
                token => out.push(token),
            }
            text_start = cur.pos();
        }
        flush_text(&mut out, &text[text_start..]);
        out
    }

    fn try_rules(&self, cur: &mut Cursor, in_link: bool) -> Option<InlineToken> {
        for rule in self.rules {
            if let Some((len, token)) = self.try_rule(*rule, cur, in_link) {
                cur.bump_n(len);
                return Some(token);
            }
        }
        None
    }

    fn try_rule(
        &self,
        rule: InlineRule,
        cur: &Cursor,
        in_link: bool,
    ) -> Option<(usize, InlineToken)> {
        let s = cur.rest();
        match rule {
            InlineRule::InlineMath => {
                InlineMath::scan(s).map(|(n, math)| (n, InlineToken::InlineMath(math.to_string())))
            }
            InlineRule::ImageLink => ImageLink::scan(s).map(|p| {
                (
                    p.len,
                    InlineToken::ImageLink {
                        src: p.src.to_string(),
                        target: p.target.to_string(),
                        alt: p.alt.to_string(),
                    },
                )
            }),
            InlineRule::RestRole => {
                RestRole::scan(s).map(|n| (n, InlineToken::RestRole(s[..n].to_string())))
            }
            InlineRule::RestLink => {
                RestLink::scan(s).map(|n| (n, InlineToken::RestLink(s[..n].to_string())))
            }
            InlineRule::EolLiteralMarker => EolLiteralMarker::scan(s)
                .map(|(n, keep_colon)| (n, InlineToken::EolLiteralMarker { keep_colon })),
            InlineRule::Escape => Escape::scan(s).map(|(n, c)| (n, InlineToken::Escape(c))),
            InlineRule::InlineHtml => {
                InlineHtml::scan(s).map(|n| (n, InlineToken::InlineHtml(s[..n].to_string())))
            }
            InlineRule::Autolink => Autolink::scan(s).map(|(n, url, is_email)| {
                (
                    n,
                    InlineToken::Autolink {
                        url: url.to_string(),
                        is_email,
                    },
                )
            }),
            InlineRule::Url => Url::scan(s).map(|n| {
                let url = s[..n].to_string();
                if in_link {
                    (n, InlineToken::Text(url))
                } else {
                    (
                        n,
                        InlineToken::Autolink {
                            url,
                            is_email: false,
                        },
                    )
                }
            }),
            InlineRule::FootnoteRef => {
                let (n, key) = FootnoteRef::scan(s)?;
                let key = keyify(key);
                self.definitions
                    .footnotes
                    .contains(&key)
                    .then_some((n, InlineToken::FootnoteRef(key)))
            }
            InlineRule::Link => {
                let p = Link::scan(s)?;
                let token = self.link(p.is_image, p.text, p.target, p.title);
                Some((p.len, token))
            }
            InlineRule::RefLink => self.reference(RefLink::scan(s)?),
            InlineRule::NoLink => self.reference(NoLink::scan(s)?),
            InlineRule::Strong => Strong::scan(s, cur.prev_char(), self.allow_underscore)
                .map(|(n, body)| (n, InlineToken::Strong(self.lex_in(body, in_link)))),
            InlineRule::Emphasis => Emphasis::scan(s, cur.prev_char(), self.allow_underscore)
                .map(|(n, body)| (n, InlineToken::Emphasis(self.lex_in(body, in_link)))),
            InlineRule::CodeSpan => {
                CodeSpan::scan(s).map(|(n, code)| (n, InlineToken::CodeSpan(code.to_string())))
            }
            InlineRule::LineBreak => LineBreak::scan(s).map(|n| (n, InlineToken::LineBreak)),
            InlineRule::Strikethrough => Strikethrough::scan(s)
                .map(|(n, body)| (n, InlineToken::Strikethrough(self.lex_in(body, in_link)))),
        }
    }

    fn link(&self, is_image: bool, text: &str, target: &str, title: Option<&str>) -> InlineToken {
        let title = title.map(str::to_string);
        if is_image {
            return InlineToken::Image {
                src: target.to_string(),
                title,
                alt: text.to_string(),
            };
        }
        InlineToken::Link {
            target: target.to_string(),
            title,
            text: self.lex_in(text, true),
        }
    }

    /// Resolves `[text][key]` or `[key]`; unknown keys stay text.
    fn reference(&self, parts: RefParts) -> Option<(usize, InlineToken)> {
        let def = self.definitions.links.get(&keyify(parts.key))?;
        let token = self.link(parts.is_image, parts.text, &def.url, def.title.as_deref());
        Some((parts.len, token))
    }
}
