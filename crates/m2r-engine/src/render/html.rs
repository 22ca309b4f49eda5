//! Inline tokens written as HTML, for content that ends up inside raw HTML.

use crate::parsing::InlineToken;

/// Escapes a value for a double-quoted attribute.
pub fn attribute(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}

fn text(value: &str) -> String {
    html_escape::encode_text(value).into_owned()
}

pub fn inline_html(tokens: &[InlineToken]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            InlineToken::Text(s) | InlineToken::RestRole(s) | InlineToken::RestLink(s) => {
                out.push_str(&text(s))
            }
            InlineToken::Escape(c) => out.push_str(&text(&c.to_string())),
            InlineToken::Emphasis(body) => {
                out.push_str(&format!("<em>{}</em>", inline_html(body)))
            }
            InlineToken::Strong(body) => {
                out.push_str(&format!("<strong>{}</strong>", inline_html(body)))
            }
            InlineToken::Strikethrough(body) => {
                out.push_str(&format!("<del>{}</del>", inline_html(body)))
            }
            InlineToken::CodeSpan(code) => out.push_str(&format!("<code>{}</code>", text(code))),
            InlineToken::Link {
                target,
                title,
                text: body,
            } => {
                let title = title
                    .as_deref()
                    .map(|t| format!(" title=\"{}\"", attribute(t)))
                    .unwrap_or_default();
                out.push_str(&format!(
                    "<a href=\"{}\"{title}>{}</a>",
                    attribute(target),
                    inline_html(body)
                ));
            }
            InlineToken::Image { src, alt, .. } => out.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\">",
                attribute(src),
                attribute(alt)
            )),
            InlineToken::ImageLink { src, target, alt } => out.push_str(&format!(
                "<a href=\"{}\"><img src=\"{}\" alt=\"{}\"></a>",
                attribute(target),
                attribute(src),
                attribute(alt)
            )),
            InlineToken::Autolink { url, is_email } => {
                let href = if *is_email && !url.contains(':') {
                    format!("mailto:{url}")
                } else {
                    url.clone()
                };
                out.push_str(&format!("<a href=\"{}\">{}</a>", attribute(&href), text(url)));
            }
            InlineToken::LineBreak => out.push_str("<br>\n"),
            InlineToken::InlineHtml(html) => out.push_str(html),
            InlineToken::InlineMath(math) => out.push_str(&text(&format!("${math}$"))),
            InlineToken::FootnoteRef(key) => out.push_str(&text(&format!("[{key}]"))),
            InlineToken::EolLiteralMarker { keep_colon } => {
                if *keep_colon {
                    out.push(':');
                }
            }
        }
    }
    out
}
