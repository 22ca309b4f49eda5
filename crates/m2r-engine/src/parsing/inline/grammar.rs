use crate::options::Options;

/// One inline matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineRule {
    InlineMath,
    ImageLink,
    RestRole,
    RestLink,
    EolLiteralMarker,
    Escape,
    InlineHtml,
    Autolink,
    Url,
    FootnoteRef,
    Link,
    RefLink,
    NoLink,
    Strong,
    Emphasis,
    CodeSpan,
    LineBreak,
    Strikethrough,
}

/// Precedence at a single position; anything unmatched is text.
///
/// reST constructs come before the Markdown ones so that roles and
/// hyperlink references written in reST survive untouched.
pub const DEFAULT_RULES: &[InlineRule] = &[
    InlineRule::InlineMath,
    InlineRule::ImageLink,
    InlineRule::RestRole,
    InlineRule::RestLink,
    InlineRule::EolLiteralMarker,
    InlineRule::Escape,
    InlineRule::InlineHtml,
    InlineRule::Autolink,
    InlineRule::Url,
    InlineRule::FootnoteRef,
    InlineRule::Link,
    InlineRule::RefLink,
    InlineRule::NoLink,
    InlineRule::Strong,
    InlineRule::Emphasis,
    InlineRule::CodeSpan,
    InlineRule::LineBreak,
    InlineRule::Strikethrough,
];

/// The rule list for a conversion.
pub fn rules_for(options: &Options) -> &'static [InlineRule] {
    if options.disable_inline_math {
        &DEFAULT_RULES[1..]
    } else {
        DEFAULT_RULES
    }
}
