//! Block rule sets.
//!
//! Each lexing context tries its rules in the listed order and the first
//! match wins, so the order is part of the grammar.

/// One block-level matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRule {
    Directive,
    LiteralMarker,
    Newline,
    HorizontalRule,
    IndentedCode,
    Fence,
    Heading,
    PipelessTable,
    SetextHeading,
    BlockQuote,
    List,
    Html,
    LinkDefinition,
    FootnoteDefinition,
    Table,
    Paragraph,
    Text,
}

/// Top level and block quote bodies.
pub const DOCUMENT_RULES: &[BlockRule] = &[
    BlockRule::Directive,
    BlockRule::LiteralMarker,
    BlockRule::Newline,
    BlockRule::HorizontalRule,
    BlockRule::IndentedCode,
    BlockRule::Fence,
    BlockRule::Heading,
    BlockRule::PipelessTable,
    BlockRule::SetextHeading,
    BlockRule::BlockQuote,
    BlockRule::List,
    BlockRule::Html,
    BlockRule::LinkDefinition,
    BlockRule::FootnoteDefinition,
    BlockRule::Table,
    BlockRule::Paragraph,
    BlockRule::Text,
];

/// List item bodies. Lines become `Text` rather than paragraphs.
pub const LIST_ITEM_RULES: &[BlockRule] = &[
    BlockRule::Directive,
    BlockRule::Newline,
    BlockRule::IndentedCode,
    BlockRule::Fence,
    BlockRule::SetextHeading,
    BlockRule::HorizontalRule,
    BlockRule::BlockQuote,
    BlockRule::List,
    BlockRule::Html,
    BlockRule::Text,
];

/// Footnote definition bodies.
pub const FOOTNOTE_RULES: &[BlockRule] = &[
    BlockRule::Newline,
    BlockRule::IndentedCode,
    BlockRule::Fence,
    BlockRule::Heading,
    BlockRule::PipelessTable,
    BlockRule::SetextHeading,
    BlockRule::HorizontalRule,
    BlockRule::BlockQuote,
    BlockRule::List,
    BlockRule::Html,
    BlockRule::Table,
    BlockRule::Paragraph,
    BlockRule::Text,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn position(rules: &[BlockRule], rule: BlockRule) -> usize {
        rules.iter().position(|r| *r == rule).unwrap()
    }

    #[test]
    fn rest_passthrough_comes_first() {
        assert_eq!(DOCUMENT_RULES[0], BlockRule::Directive);
        assert_eq!(DOCUMENT_RULES[1], BlockRule::LiteralMarker);
        assert_eq!(LIST_ITEM_RULES[0], BlockRule::Directive);
    }

    #[test]
    fn rules_beat_setext_and_lists() {
        for rules in [DOCUMENT_RULES, LIST_ITEM_RULES] {
            assert!(position(rules, BlockRule::IndentedCode) < position(rules, BlockRule::Fence));
            assert!(position(rules, BlockRule::HorizontalRule) < position(rules, BlockRule::List));
        }
        assert!(
            position(DOCUMENT_RULES, BlockRule::HorizontalRule)
                < position(DOCUMENT_RULES, BlockRule::SetextHeading)
        );
        assert!(
            position(DOCUMENT_RULES, BlockRule::PipelessTable)
                < position(DOCUMENT_RULES, BlockRule::SetextHeading)
        );
    }

    #[test]
    fn fallbacks_come_last() {
        assert_eq!(DOCUMENT_RULES.last(), Some(&BlockRule::Text));
        assert_eq!(
            DOCUMENT_RULES[DOCUMENT_RULES.len() - 2],
            BlockRule::Paragraph
        );
        assert_eq!(LIST_ITEM_RULES.last(), Some(&BlockRule::Text));
        assert!(!LIST_ITEM_RULES.contains(&BlockRule::Paragraph));
        assert_eq!(FOOTNOTE_RULES.last(), Some(&BlockRule::Text));
    }

    #[test]
    fn definitions_only_at_document_level() {
        assert!(DOCUMENT_RULES.contains(&BlockRule::FootnoteDefinition));
        assert!(!FOOTNOTE_RULES.contains(&BlockRule::FootnoteDefinition));
        assert!(!LIST_ITEM_RULES.contains(&BlockRule::LinkDefinition));
    }
}
