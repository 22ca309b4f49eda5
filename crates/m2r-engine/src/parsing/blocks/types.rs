use crate::parsing::inline::InlineToken;

/// Text that carries inline markup.
///
/// The block lexer fills `source`; `tokens` stays empty until the inline
/// pass runs over the finished block tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InlineText {
    pub source: String,
    pub tokens: Vec<InlineToken>,
}

impl InlineText {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            tokens: Vec::new(),
        }
    }
}

/// Column alignment taken from a table's delimiter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    None,
    Left,
    Center,
    Right,
}

impl Alignment {
    /// CSS `text-align` value, if the column asks for one.
    pub fn css(self) -> Option<&'static str> {
        match self {
            Alignment::None => None,
            Alignment::Left => Some("left"),
            Alignment::Center => Some("center"),
            Alignment::Right => Some("right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<InlineText>,
    pub aligns: Vec<Alignment>,
    /// Body rows, each already padded or truncated to the header width.
    pub rows: Vec<Vec<InlineText>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Separated from a sibling, or split internally, by blank lines.
    pub loose: bool,
    pub body: Vec<BlockToken>,
}

/// A block-level construct, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockToken {
    Paragraph(InlineText),
    /// A run of lines inside a list item or footnote body.
    Text(InlineText),
    Heading {
        level: u8,
        text: InlineText,
    },
    List {
        ordered: bool,
        items: Vec<ListItem>,
    },
    BlockQuote(Vec<BlockToken>),
    Code {
        lang: Option<String>,
        text: String,
    },
    Table(Table),
    Html(String),
    /// reST explicit markup, copied through untouched.
    Directive(String),
    FootnoteDefinition {
        key: String,
        body: Vec<BlockToken>,
    },
    LinkDefinition {
        key: String,
        url: String,
        title: Option<String>,
    },
    HorizontalRule,
    /// A line holding only `::`.
    LiteralMarker,
}

/// Normalises a reference key: case-folded, inner whitespace collapsed.
pub fn keyify(key: &str) -> String {
    key.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
