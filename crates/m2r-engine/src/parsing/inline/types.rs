/// A span-level construct inside block text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineToken {
    Text(String),
    /// A Markdown backslash escape; holds the escaped character.
    Escape(char),
    Emphasis(Vec<InlineToken>),
    Strong(Vec<InlineToken>),
    CodeSpan(String),
    Strikethrough(Vec<InlineToken>),
    Link {
        target: String,
        title: Option<String>,
        text: Vec<InlineToken>,
    },
    Image {
        src: String,
        title: Option<String>,
        alt: String,
    },
    /// `[![alt](src)](target)`
    ImageLink {
        src: String,
        target: String,
        alt: String,
    },
    Autolink {
        url: String,
        is_email: bool,
    },
    LineBreak,
    InlineHtml(String),
    /// `:role:`text`` or `` `text`:role: ``, kept verbatim.
    RestRole(String),
    /// `` `text`_ `` or `` `text`__ ``, kept verbatim.
    RestLink(String),
    InlineMath(String),
    FootnoteRef(String),
    /// A paragraph-final `::`; `keep_colon` when it directly follows text.
    EolLiteralMarker {
        keep_colon: bool,
    },
}
