use serde::{Deserialize, Serialize};

/// How pipe tables are written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableMode {
    /// `.. list-table::` directive.
    #[default]
    ListTable,
    /// HTML `<table>` inside `.. raw:: html`.
    RawHtml,
}

/// Conversion switches. Every flag defaults to off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Options {
    /// Only `*` opens emphasis; `_x_` stays literal.
    pub no_underscore_emphasis: bool,
    /// Emit `` `text <url>`__ `` instead of named references.
    pub anonymous_references: bool,
    /// Leave `` `$x$` `` alone instead of turning it into `:math:`.
    pub disable_inline_math: bool,
    /// Rewrite links to local `.md` files and `#anchors` as `:doc:`/`:ref:`.
    pub parse_relative_links: bool,
    pub table_mode: TableMode,
}
