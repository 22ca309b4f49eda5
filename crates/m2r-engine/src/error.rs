use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Parse error at byte {offset}: {reason}")]
    Parse { offset: usize, reason: String },
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Markdown that has no direct reStructuredText spelling.
///
/// The renderer recovers from these locally by emitting raw HTML, so they
/// never reach callers of [`crate::convert`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UnsupportedConstruct {
    #[error("link title {0:?} cannot be expressed as a reST hyperlink")]
    LinkTitle(String),
    #[error("code span containing a double backtick cannot be an inline literal")]
    NestedBackticks,
}
