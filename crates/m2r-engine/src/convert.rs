use std::path::Path;

use crate::error::ConvertError;
use crate::io;
use crate::options::Options;
use crate::parsing::parse_document;
use crate::render::Renderer;

/// Declares the role used for inline raw HTML. Prepended to any output that
/// uses it.
pub const PROLOG: &str = ".. role:: raw-html-m2r(raw)\n   :format: html\n\n";

/// Converts Markdown text to reStructuredText.
pub fn convert(source: &str, options: &Options) -> Result<String, ConvertError> {
    let document = parse_document(source, options)?;
    let output = Renderer::new(options, &document).render();
    if output.needs_prolog {
        return Ok(format!("{PROLOG}{}", output.body));
    }
    Ok(output.body)
}

/// Reads a UTF-8 Markdown file and converts it.
pub fn convert_file(path: &Path, options: &Options) -> Result<String, ConvertError> {
    log::info!("converting {}", path.display());
    let source = io::read_file(path)?;
    convert(&source, options)
}
