//! HTML rendering for study documents.

mod html;
mod options;

pub use html::HtmlRenderer;
pub use options::{
    ConvertOptions, DocumentTemplate, Layout, DEFAULT_COVER_IMAGE, DEFAULT_SUBTITLE,
    DEFAULT_TITLE,
};

use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// Renders source text to a complete HTML document.
pub fn render_html(text: &str, options: &ConvertOptions) -> String {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(text)
}

/// Renders source text to HTML and writes it to a file in one call.
pub fn render_to_file(text: &str, path: impl AsRef<Path>, options: &ConvertOptions) -> Result<()> {
    let content = render_html(text, options);
    std::fs::write(path, content)?;
    Ok(())
}

/// Renders source text to HTML and writes it to a writer.
pub fn render_to_writer<W: Write>(
    text: &str,
    writer: &mut W,
    options: &ConvertOptions,
) -> Result<()> {
    let content = render_html(text, options);
    writer.write_all(content.as_bytes())?;
    Ok(())
}
