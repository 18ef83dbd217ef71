//! # rubify
//!
//! Converts plain-text Japanese study notes into styled HTML. Furigana written
//! as `漢字(かんじ)` becomes `<ruby>` markup and Korean glosses are highlighted.
//!
//! ## Input Conventions
//!
//! - **Furigana**: a kanji run followed by a parenthesized kana run, half- or
//!   full-width brackets, possibly pushed onto the next line
//! - **Korean glosses**: Hangul after `단어：…`, after `—`, after `👉`, or
//!   (sectioned layout) a line made only of Hangul
//! - **Sections**: header lines such as `줄거리`, `🎧 しゃどーいんぐ表現`,
//!   `💬フリートーク` and `📖 単語`
//!
//! ## Quick Start
//!
//! ```no_run
//! use rubify::{convert_file_with_options, ConvertOptions, Layout};
//!
//! fn main() -> rubify::Result<()> {
//!     let options = ConvertOptions::default().with_layout(Layout::Sectioned);
//!     convert_file_with_options("b1.txt", "b1_furigana.html", &options)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `async`: Async file API with Tokio

pub mod annotate;
pub mod detect;
pub mod error;
pub mod normalize;
pub mod render;
pub mod section;

#[cfg(feature = "async")]
pub mod async_api;

// Re-exports
pub use annotate::{annotate, AnnotateOptions, KoreanRule};
pub use detect::detect_layout;
pub use error::{Error, Result};
pub use render::{ConvertOptions, DocumentTemplate, Layout};
pub use section::{sectionize, Section, SectionKind};

use log::info;
use std::path::{Path, PathBuf};

/// Default input path used by the command-line tool.
pub const DEFAULT_INPUT: &str = "b1.txt";

/// Default output path used by the command-line tool.
pub const DEFAULT_OUTPUT: &str = "b1_furigana.html";

/// Reads a UTF-8 source document.
pub fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let data = std::fs::read(path)?;
    Ok(String::from_utf8(data)?)
}

/// Converts source text to an HTML document with default options.
///
/// # Example
///
/// ```
/// let html = rubify::convert_str("思（おも）いますか？");
/// assert!(html.contains("<ruby>思<rt>おも</rt></ruby>"));
/// ```
pub fn convert_str(text: &str) -> String {
    render::render_html(text, &ConvertOptions::default())
}

/// Converts a source file to an HTML file with default options.
///
/// Nothing is written if the input cannot be read.
pub fn convert_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    convert_file_with_options(input, output, &ConvertOptions::default())
}

/// Converts a source file to an HTML file with custom options.
///
/// # Example
///
/// ```no_run
/// use rubify::{convert_file_with_options, ConvertOptions, DocumentTemplate};
///
/// let template = DocumentTemplate::default()
///     .with_title("俺物語２話")
///     .with_subtitle("내이야기 2 화");
/// let options = ConvertOptions::default().with_template(template);
///
/// convert_file_with_options("b2.txt", "b2_furigana.html", &options)?;
/// # Ok::<(), rubify::Error>(())
/// ```
pub fn convert_file_with_options(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    let text = read_source(input)?;
    render::render_to_file(&text, output, options)?;

    info!("converted {} -> {}", input.display(), output.display());
    Ok(())
}

/// Builder for converting documents.
///
/// # Example
///
/// ```no_run
/// use rubify::Rubify;
///
/// let document = Rubify::new()
///     .sectioned()
///     .with_title("俺物語１話")
///     .load("b1.txt")?;
///
/// println!("{} sections", document.sections().len());
/// document.write_html("b1_furigana.html")?;
/// # Ok::<(), rubify::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Rubify {
    options: ConvertOptions,
}

impl Rubify {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces the single-block layout.
    pub fn plain(mut self) -> Self {
        self.options.layout = Layout::Plain;
        self
    }

    /// Forces the sectioned layout.
    pub fn sectioned(mut self) -> Self {
        self.options.layout = Layout::Sectioned;
        self
    }

    /// Sets the layout.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.options.layout = layout;
        self
    }

    /// Sets the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options.template.title = title.into();
        self
    }

    /// Sets the document subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.options.template.subtitle = subtitle.into();
        self
    }

    /// Sets the cover image path.
    pub fn with_cover_image(mut self, path: impl Into<String>) -> Self {
        self.options.template.cover_image = Some(path.into());
        self
    }

    /// Removes the cover image.
    pub fn without_cover_image(mut self) -> Self {
        self.options.template.cover_image = None;
        self
    }

    /// Overrides the annotation options.
    pub fn with_annotate_options(mut self, options: AnnotateOptions) -> Self {
        self.options.annotate = Some(options);
        self
    }

    /// Disables parallel section processing.
    pub fn sequential(mut self) -> Self {
        self.options.parallel = false;
        self
    }

    /// Returns the configured options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Loads a source document from a file path.
    pub fn load(self, path: impl AsRef<Path>) -> Result<LoadedDocument> {
        let path = path.as_ref();
        let text = read_source(path)?;
        Ok(LoadedDocument {
            source: Some(path.to_path_buf()),
            text,
            options: self.options,
        })
    }

    /// Wraps source text already in memory.
    pub fn load_str(self, text: impl Into<String>) -> LoadedDocument {
        LoadedDocument {
            source: None,
            text: text.into(),
            options: self.options,
        }
    }
}

/// A source document ready for rendering.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    source: Option<PathBuf>,
    text: String,
    options: ConvertOptions,
}

impl LoadedDocument {
    /// Path the document was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Raw source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Layout the document will be rendered with.
    pub fn layout(&self) -> Layout {
        render::HtmlRenderer::new(self.options.clone()).resolve_layout(&self.text)
    }

    /// Typed sections of the document.
    pub fn sections(&self) -> Vec<Section> {
        render::HtmlRenderer::new(self.options.clone()).sections(&self.text)
    }

    /// Renders the complete HTML document.
    pub fn to_html(&self) -> String {
        render::render_html(&self.text, &self.options)
    }

    /// Renders only the annotated body.
    pub fn to_fragment(&self) -> String {
        render::HtmlRenderer::new(self.options.clone()).render_fragment(&self.text)
    }

    /// Renders and writes the HTML document.
    pub fn write_html(&self, path: impl AsRef<Path>) -> Result<()> {
        render::render_to_file(&self.text, path, &self.options)
    }
}
