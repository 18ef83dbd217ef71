//! Conversion options for HTML output.

use crate::annotate::AnnotateOptions;

/// Default document title.
pub const DEFAULT_TITLE: &str = "俺物語１話";

/// Default document subtitle.
pub const DEFAULT_SUBTITLE: &str = "내이야기 1 화";

/// Default cover image path, embedded as-is.
pub const DEFAULT_COVER_IMAGE: &str = "cover.png";

/// Options for HTML conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Body layout.
    pub layout: Layout,

    /// Static parts of the HTML document.
    pub template: DocumentTemplate,

    /// Annotation options. If None, the preset matching the layout is used.
    pub annotate: Option<AnnotateOptions>,

    /// Whether to normalize the input (BOM, line endings, NFC) first.
    pub normalize_input: bool,

    /// Whether to annotate sections in parallel.
    pub parallel: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            layout: Layout::Auto,
            template: DocumentTemplate::default(),
            annotate: None,
            normalize_input: true,
            parallel: true,
        }
    }
}

impl ConvertOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the body layout.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the document template.
    pub fn with_template(mut self, template: DocumentTemplate) -> Self {
        self.template = template;
        self
    }

    /// Overrides the annotation options.
    pub fn with_annotate_options(mut self, options: AnnotateOptions) -> Self {
        self.annotate = Some(options);
        self
    }

    /// Disables input normalization.
    pub fn without_normalization(mut self) -> Self {
        self.normalize_input = false;
        self
    }

    /// Disables parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Annotation options for a resolved layout.
    pub fn annotate_options(&self, layout: Layout) -> AnnotateOptions {
        match (&self.annotate, layout) {
            (Some(options), _) => options.clone(),
            (None, Layout::Sectioned) => AnnotateOptions::sectioned(),
            (None, _) => AnnotateOptions::plain(),
        }
    }
}

/// Body layout of the HTML document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// One `<pre>` block holding the whole document.
    Plain,
    /// One box per typed section.
    Sectioned,
    /// Sectioned if the document has section headers, plain otherwise.
    #[default]
    Auto,
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::Plain => write!(f, "plain"),
            Layout::Sectioned => write!(f, "sectioned"),
            Layout::Auto => write!(f, "auto"),
        }
    }
}

/// Static parts of the HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTemplate {
    /// Main heading, also dropped from the top of a sectioned document.
    pub title: String,
    /// Secondary heading, also dropped from the top of a sectioned document.
    pub subtitle: String,
    /// Cover image path. Not checked for existence.
    pub cover_image: Option<String>,
    /// `lang` attribute of the `<html>` element.
    pub lang: String,
}

impl Default for DocumentTemplate {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            cover_image: Some(DEFAULT_COVER_IMAGE.to_string()),
            lang: "ja".to_string(),
        }
    }
}

impl DocumentTemplate {
    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Sets the cover image path.
    pub fn with_cover_image(mut self, path: impl Into<String>) -> Self {
        self.cover_image = Some(path.into());
        self
    }

    /// Removes the cover image.
    pub fn without_cover_image(mut self) -> Self {
        self.cover_image = None;
        self
    }

    /// Lines dropped from the top of a sectioned document.
    pub fn preamble(&self) -> [&str; 2] {
        [self.title.as_str(), self.subtitle.as_str()]
    }
}
