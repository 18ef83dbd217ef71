//! HTML renderer implementation.

use super::{ConvertOptions, Layout};
use crate::annotate::{annotate, html_escape, AnnotateOptions};
use crate::detect::detect_layout;
use crate::normalize::normalize_input;
use crate::section::{sectionize, Section};

use log::debug;
use rayon::prelude::*;
use std::borrow::Cow;

/// Style sheet for the single-block layout.
const PLAIN_STYLE: &str = r#"
        body {
            font-family: "Yu Mincho", "Hiragino Mincho ProN", "MS Mincho", serif;
            line-height: 2.8;
            max-width: 900px;
            margin: 0 auto;
            padding: 40px;
            background-color: #fefefe;
            font-size: 18px;
        }

        .title {
            font-size: 36px;
            text-align: center;
            margin-bottom: 10px;
            color: #2c3e50;
            font-weight: bold;
        }

        .subtitle {
            font-size: 28px;
            text-align: center;
            margin-bottom: 30px;
            color: #34495e;
        }

        .cover-image {
            display: block;
            margin: 0 auto 40px auto;
            max-width: 400px;
            width: 100%;
            border-radius: 10px;
            box-shadow: 0 4px 12px rgba(0,0,0,0.15);
        }

        ruby {
            ruby-align: center;
        }

        rt {
            font-size: 0.5em;
            color: #e74c3c;
            font-weight: normal;
            font-family: "Hiragino Kaku Gothic ProN", "Meiryo", sans-serif;
        }

        .content-section {
            margin-bottom: 40px;
            padding: 30px;
            background-color: white;
            border-radius: 12px;
            box-shadow: 0 3px 10px rgba(0,0,0,0.08);
        }

        .korean-bold {
            font-weight: bold;
            color: #27ae60;
            font-family: "Apple SD Gothic Neo", "Malgun Gothic", sans-serif;
        }

        @media print {
            body {
                font-size: 16px;
                background-color: white;
                padding: 20px;
            }
            .content-section {
                box-shadow: none;
                border: 1px solid #ddd;
                page-break-inside: avoid;
            }
            .cover-image {
                max-width: 300px;
            }
        }
"#;

/// Style sheet for the sectioned layout.
const SECTIONED_STYLE: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: "Yu Mincho", "Hiragino Mincho ProN", "MS Mincho", serif;
            line-height: 2.2;
            max-width: 1000px;
            margin: 0 auto;
            padding: 40px 20px;
            background: linear-gradient(to bottom, #f8f9fa 0%, #ffffff 100%);
            font-size: 18px;
            color: #2c3e50;
        }

        .title {
            font-size: 42px;
            text-align: center;
            margin-bottom: 15px;
            color: #2c3e50;
            font-weight: bold;
            text-shadow: 2px 2px 4px rgba(0,0,0,0.1);
        }

        .subtitle {
            font-size: 30px;
            text-align: center;
            margin-bottom: 35px;
            color: #34495e;
            font-weight: 500;
        }

        .cover-image {
            display: block;
            margin: 0 auto 50px auto;
            max-width: 450px;
            width: 100%;
            border-radius: 15px;
            box-shadow: 0 8px 20px rgba(0,0,0,0.15);
        }

        ruby {
            ruby-align: center;
        }

        rt {
            font-size: 0.5em;
            color: #e74c3c;
            font-weight: normal;
            font-family: "Hiragino Kaku Gothic ProN", "Meiryo", sans-serif;
        }

        .section-box {
            margin-bottom: 50px;
            padding: 35px;
            background-color: white;
            border-radius: 15px;
            box-shadow: 0 4px 15px rgba(0,0,0,0.08);
            border-left: 6px solid #3498db;
        }

        .story-section { border-left-color: #9b59b6; }
        .shadowing-section { border-left-color: #3498db; }
        .freetalk-section { border-left-color: #e67e22; }
        .vocabulary-section { border-left-color: #27ae60; }

        .section-header {
            font-size: 28px;
            font-weight: bold;
            color: #2c3e50;
            margin-bottom: 25px;
            padding-bottom: 15px;
            border-bottom: 3px solid #ecf0f1;
        }

        .section-content {
            white-space: pre-wrap;
            font-family: inherit;
            font-size: inherit;
            line-height: 2.5;
        }

        .korean-bold {
            font-weight: bold;
            color: #27ae60;
            font-family: "Apple SD Gothic Neo", "Malgun Gothic", sans-serif;
        }

        @media print {
            body {
                font-size: 16px;
                background: white;
                padding: 20px;
            }
            .section-box {
                box-shadow: none;
                border: 1px solid #ddd;
                page-break-inside: avoid;
                margin-bottom: 30px;
                padding: 25px;
            }
            .cover-image {
                max-width: 350px;
            }
        }

        @media (max-width: 768px) {
            body {
                font-size: 16px;
                padding: 20px 15px;
            }
            .title { font-size: 32px; }
            .subtitle { font-size: 24px; }
            .section-box { padding: 25px 20px; }
            .section-header { font-size: 24px; }
        }
"#;

/// HTML renderer.
#[derive(Debug)]
pub struct HtmlRenderer {
    options: ConvertOptions,
}

impl HtmlRenderer {
    /// Creates a new renderer with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Renders a complete HTML document.
    pub fn render(&self, input: &str) -> String {
        let text = self.prepare(input);
        let layout = self.resolve_layout(&text);
        let body = self.render_body(&text, layout);
        self.render_document(layout, &body)
    }

    /// Renders only the annotated body, without the surrounding document.
    pub fn render_fragment(&self, input: &str) -> String {
        let text = self.prepare(input);
        let layout = self.resolve_layout(&text);
        self.render_body(&text, layout)
    }

    /// Layout used for this text; `Auto` is resolved by detection.
    pub fn resolve_layout(&self, text: &str) -> Layout {
        match self.options.layout {
            Layout::Auto => detect_layout(text),
            layout => layout,
        }
    }

    /// Splits the text into sections the way a sectioned render would.
    pub fn sections(&self, input: &str) -> Vec<Section> {
        let text = self.prepare(input);
        sectionize(&text, &self.options.template.preamble())
    }

    fn prepare<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if self.options.normalize_input {
            Cow::Owned(normalize_input(input))
        } else {
            Cow::Borrowed(input)
        }
    }

    fn render_body(&self, text: &str, layout: Layout) -> String {
        let annotate_options = self.options.annotate_options(layout);
        debug!("render: {} layout", layout);

        match layout {
            Layout::Sectioned => self.render_sections(text, &annotate_options),
            _ => render_plain(text, &annotate_options),
        }
    }

    fn render_sections(&self, text: &str, options: &AnnotateOptions) -> String {
        let sections = sectionize(text, &self.options.template.preamble());

        let rendered: Vec<String> = if self.options.parallel && sections.len() > 1 {
            sections
                .par_iter()
                .map(|section| render_section(section, options))
                .collect()
        } else {
            sections
                .iter()
                .map(|section| render_section(section, options))
                .collect()
        };

        rendered.concat()
    }

    fn render_document(&self, layout: Layout, body: &str) -> String {
        let template = &self.options.template;
        let title = html_escape(&template.title);
        let subtitle = html_escape(&template.subtitle);
        let style = match layout {
            Layout::Sectioned => SECTIONED_STYLE,
            _ => PLAIN_STYLE,
        };

        let mut output = String::with_capacity(body.len() + style.len() + 1024);
        output.push_str("<!DOCTYPE html>\n");
        output.push_str(&format!(
            "<html lang=\"{}\">\n",
            html_escape(&template.lang)
        ));
        output.push_str("<head>\n");
        output.push_str("    <meta charset=\"UTF-8\">\n");
        output.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        output.push_str(&format!("    <title>{} - {}</title>\n", title, subtitle));
        output.push_str("    <style>");
        output.push_str(style);
        output.push_str("    </style>\n");
        output.push_str("</head>\n");
        output.push_str("<body>\n");
        output.push_str(&format!("    <h1 class=\"title\">{}</h1>\n", title));
        output.push_str(&format!("    <h2 class=\"subtitle\">{}</h2>\n", subtitle));
        if let Some(ref cover) = template.cover_image {
            output.push_str(&format!(
                "    <img src=\"{}\" alt=\"Cover Image\" class=\"cover-image\">\n",
                html_escape(cover)
            ));
        }
        output.push_str("\n    ");
        output.push_str(body);
        output.push_str("\n</body>\n</html>");
        output
    }
}

/// Renders the whole text as one `<pre>` block.
fn render_plain(text: &str, options: &AnnotateOptions) -> String {
    format!(
        "<div class=\"content-section\">\n        \
         <pre style=\"white-space: pre-wrap; font-family: inherit; font-size: inherit;\">{}</pre>\n    \
         </div>",
        annotate(text, options)
    )
}

/// Renders one section box.
fn render_section(section: &Section, options: &AnnotateOptions) -> String {
    let content = annotate(&section.text(), options);
    let mut output = String::new();

    match section.kind.css_class() {
        Some(class) => output.push_str(&format!("<div class=\"section-box {}\">\n", class)),
        None => output.push_str("<div class=\"section-box\">\n"),
    }
    if let Some(heading) = section.kind.heading() {
        output.push_str(&format!("<h2 class=\"section-header\">{}</h2>\n", heading));
    }
    output.push_str(&format!("<pre class=\"section-content\">{}</pre>\n", content));
    output.push_str("</div>\n\n");
    output
}
