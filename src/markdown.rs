//! Markdown to HTML conversion.
//!
//! The pipeline only needs `text -> html`, so the converter sits behind
//! [`MarkdownRenderer`] and [`CommonMarkRenderer`] is the stock implementation
//! built on pulldown-cmark.

use pulldown_cmark::{Options, Parser, html};

/// Converts Markdown source into an HTML fragment.
///
/// Implementations must accept any input; malformed Markdown still renders.
pub trait MarkdownRenderer {
    fn render(&self, source: &str) -> String;
}

/// CommonMark with the GFM extensions most blog posts rely on.
#[derive(Debug, Clone)]
pub struct CommonMarkRenderer {
    options: Options,
}

impl Default for CommonMarkRenderer {
    fn default() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        Self { options }
    }
}

impl CommonMarkRenderer {
    /// Plain CommonMark, no extensions.
    pub fn strict() -> Self {
        Self {
            options: Options::empty(),
        }
    }
}

impl MarkdownRenderer for CommonMarkRenderer {
    fn render(&self, source: &str) -> String {
        let parser = Parser::new_ext(source, self.options);
        let mut out = String::with_capacity(source.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

/// Render with the default [`CommonMarkRenderer`].
pub fn render_markdown_to_html(source: &str) -> String {
    CommonMarkRenderer::default().render(source)
}
