//! Filename and title conventions for posts.
//!
//! A post is any `*.md` file directly in the content root. Its page is the
//! same stem with `.html`, and its title comes from the first line when that
//! line is a level-1 heading:
//!
//! - `hello.md` starting with `# Hello World` → "Hello World", `hello.html`
//! - `my_notes.md` starting with anything else → "my_notes", `my_notes.html`
//!
//! Fallback titles are the stem verbatim. Underscores and dashes are kept.

/// Extension (with dot) that marks a file as a post.
pub const MARKDOWN_SUFFIX: &str = ".md";

/// Extension (with dot) of rendered pages.
pub const HTML_SUFFIX: &str = ".html";

/// Level-1 heading marker that a title line must start with.
const HEADING_MARKER: &str = "# ";

/// Stem of a post filename: `hello.md` → `Some("hello")`.
///
/// Returns `None` for names that are not posts. Matching is case-sensitive.
pub fn post_stem(filename: &str) -> Option<&str> {
    filename.strip_suffix(MARKDOWN_SUFFIX)
}

/// Output page name for a post filename: `hello.md` → `hello.html`.
pub fn output_filename(source_filename: &str) -> String {
    let stem = post_stem(source_filename).unwrap_or(source_filename);
    format!("{stem}{HTML_SUFFIX}")
}

/// Title of a post from its full text and filename.
///
/// Only the first line is considered. A heading line always wins, even when
/// nothing is left after trimming (`"#   "` gives an empty title).
pub fn extract_title(content: &str, source_filename: &str) -> String {
    let first_line = content.split('\n').next().unwrap_or_default();
    first_line
        .strip_prefix(HEADING_MARKER)
        .map(|rest| rest.trim().to_string())
        .unwrap_or_else(|| {
            post_stem(source_filename)
                .unwrap_or(source_filename)
                .to_string()
        })
}
