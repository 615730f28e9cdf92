//! Post page rendering.
//!
//! Stage 2 of the build. Finds every `*.md` file directly in the content
//! root, converts it, and writes `<stem>.html` into the output directory:
//!
//! ```text
//! temp-notes/hello.md  →  public/hello.html   (title "Hello World")
//! temp-notes/todo.md   →  public/todo.html    (title "todo")
//! temp-notes/img/x.md  →  (not a post; only copied by stage 1)
//! ```
//!
//! Discovery order is byte-wise filename order and is carried unchanged into
//! the index.
//!
//! ## Page Layout
//!
//! ```text
//! <title>{title} - {site_name}</title>
//! a.back-home → index.html
//! h1 {title}
//! div.article-content {converted markdown}
//! ```
//!
//! Uses [maud](https://maud.lambda.xyz/) so every interpolated string except
//! the converted Markdown is escaped.

use crate::config::{ErrorPolicy, SiteConfig};
use crate::markdown::MarkdownRenderer;
use crate::naming;
use crate::types::{Post, PostIndex, SkippedPost};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to list {path}: {source}")]
    List { path: PathBuf, source: io::Error },
    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

const POST_CSS: &str = include_str!("../static/post.css");

/// Posts rendered by one pass, plus failures tolerated by the skip policy.
#[derive(Debug, Default)]
pub struct RenderOutcome {
    pub posts: PostIndex,
    pub skipped: Vec<SkippedPost>,
}

/// List post filenames directly inside `root`, in discovery order.
///
/// Subdirectories are never posts, whatever their name. Names that are not
/// valid UTF-8 are skipped; they are still copied as assets.
pub fn discover_posts(root: &Path) -> Result<Vec<String>, RenderError> {
    let list_err = |source: io::Error| RenderError::List {
        path: root.to_path_buf(),
        source,
    };
    let mut names = Vec::new();
    for entry in fs::read_dir(root).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        if !entry.path().is_file() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if naming::post_stem(&name).is_some() {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Render every post in `config.content_root` into `config.output_dir`.
///
/// Under [`ErrorPolicy::Abort`] the first failure is returned; under
/// [`ErrorPolicy::Skip`] it is recorded and the remaining posts still render.
pub fn render_posts(
    config: &SiteConfig,
    renderer: &dyn MarkdownRenderer,
) -> Result<RenderOutcome, RenderError> {
    fold_posts(config, |filename| render_post(filename, config, renderer))
}

/// Read every post and derive its index entry without writing anything.
///
/// Follows `config.on_error` the same way [`render_posts`] does.
pub fn check_posts(config: &SiteConfig) -> Result<RenderOutcome, RenderError> {
    fold_posts(config, |filename| {
        read_post(&config.content_root, filename).map(|(post, _)| post)
    })
}

/// Fold the discovered files into a [`RenderOutcome`], applying the error
/// policy to each failure of `handle`.
fn fold_posts<F>(config: &SiteConfig, mut handle: F) -> Result<RenderOutcome, RenderError>
where
    F: FnMut(&str) -> Result<Post, RenderError>,
{
    let files = discover_posts(&config.content_root)?;
    files
        .iter()
        .try_fold(RenderOutcome::default(), |mut outcome, filename| {
            match handle(filename) {
                Ok(post) => outcome.posts.push(post),
                Err(err) if config.on_error == ErrorPolicy::Skip => {
                    outcome.skipped.push(SkippedPost {
                        source_filename: filename.clone(),
                        reason: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
            Ok(outcome)
        })
}

/// Read a post from `root` and derive its index entry.
///
/// Returns the entry together with the full Markdown text.
pub fn read_post(root: &Path, source_filename: &str) -> Result<(Post, String), RenderError> {
    let path = root.join(source_filename);
    let content =
        fs::read_to_string(&path).map_err(|source| RenderError::Read { path, source })?;
    let post = Post {
        title: naming::extract_title(&content, source_filename),
        source_filename: source_filename.to_string(),
        output_filename: naming::output_filename(source_filename),
    };
    Ok((post, content))
}

/// Read, convert, and write a single post.
pub fn render_post(
    source_filename: &str,
    config: &SiteConfig,
    renderer: &dyn MarkdownRenderer,
) -> Result<Post, RenderError> {
    let (post, content) = read_post(&config.content_root, source_filename)?;
    let body_html = renderer.render(&content);
    let page = render_post_page(&post.title, &body_html, config);

    let out_path = config.output_dir.join(&post.output_filename);
    fs::write(&out_path, page.into_string()).map_err(|source| RenderError::Write {
        path: out_path,
        source,
    })?;
    Ok(post)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure shared by posts and the index.
pub(crate) fn base_document(lang: &str, title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders a post page around already-converted body HTML.
pub fn render_post_page(title: &str, body_html: &str, config: &SiteConfig) -> Markup {
    let content = html! {
        a.back-home href="index.html" { (config.labels.back_home) }
        h1 { (title) }
        div.article-content {
            (PreEscaped(body_html))
        }
    };
    let page_title = format!("{} - {}", title, config.site_name);
    base_document(&config.lang, &page_title, POST_CSS, content)
}

// ============================================================================
// Tests
// ============================================================================
