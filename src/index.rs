//! Index page generation.
//!
//! Stage 3 of the build. Writes `index.html` at the output root, listing the
//! posts exactly in the order stage 2 discovered them:
//!
//! ```text
//! div.header   h1 {site_name} / p.description {site_description}
//! ul           li > a.post-link[href=post.html] > div.post-title + div.post-meta
//! footer       © {year} {site_name}. {footer_note}
//! ```
//!
//! The year is passed in rather than read from the clock, which keeps the
//! page a pure function of its inputs.

use crate::config::SiteConfig;
use crate::render::{RenderError, base_document};
use crate::types::Post;
use maud::{Markup, html};
use std::fs;
use std::path::{Path, PathBuf};

/// Filename of the landing page inside the output directory.
pub const INDEX_FILENAME: &str = "index.html";

const INDEX_CSS: &str = include_str!("../static/index.css");

/// Renders the landing page listing `posts`.
pub fn render_index(posts: &[Post], config: &SiteConfig, year: i32) -> Markup {
    let content = html! {
        div.header {
            h1 { (config.site_name) }
            p.description { (config.site_description) }
        }
        ul {
            @for post in posts {
                li {
                    a.post-link href=(post.output_filename) {
                        div.post-title { (post.title) }
                        div.post-meta { (config.labels.read_more) }
                    }
                }
            }
        }
        footer {
            p { "© " (year) " " (config.site_name) ". " (config.labels.footer_note) }
        }
    };
    base_document(&config.lang, &config.site_name, INDEX_CSS, content)
}

/// Render and write `index.html` into `output_dir`.
pub fn write_index(
    output_dir: &Path,
    posts: &[Post],
    config: &SiteConfig,
    year: i32,
) -> Result<PathBuf, RenderError> {
    let path = output_dir.join(INDEX_FILENAME);
    fs::write(&path, render_index(posts, config, year).into_string()).map_err(|source| {
        RenderError::Write {
            path: path.clone(),
            source,
        }
    })?;
    Ok(path)
}
