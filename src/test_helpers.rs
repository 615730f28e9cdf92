//! Shared test utilities for the simple-blog test suite.
//!
//! Builds throwaway content trees and pulls post entries back out of
//! generated index pages.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let (_tmp, config) = source_and_output(&[("hello.md", "# Hello")]);
//! let report = build(&config, &CommonMarkRenderer::default(), 2026).unwrap();
//! assert_eq!(post_titles(&report.posts), vec!["Hello"]);
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::config::SiteConfig;
use crate::types::Post;

// =========================================================================
// Fixture setup
// =========================================================================

/// Write `(relative path, contents)` pairs under `dir`, creating parents.
pub fn write_files(dir: &Path, files: &[(&str, &str)]) {
    for (rel, contents) in files {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
    }
}

/// A temp directory holding `files` at its root.
pub fn write_source(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_files(tmp.path(), files);
    tmp
}

/// A temp directory with `notes/` (holding `files`) and an empty `public/`,
/// plus a default config pointing at them.
pub fn source_and_output(files: &[(&str, &str)]) -> (TempDir, SiteConfig) {
    let tmp = TempDir::new().unwrap();
    let content_root = tmp.path().join("notes");
    let output_dir = tmp.path().join("public");
    fs::create_dir_all(&content_root).unwrap();
    fs::create_dir_all(&output_dir).unwrap();
    write_files(&content_root, files);

    let config = SiteConfig {
        content_root,
        output_dir,
        ..SiteConfig::default()
    };
    (tmp, config)
}

// =========================================================================
// Extractors
// =========================================================================

/// Post titles in index order.
pub fn post_titles(posts: &[Post]) -> Vec<&str> {
    posts.iter().map(|p| p.title.as_str()).collect()
}

/// `(href, title)` for every post entry in a rendered index page, in order.
pub fn index_entries(html: &str) -> Vec<(String, String)> {
    const LINK: &str = r#"<a class="post-link" href=""#;
    const TITLE: &str = r#"<div class="post-title">"#;

    let mut entries = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(LINK) {
        rest = &rest[start + LINK.len()..];
        let href_end = rest.find('"').expect("unterminated href");
        let href = rest[..href_end].to_string();
        let title_start = rest.find(TITLE).expect("entry without title") + TITLE.len();
        let title_end = title_start + rest[title_start..].find("</div>").expect("unclosed title");
        entries.push((href, rest[title_start..title_end].to_string()));
        rest = &rest[title_end..];
    }
    entries
}
