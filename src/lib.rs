//! # Simple Blog
//!
//! A minimal static site generator for a folder of Markdown notes. Every
//! `*.md` file in the content directory becomes a styled HTML page, and an
//! index page links to all of them.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Reset   temp-notes/  →  public/            (wipe output, copy everything)
//! 2. Render  *.md         →  public/*.html      (title + markdown → post page)
//! 3. Index   posts        →  public/index.html  (list in discovery order)
//! ```
//!
//! The stages run strictly in sequence on one thread. Stage 1 must finish
//! before anything is rendered, or it would delete the pages; stage 3 needs
//! every post from stage 2. Every run rebuilds the output from scratch, so
//! the result is a pure function of the content directory and the current
//! year.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`workspace`] | Stage 1 — deletes the output directory and copies the content tree into it |
//! | [`render`] | Stage 2 — discovers posts, converts them, writes the post pages |
//! | [`index`] | Stage 3 — renders `index.html` from the collected posts |
//! | [`pipeline`] | Runs the three stages and returns a [`types::BuildReport`] |
//! | [`config`] | Layered TOML configuration with defaults matching the original site |
//! | [`markdown`] | The [`markdown::MarkdownRenderer`] seam and its pulldown-cmark implementation |
//! | [`naming`] | Post filename and title conventions |
//! | [`types`] | `Post`, `PostIndex`, and the build report |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Copy Everything, Then Render
//!
//! Images and other files next to the posts keep working because the whole
//! content tree is copied first, at the same relative paths. A side effect
//! is that the raw `.md` files are published next to their `.html` pages.
//!
//! ## Maud Over Template Engines
//!
//! There are exactly two page layouts, both fixed. [Maud](https://maud.lambda.xyz/)
//! keeps them as checked Rust code with escaping by default, and the CSS is
//! embedded with `include_str!`, so the binary has no template files to ship.

pub mod config;
pub mod index;
pub mod markdown;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod types;
pub mod workspace;

#[cfg(test)]
pub(crate) mod test_helpers;
