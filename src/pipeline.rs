//! The full build: reset → render → index.
//!
//! Each stage runs to completion before the next one starts. A failure in the
//! reset stage means nothing is rendered; the index is written only after every
//! post has been handled.

use crate::config::SiteConfig;
use crate::index;
use crate::markdown::MarkdownRenderer;
use crate::render::{self, RenderError};
use crate::types::BuildReport;
use crate::workspace::{self, WorkspaceError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Run all three stages with `year` in the index footer.
pub fn build(
    config: &SiteConfig,
    renderer: &dyn MarkdownRenderer,
    year: i32,
) -> Result<BuildReport, BuildError> {
    let files_copied = workspace::reset_workspace(&config.content_root, &config.output_dir)?;
    let outcome = render::render_posts(config, renderer)?;
    index::write_index(&config.output_dir, &outcome.posts, config, year)?;

    Ok(BuildReport {
        output_dir: config.output_dir.clone(),
        files_copied,
        posts: outcome.posts,
        skipped: outcome.skipped,
    })
}

/// Current calendar year in local time, for the index footer.
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}
