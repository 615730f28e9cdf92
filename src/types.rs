//! Shared types passed between pipeline stages.
//!
//! Nothing here is persisted: a run builds these in memory and the only
//! lasting artifact is the HTML written to disk.

use serde::Serialize;
use std::path::PathBuf;

/// A rendered post: one Markdown file in the content root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    /// From a leading `# heading`, or the filename minus `.md`.
    pub title: String,
    /// Name of the Markdown file inside the content root.
    pub source_filename: String,
    /// Name of the generated page inside the output directory.
    pub output_filename: String,
}

/// Posts in discovery order. Never sorted after discovery.
pub type PostIndex = Vec<Post>;

/// A post that failed under the skip error policy.
#[derive(Debug, Clone)]
pub struct SkippedPost {
    pub source_filename: String,
    pub reason: String,
}

/// What one build produced, for CLI reporting.
#[derive(Debug)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub files_copied: usize,
    pub posts: PostIndex,
    pub skipped: Vec<SkippedPost>,
}
