//! CLI output formatting.
//!
//! Output is a content inventory: each post leads with its positional index
//! and title, with the files involved shown as indented context lines.
//!
//! ## Check
//!
//! ```text
//! Posts
//! 001 Hello World
//!     Source: hello.md
//! 002 todo
//!     Source: todo.md
//! ```
//!
//! ## Build
//!
//! ```text
//! Copied 5 files → public
//! 001 Hello World → hello.html
//! 002 todo → todo.html
//! Home → index.html
//!
//! Generated 2 posts
//! ```
//!
//! Each `format_*` function returns `Vec<String>` with no I/O so it can be
//! tested directly; `print_*` wrappers write to stdout.

use crate::index::INDEX_FILENAME;
use crate::types::{BuildReport, Post, SkippedPost};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the posts a build would produce.
pub fn format_check_output(posts: &[Post]) -> Vec<String> {
    let mut lines = vec!["Posts".to_string()];
    if posts.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, post) in posts.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), post.title));
        lines.push(format!("    Source: {}", post.source_filename));
    }
    lines
}

/// Print check output to stdout.
pub fn print_check_output(posts: &[Post]) {
    for line in format_check_output(posts) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format what a completed build produced.
///
/// The last line is the summary with the post count.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = vec![format!(
        "Copied {} \u{2192} {}",
        plural(report.files_copied, "file"),
        report.output_dir.display()
    )];

    for (i, post) in report.posts.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            post.title,
            post.output_filename
        ));
    }
    lines.push(format!("Home \u{2192} {}", INDEX_FILENAME));

    if !report.skipped.is_empty() {
        lines.push(String::new());
        lines.push("Skipped".to_string());
        for skipped in &report.skipped {
            lines.push(format!("    {}: {}", skipped.source_filename, skipped.reason));
        }
    }

    lines.push(String::new());
    lines.push(format!("Generated {}", plural(report.posts.len(), "post")));
    lines
}

/// Print build output to stdout.
pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Warnings
// ============================================================================

/// Format one warning line per post left out under the skip policy.
pub fn format_skip_warnings(skipped: &[SkippedPost]) -> Vec<String> {
    skipped
        .iter()
        .map(|s| format!("warning: skipped {}: {}", s.source_filename, s.reason))
        .collect()
}

/// Print skip warnings to stderr.
pub fn print_skip_warnings(skipped: &[SkippedPost]) {
    for line in format_skip_warnings(skipped) {
        eprintln!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
