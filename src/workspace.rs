//! Output directory reset.
//!
//! Stage 1 of the build. Guarantees that afterwards the output directory
//! exists, holds nothing from a previous build, and contains an exact copy of
//! the content source tree:
//!
//! ```text
//! temp-notes/                  public/
//! ├── hello.md         →       ├── hello.md
//! ├── about.md                 ├── about.md
//! └── images/                  └── images/
//!     └── cat.png                  └── cat.png
//! ```
//!
//! Rendered pages are added next to the copies by the next stage, so the raw
//! `.md` files end up published too.
//!
//! The output is disposable: whatever sits at the output path is removed
//! without confirmation. The source-exists and no-nesting guards (in either
//! direction) run before anything is deleted.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("Content source does not exist or is not a directory: {0}")]
    SourceMissing(PathBuf),
    #[error("Output directory {output} must not be inside content source {source_dir}")]
    OutputInsideSource { source_dir: PathBuf, output: PathBuf },
    #[error("Content source {source_dir} must not be inside output directory {output}")]
    SourceInsideOutput { source_dir: PathBuf, output: PathBuf },
    #[error("IO error at {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("Failed walking content source: {0}")]
    Walk(#[from] walkdir::Error),
}

fn io_at(path: &Path) -> impl FnOnce(io::Error) -> WorkspaceError + '_ {
    move |source| WorkspaceError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Wipe `output`, recreate it, and copy `source` into it.
///
/// Returns the number of files copied.
pub fn reset_workspace(source: &Path, output: &Path) -> Result<usize, WorkspaceError> {
    if !source.is_dir() {
        return Err(WorkspaceError::SourceMissing(source.to_path_buf()));
    }
    let source_abs = normalize(source).map_err(io_at(source))?;
    let output_abs = normalize(output).map_err(io_at(output))?;
    if output_abs.starts_with(&source_abs) {
        return Err(WorkspaceError::OutputInsideSource {
            source_dir: source.to_path_buf(),
            output: output.to_path_buf(),
        });
    }
    if source_abs.starts_with(&output_abs) {
        return Err(WorkspaceError::SourceInsideOutput {
            source_dir: source.to_path_buf(),
            output: output.to_path_buf(),
        });
    }

    clear_output(output)?;
    fs::create_dir_all(output).map_err(io_at(output))?;
    copy_tree(source, output)
}

/// Remove whatever is at `path`: directory tree, file, or symlink.
fn clear_output(path: &Path) -> Result<(), WorkspaceError> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(io_at(path)(e)),
    };
    if meta.is_dir() {
        fs::remove_dir_all(path).map_err(io_at(path))
    } else {
        fs::remove_file(path).map_err(io_at(path))
    }
}

/// Recursively copy the contents of `src` into the existing directory `dst`.
fn copy_tree(src: &Path, dst: &Path) -> Result<usize, WorkspaceError> {
    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1).follow_links(true) {
        let entry = entry?;
        // min_depth(1) guarantees every entry lives under src
        let rel = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(io_at(&target))?;
        } else {
            fs::copy(entry.path(), &target).map_err(io_at(entry.path()))?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Absolute form of `path` with `.` and `..` resolved lexically.
///
/// The output directory usually does not exist yet, so this cannot
/// canonicalize.
fn normalize(path: &Path) -> io::Result<PathBuf> {
    let abs = std::path::absolute(path)?;
    let mut out = PathBuf::new();
    for component in abs.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    Ok(out)
}
