//! End-to-end builds against real directories.
//!
//! Each test gets its own temp tree, runs the public pipeline, and inspects
//! the generated files on disk.

use simple_blog::config::{ErrorPolicy, SiteConfig};
use simple_blog::markdown::CommonMarkRenderer;
use simple_blog::pipeline::{BuildError, build};
use simple_blog::render::RenderError;
use simple_blog::types::BuildReport;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// =========================================================================
// Helpers
// =========================================================================

struct Site {
    _tmp: TempDir,
    config: SiteConfig,
}

impl Site {
    /// Empty content directory and a config pointing at it.
    fn empty() -> Self {
        let tmp = TempDir::new().unwrap();
        let config = SiteConfig {
            content_root: tmp.path().join("notes"),
            output_dir: tmp.path().join("public"),
            ..SiteConfig::default()
        };
        fs::create_dir_all(&config.content_root).unwrap();
        Site { _tmp: tmp, config }
    }

    /// Copy of `fixtures/content`.
    fn fixtures() -> Self {
        let site = Site::empty();
        let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
        copy_dir_recursive(&fixtures, &site.config.content_root).unwrap();
        site
    }

    fn write(&self, rel: &str, contents: impl AsRef<[u8]>) -> &Self {
        let path = self.config.content_root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
        self
    }

    fn build(&self) -> Result<BuildReport, BuildError> {
        build(&self.config, &CommonMarkRenderer::default(), 2026)
    }

    fn out(&self, rel: &str) -> PathBuf {
        self.config.output_dir.join(rel)
    }

    fn read_out(&self, rel: &str) -> String {
        fs::read_to_string(self.out(rel))
            .unwrap_or_else(|e| panic!("reading {rel} from output: {e}"))
    }
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Every file under `root`, keyed by relative path.
fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    let mut files = BTreeMap::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                let rel = path.strip_prefix(root).unwrap().to_path_buf();
                files.insert(rel, fs::read(&path).unwrap());
            }
        }
    }
    files
}

/// Post link targets listed on the index page, in order.
fn index_hrefs(html: &str) -> Vec<&str> {
    html.split(r#"<a class="post-link" href=""#)
        .skip(1)
        .map(|rest| &rest[..rest.find('"').unwrap()])
        .collect()
}

/// Post titles listed on the index page, in order.
fn index_titles(html: &str) -> Vec<&str> {
    html.split(r#"<div class="post-title">"#)
        .skip(1)
        .map(|rest| &rest[..rest.find("</div>").unwrap()])
        .collect()
}

// =========================================================================
// Fixture site
// =========================================================================

#[test]
fn fixture_site_builds() {
    let site = Site::fixtures();
    let report = site.build().unwrap();

    let titles: Vec<&str> = report.posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["2024_reading_list", "Hello World"]);
    assert_eq!(report.files_copied, 4);

    let hello = site.read_out("hello-world.html");
    assert!(hello.contains("<title>Hello World - 我的博客</title>"));
    assert!(hello.contains(r#"<img src="images/diagram.svg" alt="diagram" />"#));
    assert!(hello.contains("<blockquote>"));
    assert!(hello.contains(r#"<code class="language-sh">"#));

    // Subdirectory markdown is an asset, not a post
    assert!(site.out("drafts/unfinished.md").is_file());
    assert!(!site.out("drafts/unfinished.html").exists());
    assert!(!site.read_out("index.html").contains("Not A Post"));
}

// =========================================================================
// Idempotent replacement
// =========================================================================

#[test]
fn rebuild_is_byte_identical() {
    let site = Site::fixtures();
    site.build().unwrap();
    let first = snapshot(&site.config.output_dir);

    fs::write(site.out("stray.html"), "left over").unwrap();
    site.build().unwrap();
    let second = snapshot(&site.config.output_dir);

    assert_eq!(first, second);
    assert!(!site.out("stray.html").exists());
}

#[test]
fn deleted_post_disappears_on_rebuild() {
    let site = Site::empty();
    site.write("a.md", "# A").write("b.md", "# B");
    site.build().unwrap();
    assert!(site.out("b.html").exists());

    fs::remove_file(site.config.content_root.join("b.md")).unwrap();
    site.build().unwrap();

    assert!(!site.out("b.html").exists());
    assert!(!site.out("b.md").exists());
    assert_eq!(index_hrefs(&site.read_out("index.html")), vec!["a.html"]);
}

// =========================================================================
// Title extraction
// =========================================================================

#[test]
fn heading_title_used_in_page_and_index() {
    let site = Site::empty();
    site.write("greeting.md", "# Hello World\n\nHi.");
    site.build().unwrap();

    let page = site.read_out("greeting.html");
    assert!(page.contains("<title>Hello World - 我的博客</title>"));
    assert!(page.contains("<h1>Hello World</h1>"));
    assert_eq!(index_titles(&site.read_out("index.html")), vec!["Hello World"]);
}

#[test]
fn filename_title_is_verbatim() {
    let site = Site::empty();
    site.write("my_first-post.md", "Just text.\n# Late heading");
    site.build().unwrap();

    let page = site.read_out("my_first-post.html");
    assert!(page.contains("<title>my_first-post - 我的博客</title>"));
    assert!(page.contains("<h1>my_first-post</h1>"));
}

// =========================================================================
// Completeness and ordering
// =========================================================================

#[test]
fn every_post_has_one_page_and_one_entry() {
    let site = Site::empty();
    for name in ["one.md", "two.md", "three.md", "four.md"] {
        site.write(name, format!("# {name}"));
    }
    site.write("notes.txt", "not a post");
    let report = site.build().unwrap();

    assert_eq!(report.posts.len(), 4);
    let index = site.read_out("index.html");
    let hrefs = index_hrefs(&index);
    assert_eq!(hrefs.len(), 4);
    for name in ["one", "two", "three", "four"] {
        let page = format!("{name}.html");
        assert_eq!(hrefs.iter().filter(|h| **h == page).count(), 1);
        assert!(site.out(&page).is_file());
        // The copied source sits next to the rendered page
        assert!(site.out(&format!("{name}.md")).is_file());
    }
    assert!(!site.out("notes.html").exists());
}

#[test]
fn index_keeps_discovery_order_not_title_order() {
    let site = Site::empty();
    site.write("a.md", "# Zulu")
        .write("b.md", "# Alpha")
        .write("c.md", "# Mike");
    site.build().unwrap();

    let index = site.read_out("index.html");
    assert_eq!(index_hrefs(&index), vec!["a.html", "b.html", "c.html"]);
    assert_eq!(index_titles(&index), vec!["Zulu", "Alpha", "Mike"]);
}

// =========================================================================
// Assets
// =========================================================================

#[test]
fn assets_are_copied_byte_identical() {
    let site = Site::empty();
    let png: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    site.write("post.md", "![cat](img/cat.png)")
        .write("img/cat.png", &png)
        .write("img/deeper/data.bin", [0u8, 0xff, 0x10]);
    site.build().unwrap();

    assert_eq!(fs::read(site.out("img/cat.png")).unwrap(), png);
    assert_eq!(fs::read(site.out("img/deeper/data.bin")).unwrap(), vec![0u8, 0xff, 0x10]);
}

// =========================================================================
// Empty source
// =========================================================================

#[test]
fn empty_source_builds_empty_index() {
    let site = Site::empty();
    site.write("images/logo.svg", "<svg/>");
    let report = site.build().unwrap();

    assert!(report.posts.is_empty());
    let index = site.read_out("index.html");
    assert!(index.contains("<ul></ul>"));
    assert!(index_hrefs(&index).is_empty());
    assert!(index.contains("© 2026 我的博客"));
}

// =========================================================================
// Failures
// =========================================================================

#[test]
fn missing_source_fails_before_touching_output() {
    let site = Site::empty();
    fs::create_dir_all(&site.config.output_dir).unwrap();
    fs::write(site.out("index.html"), "previous build").unwrap();
    let config = SiteConfig {
        content_root: site.config.content_root.join("nope"),
        ..site.config.clone()
    };

    let err = build(&config, &CommonMarkRenderer::default(), 2026).unwrap_err();

    assert!(err.to_string().contains("nope"));
    assert_eq!(site.read_out("index.html"), "previous build");
}

#[test]
fn unreadable_post_aborts_by_default() {
    let site = Site::empty();
    site.write("a.md", "# A").write("b.md", [0xffu8, 0xfe]);

    let err = site.build().unwrap_err();

    assert!(matches!(err, BuildError::Render(RenderError::Read { .. })));
    assert!(err.to_string().contains("b.md"));
    assert!(!site.out("index.html").exists());
}

#[test]
fn skip_policy_builds_the_rest() {
    let mut site = Site::empty();
    site.config.on_error = ErrorPolicy::Skip;
    site.write("a.md", "# A")
        .write("b.md", [0xffu8, 0xfe])
        .write("c.md", "# C");

    let report = site.build().unwrap();

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].source_filename, "b.md");
    assert_eq!(
        index_hrefs(&site.read_out("index.html")),
        vec!["a.html", "c.html"]
    );
    assert!(!site.out("b.html").exists());
}

// =========================================================================
// Configuration
// =========================================================================

#[test]
fn custom_site_strings_reach_both_templates() {
    let mut site = Site::empty();
    site.config.site_name = "Field Notes".to_string();
    site.config.site_description = "Things I learned".to_string();
    site.config.lang = "en".to_string();
    site.config.labels.back_home = "← Home".to_string();
    site.config.labels.read_more = "Read →".to_string();
    site.config.labels.footer_note = "Built with simple-blog.".to_string();
    site.write("post.md", "# Post");
    site.build().unwrap();

    let page = site.read_out("post.html");
    assert!(page.contains(r#"<html lang="en">"#));
    assert!(page.contains("<title>Post - Field Notes</title>"));
    assert!(page.contains("← Home"));

    let index = site.read_out("index.html");
    assert!(index.contains("<h1>Field Notes</h1>"));
    assert!(index.contains("Things I learned"));
    assert!(index.contains("Read →"));
    assert!(index.contains("© 2026 Field Notes. Built with simple-blog."));
}
