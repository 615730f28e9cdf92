use clap::{Parser, Subcommand};
use simple_blog::config::{self, SiteConfig};
use simple_blog::markdown::CommonMarkRenderer;
use simple_blog::{output, pipeline, render};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simple-blog")]
#[command(about = "Static site generator for a folder of Markdown notes")]
#[command(long_about = "\
Static site generator for a folder of Markdown notes

Every *.md file directly in the content directory becomes an HTML page, and
index.html lists them all. The output directory is deleted and rebuilt on
every run; everything in the content directory is copied into it first, so
images referenced by posts keep working.

Content structure:

  temp-notes/
  ├── hello.md          # '# Hello World' first line → title \"Hello World\"
  ├── todo.md           # no heading → title \"todo\"
  └── images/           # copied as-is; .md files here are not posts
      └── cat.png

Run 'simple-blog gen-config' to generate a documented simple-blog.toml.")]
#[command(version)]
struct Cli {
    /// Config file (default: simple-blog.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Content directory (overrides content_root)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Output directory (overrides output_dir)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: reset → render → index
    Build,
    /// List the posts that would be built, without writing anything
    Check {
        /// Print the post list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock simple-blog.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let site = load_site(&cli)?;
            let renderer = CommonMarkRenderer::default();
            println!(
                "==> Building {} \u{2192} {}",
                site.content_root.display(),
                site.output_dir.display()
            );
            let report = pipeline::build(&site, &renderer, pipeline::current_year())?;
            output::print_skip_warnings(&report.skipped);
            output::print_build_output(&report);
            println!("==> Build complete: {}", site.output_dir.display());
        }
        Command::Check { json } => {
            let site = load_site(&cli)?;
            let outcome = render::check_posts(&site)?;
            output::print_skip_warnings(&outcome.skipped);
            let posts = outcome.posts;
            if json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
            } else {
                println!("==> Checking {}", site.content_root.display());
                output::print_check_output(&posts);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Resolve the site config: stock defaults ← config file ← CLI flags.
fn load_site(cli: &Cli) -> Result<SiteConfig, config::ConfigError> {
    config::load_config(cli.config.as_deref())?
        .with_overrides(cli.source.clone(), cli.output.clone())
}
