//! Site generation.
//!
//! Renders every page of a site directory into the output directory:
//!
//! ```text
//! site/                              dist/
//! ├── site.toml                      ├── index.html
//! ├── images/                  →     ├── license.html
//! │   └── logo-long.png              ├── news.html
//! └── pages/                         └── images/
//!     ├── 010-index.html                 └── logo-long.png
//!     ├── 020-license.html
//!     └── 030-news.md
//! ```
//!
//! Pages are rendered in parallel with rayon; the config is shared read-only.
//! Nothing is written until every page rendered successfully, so a broken
//! config never leaves a half-updated output directory behind.

use crate::config::{self, Config};
use crate::page;
use crate::pages::{self, Page};
use crate::shell::RenderError;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Directory holding page bodies, relative to the site root.
pub const PAGES_DIR: &str = "pages";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Page error: {0}")]
    Pages(#[from] pages::PagesError),
    #[error("Cannot render {page}: {source}")]
    Render {
        page: String,
        #[source]
        source: RenderError,
    },
    #[error("Asset copy error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Output directory {0} is inside the image directory it copies")]
    OutputInsideImages(PathBuf),
}

/// One written page.
#[derive(Debug, Clone)]
pub struct GeneratedPage {
    pub title: String,
    pub source: String,
    pub output: String,
}

/// Summary of a generate run, consumed by [`crate::output`].
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub project_name: String,
    pub pages: Vec<GeneratedPage>,
    /// Number of image files copied into the output directory.
    pub assets: usize,
}

/// Load `source/site.toml`, render `source/pages/*` and write them to `output`.
pub fn generate(source: &Path, output: &Path) -> Result<GenerateReport, GenerateError> {
    let config = config::load_config(source)?;
    let pages = pages::discover_pages(&source.join(PAGES_DIR))?;
    generate_pages(&config, &pages, source, output)
}

/// Render `pages` with an already-loaded config.
pub fn generate_pages(
    config: &Config,
    pages: &[Page],
    source: &Path,
    output: &Path,
) -> Result<GenerateReport, GenerateError> {
    let rendered = render_all(config, pages)?;

    fs::create_dir_all(output).map_err(io_error(output))?;
    for (page, html) in pages.iter().zip(&rendered) {
        let path = output.join(page.output_file());
        fs::write(&path, html).map_err(io_error(&path))?;
    }

    let assets = copy_images(config, source, output)?;

    Ok(GenerateReport {
        project_name: config.site.project_name.clone(),
        pages: pages
            .iter()
            .map(|p| GeneratedPage {
                title: p.title.clone(),
                source: p.source.clone(),
                output: p.output_file(),
            })
            .collect(),
        assets,
    })
}

/// Render every page, in page order, or fail on the first broken one.
pub fn render_all(config: &Config, pages: &[Page]) -> Result<Vec<String>, GenerateError> {
    pages
        .par_iter()
        .map(|p| {
            page::render(config, &p.title, &p.body).map_err(|source| GenerateError::Render {
                page: p.source.clone(),
                source,
            })
        })
        .collect()
}

/// Copy `source/<image_dir>` to `output/<image_dir>`. Returns the file count.
///
/// Leading and trailing slashes of the image directory are ignored, so
/// `/images` copies `source/images`. Skipped when the image directory is
/// empty, a URL, missing, or already the same directory in both trees
/// (building a site into itself).
fn copy_images(config: &Config, source: &Path, output: &Path) -> Result<usize, GenerateError> {
    let dir = config.site.image_dir.trim_matches('/');
    if dir.is_empty() || dir.contains("://") {
        return Ok(0);
    }
    let src_root = source.join(dir);
    if !src_root.is_dir() {
        return Ok(0);
    }

    let dst_root = output.join(dir);
    fs::create_dir_all(&dst_root).map_err(io_error(&dst_root))?;
    let src_real = fs::canonicalize(&src_root).map_err(io_error(&src_root))?;
    let dst_real = fs::canonicalize(&dst_root).map_err(io_error(&dst_root))?;
    if src_real == dst_real {
        return Ok(0);
    }
    // The walk would descend into files it is writing.
    if dst_real.starts_with(&src_real) {
        return Err(GenerateError::OutputInsideImages(dst_root));
    }

    let mut copied = 0;
    for entry in WalkDir::new(&src_root) {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(&src_root) else {
            continue;
        };
        let target = dst_root.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(io_error(&target))?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &target).map_err(io_error(&target))?;
            copied += 1;
        }
    }
    Ok(copied)
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> GenerateError {
    move |source| GenerateError::Io {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SITE_TOML: &str = r#"
[site]
project_name = "ExampleLib"
project_url = "https://example.org"

[[docs]]
name = "API"
url = "https://example.org/api"
"#;

    fn setup_site() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("site.toml"), SITE_TOML).unwrap();
        let pages = tmp.path().join(PAGES_DIR);
        fs::create_dir_all(&pages).unwrap();
        fs::write(pages.join("010-index.html"), "<h1>ExampleLib</h1>").unwrap();
        fs::write(pages.join("020-license.html"), "<h1>License</h1>").unwrap();
        fs::write(pages.join("030-news.md"), "# News\n\nReleased.").unwrap();
        let images = tmp.path().join("images/badges");
        fs::create_dir_all(&images).unwrap();
        fs::write(tmp.path().join("images/logo-long.png"), "png").unwrap();
        fs::write(images.join("gnu.png"), "png").unwrap();
        tmp
    }

    #[test]
    fn generate_writes_every_page() {
        let site = setup_site();
        let out = TempDir::new().unwrap();

        let report = generate(site.path(), out.path()).unwrap();

        let outputs: Vec<&str> = report.pages.iter().map(|p| p.output.as_str()).collect();
        assert_eq!(outputs, vec!["index.html", "license.html", "news.html"]);
        assert_eq!(report.project_name, "ExampleLib");

        let index = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(index.contains("<title>ExampleLib</title>"));
        assert!(index.contains("<h1>ExampleLib</h1>"));

        let news = fs::read_to_string(out.path().join("news.html")).unwrap();
        assert!(news.contains("<title>ExampleLib - News</title>"));
        assert!(news.contains("<p>Released.</p>"));
    }

    #[test]
    fn generate_copies_image_dir() {
        let site = setup_site();
        let out = TempDir::new().unwrap();

        let report = generate(site.path(), out.path()).unwrap();

        assert_eq!(report.assets, 2);
        assert!(out.path().join("images/logo-long.png").exists());
        assert!(out.path().join("images/badges/gnu.png").exists());
    }

    #[test]
    fn generate_without_pages_dir_writes_nothing() {
        let site = TempDir::new().unwrap();
        fs::write(site.path().join("site.toml"), SITE_TOML).unwrap();
        let out = TempDir::new().unwrap();

        let report = generate(site.path(), out.path()).unwrap();
        assert!(report.pages.is_empty());
        assert_eq!(report.assets, 0);
    }

    #[test]
    fn render_failure_writes_no_pages() {
        let site = setup_site();
        let out = TempDir::new().unwrap();
        let dist = out.path().join("dist");

        let mut config = config::load_config(site.path()).unwrap();
        config.site.project_url = String::new();
        let pages = pages::discover_pages(&site.path().join(PAGES_DIR)).unwrap();

        let result = generate_pages(&config, &pages, site.path(), &dist);
        assert!(matches!(
            result,
            Err(GenerateError::Render {
                source: RenderError::MissingConfigField {
                    field: "project_url"
                },
                ..
            })
        ));
        assert!(!dist.exists());
    }

    #[test]
    fn generate_into_source_keeps_images() {
        let site = setup_site();
        fs::write(site.path().join("images/logo-long.png"), "PNGDATA").unwrap();

        let report = generate(site.path(), site.path()).unwrap();

        assert_eq!(report.assets, 0);
        let logo = fs::read(site.path().join("images/logo-long.png")).unwrap();
        assert_eq!(logo, b"PNGDATA");
        assert!(site.path().join("index.html").exists());
    }

    #[test]
    fn output_inside_image_dir_is_error() {
        let site = setup_site();
        let out = site.path().join("images/dist");

        let result = generate(site.path(), &out);

        assert!(matches!(result, Err(GenerateError::OutputInsideImages(_))));
        let logo = fs::read(site.path().join("images/logo-long.png")).unwrap();
        assert_eq!(logo, b"png");
    }

    #[test]
    fn leading_slash_image_dir_is_copied() {
        let site = setup_site();
        let out = TempDir::new().unwrap();
        let mut config = config::load_config(site.path()).unwrap();
        config.site.image_dir = "/images".to_string();
        let pages = pages::discover_pages(&site.path().join(PAGES_DIR)).unwrap();

        let report = generate_pages(&config, &pages, site.path(), out.path()).unwrap();
        assert_eq!(report.assets, 2);
        assert!(out.path().join("images/logo-long.png").exists());
    }

    #[test]
    fn write_failure_names_path() {
        let site = setup_site();
        let out = TempDir::new().unwrap();
        fs::create_dir(out.path().join("index.html")).unwrap();

        let err = generate(site.path(), out.path()).unwrap_err();
        assert!(matches!(err, GenerateError::Io { .. }));
        assert!(err.to_string().contains("index.html"));
    }

    #[test]
    fn missing_config_is_error() {
        let site = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let result = generate(site.path(), out.path());
        assert!(matches!(result, Err(GenerateError::Config(_))));
    }

    #[test]
    fn render_all_preserves_page_order() {
        let site = setup_site();
        let config = config::load_config(site.path()).unwrap();
        let pages = pages::discover_pages(&site.path().join(PAGES_DIR)).unwrap();

        let rendered = render_all(&config, &pages).unwrap();
        assert_eq!(rendered.len(), 3);
        assert!(rendered[1].contains("<h1>License</h1>"));
    }
}
