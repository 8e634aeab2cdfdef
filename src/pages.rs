//! Page body discovery.
//!
//! Each file directly inside the `pages/` directory of a site is one page:
//!
//! ```text
//! pages/
//! ├── 010-index.html      # Home page → index.html
//! ├── 020-license.html    # → license.html
//! ├── 030-news.md         # Markdown, converted to HTML → news.html
//! └── notes.html          # Unnumbered: rendered after the numbered pages
//! ```
//!
//! The numeric prefix orders pages; the rest of the stem is the slug and
//! output file name. HTML bodies are opaque fragments passed through as-is.
//! Markdown bodies are converted with pulldown-cmark, and the text of their
//! first level-one heading becomes the page title.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd, html as md_html};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Slug of the home page.
pub const HOME_SLUG: &str = "index";

#[derive(Error, Debug)]
pub enum PagesError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Two pages share the slug '{0}': {1}")]
    DuplicateSlug(String, PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    Html,
    Markdown,
}

/// A page body ready to be wrapped in the shell.
#[derive(Debug, Clone)]
pub struct Page {
    /// Title passed to the shell; empty for the home page.
    pub title: String,
    /// Output file stem (prefix stripped).
    pub slug: String,
    /// Source file name inside `pages/`.
    pub source: String,
    pub format: BodyFormat,
    /// Rendered HTML fragment.
    pub body: String,
    /// Number prefix, `u32::MAX` for unnumbered pages.
    pub sort_key: u32,
}

impl Page {
    /// Output file name, e.g. `license.html`.
    pub fn output_file(&self) -> String {
        format!("{}.html", self.slug)
    }
}

/// Read all page bodies in `dir`, ordered by number prefix.
///
/// A missing directory yields no pages.
pub fn discover_pages(dir: &Path) -> Result<Vec<Page>, PagesError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(io_error(dir))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && body_format(p).is_some())
        .collect();
    files.sort();

    let mut pages = Vec::new();
    let mut slugs = HashSet::new();
    for path in &files {
        let Some(format) = body_format(path) else {
            continue;
        };
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let (sort_key, slug) = split_prefix(&stem);
        if !slugs.insert(slug.clone()) {
            return Err(PagesError::DuplicateSlug(slug, path.clone()));
        }

        let content = fs::read_to_string(path).map_err(io_error(path))?;
        let (title, body) = match format {
            BodyFormat::Html => (default_title(&slug), content),
            BodyFormat::Markdown => {
                let title = markdown_title(&content).unwrap_or_else(|| default_title(&slug));
                (title, markdown_to_html(&content))
            }
        };

        pages.push(Page {
            title,
            slug,
            source: path
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default(),
            format,
            body,
            sort_key,
        });
    }

    // Stable: unnumbered pages keep file-name order after the numbered ones.
    pages.sort_by_key(|p| p.sort_key);
    Ok(pages)
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> PagesError {
    move |source| PagesError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn body_format(path: &Path) -> Option<BodyFormat> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "html" | "htm" => Some(BodyFormat::Html),
        "md" => Some(BodyFormat::Markdown),
        _ => None,
    }
}

/// `"020-license"` → `(20, "license")`; `"notes"` → `(u32::MAX, "notes")`.
fn split_prefix(stem: &str) -> (u32, String) {
    if let Some((prefix, rest)) = stem.split_once('-') {
        if let Ok(num) = prefix.parse::<u32>() {
            if !rest.is_empty() {
                return (num, rest.to_string());
            }
        }
    }
    (u32::MAX, stem.to_string())
}

fn default_title(slug: &str) -> String {
    if slug == HOME_SLUG {
        String::new()
    } else {
        slug.replace('-', " ")
    }
}

/// Plain text of the first non-empty H1, inline markup dropped.
fn markdown_title(content: &str) -> Option<String> {
    let mut in_heading = false;
    let mut text = String::new();
    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_heading = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let title = text.trim();
                if !title.is_empty() {
                    return Some(title.to_string());
                }
                in_heading = false;
                text.clear();
            }
            Event::Text(t) | Event::Code(t) if in_heading => text.push_str(&t),
            _ => {}
        }
    }
    None
}

fn markdown_to_html(content: &str) -> String {
    let parser = Parser::new(content);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}
