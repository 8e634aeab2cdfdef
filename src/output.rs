//! CLI output formatting.
//!
//! Each command has a `format_*` function returning display lines (pure, no
//! I/O) and a `print_*` wrapper writing them to stdout.
//!
//! Entities lead with a 3-digit positional index and their display name,
//! with details on indented context lines:
//!
//! ```text
//! Site
//!     ExampleLib → https://examplelib.example.org
//!
//! Releases
//!     001 1.0 (1 file)
//!         Source: examplelib-1.0.tar.bz2
//!
//! Pages
//!     001 Home → index.html
//!         Source: 010-index.html
//! ```

use crate::config::Config;
use crate::generate::GenerateReport;
use crate::pages::Page;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Display name of a page; the home page has an empty title.
fn page_name(title: &str) -> &str {
    if title.is_empty() { "Home" } else { title }
}

/// Push a section header and one line per item, or `(none)` when empty.
fn section<T>(
    lines: &mut Vec<String>,
    header: &str,
    items: &[T],
    mut format_item: impl FnMut(usize, &T) -> Vec<String>,
) {
    lines.push(String::new());
    lines.push(header.to_string());
    if items.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, item) in items.iter().enumerate() {
        lines.extend(format_item(i + 1, item));
    }
}

// ============================================================================
// check
// ============================================================================

/// Summarize a loaded site: config collections and discovered pages.
pub fn format_check_output(config: &Config, pages: &[Page]) -> Vec<String> {
    let mut lines = vec![
        "Site".to_string(),
        format!(
            "    {} \u{2192} {}",
            config.site.project_name, config.site.project_url
        ),
    ];

    section(&mut lines, "Documentation", &config.docs, |i, doc| {
        vec![format!("    {} {} \u{2192} {}", format_index(i), doc.name, doc.url)]
    });

    section(&mut lines, "Releases", &config.releases, |i, group| {
        let mut out = vec![format!(
            "    {} {} ({})",
            format_index(i),
            group.name,
            plural(group.files.len(), "file")
        )];
        for file in &group.files {
            out.push(format!("        {}: {}", file.kind, file.name));
        }
        out
    });

    section(&mut lines, "Dependencies", &config.dependencies, |i, dep| {
        vec![format!("    {} {} \u{2192} {}", format_index(i), dep.name, dep.url)]
    });

    section(&mut lines, "Pages", pages, |i, page| {
        vec![
            format!(
                "    {} {} \u{2192} {}",
                format_index(i),
                page_name(&page.title),
                page.output_file()
            ),
            format!("        Source: {}", page.source),
        ]
    });

    lines
}

/// Print check output to stdout.
pub fn print_check_output(config: &Config, pages: &[Page]) {
    for line in format_check_output(config, pages) {
        println!("{}", line);
    }
}

// ============================================================================
// build
// ============================================================================

/// List generated pages followed by a one-line summary.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, page) in report.pages.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            page_name(&page.title),
            page.output
        ));
        lines.push(format!("    Source: {}", page.source));
    }
    lines.push(format!(
        "Generated {} for {}, copied {}",
        plural(report.pages.len(), "page"),
        report.project_name,
        plural(report.assets, "image")
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DocLink, ReleaseFile, ReleaseGroup};
    use crate::generate::GeneratedPage;
    use crate::pages::BodyFormat;

    fn test_config() -> Config {
        let mut config = Config::default();
        config.site.project_name = "ExampleLib".to_string();
        config.site.project_url = "https://example.org".to_string();
        config
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "file"), "1 file");
        assert_eq!(plural(0, "file"), "0 files");
        assert_eq!(plural(3, "page"), "3 pages");
    }

    #[test]
    fn check_output_empty_collections() {
        let lines = format_check_output(&test_config(), &[]);
        assert_eq!(lines[0], "Site");
        assert_eq!(lines[1], "    ExampleLib \u{2192} https://example.org");
        assert_eq!(lines.iter().filter(|l| *l == "    (none)").count(), 4);
    }

    #[test]
    fn check_output_lists_releases_and_docs() {
        let mut config = test_config();
        config.docs = vec![DocLink {
            name: "API".to_string(),
            url: "https://example.org/api".to_string(),
        }];
        config.releases = vec![ReleaseGroup {
            name: "1.0".to_string(),
            files: vec![ReleaseFile {
                kind: "Source".to_string(),
                url: "https://example.org/a.tar.gz".to_string(),
                name: "a.tar.gz".to_string(),
            }],
        }];

        let lines = format_check_output(&config, &[]);
        assert!(lines.contains(&"    001 API \u{2192} https://example.org/api".to_string()));
        assert!(lines.contains(&"    001 1.0 (1 file)".to_string()));
        assert!(lines.contains(&"        Source: a.tar.gz".to_string()));
    }

    #[test]
    fn check_output_lists_pages() {
        let page = Page {
            title: String::new(),
            slug: "index".to_string(),
            source: "010-index.html".to_string(),
            format: BodyFormat::Html,
            body: String::new(),
            sort_key: 10,
        };
        let lines = format_check_output(&test_config(), &[page]);
        assert!(lines.contains(&"    001 Home \u{2192} index.html".to_string()));
        assert!(lines.contains(&"        Source: 010-index.html".to_string()));
    }

    #[test]
    fn generate_output_summary() {
        let report = GenerateReport {
            project_name: "ExampleLib".to_string(),
            pages: vec![
                GeneratedPage {
                    title: String::new(),
                    source: "010-index.html".to_string(),
                    output: "index.html".to_string(),
                },
                GeneratedPage {
                    title: "license".to_string(),
                    source: "020-license.html".to_string(),
                    output: "license.html".to_string(),
                },
            ],
            assets: 1,
        };
        let lines = format_generate_output(&report);
        assert_eq!(lines[0], "001 Home \u{2192} index.html");
        assert_eq!(lines[1], "    Source: 010-index.html");
        assert_eq!(lines[2], "002 license \u{2192} license.html");
        assert_eq!(
            lines.last().unwrap(),
            "Generated 2 pages for ExampleLib, copied 1 image"
        );
    }
}
