//! Site configuration module.
//!
//! Loads and validates `site.toml`, the single file describing a project
//! website: project metadata, the stylesheet palette, and the three
//! repeating collections shown in the sidebar (releases, dependencies,
//! other documentation).
//!
//! ## Config File Location
//!
//! ```text
//! site/
//! ├── site.toml                # This file
//! ├── images/                  # Logos and badges (copied to the output)
//! └── pages/
//!     ├── 010-index.html
//!     └── 020-license.html
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! [site]
//! project_name = "ExampleLib"            # required
//! project_url = "https://example.org"    # required
//! license = "license.html"               # relative → project_url/license.html
//! mailing_lists = "https://lists.example.org"  # absolute → used as-is
//!
//! [css]
//! dark_color = "#1f4e79"
//!
//! [[releases]]
//! name = "1.0"
//! [[releases.files]]
//! type = "Source"
//! name = "examplelib-1.0.tar.gz"
//! url = "https://example.org/dl/examplelib-1.0.tar.gz"
//!
//! [[dependencies]]
//! name = "zlib"
//! url = "https://zlib.net"
//!
//! [[docs]]
//! name = "API Reference"
//! url = "https://example.org/api"
//! ```
//!
//! Collections are arrays of tables so that their order in the file is their
//! display order. Every section is optional; missing keys fall back to the
//! stock defaults. Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the site directory.
pub const CONFIG_FILE: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Missing required config field: site.{0}")]
    MissingField(&'static str),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// The complete, immutable description of a project website.
///
/// Built once (usually by [`load_config`]) and then only read. Renderers take
/// it by reference; nothing in the crate mutates it after construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Project metadata and sidebar link targets.
    pub site: SiteConfig,
    /// Values substituted into the generated stylesheet.
    pub css: CssPalette,
    /// Release groups for the "Latest Versions" box, in display order.
    pub releases: Vec<ReleaseGroup>,
    /// Dependency links for the "Dependencies" box, in display order.
    pub dependencies: Vec<DependencyLink>,
    /// Secondary documentation pages listed in the sidebar menu.
    pub docs: Vec<DocLink>,
}

impl Config {
    /// Assemble and validate a config from its parts.
    pub fn new(
        site: SiteConfig,
        css: CssPalette,
        releases: Vec<ReleaseGroup>,
        dependencies: Vec<DependencyLink>,
        docs: Vec<DocLink>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            site,
            css,
            releases,
            dependencies,
            docs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the fields the page shell cannot do without, and key uniqueness
    /// of the keyed collections. Empty collections are fine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(field) = self.site.missing_required() {
            return Err(ConfigError::MissingField(field));
        }

        let mut seen = HashSet::new();
        for dep in &self.dependencies {
            if !seen.insert(dep.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate dependency name: {}",
                    dep.name
                )));
            }
        }

        let mut seen = HashSet::new();
        for group in &self.releases {
            if !seen.insert(group.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate release name: {}",
                    group.name
                )));
            }
        }
        Ok(())
    }
}

/// Project metadata and the targets of the fixed sidebar links.
///
/// Link fields may be relative (resolved against `project_url` by
/// [`SiteConfig::link`]) or absolute URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub project_name: String,
    pub project_url: String,
    pub description: String,
    pub keywords: String,
    pub author: String,
    pub copyright: String,
    /// Favicon path, relative to the project URL.
    pub favicon: String,
    /// Logo shown above the sidebar menu (file name inside `image_dir`).
    pub square_logo: String,
    /// Banner logo shown at the top of the content area.
    pub long_logo: String,
    /// Directory holding the site images, relative to the page.
    pub image_dir: String,
    pub license: String,
    pub news: String,
    pub screenshots: String,
    pub mailing_lists: String,
    pub bug_tracker: String,
    pub submit_bug: String,
    pub download_page: String,
    pub source_control: String,
    pub host_page: String,
    pub developers: String,
    pub donate_url: String,
    /// Where the hosting badge in the footer points to.
    pub host_home: String,
    /// Image URL of the hosting badge.
    pub host_logo: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            project_url: String::new(),
            description: String::new(),
            keywords: String::new(),
            author: String::new(),
            copyright: String::new(),
            favicon: "favicon.ico".to_string(),
            square_logo: "logo-square.png".to_string(),
            long_logo: "logo-long.png".to_string(),
            image_dir: "images".to_string(),
            license: String::new(),
            news: String::new(),
            screenshots: String::new(),
            mailing_lists: String::new(),
            bug_tracker: String::new(),
            submit_bug: String::new(),
            download_page: String::new(),
            source_control: String::new(),
            host_page: String::new(),
            developers: String::new(),
            donate_url: String::new(),
            host_home: "https://sourceforge.net".to_string(),
            host_logo: String::new(),
        }
    }
}

impl SiteConfig {
    /// Name of the first required scalar that is blank, if any.
    pub fn missing_required(&self) -> Option<&'static str> {
        if self.project_name.trim().is_empty() {
            Some("project_name")
        } else if self.project_url.trim().is_empty() {
            Some("project_url")
        } else {
            None
        }
    }

    /// Resolve a link target against the project URL.
    ///
    /// - `"license.html"` → `"{project_url}/license.html"`
    /// - `"https://lists.example.org"`, `"/abs"`, `"#anchor"`, `"mailto:x"` → unchanged
    pub fn link(&self, target: &str) -> String {
        if is_absolute(target) {
            target.to_string()
        } else {
            format!("{}/{}", self.project_url.trim_end_matches('/'), target)
        }
    }

    /// Favicon URL: `project_url + "/" + favicon`.
    pub fn favicon_url(&self) -> String {
        self.link(&self.favicon)
    }

    /// Image source for a file inside the image directory.
    pub fn image_src(&self, file: &str) -> String {
        let dir = self.image_dir.trim_end_matches('/');
        if is_absolute(file) || dir.is_empty() {
            file.to_string()
        } else {
            format!("{}/{}", dir, file)
        }
    }
}

fn is_absolute(target: &str) -> bool {
    target.contains("://")
        || target.starts_with('/')
        || target.starts_with('#')
        || target.starts_with("mailto:")
}

/// Colors and images substituted verbatim into the stylesheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CssPalette {
    /// Page background color.
    pub bgcolor: String,
    /// Fixed background image URL (may be empty).
    pub background_image: String,
    /// Light accent: `h1` background.
    pub light_color: String,
    /// Dark accent: `h1`/`h3` text, `h2` background.
    pub dark_color: String,
    pub menu_bgcolor: String,
    pub release_bgcolor: String,
    pub contentsbox_bgcolor: String,
    pub code_bgcolor: String,
    pub code_fgcolor: String,
    pub pre_bgcolor: String,
}

impl Default for CssPalette {
    fn default() -> Self {
        Self {
            bgcolor: "#e8e8e8".to_string(),
            background_image: String::new(),
            light_color: "#d6e4f0".to_string(),
            dark_color: "#1f4e79".to_string(),
            menu_bgcolor: "#1f4e79".to_string(),
            release_bgcolor: "#f4f4f4".to_string(),
            contentsbox_bgcolor: "#ffffff".to_string(),
            code_bgcolor: "#eeeeee".to_string(),
            code_fgcolor: "#333399".to_string(),
            pre_bgcolor: "#f0f0f0".to_string(),
        }
    }
}

/// A named release and its downloadable files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReleaseGroup {
    /// Version label, e.g. `"1.0"`.
    pub name: String,
    #[serde(default)]
    pub files: Vec<ReleaseFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReleaseFile {
    /// Label printed above the link, e.g. `"Source"` or `"RPM"`.
    #[serde(rename = "type", default)]
    pub kind: String,
    pub url: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependencyLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocLink {
    pub name: String,
    pub url: String,
}

/// Parse and validate a `site.toml` document.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load `site.toml` from the given site directory.
///
/// Unlike the page directory, the config file is not optional: a site
/// without a project name and URL cannot be rendered.
pub fn load_config(root: &Path) -> Result<Config, ConfigError> {
    let path = root.join(CONFIG_FILE);
    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&content)
}

/// Returns a fully-commented example `site.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docshell site configuration
# ===========================
# Only [site].project_name and [site].project_url are required.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Project metadata and sidebar links
# ---------------------------------------------------------------------------
[site]
project_name = "ExampleLib"
project_url = "https://examplelib.example.org"
description = "ExampleLib is a small C++ library."
keywords = "examplelib, c++, library"
author = "Jane Doe"
copyright = "Jane Doe"

# Relative to project_url.
favicon = "favicon.ico"

# Image files, looked up inside image_dir.
image_dir = "images"
square_logo = "logo-square.png"
long_logo = "logo-long.png"

# Relative targets are joined to project_url, absolute URLs are kept as-is.
license = "license.html"
news = "news.html"
screenshots = "screenshots.html"
mailing_lists = "https://lists.example.org/examplelib"
bug_tracker = "https://bugs.example.org/examplelib"
submit_bug = "https://bugs.example.org/examplelib/new"
download_page = "https://downloads.example.org/examplelib"
source_control = "https://git.example.org/examplelib"
host_page = "https://hosting.example.org/projects/examplelib"
developers = "https://hosting.example.org/projects/examplelib/members"
donate_url = "https://hosting.example.org/donate/examplelib"

# Footer hosting badge.
host_home = "https://sourceforge.net"
host_logo = "https://sourceforge.net/sflogo.png"

# ---------------------------------------------------------------------------
# Stylesheet palette (substituted verbatim)
# ---------------------------------------------------------------------------
[css]
bgcolor = "#e8e8e8"
background_image = ""
light_color = "#d6e4f0"
dark_color = "#1f4e79"
menu_bgcolor = "#1f4e79"
release_bgcolor = "#f4f4f4"
contentsbox_bgcolor = "#ffffff"
code_bgcolor = "#eeeeee"
code_fgcolor = "#333399"
pre_bgcolor = "#f0f0f0"

# ---------------------------------------------------------------------------
# Latest Versions box: one [[releases]] per version, files in display order
# ---------------------------------------------------------------------------
[[releases]]
name = "1.0"

[[releases.files]]
type = "Source"
name = "examplelib-1.0.tar.bz2"
url = "https://downloads.example.org/examplelib/examplelib-1.0.tar.bz2"

# ---------------------------------------------------------------------------
# Dependencies box (names must be unique)
# ---------------------------------------------------------------------------
[[dependencies]]
name = "libsigc++"
url = "https://libsigcplusplus.github.io/libsigcplusplus/"

# ---------------------------------------------------------------------------
# Documentation links in the sidebar menu
# ---------------------------------------------------------------------------
[[docs]]
name = "API Reference"
url = "https://examplelib.example.org/api/"
"##
}
