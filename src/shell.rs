//! The page shell: everything around a page's own content.
//!
//! ## Layout
//!
//! ```text
//! <head>    title, meta, inline stylesheet, favicon links
//! #menu     square logo
//!           .menubox        home / License / News / Screenshots
//!                           Documentation   (one link per DocLink)
//!                           Discussion & Bugs, Downloading, host, developers
//!           #latest         Latest Versions (one .release per ReleaseGroup)
//!           #dependencies   Dependencies    (one link per DependencyLink)
//! .contentsbox
//!           long logo banner
//!           <page body>
//! .right    host, donate and validator badges
//! ```
//!
//! The header half is [`Shell::head`], [`Shell::menu`] and [`Shell::banner`];
//! the footer half is [`Shell::footer`]. [`Shell::wrap`] nests the page body
//! between them. Each fragment is a maud [`Markup`], so every element a
//! fragment opens is closed by the same fragment, loops included, and empty
//! collections still leave their (empty) container in place.

use crate::config::{Config, SiteConfig};
use crate::style;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use thiserror::Error;

const DONATE_BADGE: &str = "http://images.sourceforge.net/images/project-support.jpg";
const VALIDATOR_URL: &str = "http://validator.w3.org/check/referer";
const VALIDATOR_BADGE: &str = "http://validator.w3.org/images/vxhtml11";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("Missing required config field: {field}")]
    MissingConfigField { field: &'static str },
}

/// Renders the shell fragments for one site.
#[derive(Debug, Clone, Copy)]
pub struct Shell<'a> {
    config: &'a Config,
}

impl<'a> Shell<'a> {
    /// Fails if a scalar the shell needs on every page is blank, before any
    /// markup is produced.
    pub fn new(config: &'a Config) -> Result<Self, RenderError> {
        if let Some(field) = config.site.missing_required() {
            return Err(RenderError::MissingConfigField { field });
        }
        Ok(Self { config })
    }

    fn site(&self) -> &'a SiteConfig {
        &self.config.site
    }

    /// Text of the `<title>` element.
    ///
    /// An empty title yields the project name alone; a title that already
    /// starts with the project name is kept as-is; anything else is prefixed
    /// with `"<project> - "`.
    pub fn document_title(&self, title: &str) -> String {
        let name = &self.site().project_name;
        let title = title.trim();
        if title.is_empty() {
            name.clone()
        } else if title.starts_with(name.as_str()) {
            title.to_string()
        } else {
            format!("{} - {}", name, title)
        }
    }

    pub fn head(&self, title: &str) -> Markup {
        let site = self.site();
        let favicon = site.favicon_url();
        let css = style::generate_css(&self.config.css);
        html! {
            head {
                title { (self.document_title(title)) }
                meta charset="UTF-8";
                meta name="author" content=(site.author);
                meta name="copyright" content=(site.copyright);
                meta name="keywords" content=(site.keywords);
                meta name="description" content=(site.description);
                meta http-equiv="Content-Style-Type" content="text/css";
                style type="text/css" { (PreEscaped(css)) }
                link rel="icon" href=(favicon) type="image/x-icon";
                link rel="shortcut icon" href=(favicon) type="image/x-icon";
            }
        }
    }

    /// The sidebar: logo, menu box, release box and dependency box.
    pub fn menu(&self) -> Markup {
        let site = self.site();
        let indent = PreEscaped("&nbsp;&nbsp;");
        html! {
            div id="menu" {
                div.center style="padding-bottom: 10px" {
                    a href=(site.project_url) {
                        img
                            src=(site.image_src(&site.square_logo))
                            alt=(site.project_name)
                            border="0";
                    }
                    br;
                }
                div.menubox {
                    h2.project {
                        a.menu href=(site.project_url) { (site.project_name) " home" }
                    }
                    a.menu href=(site.link(&site.license)) { "License" }
                    br;
                    a.menu href=(site.link(&site.news)) { "News" }
                    br;
                    br;
                    b { a.menu href=(site.link(&site.screenshots)) { "Screenshots" } }
                    br;
                    br;
                    b.mb { "Documentation" }
                    br;
                    div.doclinks {
                        @for doc in &self.config.docs {
                            (indent)
                            a.menu href=(doc.url) { (doc.name) }
                            br;
                        }
                    }
                    br;
                    b.mb { "Discussion & Bugs" }
                    br;
                    (indent) a.menu href=(site.link(&site.mailing_lists)) { "Mailing Lists" }
                    br;
                    (indent) a.menu href=(site.link(&site.bug_tracker)) { "Bug Tracker" }
                    br;
                    (indent) a.menu href=(site.link(&site.submit_bug)) { "Submit Bug" }
                    br;
                    br;
                    b.mb { "Downloading" }
                    br;
                    (indent) a.menu href="#latest" { big { b { "Latest Version" } } }
                    br;
                    (indent) a.menu href=(site.link(&site.download_page)) { "Previous Versions" }
                    br;
                    (indent) a.menu href=(site.link(&site.source_control)) { "Source Control" }
                    br;
                    br;
                    a.menu href=(site.link(&site.host_page)) { "Project Host Page" }
                    br;
                    br;
                    a.menu href=(site.link(&site.developers)) { "Developers" }
                    br;
                }
                br;
                (self.release_box())
                br;
                (self.dependency_box())
            }
        }
    }

    /// "Latest Versions": each group's name followed by its files.
    pub fn release_box(&self) -> Markup {
        html! {
            div class="releasebox" id="latest" {
                span style="font-size: 15px" {
                    u { b { "Latest Versions" } }
                    br;
                }
                br;
                @for group in &self.config.releases {
                    div.release {
                        b { (group.name) }
                        br;
                        @for file in &group.files {
                            (file.kind)
                            br;
                            small { small { a href=(file.url) { (file.name) } } }
                            br;
                            br;
                        }
                        br;
                    }
                }
            }
        }
    }

    pub fn dependency_box(&self) -> Markup {
        html! {
            div class="releasebox dependencybox" id="dependencies" {
                span style="font-size: 15px" {
                    u { b { "Dependencies" } }
                    br;
                    "(and where to get them)"
                    br;
                }
                br;
                @for dep in &self.config.dependencies {
                    a href=(dep.url) { b { (dep.name) } }
                    br;
                    br;
                }
            }
        }
    }

    /// Long logo at the top of the content area.
    pub fn banner(&self) -> Markup {
        let site = self.site();
        html! {
            div.center {
                a href=(site.project_url) {
                    img src=(site.image_src(&site.long_logo)) alt=(site.project_name) border="0";
                }
                br;
            }
        }
    }

    pub fn footer(&self) -> Markup {
        let site = self.site();
        let gap = PreEscaped("&nbsp;&nbsp;&nbsp;");
        html! {
            div.right {
                br;
                a href=(site.host_home) {
                    img
                        src=(site.host_logo)
                        width="125"
                        height="37"
                        border="0"
                        alt="Project Host Logo";
                }
                (gap)
                a href=(site.link(&site.donate_url)) {
                    img
                        src=(DONATE_BADGE)
                        width="88"
                        height="32"
                        border="0"
                        alt="Support This Project";
                }
                (gap)
                a href=(VALIDATOR_URL) {
                    img
                        src=(VALIDATOR_BADGE)
                        alt="Valid XHTML 1.0!"
                        height="31"
                        width="88"
                        border="0";
                }
            }
        }
    }

    /// The full document with `body` placed inside the content container.
    pub fn wrap(&self, title: &str, body: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                (self.head(title))
                body {
                    (self.menu())
                    div.contentsbox {
                        (self.banner())
                        (body)
                    }
                    (self.footer())
                }
            }
        }
    }
}
