//! # docshell
//!
//! Renders the pages of a small software project's website (home, license,
//! news, ...) inside one shared page shell: document head with an inline
//! stylesheet, a sidebar menu with documentation links, a "Latest Versions"
//! release box, a "Dependencies" box, and a badge footer.
//!
//! # Pipeline
//!
//! ```text
//! site.toml  →  Config        (config)
//! Config     →  stylesheet    (style)
//! Config     →  shell parts   (shell)
//! title+body →  document      (page)
//! pages/     →  dist/*.html   (pages, generate)
//! ```
//!
//! Rendering is a pure function of `(Config, title, body)`. The config is
//! passed explicitly to every renderer and never mutated after loading, which
//! is what lets [`generate`] render all pages of a site in parallel.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `site.toml` model: metadata, palette, releases, dependencies, docs |
//! | [`style`] | Palette → stylesheet |
//! | [`shell`] | Head, sidebar, release/dependency boxes, banner, footer |
//! | [`page`] | Wraps one body fragment in the shell |
//! | [`pages`] | Discovers page bodies (`NNN-slug.html` / `.md`) |
//! | [`generate`] | Renders a whole site directory into an output directory |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud for the shell
//!
//! The shell is built with [Maud](https://maud.lambda.xyz/) instead of
//! string concatenation. Every fragment is a closed tree, so a loop over
//! releases or links can never leave a tag open, and config values are
//! escaped when they land in attributes or text. Page bodies and the
//! stylesheet are the only pre-escaped inserts.
//!
//! ## Fixed shell, opaque bodies
//!
//! This is not a templating language. The shell has one layout; pages only
//! supply their body. Bodies are never parsed (markdown pages are converted
//! once on discovery and then treated like any other fragment).

pub mod config;
pub mod generate;
pub mod output;
pub mod page;
pub mod pages;
pub mod shell;
pub mod style;
