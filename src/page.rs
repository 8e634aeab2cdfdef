//! Page assembly: shell header, page body, shell footer.
//!
//! The body is an opaque, already-rendered fragment. It is inserted without
//! escaping and never inspected.

use crate::config::Config;
use crate::shell::{RenderError, Shell};
use maud::PreEscaped;

/// Render one complete page.
///
/// Returns the whole document or an error; there is no partial output.
pub fn render(config: &Config, title: &str, body: &str) -> Result<String, RenderError> {
    let shell = Shell::new(config)?;
    Ok(shell.wrap(title, PreEscaped(body.to_string())).into_string())
}
