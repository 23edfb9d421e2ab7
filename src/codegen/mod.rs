//! Static CSS/HTML generation for the current grid document.
//!
//! Generation is a pure function of the document: no hidden state, no I/O,
//! and byte-identical output for equal inputs. The editor session re-runs it
//! synchronously after every accepted mutation.

pub mod css;
pub mod html;

pub use css::generate_css;
pub use html::generate_html;

use crate::constants::{CSS_FILENAME, HTML_FILENAME};
use crate::models::GridConfig;

/// The derived output artifacts for one grid document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    /// The generated stylesheet.
    pub css: String,
    /// The generated markup, referencing the stylesheet by filename.
    pub html: String,
    /// Suggested filename for the stylesheet.
    pub css_filename: &'static str,
    /// Suggested filename for the markup.
    pub html_filename: &'static str,
}

impl Default for GeneratedCode {
    fn default() -> Self {
        Self {
            css: String::new(),
            html: String::new(),
            css_filename: CSS_FILENAME,
            html_filename: HTML_FILENAME,
        }
    }
}

/// Generates both output artifacts for a grid document.
#[must_use]
pub fn generate(config: &GridConfig) -> GeneratedCode {
    GeneratedCode {
        css: generate_css(config),
        html: generate_html(config),
        css_filename: CSS_FILENAME,
        html_filename: HTML_FILENAME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RgbColor;

    #[test]
    fn test_generate_is_deterministic() {
        let mut config = GridConfig::default();
        config.add_item(RgbColor::new(0x3B, 0x82, 0xF6));

        let first = generate(&config);
        let second = generate(&config);
        assert_eq!(first.css, second.css);
        assert_eq!(first.html, second.html);
    }

    #[test]
    fn test_filenames_are_fixed_constants() {
        let generated = generate(&GridConfig::default());
        assert_eq!(generated.css_filename, "grid-layout.css");
        assert_eq!(generated.html_filename, "grid-layout.html");
    }

    #[test]
    fn test_output_differs_when_document_differs() {
        let base = generate(&GridConfig::default());

        let mut config = GridConfig::default();
        config.set_columns(7);
        let changed = generate(&config);

        assert_ne!(base.css, changed.css);
    }
}
