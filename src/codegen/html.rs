//! Markup generation.

use crate::constants::CSS_FILENAME;
use crate::models::{GridConfig, GridItem};

/// Generates the minimal HTML document for a grid document.
///
/// The body contains one labeled block per tile (heading = item id, text =
/// `w`x`h` span) inside the grid container, and the head links the generated
/// stylesheet by its fixed filename.
#[must_use]
pub fn generate_html(config: &GridConfig) -> String {
    let mut output = String::new();

    output.push_str("<!DOCTYPE html>\n");
    output.push_str("<html lang=\"en\">\n");
    output.push_str("<head>\n");
    output.push_str("    <meta charset=\"UTF-8\">\n");
    output.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    output.push_str("    <title>Grid Layout</title>\n");
    output.push_str(&format!(
        "    <link rel=\"stylesheet\" href=\"{CSS_FILENAME}\">\n"
    ));
    output.push_str("</head>\n");
    output.push_str("<body>\n");
    output.push_str("    <div class=\"container\">\n");
    output.push_str("        <div class=\"grid-container\">\n");

    for item in &config.items {
        output.push_str(&item_block(item));
    }

    output.push_str("        </div>\n");
    output.push_str("    </div>\n");
    output.push_str("</body>\n");
    output.push_str("</html>\n");

    output
}

/// One labeled block for a tile.
fn item_block(item: &GridItem) -> String {
    let mut block = String::new();

    block.push_str(&format!(
        "            <div class=\"grid-item-{}\">\n",
        item.id
    ));
    block.push_str("                <div class=\"grid-item-content\">\n");
    block.push_str(&format!("                    <h2>Item {}</h2>\n", item.id));
    block.push_str(&format!(
        "                    <p>{}×{}</p>\n",
        item.w, item.h
    ));
    block.push_str("                </div>\n");
    block.push_str("            </div>\n");

    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemGeometry;

    #[test]
    fn test_document_links_generated_stylesheet() {
        let html = generate_html(&GridConfig::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<link rel=\"stylesheet\" href=\"grid-layout.css\">"));
    }

    #[test]
    fn test_one_block_per_item_with_span_label() {
        let mut config = GridConfig::default();
        config.apply_layout(&[
            ItemGeometry::new("1", 0, 0, 2, 1),
            ItemGeometry::new("2", 2, 0, 1, 3),
        ]);

        let html = generate_html(&config);
        assert!(html.contains("<div class=\"grid-item-1\">"));
        assert!(html.contains("<h2>Item 1</h2>"));
        assert!(html.contains("<p>2×1</p>"));
        assert!(html.contains("<div class=\"grid-item-2\">"));
        assert!(html.contains("<p>1×3</p>"));
    }

    #[test]
    fn test_empty_document_still_renders_containers() {
        let mut config = GridConfig::default();
        config.items.clear();

        let html = generate_html(&config);
        assert!(html.contains("<div class=\"grid-container\">"));
        assert!(!html.contains("grid-item-1"));
    }
}
