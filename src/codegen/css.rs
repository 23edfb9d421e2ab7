//! Stylesheet generation.

use crate::models::{GridConfig, GridItem};

/// Minimum gap emitted by the mobile breakpoint, in pixels.
const MOBILE_MIN_GAP: u32 = 8;

/// Generates the complete stylesheet for a grid document.
///
/// Emits a reset prelude, the viewport and grid containers, one placement
/// rule per tile, a fixed mobile breakpoint that halves the gap and switches
/// to auto-fit columns, and a light/dark background variable block.
#[must_use]
pub fn generate_css(config: &GridConfig) -> String {
    let mut output = String::new();

    output.push_str("/* Base Reset */\n");
    output.push_str("*, *::before, *::after {\n");
    output.push_str("  box-sizing: border-box;\n");
    output.push_str("  margin: 0;\n");
    output.push_str("  padding: 0;\n");
    output.push_str("}\n\n");

    output.push_str("/* Full viewport setup */\n");
    output.push_str("html, body {\n");
    output.push_str("  height: 100%;\n");
    output.push_str("  width: 100%;\n");
    output.push_str("  margin: 0;\n");
    output.push_str("  padding: 0;\n");
    output.push_str("}\n\n");

    output.push_str("body {\n");
    output.push_str("  min-height: 100vh;\n");
    output.push_str("  min-height: 100dvh; /* For mobile browsers */\n");
    output.push_str("  overflow-x: hidden;\n");
    output.push_str("}\n\n");

    output.push_str("/* Main container */\n");
    output.push_str(".container {\n");
    output.push_str("  min-height: 100vh;\n");
    output.push_str("  min-height: 100dvh;\n");
    output.push_str("  width: 100%;\n");
    output.push_str("  display: grid;\n");
    output.push_str("  grid-template-rows: 1fr;\n");
    output.push_str("}\n\n");

    output.push_str("/* Grid Container */\n");
    output.push_str(".grid-container {\n");
    output.push_str("  display: grid;\n");
    output.push_str(&format!(
        "  grid-template-columns: repeat({}, minmax(0, 1fr));\n",
        config.columns
    ));
    output.push_str(&format!("  gap: {}px;\n", config.gap));
    output.push_str("  padding: max(16px, 2vw);\n");
    output.push_str("  width: 100%;\n");
    output.push_str("  height: 100%;\n");
    output.push_str("  align-content: stretch;\n");
    output.push_str("  justify-content: stretch;\n");
    output.push_str("}\n\n");

    output.push_str("/* Grid Items */\n");
    for item in &config.items {
        output.push_str(&item_rule(item, config.border_radius));
        output.push('\n');
    }

    output.push_str("/* Item Content */\n");
    output.push_str(".grid-item-content {\n");
    output.push_str("  flex: 1;\n");
    output.push_str("  display: flex;\n");
    output.push_str("  flex-direction: column;\n");
    output.push_str("  justify-content: center;\n");
    output.push_str("  align-items: center;\n");
    output.push_str("  gap: 1rem;\n");
    output.push_str("  height: 100%;\n");
    output.push_str("}\n\n");

    output.push_str("/* Responsive adjustments */\n");
    output.push_str("@media (max-width: 768px) {\n");
    output.push_str("  .grid-container {\n");
    output.push_str("    grid-template-columns: repeat(auto-fit, minmax(min(100%, 300px), 1fr));\n");
    output.push_str(&format!("    gap: {}px;\n", mobile_gap(config.gap)));
    output.push_str("  }\n");
    output.push_str("}\n\n");

    output.push_str("/* Theme variables */\n");
    output.push_str(":root {\n");
    output.push_str("  --item-bg: #ffffff;\n\n");
    output.push_str("  @media (prefers-color-scheme: dark) {\n");
    output.push_str("    --item-bg: #2a2a2a;\n");
    output.push_str("  }\n");
    output.push_str("}\n");

    output
}

/// One placement rule mapping a tile's cell geometry to CSS grid lines.
///
/// Grid lines are 1-based, so `column-start = x + 1` and `row-start = y + 1`.
fn item_rule(item: &GridItem, border_radius: u32) -> String {
    let mut rule = String::new();

    rule.push_str(&format!(".grid-item-{} {{\n", item.id));
    rule.push_str(&format!(
        "  grid-column: {} / span {};\n",
        item.x + 1,
        item.w
    ));
    rule.push_str(&format!("  grid-row: {} / span {};\n", item.y + 1, item.h));
    rule.push_str(&format!("  background: {};\n", item.color.to_hex()));
    rule.push_str("  box-shadow: 0 2px 8px rgb(0 0 0 / 0.1);\n");
    rule.push_str(&format!("  border-radius: {border_radius}px;\n"));
    rule.push_str("  overflow: hidden;\n");
    rule.push_str("  height: 100%;\n");
    rule.push_str("  min-height: 100%;\n");
    rule.push_str("  display: flex;\n");
    rule.push_str("  flex-direction: column;\n");
    rule.push_str("  padding: clamp(1rem, 2vw, 2rem);\n");
    rule.push_str("}\n");

    rule
}

/// The gap emitted inside the mobile breakpoint: half the configured gap,
/// never below the 8px floor.
fn mobile_gap(gap: u32) -> u32 {
    MOBILE_MIN_GAP.max(gap / 2)
}
