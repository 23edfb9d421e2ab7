//! The grid document: dimensions, spacing, and placed tiles.

use crate::models::{GridItem, ItemGeometry, RgbColor};
use crate::placement;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Minimum number of grid columns.
pub const MIN_COLUMNS: i64 = 1;
/// Maximum number of grid columns.
pub const MAX_COLUMNS: i64 = 12;
/// Maximum gap between tiles, in pixels.
pub const MAX_GAP: i64 = 50;
/// Maximum tile corner radius, in pixels.
pub const MAX_BORDER_RADIUS: i64 = 50;

/// The whole grid document.
///
/// `rows` is carried and serialized for compatibility with the persisted
/// format but does not bound tile placement; the placement scan uses its own
/// fixed ceiling (see [`crate::placement`]).
///
/// # Invariants
///
/// - `columns` in [1,12], `gap` and `border_radius` in [0,50]
/// - item ids unique; insertion order carries no meaning
/// - every item satisfies the [`GridItem`] geometry invariants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    /// Number of grid columns.
    pub columns: u32,
    /// Declared row count (not enforced as a placement ceiling).
    pub rows: u32,
    /// Gap between tiles in pixels.
    pub gap: u32,
    /// Tile corner radius in pixels.
    pub border_radius: u32,
    /// The placed tiles, unique by id.
    pub items: Vec<GridItem>,
}

impl GridConfig {
    /// Sets the column count, clamped to the documented range.
    pub fn set_columns(&mut self, value: i64) {
        self.columns = value.clamp(MIN_COLUMNS, MAX_COLUMNS) as u32;
    }

    /// Sets the gap, clamped to the documented range.
    pub fn set_gap(&mut self, value: i64) {
        self.gap = value.clamp(0, MAX_GAP) as u32;
    }

    /// Sets the corner radius, clamped to the documented range.
    pub fn set_border_radius(&mut self, value: i64) {
        self.border_radius = value.clamp(0, MAX_BORDER_RADIUS) as u32;
    }

    /// Sets the column count from raw text input.
    ///
    /// Non-numeric input falls back to a single column rather than failing.
    pub fn set_columns_input(&mut self, text: &str) {
        self.set_columns(text.trim().parse().unwrap_or(MIN_COLUMNS));
    }

    /// Sets the gap from raw text input. Non-numeric input falls back to 0.
    pub fn set_gap_input(&mut self, text: &str) {
        self.set_gap(text.trim().parse().unwrap_or(0));
    }

    /// Sets the corner radius from raw text input. Non-numeric input falls back to 0.
    pub fn set_border_radius_input(&mut self, text: &str) {
        self.set_border_radius(text.trim().parse().unwrap_or(0));
    }

    /// Appends a new 1x1 tile painted with the given color.
    ///
    /// The id is one greater than the largest numeric id currently in use
    /// (non-numeric ids count as 0), and the position is the first free cell
    /// found by the placement scan.
    ///
    /// Returns the id of the new tile.
    pub fn add_item(&mut self, color: RgbColor) -> String {
        let id = (self.max_numeric_id() + 1).to_string();
        let (x, y) = placement::find_empty_position(self);
        self.items.push(GridItem::new(id.clone(), x, y, color));
        id
    }

    /// Repaints the tile with the matching id. No-op if the id is unknown.
    pub fn set_item_color(&mut self, id: &str, color: RgbColor) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.color = color;
        }
    }

    /// Replaces the tile set with a full new arrangement reported by the
    /// interaction layer.
    ///
    /// Geometry is taken as authoritative (after clamping); colors are
    /// preserved by id lookup against the prior tiles, defaulting to neutral
    /// gray for an id with no match. Tiles absent from the new arrangement
    /// are dropped. Ids are never invented here.
    pub fn apply_layout(&mut self, layout: &[ItemGeometry]) {
        let items = layout
            .iter()
            .map(|geometry| {
                let color = self
                    .items
                    .iter()
                    .find(|item| item.id == geometry.id)
                    .map_or_else(RgbColor::neutral, |item| item.color);
                GridItem::from_geometry(geometry, color)
            })
            .collect();
        self.items = items;
    }

    /// Replaces the whole document with the initial hardcoded configuration.
    pub fn reset_to_default(&mut self) {
        *self = Self::default();
    }

    /// Largest numeric id currently in use. Non-numeric ids count as 0.
    #[must_use]
    pub fn max_numeric_id(&self) -> u64 {
        self.items
            .iter()
            .map(|item| item.id.parse::<u64>().unwrap_or(0))
            .max()
            .unwrap_or(0)
    }

    /// Checks the document invariants.
    ///
    /// Used when rehydrating persisted state; a document that fails here is
    /// abandoned in favor of the default.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_COLUMNS..=MAX_COLUMNS).contains(&i64::from(self.columns)) {
            anyhow::bail!(
                "Column count {} outside the supported range {}-{}",
                self.columns,
                MIN_COLUMNS,
                MAX_COLUMNS
            );
        }

        if i64::from(self.gap) > MAX_GAP {
            anyhow::bail!("Gap {} exceeds the maximum of {}", self.gap, MAX_GAP);
        }

        if i64::from(self.border_radius) > MAX_BORDER_RADIUS {
            anyhow::bail!(
                "Corner radius {} exceeds the maximum of {}",
                self.border_radius,
                MAX_BORDER_RADIUS
            );
        }

        let mut ids = HashSet::new();
        for item in &self.items {
            if !ids.insert(item.id.as_str()) {
                anyhow::bail!("Duplicate item id '{}'", item.id);
            }
            if item.w == 0 || item.h == 0 {
                anyhow::bail!("Item '{}' has a zero span", item.id);
            }
        }

        Ok(())
    }
}

impl Default for GridConfig {
    /// The initial hardcoded document: a 4x3 grid with two gray tiles in the
    /// top-left corner.
    fn default() -> Self {
        Self {
            columns: 4,
            rows: 3,
            gap: 10,
            border_radius: 8,
            items: vec![
                GridItem::new("1", 0, 0, RgbColor::neutral()),
                GridItem::new("2", 1, 0, RgbColor::neutral()),
            ],
        }
    }
}
