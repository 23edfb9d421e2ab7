//! Placed tile data structures.

use crate::models::RgbColor;
use serde::{Deserialize, Serialize};

/// One placed tile on the grid.
///
/// Coordinates are integer cell positions with the origin at the top-left.
/// The `id` is stable for the item's lifetime and doubles as the CSS class
/// suffix in generated output (`.grid-item-<id>`). The serialized field name
/// for the id is `i`, matching the persisted wire format.
///
/// # Invariants
///
/// - `w >= 1` and `h >= 1` (coerced on every mutation, never rejected)
/// - `color` is always present; new tiles start neutral gray
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridItem {
    /// Unique identifier, stable across the item's lifetime.
    #[serde(rename = "i")]
    pub id: String,
    /// Column of the top-left cell.
    pub x: u32,
    /// Row of the top-left cell.
    pub y: u32,
    /// Column span (>= 1).
    pub w: u32,
    /// Row span (>= 1).
    pub h: u32,
    /// Background color of the tile.
    pub color: RgbColor,
}

impl GridItem {
    /// Creates a new 1x1 tile at the given cell.
    #[must_use]
    pub fn new(id: impl Into<String>, x: u32, y: u32, color: RgbColor) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w: 1,
            h: 1,
            color,
        }
    }

    /// Builds a tile from raw geometry reported by the interaction layer,
    /// coercing out-of-range values instead of rejecting them.
    #[must_use]
    pub fn from_geometry(geometry: &ItemGeometry, color: RgbColor) -> Self {
        Self {
            id: geometry.id.clone(),
            x: clamp_coordinate(geometry.x),
            y: clamp_coordinate(geometry.y),
            w: clamp_span(geometry.w),
            h: clamp_span(geometry.h),
            color,
        }
    }

    /// Iterates over every cell in this tile's footprint,
    /// all `(x, y)` pairs in `[x, x+w) x [y, y+h)`.
    pub fn footprint(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.x..self.x + self.w).flat_map(move |x| (self.y..self.y + self.h).map(move |y| (x, y)))
    }
}

/// Raw tile geometry as reported by the external drag/resize widget.
///
/// The widget is authoritative for geometry but knows nothing about colors,
/// so this carries none. Values are signed because the widget may briefly
/// report out-of-range positions mid-gesture; they are clamped on apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemGeometry {
    /// Identifier of an existing tile. Never invents new ids.
    #[serde(rename = "i")]
    pub id: String,
    /// Reported column (clamped to >= 0).
    pub x: i64,
    /// Reported row (clamped to >= 0).
    pub y: i64,
    /// Reported column span (clamped to >= 1).
    pub w: i64,
    /// Reported row span (clamped to >= 1).
    pub h: i64,
}

impl ItemGeometry {
    /// Creates a geometry record for a tile.
    #[must_use]
    pub fn new(id: impl Into<String>, x: i64, y: i64, w: i64, h: i64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w,
            h,
        }
    }
}

fn clamp_coordinate(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

fn clamp_span(value: i64) -> u32 {
    u32::try_from(value.max(1)).unwrap_or(u32::MAX)
}
