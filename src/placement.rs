//! First-free-cell placement scan for newly added tiles.

use crate::models::GridConfig;
use std::collections::HashSet;

/// Fixed row ceiling for the placement scan.
///
/// Deliberately independent of `GridConfig::rows`, which is declared but not
/// enforced as a placement bound.
pub const ROW_SCAN_LIMIT: u32 = 20;

/// Finds the first unoccupied cell, scanning row-major within the configured
/// column count and the fixed row ceiling.
///
/// If every cell within the scan window is occupied, returns `(0, 0)` and the
/// new tile overlaps. Placement always succeeds; a full grid is degraded
/// output, not an error.
#[must_use]
pub fn find_empty_position(config: &GridConfig) -> (u32, u32) {
    let occupied: HashSet<(u32, u32)> = config
        .items
        .iter()
        .flat_map(|item| item.footprint())
        .collect();

    for y in 0..ROW_SCAN_LIMIT {
        for x in 0..config.columns {
            if !occupied.contains(&(x, y)) {
                return (x, y);
            }
        }
    }

    (0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GridItem, RgbColor};

    fn empty_grid(columns: u32) -> GridConfig {
        let mut config = GridConfig::default();
        config.columns = columns;
        config.items.clear();
        config
    }

    #[test]
    fn test_empty_grid_places_at_origin() {
        let config = empty_grid(4);
        assert_eq!(find_empty_position(&config), (0, 0));
    }

    #[test]
    fn test_full_first_row_places_on_second() {
        let mut config = empty_grid(4);
        for x in 0..4 {
            config
                .items
                .push(GridItem::new(format!("{}", x + 1), x, 0, RgbColor::neutral()));
        }
        assert_eq!(find_empty_position(&config), (0, 1));
    }

    #[test]
    fn test_skips_footprint_of_wide_tiles() {
        let mut config = empty_grid(3);
        let mut banner = GridItem::new("1", 0, 0, RgbColor::neutral());
        banner.w = 2;
        banner.h = 2;
        config.items.push(banner);

        // (0,0) and (1,0) are covered by the banner; first free cell is (2,0).
        assert_eq!(find_empty_position(&config), (2, 0));
    }

    #[test]
    fn test_exhausted_scan_falls_back_to_origin() {
        let mut config = empty_grid(1);
        let mut column = GridItem::new("1", 0, 0, RgbColor::neutral());
        column.h = ROW_SCAN_LIMIT;
        config.items.push(column);

        // Every scannable cell is occupied; placement overlaps at the origin.
        assert_eq!(find_empty_position(&config), (0, 0));
    }

    #[test]
    fn test_scan_ignores_declared_rows() {
        let mut config = empty_grid(2);
        config.rows = 1;
        let mut block = GridItem::new("1", 0, 0, RgbColor::neutral());
        block.w = 2;
        block.h = 2;
        config.items.push(block);

        // rows=1 does not cap the scan; the free cell below the block wins.
        assert_eq!(find_empty_position(&config), (0, 2));
    }
}
