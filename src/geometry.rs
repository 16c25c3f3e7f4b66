//! Fertility-band geometry.
//!
//! The band is a horizontal strip of rows that shifts outward as the match
//! progresses; early turns have no usable band at all. Everything here is a
//! pure function of the turn number and two fixed board constants.

use serde::{Deserialize, Serialize};

use crate::model::{Position, Tile, TileMap};

/// Fixed board constants describing the fertility band's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandParams {
    /// Rows in the inner band tier.
    pub inner_height: u16,
    /// Rows in the outer band tier.
    pub outer_height: u16,
}

impl Default for BandParams {
    fn default() -> Self {
        Self {
            inner_height: 3,
            outer_height: 3,
        }
    }
}

/// Bottom row of the fertility band at the given turn.
///
/// Negative means the band has not entered the board yet. The row index
/// advances one row every three turns.
#[must_use]
pub fn fertility_bottom_row(turn: u32) -> i64 {
    (i64::from(turn) - 1) / 3 - 1
}

/// Middle row of the fertility band at the given turn; negative means no
/// band yet.
#[must_use]
pub fn fertility_mid_row(turn: u32, params: BandParams) -> i64 {
    fertility_bottom_row(turn)
        - i64::from(params.inner_height)
        - i64::from(params.outer_height)
}

/// The row the policy plants from: one row inside the band's middle row.
#[must_use]
pub fn planting_row(turn: u32, params: BandParams) -> i64 {
    fertility_mid_row(turn, params) + 1
}

/// Check whether a usable planting row exists at the given turn.
#[must_use]
pub fn band_exists(turn: u32, params: BandParams) -> bool {
    planting_row(turn, params) >= 0
}

/// The planting row as a board coordinate, if it lies on the board.
#[must_use]
pub fn planting_row_on_board(turn: u32, params: BandParams, height: u16) -> Option<u16> {
    let row = planting_row(turn, params);
    if row < 0 || row >= i64::from(height) {
        return None;
    }
    u16::try_from(row).ok()
}

/// Check whether any of the listed tiles currently hosts a crop.
///
/// Out-of-bounds positions are ignored. Used to decide whether previously
/// queued plantings are still live.
#[must_use]
pub fn contains_crop(map: &TileMap, positions: &[Position]) -> bool {
    positions
        .iter()
        .any(|&pos| map.get(pos).is_some_and(Tile::has_crop))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CropType, TileType};
    use crate::model::{Crop, Tile};

    #[test]
    fn test_no_band_on_early_turns() {
        let params = BandParams::default();
        for turn in 1..=18 {
            assert!(!band_exists(turn, params), "turn {turn}");
        }
    }

    #[test]
    fn test_band_appears_and_stays() {
        let params = BandParams::default();
        let first = (1..=300).find(|&t| band_exists(t, params)).unwrap();
        assert_eq!(first, 19);
        assert!((first..=300).all(|t| band_exists(t, params)));
    }

    #[test]
    fn test_rows_are_non_decreasing() {
        let params = BandParams::default();
        for turn in 1..300 {
            assert!(fertility_bottom_row(turn + 1) >= fertility_bottom_row(turn));
            assert!(
                fertility_mid_row(turn + 1, params) >= fertility_mid_row(turn, params)
            );
        }
    }

    #[test]
    fn test_bottom_row_advances_every_three_turns() {
        assert_eq!(fertility_bottom_row(1), -1);
        assert_eq!(fertility_bottom_row(3), -1);
        assert_eq!(fertility_bottom_row(4), 0);
        assert_eq!(fertility_bottom_row(7), 1);
        assert_eq!(fertility_bottom_row(31), 9);
    }

    #[test]
    fn test_planting_row_leaves_board() {
        let params = BandParams::default();
        // Row 0 at turn 19; a 10-row board is outgrown by turn 19 + 10 * 3.
        assert_eq!(planting_row_on_board(19, params, 10), Some(0));
        assert!(planting_row_on_board(50, params, 10).is_none());
    }

    #[test]
    fn test_contains_crop() {
        let mut map = TileMap::filled(10, 10, TileType::Grass).unwrap();
        let planted = Position::new(4, 4);
        let mut tile = Tile::new(TileType::FertilityBandMid);
        tile.crop = Some(Crop {
            crop_type: CropType::Potato,
            growth_timer: 1,
            value: 0,
        });
        map.set(planted, tile);

        assert!(contains_crop(&map, &[Position::new(0, 0), planted]));
        assert!(!contains_crop(&map, &[Position::new(0, 0)]));
        // Off-board positions are not crops.
        assert!(!contains_crop(&map, &[Position::new(99, 99)]));
    }
}
