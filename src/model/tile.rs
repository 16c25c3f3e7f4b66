//! Tiles and the crops growing on them.

use serde::{Deserialize, Serialize};

use crate::catalog::{CropType, TileType};

/// A crop planted on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    /// Crop species.
    #[serde(rename = "type")]
    pub crop_type: CropType,
    /// Turns left until the crop can be harvested. Zero means mature.
    pub growth_timer: u32,
    /// Current sale value; positive once mature.
    pub value: u32,
}

impl Crop {
    /// Check if the crop is ready to harvest.
    #[must_use]
    pub const fn is_mature(self) -> bool {
        self.growth_timer == 0
    }
}

/// A single tile on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    /// Type of terrain.
    #[serde(rename = "type")]
    pub tile_type: TileType,
    /// The crop growing here, if any.
    pub crop: Option<Crop>,
}

impl Tile {
    /// Create an empty tile of the given type.
    #[must_use]
    pub const fn new(tile_type: TileType) -> Self {
        Self {
            tile_type,
            crop: None,
        }
    }

    /// Check if a crop is currently growing (or mature) here.
    #[must_use]
    pub const fn has_crop(&self) -> bool {
        self.crop.is_some()
    }

    /// Check if a mature crop is waiting here.
    #[must_use]
    pub fn has_mature_crop(&self) -> bool {
        self.crop.is_some_and(Crop::is_mature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tile_has_no_crop() {
        let tile = Tile::new(TileType::Grass);
        assert!(!tile.has_crop());
        assert!(!tile.has_mature_crop());
    }

    #[test]
    fn test_growing_crop_is_not_mature() {
        let mut tile = Tile::new(TileType::FertilityBandMid);
        tile.crop = Some(Crop {
            crop_type: CropType::Potato,
            growth_timer: 2,
            value: 0,
        });
        assert!(tile.has_crop());
        assert!(!tile.has_mature_crop());
    }

    #[test]
    fn test_mature_crop() {
        let mut tile = Tile::new(TileType::FertilityBandMid);
        tile.crop = Some(Crop {
            crop_type: CropType::Potato,
            growth_timer: 0,
            value: 25,
        });
        assert!(tile.has_mature_crop());
    }
}
