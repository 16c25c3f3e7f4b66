//! The board grid.

use serde::{Deserialize, Serialize};

use crate::catalog::TileType;
use crate::model::{Position, Tile};

/// A rectangular grid of tiles, row-major.
///
/// Bounds are fixed for the whole match; the engine sends the full grid in
/// every snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileMap {
    /// Width of the board in tiles.
    width: u16,
    /// Height of the board in tiles.
    height: u16,
    /// Tiles in row-major order.
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Create a map filled with one tile type.
    ///
    /// Returns `None` if either dimension is zero or the grid would not fit
    /// in memory addressable by `usize`.
    #[must_use]
    pub fn filled(width: u16, height: u16, tile_type: TileType) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let size = usize::from(width).checked_mul(usize::from(height))?;
        Some(Self {
            width,
            height,
            tiles: vec![Tile::new(tile_type); size],
        })
    }

    /// Get the width of the board.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the height of the board.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Check if a position is within the board bounds.
    #[must_use]
    pub const fn in_bounds(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Convert a position to an index into the tile array.
    fn index_of(&self, pos: Position) -> Option<usize> {
        if self.in_bounds(pos) {
            Some(usize::from(pos.y) * usize::from(self.width) + usize::from(pos.x))
        } else {
            None
        }
    }

    /// Get the tile at a position.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Tile> {
        self.index_of(pos).map(|idx| &self.tiles[idx])
    }

    /// Get a mutable reference to the tile at a position.
    #[must_use]
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        self.index_of(pos).map(|idx| &mut self.tiles[idx])
    }

    /// Set the tile at a position.
    ///
    /// Returns `false` if the position is out of bounds.
    pub fn set(&mut self, pos: Position, tile: Tile) -> bool {
        if let Some(idx) = self.index_of(pos) {
            self.tiles[idx] = tile;
            true
        } else {
            false
        }
    }

    /// Iterate over all positions and tiles in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Tile)> {
        let width = usize::from(self.width);
        self.tiles.iter().enumerate().map(move |(idx, tile)| {
            // Indices were produced from u16 coordinates, so these divisions
            // fit back into u16.
            let x = u16::try_from(idx % width).unwrap_or(u16::MAX);
            let y = u16::try_from(idx / width).unwrap_or(u16::MAX);
            (Position::new(x, y), tile)
        })
    }

    /// Positions of every Green Grocer tile, in row-major order.
    pub fn green_grocers(&self) -> impl Iterator<Item = Position> + '_ {
        self.iter()
            .filter(|(_, tile)| tile.tile_type.is_green_grocer())
            .map(|(pos, _)| pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_map() {
        let map = TileMap::filled(10, 8, TileType::Grass).unwrap();
        assert_eq!(map.width(), 10);
        assert_eq!(map.height(), 8);
        assert_eq!(
            map.get(Position::new(9, 7)).unwrap().tile_type,
            TileType::Grass
        );
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(TileMap::filled(0, 5, TileType::Grass).is_none());
        assert!(TileMap::filled(5, 0, TileType::Grass).is_none());
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut map = TileMap::filled(10, 10, TileType::Grass).unwrap();
        let pos = Position::new(3, 7);
        assert!(map.set(pos, Tile::new(TileType::GreenGrocer)));
        assert!(map.get(pos).unwrap().tile_type.is_green_grocer());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut map = TileMap::filled(10, 10, TileType::Grass).unwrap();
        assert!(map.get(Position::new(10, 0)).is_none());
        assert!(!map.set(Position::new(0, 10), Tile::new(TileType::Dirt)));
    }

    #[test]
    fn test_iter_is_row_major() {
        let map = TileMap::filled(3, 2, TileType::Grass).unwrap();
        let positions: Vec<Position> = map.iter().map(|(pos, _)| pos).collect();
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[2], Position::new(2, 0));
        assert_eq!(positions[3], Position::new(0, 1));
        assert_eq!(positions.len(), 6);
    }

    #[test]
    fn test_green_grocer_scan() {
        let mut map = TileMap::filled(20, 10, TileType::Grass).unwrap();
        map.set(Position::new(17, 0), Tile::new(TileType::GreenGrocer));
        map.set(Position::new(13, 0), Tile::new(TileType::GreenGrocer));
        let grocers: Vec<Position> = map.green_grocers().collect();
        assert_eq!(
            grocers,
            vec![Position::new(13, 0), Position::new(17, 0)]
        );
    }
}
