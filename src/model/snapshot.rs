//! The per-turn view of shared game state.

use serde::{Deserialize, Serialize};

use crate::geometry::{self, BandParams};
use crate::model::{Player, TileMap};

/// Immutable snapshot of the match as of one half-turn.
///
/// The engine sends one of these before each decision; it is discarded after
/// the decision is produced. Turn numbers start at 1 and are monotonic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateSnapshot {
    /// Turn number, starting at 1.
    pub turn: u32,
    /// Player in slot 1.
    #[serde(rename = "p1")]
    pub player1: Player,
    /// Player in slot 2.
    #[serde(rename = "p2")]
    pub player2: Player,
    /// The full board.
    pub tile_map: TileMap,
    /// Which slot is this client: 1 or 2.
    #[serde(rename = "playerNum")]
    pub player_slot: u8,
    /// Engine feedback on the previous decision.
    #[serde(default)]
    pub feedback: Vec<String>,
}

impl GameStateSnapshot {
    /// This client's player.
    #[must_use]
    pub const fn me(&self) -> &Player {
        if self.player_slot == 1 {
            &self.player1
        } else {
            &self.player2
        }
    }

    /// The opposing player.
    #[must_use]
    pub const fn opponent(&self) -> &Player {
        if self.player_slot == 1 {
            &self.player2
        } else {
            &self.player1
        }
    }

    /// Bottom row of the fertility band this turn; negative means no band.
    #[must_use]
    pub fn fertility_bottom_row(&self) -> i64 {
        geometry::fertility_bottom_row(self.turn)
    }

    /// Middle row of the fertility band this turn; negative means no band.
    #[must_use]
    pub fn fertility_mid_row(&self, params: BandParams) -> i64 {
        geometry::fertility_mid_row(self.turn, params)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::catalog::{ItemType, TileType, UpgradeType};
    use crate::model::Position;

    fn sample_player(name: &str, x: u16, y: u16) -> Player {
        Player {
            name: name.to_string(),
            position: Position::new(x, y),
            money: 50,
            seed_inventory: BTreeMap::new(),
            harvested_inventory: Vec::new(),
            move_radius: 10,
            harvest_radius: 2,
            plant_radius: 1,
            item: ItemType::None,
            upgrade: UpgradeType::None,
        }
    }

    fn sample_snapshot(slot: u8) -> GameStateSnapshot {
        GameStateSnapshot {
            turn: 1,
            player1: sample_player("a", 4, 0),
            player2: sample_player("b", 25, 0),
            tile_map: TileMap::filled(30, 30, TileType::Grass).unwrap(),
            player_slot: slot,
            feedback: Vec::new(),
        }
    }

    #[test]
    fn test_slot_selection() {
        let snap = sample_snapshot(1);
        assert_eq!(snap.me().name, "a");
        assert_eq!(snap.opponent().name, "b");

        let snap = sample_snapshot(2);
        assert_eq!(snap.me().name, "b");
        assert_eq!(snap.opponent().name, "a");
    }

    #[test]
    fn test_wire_keys() {
        let snap = sample_snapshot(1);
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"p1\""));
        assert!(json.contains("\"p2\""));
        assert!(json.contains("\"tileMap\""));
        assert!(json.contains("\"playerNum\""));
    }

    #[test]
    fn test_band_rows_delegate_to_geometry() {
        let mut snap = sample_snapshot(1);
        snap.turn = 40;
        let params = BandParams::default();
        assert_eq!(snap.fertility_bottom_row(), 12);
        assert_eq!(
            snap.fertility_mid_row(params),
            12 - i64::from(params.inner_height) - i64::from(params.outer_height)
        );
    }
}
