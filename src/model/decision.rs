//! Decisions sent back to the engine.

use crate::catalog::CropType;
use crate::model::Position;

/// The movement half of a turn: where to stand next.
///
/// The destination must come from the move-range reachable set of the
/// snapshot the decision was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDecision {
    /// Where to move this turn.
    pub destination: Position,
}

/// The action half of a turn. Exactly one is produced per half-turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionDecision {
    /// Harvest the mature crops at these positions.
    Harvest(Vec<Position>),
    /// Plant crops; `crops` and `positions` are parallel arrays zipped by
    /// index.
    Plant {
        /// Crop to plant at each position.
        crops: Vec<CropType>,
        /// Where each seed goes.
        positions: Vec<Position>,
    },
    /// Buy seeds at the Green Grocer; parallel arrays zipped by index.
    Buy {
        /// Crop types to buy.
        crops: Vec<CropType>,
        /// How many of each.
        quantities: Vec<u32>,
    },
    /// Trigger the equipped item.
    UseItem,
    /// Take no action this half-turn.
    DoNothing,
}

impl ActionDecision {
    /// Build a plant decision for one crop across several positions.
    ///
    /// # Panics
    ///
    /// Panics if `positions` is empty; an empty planting is a policy defect,
    /// not a decision.
    #[must_use]
    pub fn plant_all(crop: CropType, positions: Vec<Position>) -> Self {
        assert!(!positions.is_empty(), "plant decision with no positions");
        ActionDecision::Plant {
            crops: vec![crop; positions.len()],
            positions,
        }
    }

    /// Build a single-crop buy decision.
    #[must_use]
    pub fn buy_one(crop: CropType, quantity: u32) -> Self {
        ActionDecision::Buy {
            crops: vec![crop],
            quantities: vec![quantity],
        }
    }
}
