//! Tunable parameters for the strategy policy.

use serde::{Deserialize, Serialize};

use crate::catalog::CropType;
use crate::geometry::BandParams;

/// Rule choosing the crop the policy currently buys and plants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FocusRule {
    /// Focus `premium` once money reaches `threshold`, else `fallback`.
    MoneyTiers {
        /// Crop to chase once rich enough.
        premium: CropType,
        /// Money level that unlocks the premium crop.
        threshold: u32,
        /// Crop to farm until then.
        fallback: CropType,
    },
    /// Focus whichever crop has the largest seed holding.
    LargestHolding {
        /// Crop assumed when no seeds are held at all.
        default: CropType,
    },
}

/// Parameters for the optional scouting/attacking extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatConfig {
    /// Open the match probing the opponent instead of farming.
    pub scout_opening: bool,
    /// Turn at which the scout commits to attacking or farming.
    pub checkpoint_turn: u32,
    /// Commit to attacking when the opponent is closer than this.
    pub engage_distance: u16,
    /// Use the equipped item only when the opponent is farther than this.
    pub item_min_distance: u16,
}

/// A planting-pattern offset relative to the standing position.
pub type PlantOffset = (i32, i32);

/// The default five-position planting pattern: the standing tile, its row
/// neighbors, and the diagonal pair one row deeper into the band.
pub const DEFAULT_PLANT_OFFSETS: [PlantOffset; 5] =
    [(0, 0), (-1, 0), (1, 0), (-1, 1), (1, 1)];

/// Everything tunable about the policy.
///
/// A preset plus a handful of CLI overrides fully determines behavior; the
/// machine itself has no knobs of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyConfig {
    /// Crop-focus rule.
    pub focus: FocusRule,
    /// Head for the Green Grocer once more than this many harvested goods
    /// are carried.
    pub sell_threshold: usize,
    /// Minimum money worth a restocking trip.
    pub restock_min_money: u32,
    /// Last turn on which an out-of-seeds restocking trip is worthwhile.
    pub restock_until_turn: u32,
    /// Last turn on which buying seeds still pays off.
    pub buy_cutoff_turn: u32,
    /// Largest seed batch bought in one decision.
    pub batch_cap: u32,
    /// Turns to wait between plantings; zero plants every chance.
    pub plant_cooldown: u32,
    /// Shopping list worked through before the focus rule takes over.
    pub opening_buys: Vec<CropType>,
    /// Planting pattern around the standing position.
    pub plant_offsets: Vec<PlantOffset>,
    /// Fertility-band constants for this board.
    pub band: BandParams,
    /// Scouting/attacking extension; `None` farms all match.
    pub combat: Option<CombatConfig>,
}

impl Default for PolicyConfig {
    /// The farmer preset: money-tier crop focus, no combat.
    fn default() -> Self {
        Self {
            focus: FocusRule::MoneyTiers {
                premium: CropType::GoldenCorn,
                threshold: 1000,
                fallback: CropType::DuchamFruit,
            },
            sell_threshold: 0,
            restock_min_money: 5,
            restock_until_turn: 100,
            buy_cutoff_turn: 180,
            batch_cap: 50,
            plant_cooldown: 0,
            opening_buys: Vec::new(),
            plant_offsets: DEFAULT_PLANT_OFFSETS.to_vec(),
            band: BandParams::default(),
            combat: None,
        }
    }
}

impl PolicyConfig {
    /// The raider preset: scouting opening, attack checkpoint, item use,
    /// and a holdings-driven crop focus.
    #[must_use]
    pub fn raider() -> Self {
        Self {
            focus: FocusRule::LargestHolding {
                default: CropType::Potato,
            },
            combat: Some(CombatConfig {
                scout_opening: true,
                checkpoint_turn: 10,
                engage_distance: 10,
                item_min_distance: 20,
            }),
            ..Self::default()
        }
    }
}
