//! Cross-turn mutable state owned by the policy.
//!
//! A [`TurnContext`] is created once at process start and lives for the
//! whole match; it is the only state surviving from one snapshot to the
//! next. Every field is always present with an explicit default.

use std::collections::VecDeque;

use crate::catalog::CropType;
use crate::model::Position;

/// What the policy is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Opening probe toward the opponent.
    Scouting,
    /// The buy, plant, wait, harvest loop.
    Farming,
    /// Carrying harvested goods back to the Green Grocer.
    Returning,
    /// Chasing the opponent and spending the item on them.
    Attacking,
}

/// A planting the policy has issued and is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPlant {
    /// Where the seed went.
    pub position: Position,
    /// Turn on which the crop matures.
    pub ready_turn: u32,
}

/// The policy's memory between snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnContext {
    /// Current mode.
    pub mode: Mode,
    /// Plantings issued and not yet harvested.
    pub pending_plants: VecDeque<PendingPlant>,
    /// Crop types still to buy before the focus rule takes over.
    pub buy_queue: VecDeque<CropType>,
    /// Planting is paused until this turn.
    pub resume_after_turn: u32,
    /// The opening shopping list has been fully bought.
    pub bought_starter_seeds: bool,
}

impl TurnContext {
    /// Create the match-lifetime context.
    #[must_use]
    pub fn new(mode: Mode, opening_buys: &[CropType]) -> Self {
        Self {
            mode,
            pending_plants: VecDeque::new(),
            buy_queue: opening_buys.iter().copied().collect(),
            resume_after_turn: 0,
            bought_starter_seeds: opening_buys.is_empty(),
        }
    }
}
