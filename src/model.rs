//! Shared data model for the farming contest.
//!
//! Everything here is an observed view of engine-owned state:
//! - Grid primitives ([`Position`], [`Tile`], [`TileMap`])
//! - Per-player state ([`Player`])
//! - The per-turn snapshot ([`GameStateSnapshot`])
//! - The decisions the client sends back ([`MoveDecision`], [`ActionDecision`])

mod decision;
mod map;
mod player;
mod position;
mod snapshot;
mod tile;

pub use decision::{ActionDecision, MoveDecision};
pub use map::TileMap;
pub use player::{HarvestedCrop, Player};
pub use position::Position;
pub use snapshot::GameStateSnapshot;
pub use tile::{Crop, Tile};
