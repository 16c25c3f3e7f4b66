//! The strategy policy: configuration, cross-turn context, and the per-turn
//! decision machine.
//!
//! One configurable machine replaces a family of near-identical bot scripts;
//! behavioral differences live in [`PolicyConfig`], not in code copies.

mod config;
mod context;
mod machine;

pub use config::{CombatConfig, FocusRule, PlantOffset, PolicyConfig, DEFAULT_PLANT_OFFSETS};
pub use context::{Mode, PendingPlant, TurnContext};
pub use machine::StrategyPolicy;
