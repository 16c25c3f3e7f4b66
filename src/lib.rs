// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Cultivar: a decision client for a turn-based two-player farming contest.
//!
//! Each turn the engine sends a snapshot of shared state and expects two
//! decisions back: a move, then (after a refreshed snapshot) an action.
//! This crate is the strategy side of that exchange:
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │      Turn Protocol (stdio JSON)     │
//! ├─────────────────────────────────────┤
//! │   Strategy Policy (state machine)   │
//! ├──────────┬──────────┬───────────────┤
//! │ Geometry │  Ledger  │  Reachability │
//! └──────────┴──────────┴───────────────┘
//! ```
//!
//! The engine owns all game rules and state; the client only observes
//! snapshots and answers with decisions that respect the engine's range and
//! tile constraints.

pub mod catalog;
pub mod error;
pub mod geometry;
pub mod ledger;
pub mod model;
pub mod policy;
pub mod protocol;
pub mod reach;
pub mod transport;

pub use error::{TransportError, TransportResult};

// Re-export key types at crate root for convenience
pub use model::{ActionDecision, GameStateSnapshot, MoveDecision, Position};
pub use policy::{PolicyConfig, StrategyPolicy, TurnContext};
pub use protocol::{EngineLink, Loadout, run_match};
