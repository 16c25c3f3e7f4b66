//! The two-phase turn protocol.
//!
//! Each turn is two exchanges: fetch a snapshot, answer with a move; fetch a
//! refreshed snapshot, answer with an action. The loop never ends on its own;
//! the match's end arrives as a transport failure on fetch.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{ItemType, UpgradeType};
use crate::error::{TransportError, TransportResult};
use crate::model::{ActionDecision, GameStateSnapshot, MoveDecision};
use crate::policy::StrategyPolicy;

/// Equipment announced once before the first turn and fixed for the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loadout {
    /// Consumable item.
    pub item: ItemType,
    /// Permanent upgrade.
    pub upgrade: UpgradeType,
}

/// The engine boundary the protocol drives.
///
/// Sends are fire-and-forget: the engine's reaction is only ever observed in
/// the next snapshot.
pub trait EngineLink {
    /// Announce the equipment choice.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot be reached.
    fn register(&mut self, loadout: Loadout) -> TransportResult<()>;

    /// Block until the next snapshot arrives.
    ///
    /// # Errors
    ///
    /// Returns an error when the engine hangs up or sends garbage; both end
    /// the match.
    fn fetch(&mut self) -> TransportResult<GameStateSnapshot>;

    /// Send the movement half of the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the decision cannot be delivered.
    fn send_move(&mut self, decision: &MoveDecision) -> TransportResult<()>;

    /// Send the action half of the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the decision cannot be delivered.
    fn send_action(&mut self, decision: &ActionDecision) -> TransportResult<()>;
}

/// Drive the match until the transport fails.
///
/// Registers the loadout, then alternates strictly: fetch, move, fetch,
/// action. The action for a turn is only computed after the move has been
/// acknowledged by a fresh snapshot. Returns the failure that ended the
/// match; there is no other way out of the loop.
pub fn run_match<L: EngineLink>(
    link: &mut L,
    policy: &StrategyPolicy,
    loadout: Loadout,
) -> TransportError {
    let mut ctx = policy.initial_context();

    if let Err(e) = link.register(loadout) {
        return e;
    }
    info!(?loadout, "registered, entering match loop");

    loop {
        let snapshot = match link.fetch() {
            Ok(snapshot) => snapshot,
            Err(e) => return e,
        };
        let decision = policy.decide_move(&snapshot, &mut ctx);
        if let Err(e) = link.send_move(&decision) {
            return e;
        }

        let snapshot = match link.fetch() {
            Ok(snapshot) => snapshot,
            Err(e) => return e,
        };
        let decision = policy.decide_action(&snapshot, &mut ctx);
        if let Err(e) = link.send_action(&decision) {
            return e;
        }
    }
}
