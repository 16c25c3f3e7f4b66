//! The per-turn decision machine.
//!
//! Invoked twice per turn with the same [`TurnContext`]: once for the move
//! phase, once (on a refreshed snapshot) for the action phase. Given the
//! same snapshot and context, the produced decision is always the same.

use tracing::debug;

use crate::catalog::{CropCatalog, CropType, ItemType};
use crate::geometry;
use crate::ledger::ResourceLedger;
use crate::model::{ActionDecision, GameStateSnapshot, MoveDecision, Position, Tile};
use crate::policy::{FocusRule, Mode, PendingPlant, PolicyConfig, TurnContext};
use crate::reach;

/// The state machine turning snapshots into decisions.
#[derive(Debug, Clone)]
pub struct StrategyPolicy {
    config: PolicyConfig,
    catalog: CropCatalog,
}

impl StrategyPolicy {
    /// Create a policy from a configuration and the crop catalog.
    #[must_use]
    pub const fn new(config: PolicyConfig, catalog: CropCatalog) -> Self {
        Self { config, catalog }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Create the match-lifetime context for this configuration.
    #[must_use]
    pub fn initial_context(&self) -> TurnContext {
        let mode = if self.config.combat.is_some_and(|c| c.scout_opening) {
            Mode::Scouting
        } else {
            Mode::Farming
        };
        TurnContext::new(mode, &self.config.opening_buys)
    }

    /// Move phase: pick where to stand this turn.
    ///
    /// The destination always lies in the move-range reachable set of the
    /// given snapshot.
    pub fn decide_move(&self, snapshot: &GameStateSnapshot, ctx: &mut TurnContext) -> MoveDecision {
        debug!(turn = snapshot.turn, feedback = ?snapshot.feedback, "move phase");
        Self::drop_stale_plantings(snapshot, ctx);
        self.transition(snapshot, ctx);

        let me = snapshot.me();
        let target = match ctx.mode {
            Mode::Scouting | Mode::Attacking => snapshot.opponent().position,
            Mode::Returning => Self::grocer_target(snapshot)
                .unwrap_or_else(|| self.farming_target(snapshot, ctx)),
            Mode::Farming => self.farming_target(snapshot, ctx),
        };

        let options = reach::reachable(&snapshot.tile_map, me.position, me.move_radius);
        let destination = reach::move_toward(&options, target);
        debug!(mode = ?ctx.mode, ?target, ?destination, "resolved move");
        MoveDecision { destination }
    }

    /// Action phase: harvest, plant, buy, use the item, or idle.
    pub fn decide_action(
        &self,
        snapshot: &GameStateSnapshot,
        ctx: &mut TurnContext,
    ) -> ActionDecision {
        debug!(turn = snapshot.turn, feedback = ?snapshot.feedback, "action phase");
        let decision = if ctx.mode == Mode::Attacking {
            self.attack_action(snapshot, ctx)
        } else {
            self.farm_action(snapshot, ctx)
        };
        debug!(mode = ?ctx.mode, ?decision, "resolved action");
        decision
    }

    /// Apply mode transitions for this snapshot.
    fn transition(&self, snapshot: &GameStateSnapshot, ctx: &mut TurnContext) {
        if let Some(combat) = self.config.combat
            && ctx.mode == Mode::Scouting
            && snapshot.turn >= combat.checkpoint_turn
        {
            let dist = snapshot
                .me()
                .position
                .distance(snapshot.opponent().position);
            ctx.mode = if dist < combat.engage_distance {
                Mode::Attacking
            } else {
                Mode::Farming
            };
            debug!(turn = snapshot.turn, dist, mode = ?ctx.mode, "scout checkpoint");
        }

        let harvested = snapshot.me().harvested_inventory.len();
        match ctx.mode {
            Mode::Farming if harvested > self.config.sell_threshold => {
                ctx.mode = Mode::Returning;
            }
            Mode::Returning if harvested == 0 => ctx.mode = Mode::Farming,
            _ => {}
        }
    }

    /// The farming move ladder: sell/restock trip, band row, queued site,
    /// or hold.
    fn farming_target(&self, snapshot: &GameStateSnapshot, ctx: &TurnContext) -> Position {
        let me = snapshot.me();
        let cfg = &self.config;
        let ledger = ResourceLedger::new(me, &self.catalog);

        let wants_sell = ledger.harvested_count() > cfg.sell_threshold;
        let wants_restock = ctx.pending_plants.is_empty()
            && ledger.total_seeds() == 0
            && ledger.money() >= cfg.restock_min_money
            && (snapshot.turn <= cfg.restock_until_turn || !ctx.bought_starter_seeds);
        if (wants_sell || wants_restock)
            && let Some(grocer) = Self::grocer_target(snapshot)
        {
            return grocer;
        }

        if ledger.total_seeds() > 0
            && let Some(row) = geometry::planting_row_on_board(
                snapshot.turn,
                cfg.band,
                snapshot.tile_map.height(),
            )
        {
            return Position::new(me.position.x, row);
        }

        if let Some(site) = Self::actionable_planting(snapshot, ctx) {
            return site;
        }

        me.position
    }

    /// The nearest Green Grocer tile, if the board has one.
    fn grocer_target(snapshot: &GameStateSnapshot) -> Option<Position> {
        reach::nearest(
            snapshot.tile_map.green_grocers(),
            snapshot.me().position,
        )
    }

    /// The first queued planting worth walking to: due and still cropped
    /// (harvest trip), or not yet due and still empty (the planting never
    /// took; replant trip).
    fn actionable_planting(snapshot: &GameStateSnapshot, ctx: &TurnContext) -> Option<Position> {
        ctx.pending_plants.iter().find_map(|entry| {
            let due = entry.ready_turn <= snapshot.turn;
            let cropped =
                geometry::contains_crop(&snapshot.tile_map, &[entry.position]);
            ((due && cropped) || (!due && !cropped)).then_some(entry.position)
        })
    }

    /// Drop queue entries that are due but no longer host a crop: they were
    /// harvested or destroyed.
    fn drop_stale_plantings(snapshot: &GameStateSnapshot, ctx: &mut TurnContext) {
        ctx.pending_plants.retain(|entry| {
            let due = entry.ready_turn <= snapshot.turn;
            let cropped =
                geometry::contains_crop(&snapshot.tile_map, &[entry.position]);
            cropped || !due
        });
    }

    /// Harvest-range positions holding a mature crop, row-major.
    fn harvest_candidates(snapshot: &GameStateSnapshot) -> Vec<Position> {
        let me = snapshot.me();
        reach::reachable(&snapshot.tile_map, me.position, me.harvest_radius)
            .into_iter()
            .filter(|&pos| {
                snapshot
                    .tile_map
                    .get(pos)
                    .is_some_and(Tile::has_mature_crop)
            })
            .collect()
    }

    /// The action ladder for every non-attacking mode.
    fn farm_action(&self, snapshot: &GameStateSnapshot, ctx: &mut TurnContext) -> ActionDecision {
        let me = snapshot.me();
        let cfg = &self.config;
        let ledger = ResourceLedger::new(me, &self.catalog);

        let mature = Self::harvest_candidates(snapshot);
        if !mature.is_empty() {
            ctx.pending_plants
                .retain(|entry| !mature.contains(&entry.position));
            return ActionDecision::Harvest(mature);
        }

        let focus = self.focus_crop(&ledger);
        let on_grocer = snapshot
            .tile_map
            .get(me.position)
            .is_some_and(|tile| tile.tile_type.is_green_grocer());
        let planting_row = geometry::planting_row_on_board(
            snapshot.turn,
            cfg.band,
            snapshot.tile_map.height(),
        );

        if ledger.has_seed(focus)
            && !on_grocer
            && planting_row == Some(me.position.y)
            && snapshot.turn >= ctx.resume_after_turn
        {
            let targets = self.plant_targets(snapshot);
            if !targets.is_empty() {
                let growth = self.catalog.get(focus).growth_time;
                for &position in &targets {
                    ctx.pending_plants.push_back(PendingPlant {
                        position,
                        ready_turn: snapshot.turn + growth,
                    });
                }
                ctx.resume_after_turn = snapshot.turn + cfg.plant_cooldown;
                return ActionDecision::plant_all(focus, targets);
            }
        }

        if on_grocer && snapshot.turn <= cfg.buy_cutoff_turn {
            let crop = ctx.buy_queue.front().copied().unwrap_or(focus);
            let quantity = ledger.affordable_count_capped(crop, cfg.batch_cap);
            if quantity > 0 {
                if ctx.buy_queue.front() == Some(&crop) {
                    ctx.buy_queue.pop_front();
                }
                ctx.bought_starter_seeds = ctx.buy_queue.is_empty();
                return ActionDecision::buy_one(crop, quantity);
            }
        }

        ActionDecision::DoNothing
    }

    /// The attacking override: harvest first, then spend the item on a
    /// distant opponent, else idle.
    fn attack_action(&self, snapshot: &GameStateSnapshot, ctx: &mut TurnContext) -> ActionDecision {
        let mature = Self::harvest_candidates(snapshot);
        if !mature.is_empty() {
            ctx.pending_plants
                .retain(|entry| !mature.contains(&entry.position));
            return ActionDecision::Harvest(mature);
        }

        if let Some(combat) = self.config.combat {
            let me = snapshot.me();
            let dist = me.position.distance(snapshot.opponent().position);
            if dist > combat.item_min_distance && me.item != ItemType::None {
                return ActionDecision::UseItem;
            }
        }

        ActionDecision::DoNothing
    }

    /// The crop the policy is currently buying and planting.
    fn focus_crop(&self, ledger: &ResourceLedger<'_>) -> CropType {
        match self.config.focus {
            FocusRule::MoneyTiers {
                premium,
                threshold,
                fallback,
            } => {
                if ledger.money() >= threshold {
                    premium
                } else {
                    fallback
                }
            }
            FocusRule::LargestHolding { default } => {
                let mut best = default;
                let mut best_count = 0;
                for crop in CropType::ALL {
                    let count = ledger.seed_count(crop);
                    if count > best_count {
                        best = crop;
                        best_count = count;
                    }
                }
                best
            }
        }
    }

    /// Pattern positions that are plant-reachable and crop-free.
    fn plant_targets(&self, snapshot: &GameStateSnapshot) -> Vec<Position> {
        let me = snapshot.me();
        let map = &snapshot.tile_map;
        let within = reach::reachable(map, me.position, me.plant_radius);

        self.config
            .plant_offsets
            .iter()
            .filter_map(|&(dx, dy)| {
                let pos = me.position.offset(dx, dy, map.width(), map.height())?;
                let tile = map.get(pos)?;
                (within.contains(&pos)
                    && !tile.has_crop()
                    && !tile.tile_type.is_green_grocer())
                .then_some(pos)
            })
            .collect()
    }
}
