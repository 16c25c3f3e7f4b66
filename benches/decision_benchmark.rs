//! Benchmarks for the per-turn decision path.
//!
//! One full turn is two policy calls on a 30x30 board; this measures the
//! reachability scan and the complete decision pair.

#![allow(missing_docs)]

use std::collections::BTreeMap;
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use cultivar::catalog::{CropCatalog, CropType, ItemType, TileType, UpgradeType};
use cultivar::model::{GameStateSnapshot, Player, Position, Tile, TileMap};
use cultivar::policy::{PolicyConfig, StrategyPolicy};
use cultivar::reach;

fn mid_game_snapshot() -> GameStateSnapshot {
    let mut map = TileMap::filled(30, 30, TileType::Grass).expect("non-empty board");
    map.set(Position::new(13, 0), Tile::new(TileType::GreenGrocer));
    map.set(Position::new(17, 0), Tile::new(TileType::GreenGrocer));

    let mut seed_inventory = BTreeMap::new();
    seed_inventory.insert(CropType::DuchamFruit, 10);

    let me = Player {
        name: "bench".to_string(),
        position: Position::new(7, 3),
        money: 600,
        seed_inventory,
        harvested_inventory: Vec::new(),
        move_radius: 10,
        harvest_radius: 2,
        plant_radius: 1,
        item: ItemType::None,
        upgrade: UpgradeType::None,
    };
    let mut opponent = me.clone();
    opponent.position = Position::new(22, 3);

    GameStateSnapshot {
        turn: 31,
        player1: me,
        player2: opponent,
        tile_map: map,
        player_slot: 1,
        feedback: Vec::new(),
    }
}

fn bench_reachable(c: &mut Criterion) {
    let snap = mid_game_snapshot();

    c.bench_function("reachable_r10", |b| {
        b.iter(|| {
            reach::reachable(
                black_box(&snap.tile_map),
                black_box(Position::new(15, 15)),
                black_box(10),
            )
        });
    });
}

fn bench_decision_pair(c: &mut Criterion) {
    let policy = StrategyPolicy::new(PolicyConfig::default(), CropCatalog::default());
    let snap = mid_game_snapshot();

    c.bench_function("decision_pair", |b| {
        b.iter(|| {
            let mut ctx = policy.initial_context();
            let mv = policy.decide_move(black_box(&snap), &mut ctx);
            let action = policy.decide_action(black_box(&snap), &mut ctx);
            black_box((mv, action))
        });
    });
}

criterion_group!(benches, bench_reachable, bench_decision_pair);
criterion_main!(benches);
