//! Radius-bounded reachability on the board.

use crate::model::{Position, TileMap};

/// All board positions within `radius` of `center`, row-major.
///
/// Uses the shared Chebyshev metric, so the result is the square window
/// around `center` clipped to the board. The enumeration order (ascending y,
/// then ascending x) is stable and defines downstream tie-breaking. `center`
/// itself is always a member when it is on the board.
#[must_use]
pub fn reachable(map: &TileMap, center: Position, radius: u16) -> Vec<Position> {
    let min_x = center.x.saturating_sub(radius);
    let min_y = center.y.saturating_sub(radius);
    let max_x = center.x.saturating_add(radius).min(map.width().saturating_sub(1));
    let max_y = center.y.saturating_add(radius).min(map.height().saturating_sub(1));

    let mut positions = Vec::new();
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            positions.push(Position::new(x, y));
        }
    }
    positions
}

/// The element of `candidates` closest to `target`.
///
/// Scans for a strict improvement, so the first minimal element wins — with
/// the row-major order from [`reachable`] this makes movement deterministic.
///
/// # Panics
///
/// Panics if `candidates` is empty. Callers always include at least the
/// player's own position (distance zero to itself), so an empty set is a
/// programming defect.
#[must_use]
pub fn move_toward(candidates: &[Position], target: Position) -> Position {
    assert!(
        !candidates.is_empty(),
        "move_toward called with an empty reachable set"
    );

    let mut best = candidates[0];
    let mut best_dist = best.distance(target);
    for &candidate in &candidates[1..] {
        let dist = candidate.distance(target);
        if dist < best_dist {
            best = candidate;
            best_dist = dist;
        }
    }
    best
}

/// The candidate closest to `from`, or `None` for an empty iterator.
///
/// Same first-minimum rule as [`move_toward`]; used to pick the nearest
/// Green Grocer when more than one exists.
#[must_use]
pub fn nearest(candidates: impl Iterator<Item = Position>, from: Position) -> Option<Position> {
    let mut best: Option<(Position, u16)> = None;
    for candidate in candidates {
        let dist = candidate.distance(from);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((candidate, dist)),
        }
    }
    best.map(|(pos, _)| pos)
}
