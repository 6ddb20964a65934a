//! Dead-end compression.
//!
//! A `Backward` marks a dead end. The moves on either side of it that cancel
//! in pairs (left going in, right coming out, and so on) are the detour into
//! that dead end; the first pair that does not cancel is where the robot
//! entered the detour and where it finally left. The whole bracket collapses
//! into the net move of that outer pair.
//!
//! The scan restarts from the front after every collapse: removing a bracket
//! can bring a new dead end next to moves that now cancel around it.
//!
//! The outer pair's codes are added as heading changes and wrapped back into
//! 1..=4 (see [`Move::combine`]), so `F B R` nets `L` rather than a sum of 5.

use tracing::debug;

use crate::model::Move;

/// Collapse every dead-end detour in `moves` into its net move.
///
/// Runs to a fixed point, so compressing twice changes nothing. A `Backward`
/// at either end of the sequence has no moves on one side to pair with and is
/// left in place.
pub fn compress(moves: &[Move]) -> Vec<Move> {
    let mut path = moves.to_vec();

    while let Some((i, j)) = next_collapse(&path) {
        let (enter, leave) = (path[i - j], path[i + j]);
        let net = enter.combine(leave);
        debug!(
            "collapsing {} moves around dead end at {i}: {enter}..{leave} -> {net}",
            2 * j + 1
        );
        path.splice(i - j..=i + j, [net]);
    }

    path
}

/// The first dead end, scanning from the front, that has a bracket.
///
/// Returns the dead end's index and the bracket's half-width.
fn next_collapse(path: &[Move]) -> Option<(usize, usize)> {
    path.iter()
        .enumerate()
        .filter(|(_, m)| **m == Move::Backward)
        .find_map(|(i, _)| bracket(path, i).map(|j| (i, j)))
}

/// Half-width of the bracket around the dead end at `i`.
///
/// Walks outward while the pair at the current width cancels and a wider
/// pair still fits inside the sequence. The pair at the returned width is the
/// one to combine.
fn bracket(path: &[Move], i: usize) -> Option<usize> {
    if i == 0 || i + 1 >= path.len() {
        return None;
    }
    let mut j = 1;
    while i > j && i + j + 1 < path.len() && path[i - j].cancels(path[i + j]) {
        j += 1;
    }
    Some(j)
}
