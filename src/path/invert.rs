//! Path inversion: the route back out.

use crate::model::Move;

/// Reverse `moves` and map each through [`Move::opposite`].
///
/// `invert(p)[k] == p[n - 1 - k].opposite()`.
pub fn invert(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().copied().map(Move::opposite).collect()
}
