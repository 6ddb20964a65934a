//! The move log: one entry per maze cell advanced through.

use serde::{Deserialize, Serialize};

use super::Move;

/// Ordered record of moves taken while searching.
///
/// Append-only during the search. Afterwards only replaced wholesale,
/// by the compressed path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, m: Move) {
        self.moves.push(m);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn get(&self, index: usize) -> Option<Move> {
        self.moves.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Swap in a rewritten sequence, returning the one it replaces.
    pub fn replace(&mut self, moves: Vec<Move>) -> Vec<Move> {
        std::mem::replace(&mut self.moves, moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_keeps_order() {
        let mut log = MoveLog::new();
        log.append(Move::Left);
        log.append(Move::Backward);
        log.append(Move::Right);

        assert_eq!(log.len(), 3);
        assert_eq!(log.get(1), Some(Move::Backward));
        assert_eq!(log.as_slice(), &[Move::Left, Move::Backward, Move::Right]);
        assert_eq!(log.get(3), None);
    }

    #[test]
    fn replace_swaps_whole_sequence() {
        let mut log = MoveLog::new();
        for m in [Move::Left, Move::Backward, Move::Right] {
            log.append(m);
        }
        let old = log.replace(vec![Move::Backward]);

        assert_eq!(old.len(), 3);
        assert_eq!(log.as_slice(), &[Move::Backward]);
    }
}
