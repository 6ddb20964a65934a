//! Mission report: what one run searched, sent, and replayed.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Move;

/// Summary of a finished mission, written out by `mazerun run`.
///
/// The mission itself keeps nothing once it is done; this is the only
/// record, and only the host ever writes it anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionReport {
    pub id: Uuid,

    /// Cells advanced through while searching.
    pub cells: usize,

    /// The raw move log, before compression.
    pub searched: Vec<Move>,

    /// The log after dead-end detours were collapsed.
    pub compressed: Vec<Move>,

    /// Integers actually handed to the radio, in order.
    pub transmitted: Vec<i32>,

    /// The route replayed to leave the maze.
    pub exit: Vec<Move>,

    pub started_at: Timestamp,
    pub finished_at: Timestamp,
}
