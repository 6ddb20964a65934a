//! Output formatting for CLI display.

use crate::model::{MissionReport, Move};

/// Moves as letters: `L F B R`. An empty path is `(none)`.
pub(super) fn format_moves(moves: &[Move]) -> String {
    if moves.is_empty() {
        return "(none)".to_string();
    }
    moves
        .iter()
        .map(|m| m.letter().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Moves as their radio codes: `1 2 4 3`.
pub(super) fn format_codes(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| m.code().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Short human-readable summary of a finished mission.
pub(super) fn describe_report(report: &MissionReport) -> String {
    let short_id = &report.id.to_string()[..8];
    let elapsed = report.finished_at.duration_since(report.started_at);
    format!(
        "Mission {short_id}: target after {} cells ({:.1}s)\n\
         searched:   {}\n\
         compressed: {}\n\
         exit:       {}",
        report.cells,
        elapsed.as_secs_f64(),
        format_moves(&report.searched),
        format_moves(&report.compressed),
        format_moves(&report.exit),
    )
}
