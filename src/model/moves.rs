//! Move types: the per-cell navigation alphabet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MissionError;

/// What the robot did at one maze cell, relative to the heading it arrived with.
///
/// Encoded 1 to 4. The code doubles as the number of headings tried by the
/// wall-following rule before an opening was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum Move {
    Left = 1,
    Forward = 2,
    Right = 3,
    Backward = 4,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Left, Move::Forward, Move::Right, Move::Backward];

    /// The integer code carried over the radio.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// The move that undoes this one when the path is travelled in reverse.
    ///
    /// `4 - m` for Left, Forward and Right. A U-turn stays a U-turn.
    pub fn opposite(self) -> Move {
        match self {
            Move::Left => Move::Right,
            Move::Forward => Move::Forward,
            Move::Right => Move::Left,
            Move::Backward => Move::Backward,
        }
    }

    /// Whether `self` followed later by `other` leaves the robot on its original line.
    ///
    /// Codes summing to exactly 4. A `Backward` never cancels anything.
    pub fn cancels(self, other: Move) -> bool {
        self.code() + other.code() == 4
    }

    /// Net move of entering a detour with `self` and leaving it with `other`.
    ///
    /// The codes are summed as heading changes and wrapped back into 1..=4.
    pub fn combine(self, other: Move) -> Move {
        let wrapped = (self.code() + other.code() - 1).rem_euclid(4) + 1;
        match wrapped {
            1 => Move::Left,
            2 => Move::Forward,
            3 => Move::Right,
            _ => Move::Backward,
        }
    }

    /// One-letter name used on the command line and in summaries.
    pub fn letter(self) -> char {
        match self {
            Move::Left => 'L',
            Move::Forward => 'F',
            Move::Right => 'R',
            Move::Backward => 'B',
        }
    }
}

impl From<Move> for i32 {
    fn from(m: Move) -> Self {
        m.code()
    }
}

impl TryFrom<i32> for Move {
    type Error = MissionError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Move::Left),
            2 => Ok(Move::Forward),
            3 => Ok(Move::Right),
            4 => Ok(Move::Backward),
            other => Err(MissionError::InvalidMoveValue(other)),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Parses either the numeric code (`"3"`) or the letter (`"R"`, case-insensitive).
impl FromStr for Move {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i32>() {
            return Move::try_from(code).map_err(|e| e.to_string());
        }
        match s.to_ascii_uppercase().as_str() {
            "L" | "LEFT" => Ok(Move::Left),
            "F" | "FORWARD" => Ok(Move::Forward),
            "R" | "RIGHT" => Ok(Move::Right),
            "B" | "BACKWARD" => Ok(Move::Backward),
            _ => Err(format!("not a move: '{s}' (expected 1-4 or L/F/R/B)")),
        }
    }
}
