//! ASCII maze loader.
//!
//! ```text
//! #######
//! #..#.T#
//! #.##.##
//! #^....#
//! #######
//! ```
//!
//! `#` is a wall, `.` open floor, `T` the target cell. The start is `S`
//! (facing north) or an arrow `^ > v <` giving the starting heading.
//! Everything outside the grid counts as wall.

use std::fmt;
use std::fs;
use std::path::Path;

/// Errors that can occur while loading a maze.
#[derive(Debug, thiserror::Error)]
pub enum MazeError {
    #[error("failed to read maze: {0}")]
    Io(#[from] std::io::Error),

    #[error("maze is empty")]
    Empty,

    #[error("row {row} is {found} cells wide, expected {expected}")]
    Ragged {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unknown cell '{ch}' at row {row}, column {col}")]
    UnknownCell { row: usize, col: usize, ch: char },

    #[error("maze has no start cell (S, ^, >, v or <)")]
    MissingStart,

    #[error("maze has more than one start cell")]
    DuplicateStart,

    #[error("maze has no target cell (T)")]
    MissingTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Open,
    Target,
}

/// Compass heading on the grid. North is up (decreasing row).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    pub fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    pub fn right(self) -> Self {
        self.left().left().left()
    }

    /// The position one cell along this heading. `None` past row or column zero.
    pub fn step(self, (row, col): (usize, usize)) -> Option<(usize, usize)> {
        match self {
            Self::North => row.checked_sub(1).map(|r| (r, col)),
            Self::South => Some((row + 1, col)),
            Self::West => col.checked_sub(1).map(|c| (row, c)),
            Self::East => Some((row, col + 1)),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

/// A rectangular grid maze with one start and at least one target.
#[derive(Debug, Clone)]
pub struct Maze {
    cells: Vec<Vec<Cell>>,
    start: (usize, usize),
    heading: Heading,
}

impl Maze {
    pub fn load(path: &Path) -> Result<Self, MazeError> {
        Self::parse(&fs::read_to_string(path)?)
    }

    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .collect();
        let expected = lines.first().ok_or(MazeError::Empty)?.chars().count();

        let mut cells = Vec::with_capacity(lines.len());
        let mut start = None;
        let mut has_target = false;

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(MazeError::Ragged {
                    row,
                    found,
                    expected,
                });
            }

            let mut cells_row = Vec::with_capacity(found);
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '#' => Cell::Wall,
                    '.' => Cell::Open,
                    'T' => {
                        has_target = true;
                        Cell::Target
                    }
                    'S' | '^' | '>' | 'v' | '<' => {
                        if start.is_some() {
                            return Err(MazeError::DuplicateStart);
                        }
                        let heading = match ch {
                            '>' => Heading::East,
                            'v' => Heading::South,
                            '<' => Heading::West,
                            _ => Heading::North,
                        };
                        start = Some(((row, col), heading));
                        Cell::Open
                    }
                    ch => return Err(MazeError::UnknownCell { row, col, ch }),
                };
                cells_row.push(cell);
            }
            cells.push(cells_row);
        }

        let (start, heading) = start.ok_or(MazeError::MissingStart)?;
        if !has_target {
            return Err(MazeError::MissingTarget);
        }

        Ok(Self {
            cells,
            start,
            heading,
        })
    }

    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    pub fn start_heading(&self) -> Heading {
        self.heading
    }

    /// The cell at `pos`. Off-grid positions are walls.
    pub fn cell(&self, (row, col): (usize, usize)) -> Cell {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(Cell::Wall)
    }

    /// Whether the cell one step from `pos` along `heading` can be entered.
    pub fn is_open(&self, pos: (usize, usize), heading: Heading) -> bool {
        heading
            .step(pos)
            .is_some_and(|next| self.cell(next) != Cell::Wall)
    }
}
