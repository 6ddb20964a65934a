//! CLI interface for mazerun.
//!
//! Runs missions against the maze simulator and exposes the pure path
//! transforms. Each subcommand is non-interactive: arguments in, structured
//! output out. Logs go to stderr so stdout stays machine-readable.

mod format;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::mission::Mission;
use crate::model::Move;
use crate::path::{compress, invert};
use crate::relay::Receiver;
use crate::sim::{ConsoleDevice, Maze, SimRobot};

use format::{describe_report, format_codes, format_moves};

/// Mazerun: find the target, shorten the route, relay it, and get out.
#[derive(Debug, Parser)]
#[command(name = "mazerun", version, after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Config file. Defaults to `~/.mazerun/config.toml` when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r"Examples:
  mazerun run mazes/branched.txt --out report.json
  mazerun run mazes/pockets.txt --max-cells 40
  mazerun compress L F L B R F
  mazerun invert 1 2 2
  mazerun receive 1 2 3 4

Moves are written as codes 1-4 or letters L/F/R/B (left, forward, right, backward).";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a full mission in a simulated maze.
    ///
    /// The mission report JSON is written to `--out` (if given) or stdout.
    /// A human-readable summary is printed to stderr.
    Run {
        /// ASCII maze file.
        maze: PathBuf,

        /// Write the report JSON to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,

        /// Give up after this many cells (overrides the config).
        #[arg(long)]
        max_cells: Option<usize>,
    },

    /// Collapse dead-end detours in a move sequence.
    Compress {
        #[arg(required = true)]
        moves: Vec<Move>,
    },

    /// Derive the return route for a move sequence.
    Invert {
        #[arg(required = true)]
        moves: Vec<Move>,
    },

    /// Feed raw radio values through the receiving robot.
    Receive {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i32>,
    },
}

/// Run the CLI, returning an error message on failure.
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).map_err(|e| e.to_string())?;

    match cli.command {
        Command::Run {
            maze,
            out,
            max_cells,
        } => cmd_run(config, &maze, out, max_cells),
        Command::Compress { moves } => {
            print_path(&compress(&moves));
            Ok(())
        }
        Command::Invert { moves } => {
            print_path(&invert(&moves));
            Ok(())
        }
        Command::Receive { values } => cmd_receive(&config, &values),
    }
}

fn cmd_run(
    mut config: Config,
    maze_path: &Path,
    out: Option<PathBuf>,
    max_cells: Option<usize>,
) -> Result<(), String> {
    if max_cells.is_some() {
        config.search.max_cells = max_cells;
        config.validate().map_err(|e| e.to_string())?;
    }

    let maze = Maze::load(maze_path)
        .map_err(|e| format!("failed to load {}: {e}", maze_path.display()))?;
    let robot = SimRobot::new(maze, config.drive.cell_length_cm);

    let mut mission = Mission::new(robot, config);
    let report = mission
        .run()
        .map_err(|e| format!("mission failed while {}: {e}", mission.phase()))?;

    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| format!("failed to serialize report: {e}"))?;

    match out {
        Some(path) => {
            fs::write(&path, &json)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            eprintln!("Report → {}", path.display());
        }
        None => println!("{json}"),
    }
    eprintln!("{}", describe_report(&report));
    let robot = mission.robot();
    eprintln!(
        "Left at {:?} heading {} after entering {} cells",
        robot.position(),
        robot.heading(),
        robot.visited().len() - 1,
    );

    Ok(())
}

fn cmd_receive(config: &Config, values: &[i32]) -> Result<(), String> {
    let mut receiver = Receiver::new(ConsoleDevice::default(), config.radio.group);
    let mut rejected = 0;
    for &value in values {
        if let Err(e) = receiver.on_receive(value) {
            eprintln!("Rejected: {e}");
            rejected += 1;
        }
    }

    print_path(receiver.route());
    if rejected > 0 {
        return Err(format!("{rejected} value(s) were not moves"));
    }
    Ok(())
}

fn print_path(moves: &[Move]) {
    println!("{}", format_codes(moves));
    eprintln!("{}", format_moves(moves));
}
