//! Mission orchestration: search, compress, transmit, invert, exit.
//!
//! A [`Mission`] is an explicit state stepper. Each call to
//! [`Mission::step`] does one unit of physical or computational work (one
//! cell searched, one move transmitted, one exit move driven, or one phase
//! change) so the caller can stop between any two steps. [`Mission::run`]
//! steps until done.
//!
//! ```text
//! Searching → Found → Compressing → Transmitting → Inverting → Exiting → Done
//! ```
//!
//! The mission owns the move log for the whole run. Only the current phase
//! reads or rewrites it.

use std::fmt;

use jiff::Timestamp;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::Config;
use crate::cue;
use crate::error::{MissionError, Result};
use crate::hardware::{Beat, Icon, Robot, Turn, with_retries};
use crate::model::{MissionReport, Move, MoveLog};
use crate::path::{compress, invert};
use crate::traverse::{advance, advance_one_cell, target_detected, turn};

/// Where a mission stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Searching,
    Found,
    Compressing,
    Transmitting,
    Inverting,
    Exiting,
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Searching => "searching",
            Self::Found => "found",
            Self::Compressing => "compressing",
            Self::Transmitting => "transmitting",
            Self::Inverting => "inverting",
            Self::Exiting => "exiting",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// One run from the maze entrance to the target and back out.
pub struct Mission<R> {
    robot: R,
    config: Config,
    id: Uuid,
    phase: Phase,
    started_at: Timestamp,

    /// Search log; holds the compressed path from `Compressing` on.
    log: MoveLog,
    searched: Vec<Move>,
    transmitted: Vec<i32>,
    exit: Vec<Move>,

    /// Next move to transmit or drive.
    cursor: usize,
    turned_around: bool,
}

impl<R: Robot> Mission<R> {
    /// Prepare a mission. The robot joins the configured radio group.
    pub fn new(mut robot: R, config: Config) -> Self {
        robot.set_group(config.radio.group);
        let id = Uuid::new_v4();
        info!("mission {} starting", &id.to_string()[..8]);
        Self {
            robot,
            config,
            id,
            phase: Phase::Searching,
            started_at: Timestamp::now(),
            log: MoveLog::new(),
            searched: Vec::new(),
            transmitted: Vec::new(),
            exit: Vec::new(),
            cursor: 0,
            turned_around: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current move log: raw while searching, compressed afterwards.
    #[cfg(test)]
    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    pub fn robot(&self) -> &R {
        &self.robot
    }

    #[cfg(test)]
    pub fn into_robot(self) -> R {
        self.robot
    }

    /// Step until the mission is done and report what happened.
    pub fn run(&mut self) -> Result<MissionReport> {
        while self.phase != Phase::Done {
            self.step()?;
        }
        Ok(self.report())
    }

    /// Do one unit of work and return the phase the mission is now in.
    ///
    /// A failed step leaves the phase unchanged.
    pub fn step(&mut self) -> Result<Phase> {
        let next = match self.phase {
            Phase::Searching => self.search_step()?,
            Phase::Found => self.announce(),
            Phase::Compressing => self.compress_log(),
            Phase::Transmitting => self.transmit_step()?,
            Phase::Inverting => self.invert_path(),
            Phase::Exiting => self.exit_step()?,
            Phase::Done => return Err(MissionError::AlreadyDone),
        };
        if next != self.phase {
            debug!("phase {} -> {next}", self.phase);
            self.phase = next;
        }
        Ok(next)
    }

    fn search_step(&mut self) -> Result<Phase> {
        if target_detected(&mut self.robot, &self.config)? {
            info!("target found after {} cells", self.log.len());
            self.robot.show(Icon::Found);
            return Ok(Phase::Found);
        }
        if let Some(max) = self.config.search.max_cells
            && self.log.len() >= max
        {
            return Err(MissionError::SearchTimeout {
                cells: self.log.len(),
            });
        }
        let m = advance_one_cell(&mut self.robot, &self.config)?;
        self.log.append(m);
        Ok(Phase::Searching)
    }

    fn announce(&mut self) -> Phase {
        cue::play_log(&mut self.robot, self.log.as_slice());
        Phase::Compressing
    }

    fn compress_log(&mut self) -> Phase {
        let compressed = compress(self.log.as_slice());
        self.searched = self.log.replace(compressed);
        info!(
            "compressed {} moves to {}",
            self.searched.len(),
            self.log.len()
        );
        self.cursor = 0;
        Phase::Transmitting
    }

    fn transmit_step(&mut self) -> Result<Phase> {
        let Some(m) = self.log.get(self.cursor) else {
            self.robot.rest(Beat::Breve);
            info!("transmitted {} moves", self.transmitted.len());
            return Ok(Phase::Inverting);
        };

        let value = m.code();
        let robot = &mut self.robot;
        with_retries(self.config.radio.send_attempts, "radio send", || {
            robot.send(value)
        })
        .map_err(|source| MissionError::TransmissionFailed {
            index: self.cursor,
            value,
            source,
        })?;
        debug!("sent move #{} ({m})", self.cursor);

        self.transmitted.push(value);
        cue::signal(&mut self.robot, m);
        self.cursor += 1;
        Ok(Phase::Transmitting)
    }

    fn invert_path(&mut self) -> Phase {
        self.exit = invert(self.log.as_slice());
        cue::play_route(&mut self.robot, &self.exit);
        self.cursor = 0;
        self.turned_around = false;
        Phase::Exiting
    }

    fn exit_step(&mut self) -> Result<Phase> {
        if !self.turned_around {
            self.about_face()?;
            advance(&mut self.robot, &self.config)?;
            self.turned_around = true;
            return Ok(Phase::Exiting);
        }

        let Some(&m) = self.exit.get(self.cursor) else {
            info!("left the maze");
            return Ok(Phase::Done);
        };

        match m {
            Move::Left => turn(&mut self.robot, &self.config, Turn::Left)?,
            Move::Forward => {}
            Move::Right => turn(&mut self.robot, &self.config, Turn::Right)?,
            Move::Backward => self.about_face()?,
        }
        advance(&mut self.robot, &self.config)?;
        self.cursor += 1;
        Ok(Phase::Exiting)
    }

    fn about_face(&mut self) -> Result<()> {
        turn(&mut self.robot, &self.config, Turn::Right)?;
        turn(&mut self.robot, &self.config, Turn::Right)
    }

    fn report(&self) -> MissionReport {
        MissionReport {
            id: self.id,
            cells: self.searched.len(),
            searched: self.searched.clone(),
            compressed: self.log.as_slice().to_vec(),
            transmitted: self.transmitted.clone(),
            exit: self.exit.clone(),
            started_at: self.started_at,
            finished_at: Timestamp::now(),
        }
    }
}
