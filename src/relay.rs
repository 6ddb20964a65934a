//! The receiving robot: acknowledges each move radioed by the searcher.
//!
//! A single reactive state. Every received integer is decoded into a move,
//! signalled with the same light and tone the sender used, and kept in
//! order so a follower can retrace the route later.

use tracing::{debug, warn};

use crate::cue;
use crate::error::Result;
use crate::hardware::{Feedback, Radio};
use crate::model::Move;

pub struct Receiver<D> {
    device: D,
    route: Vec<Move>,
}

impl<D: Feedback + Radio> Receiver<D> {
    /// Join `group` and start listening.
    pub fn new(mut device: D, group: u8) -> Self {
        device.set_group(group);
        Self {
            device,
            route: Vec::new(),
        }
    }

    /// Handle one received value.
    ///
    /// Values outside 1..=4 are rejected and leave the route untouched.
    pub fn on_receive(&mut self, value: i32) -> Result<Move> {
        let m = Move::try_from(value).inspect_err(|e| warn!("dropping radio value: {e}"))?;
        if m == Move::Backward {
            warn!("received a dead end; the route has no cue for it");
        }
        debug!("received move #{} ({m})", self.route.len());
        cue::signal(&mut self.device, m);
        self.route.push(m);
        Ok(m)
    }

    /// Moves received so far, in order.
    pub fn route(&self) -> &[Move] {
        &self.route
    }

    #[cfg(test)]
    pub fn into_device(self) -> D {
        self.device
    }
}
