//! Hardware-free robots.
//!
//! [`SimRobot`] drives through an ASCII maze and implements every
//! collaborator trait, so a whole mission can run on the host. Both it and
//! the scripted test double record what the mission asked of them as
//! [`Event`]s. [`ConsoleDevice`] stands in for the receiving robot and
//! logs its cues.

mod console;
mod maze;
mod robot;
#[cfg(test)]
mod scripted;

pub use console::ConsoleDevice;
pub use maze::{Cell, Heading, Maze};
pub use robot::SimRobot;
#[cfg(test)]
pub use scripted::ScriptedRobot;

use crate::hardware::{Beat, Color, Icon, Light, Tone, Turn};

/// One call the mission made on a simulated robot.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Turn(Turn),
    Drive {
        left: i16,
        right: i16,
        distance_cm: f32,
    },
    Light(Light, Color),
    LightsOff,
    Show(Icon),
    Play(Tone, Beat),
    Rest(Beat),
    Group(u8),
    Sent(i32),
}
