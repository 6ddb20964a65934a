//! Collaborator interfaces: what the mission needs from the robot.
//!
//! Sensing, motion, feedback and radio are each a small trait so the
//! navigation core can run against real hardware, the simulator in
//! [`crate::sim`], or a scripted double in tests.
//!
//! Every call blocks until the hardware is done. Sensing and radio may
//! fail and are retried through [`with_retries`]. Motion is never retried.

use tracing::warn;

/// Errors reported by a collaborator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HardwareError {
    #[error("sensor unavailable: {0}")]
    SensorUnavailable(String),

    #[error("drive blocked by a wall while heading {heading}")]
    Blocked { heading: String },

    #[error("radio down: {0}")]
    RadioDown(String),
}

pub type Result<T> = core::result::Result<T, HardwareError>;

/// Direction of an in-place quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

/// Headlight selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Light {
    Left,
    Right,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
}

/// Patterns for the LED matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// The target has been located.
    Found,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    C4,
    E4,
    G4,
    C5,
}

/// Note or rest length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Beat {
    Half,
    Whole,
    Breve,
}

/// Forward-facing ultrasonic range finder.
pub trait RangeSensor {
    fn distance_cm(&mut self) -> Result<f32>;
}

/// Magnetometer used to detect the target.
pub trait FieldSensor {
    fn field_strength(&mut self) -> Result<f32>;
}

/// Differential drive.
pub trait Drive {
    /// Quarter turn in place.
    fn turn(&mut self, direction: Turn, speed: u8) -> Result<()>;

    /// Drive `distance_cm` with the given wheel speeds. Negative speeds reverse.
    fn drive(&mut self, left: i16, right: i16, distance_cm: f32) -> Result<()>;
}

/// Lights, LED matrix and buzzer. Fire and forget.
pub trait Feedback {
    fn light(&mut self, light: Light, color: Color);
    fn lights_off(&mut self);
    fn show(&mut self, icon: Icon);
    fn play(&mut self, tone: Tone, beat: Beat);
    fn rest(&mut self, beat: Beat);
}

/// Point-to-point radio carrying small integers.
pub trait Radio {
    fn set_group(&mut self, group: u8);
    fn send(&mut self, value: i32) -> Result<()>;
}

/// Everything a mission drives.
pub trait Robot: RangeSensor + FieldSensor + Drive + Feedback + Radio {}

impl<T: RangeSensor + FieldSensor + Drive + Feedback + Radio> Robot for T {}

/// Run `op` up to `attempts` times, returning the first success or the last error.
pub fn with_retries<T>(
    attempts: u32,
    what: &str,
    mut op: impl FnMut() -> Result<T>,
) -> Result<T> {
    let attempts = attempts.max(1);
    let mut attempt = 1;
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(e) if attempt < attempts => {
                warn!("{what} failed (attempt {attempt}/{attempts}): {e}");
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retries_until_success() {
        let mut calls = 0;
        let value = with_retries(3, "read", || {
            calls += 1;
            if calls < 3 {
                Err(HardwareError::SensorUnavailable("noise".into()))
            } else {
                Ok(42)
            }
        })
        .unwrap();

        assert_eq!(value, 42);
        assert_eq!(calls, 3);
    }

    #[test]
    fn gives_up_with_last_error() {
        let mut calls = 0;
        let err = with_retries::<()>(2, "send", || {
            calls += 1;
            Err(HardwareError::RadioDown(format!("try {calls}")))
        })
        .unwrap_err();

        assert_eq!(calls, 2);
        assert_eq!(err, HardwareError::RadioDown("try 2".into()));
    }

    #[test]
    fn zero_attempts_still_tries_once() {
        let mut calls = 0;
        let _ = with_retries(0, "read", || {
            calls += 1;
            Ok(())
        });
        assert_eq!(calls, 1);
    }
}
