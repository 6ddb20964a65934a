//! Simulated robot moving cell by cell through a [`Maze`].

use tracing::trace;

use crate::hardware::{
    Beat, Color, Drive, Feedback, FieldSensor, HardwareError, Icon, Light, Radio, RangeSensor,
    Result, Tone, Turn,
};

use super::{Cell, Event, Heading, Maze};

/// Range reported when the next cell is a wall. Inside the wall threshold,
/// outside the back-off distance.
const WALL_CM: f32 = 8.0;
const OPEN_CM: f32 = 120.0;
const TARGET_FIELD: f32 = 480.0;
const AMBIENT_FIELD: f32 = 45.0;

pub struct SimRobot {
    maze: Maze,
    position: (usize, usize),
    heading: Heading,
    cell_length_cm: f32,
    events: Vec<Event>,
    visited: Vec<(usize, usize)>,
    radio_failures: usize,
}

impl SimRobot {
    /// Place a robot on the maze's start cell, facing its start heading.
    pub fn new(maze: Maze, cell_length_cm: f32) -> Self {
        let position = maze.start();
        let heading = maze.start_heading();
        Self {
            maze,
            position,
            heading,
            cell_length_cm,
            events: Vec::new(),
            visited: vec![position],
            radio_failures: 0,
        }
    }

    /// Make the next `count` radio sends fail.
    #[cfg(test)]
    #[must_use]
    pub fn with_radio_failures(mut self, count: usize) -> Self {
        self.radio_failures = count;
        self
    }

    pub fn position(&self) -> (usize, usize) {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn on_target(&self) -> bool {
        self.maze.cell(self.position) == Cell::Target
    }

    /// Every cell entered, starting with the start cell.
    pub fn visited(&self) -> &[(usize, usize)] {
        &self.visited
    }

    #[cfg(test)]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Values handed to the radio, in order.
    #[cfg(test)]
    pub fn sent(&self) -> Vec<i32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Sent(v) => Some(*v),
                _ => None,
            })
            .collect()
    }
}

impl RangeSensor for SimRobot {
    fn distance_cm(&mut self) -> Result<f32> {
        if self.maze.is_open(self.position, self.heading) {
            Ok(OPEN_CM)
        } else {
            Ok(WALL_CM)
        }
    }
}

impl FieldSensor for SimRobot {
    fn field_strength(&mut self) -> Result<f32> {
        if self.on_target() {
            Ok(TARGET_FIELD)
        } else {
            Ok(AMBIENT_FIELD)
        }
    }
}

impl Drive for SimRobot {
    fn turn(&mut self, direction: Turn, _speed: u8) -> Result<()> {
        self.events.push(Event::Turn(direction));
        self.heading = match direction {
            Turn::Left => self.heading.left(),
            Turn::Right => self.heading.right(),
        };
        Ok(())
    }

    fn drive(&mut self, left: i16, right: i16, distance_cm: f32) -> Result<()> {
        self.events.push(Event::Drive {
            left,
            right,
            distance_cm,
        });
        // Reversing is only ever a small back-off inside the current cell.
        if left < 0 && right < 0 {
            return Ok(());
        }

        let cells = (distance_cm / self.cell_length_cm).round() as usize;
        for _ in 0..cells {
            if !self.maze.is_open(self.position, self.heading) {
                return Err(HardwareError::Blocked {
                    heading: self.heading.to_string(),
                });
            }
            if let Some(next) = self.heading.step(self.position) {
                self.position = next;
                self.visited.push(next);
                trace!("entered {:?} heading {}", next, self.heading);
            }
        }
        Ok(())
    }
}

impl Feedback for SimRobot {
    fn light(&mut self, light: Light, color: Color) {
        self.events.push(Event::Light(light, color));
    }

    fn lights_off(&mut self) {
        self.events.push(Event::LightsOff);
    }

    fn show(&mut self, icon: Icon) {
        self.events.push(Event::Show(icon));
    }

    fn play(&mut self, tone: Tone, beat: Beat) {
        self.events.push(Event::Play(tone, beat));
    }

    fn rest(&mut self, beat: Beat) {
        self.events.push(Event::Rest(beat));
    }
}

impl Radio for SimRobot {
    fn set_group(&mut self, group: u8) {
        self.events.push(Event::Group(group));
    }

    fn send(&mut self, value: i32) -> Result<()> {
        if self.radio_failures > 0 {
            self.radio_failures -= 1;
            return Err(HardwareError::RadioDown("simulated dropout".to_string()));
        }
        self.events.push(Event::Sent(value));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORRIDOR: &str = "\
#####
#^..#
#.#T#
#####
";

    fn robot() -> SimRobot {
        SimRobot::new(Maze::parse(CORRIDOR).unwrap(), 30.0)
    }

    #[test]
    fn ranges_reflect_the_heading() {
        let mut robot = robot();
        assert_eq!(robot.distance_cm().unwrap(), WALL_CM);
        robot.turn(Turn::Right, 95).unwrap();
        assert_eq!(robot.distance_cm().unwrap(), OPEN_CM);
    }

    #[test]
    fn drives_cell_by_cell() {
        let mut robot = robot();
        robot.turn(Turn::Right, 95).unwrap();
        robot.drive(10, 10, 60.0).unwrap();
        assert_eq!(robot.position(), (1, 3));
        assert_eq!(robot.visited(), &[(1, 1), (1, 2), (1, 3)]);

        robot.turn(Turn::Right, 95).unwrap();
        robot.drive(10, 10, 30.0).unwrap();
        assert!(robot.on_target());
        assert_eq!(robot.field_strength().unwrap(), TARGET_FIELD);
    }

    #[test]
    fn driving_into_a_wall_fails() {
        let mut robot = robot();
        let err = robot.drive(10, 10, 30.0).unwrap_err();
        assert_eq!(
            err,
            HardwareError::Blocked {
                heading: "north".to_string()
            }
        );
        assert_eq!(robot.position(), (1, 1));
    }

    #[test]
    fn backing_off_stays_in_the_cell() {
        let mut robot = robot();
        robot.drive(-10, -10, 3.0).unwrap();
        assert_eq!(robot.position(), (1, 1));
    }

    #[test]
    fn radio_dropouts_then_recovers() {
        let mut robot = robot().with_radio_failures(1);
        assert!(robot.send(2).is_err());
        robot.send(3).unwrap();
        assert_eq!(robot.sent(), vec![3]);
    }
}
