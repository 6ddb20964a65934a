//! Test double fed from queued sensor readings.

use std::collections::VecDeque;

use crate::hardware::{
    Beat, Color, Drive, Feedback, FieldSensor, HardwareError, Icon, Light, Radio, RangeSensor,
    Result, Tone, Turn,
};
use crate::model::Move;

use super::Event;

const BLOCKED_CM: f32 = 10.0;
const OPEN_CM: f32 = 100.0;
const FOUND_FIELD: f32 = 400.0;

/// Replays queued range and field readings. An empty range queue reads
/// open, an empty field queue reads zero.
#[derive(Default)]
pub struct ScriptedRobot {
    ranges: VecDeque<f32>,
    fields: VecDeque<f32>,
    range_failures: usize,
    radio_failures: usize,
    events: Vec<Event>,
}

impl ScriptedRobot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Readings that make the wall-following rule produce `moves`, with the
    /// target showing up right after the last one.
    pub fn for_search(moves: &[Move]) -> Self {
        let mut ranges = Vec::new();
        for m in moves {
            let blocked = (m.code() - 1) as usize;
            ranges.extend(std::iter::repeat_n(BLOCKED_CM, blocked));
            if *m != Move::Backward {
                ranges.push(OPEN_CM);
            }
        }
        let fields = std::iter::repeat_n(0.0, moves.len()).chain([FOUND_FIELD]);
        Self::new().with_ranges(ranges).with_fields(fields)
    }

    pub fn with_ranges(mut self, ranges: impl IntoIterator<Item = f32>) -> Self {
        self.ranges.extend(ranges);
        self
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = f32>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn with_range_failures(mut self, count: usize) -> Self {
        self.range_failures = count;
        self
    }

    pub fn with_radio_failures(mut self, count: usize) -> Self {
        self.radio_failures = count;
        self
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn ranges_left(&self) -> usize {
        self.ranges.len()
    }

    pub fn turns(&self) -> Vec<Turn> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Turn(t) => Some(*t),
                _ => None,
            })
            .collect()
    }

    /// Forward drives, one per cell.
    pub fn cells_driven(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Drive { left, right, .. } if *left > 0 && *right > 0))
            .count()
    }

    pub fn tones(&self) -> Vec<Tone> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Play(t, _) => Some(*t),
                _ => None,
            })
            .collect()
    }

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

impl RangeSensor for ScriptedRobot {
    fn distance_cm(&mut self) -> Result<f32> {
        if self.range_failures > 0 {
            self.range_failures -= 1;
            return Err(HardwareError::SensorUnavailable("no echo".to_string()));
        }
        Ok(self.ranges.pop_front().unwrap_or(OPEN_CM))
    }
}

impl FieldSensor for ScriptedRobot {
    fn field_strength(&mut self) -> Result<f32> {
        Ok(self.fields.pop_front().unwrap_or(0.0))
    }
}

impl Drive for ScriptedRobot {
    fn turn(&mut self, direction: Turn, _speed: u8) -> Result<()> {
        self.events.push(Event::Turn(direction));
        Ok(())
    }

    fn drive(&mut self, left: i16, right: i16, distance_cm: f32) -> Result<()> {
        self.events.push(Event::Drive {
            left,
            right,
            distance_cm,
        });
        Ok(())
    }
}

impl Feedback for ScriptedRobot {
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

impl Radio for ScriptedRobot {
    fn set_group(&mut self, group: u8) {
        self.events.push(Event::Group(group));
    }

    fn send(&mut self, value: i32) -> Result<()> {
        if self.radio_failures > 0 {
            self.radio_failures -= 1;
            return Err(HardwareError::RadioDown("no ack".to_string()));
        }
        self.events.push(Event::Sent(value));
        Ok(())
    }
}
