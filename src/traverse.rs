//! Cell traversal: the left-hand wall-following rule.
//!
//! At each cell the robot turns left, then keeps turning right until the
//! range finder shows an opening. The number of headings tried is the move:
//! left, forward, right, and finally backward, which is never sensed since
//! the cell just left is always open.

use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::hardware::{
    Color, Drive, FieldSensor, Feedback, Light, RangeSensor, Turn, with_retries,
};
use crate::model::Move;

/// Headings tried after the initial left turn, one right turn apart.
const AFTER_LEFT: [Move; 3] = [Move::Forward, Move::Right, Move::Backward];

/// Pick the next heading by the wall-following rule and drive one cell along it.
///
/// Returns which heading was taken.
pub fn advance_one_cell<R>(robot: &mut R, config: &Config) -> Result<Move>
where
    R: RangeSensor + Drive + Feedback,
{
    turn(robot, config, Turn::Left)?;
    let mut choice = Move::Left;

    for next in AFTER_LEFT {
        if !is_wall(robot, config)? {
            break;
        }
        turn(robot, config, Turn::Right)?;
        choice = next;
    }

    debug!("cell decision: {choice}");
    advance(robot, config)?;
    Ok(choice)
}

/// Whether the field sensor says the target is here.
pub fn target_detected<R: FieldSensor>(robot: &mut R, config: &Config) -> Result<bool> {
    let strength = with_retries(config.sensing.read_attempts, "field reading", || {
        robot.field_strength()
    })?;
    Ok(strength.abs() >= config.search.magnet_threshold)
}

/// Whether the heading ahead is blocked.
///
/// A reading closer than `too-close-cm` backs the robot off first, so the
/// wall is judged from a proper distance.
fn is_wall<R: RangeSensor + Drive>(robot: &mut R, config: &Config) -> Result<bool> {
    let attempts = config.sensing.read_attempts;
    let mut distance = with_retries(attempts, "range reading", || robot.distance_cm())?;

    if distance < config.drive.too_close_cm {
        debug!("{distance:.1}cm from wall, backing off");
        let speed = -config.drive.cruise_speed;
        robot.drive(speed, speed, config.drive.backoff_cm)?;
        distance = with_retries(attempts, "range reading", || robot.distance_cm())?;
    }

    Ok(distance < config.search.wall_threshold_cm)
}

/// Quarter turn in place with the matching headlight lit.
pub fn turn<R: Drive + Feedback>(robot: &mut R, config: &Config, direction: Turn) -> Result<()> {
    let light = match direction {
        Turn::Left => Light::Left,
        Turn::Right => Light::Right,
    };
    robot.light(light, Color::Red);
    let turned = robot.turn(direction, config.drive.turn_speed);
    robot.lights_off();
    turned?;
    Ok(())
}

/// Drive one cell length straight ahead.
pub fn advance<R: Drive + Feedback>(robot: &mut R, config: &Config) -> Result<()> {
    let speed = config.drive.cruise_speed;
    robot.light(Light::Both, Color::Green);
    let driven = robot.drive(speed, speed, config.drive.cell_length_cm);
    robot.lights_off();
    driven?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::hardware::HardwareError;
    use crate::sim::{Event, ScriptedRobot};

    #[test]
    fn open_left_is_taken_first() {
        let mut robot = ScriptedRobot::new().with_ranges([100.0]);
        let m = advance_one_cell(&mut robot, &Config::default()).unwrap();

        assert_eq!(m, Move::Left);
        assert_eq!(robot.turns(), vec![Turn::Left]);
        assert_eq!(robot.cells_driven(), 1);
    }

    #[test]
    fn counts_headings_until_an_opening() {
        let cases = [
            (vec![10.0, 100.0], Move::Forward),
            (vec![10.0, 10.0, 100.0], Move::Right),
        ];
        for (ranges, expected) in cases {
            let mut robot = ScriptedRobot::new().with_ranges(ranges);
            let m = advance_one_cell(&mut robot, &Config::default()).unwrap();
            assert_eq!(m, expected);
            assert_eq!(robot.turns().len(), expected.code() as usize);
        }
    }

    #[test]
    fn dead_end_turns_back_without_sensing_behind() {
        let mut robot = ScriptedRobot::new().with_ranges([10.0, 10.0, 10.0, 10.0]);
        let m = advance_one_cell(&mut robot, &Config::default()).unwrap();

        assert_eq!(m, Move::Backward);
        assert_eq!(
            robot.turns(),
            vec![Turn::Left, Turn::Right, Turn::Right, Turn::Right]
        );
        // Three readings used, the fourth untouched.
        assert_eq!(robot.ranges_left(), 1);
        assert_eq!(robot.cells_driven(), 1);
    }

    #[test]
    fn too_close_backs_off_and_rereads() {
        let mut robot = ScriptedRobot::new().with_ranges([2.0, 50.0]);
        let m = advance_one_cell(&mut robot, &Config::default()).unwrap();

        assert_eq!(m, Move::Left);
        assert!(
            robot
                .events()
                .contains(&Event::Drive { left: -10, right: -10, distance_cm: 3.0 })
        );
    }

    #[test]
    fn flaky_range_reading_is_retried() {
        let mut robot = ScriptedRobot::new()
            .with_range_failures(2)
            .with_ranges([100.0]);
        assert_eq!(
            advance_one_cell(&mut robot, &Config::default()).unwrap(),
            Move::Left
        );
    }

    #[test]
    fn persistent_sensor_failure_surfaces() {
        let mut robot = ScriptedRobot::new().with_range_failures(10);
        let err = advance_one_cell(&mut robot, &Config::default()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::MissionError::Hardware(HardwareError::SensorUnavailable(_))
        ));
    }

    #[test]
    fn target_threshold_uses_magnitude() {
        let config = Config::default();
        let mut robot = ScriptedRobot::new().with_fields([-350.0, 299.0, 300.0]);

        assert!(target_detected(&mut robot, &config).unwrap());
        assert!(!target_detected(&mut robot, &config).unwrap());
        assert!(target_detected(&mut robot, &config).unwrap());
    }

    #[test]
    fn turns_light_the_matching_side() {
        let mut robot = ScriptedRobot::new();
        turn(&mut robot, &Config::default(), Turn::Right).unwrap();

        assert_eq!(
            robot.events(),
            &[
                Event::Light(Light::Right, Color::Red),
                Event::Turn(Turn::Right),
                Event::LightsOff,
            ]
        );
    }
}
