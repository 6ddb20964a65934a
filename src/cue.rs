//! Audio and light cues for moves.
//!
//! Each move has a tone: left C4, forward E4, right G4, backward C5.
//! Cues are pure observability; nothing reads them back.

use crate::hardware::{Beat, Color, Feedback, Light, Tone};
use crate::model::Move;

pub fn tone(m: Move) -> Tone {
    match m {
        Move::Left => Tone::C4,
        Move::Forward => Tone::E4,
        Move::Right => Tone::G4,
        Move::Backward => Tone::C5,
    }
}

/// Headlight shown while a move is signalled. Backward has none.
pub fn headlight(m: Move) -> Option<(Light, Color)> {
    match m {
        Move::Left => Some((Light::Left, Color::Red)),
        Move::Forward => Some((Light::Both, Color::Green)),
        Move::Right => Some((Light::Right, Color::Red)),
        Move::Backward => None,
    }
}

/// Play the raw search log, dead ends included, then a long rest.
pub fn play_log<F: Feedback + ?Sized>(feedback: &mut F, moves: &[Move]) {
    for &m in moves {
        feedback.play(tone(m), Beat::Whole);
        feedback.rest(Beat::Half);
    }
    feedback.rest(Beat::Breve);
}

/// Play a route. Only turns and straights have a cue; a dead end is a bare rest.
pub fn play_route<F: Feedback + ?Sized>(feedback: &mut F, moves: &[Move]) {
    for &m in moves {
        if m != Move::Backward {
            feedback.play(tone(m), Beat::Whole);
        }
        feedback.rest(Beat::Half);
    }
}

/// Light and sound for one move sent or received over the radio.
pub fn signal<F: Feedback + ?Sized>(feedback: &mut F, m: Move) {
    if let Some((light, color)) = headlight(m) {
        feedback.light(light, color);
        feedback.play(tone(m), Beat::Whole);
    }
    feedback.rest(Beat::Half);
    feedback.lights_off();
}
