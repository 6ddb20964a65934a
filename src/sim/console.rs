//! A receiving device with no hardware: cues go to the log.

use tracing::info;

use crate::hardware::{Beat, Color, Feedback, Icon, Light, Radio, Result, Tone};

#[derive(Debug, Default)]
pub struct ConsoleDevice {
    group: Option<u8>,
}

impl Feedback for ConsoleDevice {
    fn light(&mut self, light: Light, color: Color) {
        info!("light {light:?} {color:?}");
    }

    fn lights_off(&mut self) {}

    fn show(&mut self, icon: Icon) {
        info!("show {icon:?}");
    }

    fn play(&mut self, tone: Tone, _beat: Beat) {
        info!("tone {tone:?}");
    }

    fn rest(&mut self, _beat: Beat) {}
}

impl Radio for ConsoleDevice {
    fn set_group(&mut self, group: u8) {
        info!("listening on radio group {group}");
        self.group = Some(group);
    }

    fn send(&mut self, value: i32) -> Result<()> {
        info!("radio group {:?} <- {value}", self.group);
        Ok(())
    }
}
