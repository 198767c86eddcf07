use crate::geometry::Pos;
use crate::input::Button;
use crate::input::ButtonEvent;
use crate::Result;

use std::convert::TryFrom;

use anyhow::anyhow;

use x11rb::protocol::xproto::ButtonPressEvent;

impl From<Button> for u8 {
    fn from(button: Button) -> u8 {
        match button {
            Button::Left => 1,
            Button::Middle => 2,
            Button::Right => 3,
            Button::ScrollUp => 4,
            Button::ScrollDown => 5,
            Button::Backward => 8,
            Button::Forward => 9,
        }
    }
}

impl TryFrom<u8> for Button {
    type Error = anyhow::Error;

    fn try_from(val: u8) -> Result<Self> {
        match val {
            1 => Ok(Self::Left),
            2 => Ok(Self::Middle),
            3 => Ok(Self::Right),
            4 => Ok(Self::ScrollUp),
            5 => Ok(Self::ScrollDown),
            8 => Ok(Self::Backward),
            9 => Ok(Self::Forward),
            _ => Err(anyhow!("no matching button for value {}", val)),
        }
    }
}

// press and release events share one layout in the protocol
impl TryFrom<&ButtonPressEvent> for ButtonEvent {
    type Error = anyhow::Error;

    fn try_from(event: &ButtonPressEvent) -> Result<Self> {
        Ok(Self {
            pos: Pos {
                x: event.event_x as i32,
                y: event.event_y as i32,
            },
            root_pos: Pos {
                x: event.root_x as i32,
                y: event.root_y as i32,
            },
            button: Button::try_from(event.detail)?,
            click_count: 1,
            time: event.time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use strum::IntoEnumIterator;

    #[test]
    fn button_codes_round_trip() {
        for button in Button::iter() {
            assert_eq!(Button::try_from(u8::from(button)).ok(), Some(button));
        }

        assert!(Button::try_from(6).is_err());
    }
}
