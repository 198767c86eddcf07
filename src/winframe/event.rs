use crate::geometry::Dim;
use crate::geometry::Pos;
use crate::input::ButtonEvent;
use crate::window::Window;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ButtonPress {
        window: Window,
        event: ButtonEvent,
    },
    ButtonRelease {
        window: Window,
        event: ButtonEvent,
    },
    Motion {
        window: Window,
        pos: Pos,
    },
    Enter {
        window: Window,
        pos: Pos,
        ungrab: bool,
    },
    Leave {
        window: Window,
        ungrab: bool,
    },
    Expose {
        window: Window,
    },
    Configure {
        window: Window,
        dim: Dim,
    },
    Property {
        window: Window,
    },
    Focus {
        window: Window,
    },
    CloseRequest {
        window: Window,
    },
    Destroy {
        window: Window,
    },
}
