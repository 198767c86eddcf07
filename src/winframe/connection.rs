use crate::action::ClickAction;
use crate::action::Command;
use crate::borders::FrameGeometry;
use crate::button::ButtonFunction;
use crate::button::ButtonLayout;
use crate::cursor::CursorShape;
use crate::geometry::Pos;
use crate::grab::DragState;
use crate::grab::GrabOp;
use crate::input::Button;
use crate::input::ClickCount;
use crate::input::Timestamp;
use crate::window::Window;
use crate::window::WindowState;

/// What a frame needs from the window manager. Requests are fire-and-forget;
/// implementations log and swallow their own failures.
pub trait WindowControl {
    fn window_state(
        &self,
        window: Window,
    ) -> WindowState;

    fn button_layout(&self) -> ButtonLayout;

    fn click_action(
        &self,
        button: Button,
        click_count: ClickCount,
    ) -> ClickAction;

    fn begin_grab(
        &self,
        window: Window,
        op: GrabOp,
        button: Button,
        root_pos: Pos,
        time: Timestamp,
    );

    fn end_grab(
        &self,
        time: Timestamp,
    );

    fn active_grab(&self) -> DragState;

    fn dispatch(
        &self,
        window: Window,
        command: Command,
        time: Option<Timestamp>,
    );

    fn set_cursor(
        &self,
        window: Window,
        shape: CursorShape,
    );
}

pub trait Painter {
    fn paint(
        &self,
        window: Window,
        geometry: &FrameGeometry,
        state: &WindowState,
        armed: Option<ButtonFunction>,
    );
}
