use crate::action::ClickAction;
use crate::borders::FrameGeometry;
use crate::button::ButtonFunction;
use crate::connection::Painter;
use crate::connection::WindowControl;
use crate::control::classify;
use crate::control::FrameControl;
use crate::cursor::select_cursor;
use crate::cursor::CursorShape;
use crate::geometry::Pos;
use crate::grab::GrabOp;
use crate::input::Button;
use crate::input::ButtonEvent;
use crate::input::Timestamp;
use crate::theme::Theme;
use crate::window::FrameFlags;
use crate::window::Window;
use crate::window::WindowState;

/// Whether a pointer event was handled by the frame or belongs to the client.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Propagation {
    PassThrough,
    Consumed,
}

/// Pointer handling for one decorated window.
pub struct FrameInteraction<T: Theme> {
    window: Window,
    theme: T,
    armed: Option<ButtonFunction>,
}

impl<T: Theme> FrameInteraction<T> {
    pub fn new(
        window: Window,
        theme: T,
    ) -> Self {
        Self {
            window,
            theme,
            armed: None,
        }
    }

    #[inline]
    pub fn armed(&self) -> Option<ButtonFunction> {
        self.armed
    }

    pub fn geometry(
        &self,
        state: &WindowState,
        conn: &dyn WindowControl,
    ) -> FrameGeometry {
        FrameGeometry::resolve(
            &self.theme,
            state.kind,
            state.flags,
            state.client_dim,
            &conn.button_layout(),
        )
    }

    pub fn classify(
        &self,
        pos: Pos,
        state: &WindowState,
        conn: &dyn WindowControl,
    ) -> FrameControl {
        classify(pos, &self.geometry(state, conn), state.flags, state.kind)
    }

    pub fn on_button_press(
        &mut self,
        press: &ButtonEvent,
        state: &WindowState,
        conn: &dyn WindowControl,
    ) -> Propagation {
        let geometry = self.geometry(state, conn);
        let control = classify(press.pos, &geometry, state.flags, state.kind);

        if control == FrameControl::ClientArea {
            return Propagation::PassThrough;
        }

        if control == FrameControl::Title && press.button.is_primary() && press.is_multi_click() {
            conn.end_grab(press.time);

            let action = conn.click_action(press.button, press.click_count);
            self.run_action(action, press, state, conn);

            return Propagation::Consumed;
        }

        if conn.active_grab().is_active() {
            return Propagation::Consumed;
        }

        // buttons only own the title pixels; resize bands keep priority
        if control == FrameControl::Title && press.button.is_primary() {
            if let Some(placed) = geometry.button_at(press.pos) {
                debug!("arming {:?} button of window {:#0x}", placed.function, self.window);
                self.armed = Some(placed.function);
                return Propagation::Consumed;
            }
        }

        match (control, press.button) {
            (FrameControl::Resize(grip), Button::Left) => {
                self.begin_grab(GrabOp::Resizing(grip), press, conn);
            },
            (FrameControl::Title, Button::Left) => {
                if state.flags.contains(FrameFlags::ALLOWS_MOVE) {
                    self.begin_grab(GrabOp::Moving, press, conn);
                }
            },
            (_, Button::Middle) | (_, Button::Right) => {
                let action = conn.click_action(press.button, press.click_count);
                self.run_action(action, press, state, conn);
            },
            _ => {},
        }

        Propagation::Consumed
    }

    /// Completes a title button click; the armed button fires only when the
    /// primary button is released over it.
    pub fn on_button_release(
        &mut self,
        release: &ButtonEvent,
        state: &WindowState,
        conn: &dyn WindowControl,
    ) -> Propagation {
        if !release.button.is_primary() {
            return Propagation::PassThrough;
        }

        let armed = match self.armed.take() {
            Some(armed) => armed,
            None => return Propagation::PassThrough,
        };

        let geometry = self.geometry(state, conn);
        let placed = match geometry.button_at(release.pos) {
            Some(placed) if placed.function == armed => placed,
            _ => {
                debug!("disarming {:?} button of window {:#0x}", armed, self.window);
                return Propagation::Consumed;
            },
        };

        let frame_origin = release.root_pos.relative_to(release.pos);
        let menu_pos = Pos::new(
            placed.region.pos.x,
            placed.region.pos.y + placed.region.dim.h,
        ) + frame_origin;

        match armed.command(state.flags, menu_pos) {
            Some(command) => {
                info!("{:?} button of window {:#0x} issues {:?}", armed, self.window, command);
                conn.dispatch(self.window, command, Some(release.time));
            },
            None => debug!("{:?} button of window {:#0x} not permitted", armed, self.window),
        }

        Propagation::Consumed
    }

    #[inline]
    pub fn on_motion(
        &self,
        pos: Pos,
        state: &WindowState,
        conn: &dyn WindowControl,
    ) {
        self.update_cursor(pos, state, conn);
    }

    #[inline]
    pub fn on_enter(
        &self,
        pos: Pos,
        state: &WindowState,
        conn: &dyn WindowControl,
    ) {
        self.update_cursor(pos, state, conn);
    }

    pub fn on_leave(
        &self,
        conn: &dyn WindowControl,
    ) {
        conn.set_cursor(self.window, CursorShape::Default);
    }

    pub fn update_cursor(
        &self,
        pos: Pos,
        state: &WindowState,
        conn: &dyn WindowControl,
    ) {
        if conn.active_grab().is_active() {
            return;
        }

        let control = self.classify(pos, state, conn);
        conn.set_cursor(self.window, select_cursor(control));
    }

    pub fn paint(
        &self,
        state: &WindowState,
        conn: &dyn WindowControl,
        painter: &dyn Painter,
    ) {
        let geometry = self.geometry(state, conn);

        if geometry.has_border_area() {
            painter.paint(self.window, &geometry, state, self.armed);
        }
    }

    fn begin_grab(
        &self,
        op: GrabOp,
        press: &ButtonEvent,
        conn: &dyn WindowControl,
    ) {
        info!("beginning {:?} on window {:#0x}", op, self.window);
        conn.begin_grab(self.window, op, press.button, press.root_pos, press.time);
    }

    fn run_action(
        &self,
        action: ClickAction,
        press: &ButtonEvent,
        state: &WindowState,
        conn: &dyn WindowControl,
    ) {
        match action.command(state.flags, press.root_pos, press.button) {
            Some(command) => {
                info!("{:?} on window {:#0x} issues {:?}", action, self.window, command);
                conn.dispatch(self.window, command, Some(press.time));
            },
            None => debug!("{:?} not permitted on window {:#0x}", action, self.window),
        }
    }
}
