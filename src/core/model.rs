use crate::defaults::CLIENT_COLOR;
use crate::defaults::INITIAL_CLIENT_DIM;
use crate::defaults::INITIAL_CLIENT_POS;

use winframe::connection::WindowControl;
use winframe::event::Event;
use winframe::geometry::Dim;
use winframe::geometry::Pos;
use winframe::geometry::Region;
use winframe::input::ButtonEvent;
use winframe::input::ClickCounter;
use winframe::interaction::FrameInteraction;
use winframe::interaction::Propagation;
use winframe::theme::FrameStyle;
use winframe::theme::Theme;
use winframe::window::FrameFlags;
use winframe::window::FrameType;
use winframe::window::Window;
use winframe::window::WindowState;
use winframe::xdata::xconnection::XConnection;
use winframe::Result;

use x11rb::connection::Connection;

/// Drives one client-side decorated frame around a plain client window.
pub struct Decorator<'a, 'conn, Conn: Connection> {
    conn: &'a XConnection<'conn, Conn>,
    style: FrameStyle,
    interaction: FrameInteraction<FrameStyle>,
    frame: Window,
    client: Window,
    click_counter: ClickCounter,
    client_mapped: bool,
    shaded: bool,
    running: bool,
}

impl<'a, 'conn, Conn: Connection> Decorator<'a, 'conn, Conn> {
    pub fn new(
        conn: &'a XConnection<'conn, Conn>,
        style: FrameStyle,
    ) -> Result<Self> {
        let preferences = *conn.preferences();
        let borders = style.frame_borders(FrameType::Normal, FrameFlags::ALLOWS_RESIZE);

        let client_region = Region {
            pos: INITIAL_CLIENT_POS,
            dim: INITIAL_CLIENT_DIM,
        };

        let frame = conn.create_frame(client_region.with_extents(borders.total), PROGRAM_NAME!())?;
        let client = conn.create_client(
            frame,
            Region {
                pos: Pos::new(borders.total.left, borders.total.top),
                dim: INITIAL_CLIENT_DIM,
            },
            CLIENT_COLOR,
        )?;

        conn.set_frame_extents(frame, borders.invisible);
        conn.map_window(client);
        conn.map_window(frame);
        conn.flush();

        Ok(Self {
            conn,
            style,
            interaction: FrameInteraction::new(frame, style),
            frame,
            client,
            click_counter: ClickCounter::new(
                preferences.double_click_time,
                preferences.double_click_distance,
            ),
            client_mapped: true,
            shaded: false,
            running: true,
        })
    }

    pub fn run(&mut self) {
        info!("decorating frame {:#0x} around client {:#0x}", self.frame, self.client);

        while self.running {
            if let Some(event) = self.conn.step() {
                trace!("received event: {:?}", event);

                match event {
                    Event::ButtonPress {
                        window,
                        event,
                    } => self.handle_button_press(window, event),
                    Event::ButtonRelease {
                        window,
                        event,
                    } => self.handle_button_release(window, event),
                    Event::Motion {
                        window,
                        pos,
                    } => self.handle_motion(window, pos),
                    Event::Enter {
                        window,
                        pos,
                        ungrab,
                    } => self.handle_enter(window, pos, ungrab),
                    Event::Leave {
                        window,
                        ungrab,
                    } => self.handle_leave(window, ungrab),
                    Event::Expose {
                        window,
                    } => self.handle_expose(window),
                    Event::Configure {
                        window,
                        dim,
                    } => self.handle_configure(window, dim),
                    Event::Property {
                        window,
                    }
                    | Event::Focus {
                        window,
                    } => self.handle_state_change(window),
                    Event::CloseRequest {
                        window,
                    } => self.handle_close_request(window),
                    Event::Destroy {
                        window,
                    } => self.handle_destroy(window),
                }
            }

            self.conn.flush();
        }
    }

    #[inline]
    fn window_state(&self) -> WindowState {
        self.conn.window_state(self.frame)
    }

    fn paint(
        &self,
        state: &WindowState,
    ) {
        self.interaction.paint(state, self.conn, self.conn);
    }

    fn handle_button_press(
        &mut self,
        window: Window,
        mut event: ButtonEvent,
    ) {
        if window != self.frame {
            return;
        }

        event.click_count = self
            .click_counter
            .register(event.button, event.root_pos, event.time);

        debug!(
            "PRESS of {:?} (count {}) on frame {:#0x} at {:?}",
            event.button, event.click_count, window, event.pos
        );

        let state = self.window_state();
        let armed = self.interaction.armed();

        if self.interaction.on_button_press(&event, &state, self.conn) == Propagation::PassThrough {
            debug!("press belongs to client {:#0x}", self.client);
        }

        if self.interaction.armed() != armed {
            self.paint(&state);
        }
    }

    fn handle_button_release(
        &mut self,
        window: Window,
        event: ButtonEvent,
    ) {
        self.conn.clear_grab();

        if window != self.frame {
            return;
        }

        let state = self.window_state();
        let armed = self.interaction.armed();

        self.interaction.on_button_release(&event, &state, self.conn);

        if self.interaction.armed() != armed {
            self.paint(&state);
        }
    }

    fn handle_motion(
        &self,
        window: Window,
        pos: Pos,
    ) {
        if window == self.frame {
            self.interaction.on_motion(pos, &self.window_state(), self.conn);
        }
    }

    fn handle_enter(
        &self,
        window: Window,
        pos: Pos,
        ungrab: bool,
    ) {
        if ungrab {
            self.conn.clear_grab();
        }

        if window == self.frame {
            self.interaction.on_enter(pos, &self.window_state(), self.conn);
        }
    }

    fn handle_leave(
        &mut self,
        window: Window,
        ungrab: bool,
    ) {
        if ungrab {
            self.conn.clear_grab();
        }

        if window == self.frame {
            self.click_counter.reset();
            self.interaction.on_leave(self.conn);
        }
    }

    fn handle_expose(
        &self,
        window: Window,
    ) {
        if window == self.frame {
            self.paint(&self.window_state());
        }
    }

    fn handle_configure(
        &mut self,
        window: Window,
        dim: Dim,
    ) {
        if window != self.frame {
            return;
        }

        debug!("CONFIGURE of frame {:#0x} to {:?}", window, dim);
        self.fit_client(dim);
        self.paint(&self.window_state());
    }

    /// Places the client inside the frame's current size, hiding it when no
    /// room is left.
    fn fit_client(
        &mut self,
        dim: Dim,
    ) {
        let state = self.window_state();
        let borders = self.style.frame_borders(state.kind, state.flags);
        let region = Region {
            pos: Pos::new(0, 0),
            dim,
        }
        .without_extents(borders.total);

        self.conn.set_frame_extents(self.frame, borders.invisible);

        if self.shaded || region.dim.is_empty() {
            if self.client_mapped {
                self.conn.unmap_window(self.client);
                self.client_mapped = false;
            }

            return;
        }

        self.conn.place_window(self.client, &region);

        if !self.client_mapped {
            self.conn.map_window(self.client);
            self.client_mapped = true;
        }
    }

    fn handle_state_change(
        &mut self,
        window: Window,
    ) {
        if window != self.frame {
            return;
        }

        let state = self.window_state();
        let shaded = state.flags.contains(FrameFlags::SHADED);

        if shaded != self.shaded {
            info!("frame {:#0x} is now {}", self.frame, if shaded { "shaded" } else { "unshaded" });
            self.shaded = shaded;

            let geometry = self.interaction.geometry(&state, self.conn);
            self.conn
                .resize_window(self.frame, Dim::new(geometry.width, geometry.height));

            return;
        }

        match self.conn.get_window_geometry(self.frame) {
            Ok(region) => self.fit_client(region.dim),
            Err(err) => warn!("unable to query frame {:#0x}: {}", self.frame, err),
        }

        self.paint(&self.window_state());
    }

    fn handle_close_request(
        &mut self,
        window: Window,
    ) {
        if window == self.frame {
            self.exit();
        }
    }

    fn handle_destroy(
        &mut self,
        window: Window,
    ) {
        if window == self.frame {
            debug!("DESTROY of frame {:#0x}", window);
            self.running = false;
        }
    }

    pub fn exit(&mut self) {
        info!("exit called, closing frame {:#0x}", self.frame);

        self.conn.destroy_window(self.frame);
        self.conn.flush();
        self.running = false;
    }
}
