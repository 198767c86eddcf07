use crate::action::ClickAction;
use crate::action::Command;
use crate::borders::FrameGeometry;
use crate::button::ButtonFunction;
use crate::button::ButtonLayout;
use crate::connection::Painter;
use crate::connection::WindowControl;
use crate::cursor::CursorShape;
use crate::event::Event;
use crate::geometry::Corner;
use crate::geometry::Dim;
use crate::geometry::Edge;
use crate::geometry::Extents;
use crate::geometry::Pos;
use crate::geometry::Region;
use crate::grab::DragState;
use crate::grab::GrabOp;
use crate::input::Button;
use crate::input::ButtonEvent;
use crate::input::ClickCount;
use crate::input::Grip;
use crate::input::Timestamp;
use crate::preferences::Preferences;
use crate::theme::Color;
use crate::theme::ColorScheme;
use crate::window::FrameFlags;
use crate::window::FrameType;
use crate::window::Window;
use crate::window::WindowState;
use crate::Result;

use std::cell::Cell;
use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::TryFrom;

use x11rb::connection;
use x11rb::cursor::Handle as CursorHandle;
use x11rb::protocol::xproto;
use x11rb::protocol::xproto::ConnectionExt;
use x11rb::protocol::xproto::EventMask;
use x11rb::protocol::xproto::CLIENT_MESSAGE_EVENT;
use x11rb::protocol::Event as XEvent;
use x11rb::resource_manager::Database;
use x11rb::wrapper::ConnectionExt as _;

use strum::IntoEnumIterator;

type Atom = u32;

const RESOURCE_NAME: &str = "wzframe";
const RESOURCE_CLASS: &str = "Wzframe";

// _NET_WM_MOVERESIZE directions
const MOVERESIZE_MOVE: u32 = 8;
const MOVERESIZE_CANCEL: u32 = 11;

// _NET_WM_STATE actions
const STATE_REMOVE: u32 = 0;
const STATE_ADD: u32 = 1;
const STATE_TOGGLE: u32 = 2;

const ICONIC_STATE: u32 = 3;
const SOURCE_APPLICATION: u32 = 1;

x11rb::atom_manager! {
    pub Atoms: AtomsCookie {
        UTF8_STRING,

        // ICCCM
        WM_PROTOCOLS,
        WM_DELETE_WINDOW,
        WM_CHANGE_STATE,

        // EWMH root messages
        _NET_CLOSE_WINDOW,
        _NET_WM_MOVERESIZE,

        // EWMH application properties
        _NET_WM_NAME,
        _NET_WM_WINDOW_TYPE,
        _NET_WM_STATE,
        _NET_WM_ALLOWED_ACTIONS,

        // EWMH window states
        _NET_WM_STATE_MODAL,
        _NET_WM_STATE_STICKY,
        _NET_WM_STATE_MAXIMIZED_VERT,
        _NET_WM_STATE_MAXIMIZED_HORZ,
        _NET_WM_STATE_SHADED,
        _NET_WM_STATE_ABOVE,
        _NET_WM_STATE_FOCUSED,

        // EWMH allowed actions
        _NET_WM_ACTION_MOVE,
        _NET_WM_ACTION_RESIZE,
        _NET_WM_ACTION_MINIMIZE,
        _NET_WM_ACTION_SHADE,
        _NET_WM_ACTION_MAXIMIZE_HORZ,
        _NET_WM_ACTION_MAXIMIZE_VERT,
        _NET_WM_ACTION_CLOSE,

        // EWMH window types
        _NET_WM_WINDOW_TYPE_DESKTOP,
        _NET_WM_WINDOW_TYPE_DOCK,
        _NET_WM_WINDOW_TYPE_MENU,
        _NET_WM_WINDOW_TYPE_DROPDOWN_MENU,
        _NET_WM_WINDOW_TYPE_POPUP_MENU,
        _NET_WM_WINDOW_TYPE_UTILITY,
        _NET_WM_WINDOW_TYPE_SPLASH,
        _NET_WM_WINDOW_TYPE_DIALOG,
        _NET_WM_WINDOW_TYPE_TOOLTIP,
        _NET_WM_WINDOW_TYPE_NOTIFICATION,
        _NET_WM_WINDOW_TYPE_NORMAL,

        // client-side decoration
        _MOTIF_WM_HINTS,
        _GTK_FRAME_EXTENTS,
        _GTK_SHOW_WINDOW_MENU,
    }
}

pub struct XConnection<'conn, Conn: connection::Connection> {
    conn: &'conn Conn,
    atoms: Atoms,
    type_map: HashMap<Atom, FrameType>,
    screen: xproto::Screen,
    gc: xproto::Gcontext,
    font: Option<xproto::Font>,
    cursors: HashMap<CursorShape, xproto::Cursor>,
    preferences: Preferences,
    colors: ColorScheme,
    clients: RefCell<HashMap<Window, Window>>,
    grab: Cell<DragState>,
    grab_window: Cell<Window>,
    frame_event_mask: EventMask,
    client_event_mask: EventMask,
}

impl<'conn, Conn: connection::Connection> XConnection<'conn, Conn> {
    pub fn new(
        conn: &'conn Conn,
        screen_num: usize,
    ) -> Result<Self> {
        let screen = conn.setup().roots[screen_num].clone();
        let atoms = Atoms::new(conn)?.reply()?;

        let type_map: HashMap<Atom, FrameType> = map!(
            atoms._NET_WM_WINDOW_TYPE_DESKTOP => FrameType::Desktop,
            atoms._NET_WM_WINDOW_TYPE_DOCK => FrameType::Override,
            atoms._NET_WM_WINDOW_TYPE_TOOLTIP => FrameType::Override,
            atoms._NET_WM_WINDOW_TYPE_NOTIFICATION => FrameType::Override,
            atoms._NET_WM_WINDOW_TYPE_MENU => FrameType::Menu,
            atoms._NET_WM_WINDOW_TYPE_DROPDOWN_MENU => FrameType::Menu,
            atoms._NET_WM_WINDOW_TYPE_POPUP_MENU => FrameType::Menu,
            atoms._NET_WM_WINDOW_TYPE_UTILITY => FrameType::Utility,
            atoms._NET_WM_WINDOW_TYPE_SPLASH => FrameType::Border,
            atoms._NET_WM_WINDOW_TYPE_DIALOG => FrameType::Dialog,
            atoms._NET_WM_WINDOW_TYPE_NORMAL => FrameType::Normal,
        );

        let gc = conn.generate_id()?;
        conn.create_gc(gc, screen.root, &xproto::CreateGCAux::default())?;

        let font = conn.generate_id()?;
        let font = match conn.open_font(font, b"fixed")?.check() {
            Ok(()) => {
                conn.change_gc(gc, &xproto::ChangeGCAux::new().font(font))?;
                Some(font)
            },
            Err(_) => {
                warn!("unable to open core font, titles will not be drawn");
                None
            },
        };

        let database = Database::new_from_default(conn).ok();
        let mut cursors = HashMap::new();

        let preferences = match database {
            Some(ref database) => {
                let handle = CursorHandle::new(conn, screen_num, database)
                    .ok()
                    .and_then(|cookie| cookie.reply().ok());

                if let Some(handle) = handle {
                    for shape in CursorShape::iter() {
                        if let Ok(cursor) = handle.load_cursor(conn, shape.name()) {
                            cursors.insert(shape, cursor);
                        }
                    }
                }

                Preferences::from_lookup(|key| {
                    database
                        .get_string(
                            &format!("{}.{}", RESOURCE_NAME, key),
                            &format!("{}.{}", RESOURCE_CLASS, resource_class(key)),
                        )
                        .map(String::from)
                })
            },
            None => {
                warn!("no resource database available, using default preferences");
                Preferences::default()
            },
        };

        debug!("loaded {} cursors and preferences {:?}", cursors.len(), preferences);

        let frame_event_mask: EventMask = EventMask::EXPOSURE
            | EventMask::BUTTON_PRESS
            | EventMask::BUTTON_RELEASE
            | EventMask::POINTER_MOTION
            | EventMask::ENTER_WINDOW
            | EventMask::LEAVE_WINDOW
            | EventMask::STRUCTURE_NOTIFY
            | EventMask::PROPERTY_CHANGE
            | EventMask::FOCUS_CHANGE;

        let client_event_mask: EventMask = EventMask::EXPOSURE;

        Ok(Self {
            conn,
            atoms,
            type_map,
            screen,
            gc,
            font,
            cursors,
            preferences,
            colors: ColorScheme::DEFAULT,
            clients: RefCell::new(HashMap::new()),
            grab: Cell::new(DragState::None),
            grab_window: Cell::new(x11rb::NONE),
            frame_event_mask,
            client_event_mask,
        })
    }

    #[inline]
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    #[inline]
    pub fn flush(&self) -> bool {
        self.conn.flush().is_ok()
    }

    /// Creates a top-level frame that the running window manager will not
    /// decorate itself.
    pub fn create_frame(
        &self,
        region: Region,
        title: &str,
    ) -> Result<Window> {
        let frame = self.conn.generate_id()?;
        let aux = xproto::CreateWindowAux::new()
            .background_pixel(self.colors.background)
            .event_mask(self.frame_event_mask);

        self.conn.create_window(
            x11rb::COPY_DEPTH_FROM_PARENT,
            frame,
            self.screen.root,
            region.pos.x as i16,
            region.pos.y as i16,
            region.dim.w as u16,
            region.dim.h as u16,
            0,
            xproto::WindowClass::INPUT_OUTPUT,
            0,
            &aux,
        )?;

        // flags: decorations; decorations: none
        self.conn.change_property32(
            xproto::PropMode::REPLACE,
            frame,
            self.atoms._MOTIF_WM_HINTS,
            self.atoms._MOTIF_WM_HINTS,
            &[2, 0, 0, 0, 0],
        )?;

        self.conn.change_property32(
            xproto::PropMode::REPLACE,
            frame,
            self.atoms.WM_PROTOCOLS,
            xproto::AtomEnum::ATOM,
            &[self.atoms.WM_DELETE_WINDOW],
        )?;

        self.conn.change_property32(
            xproto::PropMode::REPLACE,
            frame,
            self.atoms._NET_WM_WINDOW_TYPE,
            xproto::AtomEnum::ATOM,
            &[self.atoms._NET_WM_WINDOW_TYPE_NORMAL],
        )?;

        self.set_window_name(frame, title)?;

        info!("created frame {:#0x}", frame);
        Ok(frame)
    }

    pub fn create_client(
        &self,
        frame: Window,
        region: Region,
        color: Color,
    ) -> Result<Window> {
        let client = self.conn.generate_id()?;
        let aux = xproto::CreateWindowAux::new()
            .background_pixel(color)
            .event_mask(self.client_event_mask);

        self.conn.create_window(
            x11rb::COPY_DEPTH_FROM_PARENT,
            client,
            frame,
            region.pos.x as i16,
            region.pos.y as i16,
            region.dim.w as u16,
            region.dim.h as u16,
            0,
            xproto::WindowClass::INPUT_OUTPUT,
            0,
            &aux,
        )?;

        self.clients.borrow_mut().insert(frame, client);

        info!("created client {:#0x} in frame {:#0x}", client, frame);
        Ok(client)
    }

    pub fn set_window_name(
        &self,
        window: Window,
        name: &str,
    ) -> Result<()> {
        self.conn.change_property8(
            xproto::PropMode::REPLACE,
            window,
            xproto::AtomEnum::WM_NAME,
            xproto::AtomEnum::STRING,
            name.as_bytes(),
        )?;

        self.conn.change_property8(
            xproto::PropMode::REPLACE,
            window,
            self.atoms._NET_WM_NAME,
            self.atoms.UTF8_STRING,
            name.as_bytes(),
        )?;

        Ok(())
    }

    /// Announces the invisible resize borders so the window manager can
    /// exclude them from placement and snapping.
    pub fn set_frame_extents(
        &self,
        window: Window,
        extents: Extents,
    ) {
        drop(self.conn.change_property32(
            xproto::PropMode::REPLACE,
            window,
            self.atoms._GTK_FRAME_EXTENTS,
            xproto::AtomEnum::CARDINAL,
            &[
                extents.left as u32,
                extents.right as u32,
                extents.top as u32,
                extents.bottom as u32,
            ],
        ));
    }

    #[inline]
    pub fn map_window(
        &self,
        window: Window,
    ) {
        drop(self.conn.map_window(window));
    }

    #[inline]
    pub fn unmap_window(
        &self,
        window: Window,
    ) {
        drop(self.conn.unmap_window(window));
    }

    #[inline]
    pub fn place_window(
        &self,
        window: Window,
        region: &Region,
    ) {
        drop(
            self.conn.configure_window(
                window,
                &xproto::ConfigureWindowAux::default()
                    .x(region.pos.x as i32)
                    .y(region.pos.y as i32)
                    .width(region.dim.w as u32)
                    .height(region.dim.h as u32),
            ),
        );
    }

    #[inline]
    pub fn resize_window(
        &self,
        window: Window,
        dim: Dim,
    ) {
        drop(
            self.conn.configure_window(
                window,
                &xproto::ConfigureWindowAux::default()
                    .width(dim.w as u32)
                    .height(dim.h as u32),
            ),
        );
    }

    pub fn destroy_window(
        &self,
        window: Window,
    ) {
        self.clients.borrow_mut().remove(&window);
        drop(self.conn.destroy_window(window));
    }

    /// Forgets the active grab once the window manager has released the
    /// pointer.
    #[inline]
    pub fn clear_grab(&self) {
        if self.grab.replace(DragState::None).is_active() {
            debug!("grab released");
        }
    }

    #[inline]
    pub fn get_window_geometry(
        &self,
        window: Window,
    ) -> Result<Region> {
        Ok(self.conn.get_geometry(window)?.reply().map(|reply| {
            Region::new(
                reply.x as i32,
                reply.y as i32,
                reply.width as i32,
                reply.height as i32,
            )
        })?)
    }

    #[inline]
    fn get_focused_window(&self) -> Window {
        self.conn
            .get_input_focus()
            .map_or(self.screen.root, |cookie| {
                cookie.reply().map_or(self.screen.root, |reply| reply.focus)
            })
    }

    /// The atoms stored in a property, or nothing when the property is not
    /// set at all.
    fn get_atom_list(
        &self,
        window: Window,
        property: Atom,
    ) -> Option<Vec<Atom>> {
        let reply = self
            .conn
            .get_property(
                false,
                window,
                property,
                xproto::AtomEnum::ATOM,
                0,
                std::u32::MAX,
            )
            .ok()?
            .reply()
            .ok()?;

        if reply.type_ == x11rb::NONE {
            return None;
        }

        let atoms = reply.value32()?.collect();
        Some(atoms)
    }

    fn get_window_name(
        &self,
        window: Window,
    ) -> String {
        let properties = [
            (self.atoms._NET_WM_NAME, self.atoms.UTF8_STRING),
            (
                xproto::AtomEnum::WM_NAME.into(),
                xproto::AtomEnum::STRING.into(),
            ),
        ];

        for &(property, type_) in properties.iter() {
            let reply = self
                .conn
                .get_property(false, window, property, type_, 0, std::u32::MAX)
                .ok()
                .and_then(|cookie| cookie.reply().ok());

            if let Some(reply) = reply {
                if !reply.value.is_empty() {
                    return String::from_utf8_lossy(&reply.value).into_owned();
                }
            }
        }

        String::new()
    }

    fn get_window_flags(
        &self,
        window: Window,
    ) -> FrameFlags {
        let mut flags = FrameFlags::ALLOWS_MENU;

        match self.get_atom_list(window, self.atoms._NET_WM_ALLOWED_ACTIONS) {
            Some(actions) => {
                let allowed: HashMap<Atom, FrameFlags> = map!(
                    self.atoms._NET_WM_ACTION_MOVE => FrameFlags::ALLOWS_MOVE,
                    self.atoms._NET_WM_ACTION_RESIZE => FrameFlags::ALLOWS_RESIZE,
                    self.atoms._NET_WM_ACTION_MINIMIZE => FrameFlags::ALLOWS_MINIMIZE,
                    self.atoms._NET_WM_ACTION_SHADE => FrameFlags::ALLOWS_SHADE,
                    self.atoms._NET_WM_ACTION_MAXIMIZE_HORZ => FrameFlags::ALLOWS_MAXIMIZE,
                    self.atoms._NET_WM_ACTION_MAXIMIZE_VERT => FrameFlags::ALLOWS_MAXIMIZE,
                    self.atoms._NET_WM_ACTION_CLOSE => FrameFlags::ALLOWS_DELETE,
                );

                for action in actions {
                    if let Some(&flag) = allowed.get(&action) {
                        flags |= flag;
                    }
                }
            },
            None => {
                flags |= FrameFlags::ALLOWS_MOVE
                    | FrameFlags::ALLOWS_RESIZE
                    | FrameFlags::ALLOWS_MINIMIZE
                    | FrameFlags::ALLOWS_SHADE
                    | FrameFlags::ALLOWS_MAXIMIZE
                    | FrameFlags::ALLOWS_DELETE;
            },
        }

        let states = self
            .get_atom_list(window, self.atoms._NET_WM_STATE)
            .unwrap_or_default();

        if states.contains(&self.atoms._NET_WM_STATE_SHADED) {
            flags |= FrameFlags::SHADED;
        }

        if states.contains(&self.atoms._NET_WM_STATE_STICKY) {
            flags |= FrameFlags::STUCK;
        }

        if states.contains(&self.atoms._NET_WM_STATE_ABOVE) {
            flags |= FrameFlags::ABOVE;
        }

        if states.contains(&self.atoms._NET_WM_STATE_MAXIMIZED_VERT)
            && states.contains(&self.atoms._NET_WM_STATE_MAXIMIZED_HORZ)
        {
            flags |= FrameFlags::MAXIMIZED;
        }

        let focus = self.get_focused_window();
        let client = self.clients.borrow().get(&window).copied();

        if states.contains(&self.atoms._NET_WM_STATE_FOCUSED)
            || focus == window
            || client == Some(focus)
        {
            flags |= FrameFlags::HAS_FOCUS;
        }

        flags
    }

    fn get_frame_type(
        &self,
        window: Window,
    ) -> FrameType {
        let kind = self
            .get_atom_list(window, self.atoms._NET_WM_WINDOW_TYPE)
            .and_then(|types| {
                types
                    .iter()
                    .find_map(|type_| self.type_map.get(type_).copied())
            })
            .unwrap_or(FrameType::Normal);

        let modal = self
            .get_atom_list(window, self.atoms._NET_WM_STATE)
            .map_or(false, |states| states.contains(&self.atoms._NET_WM_STATE_MODAL));

        match kind {
            FrameType::Dialog if modal => FrameType::ModalDialog,
            kind => kind,
        }
    }

    fn send_root_message(
        &self,
        window: Window,
        type_: Atom,
        data: [u32; 5],
    ) -> Result<()> {
        let event = xproto::ClientMessageEvent {
            response_type: CLIENT_MESSAGE_EVENT,
            format: 32,
            sequence: 0,
            window,
            type_,
            data: data.into(),
        };

        self.conn.send_event(
            false,
            self.screen.root,
            EventMask::SUBSTRUCTURE_REDIRECT | EventMask::SUBSTRUCTURE_NOTIFY,
            &event,
        )?;

        Ok(())
    }

    fn send_state_message(
        &self,
        window: Window,
        action: u32,
        first: Atom,
        second: Atom,
    ) -> Result<()> {
        self.send_root_message(window, self.atoms._NET_WM_STATE, [
            action,
            first,
            second,
            SOURCE_APPLICATION,
            0,
        ])
    }

    fn send_command(
        &self,
        window: Window,
        command: Command,
        time: Timestamp,
    ) -> Result<()> {
        let atoms = &self.atoms;

        match command {
            Command::Delete => {
                self.send_root_message(window, atoms._NET_CLOSE_WINDOW, [
                    time,
                    SOURCE_APPLICATION,
                    0,
                    0,
                    0,
                ])
            },
            Command::Minimize => {
                self.send_root_message(window, atoms.WM_CHANGE_STATE, [ICONIC_STATE, 0, 0, 0, 0])
            },
            Command::Maximize => self.send_state_message(
                window,
                STATE_ADD,
                atoms._NET_WM_STATE_MAXIMIZED_VERT,
                atoms._NET_WM_STATE_MAXIMIZED_HORZ,
            ),
            Command::Unmaximize => self.send_state_message(
                window,
                STATE_REMOVE,
                atoms._NET_WM_STATE_MAXIMIZED_VERT,
                atoms._NET_WM_STATE_MAXIMIZED_HORZ,
            ),
            Command::ToggleMaximizeHorizontally => self.send_state_message(
                window,
                STATE_TOGGLE,
                atoms._NET_WM_STATE_MAXIMIZED_HORZ,
                0,
            ),
            Command::ToggleMaximizeVertically => self.send_state_message(
                window,
                STATE_TOGGLE,
                atoms._NET_WM_STATE_MAXIMIZED_VERT,
                0,
            ),
            Command::Shade => {
                self.send_state_message(window, STATE_ADD, atoms._NET_WM_STATE_SHADED, 0)
            },
            Command::Unshade => {
                self.send_state_message(window, STATE_REMOVE, atoms._NET_WM_STATE_SHADED, 0)
            },
            Command::MakeAbove => {
                self.send_state_message(window, STATE_ADD, atoms._NET_WM_STATE_ABOVE, 0)
            },
            Command::Unabove => {
                self.send_state_message(window, STATE_REMOVE, atoms._NET_WM_STATE_ABOVE, 0)
            },
            Command::Stick => {
                self.send_state_message(window, STATE_ADD, atoms._NET_WM_STATE_STICKY, 0)
            },
            Command::Unstick => {
                self.send_state_message(window, STATE_REMOVE, atoms._NET_WM_STATE_STICKY, 0)
            },
            Command::LowerAndUnfocus => {
                self.conn.configure_window(
                    window,
                    &xproto::ConfigureWindowAux::default().stack_mode(xproto::StackMode::BELOW),
                )?;

                if self.get_window_flags(window).contains(FrameFlags::HAS_FOCUS) {
                    self.conn.set_input_focus(
                        xproto::InputFocus::PARENT,
                        self.screen.root,
                        time,
                    )?;
                }

                Ok(())
            },
            Command::ShowMenu {
                pos,
                button,
            } => {
                debug!("window menu requested with {:?} button", button);
                self.conn.ungrab_pointer(time)?;

                self.send_root_message(window, atoms._GTK_SHOW_WINDOW_MENU, [
                    0,
                    pos.x as u32,
                    pos.y as u32,
                    0,
                    0,
                ])
            },
        }
    }

    fn fill_region(
        &self,
        window: Window,
        color: Color,
        region: Region,
    ) {
        if region.dim.is_empty() {
            return;
        }

        drop(
            self.conn
                .change_gc(self.gc, &xproto::ChangeGCAux::new().foreground(color)),
        );

        drop(
            self.conn
                .poly_fill_rectangle(window, self.gc, &[xproto::Rectangle {
                    x: region.pos.x as i16,
                    y: region.pos.y as i16,
                    width: region.dim.w as u16,
                    height: region.dim.h as u16,
                }]),
        );
    }

    fn draw_title(
        &self,
        window: Window,
        geometry: &FrameGeometry,
        title: Region,
        text: &str,
        background: Color,
    ) {
        if self.font.is_none() || text.is_empty() {
            return;
        }

        let center = title.center().x;
        let x = geometry
            .buttons
            .iter()
            .map(|button| button.region)
            .filter(|region| region.pos.x < center)
            .map(|region| region.pos.x + region.dim.w)
            .max()
            .unwrap_or(title.pos.x)
            + 6;

        let bytes = text.as_bytes();
        let bytes = &bytes[..std::cmp::min(bytes.len(), 255)];

        drop(self.conn.change_gc(
            self.gc,
            &xproto::ChangeGCAux::new()
                .foreground(self.colors.text)
                .background(background),
        ));

        drop(self.conn.image_text8(
            window,
            self.gc,
            x as i16,
            (title.center().y + 4) as i16,
            bytes,
        ));
    }

    #[inline]
    fn on_button_event(
        &self,
        event: &xproto::ButtonPressEvent,
        press: bool,
    ) -> Option<Event> {
        let window = event.event;
        let event = ButtonEvent::try_from(event).ok()?;

        Some(if press {
            Event::ButtonPress {
                window,
                event,
            }
        } else {
            Event::ButtonRelease {
                window,
                event,
            }
        })
    }

    #[inline]
    fn on_motion_notify(
        &self,
        event: &xproto::MotionNotifyEvent,
    ) -> Option<Event> {
        Some(Event::Motion {
            window: event.event,
            pos: Pos {
                x: event.event_x as i32,
                y: event.event_y as i32,
            },
        })
    }

    #[inline]
    fn on_enter_notify(
        &self,
        event: &xproto::EnterNotifyEvent,
    ) -> Option<Event> {
        Some(Event::Enter {
            window: event.event,
            pos: Pos {
                x: event.event_x as i32,
                y: event.event_y as i32,
            },
            ungrab: event.mode == xproto::NotifyMode::UNGRAB,
        })
    }

    #[inline]
    fn on_leave_notify(
        &self,
        event: &xproto::LeaveNotifyEvent,
    ) -> Option<Event> {
        Some(Event::Leave {
            window: event.event,
            ungrab: event.mode == xproto::NotifyMode::UNGRAB,
        })
    }

    #[inline]
    fn on_expose(
        &self,
        event: &xproto::ExposeEvent,
    ) -> Option<Event> {
        if event.count > 0 {
            return None;
        }

        Some(Event::Expose {
            window: event.window,
        })
    }

    #[inline]
    fn on_configure_notify(
        &self,
        event: &xproto::ConfigureNotifyEvent,
    ) -> Option<Event> {
        Some(Event::Configure {
            window: event.window,
            dim: Dim {
                w: event.width as i32,
                h: event.height as i32,
            },
        })
    }

    #[inline]
    fn on_property_notify(
        &self,
        event: &xproto::PropertyNotifyEvent,
    ) -> Option<Event> {
        let relevant = [
            self.atoms._NET_WM_STATE,
            self.atoms._NET_WM_ALLOWED_ACTIONS,
            self.atoms._NET_WM_WINDOW_TYPE,
            self.atoms._NET_WM_NAME,
            xproto::AtomEnum::WM_NAME.into(),
        ];

        if relevant.contains(&event.atom) {
            return Some(Event::Property {
                window: event.window,
            });
        }

        None
    }

    #[inline]
    fn on_client_message(
        &self,
        event: &xproto::ClientMessageEvent,
    ) -> Option<Event> {
        if event.format != 32 || event.type_ != self.atoms.WM_PROTOCOLS {
            return None;
        }

        if event.data.as_data32()[0] == self.atoms.WM_DELETE_WINDOW {
            return Some(Event::CloseRequest {
                window: event.window,
            });
        }

        None
    }

    #[inline]
    fn on_destroy_notify(
        &self,
        event: &xproto::DestroyNotifyEvent,
    ) -> Option<Event> {
        Some(Event::Destroy {
            window: event.window,
        })
    }

    #[inline]
    pub fn step(&self) -> Option<Event> {
        self.conn
            .wait_for_event()
            .ok()
            .and_then(|event| match event {
                XEvent::ButtonPress(e) => self.on_button_event(&e, true),
                XEvent::ButtonRelease(e) => self.on_button_event(&e, false),
                XEvent::MotionNotify(e) => self.on_motion_notify(&e),
                XEvent::EnterNotify(e) => self.on_enter_notify(&e),
                XEvent::LeaveNotify(e) => self.on_leave_notify(&e),
                XEvent::Expose(e) => self.on_expose(&e),
                XEvent::ConfigureNotify(e) => self.on_configure_notify(&e),
                XEvent::PropertyNotify(e) => self.on_property_notify(&e),
                XEvent::FocusIn(e) => Some(Event::Focus {
                    window: e.event,
                }),
                XEvent::FocusOut(e) => Some(Event::Focus {
                    window: e.event,
                }),
                XEvent::ClientMessage(e) => self.on_client_message(&e),
                XEvent::DestroyNotify(e) => self.on_destroy_notify(&e),
                _ => None,
            })
    }
}

impl<'conn, Conn: connection::Connection> WindowControl for XConnection<'conn, Conn> {
    fn window_state(
        &self,
        window: Window,
    ) -> WindowState {
        let client = self.clients.borrow().get(&window).copied();
        let client_dim = client
            .and_then(|client| self.get_window_geometry(client).ok())
            .map(|region| region.dim)
            .unwrap_or_default();

        WindowState::new(
            client_dim,
            self.get_window_flags(window),
            self.get_frame_type(window),
        )
        .with_title(self.get_window_name(window))
    }

    #[inline]
    fn button_layout(&self) -> ButtonLayout {
        self.preferences.button_layout
    }

    #[inline]
    fn click_action(
        &self,
        button: Button,
        click_count: ClickCount,
    ) -> ClickAction {
        self.preferences.click_action(button, click_count)
    }

    fn begin_grab(
        &self,
        window: Window,
        op: GrabOp,
        button: Button,
        root_pos: Pos,
        time: Timestamp,
    ) {
        let direction = match op {
            GrabOp::Moving => MOVERESIZE_MOVE,
            GrabOp::Resizing(grip) => moveresize_direction(grip),
        };

        // the window manager cannot grab while the implicit grab is held
        drop(self.conn.ungrab_pointer(time));

        let sent = self.send_root_message(window, self.atoms._NET_WM_MOVERESIZE, [
            root_pos.x as u32,
            root_pos.y as u32,
            direction,
            u8::from(button) as u32,
            SOURCE_APPLICATION,
        ]);

        match sent {
            Ok(()) => {
                self.grab.set(op.into());
                self.grab_window.set(window);
            },
            Err(err) => warn!("unable to begin {:?} on window {:#0x}: {}", op, window, err),
        }

        self.flush();
    }

    fn end_grab(
        &self,
        time: Timestamp,
    ) {
        if !self.grab.get().is_active() {
            return;
        }

        drop(self.conn.ungrab_pointer(time));
        drop(self.send_root_message(self.grab_window.get(), self.atoms._NET_WM_MOVERESIZE, [
            0,
            0,
            MOVERESIZE_CANCEL,
            0,
            SOURCE_APPLICATION,
        ]));

        self.grab.set(DragState::None);
        self.flush();
    }

    #[inline]
    fn active_grab(&self) -> DragState {
        self.grab.get()
    }

    fn dispatch(
        &self,
        window: Window,
        command: Command,
        time: Option<Timestamp>,
    ) {
        let time = time.unwrap_or(x11rb::CURRENT_TIME);

        if let Err(err) = self.send_command(window, command, time) {
            warn!("unable to send {:?} for window {:#0x}: {}", command, window, err);
        }

        self.flush();
    }

    fn set_cursor(
        &self,
        window: Window,
        shape: CursorShape,
    ) {
        if let Some(&cursor) = self.cursors.get(&shape) {
            drop(self.conn.change_window_attributes(
                window,
                &xproto::ChangeWindowAttributesAux::default().cursor(cursor),
            ));
        }
    }
}

impl<'conn, Conn: connection::Connection> Painter for XConnection<'conn, Conn> {
    fn paint(
        &self,
        window: Window,
        geometry: &FrameGeometry,
        state: &WindowState,
        armed: Option<ButtonFunction>,
    ) {
        let focused = state.flags.contains(FrameFlags::HAS_FOCUS);
        let (border, title_color) = if focused {
            (self.colors.focused, self.colors.title_focused)
        } else {
            (self.colors.unfocused, self.colors.title_unfocused)
        };

        self.fill_region(window, self.colors.background, geometry.frame_region());
        self.fill_region(window, border, geometry.visible_region());

        if let Some(title) = geometry.title {
            self.fill_region(window, title_color, title);

            for button in geometry.buttons.iter() {
                let color = if armed == Some(button.function) {
                    self.colors.button_armed
                } else {
                    self.colors.button
                };

                self.fill_region(window, color, button.region);
            }

            self.draw_title(window, geometry, title, &state.title, title_color);
        }
    }
}

fn moveresize_direction(grip: Grip) -> u32 {
    match grip {
        Grip::Corner(Corner::TopLeft) => 0,
        Grip::Edge(Edge::Top) => 1,
        Grip::Corner(Corner::TopRight) => 2,
        Grip::Edge(Edge::Right) => 3,
        Grip::Corner(Corner::BottomRight) => 4,
        Grip::Edge(Edge::Bottom) => 5,
        Grip::Corner(Corner::BottomLeft) => 6,
        Grip::Edge(Edge::Left) => 7,
    }
}

fn resource_class(key: &str) -> String {
    let mut chars = key.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
