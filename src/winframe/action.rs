use crate::button::ButtonFunction;
use crate::geometry::Pos;
use crate::input::Button;
use crate::window::FrameFlags;

use strum::EnumIter;
use strum_macros::EnumString;

/// A configurable reaction to a click on the title bar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, EnumString)]
pub enum ClickAction {
    #[strum(serialize = "none")]
    None,
    #[strum(serialize = "toggle-shade")]
    ToggleShade,
    #[strum(serialize = "toggle-maximize")]
    ToggleMaximize,
    #[strum(serialize = "toggle-maximize-horizontally")]
    ToggleMaximizeHorizontally,
    #[strum(serialize = "toggle-maximize-vertically")]
    ToggleMaximizeVertically,
    #[strum(serialize = "minimize")]
    Minimize,
    #[strum(serialize = "lower")]
    Lower,
    #[strum(serialize = "menu")]
    Menu,
}

impl Default for ClickAction {
    fn default() -> Self {
        ClickAction::None
    }
}

/// A window-management request forwarded to the window manager.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    Delete,
    Minimize,
    Maximize,
    Unmaximize,
    ToggleMaximizeHorizontally,
    ToggleMaximizeVertically,
    Shade,
    Unshade,
    LowerAndUnfocus,
    ShowMenu {
        pos: Pos,
        button: Button,
    },
    MakeAbove,
    Unabove,
    Stick,
    Unstick,
}

fn toggle_shade(flags: FrameFlags) -> Command {
    if flags.contains(FrameFlags::SHADED) {
        Command::Unshade
    } else {
        Command::Shade
    }
}

fn toggle_maximize(flags: FrameFlags) -> Command {
    if flags.contains(FrameFlags::MAXIMIZED) {
        Command::Unmaximize
    } else {
        Command::Maximize
    }
}

impl ClickAction {
    /// The command this action resolves to for a window in the given state,
    /// or nothing when the window does not permit it.
    pub fn command(
        &self,
        flags: FrameFlags,
        root_pos: Pos,
        button: Button,
    ) -> Option<Command> {
        match self {
            ClickAction::None => None,
            ClickAction::ToggleShade => {
                Some(toggle_shade(flags)).filter(|_| flags.contains(FrameFlags::ALLOWS_SHADE))
            },
            ClickAction::ToggleMaximize => {
                Some(toggle_maximize(flags)).filter(|_| flags.contains(FrameFlags::ALLOWS_MAXIMIZE))
            },
            ClickAction::ToggleMaximizeHorizontally => Some(Command::ToggleMaximizeHorizontally)
                .filter(|_| flags.contains(FrameFlags::ALLOWS_MAXIMIZE)),
            ClickAction::ToggleMaximizeVertically => Some(Command::ToggleMaximizeVertically)
                .filter(|_| flags.contains(FrameFlags::ALLOWS_MAXIMIZE)),
            ClickAction::Minimize => {
                Some(Command::Minimize).filter(|_| flags.contains(FrameFlags::ALLOWS_MINIMIZE))
            },
            ClickAction::Lower => Some(Command::LowerAndUnfocus),
            ClickAction::Menu => Some(Command::ShowMenu {
                pos: root_pos,
                button,
            }),
        }
    }
}

impl ButtonFunction {
    /// The command an activated title button issues; `menu_pos` is where a
    /// window menu opens, in root coordinates.
    pub fn command(
        &self,
        flags: FrameFlags,
        menu_pos: Pos,
    ) -> Option<Command> {
        if !self.is_allowed(flags) {
            return None;
        }

        Some(match self {
            ButtonFunction::Menu => Command::ShowMenu {
                pos: menu_pos,
                button: Button::Left,
            },
            ButtonFunction::Minimize => Command::Minimize,
            ButtonFunction::Maximize => toggle_maximize(flags),
            ButtonFunction::Close => Command::Delete,
            ButtonFunction::Shade => Command::Shade,
            ButtonFunction::Unshade => Command::Unshade,
            ButtonFunction::Above => Command::MakeAbove,
            ButtonFunction::Unabove => Command::Unabove,
            ButtonFunction::Stick => Command::Stick,
            ButtonFunction::Unstick => Command::Unstick,
        })
    }
}
