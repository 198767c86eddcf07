use crate::geometry::Dim;

use bitflags::bitflags;
use strum::EnumIter;

pub type Window = u32;

#[derive(Debug, Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Hash, EnumIter)]
pub enum FrameType {
    Normal,
    Dialog,
    ModalDialog,
    Utility,
    Menu,
    Border,
    Attached,
    Override,
    Desktop,
}

impl FrameType {
    pub fn is_decorated(&self) -> bool {
        !matches!(self, FrameType::Override | FrameType::Desktop)
    }

    pub fn has_title(&self) -> bool {
        self.is_decorated() && *self != FrameType::Border
    }
}

impl Default for FrameType {
    fn default() -> Self {
        FrameType::Normal
    }
}

bitflags! {
    /// Window-manager permissions and state bits that shape a frame.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FrameFlags: u32 {
        const ALLOWS_DELETE            = 1 << 0;
        const ALLOWS_MENU              = 1 << 1;
        const ALLOWS_MINIMIZE          = 1 << 2;
        const ALLOWS_MAXIMIZE          = 1 << 3;
        const ALLOWS_VERTICAL_RESIZE   = 1 << 4;
        const ALLOWS_HORIZONTAL_RESIZE = 1 << 5;
        const HAS_FOCUS                = 1 << 6;
        const SHADED                   = 1 << 7;
        const STUCK                    = 1 << 8;
        const MAXIMIZED                = 1 << 9;
        const ALLOWS_SHADE             = 1 << 10;
        const ALLOWS_MOVE              = 1 << 11;
        const ABOVE                    = 1 << 12;
        const TILED_LEFT               = 1 << 13;
        const TILED_RIGHT              = 1 << 14;

        const ALLOWS_RESIZE = Self::ALLOWS_VERTICAL_RESIZE.bits()
            | Self::ALLOWS_HORIZONTAL_RESIZE.bits();
        const TILED = Self::TILED_LEFT.bits() | Self::TILED_RIGHT.bits();
    }
}

impl FrameFlags {
    /// Maximized windows are never tiled; the tiled bits are dropped.
    pub fn normalized(self) -> Self {
        if self.contains(FrameFlags::MAXIMIZED) {
            self - FrameFlags::TILED
        } else {
            self
        }
    }
}

/// A read-only snapshot of everything the frame needs to know about its
/// window at the moment of a query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowState {
    pub client_dim: Dim,
    pub flags: FrameFlags,
    pub kind: FrameType,
    pub title: String,
}

impl WindowState {
    pub fn new(
        client_dim: Dim,
        flags: FrameFlags,
        kind: FrameType,
    ) -> Self {
        Self {
            client_dim,
            flags: flags.normalized(),
            kind,
            title: String::new(),
        }
    }

    pub fn with_title(
        mut self,
        title: impl Into<String>,
    ) -> Self {
        self.title = title.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maximized_drops_tiled_bits() {
        let flags = FrameFlags::MAXIMIZED | FrameFlags::TILED_LEFT | FrameFlags::SHADED;

        assert_eq!(flags.normalized(), FrameFlags::MAXIMIZED | FrameFlags::SHADED);
    }

    #[test]
    fn tiled_without_maximized_is_kept() {
        let flags = FrameFlags::TILED_RIGHT | FrameFlags::SHADED;

        assert_eq!(flags.normalized(), flags);
    }

    #[test]
    fn undecorated_types_have_no_title() {
        assert!(!FrameType::Override.has_title());
        assert!(!FrameType::Desktop.has_title());
        assert!(!FrameType::Border.has_title());
        assert!(FrameType::Attached.has_title());
    }
}
