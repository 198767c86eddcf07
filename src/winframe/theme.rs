use crate::borders::FrameBorders;
use crate::geometry::Dim;
use crate::geometry::Extents;
use crate::window::FrameFlags;
use crate::window::FrameType;

pub type Color = u32;

/// Metrics a frame is laid out with. Implementations must be pure: the same
/// type and flags always yield the same borders.
pub trait Theme {
    fn frame_borders(
        &self,
        kind: FrameType,
        flags: FrameFlags,
    ) -> FrameBorders;

    fn title_height(
        &self,
        kind: FrameType,
    ) -> i32;

    fn button_dim(
        &self,
        kind: FrameType,
    ) -> Dim;

    fn button_spacing(&self) -> i32;
}

/// Visible border widths for one frame type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameLayout {
    pub left_width: i32,
    pub right_width: i32,
    pub top_height: i32,
    pub bottom_height: i32,
    pub title_height: i32,
}

impl FrameLayout {
    pub const NONE: Self = Self {
        left_width: 0,
        right_width: 0,
        top_height: 0,
        bottom_height: 0,
        title_height: 0,
    };

    pub const fn titled(
        border: i32,
        title_height: i32,
    ) -> Self {
        Self {
            left_width: border,
            right_width: border,
            top_height: title_height,
            bottom_height: border,
            title_height,
        }
    }

    pub const fn border_only(border: i32) -> Self {
        Self {
            left_width: border,
            right_width: border,
            top_height: border,
            bottom_height: border,
            title_height: 0,
        }
    }

    pub fn extents(&self) -> Extents {
        Extents {
            left: self.left_width,
            right: self.right_width,
            top: self.top_height,
            bottom: self.bottom_height,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameStyle {
    pub normal: FrameLayout,
    pub small: FrameLayout,
    pub border: FrameLayout,
    pub draggable_border_width: i32,
    pub button_pad: i32,
    pub button_spacing: i32,
}

impl FrameStyle {
    pub const DEFAULT: Self = Self {
        normal: FrameLayout::titled(4, 24),
        small: FrameLayout::titled(3, 18),
        border: FrameLayout::border_only(4),
        draggable_border_width: 10,
        button_pad: 3,
        button_spacing: 2,
    };

    pub fn with_draggable_border_width(
        mut self,
        width: i32,
    ) -> Self {
        self.draggable_border_width = std::cmp::max(0, width);
        self
    }

    pub fn layout(
        &self,
        kind: FrameType,
    ) -> FrameLayout {
        match kind {
            FrameType::Normal | FrameType::Dialog | FrameType::ModalDialog => self.normal,
            FrameType::Utility | FrameType::Menu | FrameType::Attached => self.small,
            FrameType::Border => self.border,
            FrameType::Override | FrameType::Desktop => FrameLayout::NONE,
        }
    }
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Theme for FrameStyle {
    fn frame_borders(
        &self,
        kind: FrameType,
        flags: FrameFlags,
    ) -> FrameBorders {
        if !kind.is_decorated() {
            return FrameBorders::default();
        }

        let flags = flags.normalized();
        let mut visible = self.layout(kind).extents();
        let mut invisible = Extents::ZERO;

        if flags.contains(FrameFlags::MAXIMIZED) {
            visible.left = 0;
            visible.right = 0;
            visible.bottom = 0;
        }

        if flags.contains(FrameFlags::TILED_LEFT) {
            visible.left = 0;
        }

        if flags.contains(FrameFlags::TILED_RIGHT) {
            visible.right = 0;
        }

        let draggable = self.draggable_border_width;

        if flags.contains(FrameFlags::ALLOWS_HORIZONTAL_RESIZE) {
            invisible.left = std::cmp::max(0, draggable - visible.left);
            invisible.right = std::cmp::max(0, draggable - visible.right);
        }

        if flags.contains(FrameFlags::ALLOWS_VERTICAL_RESIZE) {
            invisible.bottom = std::cmp::max(0, draggable - visible.bottom);
            invisible.top = std::cmp::max(0, draggable - 2);
        }

        if flags.contains(FrameFlags::MAXIMIZED) {
            invisible = Extents::ZERO;
        }

        if flags.contains(FrameFlags::TILED_LEFT) {
            invisible.left = 0;
        }

        if flags.contains(FrameFlags::TILED_RIGHT) {
            invisible.right = 0;
        }

        FrameBorders::new(visible, invisible)
    }

    #[inline]
    fn title_height(
        &self,
        kind: FrameType,
    ) -> i32 {
        self.layout(kind).title_height
    }

    fn button_dim(
        &self,
        kind: FrameType,
    ) -> Dim {
        let side = std::cmp::max(0, self.title_height(kind) - 2 * self.button_pad);

        Dim {
            w: side,
            h: side,
        }
    }

    #[inline]
    fn button_spacing(&self) -> i32 {
        self.button_spacing
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    pub background: Color,
    pub focused: Color,
    pub unfocused: Color,
    pub title_focused: Color,
    pub title_unfocused: Color,
    pub button: Color,
    pub button_armed: Color,
    pub text: Color,
}

impl ColorScheme {
    pub const DEFAULT: Self = Self {
        background: 0x000000,
        focused: 0xe78a53,
        unfocused: 0x333333,
        title_focused: 0xc1c1c1,
        title_unfocused: 0x999999,
        button: 0x5f8787,
        button_armed: 0xfbcb97,
        text: 0x121212,
    };
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resizable_normal_frame_gets_invisible_grab_padding() {
        let borders = FrameStyle::DEFAULT.frame_borders(FrameType::Normal, FrameFlags::ALLOWS_RESIZE);

        assert_eq!(borders.visible, Extents::new(4, 4, 24, 4));
        assert_eq!(borders.invisible, Extents::new(6, 6, 8, 6));
        assert_eq!(borders.total, Extents::new(10, 10, 32, 10));
    }

    #[test]
    fn fixed_size_frame_has_no_invisible_borders() {
        let borders = FrameStyle::DEFAULT.frame_borders(FrameType::Dialog, FrameFlags::empty());

        assert!(borders.invisible.is_zero());
        assert_eq!(borders.total, borders.visible);
    }

    #[test]
    fn maximized_frame_keeps_only_the_title_bar() {
        let flags = FrameFlags::ALLOWS_RESIZE | FrameFlags::MAXIMIZED;
        let borders = FrameStyle::DEFAULT.frame_borders(FrameType::Normal, flags);

        assert_eq!(borders.total, Extents::new(0, 0, 24, 0));
    }

    #[test]
    fn tiled_edges_lose_their_borders() {
        let flags = FrameFlags::ALLOWS_RESIZE | FrameFlags::TILED_LEFT;
        let borders = FrameStyle::DEFAULT.frame_borders(FrameType::Normal, flags);

        assert_eq!(borders.total.left, 0);
        assert_eq!(borders.total.right, 10);
    }

    #[test]
    fn undecorated_types_have_no_borders() {
        let style = FrameStyle::DEFAULT;

        assert!(style.frame_borders(FrameType::Override, FrameFlags::all()).total.is_zero());
        assert!(style.frame_borders(FrameType::Desktop, FrameFlags::all()).total.is_zero());
    }

    #[test]
    fn buttons_fit_inside_the_title_bar() {
        let style = FrameStyle::DEFAULT;

        assert_eq!(style.button_dim(FrameType::Normal), Dim::new(18, 18));
        assert_eq!(style.button_dim(FrameType::Border), Dim::new(0, 0));
    }
}
