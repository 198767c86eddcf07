use crate::button::ButtonFunction;
use crate::button::ButtonLayout;
use crate::geometry::Dim;
use crate::geometry::Extents;
use crate::geometry::Pos;
use crate::geometry::Region;
use crate::theme::Theme;
use crate::window::FrameFlags;
use crate::window::FrameType;

/// Frame insets around the client. The invisible part is grabbable for
/// resizing but never drawn.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FrameBorders {
    pub total: Extents,
    pub visible: Extents,
    pub invisible: Extents,
}

impl FrameBorders {
    pub fn new(
        visible: Extents,
        invisible: Extents,
    ) -> Self {
        Self {
            total: visible + invisible,
            visible,
            invisible,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PlacedButton {
    pub function: ButtonFunction,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameGeometry {
    pub width: i32,
    pub height: i32,
    pub borders: FrameBorders,
    pub title: Option<Region>,
    pub buttons: Vec<PlacedButton>,
}

impl FrameGeometry {
    /// Frame size for the given insets around a client; a shaded frame keeps
    /// only its borders.
    pub fn new(
        borders: FrameBorders,
        client_dim: Dim,
        shaded: bool,
    ) -> Self {
        let client_dim = client_dim.clamped();
        let frame_dim = Dim {
            h: if shaded { 0 } else { client_dim.h },
            ..client_dim
        } + borders.total;

        Self {
            width: frame_dim.w,
            height: frame_dim.h,
            borders,
            title: None,
            buttons: Vec::new(),
        }
    }

    pub fn resolve(
        theme: &dyn Theme,
        kind: FrameType,
        flags: FrameFlags,
        client_dim: Dim,
        layout: &ButtonLayout,
    ) -> Self {
        let flags = flags.normalized();
        let borders = theme.frame_borders(kind, flags);
        let mut geometry = Self::new(borders, client_dim, flags.contains(FrameFlags::SHADED));

        if kind.has_title() {
            let title = geometry.visible_region();
            let title = Region {
                dim: Dim {
                    w: title.dim.w,
                    h: std::cmp::min(theme.title_height(kind), borders.visible.top),
                },
                ..title
            };

            let (left, right) = layout.resolve(flags);
            geometry.buttons = place_buttons(
                title,
                theme.button_dim(kind),
                theme.button_spacing(),
                &left,
                &right,
            );
            geometry.title = Some(title);
        }

        geometry
    }

    #[inline]
    pub fn frame_region(&self) -> Region {
        Region::new(0, 0, self.width, self.height)
    }

    pub fn client_region(&self) -> Region {
        self.frame_region().without_extents(self.borders.total)
    }

    pub fn visible_region(&self) -> Region {
        self.frame_region().without_extents(self.borders.invisible)
    }

    /// Whether there is anything to draw around the client.
    #[inline]
    pub fn has_border_area(&self) -> bool {
        !self.borders.total.is_zero()
    }

    pub fn button_at(
        &self,
        pos: Pos,
    ) -> Option<&PlacedButton> {
        self.buttons
            .iter()
            .find(|button| button.region.contains_pos(pos))
    }
}

/// Lays out the left group from the left edge of the title bar and the right
/// group so that it ends flush with the right edge. Both groups keep their
/// configured order; a group stops at its first button that does not fit.
fn place_buttons(
    title: Region,
    button_dim: Dim,
    spacing: i32,
    left: &[ButtonFunction],
    right: &[ButtonFunction],
) -> Vec<PlacedButton> {
    let mut placed = Vec::with_capacity(left.len() + right.len());

    if button_dim.is_empty() || button_dim.h > title.dim.h {
        return placed;
    }

    let y = title.pos.y + (title.dim.h - button_dim.h) / 2;
    let bounds = title.without_extents(Extents::new(spacing, spacing, 0, 0));
    let stride = button_dim.w + spacing;
    let mut left_limit = bounds.pos.x;

    for &function in left {
        let region = Region {
            pos: Pos::new(left_limit, y),
            dim: button_dim,
        };

        if !bounds.contains(region) {
            break;
        }

        placed.push(PlacedButton {
            function,
            region,
        });

        left_limit += stride;
    }

    let right_limit = bounds.pos.x + bounds.dim.w;
    let count = right
        .iter()
        .scan(-spacing, |width, _| {
            *width += stride;
            Some(*width)
        })
        .take_while(|&width| right_limit - width >= left_limit)
        .count();

    let mut x = right_limit - (count as i32 * stride - spacing);

    for &function in &right[..count] {
        placed.push(PlacedButton {
            function,
            region: Region {
                pos: Pos::new(x, y),
                dim: button_dim,
            },
        });

        x += stride;
    }

    placed
}
