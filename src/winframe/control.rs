use crate::borders::FrameGeometry;
use crate::geometry::Pos;
use crate::input::Grip;
use crate::window::FrameFlags;
use crate::window::FrameType;

/// Height of the band below the invisible top border that still resizes
/// northwards.
pub const TOP_RESIZE_HEIGHT: i32 = 4;

/// The semantic part of a frame a pointer coordinate falls on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FrameControl {
    ClientArea,
    Title,
    None,
    Resize(Grip),
}

impl FrameControl {
    #[inline]
    pub fn grip(&self) -> Option<Grip> {
        match self {
            FrameControl::Resize(grip) => Some(*grip),
            _ => None,
        }
    }
}

fn pick(
    has_vert: bool,
    has_horiz: bool,
    both: Grip,
    vert: Grip,
    horiz: Grip,
) -> Option<Grip> {
    match (has_vert, has_horiz) {
        (true, true) => Some(both),
        (true, false) => Some(vert),
        (false, true) => Some(horiz),
        (false, false) => None,
    }
}

/// Resize grip for a point outside the client area. The first matching edge
/// or corner band owns the point, even when its axis is not resizable.
fn resize_grip(
    pos: Pos,
    geometry: &FrameGeometry,
    flags: FrameFlags,
    kind: FrameType,
) -> Option<Grip> {
    let (x, y) = pos.values();
    let total = geometry.borders.total;
    let invisible = geometry.borders.invisible;

    let has_north = kind != FrameType::Attached;
    let has_vert = flags.contains(FrameFlags::ALLOWS_VERTICAL_RESIZE);
    let has_horiz = flags.contains(FrameFlags::ALLOWS_HORIZONTAL_RESIZE);

    let south = y >= geometry.height - total.bottom;
    let north = y < invisible.top;
    let west = x <= total.left;
    let east = x >= geometry.width - total.right;

    // south wins over north where the bands overlap
    if south && east {
        pick(has_vert, has_horiz, Grip::SE, Grip::S, Grip::E)
    } else if south && west {
        pick(has_vert, has_horiz, Grip::SW, Grip::S, Grip::W)
    } else if north && west && has_north {
        pick(has_vert, has_horiz, Grip::NW, Grip::N, Grip::W)
    } else if north && east && has_north {
        pick(has_vert, has_horiz, Grip::NE, Grip::N, Grip::E)
    } else if y < invisible.top + TOP_RESIZE_HEIGHT {
        Some(Grip::N).filter(|_| has_vert && has_north)
    } else if south {
        Some(Grip::S).filter(|_| has_vert)
    } else if west {
        Some(Grip::W).filter(|_| has_horiz)
    } else if east {
        Some(Grip::E).filter(|_| has_horiz)
    } else {
        None
    }
}

pub fn classify(
    pos: Pos,
    geometry: &FrameGeometry,
    flags: FrameFlags,
    kind: FrameType,
) -> FrameControl {
    if geometry.client_region().contains_pos(pos) {
        return FrameControl::ClientArea;
    }

    if let Some(grip) = resize_grip(pos, geometry, flags, kind) {
        return FrameControl::Resize(grip);
    }

    if pos.y >= geometry.borders.total.top {
        FrameControl::None
    } else {
        FrameControl::Title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::borders::FrameBorders;
    use crate::geometry::Dim;
    use crate::geometry::Extents;

    use strum::IntoEnumIterator;

    fn geometry() -> FrameGeometry {
        let borders = FrameBorders::new(Extents::new(4, 4, 24, 4), Extents::with_each_edge(6));
        FrameGeometry::new(borders, Dim::new(200, 100), false)
    }

    fn at(
        x: i32,
        y: i32,
        flags: FrameFlags,
        kind: FrameType,
    ) -> FrameControl {
        classify(Pos::new(x, y), &geometry(), flags, kind)
    }

    #[test]
    fn corner_scenarios() {
        let flags = FrameFlags::ALLOWS_RESIZE;

        assert_eq!(at(5, 5, flags, FrameType::Normal), FrameControl::Resize(Grip::NW));
        assert_eq!(at(110, 5, flags, FrameType::Normal), FrameControl::Resize(Grip::N));
        assert_eq!(at(110, 70, flags, FrameType::Normal), FrameControl::ClientArea);
        assert_eq!(at(215, 135, flags, FrameType::Normal), FrameControl::Resize(Grip::SE));
        assert_eq!(at(5, 135, flags, FrameType::Normal), FrameControl::Resize(Grip::SW));
        assert_eq!(at(215, 5, flags, FrameType::Normal), FrameControl::Resize(Grip::NE));
    }

    #[test]
    fn edges_and_title() {
        let flags = FrameFlags::ALLOWS_RESIZE;

        assert_eq!(at(110, 8, flags, FrameType::Normal), FrameControl::Resize(Grip::N));
        assert_eq!(at(110, 10, flags, FrameType::Normal), FrameControl::Title);
        assert_eq!(at(110, 29, flags, FrameType::Normal), FrameControl::Title);
        assert_eq!(at(110, 135, flags, FrameType::Normal), FrameControl::Resize(Grip::S));
        assert_eq!(at(5, 70, flags, FrameType::Normal), FrameControl::Resize(Grip::W));
        assert_eq!(at(215, 70, flags, FrameType::Normal), FrameControl::Resize(Grip::E));
    }

    #[test]
    fn client_area_is_half_open() {
        let flags = FrameFlags::ALLOWS_RESIZE;

        assert_eq!(at(10, 30, flags, FrameType::Normal), FrameControl::ClientArea);
        assert_eq!(at(209, 129, flags, FrameType::Normal), FrameControl::ClientArea);
        assert_eq!(at(210, 70, flags, FrameType::Normal), FrameControl::Resize(Grip::E));
        assert_eq!(at(110, 130, flags, FrameType::Normal), FrameControl::Resize(Grip::S));
    }

    #[test]
    fn attached_frames_never_resize_north() {
        let flags = FrameFlags::ALLOWS_RESIZE;

        for x in 0..220 {
            for y in 0..30 {
                let control = at(x, y, flags, FrameType::Attached);
                assert!(
                    control.grip().map_or(true, |grip| !grip.is_top_grip()),
                    "({}, {}) -> {:?}",
                    x,
                    y,
                    control
                );
            }
        }

        assert_eq!(at(5, 5, flags, FrameType::Attached), FrameControl::Title);
        assert_eq!(at(110, 5, flags, FrameType::Attached), FrameControl::Title);
    }

    #[test]
    fn single_axis_corners_fall_back_to_that_axis() {
        let vert = FrameFlags::ALLOWS_VERTICAL_RESIZE;
        let horiz = FrameFlags::ALLOWS_HORIZONTAL_RESIZE;

        assert_eq!(at(215, 135, vert, FrameType::Normal), FrameControl::Resize(Grip::S));
        assert_eq!(at(215, 135, horiz, FrameType::Normal), FrameControl::Resize(Grip::E));
        assert_eq!(at(5, 5, vert, FrameType::Normal), FrameControl::Resize(Grip::N));
        assert_eq!(at(5, 5, horiz, FrameType::Normal), FrameControl::Resize(Grip::W));
    }

    #[test]
    fn matched_band_without_resize_goes_to_title_or_none() {
        let empty = FrameFlags::empty();
        let horiz = FrameFlags::ALLOWS_HORIZONTAL_RESIZE;

        assert_eq!(at(5, 5, empty, FrameType::Normal), FrameControl::Title);
        assert_eq!(at(215, 135, empty, FrameType::Normal), FrameControl::None);
        assert_eq!(at(5, 70, empty, FrameType::Normal), FrameControl::None);

        // the top band owns the point even though the left edge could resize
        assert_eq!(at(8, 8, horiz, FrameType::Normal), FrameControl::Title);
    }

    #[test]
    fn south_wins_over_north_on_overlap() {
        let borders = FrameBorders::new(Extents::new(4, 4, 4, 4), Extents::with_each_edge(6));
        let geometry = FrameGeometry::new(borders, Dim::new(200, 100), true);

        assert_eq!(geometry.height, 20);
        assert_eq!(
            classify(Pos::new(5, 10), &geometry, FrameFlags::ALLOWS_RESIZE, FrameType::Normal),
            FrameControl::Resize(Grip::SW)
        );
        assert_eq!(
            classify(Pos::new(110, 12), &geometry, FrameFlags::ALLOWS_RESIZE, FrameType::Normal),
            FrameControl::Resize(Grip::S)
        );
    }

    #[test]
    fn every_point_has_exactly_one_control() {
        let geometry = geometry();

        for kind in FrameType::iter() {
            for flags in [
                FrameFlags::empty(),
                FrameFlags::ALLOWS_VERTICAL_RESIZE,
                FrameFlags::ALLOWS_HORIZONTAL_RESIZE,
                FrameFlags::ALLOWS_RESIZE,
            ]
            .iter()
            {
                for x in -2..geometry.width + 2 {
                    for y in -2..geometry.height + 2 {
                        let control = classify(Pos::new(x, y), &geometry, *flags, kind);

                        if let Some(grip) = control.grip() {
                            let vertical = grip.is_top_grip() || grip.is_bottom_grip();
                            assert!(!vertical || flags.contains(FrameFlags::ALLOWS_VERTICAL_RESIZE));
                        }
                    }
                }
            }
        }
    }
}
