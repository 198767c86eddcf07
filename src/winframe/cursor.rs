use crate::control::FrameControl;
use crate::geometry::Corner;
use crate::geometry::Edge;
use crate::input::Grip;

use strum::EnumIter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum CursorShape {
    Default,
    NorthResize,
    SouthResize,
    WestResize,
    EastResize,
    NorthWestResize,
    NorthEastResize,
    SouthWestResize,
    SouthEastResize,
}

impl CursorShape {
    /// Name of the shape in the X cursor font and cursor themes.
    pub fn name(&self) -> &'static str {
        match self {
            CursorShape::Default => "left_ptr",
            CursorShape::NorthResize => "top_side",
            CursorShape::SouthResize => "bottom_side",
            CursorShape::WestResize => "left_side",
            CursorShape::EastResize => "right_side",
            CursorShape::NorthWestResize => "top_left_corner",
            CursorShape::NorthEastResize => "top_right_corner",
            CursorShape::SouthWestResize => "bottom_left_corner",
            CursorShape::SouthEastResize => "bottom_right_corner",
        }
    }
}

impl From<Grip> for CursorShape {
    fn from(grip: Grip) -> Self {
        match grip {
            Grip::Edge(Edge::Top) => CursorShape::NorthResize,
            Grip::Edge(Edge::Bottom) => CursorShape::SouthResize,
            Grip::Edge(Edge::Left) => CursorShape::WestResize,
            Grip::Edge(Edge::Right) => CursorShape::EastResize,
            Grip::Corner(Corner::TopLeft) => CursorShape::NorthWestResize,
            Grip::Corner(Corner::TopRight) => CursorShape::NorthEastResize,
            Grip::Corner(Corner::BottomLeft) => CursorShape::SouthWestResize,
            Grip::Corner(Corner::BottomRight) => CursorShape::SouthEastResize,
        }
    }
}

pub fn select_cursor(control: FrameControl) -> CursorShape {
    match control {
        FrameControl::Resize(grip) => grip.into(),
        FrameControl::ClientArea | FrameControl::Title | FrameControl::None => {
            CursorShape::Default
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    #[test]
    fn each_grip_has_its_own_shape() {
        let shapes: HashSet<CursorShape> = Grip::ALL
            .iter()
            .map(|grip| select_cursor(FrameControl::Resize(*grip)))
            .collect();

        assert_eq!(shapes.len(), 8);
        assert!(!shapes.contains(&CursorShape::Default));
    }

    #[test]
    fn non_resize_controls_use_the_default_shape() {
        assert_eq!(select_cursor(FrameControl::ClientArea), CursorShape::Default);
        assert_eq!(select_cursor(FrameControl::Title), CursorShape::Default);
        assert_eq!(select_cursor(FrameControl::None), CursorShape::Default);
    }

    #[test]
    fn shape_names_are_unique() {
        let names: HashSet<&str> = CursorShape::iter().map(|shape| shape.name()).collect();

        assert_eq!(names.len(), CursorShape::iter().count());
        assert_eq!(CursorShape::from(Grip::NE).name(), "top_right_corner");
    }
}
