use crate::geometry::Corner;
use crate::geometry::Edge;
use crate::geometry::Pos;

use strum::EnumIter;

pub type Timestamp = u32;
pub type ClickCount = u8;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, EnumIter)]
pub enum Button {
    Left,
    Middle,
    Right,
    ScrollUp,
    ScrollDown,
    Backward,
    Forward,
}

impl Button {
    #[inline]
    pub fn is_primary(&self) -> bool {
        *self == Button::Left
    }
}

/// The edge or corner a resize operation is anchored on.
#[derive(Debug, Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum Grip {
    Edge(Edge),
    Corner(Corner),
}

impl Grip {
    pub const N: Self = Grip::Edge(Edge::Top);
    pub const S: Self = Grip::Edge(Edge::Bottom);
    pub const E: Self = Grip::Edge(Edge::Right);
    pub const W: Self = Grip::Edge(Edge::Left);
    pub const NE: Self = Grip::Corner(Corner::TopRight);
    pub const NW: Self = Grip::Corner(Corner::TopLeft);
    pub const SE: Self = Grip::Corner(Corner::BottomRight);
    pub const SW: Self = Grip::Corner(Corner::BottomLeft);

    #[cfg(test)]
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::S,
        Self::E,
        Self::W,
        Self::NE,
        Self::NW,
        Self::SE,
        Self::SW,
    ];

    pub fn is_top_grip(&self) -> bool {
        *self == Grip::Edge(Edge::Top)
            || *self == Grip::Corner(Corner::TopLeft)
            || *self == Grip::Corner(Corner::TopRight)
    }

    pub fn is_bottom_grip(&self) -> bool {
        *self == Grip::Edge(Edge::Bottom)
            || *self == Grip::Corner(Corner::BottomLeft)
            || *self == Grip::Corner(Corner::BottomRight)
    }
}

/// A pointer button press or release on the frame, in frame-relative and
/// root coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ButtonEvent {
    pub pos: Pos,
    pub root_pos: Pos,
    pub button: Button,
    pub click_count: ClickCount,
    pub time: Timestamp,
}

impl ButtonEvent {
    #[inline]
    pub fn is_multi_click(&self) -> bool {
        self.click_count >= 2
    }
}

/// Derives click counts from raw presses the way toolkits synthesize
/// double and triple clicks.
#[derive(Debug, Clone)]
pub struct ClickCounter {
    max_interval: Timestamp,
    max_distance: i32,
    last: Option<(Button, Pos, Timestamp)>,
    count: ClickCount,
}

impl ClickCounter {
    pub const MAX_CLICK_COUNT: ClickCount = 3;

    pub fn new(
        max_interval: Timestamp,
        max_distance: i32,
    ) -> Self {
        Self {
            max_interval,
            max_distance,
            last: None,
            count: 0,
        }
    }

    pub fn register(
        &mut self,
        button: Button,
        root_pos: Pos,
        time: Timestamp,
    ) -> ClickCount {
        let count = match self.last {
            Some((last_button, last_pos, last_time))
                if last_button == button
                    && time.wrapping_sub(last_time) <= self.max_interval
                    && last_pos.dist(root_pos).chebyshev() <= self.max_distance
                    && self.count < Self::MAX_CLICK_COUNT =>
            {
                self.count + 1
            },
            _ => 1,
        };

        self.count = count;
        self.last = Some((button, root_pos, time));

        count
    }

    pub fn reset(&mut self) {
        self.last = None;
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_presses_count_up_to_triple_click() {
        let mut counter = ClickCounter::new(400, 5);
        let pos = Pos::new(100, 100);

        assert_eq!(counter.register(Button::Left, pos, 1000), 1);
        assert_eq!(counter.register(Button::Left, pos, 1200), 2);
        assert_eq!(counter.register(Button::Left, pos, 1300), 3);
        assert_eq!(counter.register(Button::Left, pos, 1400), 1);
    }

    #[test]
    fn slow_distant_or_different_presses_restart_the_count() {
        let mut counter = ClickCounter::new(400, 5);
        let pos = Pos::new(100, 100);

        assert_eq!(counter.register(Button::Left, pos, 1000), 1);
        assert_eq!(counter.register(Button::Left, pos, 1500), 1);
        assert_eq!(counter.register(Button::Left, Pos::new(110, 100), 1600), 1);
        assert_eq!(counter.register(Button::Middle, Pos::new(110, 100), 1650), 1);

        counter.reset();
        assert_eq!(counter.register(Button::Middle, Pos::new(110, 100), 1700), 1);
    }

    #[test]
    fn grips_know_their_vertical_side() {
        assert!(Grip::NW.is_top_grip());
        assert!(Grip::N.is_top_grip());
        assert!(!Grip::W.is_top_grip());
        assert!(Grip::SE.is_bottom_grip());
        assert!(!Grip::NE.is_bottom_grip());
    }
}
