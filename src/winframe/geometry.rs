use std::ops::Add;

pub type Extents = Padding;

#[derive(Debug, PartialOrd, Ord, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Debug, Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Default, Copy, Clone, Hash, PartialOrd, Ord, PartialEq, Eq)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(
        x: i32,
        y: i32,
    ) -> Self {
        Self {
            x,
            y,
        }
    }

    pub fn values(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn relative_to(
        &self,
        pos: Self,
    ) -> Self {
        Pos {
            x: self.x - pos.x,
            y: self.y - pos.y,
        }
    }

    pub fn dist(
        &self,
        pos: Self,
    ) -> Distance {
        Distance {
            dx: pos.x - self.x,
            dy: pos.y - self.y,
        }
    }
}

impl Add<Pos> for Pos {
    type Output = Self;

    fn add(
        self,
        other: Pos,
    ) -> Self::Output {
        Self::Output {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

#[derive(Debug, Default, Copy, Clone, Hash, PartialOrd, Ord, PartialEq, Eq)]
pub struct Dim {
    pub w: i32,
    pub h: i32,
}

impl Dim {
    pub fn new(
        w: i32,
        h: i32,
    ) -> Self {
        Self {
            w,
            h,
        }
    }

    /// Negative components are clamped to zero.
    pub fn clamped(self) -> Self {
        Self {
            w: std::cmp::max(0, self.w),
            h: std::cmp::max(0, self.h),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }
}

#[derive(Debug, Default, Copy, Clone, Hash, PartialOrd, Ord, PartialEq, Eq)]
pub struct Region {
    pub pos: Pos,
    pub dim: Dim,
}

impl Region {
    pub fn new(
        x: i32,
        y: i32,
        w: i32,
        h: i32,
    ) -> Self {
        Self {
            pos: Pos {
                x,
                y,
            },
            dim: Dim {
                w,
                h,
            },
        }
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains_pos(
        &self,
        pos: Pos,
    ) -> bool {
        pos.x >= self.pos.x
            && pos.y >= self.pos.y
            && pos.x < self.pos.x + self.dim.w
            && pos.y < self.pos.y + self.dim.h
    }

    pub fn contains(
        &self,
        region: Region,
    ) -> bool {
        region.pos.x >= self.pos.x
            && region.pos.y >= self.pos.y
            && region.pos.x + region.dim.w <= self.pos.x + self.dim.w
            && region.pos.y + region.dim.h <= self.pos.y + self.dim.h
    }

    pub fn without_extents(
        mut self,
        extents: Extents,
    ) -> Self {
        self.pos.x += extents.left;
        self.pos.y += extents.top;
        self.dim.w -= extents.left + extents.right;
        self.dim.h -= extents.top + extents.bottom;
        self
    }

    pub fn with_extents(
        mut self,
        extents: Extents,
    ) -> Self {
        self.pos.x -= extents.left;
        self.pos.y -= extents.top;
        self.dim.w += extents.left + extents.right;
        self.dim.h += extents.top + extents.bottom;
        self
    }

    pub fn center(&self) -> Pos {
        Pos {
            x: self.pos.x + self.dim.w / 2,
            y: self.pos.y + self.dim.h / 2,
        }
    }
}

#[derive(Debug, Default, Copy, Clone, Hash, PartialEq, Eq)]
pub struct Padding {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Padding {
    pub const ZERO: Self = Self {
        left: 0,
        right: 0,
        top: 0,
        bottom: 0,
    };

    pub fn new(
        left: i32,
        right: i32,
        top: i32,
        bottom: i32,
    ) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub fn with_each_edge(size: i32) -> Self {
        Self {
            left: size,
            right: size,
            top: size,
            bottom: size,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Add<Padding> for Padding {
    type Output = Self;

    fn add(
        self,
        other: Padding,
    ) -> Self::Output {
        Self::Output {
            left: self.left + other.left,
            right: self.right + other.right,
            top: self.top + other.top,
            bottom: self.bottom + other.bottom,
        }
    }
}

impl Add<Padding> for Dim {
    type Output = Self;

    fn add(
        self,
        padding: Padding,
    ) -> Self::Output {
        Self::Output {
            w: self.w + padding.left + padding.right,
            h: self.h + padding.top + padding.bottom,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialOrd, Ord, PartialEq, Eq)]
pub struct Distance {
    pub dx: i32,
    pub dy: i32,
}

impl Distance {
    /// Largest per-axis displacement.
    pub fn chebyshev(&self) -> i32 {
        std::cmp::max(self.dx.abs(), self.dy.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_containment_is_half_open() {
        let region = Region::new(10, 30, 200, 100);

        assert!(region.contains_pos(Pos::new(10, 30)));
        assert!(region.contains_pos(Pos::new(209, 129)));
        assert!(!region.contains_pos(Pos::new(210, 129)));
        assert!(!region.contains_pos(Pos::new(209, 130)));
        assert!(!region.contains_pos(Pos::new(9, 30)));
    }

    #[test]
    fn extents_round_trip_through_region() {
        let extents = Padding::new(10, 10, 30, 10);
        let frame = Region::new(0, 0, 220, 140);

        assert_eq!(frame.without_extents(extents), Region::new(10, 30, 200, 100));
        assert_eq!(frame.without_extents(extents).with_extents(extents), frame);
    }

    #[test]
    fn dim_clamps_negative_components() {
        assert_eq!(Dim::new(-5, 20).clamped(), Dim::new(0, 20));
        assert_eq!(Dim::new(3, -1).clamped(), Dim::new(3, 0));
    }
}
