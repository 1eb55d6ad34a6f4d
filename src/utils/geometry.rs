/// Position of a logical cell, `(0, 0)` being the top left one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Euclidean distance measured in logical cells.
    pub fn distance(self, other: Point) -> f64 {
        let dx = self.x.abs_diff(other.x) as f64;
        let dy = self.y.abs_diff(other.y) as f64;
        dx.hypot(dy)
    }
}

/// Corner of the rectangle `[0, max_x] x [0, max_y]` farthest from `p`.
///
/// Each axis picks the side opposite to the half `p` falls in. A point lying
/// exactly on a midpoint is equally far from both sides and gets the one at 0.
pub fn farthest_corner(p: Point, max_x: usize, max_y: usize) -> Point {
    Point {
        x: far_side(p.x, max_x),
        y: far_side(p.y, max_y),
    }
}

/// Side of `[0, max]` farthest from `c`, for any `usize` coordinate.
fn far_side(c: usize, max: usize) -> usize {
    if c >= max || c >= max - c {
        0
    } else {
        max
    }
}
