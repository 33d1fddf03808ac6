//! Cell rectangles in document space.
//!
//! Coordinates are whatever the host layout hands us (PDF user space, y up,
//! in practice). `top >= bottom` is not assumed; edge lengths are taken as
//! absolute values wherever a length is needed.

use core_border::Side;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// A point `(x, y)`.
pub type Point = (f32, f32);

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Length of the edge a side's border is stroked along.
    pub fn run_length(&self, side: Side) -> f32 {
        if side.is_horizontal() {
            self.width().abs()
        } else {
            self.height().abs()
        }
    }

    /// Endpoints of a side's edge, traced clockwise so consecutive sides
    /// share their corner point: top left->right, right top->bottom,
    /// bottom right->left, left bottom->top.
    pub fn edge(&self, side: Side) -> (Point, Point) {
        match side {
            Side::Top => ((self.left, self.top), (self.right, self.top)),
            Side::Right => ((self.right, self.top), (self.right, self.bottom)),
            Side::Bottom => ((self.right, self.bottom), (self.left, self.bottom)),
            Side::Left => ((self.left, self.bottom), (self.left, self.top)),
        }
    }
}
