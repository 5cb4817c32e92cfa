//! Geometry utilities for collision detection
//!
//! Everything here works in integer screen pixels, origin top-left,
//! y growing downward.

/// An axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Move the rectangle so its top-left corner sits at `pos`
    #[inline]
    pub fn move_to(&mut self, pos: Point) {
        self.x = pos.x;
        self.y = pos.y;
    }

    pub fn collides(&self, other: &Rect) -> bool {
        collides(self, other)
    }
}

impl From<Rect> for sdl2::rect::Rect {
    fn from(r: Rect) -> Self {
        sdl2::rect::Rect::new(r.x, r.y, r.w.max(0) as u32, r.h.max(0) as u32)
    }
}

/// An integer point or displacement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Box collision test.
///
/// Two rectangles collide when their open interiors overlap. Rectangles
/// that only share an edge do not collide.
pub fn collides(a: &Rect, b: &Rect) -> bool {
    if a.bottom() <= b.top() {
        return false;
    }
    if a.top() >= b.bottom() {
        return false;
    }
    if a.right() <= b.left() {
        return false;
    }
    if a.left() >= b.right() {
        return false;
    }
    true
}
