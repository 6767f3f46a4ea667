//! Foundation types: points, pixel rectangles and rounding helpers.
//!
//! Path coordinates live in floating-point pixel space ([`Point`]); images and
//! draw rectangles use integer pixel space ([`IPoint`], [`Rect`]). Pixel
//! `(x, y)` covers the unit square `[x, x+1) × [y, y+1)`.

use core::ops::{Add, Sub};

// ============================================================================
// Rounding helpers
// ============================================================================

/// Floor to the nearest integer toward negative infinity.
///
/// Out-of-range values saturate; NaN maps to 0.
#[inline]
pub fn ifloor(v: f32) -> i32 {
    v.floor() as i32
}

/// Ceiling as a signed integer, saturating like [`ifloor`].
#[inline]
pub fn iceil(v: f32) -> i32 {
    v.ceil() as i32
}

/// Convert a buffer dimension to an `i32` coordinate, saturating at `i32::MAX`.
#[inline]
pub fn dim_to_i32(v: usize) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Integer pixel position.
pub type IPoint = PointBase<i32>;
/// Floating-point path coordinate.
pub type Point = PointBase<f32>;

impl<T: Copy + Add<Output = T>> Add for PointBase<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Copy + Sub<Output = T>> Sub for PointBase<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32)> for IPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Point {
    /// Linear interpolation from `p` (t = 0) to `q` (t = 1).
    #[inline]
    pub fn lerp(t: f32, p: Point, q: Point) -> Point {
        Point::new(p.x + t * (q.x - p.x), p.y + t * (q.y - p.y))
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// ============================================================================
// Rect
// ============================================================================

/// A half-open pixel rectangle `[x1, x2) × [y1, y2)`.
///
/// A rectangle with `x1 >= x2` or `y1 >= y2` is empty. All empty rectangles
/// produced by [`Rect::intersect`] are normalized to `Rect::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// The rectangle `(0, 0)..(width, height)`.
    pub fn from_size(width: usize, height: usize) -> Self {
        Self::new(0, 0, dim_to_i32(width), dim_to_i32(height))
    }

    #[inline]
    pub fn width(&self) -> i32 {
        if self.x2 > self.x1 {
            self.x2.saturating_sub(self.x1)
        } else {
            0
        }
    }

    #[inline]
    pub fn height(&self) -> i32 {
        if self.y2 > self.y1 {
            self.y2.saturating_sub(self.y1)
        } else {
            0
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x1 >= self.x2 || self.y1 >= self.y2
    }

    /// Returns `true` if pixel `(x, y)` lies inside the rectangle.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x1 && x < self.x2 && y >= self.y1 && y < self.y2
    }

    /// The largest rectangle contained by both `self` and `r`.
    pub fn intersect(&self, r: &Rect) -> Rect {
        let out = Rect::new(
            self.x1.max(r.x1),
            self.y1.max(r.y1),
            self.x2.min(r.x2),
            self.y2.min(r.y2),
        );
        if out.is_empty() {
            Rect::default()
        } else {
            out
        }
    }

    /// The rectangle shifted by `(dx, dy)`, saturating at the `i32` range.
    pub fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.x1.saturating_add(dx),
            self.y1.saturating_add(dy),
            self.x2.saturating_add(dx),
            self.y2.saturating_add(dy),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
