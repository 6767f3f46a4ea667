//! Bezier curve flattening (quadratic and cubic).
//!
//! Curves are approximated by `n` evenly spaced line segments, where `n` is
//! derived once per curve from a flatness estimate instead of by recursive
//! subdivision. For a circular arc this needs about a third fewer segments
//! than adaptive de Casteljau splitting, and the estimate costs one pass.
//!
//! `Curve3` and `Curve4` are iterators over the segment end points: the
//! `n - 1` interior points followed by the exact curve end point. The start
//! point (the current pen) is not emitted.

use crate::basics::Point;

// ============================================================================
// Constants
// ============================================================================

/// Curves whose deviation measure is below this are drawn as one line.
pub const FLATNESS_THRESHOLD: f32 = 0.333;

/// Multiplier applied to the deviation before taking its fourth root.
pub const TOLERANCE: f64 = 3.0;

/// Upper bound on segments per curve, reached only by absurd control points.
pub const MAX_SEGMENTS: u32 = 1 << 16;

// ============================================================================
// Flatness estimate
// ============================================================================

/// Squared length of `a - 2b + c`, a measure of how far the sequence
/// `a → b → c` bends.
#[inline]
pub fn dev_squared(a: Point, b: Point, c: Point) -> f32 {
    let dx = a.x - 2.0 * b.x + c.x;
    let dy = a.y - 2.0 * b.y + c.y;
    dx * dx + dy * dy
}

/// Number of line segments used to approximate a curve with deviation `devsq`.
///
/// Always at least 1. NaN deviation yields 1.
pub fn segment_count(devsq: f32) -> u32 {
    if devsq >= FLATNESS_THRESHOLD {
        // Float-to-int `as` saturates, so infinite deviation lands on the cap.
        let k = (TOLERANCE * devsq as f64).sqrt().sqrt() as u32;
        1 + k.min(MAX_SEGMENTS - 1)
    } else {
        1
    }
}

// ============================================================================
// Curve3 (quadratic)
// ============================================================================

/// Flattened quadratic Bezier from `a` via `b` to `c`.
#[derive(Debug, Clone)]
pub struct Curve3 {
    a: Point,
    b: Point,
    c: Point,
    n: u32,
    step: u32,
    t: f32,
    dt: f32,
}

impl Curve3 {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        let n = segment_count(dev_squared(a, b, c));
        Self {
            a,
            b,
            c,
            n,
            step: 0,
            t: 0.0,
            dt: 1.0 / n as f32,
        }
    }

    /// Number of line segments this curve flattens to.
    pub fn num_segments(&self) -> u32 {
        self.n
    }
}

impl Iterator for Curve3 {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.step + 1 < self.n {
            self.step += 1;
            self.t += self.dt;
            let t = self.t;
            let ab = Point::lerp(t, self.a, self.b);
            let bc = Point::lerp(t, self.b, self.c);
            Some(Point::lerp(t, ab, bc))
        } else if self.step < self.n {
            self.step += 1;
            Some(self.c)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.n - self.step) as usize;
        (left, Some(left))
    }
}

// ============================================================================
// Curve4 (cubic)
// ============================================================================

/// Flattened cubic Bezier from `a` via `b` and `c` to `d`.
#[derive(Debug, Clone)]
pub struct Curve4 {
    a: Point,
    b: Point,
    c: Point,
    d: Point,
    n: u32,
    step: u32,
    t: f32,
    dt: f32,
}

impl Curve4 {
    pub fn new(a: Point, b: Point, c: Point, d: Point) -> Self {
        let devsq = dev_squared(a, b, d).max(dev_squared(a, c, d));
        let n = segment_count(devsq);
        Self {
            a,
            b,
            c,
            d,
            n,
            step: 0,
            t: 0.0,
            dt: 1.0 / n as f32,
        }
    }

    pub fn num_segments(&self) -> u32 {
        self.n
    }
}

impl Iterator for Curve4 {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.step + 1 < self.n {
            self.step += 1;
            self.t += self.dt;
            let t = self.t;
            let ab = Point::lerp(t, self.a, self.b);
            let bc = Point::lerp(t, self.b, self.c);
            let cd = Point::lerp(t, self.c, self.d);
            let abc = Point::lerp(t, ab, bc);
            let bcd = Point::lerp(t, bc, cd);
            Some(Point::lerp(t, abc, bcd))
        } else if self.step < self.n {
            self.step += 1;
            Some(self.d)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.n - self.step) as usize;
        (left, Some(left))
    }
}

// ============================================================================
// Tests
// ============================================================================
