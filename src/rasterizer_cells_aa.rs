//! Signed-area accumulation buffer.
//!
//! Every line segment of a path deposits signed area into a `width × height`
//! grid of `f32` cells. A segment crossing row `y` with vertical extent `dy`
//! contributes exactly `dy` (signed by direction) to that row, spread over the
//! columns it touches with trapezoid weights. After all segments are in, the
//! prefix sum of a row at column `x` is the winding-weighted coverage of pixel
//! `(x, y)`; see [`crate::accumulate`].
//!
//! Contributions left of column 0 are folded into column 0, since a prefix
//! sum sees them there anyway. Contributions at or right of `width` are
//! dropped: nothing visible lies to their right.

use log::debug;

use crate::basics::Point;
use crate::error::{buffer_len, Result};

// ============================================================================
// Constants
// ============================================================================

/// Segments flatter than this (in pixels of height) contribute nothing.
pub const MIN_SEGMENT_HEIGHT: f32 = 0.000001;

/// Per-row `x` values are clamped to `±COORD_LIMIT` before the cell index is
/// computed, so any finite coordinate maps to a valid `i64` column.
pub const COORD_LIMIT: f32 = (1 << 24) as f32;

// ============================================================================
// AreaBuffer
// ============================================================================

/// Per-pixel signed area accumulators for one path.
#[derive(Debug, Clone, Default)]
pub struct AreaBuffer {
    width: usize,
    height: usize,
    area: Vec<f32>,
}

impl AreaBuffer {
    /// A zeroed buffer of `width × height` cells.
    pub fn try_new(width: usize, height: usize) -> Result<Self> {
        let mut buf = Self::default();
        buf.try_reset(width, height)?;
        Ok(buf)
    }

    /// Resize to `width × height` and zero every cell, reusing the existing
    /// allocation when it is large enough.
    ///
    /// On error the buffer is left unchanged.
    pub fn try_reset(&mut self, width: usize, height: usize) -> Result<()> {
        let n = buffer_len(width, height, 1)?;
        self.area.clear();
        self.area.resize(n, 0.0);
        self.width = width;
        self.height = height;
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The accumulated cells in row-major order.
    #[inline]
    pub fn areas(&self) -> &[f32] {
        &self.area
    }

    /// Cells of row `y`.
    pub fn row(&self, y: usize) -> &[f32] {
        let start = y * self.width;
        &self.area[start..start + self.width]
    }

    /// Accumulate the signed area of the segment `from → to`.
    ///
    /// Downward segments (increasing `y`) add positive area, upward segments
    /// negative. Segments with a non-finite coordinate are ignored.
    pub fn accumulate_line(&mut self, from: Point, to: Point) {
        if !from.is_finite() || !to.is_finite() {
            debug!("dropping non-finite segment {:?} -> {:?}", from, to);
            return;
        }
        if self.width == 0 || self.height == 0 {
            return;
        }

        let (dir, a, b) = if from.y > to.y {
            (-1.0f32, to, from)
        } else {
            (1.0f32, from, to)
        };
        if b.y - a.y <= MIN_SEGMENT_HEIGHT {
            return;
        }
        let h = self.height as f32;
        if b.y <= 0.0 || a.y >= h {
            return;
        }

        let dxdy = (b.x - a.x) / (b.y - a.y);
        if !dxdy.is_finite() {
            debug!("dropping segment with unbounded slope {:?} -> {:?}", from, to);
            return;
        }

        // Rows above the buffer are skipped analytically.
        let (mut x, y_start) = if a.y < 0.0 {
            (a.x - a.y * dxdy, 0usize)
        } else {
            (a.x, a.y.floor() as usize)
        };
        let y_end = b.y.ceil().min(h) as usize;

        let width = self.width;
        for y in y_start..y_end {
            let fy = y as f32;
            let dy = (fy + 1.0).min(b.y) - fy.max(a.y);
            let x_next = x + dy * dxdy;
            let row = &mut self.area[y * width..(y + 1) * width];
            accumulate_row(row, x, x_next, dy * dir);
            x = x_next;
        }
    }
}

// ============================================================================
// Row helpers
// ============================================================================

/// Spread the signed height `d` over the cells of one row crossed between
/// `x` and `x_next`.
fn accumulate_row(row: &mut [f32], x: f32, x_next: f32, d: f32) {
    let (x0, x1) = if x > x_next { (x_next, x) } else { (x, x_next) };
    if x0.is_nan() || x1.is_nan() {
        return;
    }
    let x0 = x0.clamp(-COORD_LIMIT, COORD_LIMIT);
    let x1 = x1.clamp(-COORD_LIMIT, COORD_LIMIT);

    let x0_floor = x0.floor();
    let x0i = x0_floor as i64;
    let x1_ceil = x1.ceil();
    let x1i = x1_ceil as i64;

    if x1i <= x0i + 1 {
        // Within one cell: split by where the midpoint falls.
        let xmf = 0.5 * (x0 + x1) - x0_floor;
        add(row, x0i, d - d * xmf);
        add(row, x0i + 1, d * xmf);
        return;
    }

    let s = 1.0 / (x1 - x0);
    let x0f = x0 - x0_floor;
    let one_minus_x0f = 1.0 - x0f;
    let a0 = 0.5 * s * one_minus_x0f * one_minus_x0f;
    let x1f = x1 - x1_ceil + 1.0;
    let am = 0.5 * s * x1f * x1f;

    add(row, x0i, d * a0);
    if x1i == x0i + 2 {
        add(row, x0i + 1, d * (1.0 - a0 - am));
    } else {
        let a1 = s * (1.5 - x0f);
        add(row, x0i + 1, d * (a1 - a0));
        add_run(row, x0i + 2, x1i - 1, d * s);
        let a2 = a1 + s * (x1i - x0i - 3) as f32;
        add(row, x1i - 1, d * (1.0 - a2 - am));
    }
    add(row, x1i, d * am);
}

/// Add `v` to column `i`, folding negative columns into column 0.
#[inline]
fn add(row: &mut [f32], i: i64, v: f32) {
    if i < 0 {
        row[0] += v;
    } else if let Some(cell) = row.get_mut(i as usize) {
        *cell += v;
    }
}

/// Add `v` to every column in `start..end`.
fn add_run(row: &mut [f32], start: i64, end: i64, v: f32) {
    if start >= end {
        return;
    }
    let left = (end.min(0) - start).max(0);
    if left > 0 {
        row[0] += v * left as f32;
    }
    let lo = start.max(0) as usize;
    let hi = (end.max(0) as usize).min(row.len());
    if lo < hi {
        for cell in &mut row[lo..hi] {
            *cell += v;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
