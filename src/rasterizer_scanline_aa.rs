//! Path rasterizer with anti-aliasing.
//!
//! [`Rasterizer`] accepts path commands (`move_to`, `line_to`, `quad_to`,
//! `cube_to`, `close_path`), flattens curves into line segments, and
//! accumulates their signed area. [`Rasterizer::draw`] then integrates the
//! area into per-pixel coverage and composites a source image through that
//! coverage onto a destination.
//!
//! Coverage follows the non-zero winding rule with saturation: overlapping
//! same-direction contours clamp at full coverage, opposite-direction
//! contours cancel.
//!
//! # Example
//! ```
//! use vector_raster::basics::{IPoint, Point};
//! use vector_raster::pixfmt_gray::AlphaImage;
//! use vector_raster::pixfmt_rgba::Uniform;
//! use vector_raster::rasterizer_scanline_aa::Rasterizer;
//!
//! let mut ras = Rasterizer::new(8, 8);
//! ras.move_to(Point::new(2.0, 2.0));
//! ras.line_to(Point::new(6.0, 2.0));
//! ras.line_to(Point::new(6.0, 6.0));
//! ras.line_to(Point::new(2.0, 6.0));
//! ras.close_path();
//!
//! let mut mask = AlphaImage::new(ras.bounds());
//! ras.draw(&mut mask, ras.bounds(), &Uniform::OPAQUE, IPoint::new(0, 0));
//! assert_eq!(mask.get(3, 3).a, 0xff);
//! assert_eq!(mask.get(1, 1).a, 0);
//! ```

use log::{debug, trace};

use crate::accumulate::{accumulate_mask, accumulate_op_over, accumulate_op_src};
use crate::basics::{IPoint, Point, Rect};
use crate::color::Rgba16;
use crate::comp_op::CompOp;
use crate::curves::{Curve3, Curve4};
use crate::error::Result;
use crate::pixfmt_rgba::{Image, ImageMut};
use crate::rasterizer_cells_aa::AreaBuffer;

// ============================================================================
// Rasterizer
// ============================================================================

/// Anti-aliasing path rasterizer.
///
/// Lifecycle: construct with a size, issue path commands, `draw` once, then
/// optionally [`reset`](Rasterizer::reset) and repeat. Paths should consist of
/// closed contours; `draw` does not close an open contour, and an open
/// contour's coverage extends to the right edge of the rows it crosses.
#[derive(Debug, Clone)]
pub struct Rasterizer {
    cells: AreaBuffer,
    /// Integrated 16-bit coverage, scratch space for the general draw path.
    mask: Vec<u32>,
    first: Point,
    pen: Point,
    comp_op: CompOp,
}

impl Rasterizer {
    /// A rasterizer for a `width × height` coverage area.
    ///
    /// # Panics
    /// If `width * height` overflows `usize`. See [`try_new`](Self::try_new).
    pub fn new(width: usize, height: usize) -> Self {
        Self::try_new(width, height).unwrap_or_else(|e| panic!("{}", e))
    }

    pub fn try_new(width: usize, height: usize) -> Result<Self> {
        trace!("rasterizer: new {}x{}", width, height);
        Ok(Self {
            cells: AreaBuffer::try_new(width, height)?,
            mask: Vec::new(),
            first: Point::default(),
            pen: Point::default(),
            comp_op: CompOp::default(),
        })
    }

    /// Clear all path and coverage state, resize to `width × height`, and
    /// restore the default `SrcOver` operator.
    ///
    /// # Panics
    /// If `width * height` overflows `usize`.
    pub fn reset(&mut self, width: usize, height: usize) {
        self.try_reset(width, height).unwrap_or_else(|e| panic!("{}", e));
    }

    /// Like [`reset`](Self::reset). On error the rasterizer is unchanged.
    pub fn try_reset(&mut self, width: usize, height: usize) -> Result<()> {
        trace!("rasterizer: reset {}x{}", width, height);
        self.cells.try_reset(width, height)?;
        self.first = Point::default();
        self.pen = Point::default();
        self.comp_op = CompOp::default();
        Ok(())
    }

    /// `(width, height)` of the coverage area.
    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.cells.width(), self.cells.height())
    }

    /// The coverage area as a rectangle at the origin.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.cells.width(), self.cells.height())
    }

    #[inline]
    pub fn pen(&self) -> Point {
        self.pen
    }

    #[inline]
    pub fn comp_op(&self) -> CompOp {
        self.comp_op
    }

    #[inline]
    pub fn set_comp_op(&mut self, op: CompOp) {
        self.comp_op = op;
    }

    /// Accumulated signed area, row-major.
    pub fn areas(&self) -> &[f32] {
        self.cells.areas()
    }

    //--------------------------------------------------------------------
    // Path commands
    //--------------------------------------------------------------------

    /// Start a new contour at `p`. The previous contour is not closed.
    pub fn move_to(&mut self, p: Point) {
        self.first = p;
        self.pen = p;
    }

    /// Straight edge from the pen to `p`.
    pub fn line_to(&mut self, p: Point) {
        self.cells.accumulate_line(self.pen, p);
        self.pen = p;
    }

    /// Quadratic Bezier from the pen via `b` to `c`.
    pub fn quad_to(&mut self, b: Point, c: Point) {
        for p in Curve3::new(self.pen, b, c) {
            self.line_to(p);
        }
    }

    /// Cubic Bezier from the pen via `b` and `c` to `d`.
    pub fn cube_to(&mut self, b: Point, c: Point, d: Point) {
        for p in Curve4::new(self.pen, b, c, d) {
            self.line_to(p);
        }
    }

    /// Edge from the pen back to the start of the current contour.
    pub fn close_path(&mut self) {
        self.line_to(self.first);
    }

    //--------------------------------------------------------------------
    // Compositing
    //--------------------------------------------------------------------

    /// Composite `src` through the accumulated coverage onto `dst`.
    ///
    /// Coverage pixel `(0, 0)` lands on `dst` pixel `r.min` and reads `src`
    /// at `sp`. `r` is clipped to `dst.bounds()` and to the coverage area
    /// placed at `r.min`; an empty result draws nothing.
    pub fn draw<D, S>(&mut self, dst: &mut D, r: Rect, src: &S, sp: IPoint)
    where
        D: ImageMut + ?Sized,
        S: Image + ?Sized,
    {
        let (width, height) = self.size();

        if let Some(c) = src.uniform_color() {
            if c.is_opaque() && r == dst.bounds() && r == self.bounds() {
                if let Some(plane) = dst.alpha_plane_mut() {
                    if plane.len() == width * height {
                        trace!("rasterizer: draw {:?} via alpha plane", r);
                        let areas = self.cells.areas();
                        match self.comp_op {
                            CompOp::SrcOver => accumulate_op_over(plane, areas, width),
                            CompOp::Src => accumulate_op_src(plane, areas, width),
                        }
                        return;
                    }
                }
            }
        }

        let clip = r
            .intersect(&dst.bounds())
            .intersect(&self.bounds().translate(r.x1, r.y1));
        if clip.is_empty() {
            debug!("rasterizer: draw rect {:?} clips to nothing", r);
            return;
        }
        trace!("rasterizer: draw {:?} via coverage mask", clip);

        self.mask.clear();
        self.mask.resize(width * height, 0);
        accumulate_mask(&mut self.mask, self.cells.areas(), width);

        let op = self.comp_op;
        for y in clip.y1..clip.y2 {
            let my = (y - r.y1) as usize;
            let sy = sp.y.saturating_add(my as i32);
            let mask_row = &self.mask[my * width..(my + 1) * width];
            for x in clip.x1..clip.x2 {
                let mx = (x - r.x1) as usize;
                let ma = mask_row[mx];
                if ma == 0 && op == CompOp::SrcOver {
                    continue;
                }
                let s = src.pixel(sp.x.saturating_add(mx as i32), sy);
                let d = if op.reads_dst() {
                    dst.pixel(x, y)
                } else {
                    Rgba16::TRANSPARENT
                };
                dst.set_pixel(x, y, op.blend(d, s, ma));
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
