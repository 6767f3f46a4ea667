//! Glyph rasterization using `ttf-parser`.
//!
//! [`GlyphRasterizer`] turns a character into an 8-bit coverage mask at a
//! given pixel size and sub-pixel pen position. The glyph outline is fed
//! straight into a [`Rasterizer`] through [`OutlinePen`], an adapter for
//! `ttf_parser::OutlineBuilder` that scales font units to pixels and flips
//! the y axis (font space is y-up, pixel space y-down).
//!
//! The rasterizer and mask buffers are reused from glyph to glyph.

use log::{debug, trace};

use crate::basics::{iceil, ifloor, IPoint, Point, Rect};
use crate::comp_op::CompOp;
use crate::error::Result;
use crate::pixfmt_gray::AlphaImage;
use crate::pixfmt_rgba::Uniform;
use crate::rasterizer_scanline_aa::Rasterizer;

// ============================================================================
// Glyph
// ============================================================================

/// A rasterized glyph.
#[derive(Debug, Clone, Copy)]
pub struct Glyph<'m> {
    /// Pixels the mask covers, in the coordinate space of the pen position.
    pub rect: Rect,
    /// Coverage for `rect`, stored with its origin at `(0, 0)`.
    pub mask: &'m AlphaImage,
    /// Horizontal advance in pixels.
    pub advance: f32,
}

// ============================================================================
// GlyphRasterizer
// ============================================================================

/// Renders glyphs of one font face at one pixel size.
pub struct GlyphRasterizer<'a> {
    face: ttf_parser::Face<'a>,
    ppem: f32,
    scale: f32,
    ras: Rasterizer,
    mask: AlphaImage,
}

impl<'a> GlyphRasterizer<'a> {
    /// Parse face `face_index` of `data` for rendering at `ppem` pixels per em.
    pub fn new(data: &'a [u8], face_index: u32, ppem: f32) -> Result<Self> {
        let face = ttf_parser::Face::parse(data, face_index)?;
        let upem = face.units_per_em().max(1) as f32;
        trace!("glyph rasterizer: {} units per em at {} ppem", upem, ppem);
        Ok(Self {
            face,
            ppem,
            scale: ppem / upem,
            ras: Rasterizer::try_new(0, 0)?,
            mask: AlphaImage::try_new(Rect::default())?,
        })
    }

    /// Pixels per em.
    pub fn ppem(&self) -> f32 {
        self.ppem
    }

    /// Horizontal advance of `ch` in pixels, or `None` if the font has no
    /// glyph for it.
    pub fn advance(&self, ch: char) -> Option<f32> {
        let id = self.face.glyph_index(ch)?;
        let adv = self.face.glyph_hor_advance(id)?;
        Some(adv as f32 * self.scale)
    }

    /// Rasterize `ch` with its origin at the sub-pixel position `dot`.
    ///
    /// Glyphs without an outline (such as a space) yield an empty `rect`.
    /// Returns `None` if the font has no glyph for `ch`.
    pub fn glyph(&mut self, ch: char, dot: Point) -> Option<Glyph<'_>> {
        let id = self.face.glyph_index(ch)?;
        let advance = self.face.glyph_hor_advance(id)? as f32 * self.scale;

        let bbox = self.face.glyph_bounding_box(id);
        let (dr, bias) = placement(bbox, self.scale, dot);
        let (width, height) = (dr.width() as usize, dr.height() as usize);
        if bbox.is_none() {
            self.mask.try_reset(Rect::default()).ok()?;
            return Some(Glyph {
                rect: dr,
                mask: &self.mask,
                advance,
            });
        }

        let local = Rect::from_size(width, height);
        if let Err(e) = self.mask.try_reset(local) {
            debug!("glyph {:?}: {}", ch, e);
            return None;
        }
        if let Err(e) = self.ras.try_reset(width, height) {
            debug!("glyph {:?}: {}", ch, e);
            return None;
        }
        self.ras.set_comp_op(CompOp::Src);

        let mut pen = OutlinePen::new(&mut self.ras, self.scale, bias);
        self.face.outline_glyph(id, &mut pen);
        self.ras.draw(&mut self.mask, local, &Uniform::OPAQUE, IPoint::new(0, 0));

        Some(Glyph {
            rect: dr,
            mask: &self.mask,
            advance,
        })
    }
}

/// Pixel rectangle and outline bias for a glyph with font-unit bounding box
/// `bbox`, scaled by `scale` and placed with its origin at `dot`.
///
/// The rectangle is the scaled, y-flipped box rounded outward to whole pixels.
/// The bias moves outline points from pen space into the rectangle's local
/// space (`dot - dr.min`). A glyph without a box gets an empty rectangle at
/// the pixel containing `dot`.
pub(crate) fn placement(bbox: Option<ttf_parser::Rect>, scale: f32, dot: Point) -> (Rect, Point) {
    let Some(bbox) = bbox else {
        let at = IPoint::new(ifloor(dot.x), ifloor(dot.y));
        return (Rect::new(at.x, at.y, at.x, at.y), Point::default());
    };
    let dr = Rect::new(
        ifloor(bbox.x_min as f32 * scale + dot.x),
        ifloor(-(bbox.y_max as f32) * scale + dot.y),
        iceil(bbox.x_max as f32 * scale + dot.x),
        iceil(-(bbox.y_min as f32) * scale + dot.y),
    );
    let bias = Point::new(dot.x - dr.x1 as f32, dot.y - dr.y1 as f32);
    (dr, bias)
}

// ============================================================================
// OutlinePen (ttf_parser::OutlineBuilder)
// ============================================================================

/// Replays font outline commands into a [`Rasterizer`].
///
/// Font units are multiplied by `scale`, y is negated, then `bias` is added.
pub struct OutlinePen<'r> {
    ras: &'r mut Rasterizer,
    scale: f32,
    bias: Point,
}

impl<'r> OutlinePen<'r> {
    pub fn new(ras: &'r mut Rasterizer, scale: f32, bias: Point) -> Self {
        Self { ras, scale, bias }
    }

    #[inline]
    fn map(&self, x: f32, y: f32) -> Point {
        Point::new(x * self.scale + self.bias.x, -y * self.scale + self.bias.y)
    }
}

impl ttf_parser::OutlineBuilder for OutlinePen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.ras.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.ras.line_to(p);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let b = self.map(x1, y1);
        let c = self.map(x, y);
        self.ras.quad_to(b, c);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let b = self.map(x1, y1);
        let c = self.map(x2, y2);
        let d = self.map(x, y);
        self.ras.cube_to(b, c, d);
    }

    fn close(&mut self) {
        self.ras.close_path();
    }
}

// ============================================================================
// Tests
// ============================================================================
