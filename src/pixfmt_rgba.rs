//! Image traits and RGBA pixel formats.
//!
//! [`Image`] is a readable source of 16-bit premultiplied pixels over an
//! arbitrary rectangle of the integer plane; [`ImageMut`] adds writes. The
//! rasterizer composites through these traits, with optional capability
//! queries (`uniform_color`, `alpha_plane_mut`) that unlock a faster path.
//!
//! Concrete formats here:
//! - [`RgbaImage`]: 4 bytes per pixel, premultiplied alpha
//! - [`NrgbaImage`]: 4 bytes per pixel, non-premultiplied alpha
//! - [`Uniform`]: a single color covering (nearly) the whole plane

use crate::basics::Rect;
use crate::color::{Nrgba8, Rgba16, Rgba8};
use crate::error::Result;
use crate::rendering_buffer::RenderingBuffer;

// ============================================================================
// Image traits
// ============================================================================

/// A readable image.
pub trait Image {
    /// The pixels this image defines.
    fn bounds(&self) -> Rect;

    /// Pixel `(x, y)` in 16-bit premultiplied RGBA; transparent black
    /// outside [`bounds`](Image::bounds).
    fn pixel(&self, x: i32, y: i32) -> Rgba16;

    /// The single color of a flat image, if this image is one.
    fn uniform_color(&self) -> Option<Rgba16> {
        None
    }
}

/// A writable image.
pub trait ImageMut: Image {
    /// Store `c` at `(x, y)`, converting to the storage format. Writes outside
    /// the bounds are ignored.
    fn set_pixel(&mut self, x: i32, y: i32, c: Rgba16);

    /// The pixel data as one byte of alpha per pixel in row-major order, if
    /// that is how the image is stored.
    fn alpha_plane_mut(&mut self) -> Option<&mut [u8]> {
        None
    }
}

/// Buffer coordinates of pixel `(x, y)` of an image covering `rect`.
#[inline]
pub(crate) fn local_xy(rect: &Rect, x: i32, y: i32) -> Option<(usize, usize)> {
    if rect.contains(x, y) {
        Some((
            (x as i64 - rect.x1 as i64) as usize,
            (y as i64 - rect.y1 as i64) as usize,
        ))
    } else {
        None
    }
}

/// Allocate a zeroed buffer for `rect`; empty rectangles get an empty buffer.
pub(crate) fn buffer_for(rect: &Rect, bpp: usize) -> Result<RenderingBuffer> {
    RenderingBuffer::try_new(rect.width() as usize, rect.height() as usize, bpp)
}

const BPP: usize = 4;

// ============================================================================
// RgbaImage (premultiplied RGBA, 8 bits per channel)
// ============================================================================

/// Premultiplied RGBA image, 4 bytes per pixel in R, G, B, A order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    rect: Rect,
    rbuf: RenderingBuffer,
}

impl RgbaImage {
    /// A transparent image covering `rect`.
    pub fn try_new(rect: Rect) -> Result<Self> {
        Ok(Self {
            rect,
            rbuf: buffer_for(&rect, BPP)?,
        })
    }

    /// Like [`try_new`](Self::try_new).
    ///
    /// # Panics
    /// If the pixel buffer size overflows `usize`.
    pub fn new(rect: Rect) -> Self {
        Self::try_new(rect).unwrap_or_else(|e| panic!("{}", e))
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Raw pixel bytes, row-major, `4 * width` bytes per row.
    pub fn pixels(&self) -> &[u8] {
        self.rbuf.pixels()
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        self.rbuf.pixels_mut()
    }

    /// Fill every pixel with `c`.
    pub fn clear(&mut self, c: Rgba8) {
        for p in self.rbuf.pixels_mut().chunks_exact_mut(BPP) {
            p.copy_from_slice(&[c.r, c.g, c.b, c.a]);
        }
    }

    /// Pixel `(x, y)`, transparent outside the image.
    pub fn get(&self, x: i32, y: i32) -> Rgba8 {
        match local_xy(&self.rect, x, y).and_then(|(lx, ly)| self.rbuf.pixel_bytes(lx, ly)) {
            Some(p) => Rgba8::new(p[0], p[1], p[2], p[3]),
            None => Rgba8::default(),
        }
    }

    /// Store `c` at `(x, y)`; ignored outside the image.
    pub fn put(&mut self, x: i32, y: i32, c: Rgba8) {
        if let Some((lx, ly)) = local_xy(&self.rect, x, y) {
            if let Some(p) = self.rbuf.pixel_bytes_mut(lx, ly) {
                p.copy_from_slice(&[c.r, c.g, c.b, c.a]);
            }
        }
    }
}

impl Image for RgbaImage {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn pixel(&self, x: i32, y: i32) -> Rgba16 {
        self.get(x, y).into()
    }
}

impl ImageMut for RgbaImage {
    fn set_pixel(&mut self, x: i32, y: i32, c: Rgba16) {
        self.put(x, y, c.into());
    }
}

// ============================================================================
// NrgbaImage (non-premultiplied RGBA, 8 bits per channel)
// ============================================================================

/// Non-premultiplied RGBA image, 4 bytes per pixel in R, G, B, A order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NrgbaImage {
    rect: Rect,
    rbuf: RenderingBuffer,
}

impl NrgbaImage {
    pub fn try_new(rect: Rect) -> Result<Self> {
        Ok(Self {
            rect,
            rbuf: buffer_for(&rect, BPP)?,
        })
    }

    /// # Panics
    /// If the pixel buffer size overflows `usize`.
    pub fn new(rect: Rect) -> Self {
        Self::try_new(rect).unwrap_or_else(|e| panic!("{}", e))
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn pixels(&self) -> &[u8] {
        self.rbuf.pixels()
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        self.rbuf.pixels_mut()
    }

    pub fn clear(&mut self, c: Nrgba8) {
        for p in self.rbuf.pixels_mut().chunks_exact_mut(BPP) {
            p.copy_from_slice(&[c.r, c.g, c.b, c.a]);
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Nrgba8 {
        match local_xy(&self.rect, x, y).and_then(|(lx, ly)| self.rbuf.pixel_bytes(lx, ly)) {
            Some(p) => Nrgba8::new(p[0], p[1], p[2], p[3]),
            None => Nrgba8::default(),
        }
    }

    pub fn put(&mut self, x: i32, y: i32, c: Nrgba8) {
        if let Some((lx, ly)) = local_xy(&self.rect, x, y) {
            if let Some(p) = self.rbuf.pixel_bytes_mut(lx, ly) {
                p.copy_from_slice(&[c.r, c.g, c.b, c.a]);
            }
        }
    }
}

impl Image for NrgbaImage {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn pixel(&self, x: i32, y: i32) -> Rgba16 {
        self.get(x, y).into()
    }
}

impl ImageMut for NrgbaImage {
    fn set_pixel(&mut self, x: i32, y: i32, c: Rgba16) {
        self.put(x, y, c.into());
    }
}

// ============================================================================
// Uniform
// ============================================================================

/// Half-extent of the rectangle a [`Uniform`] reports as its bounds.
pub const UNIFORM_EXTENT: i32 = 1_000_000_000;

/// An image of one color everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uniform {
    pub color: Rgba16,
}

impl Uniform {
    pub const OPAQUE: Uniform = Uniform::new(Rgba16::OPAQUE);
    pub const TRANSPARENT: Uniform = Uniform::new(Rgba16::TRANSPARENT);

    pub const fn new(color: Rgba16) -> Self {
        Self { color }
    }
}

impl From<Rgba8> for Uniform {
    fn from(c: Rgba8) -> Self {
        Uniform::new(c.into())
    }
}

impl From<Nrgba8> for Uniform {
    fn from(c: Nrgba8) -> Self {
        Uniform::new(c.into())
    }
}

impl Image for Uniform {
    fn bounds(&self) -> Rect {
        Rect::new(-UNIFORM_EXTENT, -UNIFORM_EXTENT, UNIFORM_EXTENT, UNIFORM_EXTENT)
    }

    fn pixel(&self, x: i32, y: i32) -> Rgba16 {
        if self.bounds().contains(x, y) {
            self.color
        } else {
            Rgba16::TRANSPARENT
        }
    }

    fn uniform_color(&self) -> Option<Rgba16> {
        Some(self.color)
    }
}

// ============================================================================
// Tests
// ============================================================================
