//! Alpha-only pixel format.
//!
//! `AlphaImage` stores one byte of alpha (coverage) per pixel. It is both a
//! destination that the rasterizer can write straight into and a mask source:
//! as an [`Image`] it reads back as premultiplied white at that alpha.

use crate::basics::Rect;
use crate::color::{Alpha8, Rgba16};
use crate::error::Result;
use crate::pixfmt_rgba::{buffer_for, local_xy, Image, ImageMut};
use crate::rendering_buffer::RenderingBuffer;

/// 8-bit alpha image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaImage {
    rect: Rect,
    rbuf: RenderingBuffer,
}

impl AlphaImage {
    /// A fully transparent image covering `rect`.
    pub fn try_new(rect: Rect) -> Result<Self> {
        Ok(Self {
            rect,
            rbuf: buffer_for(&rect, 1)?,
        })
    }

    /// # Panics
    /// If the pixel buffer size overflows `usize`.
    pub fn new(rect: Rect) -> Self {
        Self::try_new(rect).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Re-cover `rect` with all pixels transparent, reusing the allocation
    /// when possible. On error the image is unchanged.
    pub fn try_reset(&mut self, rect: Rect) -> Result<()> {
        self.rbuf.try_resize(rect.width() as usize, rect.height() as usize)?;
        self.rect = rect;
        Ok(())
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Alpha values, row-major, one byte per pixel.
    pub fn pixels(&self) -> &[u8] {
        self.rbuf.pixels()
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        self.rbuf.pixels_mut()
    }

    /// Row `y` in image coordinates. Panics outside the image.
    pub fn row(&self, y: i32) -> &[u8] {
        self.rbuf.row_slice((y as i64 - self.rect.y1 as i64) as usize)
    }

    /// Fill every pixel with alpha `a`.
    pub fn clear(&mut self, a: Alpha8) {
        self.rbuf.clear(a.a);
    }

    pub fn get(&self, x: i32, y: i32) -> Alpha8 {
        match local_xy(&self.rect, x, y).and_then(|(lx, ly)| self.rbuf.pixel_bytes(lx, ly)) {
            Some(p) => Alpha8::new(p[0]),
            None => Alpha8::default(),
        }
    }

    pub fn put(&mut self, x: i32, y: i32, a: Alpha8) {
        if let Some((lx, ly)) = local_xy(&self.rect, x, y) {
            if let Some(p) = self.rbuf.pixel_bytes_mut(lx, ly) {
                p[0] = a.a;
            }
        }
    }
}

impl Image for AlphaImage {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn pixel(&self, x: i32, y: i32) -> Rgba16 {
        self.get(x, y).into()
    }
}

impl ImageMut for AlphaImage {
    fn set_pixel(&mut self, x: i32, y: i32, c: Rgba16) {
        self.put(x, y, c.into());
    }

    fn alpha_plane_mut(&mut self) -> Option<&mut [u8]> {
        Some(self.rbuf.pixels_mut())
    }
}

// ============================================================================
// Tests
// ============================================================================
