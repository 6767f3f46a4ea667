//! Rendering buffer: owned, row-oriented pixel storage.
//!
//! A `RenderingBuffer` is a contiguous top-down byte buffer of `height` rows,
//! each `stride = width * bytes_per_pixel` bytes long. Pixel formats in
//! [`crate::pixfmt_gray`] and [`crate::pixfmt_rgba`] interpret the bytes.

use crate::error::{buffer_len, Result};

// ============================================================================
// RenderingBuffer
// ============================================================================

/// Owned row-major pixel bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderingBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
    bpp: usize,
}

impl RenderingBuffer {
    /// A zero-filled buffer of `width × height` pixels, `bpp` bytes each.
    pub fn try_new(width: usize, height: usize, bpp: usize) -> Result<Self> {
        let len = buffer_len(width, height, bpp)?;
        Ok(Self {
            data: vec![0; len],
            width,
            height,
            bpp,
        })
    }

    /// Resize to `width × height` and zero every byte, keeping the allocation
    /// when it is large enough. On error the buffer is unchanged.
    pub fn try_resize(&mut self, width: usize, height: usize) -> Result<()> {
        let len = buffer_len(width, height, self.bpp)?;
        self.data.clear();
        self.data.resize(len, 0);
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

    /// Bytes per pixel.
    #[inline]
    pub fn bpp(&self) -> usize {
        self.bpp
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width * self.bpp
    }

    /// Row `y`. Panics if `y >= height`.
    pub fn row_slice(&self, y: usize) -> &[u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let stride = self.stride();
        &self.data[y * stride..(y + 1) * stride]
    }

    /// Bytes of pixel `(x, y)`, or `None` outside the buffer.
    #[inline]
    pub fn pixel_bytes(&self, x: usize, y: usize) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let off = y * self.stride() + x * self.bpp;
        Some(&self.data[off..off + self.bpp])
    }

    /// Mutable bytes of pixel `(x, y)`, or `None` outside the buffer.
    #[inline]
    pub fn pixel_bytes_mut(&mut self, x: usize, y: usize) -> Option<&mut [u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let off = y * self.stride() + x * self.bpp;
        Some(&mut self.data[off..off + self.bpp])
    }

    /// The whole buffer.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Fill every byte in the buffer with `value`.
    pub fn clear(&mut self, value: u8) {
        self.data.fill(value);
    }
}

// ============================================================================
// Tests
// ============================================================================
