//! # vector-raster
//!
//! Anti-aliased 2D vector path rasterizer using signed-area accumulation.
//!
//! A path built from lines, quadratic and cubic Bezier curves is reduced to
//! exact per-pixel coverage: every edge deposits its signed area into a
//! float buffer, and a per-row prefix sum turns that area into coverage.
//! The coverage is then used to composite a source image onto a destination
//! with Porter-Duff `SrcOver` or `Src`.
//!
//! ## Pipeline
//!
//! 1. **Path commands**: [`Rasterizer`](rasterizer_scanline_aa::Rasterizer)
//!    tracks the pen and flattens curves ([`curves`]).
//! 2. **Area accumulation**: [`AreaBuffer`](rasterizer_cells_aa::AreaBuffer)
//!    distributes each segment's signed area across the cells it crosses.
//! 3. **Integration**: [`accumulate`] prefix-sums each row into coverage.
//! 4. **Compositing**: [`comp_op`] blends the source into any
//!    [`ImageMut`](pixfmt_rgba::ImageMut) destination, with a fast path for
//!    8-bit alpha planes ([`pixfmt_gray`]).
//!
//! With the `font` feature, the `font` module renders TrueType/OpenType glyphs
//! into coverage masks through the same pipeline.

pub mod accumulate;
pub mod basics;
pub mod color;
pub mod comp_op;
pub mod curves;
pub mod error;
pub mod pixfmt_gray;
pub mod pixfmt_rgba;
pub mod rasterizer_cells_aa;
pub mod rasterizer_scanline_aa;
pub mod rendering_buffer;

#[cfg(feature = "font")]
pub mod font;

pub use error::{Error, Result};
