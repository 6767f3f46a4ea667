//! Shared fixtures for integration tests and benchmarks.

#![allow(dead_code)]

use vector_raster::basics::Point;
use vector_raster::rasterizer_scanline_aa::Rasterizer;

/// Expected 16×16 coverage of [`basic_rasterizer`]'s path.
pub const BASIC_MASK: [u8; 256] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xe3, 0xaa, 0x3e, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfa, 0x5f, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfc, 0x24, 0x00, 0x00, 0x00,
    0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xa1, 0x00, 0x00, 0x00,
    0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfc, 0x14, 0x00, 0x00,
    0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x4a, 0x00, 0x00,
    0x00, 0x00, 0xcc, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x81, 0x00, 0x00,
    0x00, 0x00, 0x66, 0xff, 0xff, 0xff, 0xff, 0xff, 0xef, 0xe4, 0xff, 0xff, 0xff, 0xb6, 0x00, 0x00,
    0x00, 0x00, 0x0c, 0xf2, 0xff, 0xff, 0xfe, 0x9e, 0x15, 0x00, 0x15, 0x96, 0xff, 0xce, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x88, 0xfc, 0xe3, 0x43, 0x00, 0x00, 0x00, 0x00, 0x06, 0xcd, 0xdc, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x10, 0x0f, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x25, 0xde, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x56, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

pub fn p(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Add a closed path with line, quadratic and cubic edges.
pub fn add_basic_path(ras: &mut Rasterizer) {
    ras.move_to(p(2.0, 2.0));
    ras.line_to(p(8.0, 2.0));
    ras.quad_to(p(14.0, 2.0), p(14.0, 14.0));
    ras.cube_to(p(8.0, 2.0), p(5.0, 20.0), p(2.0, 8.0));
    ras.close_path();
}

/// A 16×16 rasterizer holding [`add_basic_path`]'s path.
pub fn basic_rasterizer() -> Rasterizer {
    let mut ras = Rasterizer::new(16, 16);
    add_basic_path(&mut ras);
    ras
}

/// Assert two byte slices agree to within `tol` per element.
pub fn assert_within(got: &[u8], want: &[u8], tol: i32, what: &str) {
    assert_eq!(got.len(), want.len(), "{}: length", what);
    for (i, (g, w)) in got.iter().zip(want).enumerate() {
        let delta = *g as i32 - *w as i32;
        assert!(
            delta.abs() <= tol,
            "{}: i={}: got {:#04x}, want {:#04x}",
            what,
            i,
            g,
            w
        );
    }
}

// ============================================================================
// Roboto Regular 'a'
// ============================================================================

pub const GLYPH_WIDTH: f32 = 893.0;
pub const GLYPH_HEIGHT: f32 = 1122.0;

/// One outline command of the test glyph.
#[derive(Debug, Clone, Copy)]
pub enum Cmd {
    MoveTo(f32, f32),
    LineTo(f32, f32),
    QuadTo(f32, f32, f32, f32),
}

/// The 'a' glyph from Roboto Regular, top-left corner at the origin.
pub const GLYPH_A: &[Cmd] = &[
    Cmd::MoveTo(699.0, 1102.0),
    Cmd::QuadTo(683.0, 1070.0, 673.0, 988.0),
    Cmd::QuadTo(544.0, 1122.0, 365.0, 1122.0),
    Cmd::QuadTo(205.0, 1122.0, 102.5, 1031.5),
    Cmd::QuadTo(0.0, 941.0, 0.0, 802.0),
    Cmd::QuadTo(0.0, 633.0, 128.5, 539.5),
    Cmd::QuadTo(257.0, 446.0, 490.0, 446.0),
    Cmd::LineTo(670.0, 446.0),
    Cmd::LineTo(670.0, 361.0),
    Cmd::QuadTo(670.0, 264.0, 612.0, 206.5),
    Cmd::QuadTo(554.0, 149.0, 441.0, 149.0),
    Cmd::QuadTo(342.0, 149.0, 275.0, 199.0),
    Cmd::QuadTo(208.0, 249.0, 208.0, 320.0),
    Cmd::LineTo(22.0, 320.0),
    Cmd::QuadTo(22.0, 239.0, 79.5, 163.5),
    Cmd::QuadTo(137.0, 88.0, 235.5, 44.0),
    Cmd::QuadTo(334.0, 0.0, 452.0, 0.0),
    Cmd::QuadTo(639.0, 0.0, 745.0, 93.5),
    Cmd::QuadTo(851.0, 187.0, 855.0, 351.0),
    Cmd::LineTo(855.0, 849.0),
    Cmd::QuadTo(855.0, 998.0, 893.0, 1086.0),
    Cmd::LineTo(893.0, 1102.0),
    Cmd::LineTo(699.0, 1102.0),
    Cmd::MoveTo(392.0, 961.0),
    Cmd::QuadTo(479.0, 961.0, 557.0, 916.0),
    Cmd::QuadTo(635.0, 871.0, 670.0, 799.0),
    Cmd::LineTo(670.0, 577.0),
    Cmd::LineTo(525.0, 577.0),
    Cmd::QuadTo(185.0, 577.0, 185.0, 776.0),
    Cmd::QuadTo(185.0, 863.0, 243.0, 912.0),
    Cmd::QuadTo(301.0, 961.0, 392.0, 961.0),
];

/// Width of the glyph's buffer when scaled to `height` pixels.
pub fn glyph_width(height: usize) -> usize {
    (GLYPH_WIDTH * height as f32 / GLYPH_HEIGHT).ceil() as usize
}

/// Replay the test glyph scaled to `height` pixels tall.
pub fn add_glyph(ras: &mut Rasterizer, height: usize) {
    let s = height as f32 / GLYPH_HEIGHT;
    for cmd in GLYPH_A {
        match *cmd {
            Cmd::MoveTo(x, y) => ras.move_to(p(x * s, y * s)),
            Cmd::LineTo(x, y) => ras.line_to(p(x * s, y * s)),
            Cmd::QuadTo(bx, by, cx, cy) => ras.quad_to(p(bx * s, by * s), p(cx * s, cy * s)),
        }
    }
}
