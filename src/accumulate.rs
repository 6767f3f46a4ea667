//! Integration of signed area into coverage.
//!
//! Each row of an [`AreaBuffer`](crate::rasterizer_cells_aa::AreaBuffer) is
//! prefix-summed left to right. The magnitude of the running sum, clamped to
//! 1, is the pixel's coverage; its sign only records winding direction.
//!
//! Coverage is converted to fixed point by scaling with `256` (or `65536`),
//! truncating and clamping to `0xff` (or `0xffff`). Exact quarter coverage
//! therefore lands on `0x40`, `0x80` and `0xc0`.

/// 8-bit coverage of the running sum `acc`. NaN maps to 0.
#[inline]
fn coverage_u8(acc: f32) -> u8 {
    if acc.is_nan() {
        return 0;
    }
    ((acc.abs().min(1.0) * 256.0) as u32).min(0xff) as u8
}

/// 16-bit coverage of the running sum `acc`. NaN maps to 0.
#[inline]
fn coverage_u16(acc: f32) -> u32 {
    if acc.is_nan() {
        return 0;
    }
    ((acc.abs().min(1.0) * 65536.0) as u32).min(0xffff)
}

/// Integrate `src` into a 16-bit coverage mask (`0..=0xffff` per `u32`).
///
/// `dst` and `src` are row-major with `width` elements per row; trailing
/// partial rows are ignored.
pub fn accumulate_mask(dst: &mut [u32], src: &[f32], width: usize) {
    if width == 0 {
        return;
    }
    for (d_row, s_row) in dst.chunks_exact_mut(width).zip(src.chunks_exact(width)) {
        let mut acc = 0.0f32;
        for (d, &s) in d_row.iter_mut().zip(s_row) {
            acc += s;
            *d = coverage_u16(acc);
        }
    }
}

/// Integrate `src` and store the 8-bit coverage in `dst` (Porter-Duff `Src`
/// with an opaque source onto an alpha plane).
pub fn accumulate_op_src(dst: &mut [u8], src: &[f32], width: usize) {
    if width == 0 {
        return;
    }
    for (d_row, s_row) in dst.chunks_exact_mut(width).zip(src.chunks_exact(width)) {
        let mut acc = 0.0f32;
        for (d, &s) in d_row.iter_mut().zip(s_row) {
            acc += s;
            *d = coverage_u8(acc);
        }
    }
}

/// Integrate `src` and composite the coverage over the alpha values in `dst`
/// (Porter-Duff `SrcOver` with an opaque source onto an alpha plane).
pub fn accumulate_op_over(dst: &mut [u8], src: &[f32], width: usize) {
    if width == 0 {
        return;
    }
    for (d_row, s_row) in dst.chunks_exact_mut(width).zip(src.chunks_exact(width)) {
        let mut acc = 0.0f32;
        for (d, &s) in d_row.iter_mut().zip(s_row) {
            acc += s;
            let m = coverage_u16(acc);
            let dst_a = *d as u32 * 0x101;
            let out = dst_a * (0xffff - m) / 0xffff + m;
            *d = (out >> 8) as u8;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
