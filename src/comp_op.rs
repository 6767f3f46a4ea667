//! Porter-Duff compositing operators.
//!
//! Two operators are supported: `SrcOver` (the default) blends the masked
//! source on top of the destination, `Src` replaces the destination with the
//! masked source. All arithmetic is on 16-bit premultiplied channels with
//! 64-bit intermediates.

use crate::color::Rgba16;

// ============================================================================
// CompOp enum
// ============================================================================

/// Compositing operator used by `Rasterizer::draw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CompOp {
    /// Replace the destination: `dst = src * m`.
    Src = 0,
    /// Source over destination: `dst = src * m + dst * (1 - src.a * m)`.
    #[default]
    SrcOver = 1,
}

const M: u64 = Rgba16::BASE_MASK as u64;

impl CompOp {
    /// Composite `src` scaled by the coverage `mask` (0..=0xffff) onto `dst`.
    #[inline]
    pub fn blend(self, dst: Rgba16, src: Rgba16, mask: u32) -> Rgba16 {
        let m = (mask as u64).min(M);
        match self {
            CompOp::SrcOver => {
                let a = M - (src.a as u64 * m / M);
                let ch = |d: u16, s: u16| ((d as u64 * a + s as u64 * m) / M) as u16;
                Rgba16::new(
                    ch(dst.r, src.r),
                    ch(dst.g, src.g),
                    ch(dst.b, src.b),
                    ch(dst.a, src.a),
                )
            }
            CompOp::Src => {
                let ch = |s: u16| (s as u64 * m / M) as u16;
                Rgba16::new(ch(src.r), ch(src.g), ch(src.b), ch(src.a))
            }
        }
    }

    /// `true` if the result depends on the destination pixel.
    #[inline]
    pub fn reads_dst(self) -> bool {
        matches!(self, CompOp::SrcOver)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba16 = Rgba16::new(0xffff, 0, 0, 0xffff);
    const BLUE: Rgba16 = Rgba16::new(0, 0, 0xffff, 0xffff);

    #[test]
    fn test_comp_op_default() {
        assert_eq!(CompOp::default(), CompOp::SrcOver);
    }

    #[test]
    fn test_src_over_opaque_full_cover() {
        assert_eq!(CompOp::SrcOver.blend(RED, BLUE, 0xffff), BLUE);
    }

    #[test]
    fn test_src_over_zero_cover_is_noop() {
        assert_eq!(CompOp::SrcOver.blend(RED, BLUE, 0), RED);
    }

    #[test]
    fn test_src_over_half_cover() {
        let out = CompOp::SrcOver.blend(RED, BLUE, 0x8000);
        // a = 0xffff - 0x8000 = 0x7fff
        assert_eq!(out.r, 0x7fff);
        assert_eq!(out.b, 0x8000);
        assert_eq!(out.a, 0xffff);
    }

    #[test]
    fn test_src_over_semitransparent_source() {
        let src = Rgba16::new(0, 0, 0x8000, 0x8000);
        let out = CompOp::SrcOver.blend(RED, src, 0xffff);
        assert_eq!(out.r, 0x7fff);
        assert_eq!(out.b, 0x8000);
        assert_eq!(out.a, 0xffff);
    }

    #[test]
    fn test_src_ignores_dst() {
        assert_eq!(CompOp::Src.blend(RED, BLUE, 0xffff), BLUE);
        assert_eq!(CompOp::Src.blend(RED, BLUE, 0), Rgba16::TRANSPARENT);
        let half = CompOp::Src.blend(RED, BLUE, 0x8000);
        assert_eq!(half, Rgba16::new(0, 0, 0x8000, 0x8000));
    }

    #[test]
    fn test_src_over_equals_src_on_transparent_dst() {
        for m in [0u32, 1, 0x1234, 0x8000, 0xfffe, 0xffff] {
            assert_eq!(
                CompOp::SrcOver.blend(Rgba16::TRANSPARENT, BLUE, m),
                CompOp::Src.blend(Rgba16::TRANSPARENT, BLUE, m),
            );
        }
    }

    #[test]
    fn test_mask_clamped() {
        assert_eq!(CompOp::Src.blend(RED, BLUE, u32::MAX), BLUE);
    }

    #[test]
    fn test_reads_dst() {
        assert!(CompOp::SrcOver.reads_dst());
        assert!(!CompOp::Src.reads_dst());
    }
}
