//! Color types and conversions.
//!
//! All compositing happens in [`Rgba16`]: 16 bits per channel, premultiplied
//! alpha. The storage types convert to and from it:
//! - `Rgba8`: u8 components, premultiplied
//! - `Nrgba8`: u8 components, non-premultiplied
//! - `Alpha8`: u8 alpha only
//!
//! Expanding 8 bits to 16 replicates the byte (`v * 0x101`), so `0xff` maps to
//! `0xffff` exactly. Narrowing takes the high byte.

// ============================================================================
// Rgba16 (compositing space)
// ============================================================================

/// Premultiplied RGBA with u16 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Rgba16 {
    pub const BASE_SHIFT: u32 = 16;
    pub const BASE_SCALE: u32 = 1 << Self::BASE_SHIFT;
    pub const BASE_MASK: u32 = Self::BASE_SCALE - 1;

    pub const TRANSPARENT: Rgba16 = Rgba16::new(0, 0, 0, 0);
    pub const OPAQUE: Rgba16 = Rgba16::new(0xffff, 0xffff, 0xffff, 0xffff);

    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a as u32 == Self::BASE_MASK
    }

    /// Widen an 8-bit channel to 16 bits.
    #[inline]
    pub fn expand(v: u8) -> u16 {
        v as u16 * 0x101
    }
}

impl From<Rgba8> for Rgba16 {
    fn from(c: Rgba8) -> Self {
        Rgba16::new(
            Rgba16::expand(c.r),
            Rgba16::expand(c.g),
            Rgba16::expand(c.b),
            Rgba16::expand(c.a),
        )
    }
}

impl From<Nrgba8> for Rgba16 {
    fn from(c: Nrgba8) -> Self {
        let a = Rgba16::expand(c.a) as u32;
        let pre = |v: u8| (Rgba16::expand(v) as u32 * a / Rgba16::BASE_MASK) as u16;
        Rgba16::new(pre(c.r), pre(c.g), pre(c.b), a as u16)
    }
}

impl From<Alpha8> for Rgba16 {
    fn from(c: Alpha8) -> Self {
        let a = Rgba16::expand(c.a);
        Rgba16::new(a, a, a, a)
    }
}

// ============================================================================
// Rgba8 (premultiplied storage)
// ============================================================================

/// Premultiplied RGBA with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba16> for Rgba8 {
    fn from(c: Rgba16) -> Self {
        Rgba8::new(
            (c.r >> 8) as u8,
            (c.g >> 8) as u8,
            (c.b >> 8) as u8,
            (c.a >> 8) as u8,
        )
    }
}

// ============================================================================
// Nrgba8 (non-premultiplied storage)
// ============================================================================

/// Non-premultiplied RGBA with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nrgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Nrgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba16> for Nrgba8 {
    /// Un-premultiply. Fully transparent input collapses to all zeros.
    fn from(c: Rgba16) -> Self {
        let a = c.a as u32;
        if a == Rgba16::BASE_MASK {
            return Nrgba8::new((c.r >> 8) as u8, (c.g >> 8) as u8, (c.b >> 8) as u8, 0xff);
        }
        if a == 0 {
            return Nrgba8::default();
        }
        let un = |v: u16| ((v as u32 * Rgba16::BASE_MASK / a).min(Rgba16::BASE_MASK) >> 8) as u8;
        Nrgba8::new(un(c.r), un(c.g), un(c.b), (a >> 8) as u8)
    }
}

// ============================================================================
// Alpha8
// ============================================================================

/// A single 8-bit alpha (coverage) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alpha8 {
    pub a: u8,
}

impl Alpha8 {
    pub const fn new(a: u8) -> Self {
        Self { a }
    }
}

impl From<Rgba16> for Alpha8 {
    fn from(c: Rgba16) -> Self {
        Alpha8::new((c.a >> 8) as u8)
    }
}

// ============================================================================
// Tests
// ============================================================================
