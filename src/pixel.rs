/// Intermediate pixel every format is converted to and from
///
/// All four channels use the full 0..=65535 range regardless of the precision of the
/// source format. Formats without alpha produce `a = 0xffff`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb16 {
    pub a: u16,
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

impl Argb16 {
    /// Fully transparent black, the value of skipped pixels
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(a: u16, r: u16, g: u16, b: u16) -> Self {
        Self { a, r, g, b }
    }

    /// Scale 8 bit channels up by 257, which maps 0xff exactly onto 0xffff
    pub const fn from_argb8(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self {
            a: a as u16 * 257,
            r: r as u16 * 257,
            g: g as u16 * 257,
            b: b as u16 * 257,
        }
    }
}

/// 8 bit YCbCr triple used while converting a single YUV pixel
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Yuv8 {
    pub y: u8,
    pub u: u8,
    pub v: u8,
}

impl Yuv8 {
    pub const fn new(y: u8, u: u8, v: u8) -> Self {
        Self { y, u, v }
    }
}
