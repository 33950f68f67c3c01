use super::load_u16;
use crate::color::ColorParams;
use crate::diagnostics::Diagnostics;
use crate::formats::SrcPixels;
use crate::pixel::Argb16;

/// ARGB8888 when `ALPHA`, XRGB8888 otherwise
pub(crate) fn read_8888<const ALPHA: bool>(
    src: &SrcPixels<'_>,
    _: ColorParams,
    _: &dyn Diagnostics,
) -> Argb16 {
    let px = src[0];

    let a = if ALPHA { px[3] } else { 0xff };

    Argb16::from_argb8(a, px[2], px[1], px[0])
}

/// ARGB16161616 when `ALPHA`, XRGB16161616 otherwise
pub(crate) fn read_16161616<const ALPHA: bool>(
    src: &SrcPixels<'_>,
    _: ColorParams,
    _: &dyn Diagnostics,
) -> Argb16 {
    let px = src[0];

    Argb16 {
        a: if ALPHA { load_u16(px, 3) } else { 0xffff },
        r: load_u16(px, 2),
        g: load_u16(px, 1),
        b: load_u16(px, 0),
    }
}
