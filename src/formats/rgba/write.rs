use super::store_u16;
use crate::color::space::div_round_257;
use crate::formats::DstPixels;
use crate::pixel::Argb16;

/// ARGB8888 when `ALPHA`, XRGB8888 otherwise
pub(crate) fn write_8888<const ALPHA: bool>(dst: &mut DstPixels<'_>, px: &Argb16) {
    let out = &mut *dst[0];

    out[0] = div_round_257(px.b);
    out[1] = div_round_257(px.g);
    out[2] = div_round_257(px.r);
    out[3] = if ALPHA { div_round_257(px.a) } else { 0xff };
}

/// ARGB16161616 when `ALPHA`, XRGB16161616 otherwise
pub(crate) fn write_16161616<const ALPHA: bool>(dst: &mut DstPixels<'_>, px: &Argb16) {
    let out = &mut *dst[0];

    store_u16(out, 0, px.b);
    store_u16(out, 1, px.g);
    store_u16(out, 2, px.r);
    store_u16(out, 3, if ALPHA { px.a } else { 0xffff });
}
