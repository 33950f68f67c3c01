use crate::color::rgb_to_ycbcr;
use crate::color::space::div_round_257;
use crate::formats::DstPixels;
use crate::pixel::Argb16;

/// Luma for this pixel and the chroma pair of its 2x2 block
///
/// Every pixel of a block writes the same chroma pair, the last one written wins.
pub(crate) fn write_nv12(dst: &mut DstPixels<'_>, px: &Argb16) {
    let yuv = rgb_to_ycbcr(
        div_round_257(px.r),
        div_round_257(px.g),
        div_round_257(px.b),
    );

    dst[0][0] = yuv.y;
    dst[1][0] = yuv.u;
    dst[1][1] = yuv.v;
}
