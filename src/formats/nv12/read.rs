use crate::color::{ColorParams, yuv_to_argb};
use crate::diagnostics::Diagnostics;
use crate::formats::SrcPixels;
use crate::pixel::{Argb16, Yuv8};

/// Chroma pairs are stored U, V unless `SWAP_UV` (NV21, NV61, NV42)
pub(crate) fn read_semi_planar<const SWAP_UV: bool>(
    src: &SrcPixels<'_>,
    color: ColorParams,
    diagnostics: &dyn Diagnostics,
) -> Argb16 {
    let y = src[0][0];
    let uv = src[1];

    let (u, v) = if SWAP_UV {
        (uv[1], uv[0])
    } else {
        (uv[0], uv[1])
    };

    yuv_to_argb(Yuv8::new(y, u, v), color, diagnostics)
}
