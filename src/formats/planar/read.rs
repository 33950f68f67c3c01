use crate::color::{ColorParams, yuv_to_argb};
use crate::diagnostics::Diagnostics;
use crate::formats::SrcPixels;
use crate::pixel::{Argb16, Yuv8};

/// Planes are ordered Y, U, V unless `SWAP_UV` (YVU420, YVU422, YVU444)
pub(crate) fn read_planar<const SWAP_UV: bool>(
    src: &SrcPixels<'_>,
    color: ColorParams,
    diagnostics: &dyn Diagnostics,
) -> Argb16 {
    let (u, v) = if SWAP_UV {
        (src[2][0], src[1][0])
    } else {
        (src[1][0], src[2][0])
    };

    yuv_to_argb(Yuv8::new(src[0][0], u, v), color, diagnostics)
}
