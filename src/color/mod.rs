pub(crate) mod space;

pub use space::{YuvMatrix, rgb_to_ycbcr, ycbcr_to_rgb};

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::pixel::{Argb16, Yuv8};

/// YCbCr color encoding of a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorEncoding {
    /// Rec. ITU-R BT.601-7
    BT601,

    /// Rec. ITU-R BT.709-6
    BT709,

    /// Rec. ITU-R BT.2020-2
    BT2020,

    /// A raw encoding property value this crate has no matrix for
    Unknown(u32),
}

impl ColorEncoding {
    /// Decode a DRM `COLOR_ENCODING` property value
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::BT601,
            1 => Self::BT709,
            2 => Self::BT2020,
            other => Self::Unknown(other),
        }
    }

    pub fn to_raw(self) -> u32 {
        match self {
            Self::BT601 => 0,
            Self::BT709 => 1,
            Self::BT2020 => 2,
            Self::Unknown(raw) => raw,
        }
    }
}

/// Quantization range of 8 bit YCbCr samples
///
/// - full range Y, Cb, Cr (0 - 255)
/// - limited range Y (16 - 235), Cb & Cr (16 - 240)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorRange {
    Limited,
    Full,
}

impl ColorRange {
    /// Decode a DRM `COLOR_RANGE` property value, anything but 1 is treated as limited
    pub fn from_raw(raw: u32) -> Self {
        if raw == 1 { Self::Full } else { Self::Limited }
    }

    pub fn is_full(self) -> bool {
        matches!(self, Self::Full)
    }
}

/// Color attributes of a surface, passed alongside every pixel read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorParams {
    pub encoding: ColorEncoding,
    pub range: ColorRange,
}

impl ColorParams {
    pub const fn new(encoding: ColorEncoding, range: ColorRange) -> Self {
        Self { encoding, range }
    }

    /// The YCbCr to RGB matrix for these parameters, `None` for unknown encodings
    pub fn matrix(&self) -> Option<&'static YuvMatrix> {
        YuvMatrix::select(self.encoding, self.range)
    }
}

impl Default for ColorParams {
    fn default() -> Self {
        Self {
            encoding: ColorEncoding::BT601,
            range: ColorRange::Limited,
        }
    }
}

/// Convert one 8 bit YCbCr pixel to [`Argb16`]
///
/// Unknown encodings are reported to `diagnostics` and produce opaque black.
pub fn yuv_to_argb(yuv: Yuv8, params: ColorParams, diagnostics: &dyn Diagnostics) -> Argb16 {
    let Some(matrix) = params.matrix() else {
        diagnostics.report(Diagnostic::UnsupportedEncoding {
            raw: params.encoding.to_raw(),
        });

        return Argb16::new(0xffff, 0, 0, 0);
    };

    let [r, g, b] = ycbcr_to_rgb(matrix, yuv.y, yuv.u, yuv.v);

    Argb16::new(0xffff, r, g, b)
}
