use crate::formats::{PixelReader, PixelWriter, lookup_reader, lookup_writer};
use crate::plane_decs::*;

/// Supported framebuffer formats
///
/// Multi byte channels are little endian. Packed RGB formats are named with the most
/// significant channel first, so `ARGB8888` is stored as the bytes B, G, R, A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PixelFormat {
    /// Single plane, 8 bits per channel with alpha
    ARGB8888,

    /// Single plane, 8 bits per channel, padding byte instead of alpha
    XRGB8888,

    /// Single plane, 16 bits per channel with alpha
    ARGB16161616,

    /// Single plane, 16 bits per channel, padding instead of alpha
    XRGB16161616,

    /// Single plane, 5 bits red, 6 bits green, 5 bits blue
    RGB565,

    /// Y and interleaved UV planes, 4:2:0 sub sampling
    NV12,

    /// Y and interleaved VU planes, 4:2:0 sub sampling
    NV21,

    /// Y and interleaved UV planes, 4:2:2 sub sampling
    NV16,

    /// Y and interleaved VU planes, 4:2:2 sub sampling
    NV61,

    /// Y and interleaved UV planes, no sub sampling
    NV24,

    /// Y and interleaved VU planes, no sub sampling
    NV42,

    /// Y, U and V planes, 4:2:0 sub sampling
    YUV420,

    /// Y, V and U planes, 4:2:0 sub sampling
    YVU420,

    /// Y, U and V planes, 4:2:2 sub sampling
    YUV422,

    /// Y, V and U planes, 4:2:2 sub sampling
    YVU422,

    /// Y, U and V planes, no sub sampling
    YUV444,

    /// Y, V and U planes, no sub sampling
    YVU444,
}

const fn fourcc(code: &[u8; 4]) -> u32 {
    (code[0] as u32) | (code[1] as u32) << 8 | (code[2] as u32) << 16 | (code[3] as u32) << 24
}

impl PixelFormat {
    /// The DRM fourcc code of this format
    pub const fn fourcc(self) -> u32 {
        use PixelFormat::*;

        match self {
            ARGB8888 => fourcc(b"AR24"),
            XRGB8888 => fourcc(b"XR24"),
            ARGB16161616 => fourcc(b"AR48"),
            XRGB16161616 => fourcc(b"XR48"),
            RGB565 => fourcc(b"RG16"),
            NV12 => fourcc(b"NV12"),
            NV21 => fourcc(b"NV21"),
            NV16 => fourcc(b"NV16"),
            NV61 => fourcc(b"NV61"),
            NV24 => fourcc(b"NV24"),
            NV42 => fourcc(b"NV42"),
            YUV420 => fourcc(b"YU12"),
            YVU420 => fourcc(b"YV12"),
            YUV422 => fourcc(b"YU16"),
            YVU422 => fourcc(b"YV16"),
            YUV444 => fourcc(b"YU24"),
            YVU444 => fourcc(b"YV24"),
        }
    }

    /// Look up a format by its DRM fourcc code
    pub fn from_fourcc(code: u32) -> Option<Self> {
        Self::variants()
            .into_iter()
            .find(|format| format.fourcc() == code)
    }

    pub fn plane_desc(&self) -> &'static [PlaneDesc] {
        use PixelFormat::*;

        match self {
            ARGB8888 | XRGB8888 => &ARGB8888_PLANES,
            ARGB16161616 | XRGB16161616 => &ARGB16161616_PLANES,
            RGB565 => &RGB565_PLANES,
            NV12 | NV21 => &NV12_PLANES,
            NV16 | NV61 => &NV16_PLANES,
            NV24 | NV42 => &NV24_PLANES,
            YUV420 | YVU420 => &YUV420_PLANES,
            YUV422 | YVU422 => &YUV422_PLANES,
            YUV444 | YVU444 => &YUV444_PLANES,
        }
    }

    pub fn num_planes(&self) -> usize {
        self.plane_desc().len()
    }

    pub fn is_yuv(&self) -> bool {
        use PixelFormat::*;

        !matches!(
            self,
            ARGB8888 | XRGB8888 | ARGB16161616 | XRGB16161616 | RGB565
        )
    }

    /// The reader converting this format to [`Argb16`](crate::Argb16), if it can be read
    pub fn reader(self) -> Option<PixelReader> {
        lookup_reader(self)
    }

    /// The writer converting [`Argb16`](crate::Argb16) to this format, if it can be written
    pub fn writer(self) -> Option<PixelWriter> {
        lookup_writer(self)
    }

    /// Calculate the required buffer size in bytes of a tightly packed image with the given
    /// dimensions
    pub fn buffer_size(self, width: usize, height: usize) -> usize {
        self.plane_desc()
            .iter()
            .map(|plane| {
                plane
                    .packed_stride(width)
                    .saturating_mul(plane.plane_height(height))
            })
            .fold(0, usize::saturating_add)
    }

    /// Calculate the strides of an image in a packed buffer
    pub fn packed_strides(self, width: usize) -> Vec<usize> {
        self.plane_desc()
            .iter()
            .map(|desc| desc.packed_stride(width))
            .collect()
    }

    pub fn variants() -> impl IntoIterator<Item = Self> {
        use PixelFormat::*;

        [
            ARGB8888,
            XRGB8888,
            ARGB16161616,
            XRGB16161616,
            RGB565,
            NV12,
            NV21,
            NV16,
            NV61,
            NV24,
            NV42,
            YUV420,
            YVU420,
            YUV422,
            YVU422,
            YUV444,
            YVU444,
        ]
    }
}

impl TryFrom<u32> for PixelFormat {
    type Error = FormatError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::from_fourcc(code).ok_or(FormatError::UnknownFourcc(code))
    }
}

/// Everything that can go wrong when setting up a conversion
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("pixel format {0:?} cannot be read")]
    Unreadable(PixelFormat),

    #[error("pixel format {0:?} cannot be written")]
    Unwritable(PixelFormat),

    #[error("unknown fourcc code {0:#010x}")]
    UnknownFourcc(u32),
}
