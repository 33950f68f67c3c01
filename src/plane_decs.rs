/// Maximum number of planes of any supported format
pub const MAX_PLANES: usize = 3;

/// Layout of a single plane of a [`PixelFormat`](crate::PixelFormat)
///
/// This table is shared by the addressing layer and the format readers/writers, they never
/// compute plane geometry on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneDesc {
    /// Bytes occupied by one sample of this plane
    pub bytes_per_pixel: usize,

    /// Horizontal subsampling divisor, 1 for full resolution
    pub hsub: usize,

    /// Vertical subsampling divisor, 1 for full resolution
    pub vsub: usize,
}

impl PlaneDesc {
    const fn new(bytes_per_pixel: usize, hsub: usize, vsub: usize) -> Self {
        Self {
            bytes_per_pixel,
            hsub,
            vsub,
        }
    }

    /// Number of samples in a row of this plane for an image of `width` pixels
    pub fn plane_width(&self, width: usize) -> usize {
        width.div_ceil(self.hsub)
    }

    /// Number of rows of this plane for an image of `height` pixels
    pub fn plane_height(&self, height: usize) -> usize {
        height.div_ceil(self.vsub)
    }

    pub fn packed_stride(&self, width: usize) -> usize {
        self.plane_width(width).saturating_mul(self.bytes_per_pixel)
    }
}

const LUMA: PlaneDesc = PlaneDesc::new(1, 1, 1);

pub(crate) const ARGB8888_PLANES: [PlaneDesc; 1] = [PlaneDesc::new(4, 1, 1)];

pub(crate) const ARGB16161616_PLANES: [PlaneDesc; 1] = [PlaneDesc::new(8, 1, 1)];

pub(crate) const RGB565_PLANES: [PlaneDesc; 1] = [PlaneDesc::new(2, 1, 1)];

/// Y and interleaved CbCr planes, 4:2:0
pub(crate) const NV12_PLANES: [PlaneDesc; 2] = [LUMA, PlaneDesc::new(2, 2, 2)];

/// Y and interleaved CbCr planes, 4:2:2
pub(crate) const NV16_PLANES: [PlaneDesc; 2] = [LUMA, PlaneDesc::new(2, 2, 1)];

/// Y and interleaved CbCr planes, 4:4:4
pub(crate) const NV24_PLANES: [PlaneDesc; 2] = [LUMA, PlaneDesc::new(2, 1, 1)];

/// Y, Cb and Cr planes, 4:2:0
pub(crate) const YUV420_PLANES: [PlaneDesc; 3] =
    [LUMA, PlaneDesc::new(1, 2, 2), PlaneDesc::new(1, 2, 2)];

/// Y, Cb and Cr planes, 4:2:2
pub(crate) const YUV422_PLANES: [PlaneDesc; 3] =
    [LUMA, PlaneDesc::new(1, 2, 1), PlaneDesc::new(1, 2, 1)];

/// Y, Cb and Cr planes, 4:4:4
pub(crate) const YUV444_PLANES: [PlaneDesc; 3] = [LUMA, LUMA, LUMA];
