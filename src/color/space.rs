use super::{ColorEncoding, ColorRange};
use crate::fixed::Fixed;
use crate::pixel::Yuv8;

pub(crate) mod mat_idxs {
    pub(crate) const Y: usize = 0;
    pub(crate) const U: usize = 1;
    pub(crate) const V: usize = 2;

    pub(crate) const R: usize = 0;
    pub(crate) const G: usize = 1;
    pub(crate) const B: usize = 2;
}

use mat_idxs::*;

/// Fixed point YCbCr to RGB matrix for one (encoding, range) pair
///
/// Rows are R, G, B; columns are the offset adjusted Y, Cb, Cr. The coefficients already
/// include the scale from the 8 bit input range to the 16 bit output range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YuvMatrix {
    m: [[Fixed; 3]; 3],
    y_offset: i32,
}

/// `v / 10000 * 65535 / r` in fixed point
const fn coeff(v: i64, r: i32) -> Fixed {
    Fixed::from_fraction(v, 10000)
        .mul(Fixed::from_int(0xffff))
        .div(Fixed::from_int(r))
}

/// Build a matrix from the chroma weights of an encoding
///
/// `cr_r`, `cb_g`, `cr_g` and `cb_b` are given in units of 1/10000.
const fn make_matrix(cr_r: i64, cb_g: i64, cr_g: i64, cb_b: i64, full: bool) -> YuvMatrix {
    let (y_range, c_range, y_offset) = if full { (255, 255, 0) } else { (219, 224, 16) };

    let y = coeff(10000, y_range);

    YuvMatrix {
        m: [
            [y, coeff(0, c_range), coeff(cr_r, c_range)],
            [y, coeff(cb_g, c_range), coeff(cr_g, c_range)],
            [y, coeff(cb_b, c_range), coeff(0, c_range)],
        ],
        y_offset,
    }
}

const BT601_LIMITED: YuvMatrix = make_matrix(14020, -3441, -7141, 17720, false);
const BT601_FULL: YuvMatrix = make_matrix(14020, -3441, -7141, 17720, true);
const BT709_LIMITED: YuvMatrix = make_matrix(15748, -1873, -4681, 18556, false);
const BT709_FULL: YuvMatrix = make_matrix(15748, -1873, -4681, 18556, true);
const BT2020_LIMITED: YuvMatrix = make_matrix(14746, -1646, -5714, 18814, false);
const BT2020_FULL: YuvMatrix = make_matrix(14746, -1646, -5714, 18814, true);

impl YuvMatrix {
    pub fn select(encoding: ColorEncoding, range: ColorRange) -> Option<&'static Self> {
        let full = range.is_full();

        let matrix = match encoding {
            ColorEncoding::BT601 if full => &BT601_FULL,
            ColorEncoding::BT601 => &BT601_LIMITED,
            ColorEncoding::BT709 if full => &BT709_FULL,
            ColorEncoding::BT709 => &BT709_LIMITED,
            ColorEncoding::BT2020 if full => &BT2020_FULL,
            ColorEncoding::BT2020 => &BT2020_LIMITED,
            ColorEncoding::Unknown(_) => return None,
        };

        Some(matrix)
    }

    /// Luma offset subtracted before the matrix is applied, 0 for full and 16 for limited range
    pub fn y_offset(&self) -> i32 {
        self.y_offset
    }

    /// Apply the matrix without clamping, results are in 16 bit scale
    fn apply(&self, y: u8, cb: u8, cr: u8) -> [i64; 3] {
        let yuv = [
            Fixed::from_int(y as i32 - self.y_offset),
            Fixed::from_int(cb as i32 - 128),
            Fixed::from_int(cr as i32 - 128),
        ];

        [R, G, B].map(|row| {
            let row = &self.m[row];

            (row[Y].mul(yuv[Y]) + row[U].mul(yuv[U]) + row[V].mul(yuv[V])).trunc_to_int()
        })
    }

    /// Like [`ycbcr_to_rgb`] but for an 8 bit intermediate, each channel clamped to 0..=255
    pub fn apply_u8(&self, y: u8, cb: u8, cr: u8) -> [u8; 3] {
        self.apply(y, cb, cr)
            .map(|c| div_round_257(c.clamp(0, 0xffff) as u16))
    }
}

/// Convert offset YCbCr to 16 bit RGB, each channel clamped to 0..=65535
pub fn ycbcr_to_rgb(matrix: &YuvMatrix, y: u8, cb: u8, cr: u8) -> [u16; 3] {
    matrix.apply(y, cb, cr).map(|c| c.clamp(0, 0xffff) as u16)
}

/// Forward BT.601 limited range transform for 8 bit RGB
///
/// Integer weights in units of 1/256, rounded by adding 128 before an arithmetic right shift.
/// The output lands in 16..=235 (Y) and 16..=240 (Cb, Cr) without clamping.
pub fn rgb_to_ycbcr(r: u8, g: u8, b: u8) -> Yuv8 {
    let (r, g, b) = (r as i32, g as i32, b as i32);

    let y = ((66 * r + 129 * g + 25 * b + 128) >> 8) + 16;
    let u = ((-38 * r - 74 * g + 112 * b + 128) >> 8) + 128;
    let v = ((112 * r - 94 * g - 18 * b + 128) >> 8) + 128;

    Yuv8::new(y as u8, u as u8, v as u8)
}

/// 16 bit to 8 bit channel, rounding to the nearest value
pub(crate) const fn div_round_257(v: u16) -> u8 {
    ((v as u32 + 128) / 257) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_range() {
        let limited = YuvMatrix::select(ColorEncoding::BT709, ColorRange::Limited).unwrap();
        let full = YuvMatrix::select(ColorEncoding::BT709, ColorRange::Full).unwrap();

        assert_eq!(limited.y_offset(), 16);
        assert_eq!(full.y_offset(), 0);
        assert!(YuvMatrix::select(ColorEncoding::Unknown(3), ColorRange::Full).is_none());
    }

    #[test]
    fn clamps_out_of_gamut() {
        let matrix = YuvMatrix::select(ColorEncoding::BT601, ColorRange::Limited).unwrap();

        // Below black and above white
        assert_eq!(ycbcr_to_rgb(matrix, 0, 128, 128), [0, 0, 0]);
        assert_eq!(ycbcr_to_rgb(matrix, 255, 128, 128), [0xffff, 0xffff, 0xffff]);

        // Extreme chroma overshoots on some channels and undershoots on others
        let [r, g, b] = ycbcr_to_rgb(matrix, 235, 255, 255);
        assert_eq!((r, b), (0xffff, 0xffff));
        assert!(g < 0xffff);

        assert_eq!(matrix.apply_u8(255, 128, 128), [255, 255, 255]);
        assert_eq!(matrix.apply_u8(0, 128, 128), [0, 0, 0]);
    }

    #[test]
    fn forward_transform_reference_values() {
        assert_eq!(rgb_to_ycbcr(255, 255, 255), Yuv8::new(235, 128, 128));
        assert_eq!(rgb_to_ycbcr(0, 0, 0), Yuv8::new(16, 128, 128));
        assert_eq!(rgb_to_ycbcr(255, 0, 0), Yuv8::new(82, 90, 240));
        assert_eq!(rgb_to_ycbcr(0, 0, 255), Yuv8::new(41, 240, 110));
    }

    #[test]
    fn round_257() {
        assert_eq!(div_round_257(0), 0);
        assert_eq!(div_round_257(128), 0);
        assert_eq!(div_round_257(129), 1);
        assert_eq!(div_round_257(0xffff), 255);

        for v in 0..=255u8 {
            assert_eq!(div_round_257(v as u16 * 257), v);
        }
    }
}
