use crate::color::ColorParams;
use crate::diagnostics::Diagnostics;
use crate::fixed::Fixed;
use crate::formats::{DstPixels, SrcPixels};
use crate::pixel::Argb16;

/// 65535 / 31, scale between a 5 bit and a 16 bit channel
const RB_RATIO: Fixed = Fixed::from_int(0xffff).div(Fixed::from_int(31));

/// 65535 / 63, scale between a 6 bit and a 16 bit channel
const G_RATIO: Fixed = Fixed::from_int(0xffff).div(Fixed::from_int(63));

fn expand(v: u16, ratio: Fixed) -> u16 {
    Fixed::from_int(v as i32)
        .mul(ratio)
        .round_to_int()
        .clamp(0, 0xffff) as u16
}

fn reduce(v: u16, ratio: Fixed, mask: u16) -> u16 {
    (Fixed::from_int(v as i32).div(ratio).trunc_to_int() as u16) & mask
}

pub(crate) fn read_rgb565(src: &SrcPixels<'_>, _: ColorParams, _: &dyn Diagnostics) -> Argb16 {
    let px = u16::from_le_bytes([src[0][0], src[0][1]]);

    Argb16 {
        a: 0xffff,
        r: expand((px >> 11) & 0x1f, RB_RATIO),
        g: expand((px >> 5) & 0x3f, G_RATIO),
        b: expand(px & 0x1f, RB_RATIO),
    }
}

pub(crate) fn write_rgb565(dst: &mut DstPixels<'_>, px: &Argb16) {
    let r = reduce(px.r, RB_RATIO, 0x1f);
    let g = reduce(px.g, G_RATIO, 0x3f);
    let b = reduce(px.b, RB_RATIO, 0x1f);

    dst[0][..2].copy_from_slice(&(r << 11 | g << 5 | b).to_le_bytes());
}

#[cfg(test)]
mod tests {
    use crate::formats::test_util::{read_one, write_one};
    use crate::{Argb16, ColorParams, PixelFormat};

    fn read(px: u16) -> Argb16 {
        read_one(PixelFormat::RGB565, &[&px.to_le_bytes()], ColorParams::default())
    }

    #[test]
    fn expands_extremes() {
        assert_eq!(read(0xffff), Argb16::new(0xffff, 0xffff, 0xffff, 0xffff));
        assert_eq!(read(0x0000), Argb16::new(0xffff, 0, 0, 0));
        assert_eq!(read(0xf800), Argb16::new(0xffff, 0xffff, 0, 0));
        assert_eq!(read(0x07e0), Argb16::new(0xffff, 0, 0xffff, 0));
        assert_eq!(read(0x001f), Argb16::new(0xffff, 0, 0, 0xffff));
    }

    #[test]
    fn expands_rounded() {
        // 1 * 65535 / 31 = 2114.03, 1 * 65535 / 63 = 1040.24
        assert_eq!(read(1 << 11).r, 2114);
        assert_eq!(read(1 << 5).g, 1040);
        // 16 * 65535 / 31 = 33824.52
        assert_eq!(read(16).b, 33825);
    }

    #[test]
    fn reduces_truncated() {
        let px = Argb16::new(0, 0xffff, 0xffff, 0xffff);
        assert_eq!(write_one(PixelFormat::RGB565, px), vec![vec![0xff, 0xff]]);

        let px = Argb16::new(0, 0xffff, 0, 0);
        assert_eq!(write_one(PixelFormat::RGB565, px), vec![0xf800u16.to_le_bytes().to_vec()]);

        // Just below the second step of each channel truncates to the first
        let px = Argb16::new(0, 4227, 2079, 4227);
        let expected = (1u16 << 11) | (1 << 5) | 1;
        assert_eq!(write_one(PixelFormat::RGB565, px), vec![expected.to_le_bytes().to_vec()]);
    }
}
