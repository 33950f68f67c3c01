//! Per format pixel readers and writers, and the registry mapping formats to them
//!
//! A reader receives one slice per plane, each positioned at the pixel to read and exactly
//! `bytes_per_pixel` long. Writers get the same layout, mutable. Positioning the slices is the
//! job of the row composer and writeback.

mod nv12;
mod planar;
mod rgb565;
mod rgba;

use crate::PixelFormat;
use crate::color::ColorParams;
use crate::diagnostics::Diagnostics;
use crate::pixel::Argb16;
use crate::plane_decs::MAX_PLANES;
use std::fmt;

pub(crate) use nv12::{read_semi_planar, write_nv12};
pub(crate) use planar::read_planar;
pub(crate) use rgb565::{read_rgb565, write_rgb565};
pub(crate) use rgba::{read_8888, read_16161616, write_8888, write_16161616};

/// One source pixel, one slice per plane
pub(crate) type SrcPixels<'a> = [&'a [u8]; MAX_PLANES];

/// One destination pixel, one slice per plane
pub(crate) type DstPixels<'a> = [&'a mut [u8]; MAX_PLANES];

type ReadFn = fn(&SrcPixels<'_>, ColorParams, &dyn Diagnostics) -> Argb16;
type WriteFn = fn(&mut DstPixels<'_>, &Argb16);

/// Capability to convert pixels of one format to [`Argb16`]
#[derive(Clone, Copy)]
pub struct PixelReader {
    format: PixelFormat,
    read: ReadFn,
}

impl PixelReader {
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    #[inline(always)]
    pub(crate) fn read(
        &self,
        src: &SrcPixels<'_>,
        color: ColorParams,
        diagnostics: &dyn Diagnostics,
    ) -> Argb16 {
        (self.read)(src, color, diagnostics)
    }
}

impl fmt::Debug for PixelReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PixelReader").field(&self.format).finish()
    }
}

/// Capability to convert [`Argb16`] pixels to one format
#[derive(Clone, Copy)]
pub struct PixelWriter {
    format: PixelFormat,
    write: WriteFn,
}

impl PixelWriter {
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    #[inline(always)]
    pub(crate) fn write(&self, dst: &mut DstPixels<'_>, px: &Argb16) {
        (self.write)(dst, px)
    }
}

impl fmt::Debug for PixelWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PixelWriter").field(&self.format).finish()
    }
}

/// Find the reader for `format`, `None` if the format cannot be read
pub fn lookup_reader(format: PixelFormat) -> Option<PixelReader> {
    use PixelFormat::*;

    let read: ReadFn = match format {
        ARGB8888 => read_8888::<true>,
        XRGB8888 => read_8888::<false>,
        ARGB16161616 => read_16161616::<true>,
        XRGB16161616 => read_16161616::<false>,
        RGB565 => read_rgb565,
        NV12 | NV16 | NV24 => read_semi_planar::<false>,
        NV21 | NV61 | NV42 => read_semi_planar::<true>,
        YUV420 | YUV422 | YUV444 => read_planar::<false>,
        YVU420 | YVU422 | YVU444 => read_planar::<true>,
    };

    Some(PixelReader { format, read })
}

/// Find the writer for `format`, `None` if the format cannot be written
pub fn lookup_writer(format: PixelFormat) -> Option<PixelWriter> {
    use PixelFormat::*;

    let write: WriteFn = match format {
        ARGB8888 => write_8888::<true>,
        XRGB8888 => write_8888::<false>,
        ARGB16161616 => write_16161616::<true>,
        XRGB16161616 => write_16161616::<false>,
        RGB565 => write_rgb565,
        NV12 => write_nv12,
        NV21 | NV16 | NV61 | NV24 | NV42 | YUV420 | YVU420 | YUV422 | YVU422 | YUV444
        | YVU444 => return None,
    };

    Some(PixelWriter { format, write })
}

#[cfg(test)]
pub(crate) mod test_util {
    use super::*;
    use crate::diagnostics::LogOnce;

    /// Read one pixel from per plane byte arrays
    pub(crate) fn read_one(format: PixelFormat, planes: &[&[u8]], color: ColorParams) -> Argb16 {
        let mut src: SrcPixels<'_> = [&[]; MAX_PLANES];
        src[..planes.len()].copy_from_slice(planes);

        lookup_reader(format)
            .unwrap()
            .read(&src, color, &LogOnce::new())
    }

    /// Write one pixel and return the bytes of every plane
    pub(crate) fn write_one(format: PixelFormat, px: Argb16) -> Vec<Vec<u8>> {
        let mut planes: Vec<Vec<u8>> = format
            .plane_desc()
            .iter()
            .map(|desc| vec![0u8; desc.bytes_per_pixel])
            .collect();

        let mut dst: DstPixels<'_> = Default::default();
        for (slot, plane) in dst.iter_mut().zip(planes.iter_mut()) {
            *slot = plane.as_mut_slice();
        }

        lookup_writer(format).unwrap().write(&mut dst, &px);

        planes
    }
}
