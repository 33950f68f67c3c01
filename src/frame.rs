use crate::PixelFormat;
use crate::rotation::{Rotation, RotationFlag};

/// Integer rectangle, `x2`/`y2` exclusive
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Rectangle at the origin with the given size, saturating at `i32::MAX`
    pub fn from_size(width: usize, height: usize) -> Self {
        Self::new(0, 0, saturate_i32(width), saturate_i32(height))
    }

    /// Width, zero for empty or inverted rectangles
    pub fn width(&self) -> usize {
        extent(self.x1, self.x2)
    }

    /// Height, zero for empty or inverted rectangles
    pub fn height(&self) -> usize {
        extent(self.y1, self.y2)
    }

    pub fn contains_row(&self, y: i32) -> bool {
        self.y1 <= y && y < self.y2
    }
}

/// Rectangle in 16.16 fixed point
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl FixedRect {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn from_rect(rect: Rect) -> Self {
        let fixed = |v: i32| v.saturating_mul(1 << 16);

        Self::new(fixed(rect.x1), fixed(rect.y1), fixed(rect.x2), fixed(rect.y2))
    }

    /// Integer pixel origin, fractional parts truncated
    pub fn origin(&self) -> (i32, i32) {
        (self.x1 >> 16, self.y1 >> 16)
    }
}

fn extent(start: i32, end: i32) -> usize {
    usize::try_from(i64::from(end) - i64::from(start)).unwrap_or(0)
}

fn saturate_i32(v: usize) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// One plane of a mapped framebuffer
#[derive(Debug, Clone, Copy)]
pub struct Plane<S> {
    /// Mapped memory of this plane
    pub buf: S,

    /// Byte offset of the first pixel inside `buf`
    pub offset: usize,

    /// Bytes between the starts of two rows
    pub stride: usize,
}

impl<S> Plane<S> {
    pub fn new(buf: S, offset: usize, stride: usize) -> Self {
        Self {
            buf,
            offset,
            stride,
        }
    }
}

/// Description of a source or destination framebuffer and how it is placed
///
/// Only read by the conversion code, validating it is up to the caller. Descriptions that don't
/// fit the mapped planes are not unsafe, the affected pixels are skipped and reported.
#[derive(Debug, Clone)]
pub struct FrameInfo<S> {
    pub format: PixelFormat,
    pub planes: Vec<Plane<S>>,

    /// Source rectangle in 16.16 fixed point
    pub src: FixedRect,

    /// Destination rectangle
    pub dst: Rect,

    pub rotation: Rotation,
}

impl<S> FrameInfo<S> {
    /// Frame of `width` x `height` pixels placed unrotated at the origin
    pub fn new(format: PixelFormat, planes: Vec<Plane<S>>, width: usize, height: usize) -> Self {
        let rect = Rect::from_size(width, height);

        Self {
            format,
            planes,
            src: FixedRect::from_rect(rect),
            dst: rect,
            rotation: RotationFlag::Rotate0.into(),
        }
    }

    pub fn with_src(mut self, src: FixedRect) -> Self {
        self.src = src;
        self
    }

    pub fn with_dst(mut self, dst: Rect) -> Self {
        self.dst = dst;
        self
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }
}

/// Split a tightly packed buffer into the planes of `format`
///
/// A buffer smaller than [`PixelFormat::buffer_size`] yields short or empty trailing planes.
pub fn packed_planes<S: AnySlice>(
    format: PixelFormat,
    mut buf: S,
    width: usize,
    height: usize,
) -> Vec<Plane<S>> {
    format
        .plane_desc()
        .iter()
        .map(|desc| {
            let stride = desc.packed_stride(width);
            let len = stride
                .saturating_mul(desc.plane_height(height))
                .min(buf.slice_len());

            let (plane, rem) = std::mem::take(&mut buf).slice_split_at(len);
            buf = rem;

            Plane::new(plane, 0, stride)
        })
        .collect()
}

/// Helper trait implemented on &[T] and &mut [T]
#[diagnostic::on_unimplemented(message = "AnySlice is only implemented for &[T] and &mut [T].\n\
               When using or Vec<T> or similar try .as_slice() or .as_mut_slice()")]
pub trait AnySlice: sealed::Sealed + Default + Sized {
    fn slice_len(&self) -> usize;
    fn slice_split_at(self, at: usize) -> (Self, Self);
}

mod sealed {
    pub trait Sealed {}
    impl<T> Sealed for &[T] {}
    impl<T> Sealed for &mut [T] {}
}

impl<T> AnySlice for &[T] {
    fn slice_len(&self) -> usize {
        self.len()
    }

    fn slice_split_at(self, at: usize) -> (Self, Self) {
        self.split_at(at)
    }
}

impl<T> AnySlice for &mut [T] {
    fn slice_len(&self) -> usize {
        self.len()
    }

    fn slice_split_at(self, at: usize) -> (Self, Self) {
        self.split_at_mut(at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_extent() {
        assert_eq!(Rect::new(2, 3, 10, 4).width(), 8);
        assert_eq!(Rect::new(2, 3, 10, 4).height(), 1);
        assert_eq!(Rect::new(5, 0, 1, 0).width(), 0);
        assert_eq!(Rect::new(i32::MIN, 0, i32::MAX, 0).width(), u32::MAX as usize);
        assert_eq!(Rect::from_size(usize::MAX, 1).x2, i32::MAX);
    }

    #[test]
    fn fixed_origin_truncates() {
        let rect = FixedRect::new(3 << 16 | 0xffff, 7 << 16, 0, 0);
        assert_eq!(rect.origin(), (3, 7));

        assert_eq!(FixedRect::from_rect(Rect::new(1, 2, 3, 4)).y2, 4 << 16);
    }

    #[test]
    fn splits_packed_buffer() {
        let buf = vec![0u8; PixelFormat::YUV420.buffer_size(4, 4)];
        let planes = packed_planes(PixelFormat::YUV420, buf.as_slice(), 4, 4);

        let sizes: Vec<_> = planes.iter().map(|p| (p.buf.len(), p.stride)).collect();
        assert_eq!(sizes, [(16, 4), (4, 2), (4, 2)]);
    }

    #[test]
    fn short_buffer_does_not_panic() {
        let mut buf = vec![0u8; 20];
        let planes = packed_planes(PixelFormat::NV12, buf.as_mut_slice(), 4, 4);

        assert_eq!(planes[0].buf.len(), 16);
        assert_eq!(planes[1].buf.len(), 4);
        assert_eq!(planes[1].stride, 4);
    }
}
