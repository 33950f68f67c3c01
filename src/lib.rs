//! Per row pixel format conversion for display composition and writeback
//!
//! A source framebuffer is wrapped in a [`Surface`], each destination row is composed into a
//! [`RowBuffer`] of [`Argb16`] pixels with [`compose_row`] and handed to a [`WritebackJob`]
//! with [`writeback_row`]. [`convert_frame`] drives both for a whole frame.
//!
//! ```
//! use ezk_scanout::*;
//!
//! let src = [0x10u8, 0x20, 0x30, 0x40].repeat(4);
//! let planes = packed_planes(PixelFormat::ARGB8888, &src[..], 2, 2);
//! let surface = Surface::new(
//!     FrameInfo::new(PixelFormat::ARGB8888, planes, 2, 2),
//!     ColorParams::default(),
//! )?;
//!
//! let mut dst = vec![0u8; PixelFormat::NV12.buffer_size(2, 2)];
//! let planes = packed_planes(PixelFormat::NV12, &mut dst[..], 2, 2);
//! let mut job = WritebackJob::new(FrameInfo::new(PixelFormat::NV12, planes, 2, 2))?;
//!
//! assert_eq!(convert_frame(&surface, &mut job), 4);
//! # Ok::<(), FormatError>(())
//! ```

mod addressing;
mod color;
mod compose;
mod convert;
pub mod diagnostics;
mod fixed;
mod formats;
mod frame;
#[cfg(feature = "multi-thread")]
mod multi_thread;
mod pixel;
mod pixel_format;
mod plane_decs;
mod rotation;
mod row;
mod writeback;

pub use addressing::{plane_byte_offset, source_offset_for_row};
pub use color::{
    ColorEncoding, ColorParams, ColorRange, YuvMatrix, rgb_to_ycbcr, ycbcr_to_rgb, yuv_to_argb,
};
pub use compose::{Surface, compose_row};
pub use convert::convert_frame;
pub use fixed::Fixed;
pub use formats::{PixelReader, PixelWriter, lookup_reader, lookup_writer};
pub use frame::{AnySlice, FixedRect, FrameInfo, Plane, Rect, packed_planes};
#[cfg(feature = "multi-thread")]
pub use multi_thread::convert_frame_multi_thread;
pub use pixel::{Argb16, Yuv8};
pub use pixel_format::{FormatError, PixelFormat};
pub use plane_decs::{MAX_PLANES, PlaneDesc};
pub use rotation::{Rotation, RotationFlag};
pub use row::RowBuffer;
pub use writeback::{WritebackJob, writeback_row};
