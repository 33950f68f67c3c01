use crate::FormatError;
use crate::addressing::{PlaneCursor, cursors_at};
use crate::diagnostics::{self, Diagnostic, Diagnostics};
use crate::formats::{DstPixels, PixelWriter};
use crate::frame::FrameInfo;
use crate::pixel::Argb16;
use crate::plane_decs::MAX_PLANES;
use crate::row::RowBuffer;

/// A destination framebuffer prepared to receive composed rows
pub struct WritebackJob<'a> {
    frame: FrameInfo<&'a mut [u8]>,
    writer: PixelWriter,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> WritebackJob<'a> {
    /// Select the writer for the frame's format
    ///
    /// Fails with [`FormatError::Unwritable`] if the format has no writer.
    pub fn new(frame: FrameInfo<&'a mut [u8]>) -> Result<Self, FormatError> {
        let writer = frame
            .format
            .writer()
            .ok_or(FormatError::Unwritable(frame.format))?;

        tracing::debug!(format = ?frame.format, dst = ?frame.dst, "Prepared writeback job");

        Ok(Self {
            frame,
            writer,
            diagnostics: diagnostics::global(),
        })
    }

    pub fn with_diagnostics(mut self, diagnostics: &'a dyn Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn frame(&self) -> &FrameInfo<&'a mut [u8]> {
        &self.frame
    }

    pub fn into_frame(self) -> FrameInfo<&'a mut [u8]> {
        self.frame
    }

    fn write(&mut self, cursors: &[PlaneCursor; MAX_PLANES], px: &Argb16) {
        let descs = self.frame.format.plane_desc();

        if self.frame.planes.len() < descs.len() {
            self.diagnostics.report(Diagnostic::DestinationOutOfBounds {
                plane: self.frame.planes.len(),
            });
            return;
        }

        let mut dst: DstPixels<'_> = Default::default();

        for (plane, ((p, desc), cursor)) in self
            .frame
            .planes
            .iter_mut()
            .zip(descs)
            .zip(cursors)
            .enumerate()
        {
            let bytes = match cursor.offset.checked_add(desc.bytes_per_pixel) {
                Some(end) => p.buf.get_mut(cursor.offset..end),
                None => None,
            };

            match bytes {
                Some(bytes) => dst[plane] = bytes,
                None => {
                    self.diagnostics
                        .report(Diagnostic::DestinationOutOfBounds { plane });
                    return;
                }
            }
        }

        self.writer.write(&mut dst, px);
    }
}

/// Write `row` to destination row `y` of the job
///
/// Pixel `i` of the row lands at column `dst.x1 + i`. Returns the number of pixels handed to
/// the writer, `min(row.capacity(), dst.width())`, or zero if `y` is outside the destination.
pub fn writeback_row(job: &mut WritebackJob<'_>, row: &RowBuffer, y: i32) -> usize {
    let dst = job.frame.dst;

    if !dst.contains_row(y) {
        return 0;
    }

    let width = row.capacity().min(dst.width());
    let mut cursors = cursors_at(&job.frame, i64::from(dst.x1), i64::from(y));

    for px in &row.pixels()[..width] {
        job.write(&cursors, px);
        cursors.iter_mut().for_each(PlaneCursor::advance);
    }

    width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PixelFormat;
    use crate::diagnostics::{DiagnosticKind, LogOnce};
    use crate::frame::{Plane, Rect, packed_planes};

    fn row_of(pixels: &[Argb16]) -> RowBuffer {
        let mut row = RowBuffer::new(pixels.len());
        row.pixels_mut().copy_from_slice(pixels);
        row
    }

    #[test]
    fn rejects_read_only_formats() {
        let frame = FrameInfo::new(PixelFormat::YUV420, vec![], 0, 0);

        assert!(matches!(
            WritebackJob::new(frame),
            Err(FormatError::Unwritable(PixelFormat::YUV420))
        ));
    }

    #[test]
    fn writes_inside_destination_rect() {
        let mut buf = vec![0u8; 4 * 4 * 2];
        let planes = vec![Plane::new(&mut buf[..], 0, 16)];
        let frame =
            FrameInfo::new(PixelFormat::ARGB8888, planes, 4, 2).with_dst(Rect::new(1, 1, 3, 2));
        let mut job = WritebackJob::new(frame).unwrap();

        let row = row_of(&[Argb16::from_argb8(1, 2, 3, 4); 4]);

        assert_eq!(writeback_row(&mut job, &row, 0), 0);
        assert_eq!(writeback_row(&mut job, &row, 1), 2);
        drop(job);

        let mut expected = vec![0u8; 32];
        expected[20..28].copy_from_slice(&[4, 3, 2, 1, 4, 3, 2, 1]);
        assert_eq!(buf, expected);
    }

    #[test]
    fn nv12_chroma_last_write_wins() {
        let mut buf = vec![0u8; PixelFormat::NV12.buffer_size(2, 2)];
        let planes = packed_planes(PixelFormat::NV12, buf.as_mut_slice(), 2, 2);
        let mut job = WritebackJob::new(FrameInfo::new(PixelFormat::NV12, planes, 2, 2)).unwrap();

        let white = Argb16::new(0xffff, 0xffff, 0xffff, 0xffff);
        let red = Argb16::new(0xffff, 0xffff, 0, 0);

        writeback_row(&mut job, &row_of(&[white, red]), 0);
        drop(job);

        // Luma for both pixels, one chroma pair taken from red
        assert_eq!(buf, [235, 82, 0, 0, 90, 240]);
    }

    #[test]
    fn short_destination_is_reported() {
        let mut buf = vec![0u8; 6];
        let frame = FrameInfo::new(PixelFormat::RGB565, vec![Plane::new(&mut buf[..], 0, 8)], 4, 1);

        let sink = LogOnce::new();
        let mut job = WritebackJob::new(frame).unwrap().with_diagnostics(&sink);

        let row = row_of(&[Argb16::new(0xffff, 0xffff, 0xffff, 0xffff); 4]);
        assert_eq!(writeback_row(&mut job, &row, 0), 4);
        drop(job);

        assert_eq!(buf, [0xff; 6]);
        assert!(sink.has_reported(DiagnosticKind::DestinationOutOfBounds));
    }

    #[test]
    fn missing_chroma_plane_is_reported() {
        let mut luma = vec![0u8; 4];
        let frame = FrameInfo::new(PixelFormat::NV12, vec![Plane::new(&mut luma[..], 0, 2)], 2, 2);

        let sink = LogOnce::new();
        let mut job = WritebackJob::new(frame).unwrap().with_diagnostics(&sink);

        writeback_row(&mut job, &RowBuffer::new(2), 0);
        drop(job);

        assert_eq!(luma, [0; 4]);
        assert!(sink.has_reported(DiagnosticKind::DestinationOutOfBounds));
    }
}
