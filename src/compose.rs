use crate::FormatError;
use crate::addressing::{PlaneCursor, RowWalk, cursors_at, plan_row};
use crate::color::ColorParams;
use crate::diagnostics::{self, Diagnostic, Diagnostics};
use crate::formats::{PixelReader, SrcPixels};
use crate::frame::FrameInfo;
use crate::pixel::Argb16;
use crate::plane_decs::MAX_PLANES;
use crate::row::RowBuffer;

/// A source framebuffer prepared for row composition
pub struct Surface<'a> {
    frame: FrameInfo<&'a [u8]>,
    reader: PixelReader,
    color: ColorParams,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> Surface<'a> {
    /// Select the reader for the frame's format
    ///
    /// Fails with [`FormatError::Unreadable`] if the format has no reader.
    pub fn new(frame: FrameInfo<&'a [u8]>, color: ColorParams) -> Result<Self, FormatError> {
        let reader = frame
            .format
            .reader()
            .ok_or(FormatError::Unreadable(frame.format))?;

        tracing::debug!(
            format = ?frame.format,
            ?color,
            dst = ?frame.dst,
            rotation = ?frame.rotation,
            "Prepared surface"
        );

        Ok(Self {
            frame,
            reader,
            color,
            diagnostics: diagnostics::global(),
        })
    }

    /// Report conditions hit while composing to `diagnostics` instead of the global sink
    pub fn with_diagnostics(mut self, diagnostics: &'a dyn Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn frame(&self) -> &FrameInfo<&'a [u8]> {
        &self.frame
    }

    pub fn color(&self) -> ColorParams {
        self.color
    }

    /// Slices of every plane at the cursors, `None` if any of them is not mapped
    fn gather(&self, cursors: &[PlaneCursor; MAX_PLANES]) -> Option<SrcPixels<'a>> {
        let mut src: SrcPixels<'a> = [&[]; MAX_PLANES];

        for (plane, (desc, cursor)) in self
            .frame
            .format
            .plane_desc()
            .iter()
            .zip(cursors)
            .enumerate()
        {
            let bytes = self.frame.planes.get(plane).and_then(|p| {
                let buf: &'a [u8] = p.buf;
                let end = cursor.offset.checked_add(desc.bytes_per_pixel)?;
                buf.get(cursor.offset..end)
            });

            match bytes {
                Some(bytes) => src[plane] = bytes,
                None => {
                    self.diagnostics
                        .report(Diagnostic::SourceOutOfBounds { plane });
                    return None;
                }
            }
        }

        Some(src)
    }

    #[inline]
    fn read(&self, cursors: &[PlaneCursor; MAX_PLANES]) -> Argb16 {
        match self.gather(cursors) {
            Some(src) => self.reader.read(&src, self.color, self.diagnostics),
            None => Argb16::TRANSPARENT,
        }
    }
}

/// Compose destination row `y` of `surface` into `row`
///
/// Returns the number of pixels stored, `min(row.capacity(), dst.width())`, or zero if the
/// surface does not cover row `y`. Pixels that can't be read are stored as transparent black.
pub fn compose_row(row: &mut RowBuffer, surface: &Surface<'_>, y: i32) -> usize {
    let Some(plan) = plan_row(&surface.frame, y, row.capacity()) else {
        return 0;
    };

    let pixels = row.pixels_mut();

    match plan.walk {
        RowWalk::Linear { x, y } => {
            let mut cursors = cursors_at(&surface.frame, x, y);

            for i in 0..plan.width {
                pixels[plan.store_index(i)] = surface.read(&cursors);
                cursors.iter_mut().for_each(PlaneCursor::advance);
            }
        }
        RowWalk::PerColumn { x, y0 } => {
            for i in 0..plan.width {
                let cursors = cursors_at(&surface.frame, x, y0 + i as i64);
                pixels[plan.store_index(i)] = surface.read(&cursors);
            }
        }
    }

    plan.width
}
