use crate::compose::{Surface, compose_row};
use crate::row::RowBuffer;
use crate::writeback::{WritebackJob, writeback_row};

/// Convert every destination row of `job` covered by `surface`, top to bottom
///
/// Both frames share one destination coordinate space with pixel `i` of a row at column
/// `dst.x1 + i` of each frame. Columns the surface does not cover are written as transparent
/// black. Returns the number of pixels written.
pub fn convert_frame(surface: &Surface<'_>, job: &mut WritebackJob<'_>) -> usize {
    let dst = job.frame().dst;
    let mut row = RowBuffer::new(dst.width());
    let mut written = 0;

    for y in dst.y1..dst.y2 {
        row.clear();

        if compose_row(&mut row, surface, y) == 0 {
            continue;
        }

        written += writeback_row(job, &row, y);
    }

    tracing::debug!(
        src = ?surface.frame().format,
        dst = ?job.frame().format,
        written,
        "Converted frame"
    );

    written
}
