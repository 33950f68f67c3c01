use crate::compose::{Surface, compose_row};
use crate::convert::convert_frame;
use crate::row::RowBuffer;
use crate::writeback::{WritebackJob, writeback_row};
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
use rayon::slice::ParallelSliceMut;

/// Same as [`convert_frame`] but composes bands of rows on the rayon thread pool
///
/// Rows are written back on the calling thread in top to bottom order, so rows sharing
/// subsampled chroma are never written concurrently.
#[inline(never)]
pub fn convert_frame_multi_thread(surface: &Surface<'_>, job: &mut WritebackJob<'_>) -> usize {
    let threads = num_cpus::get();
    let dst = job.frame().dst;
    let height = dst.height();

    if threads == 1 || height < 2 {
        return convert_frame(surface, job);
    }

    let width = dst.width();
    let rows_per_band = height.div_ceil(threads);

    let mut rows: Vec<(RowBuffer, usize)> =
        (0..height).map(|_| (RowBuffer::new(width), 0)).collect();

    rows.par_chunks_mut(rows_per_band)
        .enumerate()
        .for_each(|(band, rows)| {
            let first = band * rows_per_band;

            for (i, (row, composed)) in rows.iter_mut().enumerate() {
                *composed = compose_row(row, surface, dst.y1.wrapping_add((first + i) as i32));
            }
        });

    let mut written = 0;

    for (y, (row, composed)) in (dst.y1..dst.y2).zip(&rows) {
        if *composed != 0 {
            written += writeback_row(job, row, y);
        }
    }

    tracing::debug!(
        src = ?surface.frame().format,
        dst = ?job.frame().format,
        written,
        threads,
        "Converted frame"
    );

    written
}
