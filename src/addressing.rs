//! Byte addressing of plane samples and the per row walk through a source

use crate::frame::FrameInfo;
use crate::plane_decs::{MAX_PLANES, PlaneDesc};
use crate::rotation::{Orientation, QuarterTurn};

/// Byte offset of the sample covering pixel (`x`, `y`) in `plane` of `frame`
///
/// `None` if the format has no such plane. Overflowing arithmetic saturates, the resulting
/// offset lies outside any mapped plane.
pub fn plane_byte_offset<S>(
    frame: &FrameInfo<S>,
    plane: usize,
    x: usize,
    y: usize,
) -> Option<usize> {
    let desc = frame.format.plane_desc().get(plane)?;
    let offset = frame.planes.get(plane).map_or(usize::MAX, |p| {
        p.offset
            .saturating_add((y / desc.vsub).saturating_mul(p.stride))
            .saturating_add((x / desc.hsub).saturating_mul(desc.bytes_per_pixel))
    });

    Some(offset)
}

/// Byte offset in `plane` of the first source sample feeding destination row `y`
///
/// Maps the row back into source space, `y_src = y - dst.y1 + (src.y1 >> 16)` and
/// `x_src = src.x1 >> 16`. Only meaningful for unrotated surfaces.
pub fn source_offset_for_row<S>(frame: &FrameInfo<S>, y: i32, plane: usize) -> Option<usize> {
    let (x, y) = source_origin_for_row(frame, y);

    match (coord(x), coord(y)) {
        (Some(x), Some(y)) => plane_byte_offset(frame, plane, x, y),
        _ => frame.format.plane_desc().get(plane).map(|_| usize::MAX),
    }
}

fn source_origin_for_row<S>(frame: &FrameInfo<S>, y: i32) -> (i64, i64) {
    let (sx, sy) = frame.src.origin();

    (
        i64::from(sx),
        i64::from(y) - i64::from(frame.dst.y1) + i64::from(sy),
    )
}

fn coord(v: i64) -> Option<usize> {
    usize::try_from(v).ok()
}

/// Read position of one plane, advancing by one sample every `every` columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PlaneCursor {
    pub(crate) offset: usize,
    step: usize,
    every: usize,
    phase: usize,
}

impl PlaneCursor {
    fn new(offset: usize, desc: &PlaneDesc, x: usize) -> Self {
        Self {
            offset,
            step: desc.bytes_per_pixel,
            every: desc.hsub,
            phase: x % desc.hsub,
        }
    }

    /// Cursor that can never hit a mapped byte
    fn invalid(desc: &PlaneDesc) -> Self {
        Self::new(usize::MAX, desc, 0)
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.phase += 1;

        if self.phase >= self.every {
            self.phase = 0;
            self.offset = self.offset.saturating_add(self.step);
        }
    }
}

/// Cursors for every plane of `frame`, positioned at pixel (`x`, `y`)
///
/// Negative coordinates produce cursors outside of every plane.
pub(crate) fn cursors_at<S>(frame: &FrameInfo<S>, x: i64, y: i64) -> [PlaneCursor; MAX_PLANES] {
    let descs = frame.format.plane_desc();
    let mut cursors = [PlaneCursor::invalid(&descs[0]); MAX_PLANES];

    for (i, (desc, cursor)) in descs.iter().zip(cursors.iter_mut()).enumerate() {
        *cursor = match (coord(x), coord(y)) {
            (Some(x), Some(y)) => {
                let offset = plane_byte_offset(frame, i, x, y).unwrap_or(usize::MAX);
                PlaneCursor::new(offset, desc, x)
            }
            _ => PlaneCursor::invalid(desc),
        };
    }

    cursors
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowWalk {
    /// Start at (`x`, `y`) and advance the cursors once per column
    Linear { x: i64, y: i64 },

    /// Recompute the cursors for every column, column `i` reads source pixel (`x`, `y0 + i`)
    PerColumn { x: i64, y0: i64 },
}

/// How to fill one destination row from a source frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RowPlan {
    pub(crate) walk: RowWalk,

    /// Number of pixels to compose
    pub(crate) width: usize,

    /// Store read `i` at `width - 1 - i`
    pub(crate) mirror: bool,
}

impl RowPlan {
    #[inline]
    pub(crate) fn store_index(&self, i: usize) -> usize {
        if self.mirror { self.width - 1 - i } else { i }
    }
}

/// Plan the composition of destination row `y` into a row of `capacity` pixels
///
/// `None` if the row lies outside the destination rectangle.
pub(crate) fn plan_row<S>(frame: &FrameInfo<S>, y: i32, capacity: usize) -> Option<RowPlan> {
    if !frame.dst.contains_row(y) {
        return None;
    }

    let height = frame.dst.height() as i64;
    let orientation = Orientation::simplify(frame.rotation);

    let row = i64::from(y) - i64::from(frame.dst.y1);
    let row = if orientation.reflect_y { height - 1 - row } else { row };

    let (sx, sy) = frame.src.origin();
    let (sx, sy) = (i64::from(sx), i64::from(sy));

    let walk = match orientation.turn {
        QuarterTurn::None => RowWalk::Linear { x: sx, y: sy + row },
        QuarterTurn::Rotate90 => RowWalk::PerColumn {
            x: sx + height - 1 - row,
            y0: sy,
        },
        QuarterTurn::Rotate270 => RowWalk::PerColumn { x: sx + row, y0: sy },
    };

    Some(RowPlan {
        walk,
        width: capacity.min(frame.dst.width()),
        mirror: orientation.mirrors_row(),
    })
}
