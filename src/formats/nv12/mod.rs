//! Semi planar YUV: a luma plane followed by one plane of interleaved chroma pairs

mod read;
mod write;

pub(crate) use read::read_semi_planar;
pub(crate) use write::write_nv12;
