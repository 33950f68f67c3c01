//! Fully planar YUV: separate luma, Cb and Cr planes

mod read;

pub(crate) use read::read_planar;
