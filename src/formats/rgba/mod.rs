//! Packed RGB formats with 8 or 16 bits per channel
//!
//! Channels are stored little endian in B, G, R, A/X order.

mod read;
mod write;

pub(crate) use read::{read_16161616, read_8888};
pub(crate) use write::{write_16161616, write_8888};

#[inline(always)]
fn load_u16(bytes: &[u8], channel: usize) -> u16 {
    u16::from_le_bytes([bytes[channel * 2], bytes[channel * 2 + 1]])
}

#[inline(always)]
fn store_u16(bytes: &mut [u8], channel: usize, v: u16) {
    bytes[channel * 2..channel * 2 + 2].copy_from_slice(&v.to_le_bytes());
}
