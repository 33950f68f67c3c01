use crate::pixel::Argb16;

/// Fixed capacity scanline of [`Argb16`] pixels, reused for every row of a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowBuffer {
    pixels: Vec<Argb16>,
}

impl RowBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            pixels: vec![Argb16::TRANSPARENT; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.pixels.len()
    }

    pub fn pixels(&self) -> &[Argb16] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Argb16] {
        &mut self.pixels
    }

    /// Reset every pixel to transparent black
    pub fn clear(&mut self) {
        self.pixels.fill(Argb16::TRANSPARENT);
    }
}
