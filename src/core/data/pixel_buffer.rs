use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::colour::Colour;

pub const BYTES_PER_PIXEL: usize = 4;

fn canvas_size_to_buffer_size(size: CanvasSize) -> usize {
    size.pixel_count() * BYTES_PER_PIXEL
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA framebuffer, four bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    size: CanvasSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(size: CanvasSize) -> Self {
        Self {
            size,
            buffer: vec![0; canvas_size_to_buffer_size(size)],
        }
    }

    #[must_use]
    pub fn size(&self) -> CanvasSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let index = self.index_of(x, y)?;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.buffer[index..index + BYTES_PER_PIXEL]);

        Some(rgba)
    }

    /// Writes an opaque pixel; coordinates outside the canvas are ignored.
    #[cfg(test)]
    pub(crate) fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) {
        if let Some(index) = self.index_of(x, y) {
            write_opaque(&mut self.buffer[index..index + BYTES_PER_PIXEL], colour);
        }
    }

    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }

        let offset = y as usize * self.size.width as usize + x as usize;
        Some(offset * BYTES_PER_PIXEL)
    }
}

pub(crate) fn write_opaque(pixel: &mut [u8], colour: Colour) {
    pixel[0] = colour.r;
    pixel[1] = colour.g;
    pixel[2] = colour.b;
    pixel[3] = 255;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let size = CanvasSize::new(10, 10);
        let buffer = PixelBuffer::new(size);

        assert_eq!(buffer.size(), size);
        assert_eq!(buffer.buffer_size(), 400); // 10 * 10 * 4
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_new_with_empty_canvas_has_no_bytes() {
        let buffer = PixelBuffer::new(CanvasSize::new(0, 50));

        assert_eq!(buffer.buffer_size(), 0);
    }

    #[test]
    fn test_set_pixel_writes_opaque_rgba() {
        let mut buffer = PixelBuffer::new(CanvasSize::new(3, 3));

        buffer.set_pixel(1, 1, Colour::new(10, 20, 30));

        assert_eq!(&buffer.buffer()[16..20], &[10, 20, 30, 255]);
        assert_eq!(buffer.pixel(1, 1), Some([10, 20, 30, 255]));
        assert_eq!(buffer.pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_set_pixel_bottom_right_corner() {
        let mut buffer = PixelBuffer::new(CanvasSize::new(3, 2));

        buffer.set_pixel(2, 1, Colour::new(0, 0, 255));

        assert_eq!(&buffer.buffer()[20..24], &[0, 0, 255, 255]);
    }

    #[test]
    fn test_coordinates_outside_canvas() {
        let mut buffer = PixelBuffer::new(CanvasSize::new(3, 3));

        buffer.set_pixel(3, 0, Colour::new(1, 1, 1));
        buffer.set_pixel(0, 5, Colour::new(1, 1, 1));

        assert!(buffer.buffer().iter().all(|&b| b == 0));
        assert_eq!(buffer.pixel(3, 0), None);
        assert_eq!(buffer.pixel(3, 3), None);
    }
}
