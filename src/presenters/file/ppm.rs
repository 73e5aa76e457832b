use crate::adapters::pixel_format::rgba_to_rgb;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes frames as binary (`P6`) portable pixmaps.
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(filepath)?);
        let size = buffer.size();

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", size.width, size.height)?;
        writeln!(file, "255")?;
        file.write_all(&rgba_to_rgb(buffer.buffer()))?;
        file.flush()?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::canvas_size::CanvasSize;
    use crate::core::data::colour::Colour;

    #[test]
    fn test_present_writes_header_and_rgb_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.ppm");
        let mut buffer = PixelBuffer::new(CanvasSize::new(2, 1));
        buffer.set_pixel(0, 0, Colour::new(1, 2, 3));
        buffer.set_pixel(1, 0, Colour::new(4, 5, 6));

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let header = b"P6\n2 1\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(&bytes[header.len()..], &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_present_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("frame.ppm");
        let buffer = PixelBuffer::new(CanvasSize::new(1, 1));

        let result = PpmFilePresenter::new().present(&buffer, &path);

        assert!(result.is_err());
    }
}
