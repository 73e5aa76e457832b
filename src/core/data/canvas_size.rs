/// Integer pixel dimensions of a drawing surface.
///
/// A zero-area size is representable: the rasterizer treats it as a no-op.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
