use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Raster of palette indices owned by the render call that fills it.
///
/// Indices start at zero, which doubles as the "never escaped" colour,
/// so a fresh buffer reads as all-interior. Accessors take raster
/// coordinates and assert that the pixel lies inside the raster; the
/// renderers validate their rectangles once at entry so the assertion
/// only fires on a caller-side contract violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexBuffer {
    raster: PixelRect,
    indices: Vec<u8>,
}

impl IndexBuffer {
    #[must_use]
    pub fn new(raster: PixelRect) -> Self {
        Self {
            raster,
            indices: vec![0; raster.size() as usize],
        }
    }

    #[must_use]
    pub fn raster(&self) -> PixelRect {
        self.raster
    }

    /// Row-major view of the whole raster.
    #[must_use]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    #[must_use]
    pub fn get(&self, pixel: Point) -> u8 {
        self.indices[self.offset(pixel)]
    }

    pub fn set(&mut self, pixel: Point, index: u8) {
        let offset = self.offset(pixel);
        self.indices[offset] = index;
    }

    fn offset(&self, pixel: Point) -> usize {
        assert!(
            self.raster.contains_point(pixel),
            "pixel ({}, {}) outside raster",
            pixel.x,
            pixel.y
        );

        let relative_x = (pixel.x - self.raster.top_left().x) as usize;
        let relative_y = (pixel.y - self.raster.top_left().y) as usize;
        relative_y * self.raster.width() as usize + relative_x
    }
}
