use crate::core::data::camera::CameraView;
use crate::core::data::index_buffer::IndexBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::escape::escape;
use crate::core::util::pixel_to_plane_coords::pixel_to_plane_coords;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderFrameError {
    MaxIterationsTooLarge { max_iterations: u32 },
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxIterationsTooLarge { max_iterations } => {
                write!(
                    f,
                    "max iterations {} cannot be stored as a palette index (limit {})",
                    max_iterations,
                    u8::MAX
                )
            }
        }
    }
}

impl Error for RenderFrameError {}

/// Brute-force sweep: evaluates every pixel of `raster` independently.
///
/// Animation export always goes through this path, so exported frames
/// never inherit the subdivision fill's sub-pixel approximation; the
/// subdivision renderer must match this output pixel for pixel.
pub fn render_frame(
    raster: PixelRect,
    camera: CameraView,
    max_iterations: u32,
) -> Result<IndexBuffer, RenderFrameError> {
    if max_iterations > u32::from(u8::MAX) {
        return Err(RenderFrameError::MaxIterationsTooLarge { max_iterations });
    }

    let mut buffer = IndexBuffer::new(raster);

    for y in raster.top_left().y..=raster.bottom_right().y {
        for x in raster.top_left().x..=raster.bottom_right().x {
            let pixel = Point { x, y };
            let point = pixel_to_plane_coords(pixel, raster, camera);
            buffer.set(pixel, escape(point, max_iterations) as u8);
        }
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn square_raster(side: i32) -> PixelRect {
        PixelRect::new(
            Point { x: 0, y: 0 },
            Point {
                x: side - 1,
                y: side - 1,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_every_pixel_matches_a_direct_evaluation() {
        let raster = square_raster(16);
        let camera = CameraView::default();
        let buffer = render_frame(raster, camera, 127).unwrap();

        for y in 0..16 {
            for x in 0..16 {
                let pixel = Point { x, y };
                let point = pixel_to_plane_coords(pixel, raster, camera);
                assert_eq!(u32::from(buffer.get(pixel)), escape(point, 127));
            }
        }
    }

    #[test]
    fn test_fully_exterior_view_escapes_everywhere_on_the_first_check() {
        let camera = CameraView {
            extent: Complex {
                real: 1.0,
                imag: 1.0,
            },
            center: Complex {
                real: 10.0,
                imag: 10.0,
            },
        };

        let buffer = render_frame(square_raster(8), camera, 127).unwrap();

        assert!(buffer.indices().iter().all(|&index| index == 1));
    }

    #[test]
    fn test_corner_outside_the_band_escapes_immediately() {
        let camera = CameraView {
            extent: Complex {
                real: 3.0,
                imag: 3.0,
            },
            center: Complex {
                real: 0.0,
                imag: 0.0,
            },
        };
        let buffer = render_frame(square_raster(64), camera, 127).unwrap();

        // pixel (0, 0) sits on (-3, -3), well outside the ±2 band
        assert_eq!(buffer.get(Point { x: 0, y: 0 }), 1);
    }

    #[test]
    fn test_max_iterations_must_fit_a_palette_index() {
        let result = render_frame(square_raster(4), CameraView::default(), 256);

        assert_eq!(
            result.unwrap_err(),
            RenderFrameError::MaxIterationsTooLarge {
                max_iterations: 256
            }
        );
    }

    #[test]
    fn test_max_iterations_at_the_index_limit_is_accepted() {
        let result = render_frame(square_raster(4), CameraView::default(), 255);

        assert!(result.is_ok());
    }
}
