use crate::core::data::camera::CameraView;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Affine map from a raster pixel to its plane coordinate under
/// `camera`.
///
/// Adjacent pixels are `2 * extent / side` plane units apart, so pixel
/// (0, 0) lands on `center - extent` and the raster centre on `center`.
/// The map is total: pixels outside `raster` extrapolate along the same
/// grid.
#[must_use]
pub fn pixel_to_plane_coords(pixel: Point, raster: PixelRect, camera: CameraView) -> Complex {
    let scale_real = 2.0 * camera.extent.real / f64::from(raster.width());
    let scale_imag = 2.0 * camera.extent.imag / f64::from(raster.height());
    let relative_x = f64::from(pixel.x - raster.top_left().x);
    let relative_y = f64::from(pixel.y - raster.top_left().y);

    Complex {
        real: relative_x * scale_real - camera.extent.real + camera.center.real,
        imag: relative_y * scale_imag - camera.extent.imag + camera.center.imag,
    }
}
