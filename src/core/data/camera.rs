use crate::core::data::complex::Complex;

/// Visible region of the plane: `extent` holds the half-width and
/// half-height, `center` is the plane point under the raster's
/// geometric centre.
///
/// Rendering assumes `extent.real / extent.imag` matches the raster's
/// aspect ratio; nothing enforces it, a mismatched camera simply
/// stretches the image.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraView {
    pub extent: Complex,
    pub center: Complex,
}

impl Default for CameraView {
    /// The whole set with margin. The border ring of this view still
    /// crosses the ±2 band, which the subdivision preview relies on.
    fn default() -> Self {
        Self {
            extent: Complex {
                real: 2.0,
                imag: 2.0,
            },
            center: Complex {
                real: 0.0,
                imag: 0.0,
            },
        }
    }
}
