use crate::core::data::index_buffer::IndexBuffer;
use crate::core::palette::PaletteRamp;
use std::io;
use std::path::Path;

/// Writes one rendered frame to a file, expanding palette indices to
/// real colours on the way out.
pub trait FilePresenterPort {
    fn present(
        &self,
        frame: &IndexBuffer,
        palette: &PaletteRamp,
        filepath: impl AsRef<Path>,
    ) -> io::Result<()>;
}
