use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::index_buffer::IndexBuffer;
use crate::core::palette::PaletteRamp;
use std::io::{self, Write};
use std::path::Path;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(
        &self,
        frame: &IndexBuffer,
        palette: &PaletteRamp,
        filepath: impl AsRef<Path>,
    ) -> io::Result<()> {
        let mut file = std::fs::File::create(filepath)?;
        let width = frame.raster().width();
        let height = frame.raster().height();

        let mut bytes = Vec::with_capacity(frame.indices().len() * 3);
        for &index in frame.indices() {
            let colour = palette.colour(index).ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("palette index {} out of range", index),
                )
            })?;
            bytes.extend_from_slice(&[colour.r, colour.g, colour.b]);
        }

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", width, height)?;
        writeln!(file, "255")?;
        file.write_all(&bytes)?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
