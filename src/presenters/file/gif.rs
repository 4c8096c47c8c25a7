use crate::core::animation::ports::frame_sink::FrameSink;
use crate::core::data::index_buffer::IndexBuffer;
use crate::core::palette::PaletteRamp;
use image::codecs::gif::{GifEncoder, Repeat};
use image::error::{ParameterError, ParameterErrorKind};
use image::{Delay, Frame, ImageError, ImageResult, Rgba, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Animated-GIF frame sink: expands palette indices to RGBA and hands
/// each frame to the gif codec together with its display duration.
pub struct GifFileSink<W: Write> {
    encoder: GifEncoder<W>,
    palette: PaletteRamp,
}

impl GifFileSink<BufWriter<File>> {
    /// Creates the output file and an endlessly looping encoder over it.
    pub fn create(filepath: impl AsRef<Path>, palette: PaletteRamp) -> ImageResult<Self> {
        let file = File::create(filepath).map_err(ImageError::IoError)?;
        Self::new(BufWriter::new(file), palette)
    }
}

impl<W: Write> GifFileSink<W> {
    pub fn new(writer: W, palette: PaletteRamp) -> ImageResult<Self> {
        let mut encoder = GifEncoder::new(writer);
        encoder.set_repeat(Repeat::Infinite)?;

        Ok(Self { encoder, palette })
    }
}

impl<W: Write> FrameSink for GifFileSink<W> {
    type Failure = ImageError;

    fn push_frame(&mut self, frame: &IndexBuffer, duration_ms: u32) -> Result<(), ImageError> {
        let width = frame.raster().width();
        let height = frame.raster().height();
        let mut rgba = RgbaImage::new(width, height);

        for (pixel, &index) in rgba.pixels_mut().zip(frame.indices()) {
            let colour = self.palette.colour(index).ok_or_else(|| {
                ImageError::Parameter(ParameterError::from_kind(ParameterErrorKind::Generic(
                    format!("palette index {} out of range", index),
                )))
            })?;
            *pixel = Rgba([colour.r, colour.g, colour.b, 255]);
        }

        let delay = Delay::from_numer_denom_ms(duration_ms, 1);
        self.encoder.encode_frame(Frame::from_parts(rgba, 0, 0, delay))
    }
}
