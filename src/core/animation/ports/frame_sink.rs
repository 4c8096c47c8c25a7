use crate::core::data::index_buffer::IndexBuffer;
use std::error::Error;

/// Receives exported frames in emission order, each with the time it
/// should stay on screen.
pub trait FrameSink {
    type Failure: Error;

    fn push_frame(&mut self, frame: &IndexBuffer, duration_ms: u32) -> Result<(), Self::Failure>;
}
