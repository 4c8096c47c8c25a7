use crate::core::actions::render_frame::render_frame::{RenderFrameError, render_frame};
use crate::core::animation::camera_path::{CameraPath, CameraPathError};
use crate::core::animation::ports::frame_sink::FrameSink;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use crate::core::keyframes::list::KeyframeList;
use crate::core::palette::PaletteRamp;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ExportError {
    EmptyKeyframeList,
    ZeroFrameRate,
    InvalidSideLength { side_length: i32 },
    Raster(PixelRectError),
    Render(RenderFrameError),
    Sink(Box<dyn Error>),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKeyframeList => {
                write!(f, "cannot export an empty keyframe list")
            }
            Self::ZeroFrameRate => {
                write!(f, "frame rate must be positive")
            }
            Self::InvalidSideLength { side_length } => {
                write!(f, "frame side length must be positive, got {}", side_length)
            }
            Self::Raster(err) => write!(f, "raster error: {}", err),
            Self::Render(err) => write!(f, "render error: {}", err),
            Self::Sink(err) => write!(f, "frame sink error: {}", err),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyKeyframeList | Self::ZeroFrameRate | Self::InvalidSideLength { .. } => None,
            Self::Raster(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::Sink(err) => Some(err.as_ref()),
        }
    }
}

impl From<CameraPathError> for ExportError {
    fn from(err: CameraPathError) -> Self {
        match err {
            CameraPathError::EmptyKeyframeList => Self::EmptyKeyframeList,
            CameraPathError::ZeroFrameRate => Self::ZeroFrameRate,
        }
    }
}

impl From<PixelRectError> for ExportError {
    fn from(err: PixelRectError) -> Self {
        Self::Raster(err)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ExportReport {
    pub frames: usize,
    pub frame_duration_ms: u32,
}

/// Walks the keyframe list and pushes one rendered frame per camera
/// state to `sink`, in emission order.
///
/// Every frame comes from the exhaustive per-pixel sweep, never the
/// subdivision renderer, so exported stills carry no fill
/// approximation. Errors are reported before the first sink call
/// whenever the list or parameters are unusable, leaving the sink
/// untouched.
pub fn export_animation<S: FrameSink>(
    list: &KeyframeList,
    frame_rate: u32,
    side_length: i32,
    palette: &PaletteRamp,
    sink: &mut S,
) -> Result<ExportReport, ExportError>
where
    S::Failure: 'static,
{
    if side_length < 1 {
        return Err(ExportError::InvalidSideLength { side_length });
    }

    let path = CameraPath::new(list, frame_rate)?;
    let raster = PixelRect::new(
        Point { x: 0, y: 0 },
        Point {
            x: side_length - 1,
            y: side_length - 1,
        },
    )?;
    let frame_duration_ms = path.frame_duration_ms();
    let mut frames = 0;

    for camera in path {
        let frame =
            render_frame(raster, camera, palette.max_iterations()).map_err(ExportError::Render)?;
        sink.push_frame(&frame, frame_duration_ms)
            .map_err(|err| ExportError::Sink(Box::new(err)))?;
        frames += 1;
    }

    Ok(ExportReport {
        frames,
        frame_duration_ms,
    })
}
