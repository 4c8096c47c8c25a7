use crate::core::data::camera::CameraView;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanelError {
    InvalidDuration { hold_seconds: u32 },
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDuration { hold_seconds } => {
                write!(f, "panel duration must be positive, got {}", hold_seconds)
            }
        }
    }
}

impl Error for PanelError {}

/// One animation keyframe: a captured camera plus the number of seconds
/// the flight from it to the next keyframe takes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Panel {
    camera: CameraView,
    hold_seconds: u32,
}

impl Panel {
    /// Rejects a zero duration; negative ones cannot be expressed.
    pub fn new(camera: CameraView, hold_seconds: u32) -> Result<Self, PanelError> {
        if hold_seconds == 0 {
            return Err(PanelError::InvalidDuration { hold_seconds });
        }

        Ok(Self {
            camera,
            hold_seconds,
        })
    }

    #[must_use]
    pub fn camera(&self) -> CameraView {
        self.camera
    }

    #[must_use]
    pub fn hold_seconds(&self) -> u32 {
        self.hold_seconds
    }
}
