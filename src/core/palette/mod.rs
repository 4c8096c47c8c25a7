pub mod ramp;

pub use ramp::{MAX_DEPTH, MIN_DEPTH, PaletteError, PaletteRamp};
