pub mod actions;
pub mod animation;
pub mod data;
pub mod fractals;
pub mod keyframes;
pub mod palette;
pub mod util;
