pub mod camera_path;
pub mod export;
pub mod ports;
