pub mod render_frame;
pub mod subdivide;
