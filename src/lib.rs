pub mod controllers;
pub mod core;
pub mod presenters;

pub use controllers::menu::MenuController;
pub use presenters::file::gif::GifFileSink;
pub use presenters::file::ppm::PpmFilePresenter;
