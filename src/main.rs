use fractal_animator::core::palette::PaletteRamp;
use fractal_animator::{MenuController, PpmFilePresenter};
use std::io;

// the more you want to zoom in, the deeper the palette should be; 7 is
// the ceiling the ramp supports
const PALETTE_DEPTH: u32 = 7;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let palette = PaletteRamp::new(PALETTE_DEPTH)?;
    let stdin = io::stdin();
    let mut controller = MenuController::new(
        stdin.lock(),
        io::stdout(),
        PpmFilePresenter::new(),
        palette,
    );

    controller.run()
}
