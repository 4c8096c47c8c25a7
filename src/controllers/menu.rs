use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::subdivide::subdivide::subrender;
use crate::core::animation::export::export_animation;
use crate::core::data::camera::CameraView;
use crate::core::data::complex::Complex;
use crate::core::data::index_buffer::IndexBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::keyframes::list::KeyframeList;
use crate::core::keyframes::panel::Panel;
use crate::core::palette::PaletteRamp;
use crate::presenters::file::gif::GifFileSink;
use std::error::Error;
use std::io::{BufRead, Write};

pub const PREVIEW_SIDE: i32 = 480;
pub const PREVIEW_PATH: &str = "preview.ppm";
const FRAME_RATE: u32 = 90;

/// Text-menu command surface: owns the session camera and keyframe
/// list, validates every input, and only then calls into the core.
///
/// Reader and writer are injected so scripted sessions drive the whole
/// controller in tests; end of input behaves like the quit command.
pub struct MenuController<R: BufRead, W: Write, P: FilePresenterPort> {
    input: R,
    output: W,
    presenter: P,
    camera: CameraView,
    keyframes: KeyframeList,
    palette: PaletteRamp,
    frame_rate: u32,
}

impl<R: BufRead, W: Write, P: FilePresenterPort> MenuController<R, W, P> {
    pub fn new(input: R, output: W, presenter: P, palette: PaletteRamp) -> Self {
        Self {
            input,
            output,
            presenter,
            camera: CameraView::default(),
            keyframes: KeyframeList::new(),
            palette,
            frame_rate: FRAME_RATE,
        }
    }

    #[must_use]
    pub fn camera(&self) -> CameraView {
        self.camera
    }

    #[must_use]
    pub fn keyframes(&self) -> &KeyframeList {
        &self.keyframes
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        writeln!(
            self.output,
            "A lightweight Mandelbrot explorer and gif exporter."
        )?;
        self.print_options()?;

        loop {
            let Some(line) = self.read_line()? else {
                break;
            };

            match line.as_str() {
                "-1" => {
                    writeln!(self.output, "Ending")?;
                    break;
                }
                "1" => self.show_camera()?,
                "2" => self.goto_coordinates()?,
                "3" => self.render_preview()?,
                "4" => self.list_panels()?,
                "5" => self.add_panel()?,
                "6" => self.delete_panel()?,
                "7" => self.save_gif()?,
                "8" => self.print_options()?,
                _ => writeln!(self.output, "Please enter a valid input")?,
            }
        }

        Ok(())
    }

    fn print_options(&mut self) -> Result<(), Box<dyn Error>> {
        writeln!(
            self.output,
            "\n======= OPTIONS =======\n\
             -1) Quit\n\
             1) View the current camera\n\
             2) Go to coordinates\n\
             3) Render a preview still\n\
             \n======= ANIMATION OPTIONS =======\n\
             4) List snapshots\n\
             5) Add the current camera as a snapshot\n\
             6) Delete a snapshot\n\
             7) Save a gif\n\
             8) Display these options"
        )?;
        Ok(())
    }

    fn show_camera(&mut self) -> Result<(), Box<dyn Error>> {
        writeln!(
            self.output,
            "The current view is centred on ({}, {}) with extent ({}, {})",
            self.camera.center.real,
            self.camera.center.imag,
            self.camera.extent.real,
            self.camera.extent.imag
        )?;
        Ok(())
    }

    fn goto_coordinates(&mut self) -> Result<(), Box<dyn Error>> {
        let Some(center_real) = self.prompt_parsed::<f64>("Please input the x coordinate of the centre")?
        else {
            return Ok(());
        };
        let Some(center_imag) = self.prompt_parsed::<f64>("Please input the y coordinate of the centre")?
        else {
            return Ok(());
        };
        let Some(extent_real) = self.prompt_parsed::<f64>("Please input the x extent of the view")? else {
            return Ok(());
        };
        let Some(extent_imag) = self.prompt_parsed::<f64>("Please input the y extent of the view")? else {
            return Ok(());
        };

        if extent_real <= 0.0 || extent_imag <= 0.0 {
            writeln!(self.output, "Invalid input, returning to main menu")?;
            return Ok(());
        }

        self.camera = CameraView {
            extent: Complex {
                real: extent_real,
                imag: extent_imag,
            },
            center: Complex {
                real: center_real,
                imag: center_imag,
            },
        };
        self.show_camera()?;
        Ok(())
    }

    fn render_preview(&mut self) -> Result<(), Box<dyn Error>> {
        let raster = PixelRect::new(
            Point { x: 0, y: 0 },
            Point {
                x: PREVIEW_SIDE - 1,
                y: PREVIEW_SIDE - 1,
            },
        )?;
        let mut buffer = IndexBuffer::new(raster);
        let report = subrender(
            &mut buffer,
            self.camera,
            self.palette.max_iterations(),
            raster.top_left(),
            raster.bottom_right(),
        )?;

        self.presenter
            .present(&buffer, &self.palette, PREVIEW_PATH)?;
        writeln!(
            self.output,
            "{} created ({} points evaluated, {} filled)",
            PREVIEW_PATH, report.evaluations, report.filled
        )?;
        Ok(())
    }

    fn list_panels(&mut self) -> Result<(), Box<dyn Error>> {
        if self.keyframes.is_empty() {
            writeln!(self.output, "There are no panels yet.")?;
            return Ok(());
        }

        for (position, panel) in self.keyframes.panels().iter().enumerate() {
            let camera = panel.camera();
            writeln!(self.output, "PANEL {}", position + 1)?;
            writeln!(
                self.output,
                "Centre: ({}, {})",
                camera.center.real, camera.center.imag
            )?;
            writeln!(
                self.output,
                "Extent: ({}, {})",
                camera.extent.real, camera.extent.imag
            )?;
            writeln!(self.output, "Duration: {} seconds\n", panel.hold_seconds())?;
        }
        Ok(())
    }

    fn add_panel(&mut self) -> Result<(), Box<dyn Error>> {
        let position = if self.keyframes.is_empty() {
            writeln!(
                self.output,
                "Adding your snapshot to position 1 since the animation is empty."
            )?;
            1
        } else {
            let message = format!(
                "Please input a position (1-{}) for your new snapshot",
                self.keyframes.len() + 1
            );
            let Some(position) = self.prompt_parsed::<usize>(&message)? else {
                return Ok(());
            };
            if position == 0 || position > self.keyframes.len() + 1 {
                writeln!(self.output, "Invalid input, returning to main menu")?;
                return Ok(());
            }
            position
        };

        let Some(hold_seconds) = self.prompt_parsed::<u32>(
            "Please input the duration in seconds of the flight from this snapshot to the next",
        )?
        else {
            return Ok(());
        };
        if hold_seconds == 0 {
            writeln!(self.output, "Invalid input, returning to main menu")?;
            return Ok(());
        }

        let panel = Panel::new(self.camera, hold_seconds)?;
        self.keyframes.insert(panel, position)?;
        writeln!(self.output, "Panel added")?;
        Ok(())
    }

    fn delete_panel(&mut self) -> Result<(), Box<dyn Error>> {
        if self.keyframes.is_empty() {
            writeln!(self.output, "There are currently no panels in your animation")?;
            return Ok(());
        }

        let message = format!(
            "Please input the position (1-{}) of the snapshot you want to delete",
            self.keyframes.len()
        );
        let Some(position) = self.prompt_parsed::<usize>(&message)? else {
            return Ok(());
        };
        if position == 0 || position > self.keyframes.len() {
            writeln!(self.output, "Invalid input, returning to main menu")?;
            return Ok(());
        }

        self.keyframes.remove(position)?;
        writeln!(self.output, "Panel deleted")?;
        Ok(())
    }

    fn save_gif(&mut self) -> Result<(), Box<dyn Error>> {
        if self.keyframes.is_empty() {
            writeln!(
                self.output,
                "No panels in the current animation. Returning to main menu"
            )?;
            return Ok(());
        }

        let Some(name) = self.prompt("Please input a file name for the gif")? else {
            return Ok(());
        };
        if name.is_empty() {
            writeln!(self.output, "Invalid input, returning to main menu")?;
            return Ok(());
        }

        let Some(side_length) =
            self.prompt_parsed::<u32>("Please input a side length in pixels. 480 works well")?
        else {
            return Ok(());
        };
        if side_length == 0 {
            writeln!(self.output, "Invalid input, returning to main menu")?;
            return Ok(());
        }

        writeln!(self.output, "Creating {}. This may take a while.", name)?;

        let mut sink = GifFileSink::create(&name, self.palette.clone())?;
        let report = export_animation(
            &self.keyframes,
            self.frame_rate,
            side_length as i32,
            &self.palette,
            &mut sink,
        )?;

        writeln!(self.output, "{} created ({} frames)", name, report.frames)?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, Box<dyn Error>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>, Box<dyn Error>> {
        writeln!(self.output, "{}", message)?;
        self.read_line()
    }

    /// Prompts and parses; a parse failure aborts the current command
    /// back to the main menu.
    fn prompt_parsed<T: std::str::FromStr>(
        &mut self,
        message: &str,
    ) -> Result<Option<T>, Box<dyn Error>> {
        let Some(line) = self.prompt(message)? else {
            return Ok(None);
        };
        match line.parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.output, "Invalid input, returning to main menu")?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        calls: RefCell<Vec<(PathBuf, usize)>>,
    }

    impl FilePresenterPort for RecordingPresenter {
        fn present(
            &self,
            frame: &IndexBuffer,
            _palette: &PaletteRamp,
            filepath: impl AsRef<std::path::Path>,
        ) -> io::Result<()> {
            self.calls
                .borrow_mut()
                .push((filepath.as_ref().to_path_buf(), frame.indices().len()));
            Ok(())
        }
    }

    fn run_script(script: &str) -> (String, CameraView, usize) {
        let mut output: Vec<u8> = Vec::new();
        let mut controller = MenuController::new(
            script.as_bytes(),
            &mut output,
            RecordingPresenter::default(),
            PaletteRamp::new(7).unwrap(),
        );

        controller.run().unwrap();
        let camera = controller.camera();
        let panels = controller.keyframes().len();
        drop(controller);

        (String::from_utf8(output).unwrap(), camera, panels)
    }

    #[test]
    fn test_quit_command_ends_the_session() {
        let (output, _, _) = run_script("-1\n");

        assert!(output.contains("======= OPTIONS ======="));
        assert!(output.contains("Ending"));
    }

    #[test]
    fn test_end_of_input_ends_the_session() {
        let (output, _, _) = run_script("");

        assert!(output.contains("======= OPTIONS ======="));
    }

    #[test]
    fn test_unknown_command_is_reported() {
        let (output, _, _) = run_script("99\n-1\n");

        assert!(output.contains("Please enter a valid input"));
    }

    #[test]
    fn test_view_prints_the_default_camera() {
        let (output, _, _) = run_script("1\n-1\n");

        assert!(output.contains("centred on (0, 0) with extent (2, 2)"));
    }

    #[test]
    fn test_goto_coordinates_moves_the_camera() {
        let (output, camera, _) = run_script("2\n0.5\n0.25\n1.5\n1.5\n-1\n");

        assert!(output.contains("centred on (0.5, 0.25) with extent (1.5, 1.5)"));
        assert_eq!(camera.center.real, 0.5);
        assert_eq!(camera.center.imag, 0.25);
        assert_eq!(camera.extent.real, 1.5);
    }

    #[test]
    fn test_goto_rejects_a_non_positive_extent() {
        let (output, camera, _) = run_script("2\n0.5\n0.25\n0\n1.5\n-1\n");

        assert!(output.contains("Invalid input, returning to main menu"));
        assert_eq!(camera, CameraView::default());
    }

    #[test]
    fn test_add_panel_to_empty_list_skips_the_position_prompt() {
        let (output, _, panels) = run_script("5\n3\n4\n-1\n");

        assert!(output.contains("position 1 since the animation is empty"));
        assert!(output.contains("Panel added"));
        assert!(output.contains("PANEL 1"));
        assert!(output.contains("Duration: 3 seconds"));
        assert_eq!(panels, 1);
    }

    #[test]
    fn test_add_panel_rejects_a_zero_duration() {
        let (output, _, panels) = run_script("5\n0\n-1\n");

        assert!(output.contains("Invalid input, returning to main menu"));
        assert_eq!(panels, 0);
    }

    #[test]
    fn test_add_panel_rejects_an_out_of_range_position() {
        let (output, _, panels) = run_script("5\n1\n5\n9\n-1\n");

        assert!(output.contains("Invalid input, returning to main menu"));
        assert_eq!(panels, 1);
    }

    #[test]
    fn test_delete_panel_removes_the_chosen_snapshot() {
        let script = "5\n1\n5\n2\n2\n6\n1\n4\n-1\n";
        let (output, _, panels) = run_script(script);

        assert!(output.contains("Panel deleted"));
        assert!(output.contains("Duration: 2 seconds"));
        assert_eq!(panels, 1);
    }

    #[test]
    fn test_delete_on_an_empty_list_is_reported() {
        let (output, _, _) = run_script("6\n-1\n");

        assert!(output.contains("There are currently no panels"));
    }

    #[test]
    fn test_list_panels_on_an_empty_list_is_reported() {
        let (output, _, _) = run_script("4\n-1\n");

        assert!(output.contains("There are no panels yet."));
    }

    #[test]
    fn test_preview_renders_through_the_presenter() {
        let mut output: Vec<u8> = Vec::new();
        let mut controller = MenuController::new(
            "3\n-1\n".as_bytes(),
            &mut output,
            RecordingPresenter::default(),
            PaletteRamp::new(7).unwrap(),
        );

        controller.run().unwrap();

        let calls = controller.presenter().calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, PathBuf::from(PREVIEW_PATH));
        assert_eq!(calls[0].1, (PREVIEW_SIDE * PREVIEW_SIDE) as usize);
        drop(calls);
        drop(controller);

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("preview.ppm created"));
    }

    #[test]
    fn test_save_gif_on_an_empty_list_is_reported() {
        let (output, _, _) = run_script("7\n-1\n");

        assert!(output.contains("No panels in the current animation"));
    }

    #[test]
    fn test_save_gif_writes_an_animated_gif() {
        let filepath = std::env::temp_dir().join("fractal_animator_menu_test.gif");
        let script = format!("5\n1\n7\n{}\n8\n-1\n", filepath.display());
        let (output, _, _) = run_script(&script);

        let written = std::fs::read(&filepath).unwrap();
        std::fs::remove_file(&filepath).unwrap();

        assert!(output.contains("This may take a while"));
        assert!(output.contains("created (1 frames)"));
        assert!(written.starts_with(b"GIF89a"));
    }
}
