use crate::core::data::camera::CameraView;
use crate::core::data::index_buffer::IndexBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::escape::escape;
use crate::core::util::pixel_to_plane_coords::pixel_to_plane_coords;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubdivideError {
    RectOutsideBuffer {
        top_left: Point,
        bottom_right: Point,
        raster: PixelRect,
    },
    MaxIterationsTooLarge {
        max_iterations: u32,
    },
}

impl fmt::Display for SubdivideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RectOutsideBuffer {
                top_left,
                bottom_right,
                raster,
            } => {
                write!(
                    f,
                    "rectangle ({}, {})..({}, {}) does not fit the {}x{} raster",
                    top_left.x,
                    top_left.y,
                    bottom_right.x,
                    bottom_right.y,
                    raster.width(),
                    raster.height()
                )
            }
            Self::MaxIterationsTooLarge { max_iterations } => {
                write!(
                    f,
                    "max iterations {} cannot be stored as a palette index (limit {})",
                    max_iterations,
                    u8::MAX
                )
            }
        }
    }
}

impl Error for SubdivideError {}

/// Evaluator-call accounting for one `subrender` run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct SubdivideReport {
    /// Pixels settled by calling the escape evaluator.
    pub evaluations: u64,
    /// Pixels settled by a uniform-boundary interior fill.
    pub filled: u64,
}

/// Boundary-tracing fill over the closed rectangle
/// `[top_left, bottom_right]` of `buffer`.
///
/// When a rectangle's entire border shares one colour the open interior
/// is filled with it and never evaluated; otherwise the longer side is
/// split at its midpoint and both halves are refined. The fill trusts
/// boundary uniformity, so escape-count structure that never reaches a
/// boundary sample is painted over (a whole-set view whose border ring
/// lies outside the ±2 band fills in one step). Animation export
/// therefore uses the brute-force sweep; this path serves the preview.
pub fn subrender(
    buffer: &mut IndexBuffer,
    camera: CameraView,
    max_iterations: u32,
    top_left: Point,
    bottom_right: Point,
) -> Result<SubdivideReport, SubdivideError> {
    let raster = buffer.raster();

    if !raster.contains_point(top_left)
        || !raster.contains_point(bottom_right)
        || top_left.x > bottom_right.x
        || top_left.y > bottom_right.y
    {
        return Err(SubdivideError::RectOutsideBuffer {
            top_left,
            bottom_right,
            raster,
        });
    }

    if max_iterations > u32::from(u8::MAX) {
        return Err(SubdivideError::MaxIterationsTooLarge { max_iterations });
    }

    let mut subdivider = Subdivider {
        buffer,
        raster,
        camera,
        max_iterations,
        report: SubdivideReport::default(),
    };

    // Seed the trailing edges; the descent's fresh leading edge covers
    // the rest of the border before the first uniformity scan.
    subdivider.evaluate_row(bottom_right.y, top_left.x, bottom_right.x);
    subdivider.evaluate_column(bottom_right.x, top_left.y, bottom_right.y);
    subdivider.descend(top_left, bottom_right, true);

    Ok(subdivider.report)
}

struct Subdivider<'a> {
    buffer: &'a mut IndexBuffer,
    raster: PixelRect,
    camera: CameraView,
    max_iterations: u32,
    report: SubdivideReport,
}

impl Subdivider<'_> {
    /// Invariant: every border pixel of `[top_left, bottom_right]` is
    /// settled before the uniformity scan reads it. A `fresh_edge` call
    /// settles its own leading (top/left) edges; the trailing edges are
    /// the caller's responsibility.
    fn descend(&mut self, top_left: Point, bottom_right: Point, fresh_edge: bool) {
        if fresh_edge {
            self.evaluate_row(top_left.y, top_left.x, bottom_right.x);
            self.evaluate_column(top_left.x, top_left.y, bottom_right.y);
        }

        if top_left == bottom_right {
            return;
        }

        if let Some(index) = self.uniform_border(top_left, bottom_right) {
            self.fill_interior(top_left, bottom_right, index);
            return;
        }

        let span_x = bottom_right.x - top_left.x;
        let span_y = bottom_right.y - top_left.y;

        // equal spans split the horizontal extent, keeping runs reproducible
        if span_x >= span_y {
            let split = top_left.x + (span_x + 1) / 2;
            self.evaluate_column(split - 1, top_left.y, bottom_right.y);
            self.descend(
                top_left,
                Point {
                    x: split - 1,
                    y: bottom_right.y,
                },
                false,
            );
            self.descend(
                Point {
                    x: split,
                    y: top_left.y,
                },
                bottom_right,
                true,
            );
        } else {
            let split = top_left.y + (span_y + 1) / 2;
            self.evaluate_row(split - 1, top_left.x, bottom_right.x);
            self.descend(
                top_left,
                Point {
                    x: bottom_right.x,
                    y: split - 1,
                },
                false,
            );
            self.descend(
                Point {
                    x: top_left.x,
                    y: split,
                },
                bottom_right,
                true,
            );
        }
    }

    /// Scans top, right, bottom, left for one shared colour, bailing on
    /// the first mismatch.
    fn uniform_border(&self, top_left: Point, bottom_right: Point) -> Option<u8> {
        let shared = self.buffer.get(top_left);

        for x in top_left.x..=bottom_right.x {
            if self.buffer.get(Point { x, y: top_left.y }) != shared {
                return None;
            }
        }
        for y in top_left.y..=bottom_right.y {
            if self.buffer.get(Point {
                x: bottom_right.x,
                y,
            }) != shared
            {
                return None;
            }
        }
        for x in top_left.x..=bottom_right.x {
            if self.buffer.get(Point {
                x,
                y: bottom_right.y,
            }) != shared
            {
                return None;
            }
        }
        for y in top_left.y..=bottom_right.y {
            if self.buffer.get(Point { x: top_left.x, y }) != shared {
                return None;
            }
        }

        Some(shared)
    }

    fn fill_interior(&mut self, top_left: Point, bottom_right: Point, index: u8) {
        for y in top_left.y + 1..bottom_right.y {
            for x in top_left.x + 1..bottom_right.x {
                self.buffer.set(Point { x, y }, index);
                self.report.filled += 1;
            }
        }
    }

    fn evaluate_row(&mut self, y: i32, from_x: i32, to_x: i32) {
        for x in from_x..=to_x {
            self.evaluate(Point { x, y });
        }
    }

    fn evaluate_column(&mut self, x: i32, from_y: i32, to_y: i32) {
        for y in from_y..=to_y {
            self.evaluate(Point { x, y });
        }
    }

    fn evaluate(&mut self, pixel: Point) {
        let point = pixel_to_plane_coords(pixel, self.raster, self.camera);
        self.buffer
            .set(pixel, escape(point, self.max_iterations) as u8);
        self.report.evaluations += 1;
    }
}
