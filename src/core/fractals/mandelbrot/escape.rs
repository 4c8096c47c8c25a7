use crate::core::data::complex::Complex;

const ESCAPE_BOUND: f64 = 2.0;

/// Escape-time evaluator for the Mandelbrot map `z <- z² + query`,
/// starting from `z = query`.
///
/// Returns the 1-based count of the check at which `z` left the ±2
/// band, or 0 when it stayed inside for all `max_iterations` checks.
/// The band test is the two-sided `|re| > 2 || |im| > 2`, not the
/// circular `|z|² > 4`; downstream colouring depends on the exact
/// counts this version of the test produces.
#[must_use]
pub fn escape(query: Complex, max_iterations: u32) -> u32 {
    let mut z = query;

    for iteration in 1..=max_iterations {
        if z.real.abs() > ESCAPE_BOUND || z.imag.abs() > ESCAPE_BOUND {
            return iteration;
        }
        z = z * z + query;
    }

    0
}
