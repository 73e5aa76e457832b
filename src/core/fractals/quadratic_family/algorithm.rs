use crate::core::data::complex::Complex;

/// Effective coefficients of the recurrence
///
/// ```text
/// x' = a·(x² − y²) + b·x0 + d·sin(e·y)
/// y' = c·(2xy)     + b·y0 + d·cos(e·x)
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
}

/// Iterates from `z = seed` until `|z|² > escape_threshold` or the budget
/// runs out, returning the number of steps taken.
#[must_use]
pub fn escape_count(
    seed: Complex,
    max_iterations: u32,
    escape_threshold: f64,
    coefficients: Coefficients,
) -> u32 {
    let Coefficients { a, b, c, d, e } = coefficients;
    let mut z = seed;
    let mut iteration = 0;

    while z.magnitude_squared() <= escape_threshold && iteration < max_iterations {
        z = Complex {
            real: a * (z.real * z.real - z.imag * z.imag) + b * seed.real + d * (e * z.imag).sin(),
            imag: c * (2.0 * z.real * z.imag) + b * seed.imag + d * (e * z.real).cos(),
        };
        iteration += 1;
    }

    iteration
}
