use crate::core::data::complex::Complex;

/// Escape radius squared.
pub const ESCAPE_LIMIT: f64 = 4.0;

/// Counts iterations of `z <- z^2 + c`, starting from `z = c`, until
/// `|z|^2 > limit`. Returns `max_iterations` when the orbit never escapes.
///
/// The loop body performs two quadratic steps with an escape check after
/// each one; the result is identical to [`escape_time_single_step`].
#[inline]
#[must_use]
pub fn escape_time(a0: f64, b0: f64, max_iterations: u32, limit: f64) -> u32 {
    let mut a1 = a0;
    let mut b1 = b0;
    let mut iterations = 0u32;

    loop {
        iterations += 1;
        let a2 = (a1 * a1) - (b1 * b1) + a0;
        let b2 = (2.0 * a1 * b1) + b0;
        if (a2 * a2) + (b2 * b2) > limit {
            break;
        }

        iterations += 1;
        a1 = (a2 * a2) - (b2 * b2) + a0;
        b1 = (2.0 * a2 * b2) + b0;
        if (a1 * a1) + (b1 * b1) > limit {
            break;
        }

        if iterations >= max_iterations {
            break;
        }
    }

    // An odd cap can overshoot by one half-step.
    iterations.min(max_iterations)
}

/// Reference form of [`escape_time`] with one quadratic step per loop body.
#[must_use]
pub fn escape_time_single_step(c: Complex, max_iterations: u32, limit: f64) -> u32 {
    let mut z = c;

    for iteration in 1..=max_iterations {
        z = z * z + c;
        if z.magnitude_squared() > limit {
            return iteration;
        }
    }

    max_iterations
}
