// ============================================================================
// Convergent Series
// Iterative computations built on the RealNumber interface
// ============================================================================
//
// Consumes only the public fixed-point surface: construction from text, the
// four arithmetic operators, comparisons and rendering.

use crate::errors::NumericResult;
use crate::real::RealNumber;

/// Square root by Newton (Babylonian) iteration: `x <- (x + num/x) / 2`,
/// run `iterations` times starting from `guess`.
///
/// Convergence is quadratic once the guess is in the right ballpark; ten
/// iterations from a one-digit-accurate guess are ample for the default
/// precision.
///
/// # Errors
/// Propagates division failures, e.g. a zero `guess`.
pub fn babylonian_sqrt(
    num: &RealNumber,
    guess: &RealNumber,
    iterations: usize,
) -> NumericResult<RealNumber> {
    let two = RealNumber::parse("2.0", num.config())?;
    let mut result = guess.clone();
    for iteration in 0..iterations {
        result = (&result + &num.checked_div(&result)?).checked_div(&two)?;
        tracing::debug!(iteration, "sqrt iteration complete");
    }
    Ok(result)
}

/// Approximates pi with the Gauss-Legendre algorithm.
///
/// `sqrt_two` must hold a precomputed square root of two at the working
/// precision (see [`babylonian_sqrt`]); each iteration's inner square root
/// is seeded with the running arithmetic mean. Four iterations with ten
/// inner square-root iterations give about 45 accurate decimal digits; six
/// iterations exceed 100.
pub fn gauss_legendre_pi(
    pi_iterations: usize,
    sqrt_iterations: usize,
    sqrt_two: &RealNumber,
) -> NumericResult<RealNumber> {
    let config = sqrt_two.config();
    let one_half = RealNumber::parse("0.5", config)?;
    let two = RealNumber::parse("2.0", config)?;

    let mut a = RealNumber::parse("1.0", config)?;
    let mut b = a.checked_div(sqrt_two)?;
    let mut t = RealNumber::parse("0.25", config)?;
    let mut p = RealNumber::parse("1.0", config)?;

    for iteration in 0..pi_iterations {
        let a_next = &(&a + &b) * &one_half;
        let b_next = babylonian_sqrt(&(&a * &b), &a_next, sqrt_iterations)?;
        let a_diff = &a - &a_next;
        let t_next = &t - &(&(&p * &a_diff) * &a_diff);
        let p_next = &two * &p;
        a = a_next;
        b = b_next;
        t = t_next;
        p = p_next;
        tracing::debug!(iteration, "pi iteration complete");
    }
    let sum = &a + &b;
    let denominator = &RealNumber::parse("4.0", config)? * &t;
    (&sum * &sum).checked_div(&denominator)
}
