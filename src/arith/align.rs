// ============================================================================
// Division Alignment
// Bit-shift helpers bringing dividend and divisor into comparable magnitude
// ============================================================================

use super::bits;
use super::primitives::compare_le;

/// Halves the dividend until it is strictly smaller than the divisor.
///
/// Returns the number of bit positions moved as a negative count.
/// Both slices must have the same length and the divisor must be nonzero;
/// a zero divisor would loop forever and is not checked here.
pub fn align_dividend(dividend: &mut [u8], divisor: &[u8]) -> i64 {
    let mut shifted = 0;
    while compare_le(divisor, dividend) {
        bits::bit_shift_right(dividend, 1);
        shifted -= 1;
    }
    shifted
}

/// Halves the divisor until it is less than or equal to the dividend.
/// Returns the number of bit positions moved.
pub fn align_divisor(dividend: &[u8], divisor: &mut [u8]) -> i64 {
    let mut shifted = 0;
    while !compare_le(divisor, dividend) {
        bits::bit_shift_right(divisor, 1);
        shifted += 1;
    }
    shifted
}

/// Aligns the dividend, then the divisor, and returns the net bit-position
/// correction to apply before starting long division.
pub fn align(dividend: &mut [u8], divisor: &mut [u8]) -> i64 {
    let mut shifted = align_dividend(dividend, divisor);
    shifted += align_divisor(dividend, divisor);
    tracing::trace!(shifted, "operands aligned");
    shifted
}

/// Re-shrinks an over-large divisor back down to at most the current
/// remainder as long division progresses. Returns the shift count, which
/// advances the quotient bit pointer.
pub fn readjust(dividend: &[u8], divisor: &mut [u8]) -> i64 {
    let mut adjustment = 0;
    while !compare_le(divisor, dividend) {
        bits::bit_shift_right(divisor, 1);
        adjustment += 1;
    }
    adjustment
}
