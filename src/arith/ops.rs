// ============================================================================
// Arithmetic Operations
// Addition, subtraction, schoolbook multiplication and restoring division
// over big-endian base-256 digit arrays
// ============================================================================

use smallvec::{smallvec, SmallVec};

use super::align::{align, readjust};
use super::bits::set_bit;
use super::primitives::{clear, is_zero, widen};
use super::{RADIX, RADIX_MINUS_ONE};
use crate::errors::{NumericError, NumericResult};

/// Operand length above which a divide-and-conquer multiplication would be
/// preferred over the schoolbook path.
pub const KARATSUBA_THRESHOLD: usize = 4;

/// Working storage for borrow copies and division scratch buffers; stays on
/// the stack for the widths this crate is designed around.
type Scratch = SmallVec<[u8; 128]>;

/// Adds two equal-length arrays digit-wise into `result`, which must have
/// the same length.
///
/// The final carry is discarded: the result is the sum modulo
/// 256^len. Callers that cannot tolerate wraparound must size their
/// operands so the sum fits, or use [`add_unequal`], which cannot overflow.
pub fn add(a: &[u8], b: &[u8], result: &mut [u8]) {
    assert_eq!(a.len(), b.len());
    assert_eq!(result.len(), a.len());
    let mut carry: u32 = 0;
    for i in (0..a.len()).rev() {
        let tmp = carry + u32::from(a[i]) + u32::from(b[i]);
        result[i] = (tmp % RADIX) as u8;
        carry = tmp / RADIX;
    }
}

/// Adds a shorter array `b` to `a`, aligned at the least-significant end.
///
/// `result` must have length `a.len() + 1`; the final carry becomes the new
/// leading digit, so this form cannot overflow.
pub fn add_unequal(a: &[u8], b: &[u8], result: &mut [u8]) {
    assert!(b.len() <= a.len());
    assert_eq!(result.len(), a.len() + 1);
    let diff = a.len() - b.len();
    let mut carry: u32 = 0;
    for i in (0..b.len()).rev() {
        let tmp = carry + u32::from(a[i + diff]) + u32::from(b[i]);
        result[i + diff + 1] = (tmp % RADIX) as u8;
        carry = tmp / RADIX;
    }
    for i in (0..diff).rev() {
        let tmp = carry + u32::from(a[i]);
        result[i + 1] = (tmp % RADIX) as u8;
        carry = tmp / RADIX;
    }
    result[0] = carry as u8;
}

/// Subtracts `b` from `a` digit-wise; all three slices share one length.
///
/// Caller contract: the value of `a` must be greater than or equal to the
/// value of `b`; the result is unspecified otherwise. Borrowing mutates
/// already-consumed positions, so the walk happens on a private copy of `a`.
pub fn subtract(a: &[u8], b: &[u8], result: &mut [u8]) {
    assert_eq!(a.len(), b.len());
    assert_eq!(result.len(), a.len());
    let mut a_copy: Scratch = SmallVec::from_slice(a);
    for i in (0..a.len()).rev() {
        if a_copy[i] >= b[i] {
            result[i] = a_copy[i] - b[i];
        } else {
            result[i] = (RADIX + u32::from(a_copy[i]) - u32::from(b[i])) as u8;
            // walk left past zero digits until there is something to borrow
            let mut borrow_index = i - 1;
            while borrow_index > 0 && a_copy[borrow_index] == 0 {
                a_copy[borrow_index] = RADIX_MINUS_ONE;
                borrow_index -= 1;
            }
            a_copy[borrow_index] -= 1;
        }
    }
}

/// Subtracts a shorter array `b` from `a`, aligned at the least-significant
/// end; `result` has length `a.len()`. High-order digits of `a` above the
/// active region are copied through unless a borrow consumes them.
///
/// Caller contract as for [`subtract`]: `a` must represent a value greater
/// than or equal to `b`.
pub fn subtract_unequal(a: &[u8], b: &[u8], result: &mut [u8]) {
    assert!(b.len() <= a.len());
    assert_eq!(result.len(), a.len());
    let diff = a.len() - b.len();
    let mut a_copy: Scratch = SmallVec::from_slice(a);
    for i in (0..b.len()).rev() {
        let ai = i + diff;
        if a_copy[ai] >= b[i] {
            result[ai] = a_copy[ai] - b[i];
        } else {
            result[ai] = (RADIX + u32::from(a_copy[ai]) - u32::from(b[i])) as u8;
            let mut borrow_index = ai - 1;
            while borrow_index > 0 && a_copy[borrow_index] == 0 {
                a_copy[borrow_index] = RADIX_MINUS_ONE;
                borrow_index -= 1;
            }
            a_copy[borrow_index] -= 1;
        }
    }
    result[..diff].copy_from_slice(&a_copy[..diff]);
}

/// Classic long multiplication. `b` must not be longer than `a` and
/// `result` must have length `a.len() + b.len() + 1`; the extra leading
/// digit absorbs the final carry. `result` is zero-initialized here.
pub fn school_multiply(a: &[u8], b: &[u8], result: &mut [u8]) {
    assert!(b.len() <= a.len());
    assert_eq!(result.len(), a.len() + b.len() + 1);
    result.fill(0);
    // end_pos tracks the least significant digit of the active result window
    let mut end_pos = result.len();
    for b_index in (0..b.len()).rev() {
        let mut result_index = end_pos;
        let mut carry: u32 = 0;
        for a_index in (0..a.len()).rev() {
            result_index -= 1;
            let tmp =
                carry + u32::from(result[result_index]) + u32::from(a[a_index]) * u32::from(b[b_index]);
            result[result_index] = (tmp % RADIX) as u8;
            carry = tmp / RADIX;
        }
        result[result_index - 1] = carry as u8;
        end_pos -= 1;
    }
}

/// Multiplication entry point. Contract and buffer layout are identical to
/// [`school_multiply`] regardless of which path runs.
// TODO: route operands longer than KARATSUBA_THRESHOLD through a
// divide-and-conquer multiply; only the schoolbook path exists today.
pub fn multiply(a: &[u8], b: &[u8], result: &mut [u8]) {
    school_multiply(a, b, result);
}

/// Bit-granular restoring long division with a dynamically rescaled divisor.
///
/// `dividend`, `divisor` and `result` share one length; `int_digits` is the
/// number of leading digits that represent the integer portion of the
/// fixed-point value being divided, which bounds the largest representable
/// quotient. Fractions that do not terminate are truncated at the available
/// width.
///
/// # Errors
/// - `DivisionByZero` when every divisor digit is zero.
/// - `Overflow` when the quotient's integer part cannot fit in `int_digits`
///   digits; `result` is left zeroed.
pub fn divide(
    dividend: &[u8],
    divisor: &[u8],
    result: &mut [u8],
    int_digits: usize,
) -> NumericResult<()> {
    let len = dividend.len();
    assert_eq!(divisor.len(), len);
    assert_eq!(result.len(), len);
    if is_zero(divisor) {
        return Err(NumericError::DivisionByZero);
    }
    clear(result);
    if is_zero(dividend) {
        return Ok(());
    }
    // double-width copies leave room for the divisor to slide below the
    // remainder without losing bits
    let working_len = len * 2;
    // bit length of the original values, not the expanded copies
    let bit_length = len * 8;
    let mut dividend_a: Scratch = smallvec![0; working_len];
    let mut dividend_b: Scratch = smallvec![0; working_len];
    let mut divisor_copy: Scratch = smallvec![0; working_len];
    widen(dividend, &mut dividend_a);
    widen(divisor, &mut divisor_copy);

    let mut starting_bit = int_digits as i64 * 8 - 1;
    starting_bit += align(&mut dividend_a, &mut divisor_copy);
    if starting_bit < 0 {
        tracing::debug!(starting_bit, "quotient integer part does not fit");
        return Err(NumericError::Overflow);
    }

    let mut bit = starting_bit as usize;
    // two dividend buffers alternate: subtract into one, then it becomes
    // the remainder for the next step
    let mut current = &mut dividend_a;
    let mut next = &mut dividend_b;
    while bit < bit_length {
        set_bit(result, bit);
        subtract(current.as_slice(), divisor_copy.as_slice(), next.as_mut_slice());
        bit += readjust(next.as_slice(), divisor_copy.as_mut_slice()) as usize;
        std::mem::swap(&mut current, &mut next);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::convert::{from_u32, to_u32};

    #[test]
    fn test_add_uniform_length() {
        let mut a = [0u8; 2];
        let mut b = [0u8; 2];
        let mut sum = [0u8; 2];
        from_u32(1, &mut a);
        from_u32(2, &mut b);
        add(&a, &b, &mut sum);
        assert_eq!(to_u32(&sum), 3);

        from_u32(128, &mut a);
        add(&a.clone(), &a, &mut sum);
        assert_eq!(to_u32(&sum), 256);

        let mut a = [0u8; 4];
        let mut b = [0u8; 4];
        let mut sum = [0u8; 4];
        from_u32(1_000_000_000, &mut a);
        from_u32(2_000_000_000, &mut b);
        add(&a, &b, &mut sum);
        assert_eq!(to_u32(&sum), 3_000_000_000);
    }

    #[test]
    fn test_add_discards_final_carry() {
        // 255 + 1 wraps to 0 in a one-digit array
        let mut sum = [0u8; 1];
        add(&[255], &[1], &mut sum);
        assert_eq!(sum, [0]);
    }

    #[test]
    fn test_add_unequal_lengths() {
        // operands of equal size still gain a carry digit
        let mut a = [0u8; 4];
        let mut b = [0u8; 4];
        let mut sum = [0u8; 5];
        from_u32(1_000_000_000, &mut a);
        from_u32(2_000_000_000, &mut b);
        add_unequal(&a, &b, &mut sum);
        assert_eq!(to_u32(&sum), 3_000_000_000);

        // genuinely different sizes: small values
        let mut a = [0u8; 2];
        let mut b = [0u8; 1];
        let mut sum = [0u8; 3];
        from_u32(1, &mut a);
        from_u32(2, &mut b);
        add_unequal(&a, &b, &mut sum);
        assert_eq!(to_u32(&sum), 3);

        // different sizes: carry propagates through the high digits
        let mut a = [0u8; 4];
        let mut b = [0u8; 2];
        let mut sum = [0u8; 5];
        from_u32(1_000_000_000, &mut a);
        from_u32(255, &mut b);
        add_unequal(&a, &b, &mut sum);
        assert_eq!(to_u32(&sum), 1_000_000_255);
    }

    #[test]
    fn test_subtract_uniform_length() {
        let mut a = [0u8; 4];
        let mut b = [0u8; 4];
        let mut result = [0u8; 4];
        from_u32(3_000_000_000, &mut a);
        from_u32(2_000_000_000, &mut b);
        subtract(&a, &b, &mut result);
        assert_eq!(to_u32(&result), 1_000_000_000);
    }

    #[test]
    fn test_subtract_with_borrow_walk() {
        // 0x0100 - 0x01 borrows across a zero digit
        let mut result = [0u8; 3];
        subtract(&[1, 0, 0], &[0, 0, 1], &mut result);
        assert_eq!(to_u32(&result), 65535);
    }

    #[test]
    fn test_subtract_unequal_lengths() {
        let mut a = [0u8; 4];
        let mut b = [0u8; 2];
        let mut result = [0u8; 4];
        from_u32(1_000_000_255, &mut a);
        from_u32(255, &mut b);
        subtract_unequal(&a, &b, &mut result);
        assert_eq!(to_u32(&result), 1_000_000_000);
    }

    #[test]
    fn test_school_multiply() {
        let mut a = [0u8; 4];
        let mut b = [0u8; 2];
        let mut product = [0u8; 7];
        from_u32(5_000_000, &mut a);
        from_u32(400, &mut b);
        school_multiply(&a, &b, &mut product);
        assert_eq!(to_u32(&product), 2_000_000_000);
    }

    #[test]
    fn test_multiply_matches_school_path() {
        let a = [12, 34, 56, 78, 90];
        let b = [98, 76, 54];
        let mut via_school = [0u8; 9];
        let mut via_entry = [0u8; 9];
        school_multiply(&a, &b, &mut via_school);
        multiply(&a, &b, &mut via_entry);
        assert_eq!(via_school, via_entry);
    }

    #[test]
    fn test_divide_by_zero() {
        let dividend = [1, 1, 1];
        let divisor = [0, 0, 0];
        let mut result = [129, 129, 129];
        assert_eq!(
            divide(&dividend, &divisor, &mut result, 1),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_divide_zero_dividend() {
        let dividend = [0, 0];
        let divisor = [0, 1];
        let mut result = [129, 13];
        divide(&dividend, &divisor, &mut result, 1).unwrap();
        assert_eq!(result, [0, 0]);
    }

    #[test]
    fn test_divide_overflow() {
        // 128 / 0.5 needs more than one integer digit
        let dividend = [128, 0];
        let divisor = [0, 128];
        let mut result = [255, 255];
        assert_eq!(
            divide(&dividend, &divisor, &mut result, 1),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_divide_exact_result() {
        // also verifies the loop exits cleanly once the remainder hits 0
        let dividend = [1, 0, 0];
        let divisor = [2, 0, 0];
        let mut result = [3, 4, 5];
        divide(&dividend, &divisor, &mut result, 1).unwrap();
        // exactly 0.5
        assert_eq!(result, [0, 128, 0]);
    }

    #[test]
    fn test_divide_repeating_fraction() {
        let dividend = [1, 0, 0, 0];
        let divisor = [0, 3, 0, 0];
        let mut result = [0u8; 4];
        divide(&dividend, &divisor, &mut result, 1).unwrap();
        // 256 / 3 = 85.333...; digit 85 repeats forever in base 256
        assert_eq!(result, [85, 85, 85, 85]);
    }
}
