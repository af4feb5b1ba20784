// ============================================================================
// Radix Conversion
// Decimal text and machine integers to and from base-256 digit arrays
// ============================================================================

use super::RADIX;
use crate::errors::{NumericError, NumericResult};

/// Writes `num` into `result` as big-endian base-256 digits. Digits of `num`
/// beyond `result.len()` are silently dropped.
pub fn from_u32(num: u32, result: &mut [u8]) {
    let mut num = num;
    for digit in result.iter_mut().rev() {
        *digit = (num % RADIX) as u8;
        num /= RADIX;
    }
}

/// Reads a big-endian base-256 array back into a `u32` by positional
/// weighted summation. The represented value must fit in 32 bits.
pub fn to_u32(arr: &[u8]) -> u32 {
    arr.iter().fold(0u32, |acc, &d| acc * RADIX + u32::from(d))
}

/// Converts a string of decimal digits into an array of their values (0-9).
///
/// # Errors
/// `InvalidInput` if any character is not a decimal digit.
pub fn parse_digits(text: &str) -> NumericResult<Vec<u8>> {
    text.bytes()
        .map(|b| match b {
            b'0'..=b'9' => Ok(b - b'0'),
            _ => Err(NumericError::InvalidInput),
        })
        .collect()
}

/// Multiplies a big-endian array of decimal fraction digits by 256 in place
/// and returns the integer part carried out, i.e. the next base-256 digit.
///
/// Calling this once per output digit converts a decimal fraction into
/// base 256.
pub fn times_radix(decimal_digits: &mut [u8]) -> u8 {
    let mut carry: u32 = 0;
    for digit in decimal_digits.iter_mut().rev() {
        let tmp = carry + u32::from(*digit) * RADIX;
        *digit = (tmp % 10) as u8;
        carry = tmp / 10;
    }
    carry as u8
}

/// The inverse direction: multiplies a big-endian array of base-256
/// fraction digits by 10 in place and returns the carry (0-9), i.e. the
/// next decimal digit of the fraction's expansion.
pub fn times_ten(radix_digits: &mut [u8]) -> u8 {
    let mut carry: u32 = 0;
    for digit in radix_digits.iter_mut().rev() {
        let tmp = carry + u32::from(*digit) * 10;
        *digit = (tmp % RADIX) as u8;
        carry = tmp / RADIX;
    }
    carry as u8
}
