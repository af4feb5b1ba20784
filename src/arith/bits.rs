// ============================================================================
// Bit Primitives
// Bit-granular shifting and single-bit access over digit arrays
// ============================================================================

use super::primitives::byte_shift_right;

/// Returns a byte in which the `bits_to_show` least-significant bits are
/// set. Saturates: `bits_to_show >= 8` yields 255.
#[inline]
pub fn bit_mask(bits_to_show: usize) -> u8 {
    if bits_to_show >= 8 {
        0xff
    } else {
        (1u8 << bits_to_show) - 1
    }
}

/// Shifts the whole array right by `places` bits (divides the value by
/// 2^places). The byte-sized part of the shift is delegated to
/// [`byte_shift_right`]; the residual 0-7 bits are folded across digit
/// boundaries from the higher-index neighbor.
pub fn bit_shift_right(arr: &mut [u8], places: usize) {
    assert!(places <= arr.len() * 8);
    let byte_places = places / 8;
    let bit_places = places % 8;
    byte_shift_right(arr, byte_places);
    if bit_places == 0 {
        return;
    }
    let mask = bit_mask(bit_places);
    let offset = 8 - bit_places;
    // the first byte_places positions are already 0
    let mut i = arr.len() - 1;
    while i > byte_places {
        arr[i] >>= bit_places;
        let folded = arr[i - 1] & mask;
        arr[i] |= folded << offset;
        i -= 1;
    }
    arr[byte_places] >>= bit_places;
}

/// Sets one bit, addressed by an absolute index counted from the most
/// significant bit of digit 0. Requires `bit_to_set < arr.len() * 8`.
/// No effect when the bit is already set.
#[inline]
pub fn set_bit(arr: &mut [u8], bit_to_set: usize) {
    let array_index = bit_to_set / 8;
    let bit_position = bit_to_set % 8;
    arr[array_index] |= 1 << (7 - bit_position);
}
