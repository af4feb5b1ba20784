// ============================================================================
// Array Primitives
// Byte-granular helpers over big-endian base-256 digit slices
// ============================================================================

/// Lexicographic comparison of two equal-length big-endian arrays.
///
/// Returns `true` iff the value represented by `a` is less than or equal
/// to the value represented by `b` (equality included).
pub fn compare_le(a: &[u8], b: &[u8]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    for (&x, &y) in a.iter().zip(b.iter()) {
        if x < y {
            return true;
        }
        if x > y {
            return false;
        }
        // loop continues only while digits are equal
    }
    true
}

/// True iff every digit is zero.
#[inline]
pub fn is_zero(arr: &[u8]) -> bool {
    arr.iter().all(|&d| d == 0)
}

/// Sets every digit to zero.
#[inline]
pub fn clear(arr: &mut [u8]) {
    arr.fill(0);
}

/// Copies `source` into the high-order part of `target` and zero-fills the
/// remaining low-order digits. Requires `target.len() >= source.len()`.
///
/// Used to place an operand as the upper half of a double-width scratch
/// buffer before long division.
pub fn widen(source: &[u8], target: &mut [u8]) {
    assert!(target.len() >= source.len());
    target[..source.len()].copy_from_slice(source);
    target[source.len()..].fill(0);
}

/// Shifts every digit toward higher indices by `places` positions, dropping
/// the `places` least-significant digits and zeroing the vacated
/// most-significant ones. Equivalent to dividing the value by 256^places.
pub fn byte_shift_right(arr: &mut [u8], places: usize) {
    assert!(places <= arr.len());
    let len = arr.len();
    arr.copy_within(0..len - places, places);
    arr[..places].fill(0);
}
