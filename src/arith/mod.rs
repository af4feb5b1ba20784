// ============================================================================
// Digit-Array Arithmetic Engine
// Unsigned arithmetic over fixed-length big-endian base-256 digit arrays
// ============================================================================
//
// This module provides:
// - primitives: comparison, zero test/clear, widening, byte shifts
// - bits: bit-granular shifts, masks and single-bit access
// - align: operand alignment for long division
// - ops: add, subtract, multiply, divide
// - convert: decimal text / machine integer radix conversion
//
// Design principles:
// - Caller-owned buffers: every routine borrows slices for one call
// - No hidden state; all functions are pure apart from documented
//   in-place mutation
// - Length relations asserted at entry, never assumed

pub mod align;
pub mod bits;
pub mod convert;
pub mod ops;
pub mod primitives;

/// The digit base. Each array element is one base-256 digit.
pub const RADIX: u32 = 256;

/// Largest single digit value, substituted while walking a borrow.
pub const RADIX_MINUS_ONE: u8 = 255;

pub use ops::{
    add, add_unequal, divide, multiply, school_multiply, subtract, subtract_unequal,
    KARATSUBA_THRESHOLD,
};
