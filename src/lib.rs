// ============================================================================
// Realnum Library
// Unsigned fixed-point decimal arithmetic over base-256 digit arrays
// ============================================================================

//! # Realnum
//!
//! Unsigned arbitrary-precision arithmetic over fixed-length base-256 digit
//! arrays, and a fixed-point decimal number type built on top of it.
//!
//! ## Features
//!
//! - **Digit-array engine**: carry/borrow addition and subtraction over
//!   variable-length operands, schoolbook multiplication, and bit-granular
//!   restoring long division with dynamic operand alignment
//! - **Fixed-point `RealNumber`**: decimal text in and out, total ordering,
//!   tolerance equality, the four arithmetic operators
//! - **Runtime precision**: widths configured per instance, not per build
//! - **Convergent series**: Babylonian square roots and Gauss-Legendre pi
//!   as consumers of the public interface
//!
//! ## Example
//!
//! ```rust
//! use realnum::prelude::*;
//!
//! let two: RealNumber = "2.0".parse().unwrap();
//! let guess: RealNumber = "1.4".parse().unwrap();
//!
//! let sqrt_two = babylonian_sqrt(&two, &guess, 10).unwrap();
//! let pi = gauss_legendre_pi(6, 10, &sqrt_two).unwrap();
//! println!("pi is {}", pi);
//!
//! // errors are explicit
//! let zero: RealNumber = "0.0".parse().unwrap();
//! assert_eq!(two.checked_div(&zero), Err(NumericError::DivisionByZero));
//! ```

pub mod arith;
pub mod errors;
pub mod real;
pub mod series;

// Re-exports for convenience
pub mod prelude {
    pub use crate::errors::{NumericError, NumericResult};
    pub use crate::real::{RealConfig, RealNumber};
    pub use crate::series::{babylonian_sqrt, gauss_legendre_pi};
}
