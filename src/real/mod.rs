// ============================================================================
// Real Number Module
// Unsigned fixed-point decimal numbers over base-256 digit arrays
// ============================================================================
//
// This module provides:
// - RealNumber: fixed-point value with text parsing/rendering, ordering,
//   tolerance equality and the four arithmetic operators
// - RealConfig: per-instance width and precision configuration
//
// Design principles:
// - Value semantics: operators return new instances
// - All fallible paths return Result (operators panic only where documented)
// - No shared state; distinct instances may be used from distinct threads

pub mod config;
pub mod real_number;

pub use config::RealConfig;
pub use real_number::RealNumber;
