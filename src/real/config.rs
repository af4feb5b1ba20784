// ============================================================================
// Real Number Configuration
// Width and precision parameters for the fixed-point representation
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// log10(256); sizes the rendered decimal fraction
const LOG10_RADIX: f64 = 2.408_239_965_311_849_6;

/// Width and precision configuration for [`RealNumber`](crate::real::RealNumber).
///
/// Replaces compile-time width constants with a per-instance value so that
/// several precision configurations can coexist in one process. Binary
/// operations require both operands to carry an equal configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RealConfig {
    /// Base-256 digits reserved for the integer part (1-4)
    pub integer_digits: usize,

    /// Base-256 digits carried for the fractional part
    pub precision: usize,

    /// Largest accepted decimal digit count for the integer part of
    /// parsed text
    pub max_decimal_integer_digits: usize,

    /// Low-order bits of the whole representation that two values may
    /// differ by and still compare equal under tolerance equality
    pub equality_bits: usize,
}

impl Default for RealConfig {
    fn default() -> Self {
        Self {
            integer_digits: 4,
            precision: 50,
            max_decimal_integer_digits: 9,
            equality_bits: 4,
        }
    }
}

impl RealConfig {
    /// Create a configuration with the given widths; remaining fields take
    /// their default values.
    pub fn new(integer_digits: usize, precision: usize) -> Self {
        Self {
            integer_digits,
            precision,
            ..Self::default()
        }
    }

    /// Builder method: set the accepted decimal length of the integer part
    pub fn with_max_decimal_integer_digits(mut self, digits: usize) -> Self {
        self.max_decimal_integer_digits = digits;
        self
    }

    /// Builder method: set the tolerance width for approximate equality
    pub fn with_equality_bits(mut self, bits: usize) -> Self {
        self.equality_bits = bits;
        self
    }

    /// Total digit-array length W = I + P
    #[inline]
    pub fn array_size(&self) -> usize {
        self.integer_digits + self.precision
    }

    /// Total bit width of the representation
    #[inline]
    pub fn array_bits(&self) -> usize {
        self.array_size() * 8
    }

    /// Decimal fraction digits emitted when rendering: ceil(P * log10(256)).
    /// 256 is not a power of 10, so the last digit or two of rendered output
    /// carry a documented conversion tolerance.
    #[inline]
    pub fn decimal_precision(&self) -> usize {
        (self.precision as f64 * LOG10_RADIX).ceil() as usize
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.integer_digits == 0 || self.integer_digits > 4 {
            return Err("Integer digit count must be between 1 and 4".to_string());
        }
        if self.precision == 0 {
            return Err("Precision must be at least one digit".to_string());
        }
        // every accepted decimal integer must fit the base-256 prefix
        let needed_bits = self.max_decimal_integer_digits as f64 * 10f64.log2();
        if needed_bits > (self.integer_digits * 8) as f64 {
            return Err(format!(
                "{} decimal integer digits cannot fit in {} base-256 digits",
                self.max_decimal_integer_digits, self.integer_digits
            ));
        }
        if self.equality_bits >= self.array_bits() {
            return Err("Equality tolerance must be narrower than the representation".to_string());
        }
        Ok(())
    }
}
