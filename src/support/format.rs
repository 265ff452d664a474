//! Number formatting for calculator readings.
//!
//! Readings switch to exponential notation for very small or very large
//! magnitudes. Exponents carry an explicit sign (`1.2346e+6`), matching the
//! notation users see on the calculator pages.

/// How a calculator renders numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberFormat {
    /// Decimal places in fixed notation, and mantissa decimals in exponential notation.
    pub digits: usize,

    /// Non-zero magnitudes below this use exponential notation.
    pub sci_below: f64,

    /// Magnitudes at or above this use exponential notation.
    pub sci_from: f64,

    /// Drop trailing zeros (and a dangling point) in fixed notation.
    pub trim_zeros: bool,

    /// Text shown for infinite or `NaN` values.
    pub non_finite: &'static str,
}

impl NumberFormat {
    /// Four decimals, exponential below 1e-4 or from 1e6, trimmed.
    pub const COMPACT: Self = Self {
        digits: 4,
        sci_below: 1e-4,
        sci_from: 1e6,
        trim_zeros: true,
        non_finite: "Invalid",
    };

    /// Like [`COMPACT`](Self::COMPACT) but switches to exponential below 1e-3.
    ///
    /// Used for gas states, where small pressures are common.
    pub const STATE: Self = Self {
        sci_below: 1e-3,
        ..Self::COMPACT
    };

    /// Six fixed decimals, exponential only below 1e-4, never trimmed.
    pub const PRECISE: Self = Self {
        digits: 6,
        sci_below: 1e-4,
        sci_from: f64::INFINITY,
        trim_zeros: false,
        non_finite: "∞",
    };

    /// Formats a value.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return self.non_finite.to_owned();
        }
        // Avoid rendering "-0".
        let value = if value == 0.0 { 0.0 } else { value };
        let magnitude = value.abs();

        if magnitude != 0.0 && (magnitude < self.sci_below || magnitude >= self.sci_from) {
            return exponential(value, self.digits);
        }

        let digits = self.digits;
        let fixed = format!("{value:.digits$}");
        if self.trim_zeros && fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.').to_owned()
        } else {
            fixed
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::COMPACT
    }
}

/// Exponential notation with a signed exponent.
fn exponential(value: f64, digits: usize) -> String {
    let raw = format!("{value:.digits$e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => raw,
    }
}
