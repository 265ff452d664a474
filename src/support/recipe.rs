//! Formatted answers and their worked steps.

use std::fmt;

use crate::support::{format::NumberFormat, units::UnitTable};

/// A value formatted in a display unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    /// The value in `unit`.
    pub value: f64,
    /// Unit symbol, empty for dimensionless values.
    pub unit: &'static str,
    /// `value` rendered with the calculator's [`NumberFormat`].
    pub text: String,
}

impl Reading {
    pub fn new(value: f64, unit: &'static str, format: &NumberFormat) -> Self {
        Self {
            value,
            unit,
            text: format.format(value),
        }
    }

    /// Expresses an SI quantity in a table unit.
    pub fn of<U: UnitTable>(quantity: U::Quantity, unit: U, format: &NumberFormat) -> Self {
        Self::new(unit.from_base(quantity), unit.symbol(), format)
    }

    /// A dimensionless reading.
    pub fn plain(value: f64, format: &NumberFormat) -> Self {
        Self::new(value, "", format)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            f.write_str(&self.text)
        } else {
            write!(f, "{} {}", self.text, self.unit)
        }
    }
}

/// The substituted steps behind an answer, one line per step.
///
/// ```
/// use physcalc::support::recipe::Recipe;
///
/// let mut recipe = Recipe::new();
/// recipe.push("V = I × R");
/// recipe.push("V = 2 A × 5 Ω = 10 V");
/// assert_eq!(recipe.to_string(), "V = I × R\nV = 2 A × 5 Ω = 10 V");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipe {
    lines: Vec<String>,
}

impl Recipe {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}
