//! Parsing and validation of form fields.
//!
//! Calculator forms arrive as text. A blank field means "not given" and is
//! reported as `None`; anything else must parse as a finite `f64`. Checked
//! values are then converted to SI with the field's unit selector and, where
//! the calculator requires it, wrapped in a [`Constrained`] quantity.
//!
//! ```
//! use physcalc::support::{
//!     constraint::StrictlyPositive,
//!     input::{Field, InputError},
//!     units::LengthUnit,
//! };
//! use uom::si::length::meter;
//!
//! let radius = Field::new("25", LengthUnit::Centimeter);
//! let r = radius.required::<StrictlyPositive>("radius").unwrap();
//! assert!((r.into_inner().get::<meter>() - 0.25).abs() < 1e-12);
//!
//! let blank = Field::new("  ", LengthUnit::Meter);
//! assert!(matches!(
//!     blank.required::<StrictlyPositive>("radius"),
//!     Err(InputError::Missing { field: "radius" })
//! ));
//! ```

use thiserror::Error;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::support::{
    constraint::{Constrained, Constraint, ConstraintError, StrictlyPositive},
    units::{TemperatureUnit, UnitTable, UnknownUnit},
};

/// Errors raised while reading a calculator form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A required field was left blank.
    #[error("{field} is required")]
    Missing { field: &'static str },

    /// The field text is not a finite number.
    #[error("{field} is not a valid number: {text:?}")]
    NotANumber { field: &'static str, text: String },

    /// The number violates the field's constraint.
    #[error("{field}: {source}")]
    Constraint {
        field: &'static str,
        source: ConstraintError,
    },

    /// A temperature at or below absolute zero.
    #[error("{field} must be above absolute zero")]
    AbsoluteZero { field: &'static str },

    /// A unit selector could not be parsed.
    #[error(transparent)]
    Unit(#[from] UnknownUnit),

    /// An "exactly N of M" form has the wrong number of filled fields.
    #[error("fill in exactly {expected} of the {total} fields (found {filled})")]
    FieldCount {
        expected: usize,
        total: usize,
        filled: usize,
    },
}

impl InputError {
    /// A [`FieldCount`](Self::FieldCount) error for a filled-field mask.
    #[must_use]
    pub fn field_count(expected: usize, filled: &[bool]) -> Self {
        Self::FieldCount {
            expected,
            total: filled.len(),
            filled: count_filled(filled),
        }
    }
}

/// Parses a field's text.
///
/// Blank or whitespace-only text yields `Ok(None)`.
///
/// # Errors
///
/// Returns [`InputError::NotANumber`] if the trimmed text does not parse or
/// parses to an infinite value or `NaN`.
pub fn number(field: &'static str, text: &str) -> Result<Option<f64>, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(InputError::NotANumber {
            field,
            text: trimmed.to_owned(),
        }),
    }
}

/// Unwraps an optional value, reporting a blank field as [`InputError::Missing`].
///
/// # Errors
///
/// Returns [`InputError::Missing`] when `value` is `None`.
pub fn require<T>(field: &'static str, value: Option<T>) -> Result<T, InputError> {
    value.ok_or(InputError::Missing { field })
}

/// Applies constraint `C` to a value, naming the field on failure.
///
/// # Errors
///
/// Returns [`InputError::Constraint`] if the value violates `C`.
pub fn constrain<C, T>(field: &'static str, value: T) -> Result<Constrained<T, C>, InputError>
where
    C: Constraint<T>,
{
    Constrained::new(value).map_err(|source| InputError::Constraint { field, source })
}

/// Counts the `true` entries in a filled-field mask.
#[must_use]
pub fn count_filled(filled: &[bool]) -> usize {
    filled.iter().filter(|&&f| f).count()
}

/// A numeric form field paired with its unit selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<U> {
    pub text: String,
    pub unit: U,
}

impl<U> Field<U> {
    pub fn new(text: impl Into<String>, unit: U) -> Self {
        Self {
            text: text.into(),
            unit,
        }
    }

    /// Returns `true` if the field holds only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Parses the number as entered, without unit conversion.
    ///
    /// # Errors
    ///
    /// See [`number`].
    pub fn value(&self, field: &'static str) -> Result<Option<f64>, InputError> {
        number(field, &self.text)
    }
}

impl<U: UnitTable> Field<U> {
    /// Builds a field from its text and a unit symbol such as `"kPa"`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Unit`] if `symbol` names no unit in `U`.
    pub fn parse(text: impl Into<String>, symbol: &str) -> Result<Self, InputError> {
        Ok(Self::new(text, symbol.parse::<U>()?))
    }

    /// Parses the field and converts it to SI.
    ///
    /// # Errors
    ///
    /// See [`number`].
    pub fn quantity(&self, field: &'static str) -> Result<Option<U::Quantity>, InputError> {
        Ok(self.value(field)?.map(|v| self.unit.to_base(v)))
    }

    /// Parses, converts and constrains an optional field.
    ///
    /// # Errors
    ///
    /// Fails if the text is not a number or the quantity violates `C`.
    pub fn constrained<C>(
        &self,
        field: &'static str,
    ) -> Result<Option<Constrained<U::Quantity, C>>, InputError>
    where
        C: Constraint<U::Quantity>,
    {
        self.quantity(field)?
            .map(|q| constrain::<C, _>(field, q))
            .transpose()
    }

    /// Parses, converts and constrains a required field.
    ///
    /// # Errors
    ///
    /// Fails if the field is blank, is not a number, or violates `C`.
    pub fn required<C>(&self, field: &'static str) -> Result<Constrained<U::Quantity, C>, InputError>
    where
        C: Constraint<U::Quantity>,
    {
        require(field, self.constrained::<C>(field)?)
    }
}

impl Field<TemperatureUnit> {
    /// Parses an absolute temperature, rejecting values at or below 0 K.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::AbsoluteZero`] for non-physical temperatures.
    pub fn absolute(
        &self,
        field: &'static str,
    ) -> Result<Option<ThermodynamicTemperature>, InputError> {
        let Some(temperature) = self.quantity(field)? else {
            return Ok(None);
        };
        match StrictlyPositive::check(&temperature.get::<kelvin>()) {
            Ok(()) => Ok(Some(temperature)),
            Err(_) => Err(InputError::AbsoluteZero { field }),
        }
    }
}

/// Reads an optional quantity that falls back to `default` when blank.
///
/// # Errors
///
/// Fails if the text is not a number or the quantity violates `C`.
pub fn or_default<U, C>(
    field: &Field<U>,
    name: &'static str,
    default: U::Quantity,
) -> Result<Constrained<U::Quantity, C>, InputError>
where
    U: UnitTable,
    C: Constraint<U::Quantity>,
{
    match field.constrained::<C>(name)? {
        Some(value) => Ok(value),
        None => constrain::<C, _>(name, default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{electric_charge::coulomb, pressure::pascal};

    use crate::support::{
        constraint::{NonNegative, NonZero},
        units::{ChargeUnit, PressureUnit},
    };

    #[test]
    fn parses_numbers() {
        assert_eq!(number("x", "  "), Ok(None));
        assert_eq!(number("x", " 2.5 "), Ok(Some(2.5)));
        assert_eq!(number("x", "-1e3"), Ok(Some(-1000.0)));
        assert!(matches!(
            number("x", "12abc"),
            Err(InputError::NotANumber { field: "x", .. })
        ));
        assert!(number("x", "inf").is_err());
        assert!(number("x", "NaN").is_err());
    }

    #[test]
    fn converts_and_constrains() {
        let p = Field::new("101.325", PressureUnit::Kilopascal);
        let p = p.required::<StrictlyPositive>("pressure").unwrap();
        assert_relative_eq!(p.into_inner().get::<pascal>(), 101_325.0, epsilon = 1e-9);

        let negative = Field::new("-1", PressureUnit::Bar);
        assert_eq!(
            negative.required::<StrictlyPositive>("pressure"),
            Err(InputError::Constraint {
                field: "pressure",
                source: ConstraintError::Negative,
            })
        );

        let zero = Field::new("0", ChargeUnit::Microcoulomb);
        assert!(zero.constrained::<NonZero>("q1").is_err());

        let q = Field::new("-3", ChargeUnit::Nanocoulomb);
        let q = q.constrained::<NonZero>("q1").unwrap().unwrap();
        assert_relative_eq!(q.into_inner().get::<coulomb>(), -3e-9, epsilon = 1e-21);
    }

    #[test]
    fn field_from_unit_symbol() {
        let p = Field::<PressureUnit>::parse("2", "bar").unwrap();
        assert_eq!(p.unit, PressureUnit::Bar);
        assert_relative_eq!(
            p.quantity("pressure").unwrap().unwrap().get::<pascal>(),
            2e5,
            epsilon = 1e-9
        );

        assert_eq!(
            Field::<PressureUnit>::parse("2", "furlong"),
            Err(InputError::Unit(UnknownUnit {
                kind: "pressure",
                symbol: "furlong".to_owned(),
            }))
        );
    }

    #[test]
    fn blank_optional_field() {
        let f = Field::new("", PressureUnit::Pascal);
        assert!(f.is_blank());
        assert_eq!(f.constrained::<NonNegative>("p"), Ok(None));
        assert_eq!(
            f.required::<NonNegative>("p"),
            Err(InputError::Missing { field: "p" })
        );
    }

    #[test]
    fn absolute_temperature() {
        let t = Field::new("25", TemperatureUnit::Celsius);
        let t = t.absolute("T1").unwrap().unwrap();
        assert_relative_eq!(t.get::<kelvin>(), 298.15, epsilon = 1e-9);

        let frozen = Field::new("-273.15", TemperatureUnit::Celsius);
        assert_eq!(
            frozen.absolute("T1"),
            Err(InputError::AbsoluteZero { field: "T1" })
        );
        assert!(Field::new("-300", TemperatureUnit::Fahrenheit).absolute("T1").is_ok());
        assert!(Field::new("-500", TemperatureUnit::Fahrenheit).absolute("T1").is_err());
    }

    #[test]
    fn field_counts() {
        assert_eq!(count_filled(&[true, false, true]), 2);
        assert_eq!(
            InputError::field_count(3, &[true, false, true, false]),
            InputError::FieldCount {
                expected: 3,
                total: 4,
                filled: 2,
            }
        );
    }
}
