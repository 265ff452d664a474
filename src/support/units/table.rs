use std::{fmt, str::FromStr};

use thiserror::Error;

/// An unrecognised unit symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} unit: {symbol:?}")]
pub struct UnknownUnit {
    /// The physical quantity the symbol was meant for (e.g. `"pressure"`).
    pub kind: &'static str,
    /// The symbol as supplied.
    pub symbol: String,
}

/// A fixed set of display units for one physical quantity.
///
/// Each variant maps to a multiplicative factor relative to the SI base unit
/// of [`UnitTable::Quantity`]. Calculators normalise entered values with
/// [`to_base`](UnitTable::to_base) and denormalise answers with
/// [`from_base`](UnitTable::from_base).
///
/// Tables are parsed from their display symbol or an ASCII alias:
///
/// ```
/// use physcalc::support::units::{PressureUnit, UnitTable};
///
/// let unit: PressureUnit = "kPa".parse().unwrap();
/// assert_eq!(unit, PressureUnit::Kilopascal);
/// assert_eq!(unit.factor(), 1000.0);
/// assert!("furlong".parse::<PressureUnit>().is_err());
/// ```
pub trait UnitTable:
    Copy + Eq + fmt::Debug + fmt::Display + FromStr<Err = UnknownUnit> + 'static
{
    /// The `uom` quantity this table converts to and from.
    type Quantity: Copy;

    /// Name of the quantity, used in error messages.
    const KIND: &'static str;

    /// Every unit in the table, in display order.
    const ALL: &'static [Self];

    /// Display symbol, e.g. `"kΩ"`.
    fn symbol(self) -> &'static str;

    /// Multiplicative factor relative to the SI base unit.
    ///
    /// Affine units (temperature scales) report the factor of their interval.
    fn factor(self) -> f64;

    /// Converts a value expressed in this unit into a quantity.
    fn to_base(self, value: f64) -> Self::Quantity;

    /// Expresses a quantity as a value in this unit.
    fn from_base(self, quantity: Self::Quantity) -> f64;
}

/// Declares a linear unit table backed by a `uom` quantity.
///
/// The base unit type is the SI unit that each factor is relative to.
macro_rules! unit_table {
    (
        $(#[$meta:meta])*
        $name:ident: $quantity:ty => $base:ty, $kind:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $symbol:literal $(| $alias:literal)*, $factor:expr;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::support::units::UnitTable for $name {
            type Quantity = $quantity;

            const KIND: &'static str = $kind;

            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn symbol(self) -> &'static str {
                match self {
                    $(Self::$variant => $symbol,)+
                }
            }

            fn factor(self) -> f64 {
                match self {
                    $(Self::$variant => $factor,)+
                }
            }

            fn to_base(self, value: f64) -> $quantity {
                <$quantity>::new::<$base>(value * self.factor())
            }

            fn from_base(self, quantity: $quantity) -> f64 {
                quantity.get::<$base>() / self.factor()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::support::units::UnitTable::symbol(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::support::units::UnknownUnit;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($symbol $(| $alias)* => Ok(Self::$variant),)+
                    other => Err($crate::support::units::UnknownUnit {
                        kind: $kind,
                        symbol: other.to_owned(),
                    }),
                }
            }
        }
    };
}

pub(crate) use unit_table;
