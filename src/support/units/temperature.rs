use uom::si::{
    f64::ThermodynamicTemperature,
    thermodynamic_temperature::{degree_celsius, degree_fahrenheit, kelvin},
};

use super::{UnitTable, UnknownUnit};

/// Absolute temperature scales.
///
/// Celsius and Fahrenheit are affine scales, so conversion goes through
/// `uom` rather than a bare factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
}

impl UnitTable for TemperatureUnit {
    type Quantity = ThermodynamicTemperature;

    const KIND: &'static str = "temperature";

    const ALL: &'static [Self] = &[Self::Kelvin, Self::Celsius, Self::Fahrenheit];

    fn symbol(self) -> &'static str {
        match self {
            Self::Kelvin => "K",
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    fn factor(self) -> f64 {
        match self {
            Self::Kelvin | Self::Celsius => 1.0,
            Self::Fahrenheit => 5.0 / 9.0,
        }
    }

    fn to_base(self, value: f64) -> ThermodynamicTemperature {
        match self {
            Self::Kelvin => ThermodynamicTemperature::new::<kelvin>(value),
            Self::Celsius => ThermodynamicTemperature::new::<degree_celsius>(value),
            Self::Fahrenheit => ThermodynamicTemperature::new::<degree_fahrenheit>(value),
        }
    }

    fn from_base(self, quantity: ThermodynamicTemperature) -> f64 {
        match self {
            Self::Kelvin => quantity.get::<kelvin>(),
            Self::Celsius => quantity.get::<degree_celsius>(),
            Self::Fahrenheit => quantity.get::<degree_fahrenheit>(),
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for TemperatureUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "K" => Ok(Self::Kelvin),
            "°C" | "C" => Ok(Self::Celsius),
            "°F" | "F" => Ok(Self::Fahrenheit),
            other => Err(UnknownUnit {
                kind: Self::KIND,
                symbol: other.to_owned(),
            }),
        }
    }
}
