//! Ideal gas law, `PV = nRT`.
//!
//! Exactly three of pressure, volume, amount of substance and temperature
//! must be filled in; the fourth is computed.

mod core;

pub use self::core::{Known, Sample};

use thiserror::Error;
use twine_core::Model;

use crate::support::{
    constants::MOLAR_GAS_CONSTANT,
    constraint::StrictlyPositive,
    format::NumberFormat,
    input::{Field, InputError},
    recipe::{Reading, Recipe},
    units::{AmountUnit, PressureUnit, TemperatureUnit, VolumeUnit},
};

/// Ideal gas law calculator.
#[derive(Debug, Clone, Copy)]
pub struct IdealGasLaw {
    pub format: NumberFormat,
}

impl Default for IdealGasLaw {
    fn default() -> Self {
        Self {
            format: NumberFormat::STATE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdealGasForm {
    pub pressure: Field<PressureUnit>,
    pub volume: Field<VolumeUnit>,
    pub amount: Field<AmountUnit>,
    pub temperature: Field<TemperatureUnit>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdealGasOutput {
    pub sample: Sample,
    /// The computed quantity in its field's unit.
    pub result: Reading,
    pub steps: Recipe,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IdealGasError {
    #[error(transparent)]
    Input(#[from] InputError),
}

impl Model for IdealGasLaw {
    type Input = IdealGasForm;
    type Output = IdealGasOutput;
    type Error = IdealGasError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let fmt = &self.format;

        let p = input.pressure.constrained::<StrictlyPositive>("pressure")?;
        let v = input.volume.constrained::<StrictlyPositive>("volume")?;
        let n = input.amount.constrained::<StrictlyPositive>("amount")?;
        let t = input.temperature.absolute("temperature")?;

        let mut steps = Recipe::new();
        steps.push(format!("PV = nRT, R = {MOLAR_GAS_CONSTANT} J/(mol·K)"));

        let known = match (p, v, n, t) {
            (None, Some(volume), Some(amount), Some(temperature)) => {
                steps.push("P = nRT / V");
                Known::VolumeAmountTemperature {
                    volume,
                    amount,
                    temperature,
                }
            }
            (Some(pressure), None, Some(amount), Some(temperature)) => {
                steps.push("V = nRT / P");
                Known::PressureAmountTemperature {
                    pressure,
                    amount,
                    temperature,
                }
            }
            (Some(pressure), Some(volume), None, Some(temperature)) => {
                steps.push("n = PV / (RT)");
                Known::PressureVolumeTemperature {
                    pressure,
                    volume,
                    temperature,
                }
            }
            (Some(pressure), Some(volume), Some(amount), None) => {
                steps.push("T = PV / (nR)");
                Known::PressureVolumeAmount {
                    pressure,
                    volume,
                    amount,
                }
            }
            _ => {
                let filled = [p.is_some(), v.is_some(), n.is_some(), t.is_some()];
                tracing::debug!(?filled, "ideal gas: wrong number of fields");
                return Err(InputError::field_count(3, &filled).into());
            }
        };

        let sample = self::core::solve(known);
        let result = match known {
            Known::VolumeAmountTemperature { .. } => {
                Reading::of(sample.pressure, input.pressure.unit, fmt)
            }
            Known::PressureAmountTemperature { .. } => {
                Reading::of(sample.volume, input.volume.unit, fmt)
            }
            Known::PressureVolumeTemperature { .. } => {
                Reading::of(sample.amount, input.amount.unit, fmt)
            }
            Known::PressureVolumeAmount { .. } => {
                Reading::of(sample.temperature, input.temperature.unit, fmt)
            }
        };
        steps.push(format!(
            "P = {}, V = {}, n = {}, T = {}",
            Reading::of(sample.pressure, input.pressure.unit, fmt),
            Reading::of(sample.volume, input.volume.unit, fmt),
            Reading::of(sample.amount, input.amount.unit, fmt),
            Reading::of(sample.temperature, input.temperature.unit, fmt),
        ));

        tracing::debug!(result = %result, residual = sample.residual(), "ideal gas solved");

        Ok(IdealGasOutput {
            sample,
            result,
            steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn form(p: &str, v: &str, n: &str, t: &str) -> IdealGasForm {
        IdealGasForm {
            pressure: Field::new(p, PressureUnit::Atmosphere),
            volume: Field::new(v, VolumeUnit::Liter),
            amount: Field::new(n, AmountUnit::Mole),
            temperature: Field::new(t, TemperatureUnit::Celsius),
        }
    }

    #[test]
    fn molar_volume() {
        let out = IdealGasLaw::default().call(&form("1", "", "1", "0")).unwrap();
        assert_relative_eq!(out.result.value, 22.413_969_5, max_relative = 1e-8);
        assert_eq!(out.result.to_string(), "22.414 L");
    }

    #[test]
    fn temperature_in_entered_scale() {
        let out = IdealGasLaw::default()
            .call(&form("1", "22.413969544601038", "1", ""))
            .unwrap();
        assert_relative_eq!(out.result.value, 0.0, epsilon = 1e-9);
        assert_eq!(out.result.unit, "°C");
    }

    #[test]
    fn requires_exactly_three() {
        let calc = IdealGasLaw::default();
        assert!(matches!(
            calc.call(&form("1", "", "", "0")),
            Err(IdealGasError::Input(InputError::FieldCount { expected: 3, .. }))
        ));
        assert!(matches!(
            calc.call(&form("1", "1", "1", "1")),
            Err(IdealGasError::Input(InputError::FieldCount { expected: 3, .. }))
        ));
    }

    #[test]
    fn rejects_non_positive_and_sub_zero() {
        let calc = IdealGasLaw::default();
        assert!(matches!(
            calc.call(&form("0", "", "1", "20")),
            Err(IdealGasError::Input(InputError::Constraint { field: "pressure", .. }))
        ));
        assert_eq!(
            calc.call(&form("1", "", "1", "-300")),
            Err(IdealGasError::Input(InputError::AbsoluteZero {
                field: "temperature"
            }))
        );
    }
}
