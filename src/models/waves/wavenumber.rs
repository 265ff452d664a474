//! Wavenumber `ν̃` from wavelength, frequency or photon energy.
//!
//! Besides the wavenumber itself, the output reports the equivalent
//! wavelength (nm), frequency (THz) and photon energy (eV).

mod core;

pub use self::core::{Line, Source};

use thiserror::Error;
use twine_core::Model;

use crate::support::{
    constraint::StrictlyPositive,
    format::NumberFormat,
    input::{Field, InputError},
    recipe::{Reading, Recipe},
    units::{EnergyUnit, FrequencyUnit, LengthUnit, WavenumberUnit},
};

/// Wavenumber calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct WavenumberCalculator {
    pub format: NumberFormat,
}

/// The one input the chosen method needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WavenumberInput {
    Wavelength(Field<LengthUnit>),
    Frequency(Field<FrequencyUnit>),
    Energy(Field<EnergyUnit>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavenumberForm {
    pub input: WavenumberInput,
    pub unit: WavenumberUnit,
}

impl Default for WavenumberForm {
    fn default() -> Self {
        Self {
            input: WavenumberInput::Wavelength(Field::new("", LengthUnit::Nanometer)),
            unit: WavenumberUnit::PerCentimeter,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WavenumberOutput {
    pub line: Line,
    pub wavenumber: Reading,
    pub wavelength: Reading,
    pub frequency: Reading,
    pub photon_energy: Reading,
    pub steps: Recipe,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WavenumberError {
    #[error(transparent)]
    Input(#[from] InputError),
}

impl Model for WavenumberCalculator {
    type Input = WavenumberForm;
    type Output = WavenumberOutput;
    type Error = WavenumberError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let fmt = &self.format;

        let (source, formula, given) = match &input.input {
            WavenumberInput::Wavelength(field) => {
                let value = field.required::<StrictlyPositive>("wavelength")?;
                let given = Reading::of(value.into_inner(), field.unit, fmt);
                (Source::Wavelength(value), "ν̃ = 1/λ", format!("1/{given}"))
            }
            WavenumberInput::Frequency(field) => {
                let value = field.required::<StrictlyPositive>("frequency")?;
                let given = Reading::of(value.into_inner(), field.unit, fmt);
                (Source::Frequency(value), "ν̃ = f/c", format!("{given} / c"))
            }
            WavenumberInput::Energy(field) => {
                let value = field.required::<StrictlyPositive>("energy")?;
                let given = Reading::of(value.into_inner(), field.unit, fmt);
                (Source::Energy(value), "ν̃ = E/(hc)", format!("{given} / (hc)"))
            }
        };

        let line = Line::new(source);
        let wavenumber = Reading::of(line.wavenumber, input.unit, fmt);

        let mut steps = Recipe::new();
        steps.push(format!("{formula} = {given} = {wavenumber}"));

        tracing::debug!(per_meter = line.wavenumber.value, "wavenumber computed");

        Ok(WavenumberOutput {
            line,
            wavenumber,
            wavelength: Reading::of(line.wavelength, LengthUnit::Nanometer, fmt),
            frequency: Reading::of(line.frequency, FrequencyUnit::Terahertz, fmt),
            photon_energy: Reading::of(line.photon_energy, EnergyUnit::Electronvolt, fmt),
            steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn calc(input: WavenumberInput) -> Result<WavenumberOutput, WavenumberError> {
        WavenumberCalculator::default().call(&WavenumberForm {
            input,
            unit: WavenumberUnit::PerCentimeter,
        })
    }

    #[test]
    fn from_wavelength() {
        let out = calc(WavenumberInput::Wavelength(Field::new("500", LengthUnit::Nanometer))).unwrap();
        assert_eq!(out.wavenumber.to_string(), "20000 cm⁻¹");
        assert_eq!(out.steps.to_string(), "ν̃ = 1/λ = 1/500 nm = 20000 cm⁻¹");
        assert_relative_eq!(out.wavelength.value, 500.0, max_relative = 1e-12);
    }

    #[test]
    fn from_frequency() {
        let out = calc(WavenumberInput::Frequency(Field::new("1", FrequencyUnit::Terahertz))).unwrap();
        assert_relative_eq!(out.wavenumber.value, 33.356_409_52, max_relative = 1e-9);
    }

    #[test]
    fn from_energy() {
        let out = calc(WavenumberInput::Energy(Field::new("1", EnergyUnit::Electronvolt))).unwrap();
        assert_relative_eq!(out.wavenumber.value, 8065.543_937, max_relative = 1e-9);
        assert_relative_eq!(out.photon_energy.value, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn rejects_blank_and_non_positive() {
        assert_eq!(
            calc(WavenumberInput::Energy(Field::new("", EnergyUnit::Joule))),
            Err(WavenumberError::Input(InputError::Missing { field: "energy" }))
        );
        assert!(matches!(
            calc(WavenumberInput::Wavelength(Field::new("-1", LengthUnit::Meter))),
            Err(WavenumberError::Input(InputError::Constraint {
                field: "wavelength",
                ..
            }))
        ));
    }
}
