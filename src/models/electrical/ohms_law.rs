//! Ohm's law, `V = IR`, with dissipated power.

mod core;

pub use self::core::{OperatingPoint, OppositeSigns};

use thiserror::Error;
use twine_core::Model;
use uom::si::power::watt;

use crate::support::{
    constraint::{NonZero, StrictlyPositive},
    format::NumberFormat,
    input::{Field, InputError},
    recipe::{Reading, Recipe},
    units::{CurrentUnit, ResistanceUnit, VoltageUnit},
};

/// Ohm's law calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OhmsLaw {
    pub format: NumberFormat,
}

/// The unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OhmsLawMode {
    Resistance,
    Voltage,
    Current,
}

/// The field for the unknown is ignored; its unit selects the display unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OhmsLawForm {
    pub mode: OhmsLawMode,
    pub voltage: Field<VoltageUnit>,
    pub current: Field<CurrentUnit>,
    pub resistance: Field<ResistanceUnit>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OhmsLawOutput {
    pub point: OperatingPoint,
    /// The solved quantity in its display unit.
    pub result: Reading,
    /// Watts.
    pub power: Reading,
    pub steps: Recipe,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OhmsLawError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    OppositeSigns(#[from] OppositeSigns),
}

impl Model for OhmsLaw {
    type Input = OhmsLawForm;
    type Output = OhmsLawOutput;
    type Error = OhmsLawError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let fmt = &self.format;
        let mut steps = Recipe::new();

        let (point, result) = match input.mode {
            OhmsLawMode::Resistance => {
                let v = input.voltage.required::<NonZero>("voltage")?;
                let i = input.current.required::<NonZero>("current")?;
                let point = OperatingPoint::from_voltage_and_current(v, i)?;
                let result = Reading::of(point.resistance, input.resistance.unit, fmt);
                steps.push("R = V / I");
                steps.push(format!(
                    "R = {} / {} = {result}",
                    Reading::of(point.voltage, input.voltage.unit, fmt),
                    Reading::of(point.current, input.current.unit, fmt),
                ));
                (point, result)
            }
            OhmsLawMode::Voltage => {
                let i = input.current.required::<NonZero>("current")?;
                let r = input.resistance.required::<StrictlyPositive>("resistance")?;
                let point = OperatingPoint::from_current_and_resistance(i, r);
                let result = Reading::of(point.voltage, input.voltage.unit, fmt);
                steps.push("V = I × R");
                steps.push(format!(
                    "V = {} × {} = {result}",
                    Reading::of(point.current, input.current.unit, fmt),
                    Reading::of(point.resistance, input.resistance.unit, fmt),
                ));
                (point, result)
            }
            OhmsLawMode::Current => {
                let v = input.voltage.required::<NonZero>("voltage")?;
                let r = input.resistance.required::<StrictlyPositive>("resistance")?;
                let point = OperatingPoint::from_voltage_and_resistance(v, r);
                let result = Reading::of(point.current, input.current.unit, fmt);
                steps.push("I = V / R");
                steps.push(format!(
                    "I = {} / {} = {result}",
                    Reading::of(point.voltage, input.voltage.unit, fmt),
                    Reading::of(point.resistance, input.resistance.unit, fmt),
                ));
                (point, result)
            }
        };

        let power = Reading::new(point.power().get::<watt>(), "W", fmt);
        steps.push(format!("P = V × I = {power}"));

        tracing::debug!(mode = ?input.mode, result = %result, "ohm's law solved");

        Ok(OhmsLawOutput {
            point,
            result,
            power,
            steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::ConstraintError;

    fn form(mode: OhmsLawMode, v: &str, i: &str, r: &str) -> OhmsLawForm {
        OhmsLawForm {
            mode,
            voltage: Field::new(v, VoltageUnit::Volt),
            current: Field::new(i, CurrentUnit::Milliampere),
            resistance: Field::new(r, ResistanceUnit::Kiloohm),
        }
    }

    #[test]
    fn solve_each_mode() {
        let calc = OhmsLaw::default();

        let out = calc.call(&form(OhmsLawMode::Resistance, "5", "2", "")).unwrap();
        assert_eq!(out.result.to_string(), "2.5 kΩ");
        assert_eq!(out.power.to_string(), "0.01 W");

        let out = calc.call(&form(OhmsLawMode::Voltage, "", "2", "2.5")).unwrap();
        assert_relative_eq!(out.result.value, 5.0, max_relative = 1e-12);

        let out = calc.call(&form(OhmsLawMode::Current, "5", "", "2.5")).unwrap();
        assert_relative_eq!(out.result.value, 2.0, max_relative = 1e-12);
        assert_eq!(out.steps.lines()[0], "I = V / R");
    }

    #[test]
    fn ignores_the_unknown_field() {
        let out = OhmsLaw::default()
            .call(&form(OhmsLawMode::Voltage, "not a number", "1", "1"))
            .unwrap();
        assert_relative_eq!(out.result.value, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn validation() {
        let calc = OhmsLaw::default();
        assert_eq!(
            calc.call(&form(OhmsLawMode::Resistance, "0", "1", "")),
            Err(OhmsLawError::Input(InputError::Constraint {
                field: "voltage",
                source: ConstraintError::Zero,
            }))
        );
        assert_eq!(
            calc.call(&form(OhmsLawMode::Current, "5", "", "-1")),
            Err(OhmsLawError::Input(InputError::Constraint {
                field: "resistance",
                source: ConstraintError::Negative,
            }))
        );
        assert_eq!(
            calc.call(&form(OhmsLawMode::Resistance, "5", "-1", "")),
            Err(OhmsLawError::OppositeSigns(OppositeSigns))
        );
    }
}
