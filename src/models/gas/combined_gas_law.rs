//! Combined gas law, `P₁V₁ / T₁ = P₂V₂ / T₂`.
//!
//! One of the six quantities is chosen as the unknown; the other five are
//! required.

mod core;

pub use self::core::GasState;

use thiserror::Error;
use twine_core::Model;
use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    pressure::pascal,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
    volume::cubic_meter,
};

use crate::support::{
    constraint::StrictlyPositive,
    format::NumberFormat,
    input::{self, Field, InputError},
    recipe::{Reading, Recipe},
    units::{PressureUnit, TemperatureDifference, TemperatureUnit, VolumeUnit},
};

/// Combined gas law calculator.
#[derive(Debug, Clone, Copy)]
pub struct CombinedGasLaw {
    pub format: NumberFormat,
}

impl Default for CombinedGasLaw {
    fn default() -> Self {
        Self {
            format: NumberFormat::STATE,
        }
    }
}

/// The quantity to solve for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unknown {
    P1,
    V1,
    T1,
    P2,
    V2,
    T2,
}

impl Unknown {
    /// Subscripted symbol, e.g. `"T₂"`.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::P1 => "P₁",
            Self::V1 => "V₁",
            Self::T1 => "T₁",
            Self::P2 => "P₂",
            Self::V2 => "V₂",
            Self::T2 => "T₂",
        }
    }
}

impl std::fmt::Display for Unknown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Fields for one side of the law.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateFields {
    pub pressure: Field<PressureUnit>,
    pub volume: Field<VolumeUnit>,
    pub temperature: Field<TemperatureUnit>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedGasForm {
    pub unknown: Unknown,
    pub initial: StateFields,
    pub final_state: StateFields,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CombinedGasOutput {
    pub initial: GasState,
    pub final_state: GasState,
    /// The unknown in the unit chosen for its field.
    pub result: Reading,
    /// `T₂ - T₁`.
    pub temperature_change: TemperatureInterval,
    pub steps: Recipe,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CombinedGasError {
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Names for each side's fields, used in error messages, and the unknowns
/// that side can hold in `P, V, T` order.
struct Names {
    label: &'static str,
    pressure: &'static str,
    volume: &'static str,
    temperature: &'static str,
    quantities: [Unknown; 3],
}

const INITIAL: Names = Names {
    label: "Initial",
    pressure: "P1",
    volume: "V1",
    temperature: "T1",
    quantities: [Unknown::P1, Unknown::V1, Unknown::T1],
};

const FINAL: Names = Names {
    label: "Final",
    pressure: "P2",
    volume: "V2",
    temperature: "T2",
    quantities: [Unknown::P2, Unknown::V2, Unknown::T2],
};

impl StateFields {
    fn read(&self, names: &Names) -> Result<GasState, InputError> {
        Ok(GasState::new(
            self.pressure.required::<StrictlyPositive>(names.pressure)?,
            self.volume.required::<StrictlyPositive>(names.volume)?,
            self.temperature(names)?,
        ))
    }

    fn temperature(&self, names: &Names) -> Result<ThermodynamicTemperature, InputError> {
        input::require(names.temperature, self.temperature.absolute(names.temperature)?)
    }
}

impl Model for CombinedGasLaw {
    type Input = CombinedGasForm;
    type Output = CombinedGasOutput;
    type Error = CombinedGasError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let fmt = &self.format;
        let (a, b) = (&input.initial, &input.final_state);
        let mut steps = Recipe::new();
        steps.push("P₁V₁ / T₁ = P₂V₂ / T₂");

        let (initial, final_state, result) = match input.unknown {
            Unknown::P1 | Unknown::V1 | Unknown::T1 => {
                let known = b.read(&FINAL)?;
                let solved = solve_side(input.unknown, a, &INITIAL, &known)?;
                let result = reading(input.unknown, a, &solved, fmt);
                (solved, known, result)
            }
            Unknown::P2 | Unknown::V2 | Unknown::T2 => {
                let known = a.read(&INITIAL)?;
                let solved = solve_side(input.unknown, b, &FINAL, &known)?;
                let result = reading(input.unknown, b, &solved, fmt);
                (known, solved, result)
            }
        };

        steps.push(substituted(&INITIAL, a, &initial, input.unknown, fmt));
        steps.push(substituted(&FINAL, b, &final_state, input.unknown, fmt));
        steps.push(match input.unknown {
            Unknown::P1 => "P₁ = P₂V₂T₁ / (T₂V₁)",
            Unknown::V1 => "V₁ = P₂V₂T₁ / (T₂P₁)",
            Unknown::T1 => "T₁ = P₁V₁T₂ / (P₂V₂)",
            Unknown::P2 => "P₂ = P₁V₁T₂ / (T₁V₂)",
            Unknown::V2 => "V₂ = P₁V₁T₂ / (T₁P₂)",
            Unknown::T2 => "T₂ = P₂V₂T₁ / (P₁V₁)",
        });
        let solved = match input.unknown {
            Unknown::P1 | Unknown::V1 | Unknown::T1 => &initial,
            Unknown::P2 | Unknown::V2 | Unknown::T2 => &final_state,
        };
        steps.push(format!(
            "{} = {result} ({})",
            input.unknown,
            si_reading(input.unknown, solved, fmt)
        ));

        let temperature_change = final_state.temperature.minus(initial.temperature);
        steps.push(format!(
            "ΔT = {} K",
            fmt.format(temperature_change.get::<delta_kelvin>())
        ));

        tracing::debug!(
            unknown = ?input.unknown,
            invariant = initial.invariant(),
            result = %result,
            "combined gas law solved"
        );

        Ok(CombinedGasOutput {
            initial,
            final_state,
            result,
            temperature_change,
            steps,
        })
    }
}

/// Solves the side holding the unknown from that side's two known fields.
fn solve_side(
    unknown: Unknown,
    fields: &StateFields,
    names: &Names,
    other: &GasState,
) -> Result<GasState, InputError> {
    Ok(match unknown {
        Unknown::P1 | Unknown::P2 => other.pressure_at(
            fields.volume.required::<StrictlyPositive>(names.volume)?,
            fields.temperature(names)?,
        ),
        Unknown::V1 | Unknown::V2 => other.volume_at(
            fields.pressure.required::<StrictlyPositive>(names.pressure)?,
            fields.temperature(names)?,
        ),
        Unknown::T1 | Unknown::T2 => other.temperature_at(
            fields.pressure.required::<StrictlyPositive>(names.pressure)?,
            fields.volume.required::<StrictlyPositive>(names.volume)?,
        ),
    })
}

/// One side's known values as entered, e.g. `Final: P₂ = 200 kPa, V₂ = 3 L`.
fn substituted(
    names: &Names,
    fields: &StateFields,
    state: &GasState,
    unknown: Unknown,
    fmt: &NumberFormat,
) -> String {
    let [p, v, t] = names.quantities;
    let values = [
        (p, Reading::of(state.pressure, fields.pressure.unit, fmt)),
        (v, Reading::of(state.volume, fields.volume.unit, fmt)),
        (t, Reading::of(state.temperature, fields.temperature.unit, fmt)),
    ];
    let known: Vec<String> = values
        .into_iter()
        .filter(|(quantity, _)| *quantity != unknown)
        .map(|(quantity, value)| format!("{quantity} = {value}"))
        .collect();
    format!("{}: {}", names.label, known.join(", "))
}

/// The unknown in SI units.
fn si_reading(unknown: Unknown, state: &GasState, fmt: &NumberFormat) -> Reading {
    match unknown {
        Unknown::P1 | Unknown::P2 => Reading::new(state.pressure.get::<pascal>(), "Pa", fmt),
        Unknown::V1 | Unknown::V2 => Reading::new(state.volume.get::<cubic_meter>(), "m³", fmt),
        Unknown::T1 | Unknown::T2 => Reading::new(state.temperature.get::<kelvin>(), "K", fmt),
    }
}

fn reading(unknown: Unknown, fields: &StateFields, state: &GasState, fmt: &NumberFormat) -> Reading {
    match unknown {
        Unknown::P1 | Unknown::P2 => Reading::of(state.pressure, fields.pressure.unit, fmt),
        Unknown::V1 | Unknown::V2 => Reading::of(state.volume, fields.volume.unit, fmt),
        Unknown::T1 | Unknown::T2 => Reading::of(state.temperature, fields.temperature.unit, fmt),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn fields(p: &str, v: &str, t: &str) -> StateFields {
        StateFields {
            pressure: Field::new(p, PressureUnit::Atmosphere),
            volume: Field::new(v, VolumeUnit::Liter),
            temperature: Field::new(t, TemperatureUnit::Celsius),
        }
    }

    fn law_holds(out: &CombinedGasOutput) {
        let lhs = out.initial.pressure.get::<pascal>() * out.initial.volume.get::<cubic_meter>()
            / out.initial.temperature.get::<kelvin>();
        let rhs = out.final_state.pressure.get::<pascal>()
            * out.final_state.volume.get::<cubic_meter>()
            / out.final_state.temperature.get::<kelvin>();
        assert_relative_eq!(lhs, rhs, max_relative = 1e-12);
    }

    #[test]
    fn law_holds_for_every_unknown() {
        let calc = CombinedGasLaw::default();
        for unknown in [
            Unknown::P1,
            Unknown::V1,
            Unknown::T1,
            Unknown::P2,
            Unknown::V2,
            Unknown::T2,
        ] {
            let form = CombinedGasForm {
                unknown,
                initial: fields("1", "10", "25"),
                final_state: fields("2.5", "6", "100"),
            };
            let out = calc.call(&form).unwrap();
            law_holds(&out);
        }
    }

    #[test]
    fn final_volume_in_display_units() {
        let form = CombinedGasForm {
            unknown: Unknown::V2,
            initial: fields("1", "22.4", "0"),
            final_state: fields("2", "", "0"),
        };
        let out = CombinedGasLaw::default().call(&form).unwrap();
        assert_relative_eq!(out.result.value, 11.2, max_relative = 1e-12);
        assert_eq!(out.result.to_string(), "11.2 L");
        assert_relative_eq!(out.temperature_change.get::<delta_kelvin>(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn final_temperature_in_celsius() {
        let form = CombinedGasForm {
            unknown: Unknown::T2,
            initial: fields("1", "1", "0"),
            final_state: fields("2", "1", ""),
        };
        let out = CombinedGasLaw::default().call(&form).unwrap();
        assert_relative_eq!(out.result.value, 273.15, max_relative = 1e-12);
        assert_eq!(out.result.unit, "°C");
        assert_relative_eq!(out.temperature_change.get::<delta_kelvin>(), 273.15, max_relative = 1e-12);
    }

    #[test]
    fn rejects_absolute_zero_and_blanks() {
        let calc = CombinedGasLaw::default();
        let frozen = CombinedGasForm {
            unknown: Unknown::P2,
            initial: fields("1", "1", "-300"),
            final_state: fields("", "1", "20"),
        };
        assert_eq!(
            calc.call(&frozen),
            Err(CombinedGasError::Input(InputError::AbsoluteZero { field: "T1" }))
        );

        let blank = CombinedGasForm {
            unknown: Unknown::P2,
            initial: fields("1", "", "20"),
            final_state: fields("", "1", "20"),
        };
        assert_eq!(
            calc.call(&blank),
            Err(CombinedGasError::Input(InputError::Missing { field: "V1" }))
        );
    }

    #[test]
    fn steps_show_entered_values() {
        let form = CombinedGasForm {
            unknown: Unknown::T2,
            initial: StateFields {
                pressure: Field::new("100", PressureUnit::Kilopascal),
                volume: Field::new("2", VolumeUnit::Liter),
                temperature: Field::new("300", TemperatureUnit::Kelvin),
            },
            final_state: StateFields {
                pressure: Field::new("200", PressureUnit::Kilopascal),
                volume: Field::new("3", VolumeUnit::Liter),
                temperature: Field::new("", TemperatureUnit::Kelvin),
            },
        };
        let out = CombinedGasLaw::default().call(&form).unwrap();
        assert_eq!(
            out.steps.lines(),
            [
                "P₁V₁ / T₁ = P₂V₂ / T₂",
                "Initial: P₁ = 100 kPa, V₁ = 2 L, T₁ = 300 K",
                "Final: P₂ = 200 kPa, V₂ = 3 L",
                "T₂ = P₂V₂T₁ / (P₁V₁)",
                "T₂ = 900 K (900 K)",
                "ΔT = 600 K",
            ]
        );
    }

    #[test]
    fn unknown_displays_subscript() {
        assert_eq!(Unknown::V1.to_string(), "V₁");
    }
}
