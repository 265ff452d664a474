//! Series RC circuits: time constant, charging curve, cutoff frequency and
//! impedance.

mod core;

pub use self::core::{Charging, Impedance, RcCircuit};

use thiserror::Error;
use twine_core::Model;
use uom::si::{
    angle::degree,
    electrical_resistance::ohm,
    frequency::{hertz, kilohertz},
    time::{microsecond, millisecond, second},
};

use crate::support::{
    constraint::{NonNegative, StrictlyPositive},
    format::NumberFormat,
    input::{Field, InputError},
    recipe::{Reading, Recipe},
    units::{CapacitanceUnit, FrequencyUnit, ResistanceUnit, TimeUnit, VoltageUnit},
};

/// RC circuit calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RcCircuitCalculator {
    pub format: NumberFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RcForm {
    TimeConstant {
        resistance: Field<ResistanceUnit>,
        capacitance: Field<CapacitanceUnit>,
    },
    Charging {
        supply: Field<VoltageUnit>,
        time: Field<TimeUnit>,
        resistance: Field<ResistanceUnit>,
        capacitance: Field<CapacitanceUnit>,
    },
    CutoffFrequency {
        resistance: Field<ResistanceUnit>,
        capacitance: Field<CapacitanceUnit>,
    },
    Impedance {
        frequency: Field<FrequencyUnit>,
        resistance: Field<ResistanceUnit>,
        capacitance: Field<CapacitanceUnit>,
    },
}

impl RcForm {
    fn components(&self) -> (&Field<ResistanceUnit>, &Field<CapacitanceUnit>) {
        match self {
            Self::TimeConstant {
                resistance,
                capacitance,
            }
            | Self::Charging {
                resistance,
                capacitance,
                ..
            }
            | Self::CutoffFrequency {
                resistance,
                capacitance,
            }
            | Self::Impedance {
                resistance,
                capacitance,
                ..
            } => (resistance, capacitance),
        }
    }
}

/// Mode-specific results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RcDetails {
    TimeConstant,
    Charging(Charging),
    CutoffFrequency(uom::si::f64::Frequency),
    Impedance(Impedance),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RcOutput {
    pub circuit: RcCircuit,
    pub details: RcDetails,
    /// The headline answer of the selected mode.
    pub result: Reading,
    /// τ in seconds.
    pub time_constant: Reading,
    pub steps: Recipe,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RcError {
    #[error(transparent)]
    Input(#[from] InputError),
}

impl Model for RcCircuitCalculator {
    type Input = RcForm;
    type Output = RcOutput;
    type Error = RcError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let fmt = &self.format;
        let (resistance, capacitance) = input.components();
        let circuit = RcCircuit::new(
            resistance.required::<StrictlyPositive>("resistance")?,
            capacitance.required::<StrictlyPositive>("capacitance")?,
        );
        let tau = circuit.time_constant();
        let time_constant = Reading::new(tau.get::<second>(), "s", fmt);

        let mut steps = Recipe::new();
        steps.push(format!(
            "R = {}, C = {}",
            Reading::of(circuit.resistance(), resistance.unit, fmt),
            Reading::of(circuit.capacitance(), capacitance.unit, fmt),
        ));
        steps.push(format!(
            "τ = R × C = {time_constant} = {} ms = {} μs",
            fmt.format(tau.get::<millisecond>()),
            fmt.format(tau.get::<microsecond>()),
        ));

        let (details, result) = match input {
            RcForm::TimeConstant { .. } => (RcDetails::TimeConstant, time_constant.clone()),
            RcForm::Charging { supply, time, .. } => {
                let state = circuit.charge(
                    supply.required::<NonNegative>("supply voltage")?,
                    time.required::<NonNegative>("time")?,
                );
                let voltage = Reading::of(state.voltage, supply.unit, fmt);
                steps.push("V(t) = V₀ × (1 - e^(-t/τ))");
                steps.push(format!(
                    "V(t) = {voltage} ({}% charge)",
                    fmt.format(state.fraction * 100.0)
                ));
                steps.push(format!(
                    "Time to 63.2% charge: {}",
                    Reading::of(state.time_to_63, time.unit, fmt)
                ));
                steps.push(format!(
                    "Time to 95% charge: {}",
                    Reading::of(state.time_to_95, time.unit, fmt)
                ));
                (RcDetails::Charging(state), voltage)
            }
            RcForm::CutoffFrequency { .. } => {
                let fc = circuit.cutoff_frequency();
                let khz = fc.get::<kilohertz>();
                let reading = if khz > 0.001 {
                    Reading::new(khz, "kHz", fmt)
                } else {
                    Reading::new(fc.get::<hertz>(), "Hz", fmt)
                };
                steps.push("f_c = 1 / (2πRC)");
                steps.push(format!("f_c = {reading}"));
                (RcDetails::CutoffFrequency(fc), reading)
            }
            RcForm::Impedance { frequency, .. } => {
                let z = circuit.impedance(frequency.required::<StrictlyPositive>("frequency")?);
                let magnitude = Reading::new(z.magnitude.get::<ohm>(), "Ω", fmt);
                steps.push(format!(
                    "X_c = 1 / (2πfC) = {} Ω",
                    fmt.format(z.reactance.get::<ohm>())
                ));
                steps.push(format!("Z = √(R² + X_c²) = {magnitude}"));
                steps.push(format!(
                    "φ = atan(-X_c / R) = {}° (negative means capacitive)",
                    fmt.format(z.phase.get::<degree>())
                ));
                (RcDetails::Impedance(z), magnitude)
            }
        };

        tracing::debug!(tau_s = tau.value, result = %result, "rc circuit solved");

        Ok(RcOutput {
            circuit,
            details,
            result,
            time_constant,
            steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn r(text: &str) -> Field<ResistanceUnit> {
        Field::new(text, ResistanceUnit::Kiloohm)
    }

    fn c(text: &str) -> Field<CapacitanceUnit> {
        Field::new(text, CapacitanceUnit::Microfarad)
    }

    #[test]
    fn time_constant() {
        let out = RcCircuitCalculator::default()
            .call(&RcForm::TimeConstant {
                resistance: r("10"),
                capacitance: c("100"),
            })
            .unwrap();
        assert_eq!(out.result.to_string(), "1 s");
        assert_eq!(out.details, RcDetails::TimeConstant);
    }

    #[test]
    fn charging() {
        let out = RcCircuitCalculator::default()
            .call(&RcForm::Charging {
                supply: Field::new("5", VoltageUnit::Volt),
                time: Field::new("3", TimeUnit::Second),
                resistance: r("10"),
                capacitance: c("100"),
            })
            .unwrap();
        assert_relative_eq!(out.result.value, 5.0 * (1.0 - (-3.0f64).exp()), max_relative = 1e-9);
        let RcDetails::Charging(state) = out.details else {
            panic!("expected charging details");
        };
        assert!(state.fraction > 0.95);
    }

    #[test]
    fn cutoff_switches_units() {
        let calc = RcCircuitCalculator::default();
        let audio = calc
            .call(&RcForm::CutoffFrequency {
                resistance: r("1"),
                capacitance: c("0.01"),
            })
            .unwrap();
        assert_eq!(audio.result.unit, "kHz");
        assert_relative_eq!(audio.result.value, 15.915_494_309, max_relative = 1e-9);

        let slow = calc
            .call(&RcForm::CutoffFrequency {
                resistance: r("1000"),
                capacitance: c("1000"),
            })
            .unwrap();
        assert_eq!(slow.result.unit, "Hz");
    }

    #[test]
    fn impedance() {
        let out = RcCircuitCalculator::default()
            .call(&RcForm::Impedance {
                frequency: Field::new("1", FrequencyUnit::Kilohertz),
                resistance: Field::new("100", ResistanceUnit::Ohm),
                capacitance: c("1"),
            })
            .unwrap();
        let xc = 1.0 / (2.0 * std::f64::consts::PI * 1000.0 * 1e-6);
        assert_relative_eq!(out.result.value, (100.0f64.powi(2) + xc * xc).sqrt(), max_relative = 1e-9);
        assert_eq!(out.result.unit, "Ω");
    }

    #[test]
    fn missing_capacitance() {
        assert_eq!(
            RcCircuitCalculator::default().call(&RcForm::TimeConstant {
                resistance: r("1"),
                capacitance: c(""),
            }),
            Err(RcError::Input(InputError::Missing {
                field: "capacitance"
            }))
        );
    }
}
