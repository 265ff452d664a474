//! Gay-Lussac's law, `P₁ / T₁ = P₂ / T₂` at constant volume.

mod core;

pub use self::core::{Isochoric, Known};

use thiserror::Error;
use twine_core::Model;
use uom::si::{pressure::pascal, thermodynamic_temperature::kelvin};

use crate::support::{
    constraint::StrictlyPositive,
    format::NumberFormat,
    input::{Field, InputError},
    recipe::{Reading, Recipe},
    units::{PressureUnit, TemperatureUnit},
};

/// Gay-Lussac's law calculator. Leave exactly one field blank.
#[derive(Debug, Clone, Copy)]
pub struct GayLussacsLaw {
    pub format: NumberFormat,
}

impl Default for GayLussacsLaw {
    fn default() -> Self {
        Self {
            format: NumberFormat::STATE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GayLussacForm {
    pub p1: Field<PressureUnit>,
    pub t1: Field<TemperatureUnit>,
    pub p2: Field<PressureUnit>,
    pub t2: Field<TemperatureUnit>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GayLussacOutput {
    pub gas: Isochoric,
    pub result: Reading,
    pub steps: Recipe,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GayLussacError {
    #[error(transparent)]
    Input(#[from] InputError),
}

impl Model for GayLussacsLaw {
    type Input = GayLussacForm;
    type Output = GayLussacOutput;
    type Error = GayLussacError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let fmt = &self.format;

        let p1 = input.p1.constrained::<StrictlyPositive>("P1")?;
        let t1 = input.t1.absolute("T1")?;
        let p2 = input.p2.constrained::<StrictlyPositive>("P2")?;
        let t2 = input.t2.absolute("T2")?;

        let mut steps = Recipe::new();
        steps.push("P₁ / T₁ = P₂ / T₂");

        let known = match (p1, t1, p2, t2) {
            (None, Some(t1), Some(p2), Some(t2)) => {
                steps.push("P₁ = P₂ × T₁ / T₂");
                Known::MissingP1 { t1, p2, t2 }
            }
            (Some(p1), None, Some(p2), Some(t2)) => {
                steps.push("T₁ = T₂ × P₁ / P₂");
                Known::MissingT1 { p1, p2, t2 }
            }
            (Some(p1), Some(t1), None, Some(t2)) => {
                steps.push("P₂ = P₁ × T₂ / T₁");
                Known::MissingP2 { p1, t1, t2 }
            }
            (Some(p1), Some(t1), Some(p2), None) => {
                steps.push("T₂ = T₁ × P₂ / P₁");
                Known::MissingT2 { p1, t1, p2 }
            }
            _ => {
                let filled = [p1.is_some(), t1.is_some(), p2.is_some(), t2.is_some()];
                tracing::debug!(?filled, "gay-lussac: wrong number of fields");
                return Err(InputError::field_count(3, &filled).into());
            }
        };

        let gas = self::core::solve(known);
        let [p1, t1, p2, t2] = [
            ("P₁", Reading::of(gas.p1, input.p1.unit, fmt)),
            ("T₁", Reading::of(gas.t1, input.t1.unit, fmt)),
            ("P₂", Reading::of(gas.p2, input.p2.unit, fmt)),
            ("T₂", Reading::of(gas.t2, input.t2.unit, fmt)),
        ];
        let (unknown, known_values) = match known {
            Known::MissingP1 { .. } => (p1, [t1, p2, t2]),
            Known::MissingT1 { .. } => (t1, [p1, p2, t2]),
            Known::MissingP2 { .. } => (p2, [p1, t1, t2]),
            Known::MissingT2 { .. } => (t2, [p1, t1, p2]),
        };
        let si = match known {
            Known::MissingP1 { .. } => Reading::new(gas.p1.get::<pascal>(), "Pa", fmt),
            Known::MissingT1 { .. } => Reading::new(gas.t1.get::<kelvin>(), "K", fmt),
            Known::MissingP2 { .. } => Reading::new(gas.p2.get::<pascal>(), "Pa", fmt),
            Known::MissingT2 { .. } => Reading::new(gas.t2.get::<kelvin>(), "K", fmt),
        };
        let known_values: Vec<String> = known_values
            .iter()
            .map(|(symbol, value)| format!("{symbol} = {value}"))
            .collect();
        steps.push(format!("Known: {}", known_values.join(", ")));
        let (symbol, result) = unknown;
        steps.push(format!("{symbol} = {result} ({si})"));
        steps.push(format!("P₂ / P₁ = T₂ / T₁ = {}", fmt.format(gas.ratio())));

        tracing::debug!(result = %result, ratio = gas.ratio(), "gay-lussac solved");

        Ok(GayLussacOutput { gas, result, steps })
    }
}
