//! Coulomb's law for two point charges.
//!
//! Fill in exactly three of force, first charge, second charge and
//! separation. When a charge is unknown, only its magnitude follows from the
//! law; the chosen [`Interaction`] fixes its sign.

mod core;

pub use self::core::{ChargePair, Interaction, Known};

use thiserror::Error;
use twine_core::Model;

use crate::support::{
    constants::COULOMB_CONSTANT,
    constraint::{NonZero, StrictlyPositive},
    format::NumberFormat,
    input::{Field, InputError},
    recipe::{Reading, Recipe},
    units::{ChargeUnit, ForceUnit, LengthUnit},
};

/// Coulomb's law calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoulombsLaw {
    pub format: NumberFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoulombForm {
    pub force: Field<ForceUnit>,
    pub q1: Field<ChargeUnit>,
    pub q2: Field<ChargeUnit>,
    pub distance: Field<LengthUnit>,
    /// Sign hint for an unknown charge; repulsive when absent.
    pub interaction: Option<Interaction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoulombOutput {
    pub pair: ChargePair,
    pub interaction: Interaction,
    pub force: Reading,
    pub q1: Reading,
    pub q2: Reading,
    pub distance: Reading,
    pub steps: Recipe,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoulombError {
    #[error(transparent)]
    Input(#[from] InputError),
}

impl Model for CoulombsLaw {
    type Input = CoulombForm;
    type Output = CoulombOutput;
    type Error = CoulombError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let fmt = &self.format;

        let force = input.force.constrained::<StrictlyPositive>("force")?;
        let q1 = input.q1.constrained::<NonZero>("q1")?;
        let q2 = input.q2.constrained::<NonZero>("q2")?;
        let distance = input.distance.constrained::<StrictlyPositive>("distance")?;
        let interaction = input.interaction.unwrap_or_default();

        let mut steps = Recipe::new();
        let known = match (force, q1, q2, distance) {
            (None, Some(q1), Some(q2), Some(distance)) => {
                steps.push("F = k × |q₁ × q₂| / r²");
                Known::Force { q1, q2, distance }
            }
            (Some(force), None, Some(q2), Some(distance)) => {
                steps.push("|q₁| = F × r² / (k × |q₂|)");
                Known::Charge1 {
                    force,
                    q2,
                    distance,
                    interaction,
                }
            }
            (Some(force), Some(q1), None, Some(distance)) => {
                steps.push("|q₂| = F × r² / (k × |q₁|)");
                Known::Charge2 {
                    force,
                    q1,
                    distance,
                    interaction,
                }
            }
            (Some(force), Some(q1), Some(q2), None) => {
                steps.push("r = √(k × |q₁ × q₂| / F)");
                Known::Distance { force, q1, q2 }
            }
            _ => {
                let filled = [force.is_some(), q1.is_some(), q2.is_some(), distance.is_some()];
                tracing::debug!(?filled, "coulomb's law: wrong number of fields");
                return Err(InputError::field_count(3, &filled).into());
            }
        };

        let pair = self::core::solve(known);

        let force = Reading::of(pair.force, input.force.unit, fmt);
        let q1 = Reading::of(pair.q1, input.q1.unit, fmt);
        let q2 = Reading::of(pair.q2, input.q2.unit, fmt);
        let distance = Reading::of(pair.distance, input.distance.unit, fmt);
        steps.push(format!("k = {} N·m²/C²", fmt.format(COULOMB_CONSTANT)));
        steps.push(format!("F = {force}, q₁ = {q1}, q₂ = {q2}, r = {distance}"));

        let interaction = pair.interaction();
        steps.push(match interaction {
            Interaction::Attractive => "Opposite charges: the force is attractive",
            Interaction::Repulsive => "Like charges: the force is repulsive",
        });

        tracing::debug!(
            force_n = pair.force.value,
            distance_m = pair.distance.value,
            ?interaction,
            "coulomb's law solved"
        );

        Ok(CoulombOutput {
            pair,
            interaction,
            force,
            q1,
            q2,
            distance,
            steps,
        })
    }
}
