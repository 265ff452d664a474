//! Sliding friction, `F = μN`.
//!
//! Exactly two of friction force, coefficient of friction and normal force
//! must be filled in; the third is computed.

mod core;

pub use self::core::{Contact, Known, ZeroCoefficient};

use thiserror::Error;
use twine_core::Model;

use crate::support::{
    constraint::{NonNegative, StrictlyPositive},
    format::NumberFormat,
    input::{self, Field, InputError},
    recipe::{Reading, Recipe},
    units::ForceUnit,
};

/// Friction calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Friction {
    pub format: NumberFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrictionForm {
    pub friction_force: Field<ForceUnit>,
    /// Dimensionless.
    pub coefficient: String,
    pub normal_force: Field<ForceUnit>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrictionOutput {
    pub contact: Contact,
    pub friction_force: Reading,
    pub coefficient: Reading,
    pub normal_force: Reading,
    pub steps: Recipe,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrictionError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    ZeroCoefficient(#[from] ZeroCoefficient),
}

impl Model for Friction {
    type Input = FrictionForm;
    type Output = FrictionOutput;
    type Error = FrictionError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let fmt = &self.format;

        let f = input
            .friction_force
            .constrained::<NonNegative>("friction force")?;
        let mu = input::number("coefficient", &input.coefficient)?
            .map(|mu| input::constrain::<NonNegative, _>("coefficient", mu))
            .transpose()?;
        let n = input
            .normal_force
            .constrained::<StrictlyPositive>("normal force")?;

        let mut steps = Recipe::new();
        let known = match (f, mu, n) {
            (Some(friction_force), None, Some(normal_force)) => {
                steps.push("μ = F / N");
                Known::ForceAndNormal {
                    friction_force,
                    normal_force,
                }
            }
            (None, Some(coefficient), Some(normal_force)) => {
                steps.push("F = μ × N");
                Known::CoefficientAndNormal {
                    coefficient,
                    normal_force,
                }
            }
            (Some(friction_force), Some(coefficient), None) => {
                steps.push("N = F / μ");
                Known::ForceAndCoefficient {
                    friction_force,
                    coefficient,
                }
            }
            _ => {
                let filled = [f.is_some(), mu.is_some(), n.is_some()];
                tracing::debug!(?filled, "friction: wrong number of fields");
                return Err(InputError::field_count(2, &filled).into());
            }
        };

        let contact = self::core::solve(known)?;

        let friction_force = Reading::of(contact.friction_force, input.friction_force.unit, fmt);
        let coefficient = Reading::plain(contact.coefficient, fmt);
        let normal_force = Reading::of(contact.normal_force, input.normal_force.unit, fmt);
        steps.push(format!(
            "{friction_force} = {coefficient} × {normal_force}"
        ));

        tracing::debug!(
            f_n = contact.friction_force.value,
            mu = contact.coefficient,
            n_n = contact.normal_force.value,
            "friction solved"
        );

        Ok(FrictionOutput {
            contact,
            friction_force,
            coefficient,
            normal_force,
            steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn form(f: &str, mu: &str, n: &str) -> FrictionForm {
        FrictionForm {
            friction_force: Field::new(f, ForceUnit::Newton),
            coefficient: mu.into(),
            normal_force: Field::new(n, ForceUnit::Newton),
        }
    }

    #[test]
    fn solves_missing_field() {
        let calc = Friction::default();

        let out = calc.call(&form("", "0.4", "250")).unwrap();
        assert_relative_eq!(out.friction_force.value, 100.0, epsilon = 1e-12);
        assert_eq!(out.steps.lines()[1], "100 N = 0.4 × 250 N");

        let out = calc.call(&form("100", "", "250")).unwrap();
        assert_relative_eq!(out.coefficient.value, 0.4, epsilon = 1e-15);

        let out = calc.call(&form("100", "0.4", "")).unwrap();
        assert_relative_eq!(out.normal_force.value, 250.0, epsilon = 1e-12);
    }

    #[test]
    fn mixed_units() {
        let input = FrictionForm {
            friction_force: Field::new("", ForceUnit::PoundForce),
            coefficient: "0.5".into(),
            normal_force: Field::new("1", ForceUnit::Kilonewton),
        };
        let out = Friction::default().call(&input).unwrap();
        assert_relative_eq!(out.friction_force.value, 500.0 / 4.448_22, max_relative = 1e-12);
        assert_eq!(out.friction_force.unit, "lb");
    }

    #[test]
    fn wrong_field_count() {
        assert_eq!(
            Friction::default().call(&form("1", "0.2", "5")),
            Err(FrictionError::Input(InputError::FieldCount {
                expected: 2,
                total: 3,
                filled: 3,
            }))
        );
        assert!(Friction::default().call(&form("", "", "5")).is_err());
    }

    #[test]
    fn zero_coefficient() {
        assert_eq!(
            Friction::default().call(&form("10", "0", "")),
            Err(FrictionError::ZeroCoefficient(ZeroCoefficient))
        );
    }
}
