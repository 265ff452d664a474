use thiserror::Error;
use uom::si::{f64::Force, ratio::ratio};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};

/// A zero coefficient of friction cannot support any normal force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("coefficient of friction is zero, so the normal force is undetermined")]
pub struct ZeroCoefficient;

/// The two quantities the user gave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Known {
    ForceAndNormal {
        friction_force: Constrained<Force, NonNegative>,
        normal_force: Constrained<Force, StrictlyPositive>,
    },
    CoefficientAndNormal {
        coefficient: Constrained<f64, NonNegative>,
        normal_force: Constrained<Force, StrictlyPositive>,
    },
    ForceAndCoefficient {
        friction_force: Constrained<Force, NonNegative>,
        coefficient: Constrained<f64, NonNegative>,
    },
}

/// A contact satisfying `F = μN`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub friction_force: Force,
    pub coefficient: f64,
    pub normal_force: Force,
}

/// Solves `F = μN` for the missing quantity.
///
/// # Errors
///
/// Returns [`ZeroCoefficient`] when solving for `N` with `μ = 0`.
pub fn solve(known: Known) -> Result<Contact, ZeroCoefficient> {
    match known {
        Known::ForceAndNormal {
            friction_force,
            normal_force,
        } => {
            let (f, n) = (friction_force.into_inner(), normal_force.into_inner());
            Ok(Contact {
                friction_force: f,
                coefficient: (f / n).get::<ratio>(),
                normal_force: n,
            })
        }
        Known::CoefficientAndNormal {
            coefficient,
            normal_force,
        } => {
            let (mu, n) = (coefficient.into_inner(), normal_force.into_inner());
            Ok(Contact {
                friction_force: n * mu,
                coefficient: mu,
                normal_force: n,
            })
        }
        Known::ForceAndCoefficient {
            friction_force,
            coefficient,
        } => {
            let (f, mu) = (friction_force.into_inner(), coefficient.into_inner());
            if mu == 0.0 {
                return Err(ZeroCoefficient);
            }
            Ok(Contact {
                friction_force: f,
                coefficient: mu,
                normal_force: f / mu,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::force::newton;

    fn force(n: f64) -> Force {
        Force::new::<newton>(n)
    }

    fn assert_law_holds(c: Contact) {
        assert_relative_eq!(
            c.friction_force.get::<newton>(),
            c.coefficient * c.normal_force.get::<newton>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn each_unknown_satisfies_law() {
        let cases = [
            Known::ForceAndNormal {
                friction_force: NonNegative::new(force(30.0)).unwrap(),
                normal_force: StrictlyPositive::new(force(100.0)).unwrap(),
            },
            Known::CoefficientAndNormal {
                coefficient: NonNegative::new(0.45).unwrap(),
                normal_force: StrictlyPositive::new(force(80.0)).unwrap(),
            },
            Known::ForceAndCoefficient {
                friction_force: NonNegative::new(force(12.0)).unwrap(),
                coefficient: NonNegative::new(0.6).unwrap(),
            },
        ];

        for known in cases {
            assert_law_holds(solve(known).unwrap());
        }
    }

    #[test]
    fn coefficient_from_forces() {
        let c = solve(Known::ForceAndNormal {
            friction_force: NonNegative::new(force(30.0)).unwrap(),
            normal_force: StrictlyPositive::new(force(100.0)).unwrap(),
        })
        .unwrap();
        assert_relative_eq!(c.coefficient, 0.3, epsilon = 1e-15);
    }

    #[test]
    fn zero_coefficient() {
        let known = Known::ForceAndCoefficient {
            friction_force: NonNegative::new(force(5.0)).unwrap(),
            coefficient: NonNegative::zero(),
        };
        assert_eq!(solve(known), Err(ZeroCoefficient));
    }
}
