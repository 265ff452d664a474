//! Problem formulation for the implicit Colebrook-White equation.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};

/// A trial friction factor and how far it misses the equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Trial {
    pub(super) factor: f64,
    pub(super) residual: f64,
}

/// Evaluates `1/√f + 2 log₁₀(ε/3.7 + 2.51/(Re √f))` for a trial `f`.
///
/// The residual is positive for small `f` and falls monotonically.
pub(super) struct ColebrookModel {
    reynolds: f64,
    relative_roughness: f64,
}

impl ColebrookModel {
    pub(super) fn new(reynolds: f64, relative_roughness: f64) -> Self {
        Self {
            reynolds,
            relative_roughness,
        }
    }
}

impl Model for ColebrookModel {
    type Input = f64;
    type Output = Trial;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let root = input.sqrt();
        let log = (self.relative_roughness / 3.7 + 2.51 / (self.reynolds * root)).log10();
        Ok(Trial {
            factor: *input,
            residual: root.recip() + 2.0 * log,
        })
    }
}

/// Equation problem over the Darcy friction factor.
pub(super) struct ColebrookProblem;

impl EquationProblem<1> for ColebrookProblem {
    type Input = f64;
    type Output = Trial;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.residual])
    }
}
