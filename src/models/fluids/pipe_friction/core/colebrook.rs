//! Iterative solver for the Colebrook-White friction factor.

mod config;
mod error;
mod problem;

pub use config::ColebrookConfig;
pub use error::ColebrookError;

use twine_solvers::equation::bisection;

use problem::{ColebrookModel, ColebrookProblem};

/// Bracket searched for the Darcy friction factor.
const BRACKET: [f64; 2] = [1e-5, 1.0];

/// Solves `1/√f = -2 log₁₀(ε/3.7 + 2.51/(Re √f))` for `f`.
///
/// # Errors
///
/// Returns [`ColebrookError`] if the bracket holds no root or the solver
/// stops before converging.
pub(super) fn solve(
    reynolds: f64,
    relative_roughness: f64,
    config: &ColebrookConfig,
) -> Result<f64, ColebrookError> {
    let model = ColebrookModel::new(reynolds, relative_roughness);

    let solution =
        bisection::solve_unobserved(&model, &ColebrookProblem, BRACKET, &config.bisection())?;

    if solution.status != bisection::Status::Converged {
        return Err(ColebrookError::NotConverged {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    tracing::trace!(iters = solution.iters, "colebrook converged");

    Ok(solution.snapshot.output.factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn residual(f: f64, re: f64, roughness: f64) -> f64 {
        1.0 / f.sqrt() + 2.0 * (roughness / 3.7 + 2.51 / (re * f.sqrt())).log10()
    }

    #[test]
    fn commercial_steel() {
        let f = solve(1e5, 1e-3, &ColebrookConfig::default()).unwrap();
        assert_relative_eq!(f, 0.022_174_536, max_relative = 1e-7);
        assert!(residual(f, 1e5, 1e-3).abs() < 1e-8);
    }

    #[test]
    fn satisfies_equation_across_regimes() {
        for re in [5e3, 5e4, 1e6, 1e8] {
            for roughness in [1e-6, 1e-4, 1e-2] {
                let f = solve(re, roughness, &ColebrookConfig::default()).unwrap();
                assert!(residual(f, re, roughness).abs() < 1e-8, "re={re} e={roughness}");
            }
        }
    }

    #[test]
    fn reports_non_convergence() {
        let config = ColebrookConfig {
            max_iters: 3,
            ..ColebrookConfig::default()
        };
        let err = solve(1e5, 1e-3, &config).unwrap_err();
        assert!(matches!(err, ColebrookError::NotConverged { .. }));
    }
}
