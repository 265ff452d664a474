use twine_solvers::equation::bisection;

/// Solver configuration for the Colebrook-White friction factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColebrookConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the friction factor.
    pub factor_tol: f64,

    /// Absolute tolerance on the implicit equation's residual.
    pub residual_tol: f64,
}

impl Default for ColebrookConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            factor_tol: 1e-12,
            residual_tol: 1e-10,
        }
    }
}

impl ColebrookConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.factor_tol,
            x_rel_tol: 0.0,
            residual_tol: self.residual_tol,
        }
    }
}
