use thiserror::Error;
use twine_solvers::equation::bisection;

/// Errors from solving the Colebrook-White equation.
#[derive(Debug, Error)]
pub enum ColebrookError {
    /// The bisection solver failed, e.g. the bracket holds no root.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("Colebrook equation did not converge: residual={residual}")]
    NotConverged {
        /// Smallest residual reached.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
