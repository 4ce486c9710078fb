use super::solver::SolverOutcome;
use crate::common::AlmaPaths;
use crate::domain::AlmaResult;

/// Launches the external solver once the configuration and model file are in
/// place. `Err` is reserved for failures to start the solver at all; a solver
/// that ran and exited non-zero is reported through [`SolverOutcome`].
pub trait SolverBackend {
    fn run(&self, paths: &AlmaPaths) -> AlmaResult<SolverOutcome>;
}

impl<F> SolverBackend for F
where
    F: Fn(&AlmaPaths) -> AlmaResult<SolverOutcome>,
{
    fn run(&self, paths: &AlmaPaths) -> AlmaResult<SolverOutcome> {
        self(paths)
    }
}
