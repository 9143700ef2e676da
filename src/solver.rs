//! Convergence loop driving the relaxation sweeps.

use crate::boundary::*;
use crate::error::SolverError;
use crate::grid::Grid;
use crate::parameters::SolverParameters;
use crate::stencil::*;
use std::time::{Duration, Instant};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Running,
    /// A sweep changed the field by no more than the tolerance.
    Converged,
    /// `max_iterations` sweeps ran without converging.
    IterationCap,
}

/// Iteration count and latest aggregate change of a running solve.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ConvergenceState {
    pub iterations: usize,
    pub change: f64,
    pub tolerance: f64,
    pub status: Status,
}

impl ConvergenceState {
    pub fn new(tolerance: f64) -> Self {
        debug_assert!(tolerance > 0.0);
        ConvergenceState {
            iterations: 0,
            change: 0.0,
            tolerance,
            status: Status::Running,
        }
    }

    /// Record one sweep and move to `Converged` once the change is small.
    pub fn record(&mut self, change: f64) -> Status {
        debug_assert!(self.status == Status::Running);
        debug_assert!(change >= 0.0 || change.is_nan());
        self.iterations += 1;
        self.change = change;
        if change <= self.tolerance {
            self.status = Status::Converged;
        }
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolveReport {
    /// Aggregate change of the last sweep.
    pub change: f64,
    pub iterations: usize,
    /// Wall time of the whole loop.
    pub elapsed: Duration,
    pub status: Status,
}

impl SolveReport {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn seconds_per_iteration(&self) -> f64 {
        self.seconds() / self.iterations.max(1) as f64
    }

    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }

    pub fn print_report(&self) {
        println!(
            "Finished computing! Latest absolute change was: {}",
            self.change
        );
        println!("Total number of iterations on mesh: {}", self.iterations);
        println!("Total time spent: {} seconds", self.seconds());
        println!(
            "Total time per iteration: {} seconds",
            self.seconds_per_iteration()
        );
    }
}

/// Sweep until the aggregate change drops to the tolerance.
/// With no `max_iterations` this only returns on convergence, which may
/// never happen when the tolerance sits below floating point noise.
#[tracing::instrument(
    name = "relaxation",
    level = "info",
    skip_all,
    fields(n = grid.n(), tolerance = parameters.tolerance)
)]
pub fn relax<S: SourceFunction>(
    grid: &mut Grid,
    stencil: &PoissonStencil<S>,
    parameters: &SolverParameters,
) -> Result<SolveReport, SolverError> {
    parameters.validate()?;
    let mut state = ConvergenceState::new(parameters.tolerance);
    let start = Instant::now();
    while state.is_running() {
        let change = stencil.sweep(grid);
        state.record(change);
        if parameters.report_every > 0
            && state.iterations % parameters.report_every == 0
        {
            tracing::debug!(
                iterations = state.iterations,
                change = state.change,
                "relaxation progress"
            );
        }
        if state.is_running()
            && parameters.max_iterations == Some(state.iterations)
        {
            state.status = Status::IterationCap;
            tracing::warn!(
                iterations = state.iterations,
                change = state.change,
                "stopped at the iteration cap before converging"
            );
        }
    }
    let elapsed = start.elapsed();
    tracing::info!(
        iterations = state.iterations,
        change = state.change,
        seconds = elapsed.as_secs_f64(),
        "relaxation finished"
    );
    Ok(SolveReport {
        change: state.change,
        iterations: state.iterations,
        elapsed,
        status: state.status,
    })
}

/// Stamp the boundary once, then relax the interior.
pub fn solve_dirichlet<G: BoundaryFunction, S: SourceFunction>(
    grid: &mut Grid,
    g: &G,
    stencil: &PoissonStencil<S>,
    parameters: &SolverParameters,
) -> Result<SolveReport, SolverError> {
    apply_boundary(grid, g);
    relax(grid, stencil, parameters)
}
