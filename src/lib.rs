//! Finite-difference relaxation of the Poisson equation on the unit square
//! with Dirichlet boundaries.
//!
//! A [`grid::Grid`] holds the field, [`boundary::apply_boundary`] fixes the
//! edges once, [`solver::relax`] sweeps the interior with a
//! [`stencil::PoissonStencil`] until the change per sweep falls to the
//! tolerance, and [`io::write_field`] persists the result.

pub mod boundary;
pub mod build_info;
pub mod cli;
pub mod error;
pub mod grid;
pub mod io;
pub mod parameters;
pub mod render;
pub mod solver;
pub mod stencil;
pub mod telemetry;
pub mod util;
