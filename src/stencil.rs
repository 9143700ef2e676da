//! Five-point discretization of the Poisson equation, solved for the
//! centre node and relaxed in place over the interior of a grid.

use crate::grid::Grid;
use crate::util::*;

/// Right-hand side f(x, y) of the Poisson equation laplace(u) = f.
pub trait SourceFunction {
    fn value(&self, x: f64, y: f64) -> f64;
}

impl<F: Fn(f64, f64) -> f64> SourceFunction for F {
    fn value(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// The solver's fixed source term, x^2 + y^2.
pub fn radial_source(x: f64, y: f64) -> f64 {
    x * x + y * y
}

pub struct PoissonStencil<S: SourceFunction> {
    source: S,
}

impl<S: SourceFunction> PoissonStencil<S> {
    pub fn new(source: S) -> Self {
        PoissonStencil { source }
    }

    /// Centre value satisfying the discrete Laplacian at `position`,
    /// given the neighbours (i-1, j), (i+1, j), (i, j-1), (i, j+1) in order.
    pub fn apply(&self, args: &[f64; 4], position: &Position, dx: f64) -> f64 {
        let c = args[0] + args[1] + args[2] + args[3];
        (c - self.source.value(position[0], position[1]) * dx * dx) / 4.0
    }

    fn gather_args(grid: &Grid, i: usize, j: usize) -> [f64; 4] {
        [
            grid[(i - 1, j)],
            grid[(i + 1, j)],
            grid[(i, j - 1)],
            grid[(i, j + 1)],
        ]
    }

    /// One relaxation sweep over every interior node.
    /// Rows are visited outer and columns inner, and each new value is
    /// written back immediately so later nodes in the same sweep read it.
    /// Boundary nodes are never written.
    /// Returns the sum of |old - new| over the interior.
    pub fn sweep(&self, grid: &mut Grid) -> f64 {
        profiling::scope!("poisson_stencil: sweep");
        let n = grid.n();
        let dx = grid.dx();
        let mut absolute_change = 0.0;
        for i in 1..n - 1 {
            for j in 1..n - 1 {
                let args = Self::gather_args(grid, i, j);
                let position = grid.position(&vector![i, j]);
                let old = grid[(i, j)];
                let new = self.apply(&args, &position, dx);
                grid[(i, j)] = new;
                absolute_change += (old - new).abs();
            }
        }
        absolute_change
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::boundary::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn apply_matches_formula() {
        let stencil = PoissonStencil::new(radial_source);
        let v = stencil.apply(&[1.0, 2.0, 3.0, 4.0], &vector![0.5, 0.5], 0.5);
        assert_approx_eq!(f64, v, (10.0 - 0.5 * 0.25) / 4.0);
    }

    #[test]
    fn harmonic_without_source() {
        let stencil = PoissonStencil::new(|_x: f64, _y: f64| 0.0);
        let v = stencil.apply(&[1.0, 1.0, 1.0, 1.0], &vector![0.3, 0.2], 0.1);
        assert_approx_eq!(f64, v, 1.0);
    }

    #[test]
    fn single_interior_node() {
        // n = 3, every edge neighbour of (1, 1) is zero under quadratic_edges.
        let mut grid = Grid::new(3).unwrap();
        apply_boundary(&mut grid, &quadratic_edges);
        let stencil = PoissonStencil::new(radial_source);
        let change = stencil.sweep(&mut grid);
        assert_approx_eq!(f64, grid[(1, 1)], -0.03125);
        assert_approx_eq!(f64, change, 0.03125);
        assert_eq!(stencil.sweep(&mut grid), 0.0);
    }

    #[test]
    fn sweep_is_in_place() {
        // With a constant boundary of 1 and no source, node (1, 2) must see
        // the value just written to (1, 1) during the same sweep.
        let mut grid = Grid::new(4).unwrap();
        apply_boundary(&mut grid, &|_x: f64, _y: f64| 1.0);
        let stencil = PoissonStencil::new(|_x: f64, _y: f64| 0.0);
        stencil.sweep(&mut grid);
        let first = 0.5;
        assert_approx_eq!(f64, grid[(1, 1)], first);
        assert_approx_eq!(f64, grid[(1, 2)], (first + 2.0) / 4.0);
        assert_approx_eq!(f64, grid[(2, 1)], (first + 2.0) / 4.0);
        assert_approx_eq!(f64, grid[(2, 2)], (2.0 * 0.625 + 2.0) / 4.0);
    }

    #[test]
    fn boundary_is_untouched() {
        let mut grid = Grid::new(9).unwrap();
        apply_boundary(&mut grid, &quadratic_edges);
        let before = grid.clone();
        let stencil = PoissonStencil::new(radial_source);
        for _ in 0..5 {
            assert!(stencil.sweep(&mut grid) >= 0.0);
        }
        for c in grid.coord_iter().filter(|c| grid.is_boundary(c)) {
            assert_eq!(grid.view(&c), before.view(&c));
        }
    }

    #[test]
    fn no_interior() {
        let mut grid = Grid::new(2).unwrap();
        let stencil = PoissonStencil::new(radial_source);
        assert_eq!(stencil.sweep(&mut grid), 0.0);
    }
}
