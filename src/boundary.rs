//! Dirichlet boundary values stamped onto the four edges of a grid.

use crate::grid::Grid;
use crate::util::*;

/// Pure boundary function g(x, y), only evaluated on edge nodes.
pub trait BoundaryFunction {
    fn value(&self, x: f64, y: f64) -> f64;
}

impl<F: Fn(f64, f64) -> f64> BoundaryFunction for F {
    fn value(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// Coordinates below this are treated as lying on the x = 0 or y = 0 edge.
pub const NEAR_EDGE: f64 = 0.0001;

/// Coordinates above this are treated as lying on the x = 1 or y = 1 edge.
pub const FAR_EDGE: f64 = 0.999;

fn on_edge(c: f64) -> bool {
    c.abs() < NEAR_EDGE || c.abs() > FAR_EDGE
}

/// (y - 0.5)^2 along the x edges, (x - 0.5)^2 along the y edges
/// and zero anywhere else.
pub fn quadratic_edges(x: f64, y: f64) -> f64 {
    if on_edge(x) {
        (y - 0.5) * (y - 0.5)
    } else if on_edge(y) {
        (x - 0.5) * (x - 0.5)
    } else {
        0.0
    }
}

fn stamp<G: BoundaryFunction>(grid: &mut Grid, g: &G, coord: Coord) {
    let p = grid.position(&coord);
    grid.set_coord(&coord, g.value(p[0], p[1]));
}

/// Overwrite row 0, row n-1, column 0 and column n-1, in that order.
/// Corners are visited by two passes and receive the same value each time.
/// Interior nodes are left untouched.
pub fn apply_boundary<G: BoundaryFunction>(grid: &mut Grid, g: &G) {
    profiling::scope!("boundary: apply");
    let n = grid.n();
    let last = n - 1;
    for j in 0..n {
        stamp(grid, g, vector![0, j]);
    }
    for j in 0..n {
        stamp(grid, g, vector![last, j]);
    }
    for i in 0..n {
        stamp(grid, g, vector![i, 0]);
    }
    for i in 0..n {
        stamp(grid, g, vector![i, last]);
    }
}
