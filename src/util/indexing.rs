use crate::util::*;

/// Number of values stored for a square mesh with `n` nodes per side.
/// Callers validate `n` first, see `grid::check_dimension`.
pub fn buffer_size(n: usize) -> usize {
    n * n
}

/// Mesh spacing when `n` nodes span [0, 1] inclusive.
pub fn spacing(n: usize) -> f64 {
    debug_assert!(n >= 2);
    1.0 / (n - 1) as f64
}

/// Row-major linear index, row `i` is stored fully before row `i + 1`.
pub fn coord_to_linear(coord: &Coord, n: usize) -> usize {
    debug_assert!(coord[0] < n && coord[1] < n, "{coord:?} outside {n}x{n}");
    coord[0] * n + coord[1]
}

pub fn linear_to_coord(linear_index: usize, n: usize) -> Coord {
    vector![linear_index / n, linear_index % n]
}
