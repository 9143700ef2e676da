//! The mesh of samples of u(x, y) over the unit square.
//! Values live in one contiguous row-major buffer,
//! node (i, j) sits at physical position (i * dx, j * dx).

use crate::error::SolverError;
use crate::util::*;

/// Smallest mesh with a defined spacing.
pub const MIN_DIMENSION: usize = 2;

/// Largest mesh the field header can describe, N is stored as an `i32`.
pub const MAX_DIMENSION: usize = i32::MAX as usize;

/// Reject meshes too small to have a spacing, or too large to address,
/// before anything is allocated.
pub fn check_dimension(n: usize) -> Result<(), SolverError> {
    let addressable = n
        .checked_mul(n)
        .and_then(|len| len.checked_mul(std::mem::size_of::<f64>()))
        .is_some_and(|bytes| bytes <= isize::MAX as usize);
    if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&n) || !addressable {
        return Err(SolverError::InvalidDimension { n });
    }
    Ok(())
}

/// Owned storage is released when the grid is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    n: usize,
    dx: f64,
    buffer: Vec<f64>,
}

impl Grid {
    /// Allocate an `n` x `n` mesh with every value set to zero.
    pub fn new(n: usize) -> Result<Self, SolverError> {
        check_dimension(n)?;
        let len = buffer_size(n);
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(len)
            .map_err(|_| SolverError::InvalidDimension { n })?;
        buffer.resize(len, 0.0);
        Ok(Grid {
            n,
            dx: spacing(n),
            buffer,
        })
    }

    /// Wrap an existing row-major buffer of `n * n` values.
    pub fn from_buffer(n: usize, buffer: Vec<f64>) -> Result<Self, SolverError> {
        check_dimension(n)?;
        if buffer.len() != buffer_size(n) {
            return Err(SolverError::MalformedField(format!(
                "expected {} values for a {n}x{n} grid, found {}",
                buffer_size(n),
                buffer.len()
            )));
        }
        Ok(Grid {
            n,
            dx: spacing(n),
            buffer,
        })
    }

    /// Nodes per side.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut [f64] {
        &mut self.buffer
    }

    #[track_caller]
    pub fn view(&self, coord: &Coord) -> f64 {
        self.buffer[coord_to_linear(coord, self.n)]
    }

    #[track_caller]
    pub fn set_coord(&mut self, coord: &Coord, value: f64) {
        let index = coord_to_linear(coord, self.n);
        self.buffer[index] = value;
    }

    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.n;
        &self.buffer[start..start + self.n]
    }

    pub fn position(&self, coord: &Coord) -> Position {
        vector![coord[0] as f64 * self.dx, coord[1] as f64 * self.dx]
    }

    pub fn is_boundary(&self, coord: &Coord) -> bool {
        let last = self.n - 1;
        coord[0] == 0 || coord[1] == 0 || coord[0] == last || coord[1] == last
    }

    /// All nodes in buffer order.
    pub fn coord_iter(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.buffer.len()).map(|l| linear_to_coord(l, self.n))
    }

    /// Interior nodes, rows outer and columns inner.
    pub fn interior_iter(&self) -> impl Iterator<Item = Coord> {
        let last = self.n - 1;
        (1..last).flat_map(move |i| (1..last).map(move |j| vector![i, j]))
    }

    /// Smallest and largest value in the field.
    pub fn min_max(&self) -> (f64, f64) {
        self.buffer
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(*v), hi.max(*v))
            })
    }
}

impl std::ops::Index<(usize, usize)> for Grid {
    type Output = f64;

    #[track_caller]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.buffer[coord_to_linear(&vector![i, j], self.n)]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Grid {
    #[track_caller]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.buffer[coord_to_linear(&vector![i, j], self.n)]
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn new_is_zeroed() {
        let grid = Grid::new(6).unwrap();
        assert_eq!(grid.n(), 6);
        assert_eq!(grid.buffer().len(), 36);
        assert!(grid.buffer().iter().all(|v| *v == 0.0));
        assert_approx_eq!(f64, grid.dx(), 0.2, ulps = 1);
    }

    #[test]
    fn degenerate_dimensions() {
        for n in [0, 1] {
            match Grid::new(n) {
                Err(SolverError::InvalidDimension { n: got }) => {
                    assert_eq!(got, n)
                }
                other => panic!("expected InvalidDimension, got {other:?}"),
            }
        }
        assert!(Grid::new(2).is_ok());
    }

    #[test]
    fn oversized_dimensions() {
        for n in [MAX_DIMENSION + 1, usize::MAX] {
            assert!(matches!(
                Grid::new(n),
                Err(SolverError::InvalidDimension { n: got }) if got == n
            ));
        }
        // Fits the header but not the address space.
        assert!(check_dimension(MAX_DIMENSION).is_err());
        assert!(check_dimension(4096).is_ok());
    }

    #[test]
    fn from_buffer_checks_length() {
        assert!(Grid::from_buffer(3, vec![0.0; 9]).is_ok());
        assert!(matches!(
            Grid::from_buffer(3, vec![0.0; 8]),
            Err(SolverError::MalformedField(_))
        ));
    }

    #[test]
    fn row_major_access() {
        let mut grid = Grid::new(4).unwrap();
        grid[(1, 2)] = 5.0;
        grid.set_coord(&vector![3, 0], 7.0);
        assert_eq!(grid.buffer()[6], 5.0);
        assert_eq!(grid.buffer()[12], 7.0);
        assert_eq!(grid.view(&vector![1, 2]), 5.0);
        assert_eq!(grid.row(3), &[7.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn position_test() {
        let grid = Grid::new(5).unwrap();
        let p = grid.position(&vector![0, 2]);
        assert_approx_eq!(f64, p[0], 0.0);
        assert_approx_eq!(f64, p[1], 0.5);
        let p = grid.position(&vector![4, 4]);
        assert_approx_eq!(f64, p[0], 1.0);
        assert_approx_eq!(f64, p[1], 1.0);
    }

    #[test]
    fn interior_order() {
        let grid = Grid::new(4).unwrap();
        let interior: Vec<Coord> = grid.interior_iter().collect();
        assert_eq!(
            interior,
            vec![vector![1, 1], vector![1, 2], vector![2, 1], vector![2, 2]]
        );
        assert!(interior.iter().all(|c| !grid.is_boundary(c)));
        assert_eq!(Grid::new(2).unwrap().interior_iter().count(), 0);
    }

    #[test]
    fn boundary_classification() {
        let grid = Grid::new(5).unwrap();
        let edges = grid.coord_iter().filter(|c| grid.is_boundary(c)).count();
        assert_eq!(edges, 16);
    }
}
