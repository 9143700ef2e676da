mod indexing;
pub use indexing::*;

pub use nalgebra::vector;

/// Mesh node index as (row, column), i.e. (i, j).
pub type Coord = nalgebra::SVector<usize, 2>;

/// Physical position (x, y) of a mesh node inside the unit square.
pub type Position = nalgebra::Vector2<f64>;
