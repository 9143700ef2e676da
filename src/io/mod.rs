//! Persisting fields.
//! The binary layout is a native-endian `i32` node count `n` followed by
//! `n * n` native-endian `f64` values, row `i` fully before row `i + 1`.

mod csv;
mod reader;
mod writer;

pub use csv::*;
pub use reader::*;
pub use writer::*;

/// Bytes used by the leading node count.
pub const HEADER_BYTES: usize = std::mem::size_of::<i32>();

/// Bytes used by every stored value.
pub const VALUE_BYTES: usize = std::mem::size_of::<f64>();

/// Exact size of the binary file for an `n` x `n` field.
pub fn field_file_size(n: usize) -> usize {
    HEADER_BYTES + VALUE_BYTES * n * n
}
