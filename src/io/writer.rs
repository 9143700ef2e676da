use super::*;
use crate::error::SolverError;
use crate::grid::Grid;
use std::io::prelude::*;

/// Write `grid` to `path` in the binary field layout.
/// Returns the number of bytes written.
#[tracing::instrument(
    level = "info",
    skip_all,
    fields(path = ?path.as_ref(), n = grid.n())
)]
pub fn write_field<P: AsRef<std::path::Path>>(
    path: &P,
    grid: &Grid,
) -> Result<usize, SolverError> {
    profiling::scope!("field: write");
    let path = path.as_ref();
    let n = i32::try_from(grid.n())
        .map_err(|_| SolverError::InvalidDimension { n: grid.n() })?;

    let file = std::fs::File::create(path)
        .map_err(|e| SolverError::io(path, e))?;
    let mut output = std::io::BufWriter::new(file);
    write_payload(n, grid, &mut output)
        .map_err(|e| SolverError::io(path, e))?;

    let written = HEADER_BYTES + VALUE_BYTES * grid.buffer().len();
    tracing::debug!(bytes = written, "field written");
    Ok(written)
}

fn write_payload<W: Write>(
    n: i32,
    grid: &Grid,
    output: &mut W,
) -> std::io::Result<()> {
    output.write_all(bytemuck::bytes_of(&n))?;
    output.write_all(bytemuck::cast_slice(grid.buffer()))?;
    output.flush()
}
