use crate::error::SolverError;
use crate::grid::Grid;
use std::io::prelude::*;

/// One line per grid row, values separated by ", ".
pub fn write_csv<P: AsRef<std::path::Path>>(
    grid: &Grid,
    path: &P,
) -> Result<(), SolverError> {
    let path = path.as_ref();
    tracing::info!(?path, "writing csv");
    let file =
        std::fs::File::create(path).map_err(|e| SolverError::io(path, e))?;
    let mut output = std::io::BufWriter::new(file);
    write_rows(grid, &mut output).map_err(|e| SolverError::io(path, e))
}

fn write_rows<W: Write>(grid: &Grid, output: &mut W) -> std::io::Result<()> {
    for i in 0..grid.n() {
        let row = grid.row(i);
        write!(output, "{}", row[0])?;
        for r in &row[1..] {
            write!(output, ", {r}")?;
        }
        writeln!(output)?;
    }
    output.flush()
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn rows() {
        let grid = Grid::from_buffer(2, vec![0.25, 0.5, -1.0, 2.0]).unwrap();
        let mut output = Vec::new();
        write_rows(&grid, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "0.25, 0.5\n-1, 2\n");
    }

    #[test]
    fn to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("field.csv");
        let grid = Grid::new(3).unwrap();
        write_csv(&grid, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().all(|l| l == "0, 0, 0"));
    }
}
