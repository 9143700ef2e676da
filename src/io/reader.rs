use super::*;
use crate::error::SolverError;
use crate::grid::*;

/// Read a field written by `write_field`.
pub fn read_field<P: AsRef<std::path::Path>>(
    path: &P,
) -> Result<Grid, SolverError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| SolverError::io(path, e))?;
    decode_field(&bytes)
}

/// Parse the binary field layout, checking the header against the length.
pub fn decode_field(bytes: &[u8]) -> Result<Grid, SolverError> {
    if bytes.len() < HEADER_BYTES {
        return Err(SolverError::MalformedField(format!(
            "{} bytes is too short for the header",
            bytes.len()
        )));
    }
    let (header, payload) = bytes.split_at(HEADER_BYTES);
    let raw_n: i32 = bytemuck::pod_read_unaligned(header);
    let n = usize::try_from(raw_n).map_err(|_| {
        SolverError::MalformedField(format!("negative dimension {raw_n}"))
    })?;
    check_dimension(n)?;

    let expected = n
        .checked_mul(n)
        .and_then(|count| count.checked_mul(VALUE_BYTES));
    if expected != Some(payload.len()) {
        return Err(SolverError::MalformedField(format!(
            "{} payload bytes do not hold a {n}x{n} field",
            payload.len()
        )));
    }

    let buffer = payload
        .chunks_exact(VALUE_BYTES)
        .map(bytemuck::pod_read_unaligned::<f64>)
        .collect();
    Grid::from_buffer(n, buffer)
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn encode(n: i32, values: &[f64]) -> Vec<u8> {
        let mut bytes = n.to_ne_bytes().to_vec();
        for v in values {
            bytes.extend_from_slice(&v.to_ne_bytes());
        }
        bytes
    }

    #[test]
    fn decode_values() {
        let values = [1.0, -2.5, 3.25, f64::MIN_POSITIVE];
        let grid = decode_field(&encode(2, &values)).unwrap();
        assert_eq!(grid.n(), 2);
        assert_eq!(grid.buffer(), &values);
        assert_eq!(grid[(1, 0)], 3.25);
    }

    #[test]
    fn truncated() {
        assert!(matches!(
            decode_field(&[1, 2]),
            Err(SolverError::MalformedField(_))
        ));
        let mut bytes = encode(3, &[0.0; 9]);
        bytes.pop();
        assert!(matches!(
            decode_field(&bytes),
            Err(SolverError::MalformedField(_))
        ));
    }

    #[test]
    fn trailing_bytes() {
        let mut bytes = encode(2, &[0.0; 4]);
        bytes.push(0);
        assert!(matches!(
            decode_field(&bytes),
            Err(SolverError::MalformedField(_))
        ));
    }

    #[test]
    fn bad_header() {
        assert!(matches!(
            decode_field(&encode(-4, &[])),
            Err(SolverError::MalformedField(_))
        ));
        assert!(matches!(
            decode_field(&encode(1, &[0.0])),
            Err(SolverError::InvalidDimension { n: 1 })
        ));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_field(&dir.path().join("nothing.bin")),
            Err(SolverError::Io { .. })
        ));
    }
}
