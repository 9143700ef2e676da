//! Colour-mapped previews of a field.

use crate::error::SolverError;
use crate::grid::Grid;
use crate::util::*;

/// Map `value` from [min, max] onto [0, 1], a flat field maps to 0.
pub fn normalise(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range <= f64::EPSILON {
        0.0
    } else {
        ((value - min) / range).clamp(0.0, 1.0)
    }
}

/// One pixel per node, column `j` left to right and row `i` bottom to top,
/// coloured with the turbo gradient scaled to the field's own range.
pub fn field_image(grid: &Grid) -> image::RgbImage {
    let n = grid.n();
    let (min, max) = grid.min_max();
    let gradient = colorous::TURBO;
    let mut img = image::RgbImage::new(n as u32, n as u32);
    for (l, value) in grid.buffer().iter().enumerate() {
        let coord = linear_to_coord(l, n);
        let c = gradient.eval_continuous(normalise(*value, min, max));
        img.put_pixel(
            coord[1] as u32,
            (n - 1 - coord[0]) as u32,
            image::Rgb(c.as_array()),
        );
    }
    img
}

/// Save a preview, the format follows the file extension.
pub fn write_image<P: AsRef<std::path::Path>>(
    grid: &Grid,
    path: &P,
) -> Result<(), SolverError> {
    tracing::info!(path = ?path.as_ref(), "writing image");
    field_image(grid).save(path)?;
    Ok(())
}
