use std::io::BufRead;
use std::path::Path;

use crate::error::InputError;
use crate::input::reader::open_maybe_gz;
use crate::model::PixelGrid;

const EIGHT_BIT_MAX: f64 = 255.0;

/// Reads a whitespace-separated intensity grid, one row per line.
///
/// Blank lines and `#` comments are skipped. A grid of whole numbers whose
/// maximum exceeds 1 is treated as 8-bit and scaled by 1/255; anything else
/// is passed through and range-checked by [`PixelGrid`].
pub fn load_pixel_grid(path: &Path) -> Result<PixelGrid, InputError> {
    let reader = open_maybe_gz(path)?;
    let rows = parse_rows(reader, path)?;
    Ok(PixelGrid::from_rows(rows)?)
}

pub fn parse_rows<R: BufRead>(reader: R, path: &Path) -> Result<Vec<Vec<f64>>, InputError> {
    let mut rows = Vec::new();
    let mut max = 0.0f64;
    let mut integral = true;
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut row = Vec::new();
        for token in line.split_whitespace() {
            let v: f64 = token.parse().map_err(|_| InputError::Parse {
                path: path.to_path_buf(),
                message: format!("line {}: invalid intensity {token:?}", line_no + 1),
            })?;
            max = max.max(v);
            integral &= v.fract() == 0.0;
            row.push(v);
        }
        rows.push(row);
    }

    if integral && max > 1.0 && max <= EIGHT_BIT_MAX {
        for row in &mut rows {
            for v in row.iter_mut() {
                *v /= EIGHT_BIT_MAX;
            }
        }
    }
    Ok(rows)
}
