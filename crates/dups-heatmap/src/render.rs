use image::{ImageFormat, Rgb, RgbImage};
use std::path::Path;

use crate::error::{HeatmapError, Result};

const COLD: [f32; 3] = [0.0, 0.0, 139.0];
const WARM: [f32; 3] = [255.0, 255.0, 0.0];
const HOT: [f32; 3] = [255.0, 0.0, 0.0];

fn lerp(from: [f32; 3], to: [f32; 3], t: f32) -> Rgb<u8> {
    let channel = |k: usize| (from[k] + (to[k] - from[k]) * t).round() as u8;
    Rgb([channel(0), channel(1), channel(2)])
}

/// Colour for a score: dark blue at 0, yellow at 0.5, red at 1.
/// Scores outside `[0, 1]` are clamped; NaN is treated as 0.
pub fn heat_colour(score: f32) -> Rgb<u8> {
    let s = if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) };
    if s <= 0.5 {
        lerp(COLD, WARM, s * 2.0)
    } else {
        lerp(WARM, HOT, (s - 0.5) * 2.0)
    }
}

/// Paint `grid` with one `cell_size` square per score. Row `i` of the grid is
/// the `i`-th band from the top.
pub fn render_image(grid: &[Vec<f32>], cell_size: u32) -> Result<RgbImage> {
    if cell_size == 0 {
        return Err(HeatmapError::InvalidCellSize(cell_size));
    }
    let rows = grid.len();
    let cols = grid.first().map_or(0, Vec::len);
    if rows == 0 || cols == 0 {
        return Err(HeatmapError::EmptyGrid);
    }
    if let Some((row, r)) = grid.iter().enumerate().find(|(_, r)| r.len() != cols) {
        return Err(HeatmapError::RaggedGrid { row, expected: cols, got: r.len() });
    }

    let too_large = || HeatmapError::TooLarge { rows, cols, cell_size };
    let width = u32::try_from(cols).ok().and_then(|c| c.checked_mul(cell_size)).ok_or_else(too_large)?;
    let height = u32::try_from(rows).ok().and_then(|r| r.checked_mul(cell_size)).ok_or_else(too_large)?;

    Ok(RgbImage::from_fn(width, height, |x, y| {
        let i = (y / cell_size) as usize;
        let j = (x / cell_size) as usize;
        heat_colour(grid[i][j])
    }))
}

/// Render `grid` and write it to `path` as PNG.
pub fn render_heatmap(grid: &[Vec<f32>], cell_size: u32, path: &Path) -> Result<()> {
    let img = render_image(grid, cell_size)?;
    img.save_with_format(path, ImageFormat::Png)?;
    tracing::info!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "heatmap written"
    );
    Ok(())
}
