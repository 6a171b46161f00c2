use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeatmapError {
    #[error("Score grid is empty")]
    EmptyGrid,
    #[error("Invalid cell size: {0}")]
    InvalidCellSize(u32),
    #[error("Ragged grid: row {row} has {got} cells, expected {expected}")]
    RaggedGrid { row: usize, expected: usize, got: usize },
    #[error("Heatmap of {rows}x{cols} cells at {cell_size}px does not fit in an image")]
    TooLarge { rows: usize, cols: usize, cell_size: u32 },
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, HeatmapError>;
