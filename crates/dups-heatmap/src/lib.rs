//! PNG heatmaps of pairwise similarity scores.

pub mod error;
pub mod render;

pub use error::{HeatmapError, Result};
pub use render::{heat_colour, render_heatmap, render_image};
