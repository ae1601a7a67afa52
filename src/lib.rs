pub mod clip;
pub mod style;
pub mod svg;

pub use clip::{ClipFigure, Grid, clip_tile_fig};
pub use style::FigureStyle;
