const GRAY_FILL: &str = "#ccc";
const BLACK_FILL: &str = "#444";
const GRID_STROKE: &str = "#000";
const PATH_STROKE: &str = "#008";
const PATH_WIDTH: u32 = 2;
const FONT_FAMILY: &str = "Arial, sans-serif";

/// Colors and strokes used by the clipping figures
#[derive(Debug, Clone, PartialEq)]
pub struct FigureStyle {
    pub gray_fill: String,
    pub black_fill: String,
    pub grid_stroke: String,
    pub path_stroke: String,
    pub path_width: u32,
    pub font_family: String,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            gray_fill: GRAY_FILL.to_string(),
            black_fill: BLACK_FILL.to_string(),
            grid_stroke: GRID_STROKE.to_string(),
            path_stroke: PATH_STROKE.to_string(),
            path_width: PATH_WIDTH,
            font_family: FONT_FAMILY.to_string(),
        }
    }
}
