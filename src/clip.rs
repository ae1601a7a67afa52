//! The tiled clipping figure (`clip_tiles.svg`).
//!
//! A grid of cells, some shaded light gray and some dark, with the clipping
//! polygon drawn on top. The shaded cells were picked by hand against a
//! reference image, so the tables below are data, not the output of a rule.

use std::io::{self, BufWriter, Write};

use crate::style::FigureStyle;
use crate::svg::SvgWriter;

const FIGURE_WIDTH: u32 = 600;
const FIGURE_HEIGHT: u32 = 400;

/// Cells shaded light gray, indexed by row then listing columns.
pub const GRAY: &[&[i32]] = &[
    &[2],
    &[1, 2, 3, 4, 8, 9, 10],
    &[1, 4, 5, 6, 7, 8, 10],
    &[1, 10],
    &[1, 2, 10, 11],
    &[2, 3, 11],
    &[3, 4, 5, 11],
    &[5, 6, 7, 8, 9, 11],
    &[9, 10, 11, 12],
];

/// Cells shaded dark. Drawn after `GRAY`, so a cell in both shows dark.
pub const BLACK: &[&[i32]] = &[
    &[],
    &[],
    &[2, 3, 9],
    &[2, 3, 4, 5, 6, 7, 8, 9],
    &[3, 4, 5, 6, 7, 8, 9],
    &[4, 5, 6, 7, 8, 9, 10],
    &[6, 7, 8, 9, 10],
    &[10],
];

/// Vertices of the closed clipping polygon, in figure coordinates.
pub const CLIP_PATH: &[(i32, i32)] = &[
    (60, 150),
    (100, 40),
    (250, 120),
    (420, 70),
    (495, 360),
    (180, 280),
];

/// Uniform square grid placed at an offset inside the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub cell: i32,
    pub cols: i32,
    pub rows: i32,
    pub x0: i32,
    pub y0: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cell: 40,
            cols: 14,
            rows: 9,
            x0: 10,
            y0: 10,
        }
    }
}

/// A straight segment `(x1, y1, x2, y2)`.
pub type Segment = (i32, i32, i32, i32);

impl Grid {
    /// Top-left corner of cell `(x, y)`.
    pub fn cell_origin(&self, x: i32, y: i32) -> (i32, i32) {
        (self.x0 + x * self.cell, self.y0 + y * self.cell)
    }

    pub fn width(&self) -> i32 {
        self.cols * self.cell
    }

    pub fn height(&self) -> i32 {
        self.rows * self.cell
    }

    pub fn vertical_lines(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..=self.cols).map(move |i| {
            let x = self.x0 + i * self.cell;
            (x, self.y0, x, self.y0 + self.height())
        })
    }

    pub fn horizontal_lines(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..=self.rows).map(move |i| {
            let y = self.y0 + i * self.cell;
            (self.x0, y, self.x0 + self.width(), y)
        })
    }
}

/// Serializes a closed polyline as `M x y L x y x y ... z` with no separators
/// beyond single spaces.
pub fn polygon_path_data(points: &[(i32, i32)]) -> String {
    let mut d = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        match i {
            0 => d.push('M'),
            1 => d.push('L'),
            _ => d.push(' '),
        }
        d.push_str(&format!("{} {}", x, y));
    }
    if !points.is_empty() {
        d.push('z');
    }
    d
}

pub struct ClipFigure {
    pub width: u32,
    pub height: u32,
    pub grid: Grid,
    pub style: FigureStyle,
}

impl Default for ClipFigure {
    fn default() -> Self {
        Self {
            width: FIGURE_WIDTH,
            height: FIGURE_HEIGHT,
            grid: Grid::default(),
            style: FigureStyle::default(),
        }
    }
}

impl ClipFigure {
    pub fn render<W: Write>(&self, out: W) -> io::Result<W> {
        let mut svg = SvgWriter::new(out);
        svg.header(self.width, self.height, &self.style.font_family)?;

        self.render_cells(&mut svg, GRAY, &self.style.gray_fill)?;
        self.render_cells(&mut svg, BLACK, &self.style.black_fill)?;

        for (x1, y1, x2, y2) in self
            .grid
            .vertical_lines()
            .chain(self.grid.horizontal_lines())
        {
            svg.line(x1, y1, x2, y2, &self.style.grid_stroke)?;
        }

        svg.path(
            &polygon_path_data(CLIP_PATH),
            &self.style.path_stroke,
            self.style.path_width,
        )?;
        svg.close()?;

        Ok(svg.into_inner())
    }

    fn render_cells<W: Write>(
        &self,
        svg: &mut SvgWriter<W>,
        table: &[&[i32]],
        fill: &str,
    ) -> io::Result<()> {
        let c = self.grid.cell;
        for (y, xs) in table.iter().enumerate() {
            for &x in xs.iter() {
                let (px, py) = self.grid.cell_origin(x, y as i32);
                svg.rect(px, py, c, c, fill)?;
            }
        }
        Ok(())
    }

    pub fn to_svg(&self) -> String {
        let bytes = self
            .render(Vec::new())
            .expect("writing to a Vec<u8> cannot fail");
        String::from_utf8(bytes).expect("SVG output is UTF-8")
    }
}

/// Writes `clip_tiles.svg` to stdout.
pub fn clip_tile_fig() -> io::Result<()> {
    let stdout = io::stdout();
    let out = ClipFigure::default().render(BufWriter::new(stdout.lock()))?;
    // BufWriter swallows flush errors on drop
    out.into_inner().map_err(|e| e.into_error())?.flush()
}
