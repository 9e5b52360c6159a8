//! Argand diagram rendering on a character grid.
//!
//! Each call draws a fresh view: axes through the origin, a ray from the
//! origin to each point, a marker at the point, and its label just above
//! the marker. Points are colored from the request's palette when `color`
//! is set.

use argand_eval::{PaletteColor, RenderRequest};

pub const DEFAULT_WIDTH: usize = 41;
pub const DEFAULT_HEIGHT: usize = 21;

const MARKER: char = 'o';
const RAY: char = '.';

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    color: Option<PaletteColor>,
}

impl Cell {
    const BLANK: Cell = Cell {
        ch: ' ',
        color: None,
    };
}

fn ansi_code(color: PaletteColor) -> u8 {
    match color {
        PaletteColor::Red => 31,
        PaletteColor::Blue => 34,
        PaletteColor::Green => 32,
        PaletteColor::Purple => 35,
    }
}

fn color_name(color: PaletteColor) -> &'static str {
    match color {
        PaletteColor::Red => "red",
        PaletteColor::Blue => "blue",
        PaletteColor::Green => "green",
        PaletteColor::Purple => "purple",
    }
}

struct Canvas {
    width: usize,
    height: usize,
    extent: f64,
    cells: Vec<Vec<Cell>>,
}

impl Canvas {
    fn new(width: usize, height: usize, extent: f64) -> Self {
        Canvas {
            width,
            height,
            extent,
            cells: vec![vec![Cell::BLANK; width]; height],
        }
    }

    fn column(&self, x: f64) -> usize {
        let t = (x + self.extent) / (2.0 * self.extent);
        ((t * (self.width - 1) as f64).round() as usize).min(self.width - 1)
    }

    fn row(&self, y: f64) -> usize {
        let t = (self.extent - y) / (2.0 * self.extent);
        ((t * (self.height - 1) as f64).round() as usize).min(self.height - 1)
    }

    fn set(&mut self, row: usize, col: usize, ch: char, color: Option<PaletteColor>) {
        if row < self.height && col < self.width {
            self.cells[row][col] = Cell { ch, color };
        }
    }

    fn draw_axes(&mut self) {
        let (r0, c0) = (self.row(0.0), self.column(0.0));
        for c in 0..self.width {
            self.set(r0, c, '-', None);
        }
        for r in 0..self.height {
            self.set(r, c0, '|', None);
        }
        self.set(r0, c0, '+', None);
    }

    /// Dotted segment from the origin up to (not including) the marker.
    fn draw_ray(&mut self, x: f64, y: f64, color: PaletteColor) {
        let (r0, c0) = (self.row(0.0) as f64, self.column(0.0) as f64);
        let (r1, c1) = (self.row(y) as f64, self.column(x) as f64);
        let steps = (r1 - r0).abs().max((c1 - c0).abs()) as usize;
        for i in 1..steps {
            let t = i as f64 / steps as f64;
            let r = (r0 + (r1 - r0) * t).round() as usize;
            let c = (c0 + (c1 - c0) * t).round() as usize;
            self.set(r, c, RAY, Some(color));
        }
    }

    /// Label on the row above the marker (below on the top row), ending at
    /// the marker column.
    fn draw_label(&mut self, row: usize, col: usize, label: &str, color: PaletteColor) {
        let len = label.chars().count();
        let label_row = if row > 0 { row - 1 } else { row + 1 };
        let start = (col + 1)
            .saturating_sub(len)
            .min(self.width.saturating_sub(len));
        for (i, ch) in label.chars().enumerate() {
            self.set(label_row, start + i, ch, Some(color));
        }
    }

    fn into_string(self, color: bool) -> String {
        let mut out = String::new();
        for row in self.cells {
            let mut line = String::new();
            for cell in row {
                match (color, cell.color) {
                    (true, Some(c)) => {
                        line.push_str(&format!("\x1b[{}m{}\x1b[0m", ansi_code(c), cell.ch))
                    }
                    _ => line.push(cell.ch),
                }
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

/// Render `request` as a text diagram of `width` x `height` cells.
pub fn render(request: &RenderRequest, width: usize, height: usize, color: bool) -> String {
    let width = width.max(3);
    let height = height.max(3);
    let reach = request
        .values()
        .map(|v| v.real.abs().max(v.imag.abs()))
        .filter(|m| m.is_finite())
        .fold(1.0_f64, f64::max);
    let mut canvas = Canvas::new(width, height, reach * 1.2);
    canvas.draw_axes();

    for point in &request.points {
        let v = point.value;
        if !(v.real.is_finite() && v.imag.is_finite()) {
            continue;
        }
        canvas.draw_ray(v.real, v.imag, point.color);
    }
    // Markers and labels go on top of every ray.
    for point in &request.points {
        let v = point.value;
        if !(v.real.is_finite() && v.imag.is_finite()) {
            continue;
        }
        let (row, col) = (canvas.row(v.imag), canvas.column(v.real));
        canvas.draw_label(row, col, &point.label, point.color);
        canvas.set(row, col, MARKER, Some(point.color));
    }

    let mut out = String::from("Plot of Complex Numbers\n");
    out.push_str(&format!("Imaginary (axis limit {})\n", trim_float(reach * 1.2)));
    out.push_str(&canvas.into_string(color));
    out.push_str("Real\n");
    for point in &request.points {
        out.push_str(&format!(
            "  {} {}\n",
            color_name(point.color),
            point.label
        ));
    }
    out
}

fn trim_float(v: f64) -> String {
    let s = format!("{:.2}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
